//! Chart rendering
//!
//! Renders a selected character's stats as PNG files: a bar + pie panel and
//! a radar profile. The `ChartRenderer` trait is the seam; `PlottersRenderer`
//! is the bitmap-backed implementation.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use plotters::element::Pie;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::core::character::ProjectedCharacter;
use crate::image::safe_file_stem;

const STATS: [&str; 3] = ["intelligence", "strength", "speed"];
const STAT_COLORS: [RGBColor; 3] = [GREEN, RED, BLUE];

/// Renders charts for one character, returning the written file paths.
pub trait ChartRenderer {
    fn render(&self, character: &ProjectedCharacter) -> Result<Vec<PathBuf>>;
}

/// Bitmap chart renderer writing PNG files into a directory.
#[derive(Debug, Clone)]
pub struct PlottersRenderer {
    output_dir: PathBuf,
}

impl PlottersRenderer {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }
}

impl ChartRenderer for PlottersRenderer {
    fn render(&self, character: &ProjectedCharacter) -> Result<Vec<PathBuf>> {
        let stem = safe_file_stem(&character.name);
        let stats_path = self.output_dir.join(format!("{stem}_stats.png"));
        let radar_path = self.output_dir.join(format!("{stem}_radar.png"));

        draw_stat_panels(&stats_path, character)
            .map_err(|e| anyhow!("failed to draw {}: {e}", stats_path.display()))?;
        draw_radar(&radar_path, character)
            .map_err(|e| anyhow!("failed to draw {}: {e}", radar_path.display()))?;

        Ok(vec![stats_path, radar_path])
    }
}

type DrawResult = std::result::Result<(), Box<dyn std::error::Error>>;

fn stat_values(character: &ProjectedCharacter) -> [u32; 3] {
    [character.intelligence, character.strength, character.speed]
}

/// Bar chart on the left, pie chart on the right, one PNG.
fn draw_stat_panels(path: &Path, character: &ProjectedCharacter) -> DrawResult {
    let root = BitMapBackend::new(path, (1240, 640)).into_drawing_area();
    root.fill(&WHITE)?;
    let (left, right) = root.split_horizontally(640);

    let values = stat_values(character);

    let mut chart = ChartBuilder::on(&left)
        .caption(
            format!("{} powerstats", character.name),
            ("sans-serif", 28),
        )
        .margin(20)
        .x_label_area_size(30)
        .y_label_area_size(45)
        .build_cartesian_2d(0f64..3f64, 0f64..115f64)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_label_formatter(&|_| String::new())
        .y_desc("value")
        .draw()?;

    let bar_label = TextStyle::from(("sans-serif", 18).into_font())
        .pos(Pos::new(HPos::Center, VPos::Bottom));

    for (i, (&value, color)) in values.iter().zip(STAT_COLORS).enumerate() {
        let x0 = i as f64 + 0.15;
        let x1 = i as f64 + 0.85;
        chart.draw_series(std::iter::once(Rectangle::new(
            [(x0, 0.0), (x1, f64::from(value))],
            color.filled(),
        )))?;
        chart.draw_series(std::iter::once(Text::new(
            format!("{} ({value})", STATS[i]),
            (i as f64 + 0.5, f64::from(value) + 3.0),
            bar_label.clone(),
        )))?;
    }

    // A pie of three zeros has no angles to draw; leave the panel blank.
    let sizes: Vec<f64> = values.iter().map(|&v| f64::from(v)).collect();
    if sizes.iter().sum::<f64>() > 0.0 {
        let labels: Vec<String> = STATS.iter().map(|s| s.to_string()).collect();
        let colors = STAT_COLORS;
        let center = (300, 330);
        let radius = 240.0;

        let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
        pie.start_angle(-90.0);
        pie.label_style(("sans-serif", 18).into_font());
        pie.percentages(("sans-serif", 15).into_font());
        right.draw(&pie)?;
    }

    root.present()?;
    Ok(())
}

/// Triangular radar profile, one axis per stat, 0-100 scale.
fn draw_radar(path: &Path, character: &ProjectedCharacter) -> DrawResult {
    let root = BitMapBackend::new(path, (720, 720)).into_drawing_area();
    root.fill(&WHITE)?;

    let values = stat_values(character);

    let mut chart = ChartBuilder::on(&root)
        .caption(format!("{} profile", character.name), ("sans-serif", 28))
        .margin(20)
        .build_cartesian_2d(-150f64..150f64, -150f64..150f64)?;

    for ring in [25.0, 50.0, 75.0, 100.0] {
        let mut points: Vec<(f64, f64)> = (0..STATS.len()).map(|i| spoke_point(i, ring)).collect();
        points.push(points[0]);
        chart.draw_series(std::iter::once(PathElement::new(points, BLACK.mix(0.2))))?;
    }

    let axis_label = TextStyle::from(("sans-serif", 18).into_font())
        .pos(Pos::new(HPos::Center, VPos::Center));

    for (i, stat) in STATS.iter().enumerate() {
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(0.0, 0.0), spoke_point(i, 100.0)],
            BLACK.mix(0.4),
        )))?;
        chart.draw_series(std::iter::once(Text::new(
            format!("{stat} ({})", values[i]),
            spoke_point(i, 128.0),
            axis_label.clone(),
        )))?;
    }

    let profile: Vec<(f64, f64)> = values
        .iter()
        .enumerate()
        .map(|(i, &v)| spoke_point(i, f64::from(v)))
        .collect();
    chart.draw_series(std::iter::once(Polygon::new(
        profile.clone(),
        BLUE.mix(0.3),
    )))?;

    let mut outline = profile;
    outline.push(outline[0]);
    chart.draw_series(std::iter::once(PathElement::new(
        outline,
        BLUE.stroke_width(2),
    )))?;

    root.present()?;
    Ok(())
}

fn spoke_point(index: usize, r: f64) -> (f64, f64) {
    let angle = std::f64::consts::FRAC_PI_2 - index as f64 * std::f64::consts::TAU / 3.0;
    (r * angle.cos(), r * angle.sin())
}
