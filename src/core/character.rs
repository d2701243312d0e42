//! Character records and their projected stat view
//!
//! `Character` mirrors what the lookup service and the local roster file
//! actually send: ids come back as strings or integers depending on the
//! source, and powerstats are numeric strings that can degrade to the
//! literal `"null"`. `ProjectedCharacter` is the strict, flat view the rest
//! of the program works with.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tabled::Tabled;

use crate::error::{Error, Result};

/// A superhero record as delivered by either source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    /// Raw identifier. String from the API, integer from the local file,
    /// sometimes absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,

    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub powerstats: Option<Powerstats>,
}

/// The three tracked power statistics, raw.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Powerstats {
    #[serde(default)]
    pub intelligence: Option<Value>,
    #[serde(default)]
    pub strength: Option<Value>,
    #[serde(default)]
    pub speed: Option<Value>,
}

impl Character {
    /// Identifier as a string, for deduplication.
    ///
    /// A missing or null id stringifies to the literal `"None"`, so all
    /// id-less records collapse onto one identity. Documented behavior of
    /// the reconciler, kept observable on purpose.
    pub fn id_string(&self) -> String {
        match &self.id {
            None | Some(Value::Null) => "None".to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}

/// Immutable flat view of a character: identifier, name, and the three
/// tracked stats as plain integers. Created once per reconciled record.
#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct ProjectedCharacter {
    pub id: String,
    pub name: String,
    pub intelligence: u32,
    pub strength: u32,
    pub speed: u32,
}

impl ProjectedCharacter {
    /// Project a single record.
    ///
    /// `Ok(None)` means a stat is present but not numeric - the service's
    /// `"null"` sentinel - so the record cannot be charted, but the data
    /// set around it is still fine.
    ///
    /// # Errors
    /// `Error::Schema` if `powerstats` or a tracked stat field is absent
    /// entirely.
    pub fn from_character(character: &Character) -> Result<Option<Self>> {
        let record = record_label(character);

        let stats = character
            .powerstats
            .as_ref()
            .ok_or_else(|| Error::schema(record.as_str(), "powerstats"))?;

        let intelligence = stat_value(&record, "powerstats.intelligence", &stats.intelligence)?;
        let strength = stat_value(&record, "powerstats.strength", &stats.strength)?;
        let speed = stat_value(&record, "powerstats.speed", &stats.speed)?;

        match (intelligence, strength, speed) {
            (Stat::Value(intelligence), Stat::Value(strength), Stat::Value(speed)) => {
                Ok(Some(Self {
                    id: character.id_string(),
                    name: character.name.clone(),
                    intelligence,
                    strength,
                    speed,
                }))
            }
            _ => Ok(None),
        }
    }
}

/// Project a whole roster.
///
/// A record with an absent `powerstats` field or stat sub-field fails the
/// batch: that data set is unusable. A record whose stat is present but
/// non-numeric (the `"null"` sentinel) is kept out of the roster with a
/// warning; the rest stays usable.
pub fn project(records: &[Character]) -> Result<Vec<ProjectedCharacter>> {
    let mut roster = Vec::with_capacity(records.len());
    for character in records {
        match ProjectedCharacter::from_character(character)? {
            Some(projected) => roster.push(projected),
            None => tracing::warn!(
                record = %record_label(character),
                "skipping record with non-numeric powerstat"
            ),
        }
    }
    Ok(roster)
}

fn record_label(character: &Character) -> String {
    if character.name.is_empty() {
        character.id_string()
    } else {
        character.name.clone()
    }
}

enum Stat {
    Value(u32),
    NonNumeric,
}

fn stat_value(record: &str, field: &str, value: &Option<Value>) -> Result<Stat> {
    let value = value.as_ref().ok_or_else(|| Error::schema(record, field))?;
    let parsed = match value {
        Value::Number(n) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
        Value::String(s) => s.trim().parse::<u32>().ok(),
        _ => None,
    };
    Ok(parsed.map_or(Stat::NonNumeric, Stat::Value))
}

#[cfg(test)]
pub(crate) fn character_from_json(value: serde_json::Value) -> Character {
    serde_json::from_value(value).unwrap()
}
