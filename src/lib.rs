//! herostats - superhero roster explorer
//!
//! Fetches superhero records from a remote lookup service and a local JSON
//! roster, reconciles them by id, and explores them interactively: stat
//! charts per selected character plus optional AI portrait generation.
//!
//! # Key concepts
//!
//! - **Reconciliation**: remote records win over local ones on id collision;
//!   first-seen order is preserved.
//! - **Projection**: the strict flat view (`ProjectedCharacter`) the
//!   interactive loop works with; a record missing stats aborts startup.
//! - **Non-fatal portraits**: image generation failures are logged and
//!   swallowed, the loop keeps going.

pub mod chart;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod image;
pub mod remote;

#[cfg(test)]
pub(crate) mod testhttp;

pub use crate::config::Config;
pub use crate::core::character::{Character, ProjectedCharacter};
pub use crate::error::{Error, Result};
pub use crate::image::ImageGenerator;
pub use crate::remote::LookupClient;
