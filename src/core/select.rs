//! Interactive roster lookup
//!
//! Linear scan, exact case-sensitive name match, first match wins. A miss
//! is `None`, not an error; the CLI loop reports it and re-prompts.

use crate::core::character::ProjectedCharacter;

/// Find the first character whose name equals `query` exactly.
pub fn select<'a>(
    records: &'a [ProjectedCharacter],
    query: &str,
) -> Option<&'a ProjectedCharacter> {
    records.iter().find(|c| c.name == query)
}
