//! Record reconciliation
//!
//! Merges two rosters, deduplicating by stringified id. Primary records are
//! walked first, so on an id collision the primary version survives. Output
//! order is first-seen order across the concatenation.

use std::collections::HashSet;

use crate::core::character::Character;

/// Merge `primary` then `secondary`, keeping the first record seen per id.
///
/// Records without an id all stringify to `"None"` and therefore collapse
/// to a single survivor. That matches the upstream data contract and is
/// deliberately not special-cased.
pub fn reconcile(primary: Vec<Character>, secondary: Vec<Character>) -> Vec<Character> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut merged = Vec::with_capacity(primary.len() + secondary.len());

    for record in primary.into_iter().chain(secondary) {
        if seen.insert(record.id_string()) {
            merged.push(record);
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::character::character_from_json;
    use serde_json::json;

    fn hero(id: serde_json::Value, name: &str) -> Character {
        character_from_json(json!({"id": id, "name": name}))
    }

    fn names(records: &[Character]) -> Vec<String> {
        records.iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn test_primary_wins_on_duplicate_id() {
        let primary = vec![hero(json!("1"), "Remote A-Bomb")];
        let secondary = vec![hero(json!("1"), "Local A-Bomb"), hero(json!("2"), "Abe")];

        let merged = reconcile(primary, secondary);
        assert_eq!(names(&merged), ["Remote A-Bomb", "Abe"]);
    }

    #[test]
    fn test_integer_and_string_ids_compare_as_strings() {
        let primary = vec![hero(json!("3"), "From API")];
        let secondary = vec![hero(json!(3), "From file")];

        let merged = reconcile(primary, secondary);
        assert_eq!(names(&merged), ["From API"]);
    }

    #[test]
    fn test_first_seen_order_is_preserved() {
        let primary = vec![hero(json!("2"), "b"), hero(json!("1"), "a")];
        let secondary = vec![hero(json!("3"), "c"), hero(json!("2"), "dup")];

        let merged = reconcile(primary, secondary);
        assert_eq!(names(&merged), ["b", "a", "c"]);
    }

    #[test]
    fn test_idempotent() {
        let primary = vec![hero(json!("1"), "a"), hero(json!("2"), "b")];
        let secondary = vec![hero(json!("2"), "dup"), hero(json!("3"), "c")];

        let once = reconcile(primary, secondary);
        let twice = reconcile(once.clone(), Vec::new());

        assert_eq!(names(&once), names(&twice));
        assert_eq!(once.len(), twice.len());
    }

    #[test]
    fn test_missing_ids_collapse_onto_none_sentinel() {
        let primary = vec![character_from_json(json!({"name": "ghost one"}))];
        let secondary = vec![
            character_from_json(json!({"name": "ghost two"})),
            character_from_json(json!({"id": null, "name": "ghost three"})),
        ];

        let merged = reconcile(primary, secondary);
        assert_eq!(names(&merged), ["ghost one"]);
        assert_eq!(merged[0].id_string(), "None");
    }
}
