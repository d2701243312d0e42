//! Core domain: character records, reconciliation, projection, selection.

pub mod character;
pub mod local;
pub mod reconcile;
pub mod select;
