//! Shared domain types for the yard reconciler.
//!
//! Holds the record and report model, the error enum, CLI settings, the
//! numeric coercion helpers and the tile display metadata used by every
//! other crate in the workspace.

pub mod error;
pub mod formatting;
pub mod models;
pub mod numeric;
pub mod settings;
pub mod tiles;
