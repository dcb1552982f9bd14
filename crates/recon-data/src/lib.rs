//! Parsing and reconciliation layer for the yard reconciler.
//!
//! Turns raw CSV exports into [`Dataset`](recon_core::models::Dataset)s,
//! computes the YMS metrics report, finds Dock Dash records with no YMS
//! counterpart and assembles the clipboard summary.

pub mod loader;
pub mod metrics;
pub mod reader;
pub mod reconciler;

pub use recon_core as core;
