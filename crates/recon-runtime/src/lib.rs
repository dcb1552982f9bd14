//! Runtime state layer for the yard reconciler.
//!
//! Owns the reconciliation session (both dataset slots and the last good
//! outcome), the action-panel status model and the clipboard sinks the
//! summary is exported through.

pub mod clipboard;
pub mod session;
pub mod status;

pub use recon_core as core;
pub use recon_data as data;
