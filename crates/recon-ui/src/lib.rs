//! Terminal UI layer for the yard reconciler.
//!
//! Provides themes, the header, upload card, tile and action-panel
//! components, the dashboard and detail views, the path prompt, and the
//! application event loop built on top of [`ratatui`].

pub mod app;
pub mod components;
pub mod dashboard;
pub mod detail_view;
pub mod prompt;
pub mod themes;

pub use recon_core as core;
pub use recon_runtime as runtime;
