//! Small line-oriented widgets composed by the dashboard.

pub mod action_panel;
pub mod header;
pub mod tile_card;
pub mod upload_card;
