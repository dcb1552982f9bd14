//! Reconciliation session state.
//!
//! [`ReconSession`] is the single owner of everything that outlives one user
//! action: the YMS and Dock Dash slots and the last successful outcome.  It
//! is created once per run and mutated only from the main event loop.
//!
//! Failure policy:
//! - a failed load resets that slot to unloaded and leaves the other slot
//!   alone;
//! - a failed reconciliation keeps the previous outcome, so detail lookups
//!   keep working against the last good report.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use recon_core::error::{ReconError, Result};
use recon_core::formatting::plural;
use recon_core::models::{Dataset, ReconOutcome, RecordRef};
use recon_core::tiles::Tile;
use recon_data::loader::{display_name, load_dataset, load_dataset_from_text};
use recon_data::reconciler::reconcile;

use crate::clipboard::ClipboardSink;
use crate::status::ActionStatus;

// ── Slots ─────────────────────────────────────────────────────────────────────

/// Which export a dataset slot holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Yms,
    DockDash,
}

impl Slot {
    pub fn label(self) -> &'static str {
        match self {
            Slot::Yms => "YMS",
            Slot::DockDash => "Dock Dash",
        }
    }
}

/// A successfully parsed export.
#[derive(Debug, Clone)]
pub struct LoadedDataset {
    pub path: PathBuf,
    pub dataset: Dataset,
    pub loaded_at: DateTime<Local>,
}

impl LoadedDataset {
    pub fn file_name(&self) -> String {
        display_name(&self.path)
    }

    /// Card text, e.g. `"Loaded yms.csv (120 records)"`.
    pub fn status_line(&self) -> String {
        format!(
            "Loaded {} ({})",
            self.file_name(),
            plural(self.dataset.len(), "record")
        )
    }
}

/// Contents of one slot: the loaded export, or the reason the last load
/// failed.
#[derive(Debug, Clone, Default)]
pub struct SlotState {
    loaded: Option<LoadedDataset>,
    error: Option<String>,
}

impl SlotState {
    pub fn loaded(&self) -> Option<&LoadedDataset> {
        self.loaded.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.is_some()
    }
}

/// Result of asking for a tile's records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailLookup<'a> {
    Records(&'a [RecordRef]),
    /// Nothing to show: no report yet, an empty bucket, or a derived tile.
    NoRecords,
}

// ── ReconSession ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct ReconSession {
    yms: SlotState,
    dock_dash: SlotState,
    last_outcome: Option<ReconOutcome>,
    status: ActionStatus,
}

impl Default for ReconSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ReconSession {
    pub fn new() -> Self {
        Self {
            yms: SlotState::default(),
            dock_dash: SlotState::default(),
            last_outcome: None,
            status: ActionStatus::Awaiting,
        }
    }

    // ── Slots ─────────────────────────────────────────────────────────────

    pub fn slot(&self, slot: Slot) -> &SlotState {
        match slot {
            Slot::Yms => &self.yms,
            Slot::DockDash => &self.dock_dash,
        }
    }

    fn slot_mut(&mut self, slot: Slot) -> &mut SlotState {
        match slot {
            Slot::Yms => &mut self.yms,
            Slot::DockDash => &mut self.dock_dash,
        }
    }

    /// Parsed dataset held by `slot`, if loaded.
    pub fn dataset(&self, slot: Slot) -> Option<&Dataset> {
        self.slot(slot).loaded().map(|l| &l.dataset)
    }

    /// Read, parse and store the export at `path` in `slot`.
    pub async fn load(&mut self, slot: Slot, path: &Path) -> Result<&LoadedDataset> {
        let result = load_dataset(path).await;
        self.store(slot, path, result)
    }

    /// Parse already-read `text` into `slot`.
    pub fn load_text(&mut self, slot: Slot, path: &Path, text: &str) -> Result<&LoadedDataset> {
        let result = load_dataset_from_text(path, text);
        self.store(slot, path, result)
    }

    /// Unload `slot`.
    pub fn clear(&mut self, slot: Slot) {
        *self.slot_mut(slot) = SlotState::default();
        self.status = ActionStatus::for_loading(self.is_ready());
    }

    /// Both slots hold a non-empty dataset.
    pub fn is_ready(&self) -> bool {
        self.yms.is_loaded() && self.dock_dash.is_loaded()
    }

    fn store(
        &mut self,
        slot: Slot,
        path: &Path,
        result: Result<Dataset>,
    ) -> Result<&LoadedDataset> {
        match result {
            Ok(dataset) => {
                tracing::info!(
                    slot = slot.label(),
                    records = dataset.len(),
                    "dataset stored"
                );
                let loaded = LoadedDataset {
                    path: path.to_path_buf(),
                    dataset,
                    loaded_at: Local::now(),
                };
                self.status = ActionStatus::for_loading(
                    self.slot(other(slot)).is_loaded(),
                );
                let state = self.slot_mut(slot);
                state.error = None;
                Ok(state.loaded.insert(loaded))
            }
            Err(e) => {
                tracing::warn!(slot = slot.label(), error = %e, "failed to load dataset");
                *self.slot_mut(slot) = SlotState {
                    loaded: None,
                    error: Some(e.to_string()),
                };
                self.status = ActionStatus::Awaiting;
                Err(e)
            }
        }
    }

    // ── Reconciliation ────────────────────────────────────────────────────

    /// Reconcile the loaded exports.
    ///
    /// On success the new outcome supersedes the previous one.  On failure
    /// the previous outcome is kept and the error returned.
    pub fn reconcile(&mut self) -> Result<&ReconOutcome> {
        let (Some(yms), Some(dock_dash)) = (self.dataset(Slot::Yms), self.dataset(Slot::DockDash))
        else {
            tracing::info!("reconciliation requested before both exports were loaded");
            self.status = ActionStatus::NotReady;
            return Err(ReconError::NotReady);
        };

        match reconcile(yms, dock_dash) {
            Ok(outcome) => {
                self.status = ActionStatus::from_outcome(&outcome);
                Ok(self.last_outcome.insert(outcome))
            }
            Err(e) => {
                if e.is_soft() {
                    tracing::info!("{e}");
                    self.status = ActionStatus::NotReady;
                } else {
                    tracing::warn!(error = %e, "reconciliation failed");
                    self.status = ActionStatus::Failed(e.to_string());
                }
                Err(e)
            }
        }
    }

    /// Reconcile and, on success, send the summary to `sink`.
    ///
    /// A clipboard failure is logged and does not fail the reconciliation.
    pub fn reconcile_and_copy(&mut self, sink: Option<&mut dyn ClipboardSink>) -> Result<&ReconOutcome> {
        let outcome = self.reconcile()?;
        if let Some(sink) = sink {
            if let Err(e) = sink.copy(&outcome.summary_text) {
                tracing::warn!(error = %e, "failed to copy summary to clipboard");
            }
        }
        Ok(outcome)
    }

    /// Send the last summary to `sink` again.  Returns `false` when nothing
    /// has been reconciled yet.
    pub fn copy_last_summary(&self, sink: &mut dyn ClipboardSink) -> Result<bool> {
        match &self.last_outcome {
            Some(outcome) => {
                sink.copy(&outcome.summary_text)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn last_outcome(&self) -> Option<&ReconOutcome> {
        self.last_outcome.as_ref()
    }

    pub fn status(&self) -> &ActionStatus {
        &self.status
    }

    /// Records behind `tile` in the last good report.
    pub fn detail(&self, tile: Tile) -> DetailLookup<'_> {
        let (Some(outcome), Some(bucket)) = (self.last_outcome.as_ref(), tile.bucket()) else {
            return DetailLookup::NoRecords;
        };
        let records = outcome.report.bucket(bucket);
        if records.is_empty() {
            DetailLookup::NoRecords
        } else {
            DetailLookup::Records(records)
        }
    }
}

fn other(slot: Slot) -> Slot {
    match slot {
        Slot::Yms => Slot::DockDash,
        Slot::DockDash => Slot::Yms,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
