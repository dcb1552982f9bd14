//! Action-panel status.
//!
//! One value summarising where the operator is in the load → reconcile
//! flow, with the message and tone the panel displays.

use recon_core::formatting::plural;
use recon_core::models::ReconOutcome;

/// How the panel should be coloured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Success,
    Critical,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionStatus {
    /// At least one export is not loaded.
    Awaiting,
    /// Both exports are loaded and nothing has been reconciled since.
    Ready,
    /// Reconciliation was requested before both exports were loaded.
    NotReady,
    /// The last reconciliation attempt failed.
    Failed(String),
    /// Reconciled, but trailers are still over the dwell threshold.
    Critical { excluded: usize, azng_over_72: usize },
    /// Reconciled with every critical metric clear.
    Success { excluded: usize },
}

impl ActionStatus {
    /// Panel state after a successful reconciliation.
    pub fn from_outcome(outcome: &ReconOutcome) -> Self {
        let azng_over_72 = outcome.report.azng_over_72.len();
        if azng_over_72 > 0 {
            ActionStatus::Critical {
                excluded: outcome.excluded_count,
                azng_over_72,
            }
        } else {
            ActionStatus::Success {
                excluded: outcome.excluded_count,
            }
        }
    }

    /// Panel state while files are being selected.
    pub fn for_loading(both_loaded: bool) -> Self {
        if both_loaded {
            ActionStatus::Ready
        } else {
            ActionStatus::Awaiting
        }
    }

    pub fn message(&self) -> String {
        match self {
            ActionStatus::Awaiting => {
                "Awaiting file selections to begin reconciliation...".to_string()
            }
            ActionStatus::Ready => "Ready to reconcile.".to_string(),
            ActionStatus::NotReady => "Please load both YMS and Dock Dash files first.".to_string(),
            ActionStatus::Failed(msg) => format!("Reconciliation Error: {msg}"),
            ActionStatus::Critical {
                excluded,
                azng_over_72,
            } => format!(
                "RECONCILED CRITICAL: {excluded} excluded, but {} still AZNG > 72h!",
                if *azng_over_72 == 1 {
                    "1 trailer is".to_string()
                } else {
                    format!("{azng_over_72} trailers are")
                }
            ),
            ActionStatus::Success { excluded } => format!(
                "RECONCILIATION SUCCESS: {} reconciled. All critical metrics clear.",
                plural(*excluded, "Dock Dash record")
            ),
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            ActionStatus::Awaiting | ActionStatus::Ready | ActionStatus::NotReady => Tone::Neutral,
            ActionStatus::Failed(_) => Tone::Error,
            ActionStatus::Critical { .. } => Tone::Critical,
            ActionStatus::Success { .. } => Tone::Success,
        }
    }

    /// `true` once a reconciliation has completed successfully.
    pub fn is_reconciled(&self) -> bool {
        matches!(
            self,
            ActionStatus::Critical { .. } | ActionStatus::Success { .. }
        )
    }
}
