mod bootstrap;

use std::io::{self, IsTerminal};
use std::path::Path;

use anyhow::{Context, Result};
use recon_core::models::ReconOutcome;
use recon_core::settings::Settings;
use recon_runtime::clipboard::{ClipboardSink, Osc52Clipboard};
use recon_runtime::session::{ReconSession, Slot};
use recon_ui::app::App;

use bootstrap::LogTarget;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let settings = Settings::load();

    bootstrap::ensure_directories()?;
    let target = log_target(&settings);
    let _log_guard = bootstrap::setup_logging(&settings.log_level, &target)?;

    tracing::info!("Yard Reconciler v{} starting", VERSION);
    tracing::info!("View: {}, Theme: {}", settings.view, settings.theme);

    match settings.view.as_str() {
        "dashboard" => run_dashboard(&settings).await?,
        "summary" => {
            let summary = run_report(&settings, |outcome| Ok(outcome.summary_text.clone())).await?;
            println!("{summary}");
        }
        "json" => {
            let json = run_report(&settings, |outcome| {
                serde_json::to_string_pretty(outcome).context("serialising report")
            })
            .await?;
            println!("{json}");
        }
        unknown => {
            eprintln!("Unknown view mode: {}", unknown);
        }
    }

    Ok(())
}

/// The dashboard owns the terminal, so it always logs to a file.
fn log_target(settings: &Settings) -> LogTarget {
    match (&settings.log_file, settings.is_interactive()) {
        (Some(path), _) => LogTarget::File(path.clone()),
        (None, true) => LogTarget::File(bootstrap::default_log_path()),
        (None, false) => LogTarget::Stderr,
    }
}

async fn run_dashboard(settings: &Settings) -> Result<()> {
    let mut session = ReconSession::new();
    for (slot, path) in preload_paths(settings) {
        // Failures are shown on the upload card.
        if session.load(slot, path).await.is_err() {
            tracing::info!("preload of {} failed; continuing", slot.label());
        }
    }

    let app = App::new(&settings.theme, VERSION)
        .with_copy_on_reconcile(!settings.no_copy)
        .with_clipboard(Box::new(Osc52Clipboard::stdout()));

    let session = app.run(session).await?;
    if let Some(outcome) = session.last_outcome() {
        tracing::info!(excluded = outcome.excluded_count, "dashboard closed");
    }
    Ok(())
}

/// Load both exports from the command line, reconcile once, and format the
/// outcome with `render`.  The status line goes to stderr.
async fn run_report<F>(settings: &Settings, render: F) -> Result<String>
where
    F: FnOnce(&ReconOutcome) -> Result<String>,
{
    let (Some(yms), Some(dock_dash)) = (&settings.yms, &settings.dock_dash) else {
        anyhow::bail!(
            "the {} view needs both --yms and --dock-dash",
            settings.view
        );
    };

    let mut session = ReconSession::new();
    load_or_fail(&mut session, Slot::Yms, yms).await?;
    load_or_fail(&mut session, Slot::DockDash, dock_dash).await?;

    // OSC 52 goes to stderr so stdout stays clean for pipes.
    let mut clipboard = (!settings.no_copy && io::stderr().is_terminal())
        .then(|| Osc52Clipboard::new(io::stderr()));
    let sink = clipboard.as_mut().map(|c| c as &mut dyn ClipboardSink);

    let rendered = match session.reconcile_and_copy(sink) {
        Ok(outcome) => render(outcome)?,
        Err(e) => {
            eprintln!("{}", session.status().message());
            return Err(e.into());
        }
    };
    eprintln!("{}", session.status().message());
    Ok(rendered)
}

async fn load_or_fail(session: &mut ReconSession, slot: Slot, path: &Path) -> Result<()> {
    session
        .load(slot, path)
        .await
        .with_context(|| format!("loading {} export {}", slot.label(), path.display()))?;
    Ok(())
}

fn preload_paths(settings: &Settings) -> Vec<(Slot, &Path)> {
    [
        (Slot::Yms, settings.yms.as_deref()),
        (Slot::DockDash, settings.dock_dash.as_deref()),
    ]
    .into_iter()
    .filter_map(|(slot, path)| path.map(|p| (slot, p)))
    .collect()
}
