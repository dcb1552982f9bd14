use clap::Parser;
use std::path::PathBuf;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Reconcile a YMS yard export against a Dock Dash export
#[derive(Parser, Debug, Clone)]
#[command(
    name = "yard-reconciler",
    about = "Reconcile a YMS yard export against a Dock Dash export",
    version
)]
pub struct Settings {
    /// YMS export to load at startup (source of truth)
    #[arg(long, env = "YARD_RECON_YMS")]
    pub yms: Option<PathBuf>,

    /// Dock Dash export to load at startup
    #[arg(long, env = "YARD_RECON_DOCK_DASH")]
    pub dock_dash: Option<PathBuf>,

    /// Output mode
    #[arg(long, default_value = "dashboard", value_parser = ["dashboard", "summary", "json"])]
    pub view: String,

    /// Display theme
    #[arg(long, default_value = "auto", env = "YARD_RECON_THEME", value_parser = ["light", "dark", "classic", "auto"])]
    pub theme: String,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"])]
    pub log_level: String,

    /// Log file path
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Do not copy the summary to the clipboard after reconciling
    #[arg(long)]
    pub no_copy: bool,
}

impl Settings {
    /// Parse the process arguments and apply derived overrides.
    pub fn load() -> Self {
        Self::resolve(Settings::parse())
    }

    /// Same as [`Settings::load`] but from an explicit argument list.
    pub fn load_from<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::resolve(Settings::parse_from(args))
    }

    /// `true` when the terminal dashboard should be started.
    pub fn is_interactive(&self) -> bool {
        self.view == "dashboard"
    }

    /// `--debug` overrides the log level.
    fn resolve(mut settings: Settings) -> Settings {
        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }
        settings
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
