//! Clipboard sinks for the reconciliation summary.
//!
//! The dashboard copies through the terminal with an OSC 52 escape, which
//! works over SSH and needs no platform clipboard library.  Tests and the
//! non-interactive views use [`MemoryClipboard`].

use std::io::{self, Write};

use crossterm::clipboard::CopyToClipboard;
use crossterm::execute;
use recon_core::error::Result;

/// Destination for copied text.
pub trait ClipboardSink {
    fn copy(&mut self, text: &str) -> Result<()>;
}

// ── Osc52Clipboard ────────────────────────────────────────────────────────────

/// Copies by writing an OSC 52 sequence to a terminal writer.
pub struct Osc52Clipboard<W: Write> {
    writer: W,
}

impl Osc52Clipboard<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ClipboardSink for Osc52Clipboard<W> {
    fn copy(&mut self, text: &str) -> Result<()> {
        execute!(self.writer, CopyToClipboard::to_clipboard_from(text))?;
        tracing::debug!(bytes = text.len(), "summary copied via OSC 52");
        Ok(())
    }
}

// ── MemoryClipboard ───────────────────────────────────────────────────────────

/// Keeps the most recent copy in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    contents: Option<String>,
    copies: usize,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of the latest copy, if anything was copied.
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }

    /// Number of copies made so far.
    pub fn copies(&self) -> usize {
        self.copies
    }
}

impl ClipboardSink for MemoryClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        self.contents = Some(text.to_string());
        self.copies += 1;
        Ok(())
    }
}
