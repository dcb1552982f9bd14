//! CSV text parsing.
//!
//! The exports are simple comma-separated files: quoting is limited to a
//! pair of double quotes around a cell and embedded commas are not
//! supported.  Rows whose field count differs from the header are dropped
//! so that one bad line does not cost the whole file.

use std::collections::{HashMap, HashSet};

use recon_core::error::{ReconError, Result};
use recon_core::models::{Dataset, Record};
use tracing::debug;

// ── Public API ────────────────────────────────────────────────────────────────

/// Parse raw export text into a [`Dataset`].
///
/// * Blank lines are discarded; CRLF and LF line endings are both accepted.
/// * Fewer than two remaining lines (no header, or no data) yields an empty
///   dataset.
/// * Duplicate header names (after normalisation) are rejected with
///   [`ReconError::DuplicateHeaders`].
pub fn parse_csv(text: &str) -> Result<Dataset> {
    let lines: Vec<&str> = text
        .trim()
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect();

    if lines.len() < 2 {
        debug!("CSV has {} non-blank line(s); nothing to parse", lines.len());
        return Ok(Dataset::default());
    }

    let headers = parse_header(lines[0]);
    let duplicates = duplicate_headers(&headers);
    if !duplicates.is_empty() {
        return Err(ReconError::DuplicateHeaders(duplicates));
    }

    let mut records = Vec::with_capacity(lines.len() - 1);
    let mut skipped = 0usize;

    for line in &lines[1..] {
        let values: Vec<&str> = line.split(',').map(clean_value).collect();
        if values.len() != headers.len() {
            skipped += 1;
            continue;
        }

        let fields: HashMap<String, String> = headers
            .iter()
            .cloned()
            .zip(values.into_iter().map(str::to_string))
            .collect();
        records.push(Record::new(fields));
    }

    debug!(
        "CSV parsed: {} column(s), {} record(s), {} malformed row(s) skipped",
        headers.len(),
        records.len(),
        skipped
    );

    Ok(Dataset::new(headers, records))
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Split the header row and normalise each name: quote characters removed,
/// whitespace trimmed, upper-cased.
fn parse_header(line: &str) -> Vec<String> {
    line.split(',')
        .map(|h| {
            h.chars()
                .filter(|c| *c != '"' && *c != '\'')
                .collect::<String>()
                .trim()
                .to_uppercase()
        })
        .collect()
}

/// Header names that occur more than once, each reported once in first-seen
/// order.
fn duplicate_headers(headers: &[String]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut dupes: Vec<String> = Vec::new();
    for h in headers {
        if !seen.insert(h.as_str()) && !dupes.contains(h) {
            dupes.push(h.clone());
        }
    }
    dupes
}

/// Drop one leading and one trailing double quote, then trim.
fn clean_value(raw: &str) -> &str {
    let v = raw.strip_prefix('"').unwrap_or(raw);
    let v = v.strip_suffix('"').unwrap_or(v);
    v.trim()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
