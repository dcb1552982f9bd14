/// Format an unsigned quantity with thousands separators, the way volume
/// tiles and the clipboard summary display units.
///
/// # Examples
///
/// ```
/// use recon_core::formatting::format_units;
///
/// assert_eq!(format_units(0), "0");
/// assert_eq!(format_units(999), "999");
/// assert_eq!(format_units(1234), "1,234");
/// assert_eq!(format_units(1234567), "1,234,567");
/// ```
pub fn format_units(value: u64) -> String {
    group_thousands(&value.to_string())
}

/// Format a record count for a tile or status line.
///
/// # Examples
///
/// ```
/// use recon_core::formatting::format_count;
///
/// assert_eq!(format_count(12), "12");
/// assert_eq!(format_count(12000), "12,000");
/// ```
pub fn format_count(count: usize) -> String {
    group_thousands(&count.to_string())
}

/// Pluralise a noun for counts in status messages.
///
/// # Examples
///
/// ```
/// use recon_core::formatting::plural;
///
/// assert_eq!(plural(1, "record"), "1 record");
/// assert_eq!(plural(3, "record"), "3 records");
/// ```
pub fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", format_count(count), noun)
    } else {
        format!("{} {}s", format_count(count), noun)
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Insert commas every three digits from the right of an integer string.
fn group_thousands(s: &str) -> String {
    if s.len() <= 3 {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len() + s.len() / 3);
    let offset = s.len() % 3;
    for (i, ch) in s.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
