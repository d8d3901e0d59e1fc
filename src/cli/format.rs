//! Output formatting for CLI display.

use serde::Serialize;

use quakelist::{Config, ListEntry, LocationParts, format_magnitude, magnitude_category};

/// An entry with its category resolved to a palette color.
#[derive(Debug, Serialize)]
pub(super) struct RenderedEntry<'a> {
    #[serde(flatten)]
    entry: ListEntry,
    color: &'a str,
}

impl<'a> RenderedEntry<'a> {
    pub(super) fn new(entry: ListEntry, config: &'a Config) -> Self {
        let color = config.color(entry.category);
        Self { entry, color }
    }
}

/// Format an entry as a single line: magnitude, color, location, date and time, url.
///
/// The primary place is trimmed for display only.
pub(super) fn format_row(entry: &ListEntry, color: &str) -> String {
    format!(
        "{:>5} {color}  {} {}  {} {}  {}",
        entry.magnitude,
        entry.offset,
        entry.primary.trim(),
        entry.date,
        entry.time,
        entry.url,
    )
}

/// Serialize entries with their colors as a pretty JSON array.
///
/// An empty feed gives `[]`.
pub(super) fn format_json(entries: Vec<ListEntry>, config: &Config) -> serde_json::Result<String> {
    let rendered: Vec<RenderedEntry> = entries
        .into_iter()
        .map(|entry| RenderedEntry::new(entry, config))
        .collect();
    serde_json::to_string_pretty(&rendered)
}

/// Display string, category key and color for a magnitude.
pub(super) fn format_category(magnitude: f64, config: &Config) -> String {
    let category = magnitude_category(magnitude);
    format!(
        "{}  {category}  {}",
        format_magnitude(magnitude),
        config.color(category)
    )
}

/// Both parts quoted, so leading and trailing whitespace stays visible.
pub(super) fn format_split(parts: LocationParts<'_>) -> String {
    format!("offset:  {:?}\nprimary: {:?}", parts.offset, parts.primary)
}
