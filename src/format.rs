//! Presentation formatting for earthquake records.
//!
//! Every function here is pure: output depends only on the inputs and the
//! formatter's configuration. The formatter is `Send + Sync` and can be
//! shared by any number of rendering threads.

mod category;
mod datetime;
mod location;
mod magnitude;

use jiff::tz::TimeZone;

use crate::entry::ListEntry;
use crate::record::EarthquakeRecord;

pub use category::{MagnitudeCategory, magnitude_category};
pub use datetime::{format_date, format_time};
pub use location::{LocationParts, split_location};
pub use magnitude::format_magnitude;

/// Token that separates the offset descriptor from the place name.
pub const DEFAULT_SEPARATOR: &str = "of";

/// Offset shown when the location has no separator.
pub const DEFAULT_NEARBY_OFFSET: &str = "Near the";

/// Formats records into display fields.
///
/// Holds only configuration. The separator and nearby phrase are supplied
/// by the caller so they can be localized.
#[derive(Debug, Clone)]
pub struct EarthquakeFormatter {
    separator: String,
    nearby_offset: String,
    time_zone: TimeZone,
}

impl Default for EarthquakeFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_SEPARATOR, DEFAULT_NEARBY_OFFSET, TimeZone::UTC)
    }
}

impl EarthquakeFormatter {
    pub fn new(
        separator: impl Into<String>,
        nearby_offset: impl Into<String>,
        time_zone: TimeZone,
    ) -> Self {
        Self {
            separator: separator.into(),
            nearby_offset: nearby_offset.into(),
            time_zone,
        }
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn nearby_offset(&self) -> &str {
        &self.nearby_offset
    }

    pub fn time_zone(&self) -> &TimeZone {
        &self.time_zone
    }

    /// Split a location using the configured separator and nearby phrase.
    pub fn split_location<'a>(&'a self, raw: &'a str) -> LocationParts<'a> {
        split_location(raw, &self.separator, &self.nearby_offset)
    }

    /// `"Mon dd, yyyy"` in the configured time zone.
    pub fn format_date(&self, epoch_millis: i64) -> String {
        format_date(epoch_millis, &self.time_zone)
    }

    /// `"h:mm AM"` in the configured time zone.
    pub fn format_time(&self, epoch_millis: i64) -> String {
        format_time(epoch_millis, &self.time_zone)
    }

    /// Derive every display field of a record.
    pub fn entry(&self, record: &EarthquakeRecord) -> ListEntry {
        let location = self.split_location(record.location());

        ListEntry {
            magnitude: format_magnitude(record.magnitude()),
            category: magnitude_category(record.magnitude()),
            offset: location.offset.to_string(),
            primary: location.primary.to_string(),
            date: self.format_date(record.time_millis()),
            time: self.format_time(record.time_millis()),
            url: record.url().to_string(),
        }
    }

    /// Derive entries for a sequence of records, preserving order.
    pub fn entries<'a>(
        &'a self,
        records: &'a [EarthquakeRecord],
    ) -> impl Iterator<Item = ListEntry> + 'a {
        records.iter().map(|r| self.entry(r))
    }
}
