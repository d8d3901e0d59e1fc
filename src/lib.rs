//! Quakelist: turn earthquake feed records into list entries.
//!
//! The library is the presentation core. It takes an [`EarthquakeRecord`]
//! and derives what a list row shows: a one-decimal magnitude, a severity
//! category key, the location split into offset and primary place, and
//! date and time strings.
//!
//! Fetching the feed, drawing rows and resolving category keys to colors
//! belong to the caller. The `quakelist` binary is one such caller.

pub mod config;
pub mod entry;
pub mod feed;
pub mod format;
pub mod record;

pub use config::{Config, ConfigError};
pub use entry::ListEntry;
pub use feed::FeedError;
pub use format::{
    EarthquakeFormatter, LocationParts, MagnitudeCategory, format_magnitude, magnitude_category,
    split_location,
};
pub use record::EarthquakeRecord;
