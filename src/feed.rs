//! Reading already-parsed records from JSON.
//!
//! The input is a JSON array of [`EarthquakeRecord`] objects with
//! camelCase keys. Fetching and converting the upstream feed into this
//! shape happens elsewhere.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use crate::record::EarthquakeRecord;

/// Errors that can occur while reading records.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, FeedError>;

/// Read records from any reader, e.g. stdin.
pub fn read_records(reader: impl Read) -> Result<Vec<EarthquakeRecord>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Read records from a file.
pub fn load_records(path: &Path) -> Result<Vec<EarthquakeRecord>> {
    let file = File::open(path)?;
    read_records(BufReader::new(file))
}
