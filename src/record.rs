//! The earthquake record: one item from the feed.

use serde::{Deserialize, Serialize};

/// A single earthquake as delivered by the feed.
///
/// Immutable once built. Nothing derived is cached here; the formatter
/// recomputes display fields on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarthquakeRecord {
    magnitude: f64,
    location: String,
    time_millis: i64,
    url: String,
}

impl EarthquakeRecord {
    pub fn new(
        magnitude: f64,
        location: impl Into<String>,
        time_millis: i64,
        url: impl Into<String>,
    ) -> Self {
        Self {
            magnitude,
            location: location.into(),
            time_millis,
            url: url.into(),
        }
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// Free-text location, e.g. `"5km N of Nowhere"`.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Epoch milliseconds, UTC.
    pub fn time_millis(&self) -> i64 {
        self.time_millis
    }

    /// Detail page. Not validated.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_fields() {
        let json = r#"{
            "magnitude": 7.2,
            "location": "88km N of Yelizovo, Russia",
            "timeMillis": 1454124312220,
            "url": "https://earthquake.usgs.gov/earthquakes/eventpage/us20004vvx"
        }"#;
        let record: EarthquakeRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.magnitude(), 7.2);
        assert_eq!(record.location(), "88km N of Yelizovo, Russia");
        assert_eq!(record.time_millis(), 1_454_124_312_220);
        assert_eq!(
            record.url(),
            "https://earthquake.usgs.gov/earthquakes/eventpage/us20004vvx"
        );
    }

    #[test]
    fn missing_field_is_rejected() {
        let json = r#"{"magnitude": 1.0, "location": "x", "url": "u"}"#;
        assert!(serde_json::from_str::<EarthquakeRecord>(json).is_err());
    }
}
