//! Display fields for one list row.

use serde::Serialize;

use crate::format::MagnitudeCategory;

/// Everything a list row shows for a record.
///
/// Built by [`EarthquakeFormatter::entry`](crate::EarthquakeFormatter::entry).
/// The url is passed through so the rendering layer can open it on tap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEntry {
    pub magnitude: String,
    pub category: MagnitudeCategory,
    pub offset: String,
    pub primary: String,
    pub date: String,
    pub time: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_category_as_key() {
        let entry = ListEntry {
            magnitude: "4.0".to_string(),
            category: MagnitudeCategory::Magnitude4,
            offset: "Near the".to_string(),
            primary: "Ridge".to_string(),
            date: "Jan 01, 1970".to_string(),
            time: "12:00 AM".to_string(),
            url: "u".to_string(),
        };

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["category"], "magnitude4");
        assert_eq!(json["primary"], "Ridge");
    }
}
