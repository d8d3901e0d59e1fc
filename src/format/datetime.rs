//! Date and time strings for epoch-millisecond timestamps.

use jiff::{Timestamp, Zoned, tz::TimeZone};

/// e.g. `Mar 03, 1984`
const DATE_FORMAT: &str = "%b %d, %Y";

/// e.g. `4:30 PM`
const TIME_FORMAT: &str = "%-I:%M %p";

/// Render the calendar date of a timestamp as `"Mon dd, yyyy"`.
pub fn format_date(epoch_millis: i64, time_zone: &TimeZone) -> String {
    zoned(epoch_millis, time_zone).strftime(DATE_FORMAT).to_string()
}

/// Render the wall-clock time of a timestamp as `"h:mm AM"`.
pub fn format_time(epoch_millis: i64, time_zone: &TimeZone) -> String {
    zoned(epoch_millis, time_zone).strftime(TIME_FORMAT).to_string()
}

/// Timestamps beyond the supported calendar range clamp to its bounds.
fn zoned(epoch_millis: i64, time_zone: &TimeZone) -> Zoned {
    let timestamp = Timestamp::from_millisecond(epoch_millis).unwrap_or(if epoch_millis < 0 {
        Timestamp::MIN
    } else {
        Timestamp::MAX
    });
    timestamp.to_zoned(time_zone.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    use jiff::tz;

    const UTC: TimeZone = TimeZone::UTC;

    #[test]
    fn epoch() {
        assert_eq!(format_date(0, &UTC), "Jan 01, 1970");
        assert_eq!(format_time(0, &UTC), "12:00 AM");
    }

    #[test]
    fn afternoon_has_no_hour_padding() {
        // 1984-03-03T16:30:00Z
        let millis = 447_179_400_000;
        assert_eq!(format_date(millis, &UTC), "Mar 03, 1984");
        assert_eq!(format_time(millis, &UTC), "4:30 PM");
    }

    #[test]
    fn noon_and_midnight() {
        assert_eq!(format_time(12 * 3_600_000, &UTC), "12:00 PM");
        assert_eq!(format_time(24 * 3_600_000, &UTC), "12:00 AM");
        assert_eq!(format_time(23 * 3_600_000 + 59 * 60_000, &UTC), "11:59 PM");
    }

    #[test]
    fn seconds_and_millis_are_dropped() {
        // 2016-01-30T03:25:12.220Z
        let millis = 1_454_124_312_220;
        assert_eq!(format_date(millis, &UTC), "Jan 30, 2016");
        assert_eq!(format_time(millis, &UTC), "3:25 AM");
    }

    #[test]
    fn negative_epoch_is_before_1970() {
        assert_eq!(format_date(-1, &UTC), "Dec 31, 1969");
        assert_eq!(format_time(-1, &UTC), "11:59 PM");
    }

    #[test]
    fn fixed_offset_zone() {
        let east = TimeZone::fixed(tz::offset(9));
        assert_eq!(format_date(0, &east), "Jan 01, 1970");
        assert_eq!(format_time(0, &east), "9:00 AM");

        let west = TimeZone::fixed(tz::offset(-8));
        assert_eq!(format_date(0, &west), "Dec 31, 1969");
        assert_eq!(format_time(0, &west), "4:00 PM");
    }

    #[test]
    fn out_of_range_clamps() {
        let latest = format_date(i64::MAX, &UTC);
        assert!(latest.ends_with(", 9999"), "{latest}");

        let earliest = format_date(i64::MIN, &UTC);
        assert!(earliest.contains("9999"), "{earliest}");

        assert_eq!(format_date(i64::MAX, &UTC), format_date(i64::MAX - 1, &UTC));
    }

    #[test]
    fn repeated_calls_agree() {
        let millis = 1_700_000_000_000;
        assert_eq!(format_date(millis, &UTC), format_date(millis, &UTC));
        assert_eq!(format_time(millis, &UTC), format_time(millis, &UTC));
    }
}
