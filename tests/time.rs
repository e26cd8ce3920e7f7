#[cfg(test)]
mod tests {
    use atrak::libs::time::{compute_duration, format_duration, normalize_time, parse_duration};
    use chrono::Duration;

    #[test]
    fn test_normalize_time_clamps_out_of_range() {
        assert_eq!(normalize_time("99:99"), "23:59");
        assert_eq!(normalize_time("24:00"), "23:00");
        assert_eq!(normalize_time("12:75"), "12:59");
    }

    #[test]
    fn test_normalize_time_pads_short_input() {
        assert_eq!(normalize_time("930"), "09:30");
        assert_eq!(normalize_time("9"), "09:00");
        assert_eq!(normalize_time("12"), "12:00");
        assert_eq!(normalize_time("0930"), "09:30");
    }

    #[test]
    fn test_normalize_time_empty_stays_empty() {
        // Empty input is empty output, not "00:00"
        assert_eq!(normalize_time(""), "");
        assert_eq!(normalize_time("  "), "");
        assert_eq!(normalize_time("ab:cd"), "");
    }

    #[test]
    fn test_normalize_time_strips_non_digits() {
        assert_eq!(normalize_time(" 9:30 "), "09:30");
        assert_eq!(normalize_time("9h30m"), "09:30");
        assert_eq!(normalize_time("09.30"), "09:30");
    }

    #[test]
    fn test_normalize_time_keeps_at_most_four_digits() {
        assert_eq!(normalize_time("1234567"), "12:34");
        assert_eq!(normalize_time("09:30:45"), "09:30");
    }

    #[test]
    fn test_normalize_time_is_idempotent() {
        let samples = ["", "930", "99:99", "09:30", "7", "1234567", "ab:cd", " 9:30 ", "24:00"];
        for raw in samples {
            let once = normalize_time(raw);
            assert_eq!(normalize_time(&once), once, "not idempotent for {:?}", raw);
        }
    }

    #[test]
    fn test_compute_duration_simple() {
        assert_eq!(compute_duration("09:00", "18:00"), "09:00");
        assert_eq!(compute_duration("09:15", "17:45"), "08:30");
    }

    #[test]
    fn test_compute_duration_wraps_overnight() {
        // Out time earlier than in time crosses midnight
        assert_eq!(compute_duration("22:00", "06:00"), "08:00");
        assert_eq!(compute_duration("23:30", "00:15"), "00:45");
    }

    #[test]
    fn test_compute_duration_equal_times_is_zero() {
        // Zero elapsed, not a full 24h wrap
        assert_eq!(compute_duration("09:00", "09:00"), "00:00");
    }

    #[test]
    fn test_compute_duration_missing_side_is_empty() {
        assert_eq!(compute_duration("", "18:00"), "");
        assert_eq!(compute_duration("09:00", ""), "");
        assert_eq!(compute_duration("", ""), "");
    }

    #[test]
    fn test_compute_duration_rejects_non_numeric() {
        assert_eq!(compute_duration("nine", "18:00"), "");
        assert_eq!(compute_duration("09:00", "18.00"), "");
        assert_eq!(compute_duration("0900", "1800"), "");
    }

    #[test]
    fn test_compute_duration_single_digit_hour_parses() {
        assert_eq!(compute_duration("9:00", "17:30"), "08:30");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(&Duration::zero()), "00:00");
        assert_eq!(format_duration(&Duration::minutes(90)), "01:30");
        assert_eq!(format_duration(&(Duration::hours(8) + Duration::minutes(45))), "08:45");
        assert_eq!(format_duration(&Duration::minutes(-30)), "00:00");
    }

    #[test]
    fn test_parse_duration_roundtrip() {
        assert_eq!(parse_duration("08:30"), Some(Duration::minutes(510)));
        assert_eq!(parse_duration(""), None);
        assert_eq!(parse_duration("abc"), None);
    }
}
