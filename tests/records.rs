#[cfg(test)]
mod tests {
    use atrak::libs::record::{AttendanceRecord, AttendanceStatus};

    #[test]
    fn test_status_parse_is_case_insensitive() {
        assert_eq!(AttendanceStatus::parse("present"), AttendanceStatus::Present);
        assert_eq!(AttendanceStatus::parse("PRESENT"), AttendanceStatus::Present);
        assert_eq!(AttendanceStatus::parse("p"), AttendanceStatus::Present);
        assert_eq!(AttendanceStatus::parse("pl"), AttendanceStatus::PaidLeave);
        assert_eq!(AttendanceStatus::parse("Cl"), AttendanceStatus::CasualLeave);
        assert_eq!(AttendanceStatus::parse("sL"), AttendanceStatus::SickLeave);
        assert_eq!(AttendanceStatus::parse("absent"), AttendanceStatus::Absent);
    }

    #[test]
    fn test_status_parse_empty_is_unmarked() {
        assert_eq!(AttendanceStatus::parse(""), AttendanceStatus::Unmarked);
        assert_eq!(AttendanceStatus::parse("   "), AttendanceStatus::Unmarked);
    }

    #[test]
    fn test_status_parse_unknown_falls_back_to_absent() {
        assert_eq!(AttendanceStatus::parse("vacation"), AttendanceStatus::Absent);
        assert_eq!(AttendanceStatus::parse("WFH"), AttendanceStatus::Absent);
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(AttendanceStatus::Present.code(), "P");
        assert_eq!(AttendanceStatus::Absent.code(), "A");
        assert_eq!(AttendanceStatus::PaidLeave.code(), "PL");
        assert_eq!(AttendanceStatus::CasualLeave.code(), "CL");
        assert_eq!(AttendanceStatus::SickLeave.code(), "SL");
        assert_eq!(AttendanceStatus::Unmarked.code(), "");
    }

    #[test]
    fn test_record_deserializes_with_missing_fields() {
        let json = r#"{"date": "2025-03-15", "status": "present"}"#;
        let record: AttendanceRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.date, "2025-03-15");
        assert_eq!(record.status(), AttendanceStatus::Present);
        assert!(record.id.is_none());
        assert!(record.in_time.is_none());
        assert!(record.out_time.is_none());
        assert!(record.notes.is_none());
    }

    #[test]
    fn test_record_status_accessor_uses_fallback() {
        let json = r#"{"date": "2025-03-15", "status": "mystery"}"#;
        let record: AttendanceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.status(), AttendanceStatus::Absent);
    }
}
