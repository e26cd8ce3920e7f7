#[cfg(test)]
mod tests {
    use atrak::libs::export::{default_filename, ReportExporter};
    use atrak::libs::record::{AttendanceRecord, Employee};
    use atrak::libs::report::{format_org_report, format_report};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ExportTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            ExportTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    fn employee() -> Employee {
        Employee {
            name: "Jane Doe".to_string(),
            code: "E042".to_string(),
            department: "Engineering".to_string(),
        }
    }

    fn record(date: &str, status: &str, in_time: Option<&str>, out_time: Option<&str>) -> AttendanceRecord {
        AttendanceRecord {
            id: None,
            date: date.to_string(),
            status: status.to_string(),
            in_time: in_time.map(str::to_string),
            out_time: out_time.map(str::to_string),
            notes: None,
        }
    }

    #[test]
    fn test_default_filename_pattern() {
        assert_eq!(default_filename("Jane Doe", 2025, 4), "Jane_Doe_April_2025_Attendance.xlsx");
        assert_eq!(default_filename("Acme Corp", 2024, 12), "Acme_Corp_December_2024_Attendance.xlsx");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_single_user_workbook_is_written(ctx: &mut ExportTestContext) {
        let records = vec![record("2025-04-01", "present", Some("09:00"), Some("18:00"))];
        let report = format_report(&employee(), "Acme Corp", 2025, 4, &records);

        let path = ctx.temp_dir.path().join("report.xlsx");
        let exporter = ReportExporter::new(Some(path.clone()), "Jane Doe", 2025, 4);
        exporter.write(&report).unwrap();

        let metadata = std::fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0);
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_org_workbook_is_written(ctx: &mut ExportTestContext) {
        let entries = vec![
            (employee(), vec![record("2025-04-01", "present", Some("09:00"), Some("17:00"))]),
            (
                Employee {
                    name: "Bob South".to_string(),
                    code: "E002".to_string(),
                    department: "Sales".to_string(),
                },
                vec![],
            ),
        ];
        let report = format_org_report("Acme Corp", 2025, 4, &entries);

        let path = ctx.temp_dir.path().join("org.xlsx");
        ReportExporter::new(Some(path.clone()), "Acme Corp", 2025, 4).write(&report).unwrap();

        assert!(path.exists());
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_exporter_defaults_to_pattern_filename(ctx: &mut ExportTestContext) {
        // Default path lands in the working directory; point it at the
        // temp dir instead by joining the generated name.
        let name = default_filename("Jane Doe", 2025, 4);
        let path = ctx.temp_dir.path().join(&name);
        let exporter = ReportExporter::new(Some(path.clone()), "Jane Doe", 2025, 4);

        assert_eq!(exporter.output_path(), &path);

        // And with no explicit path, the exporter derives the same name.
        let derived = ReportExporter::new(None, "Jane Doe", 2025, 4);
        assert_eq!(derived.output_path().file_name().unwrap().to_string_lossy(), name);
    }
}
