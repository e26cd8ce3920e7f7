#[cfg(test)]
mod tests {
    use atrak::libs::record::{AttendanceRecord, Employee};
    use atrak::libs::report::{date_range, format_org_report, format_report, ReportCell, TabularReport, REPORT_TITLE};

    fn employee(name: &str, code: &str, department: &str) -> Employee {
        Employee {
            name: name.to_string(),
            code: code.to_string(),
            department: department.to_string(),
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

    fn row_texts(report: &TabularReport, index: usize) -> Vec<String> {
        report.rows[index].iter().map(|c| c.text.clone()).collect()
    }

    /// Finds the metric row whose label cell matches, within one report.
    fn metric_row<'a>(report: &'a TabularReport, label: &str) -> &'a Vec<ReportCell> {
        report.rows.iter().find(|row| row[0].text == label).unwrap()
    }

    #[test]
    fn test_empty_month_produces_full_skeleton() {
        // April 2025 has 30 days; zero records still yield every column
        let report = format_report(&employee("Jane Doe", "E042", "Engineering"), "Acme Corp", 2025, 4, &[]);

        assert_eq!(report.day_count, 30);
        assert_eq!(report.width(), 31);

        let status = metric_row(&report, "Status");
        assert_eq!(status.len(), 31);
        assert!(status[1..].iter().all(|c| c.text == "A"));

        let in_times = metric_row(&report, "InTime");
        assert!(in_times[1..].iter().all(|c| c.text.is_empty()));

        let totals = metric_row(&report, "Total");
        assert!(totals[1..].iter().all(|c| c.text == "00:00"));
    }

    #[test]
    fn test_header_block_layout() {
        let report = format_report(&employee("Jane Doe", "E042", "Engineering"), "Acme Corp", 2025, 4, &[]);

        assert_eq!(report.rows[0][0].text, REPORT_TITLE);
        assert!(report.rows[0][0].bold);
        assert_eq!(report.rows[0][0].span, 31);

        assert_eq!(report.rows[1][0].text, "April-1-2025 to April-30-2025");
        assert_eq!(report.rows[2][0].text, "Acme Corp");
        assert_eq!(report.rows[3][0].text, "Engineering");
        assert!(report.rows[3][0].bold);

        assert_eq!(row_texts(&report, 4), vec!["Emp. Code", "E042"]);
        assert_eq!(row_texts(&report, 5), vec!["Emp. Name", "Jane Doe"]);
    }

    #[test]
    fn test_date_range_string() {
        assert_eq!(date_range(2025, 4), "April-1-2025 to April-30-2025");
        assert_eq!(date_range(2024, 2), "February-1-2024 to February-29-2024");
    }

    #[test]
    fn test_day_header_initials() {
        // April 2025 starts on a Tuesday; Thursday and Saturday get
        // two-letter initials so they differ from Tuesday and Sunday
        let report = format_report(&employee("Jane Doe", "E042", "Engineering"), "Acme Corp", 2025, 4, &[]);
        let days = metric_row(&report, "Days");

        assert_eq!(days[1].text, "1 T");
        assert_eq!(days[3].text, "3 Th");
        assert_eq!(days[5].text, "5 St");
        assert_eq!(days[6].text, "6 S");
        assert_eq!(days[7].text, "7 M");
    }

    #[test]
    fn test_status_row_codes() {
        let records = vec![
            record("2025-04-01", "present", None, None),
            record("2025-04-02", "pl", None, None),
            record("2025-04-03", "CL", None, None),
            record("2025-04-04", "sl", None, None),
            record("2025-04-07", "mystery", None, None),
        ];
        let report = format_report(&employee("Jane Doe", "E042", "Engineering"), "Acme Corp", 2025, 4, &records);
        let status = metric_row(&report, "Status");

        assert_eq!(status[1].text, "P");
        assert_eq!(status[2].text, "PL");
        assert_eq!(status[3].text, "CL");
        assert_eq!(status[4].text, "SL");
        // Unknown status falls back to absent
        assert_eq!(status[7].text, "A");
        // Days without a record render as absent too, weekends included
        assert_eq!(status[5].text, "A");
        assert_eq!(status[6].text, "A");
    }

    #[test]
    fn test_time_and_total_rows() {
        let records = vec![
            record("2025-04-01", "present", Some("09:00"), Some("18:00")),
            record("2025-04-02", "present", Some("22:00"), Some("06:00")),
            record("2025-04-03", "present", Some("09:00"), None),
        ];
        let report = format_report(&employee("Jane Doe", "E042", "Engineering"), "Acme Corp", 2025, 4, &records);

        let in_times = metric_row(&report, "InTime");
        let out_times = metric_row(&report, "OutTime");
        let totals = metric_row(&report, "Total");

        assert_eq!(in_times[1].text, "09:00");
        assert_eq!(out_times[1].text, "18:00");
        assert_eq!(totals[1].text, "09:00");

        // Overnight shift wraps past midnight
        assert_eq!(totals[2].text, "08:00");

        // Missing out time: blank cell, zero total
        assert_eq!(in_times[3].text, "09:00");
        assert_eq!(out_times[3].text, "");
        assert_eq!(totals[3].text, "00:00");
    }

    #[test]
    fn test_org_report_groups_by_department() {
        let entries = vec![
            (employee("Zoe West", "E003", "Sales"), vec![]),
            (employee("Amy North", "E001", "Engineering"), vec![]),
            (employee("Bob South", "E002", "Engineering"), vec![]),
        ];
        let report = format_org_report("Acme Corp", 2025, 4, &entries);

        // Three shared header rows, then one department row plus a
        // seven-row block per employee
        assert_eq!(report.rows.len(), 3 + 2 + 3 * 7);

        let texts: Vec<String> = report.rows.iter().map(|row| row[0].text.clone()).collect();
        let engineering = texts.iter().position(|t| t == "Engineering").unwrap();
        let sales = texts.iter().position(|t| t == "Sales").unwrap();
        assert!(engineering < sales, "departments must be sorted");

        // Both engineers sit between the two department headers
        let code_rows: Vec<usize> = report
            .rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row[0].text == "Emp. Code")
            .map(|(i, _)| i)
            .collect();
        assert_eq!(code_rows.len(), 3);
        assert!(code_rows[0] > engineering && code_rows[1] < sales);
        assert!(code_rows[2] > sales);

        // Members sort by name inside a department
        assert_eq!(report.rows[code_rows[0]][1].text, "E001");
        assert_eq!(report.rows[code_rows[1]][1].text, "E002");
        assert_eq!(report.rows[code_rows[2]][1].text, "E003");
    }

    #[test]
    fn test_org_report_empty_roster_keeps_header() {
        let report = format_org_report("Acme Corp", 2025, 4, &[]);
        assert_eq!(report.rows.len(), 3);
        assert_eq!(report.rows[0][0].text, REPORT_TITLE);
    }
}
