//! Attendance record and employee models as the portal serves them.

use serde::{Deserialize, Serialize};

/// A single day's attendance entry for one employee.
///
/// Records originate from and are mutated only by the portal; the client
/// never edits one locally, it re-fetches after every write. The `date`
/// string is the natural key: calendar and report merging match it by
/// exact string equality, so a record whose date is not ISO "YYYY-MM-DD"
/// simply never lands on a cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Server-assigned identifier, required for deletion.
    #[serde(default)]
    pub id: Option<i64>,
    /// ISO "YYYY-MM-DD" calendar date, unique per employee.
    pub date: String,
    /// Open status string from the wire; see [`AttendanceStatus::parse`].
    #[serde(default)]
    pub status: String,
    /// Clock-in time "HH:MM", independently nullable.
    #[serde(default)]
    pub in_time: Option<String>,
    /// Clock-out time "HH:MM", independently nullable.
    #[serde(default)]
    pub out_time: Option<String>,
    /// Free-text audit note, never machine-interpreted.
    #[serde(default)]
    pub notes: Option<String>,
}

impl AttendanceRecord {
    pub fn status(&self) -> AttendanceStatus {
        AttendanceStatus::parse(&self.status)
    }
}

/// Closed classification of the portal's open status strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceStatus {
    Present,
    Absent,
    PaidLeave,
    CasualLeave,
    SickLeave,
    Unmarked,
}

impl AttendanceStatus {
    /// Parses a wire status value, case-insensitively.
    ///
    /// An empty value parses as `Unmarked`. Any other unrecognized value
    /// falls back to `Absent`; that is the portal's own bucketing for
    /// unknown codes and callers rely on it.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_uppercase().as_str() {
            "" => AttendanceStatus::Unmarked,
            "PRESENT" | "P" => AttendanceStatus::Present,
            "ABSENT" | "A" => AttendanceStatus::Absent,
            "PL" => AttendanceStatus::PaidLeave,
            "CL" => AttendanceStatus::CasualLeave,
            "SL" => AttendanceStatus::SickLeave,
            _ => AttendanceStatus::Absent,
        }
    }

    /// The short code the portal and the status report display.
    pub fn code(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "P",
            AttendanceStatus::Absent => "A",
            AttendanceStatus::PaidLeave => "PL",
            AttendanceStatus::CasualLeave => "CL",
            AttendanceStatus::SickLeave => "SL",
            AttendanceStatus::Unmarked => "",
        }
    }
}

/// Employee identity as the report header and the roster endpoint use it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub name: String,
    /// Human-assigned employee code, distinct from the server's numeric id.
    pub code: String,
    pub department: String,
}
