//! Display implementation for atrak application messages.
//!
//! All user-facing text lives in this one match so wording stays
//! consistent and every variant makes an explicit formatting decision.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigParseError => "Failed to parse configuration".to_string(),
            Message::ConfigSaveError => "Failed to save configuration".to_string(),
            Message::ConfigModulePortal => "Portal server".to_string(),
            Message::ConfigModuleProfile => "Employee profile".to_string(),
            Message::PortalNotConfigured => "Portal server is not configured. Run 'atrak init' and select the portal module".to_string(),
            Message::ProfileNotConfigured => "Employee profile is not configured. Run 'atrak init' and select the profile module".to_string(),

            // === SESSION MESSAGES ===
            Message::LoginSucceeded => "Logged in to the portal".to_string(),
            Message::SessionExpired => "Portal session expired, logging in again".to_string(),

            // === ATTENDANCE MESSAGES ===
            Message::RecordsNotFound(period) => format!("No attendance records found for {}", period),
            Message::AttendanceMarked(date) => format!("Attendance marked for {}", date),
            Message::AttendanceUpdated(date) => format!("In/out times updated for {}", date),
            Message::AttendanceDeleted(id) => format!("Attendance record {} deleted", id),
            Message::NothingToUpdate => "Nothing to update: provide a status, an in time, or an out time".to_string(),

            // === CALENDAR MESSAGES ===
            Message::CalendarHeader(period) => format!("📅 Attendance calendar for {}", period),

            // === REPORT MESSAGES ===
            Message::ReportHeader(period) => format!("📊 Monthly status report for {}", period),

            // === EXPORT MESSAGES ===
            Message::ExportingReport(period) => format!("Exporting attendance report for {}", period),
            Message::ExportCompleted(path) => format!("Export completed: {}", path),
            Message::EmployeesNotFound => "The portal returned no employees to export".to_string(),
        };
        write!(f, "{}", text)
    }
}
