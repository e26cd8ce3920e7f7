#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigParseError,
    ConfigSaveError,
    ConfigModulePortal,
    ConfigModuleProfile,
    PortalNotConfigured,
    ProfileNotConfigured,

    // === SESSION MESSAGES ===
    LoginSucceeded,
    SessionExpired,

    // === ATTENDANCE MESSAGES ===
    RecordsNotFound(String),  // month/year
    AttendanceMarked(String), // date
    AttendanceUpdated(String), // date
    AttendanceDeleted(i64),   // record id
    NothingToUpdate,

    // === CALENDAR MESSAGES ===
    CalendarHeader(String), // month/year

    // === REPORT MESSAGES ===
    ReportHeader(String), // month/year

    // === EXPORT MESSAGES ===
    ExportingReport(String), // month/year
    ExportCompleted(String), // file path
    EmployeesNotFound,
}
