//! # Atrak - Attendance Tracking Portal Client
//!
//! A command-line client for an attendance portal: monthly calendars,
//! status reports, Excel export, and attendance record management.
//!
//! ## Features
//!
//! - **Calendar View**: Gap-filled monthly grid with weekend/today
//!   classification and per-day durations
//! - **Status Reports**: Fixed-layout monthly report, single-user or
//!   organization-wide grouped by department
//! - **Excel Export**: Spreadsheet export of any report
//! - **Record Management**: Mark days, edit in/out times, undo mistakes
//! - **Time Normalization**: Forgiving free-text "HH:MM" input handling
//!
//! ## Usage
//!
//! ```rust,no_run
//! use atrak::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
