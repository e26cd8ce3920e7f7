//! HTTP client for the attendance portal REST API.
//!
//! Wraps the portal's minimal contract: fetch a month of attendance
//! records, create or update a record, delete one, and list the
//! organization roster. Authentication is a bearer token issued by the
//! login endpoint and cached through [`Session`]; a 401 response clears
//! the cached token and retries the request after a fresh login, up to a
//! small bound.
//!
//! The client performs no local caching of records. Every mutation is
//! followed by a re-fetch at the command layer; the portal is the sole
//! arbiter of record uniqueness.

use crate::libs::config::PortalConfig;
use crate::libs::messages::Message;
use crate::libs::record::{AttendanceRecord, Employee};
use crate::libs::session::Session;
use crate::{msg_info, msg_success};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Password};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const MAX_RETRY_COUNT: i32 = 3;
const ATTENDANCE_URL: &str = "attendance";
const EMPLOYEES_URL: &str = "employees";
const LOGIN_URL: &str = "auth/login";

/// Typed failures of the portal API boundary.
#[derive(Debug, Error)]
pub enum PortalError {
    #[error("portal login failed with status {0}")]
    LoginFailed(StatusCode),
    #[error("portal rejected the request with status {0}")]
    Rejected(StatusCode),
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

#[derive(Serialize)]
struct LoginCredentials {
    employee_code: String,
    password: String,
}

#[derive(Deserialize)]
struct LoginResponse {
    token: String,
}

/// Wire envelope of the attendance query. The portal sometimes wraps the
/// list with a `success` boolean; unknown fields are ignored and a
/// missing `records` field is an empty list.
#[derive(Deserialize)]
struct AttendanceResponse {
    #[serde(default)]
    records: Vec<AttendanceRecord>,
}

#[derive(Deserialize)]
struct EmployeesResponse {
    #[serde(default)]
    employees: Vec<Employee>,
}

/// Payload for creating an attendance record.
#[derive(Debug, Serialize)]
pub struct NewAttendance {
    pub employee_code: String,
    pub date: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Payload for a time-only edit of an existing date.
#[derive(Debug, Serialize)]
pub struct TimeUpdate {
    pub employee_code: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_time: Option<String>,
}

pub struct PortalApi {
    client: Client,
    config: PortalConfig,
    session: Session,
    retries: i32,
}

impl PortalApi {
    pub fn new(config: &PortalConfig, session: Session) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
            session,
            retries: 0,
        }
    }

    pub fn employee(&self) -> &Employee {
        &self.session.employee
    }

    /// Fetches all attendance records of the configured employee for one
    /// (year, month) window.
    pub async fn fetch_month(&mut self, year: i32, month: u32) -> Result<Vec<AttendanceRecord>> {
        let code = self.session.employee.code.clone();
        self.fetch_month_for(&code, year, month).await
    }

    /// Fetches one month of records for an arbitrary employee code; the
    /// organization export walks the roster with this.
    pub async fn fetch_month_for(&mut self, employee_code: &str, year: i32, month: u32) -> Result<Vec<AttendanceRecord>> {
        loop {
            let token = self.token().await?;
            let url = format!("{}/{}", self.config.api_url, ATTENDANCE_URL);
            let res = self
                .client
                .get(url)
                .query(&[
                    ("employee_code", employee_code.to_string()),
                    ("month", month.to_string()),
                    ("year", year.to_string()),
                ])
                .bearer_auth(token)
                .send()
                .await
                .map_err(PortalError::Transport)?;

            match res.status() {
                StatusCode::UNAUTHORIZED if self.retries < MAX_RETRY_COUNT => self.expire_session()?,
                status if status.is_success() => {
                    let body: AttendanceResponse = res.json().await.map_err(PortalError::Transport)?;
                    return Ok(body.records);
                }
                status => return Err(PortalError::Rejected(status).into()),
            }
        }
    }

    /// Creates a new attendance record.
    pub async fn submit(&mut self, attendance: &NewAttendance) -> Result<()> {
        loop {
            let token = self.token().await?;
            let url = format!("{}/{}", self.config.api_url, ATTENDANCE_URL);
            let res = self
                .client
                .post(url)
                .bearer_auth(token)
                .json(attendance)
                .send()
                .await
                .map_err(PortalError::Transport)?;

            match res.status() {
                StatusCode::UNAUTHORIZED if self.retries < MAX_RETRY_COUNT => self.expire_session()?,
                status if status.is_success() => return Ok(()),
                status => return Err(PortalError::Rejected(status).into()),
            }
        }
    }

    /// Updates the in/out times of an existing date.
    pub async fn update_times(&mut self, update: &TimeUpdate) -> Result<()> {
        loop {
            let token = self.token().await?;
            let url = format!("{}/{}", self.config.api_url, ATTENDANCE_URL);
            let res = self
                .client
                .put(url)
                .bearer_auth(token)
                .json(update)
                .send()
                .await
                .map_err(PortalError::Transport)?;

            match res.status() {
                StatusCode::UNAUTHORIZED if self.retries < MAX_RETRY_COUNT => self.expire_session()?,
                status if status.is_success() => return Ok(()),
                status => return Err(PortalError::Rejected(status).into()),
            }
        }
    }

    /// Deletes an attendance record by server id.
    pub async fn delete(&mut self, id: i64) -> Result<()> {
        loop {
            let token = self.token().await?;
            let url = format!("{}/{}/{}", self.config.api_url, ATTENDANCE_URL, id);
            let res = self.client.delete(url).bearer_auth(token).send().await.map_err(PortalError::Transport)?;

            match res.status() {
                StatusCode::UNAUTHORIZED if self.retries < MAX_RETRY_COUNT => self.expire_session()?,
                status if status.is_success() => return Ok(()),
                status => return Err(PortalError::Rejected(status).into()),
            }
        }
    }

    /// Fetches the organization roster.
    pub async fn fetch_employees(&mut self) -> Result<Vec<Employee>> {
        loop {
            let token = self.token().await?;
            let url = format!("{}/{}", self.config.api_url, EMPLOYEES_URL);
            let res = self.client.get(url).bearer_auth(token).send().await.map_err(PortalError::Transport)?;

            match res.status() {
                StatusCode::UNAUTHORIZED if self.retries < MAX_RETRY_COUNT => self.expire_session()?,
                status if status.is_success() => {
                    let body: EmployeesResponse = res.json().await.map_err(PortalError::Transport)?;
                    return Ok(body.employees);
                }
                status => return Err(PortalError::Rejected(status).into()),
            }
        }
    }

    /// Returns the cached token, logging in first when there is none.
    async fn token(&mut self) -> Result<String> {
        if let Some(token) = self.session.token() {
            return Ok(token.to_string());
        }
        self.login().await
    }

    async fn login(&mut self) -> Result<String> {
        let password = Password::with_theme(&ColorfulTheme::default())
            .with_prompt("Enter your portal password")
            .interact()?;
        let credentials = LoginCredentials {
            employee_code: self.session.employee.code.clone(),
            password,
        };

        let url = format!("{}/{}", self.config.api_url, LOGIN_URL);
        let res = self.client.post(url).json(&credentials).send().await.map_err(PortalError::Transport)?;

        if !res.status().is_success() {
            return Err(PortalError::LoginFailed(res.status()).into());
        }

        let body: LoginResponse = res.json().await.map_err(PortalError::Transport)?;
        self.session.set_token(body.token.clone())?;
        msg_success!(Message::LoginSucceeded);
        Ok(body.token)
    }

    fn expire_session(&mut self) -> Result<()> {
        msg_info!(Message::SessionExpired);
        self.session.clear_token()?;
        self.retries += 1;
        Ok(())
    }
}
