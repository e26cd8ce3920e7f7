//! Configuration management for the atrak application.
//!
//! Settings live in a JSON file in the platform application-data
//! directory. Two optional modules cover the two things the client needs
//! to know: how to reach the portal, and who the local user is. Either
//! can be configured independently through the interactive `init` wizard;
//! commands that need a missing module fail with a pointer back to it.
//!
//! The employee profile is deliberately explicit configuration rather
//! than something scraped from a hidden session blob: every handler that
//! needs the current user receives it as a value.

use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::record::Employee;
use crate::{msg_error_anyhow, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// A configurable module offered by the `init` wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Portal server connection settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PortalConfig {
    /// Base URL of the portal REST API, without a trailing slash.
    pub api_url: String,
    /// Company identification line for report headers.
    pub company: String,
}

impl PortalConfig {
    pub fn init(existing: &Option<Self>) -> Result<Self> {
        let defaults = existing.clone().unwrap_or(Self {
            api_url: String::new(),
            company: String::new(),
        });
        let api_url: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Portal API URL")
            .with_initial_text(&defaults.api_url)
            .interact_text()?;
        let company: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Company name")
            .with_initial_text(&defaults.company)
            .interact_text()?;
        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            company,
        })
    }
}

/// Top-level application configuration.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    pub portal: Option<PortalConfig>,
    pub profile: Option<Employee>,
}

impl Config {
    /// Reads the configuration file, or returns defaults if none exists.
    pub fn read() -> Result<Self> {
        let config_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(&config_path)?;
        serde_json::from_str(&contents).map_err(|_| msg_error_anyhow!(Message::ConfigParseError))
    }

    /// Saves the configuration to the platform config path.
    pub fn save(&self) -> Result<()> {
        let config_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let file = File::create(&config_path).map_err(|_| msg_error_anyhow!(Message::ConfigSaveError))?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Runs the interactive module-selection wizard over the current
    /// configuration and returns the updated value.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();
        let modules = vec![
            ConfigModule {
                key: "portal".to_string(),
                name: Message::ConfigModulePortal.to_string(),
            },
            ConfigModule {
                key: "profile".to_string(),
                name: Message::ConfigModuleProfile.to_string(),
            },
        ];

        let selection = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt("Select modules to configure")
            .items(&modules.iter().map(|m| m.name.as_str()).collect::<Vec<_>>())
            .interact()?;

        for index in selection {
            match modules[index].key.as_str() {
                "portal" => config.portal = Some(PortalConfig::init(&config.portal)?),
                "profile" => config.profile = Some(init_profile(&config.profile)?),
                _ => {}
            }
        }

        msg_print!(Message::ConfigSaved);
        Ok(config)
    }

    /// The portal module, or an error directing the user to `init`.
    pub fn portal(&self) -> Result<&PortalConfig> {
        self.portal.as_ref().ok_or_else(|| msg_error_anyhow!(Message::PortalNotConfigured))
    }

    /// The employee profile, or an error directing the user to `init`.
    pub fn profile(&self) -> Result<&Employee> {
        self.profile.as_ref().ok_or_else(|| msg_error_anyhow!(Message::ProfileNotConfigured))
    }
}

fn init_profile(existing: &Option<Employee>) -> Result<Employee> {
    let defaults = existing.clone().unwrap_or(Employee {
        name: String::new(),
        code: String::new(),
        department: String::new(),
    });
    let name: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Employee name")
        .with_initial_text(&defaults.name)
        .interact_text()?;
    let code: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Employee code")
        .with_initial_text(&defaults.code)
        .interact_text()?;
    let department: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Department")
        .with_initial_text(&defaults.department)
        .interact_text()?;
    Ok(Employee { name, code, department })
}
