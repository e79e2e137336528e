//! Application configuration.
//!
//! Settings live in `config.json` inside the platform data directory resolved
//! by [`DataStorage`]. Every section is optional, and a missing file reads as
//! the default configuration, so the dashboard runs without any setup.
//!
//! ## Sections
//!
//! - **dashboard**: fixture directory and the hourly rate used for costs
//! - **ticktick**: TickTick open API endpoint, token and cache lifetime
//! - **legacy**: phase to project mapping for tasks without a project
//!
//! The TickTick token can also come from `TICKTICK_ACCESS_TOKEN` (or a `.env`
//! file), which takes precedence over the stored one.
//!
//! ```rust,no_run
//! use pmdash::libs::config::Config;
//!
//! let config = Config::read()?;
//! println!("{}", config.hourly_rate());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::api::ticktick::TickTickConfig;
use crate::libs::messages::Message;
use crate::libs::task::LegacyProjectFallback;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Rate applied to logged hours when no `dashboard.hourly_rate` is set.
pub const DEFAULT_HOURLY_RATE: f64 = 50.0;
pub const DEFAULT_DATA_DIR: &str = "data";

/// A section offered by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DashboardConfig {
    /// Directory holding the JSON fixtures. Relative paths resolve against the
    /// working directory.
    pub data_dir: String,
    /// Euros per logged hour.
    pub hourly_rate: f64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_dir: DEFAULT_DATA_DIR.to_string(),
            hourly_rate: DEFAULT_HOURLY_RATE,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dashboard: Option<DashboardConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticktick: Option<TickTickConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub legacy: Option<LegacyProjectFallback>,
}

impl Config {
    /// Reads the configuration from the data directory.
    ///
    /// # Errors
    ///
    /// Fails when the file exists but cannot be read or parsed. A missing
    /// file is not an error.
    pub fn read() -> Result<Config> {
        Self::read_from(&DataStorage::new().get_path(CONFIG_FILE_NAME)?)
    }

    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&DataStorage::new().get_path(CONFIG_FILE_NAME)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Hourly rate, falling back to [`DEFAULT_HOURLY_RATE`] when unset,
    /// negative or not finite.
    pub fn hourly_rate(&self) -> f64 {
        self.dashboard
            .as_ref()
            .map(|dashboard| dashboard.hourly_rate)
            .filter(|rate| rate.is_finite() && *rate >= 0.0)
            .unwrap_or(DEFAULT_HOURLY_RATE)
    }

    pub fn data_dir(&self) -> PathBuf {
        let dir = self
            .dashboard
            .as_ref()
            .map(|dashboard| dashboard.data_dir.trim())
            .filter(|dir| !dir.is_empty())
            .unwrap_or(DEFAULT_DATA_DIR);
        PathBuf::from(dir)
    }

    pub fn legacy_fallback(&self) -> LegacyProjectFallback {
        self.legacy.clone().unwrap_or_default()
    }

    /// TickTick settings with the environment token applied.
    pub fn ticktick_config(&self) -> TickTickConfig {
        self.ticktick.clone().unwrap_or_default().with_env_token()
    }

    /// Interactive setup wizard, pre-filled with the current values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            ConfigModule {
                key: "dashboard".to_string(),
                name: "Dashboard".to_string(),
            },
            TickTickConfig::module(),
            ConfigModule {
                key: "legacy".to_string(),
                name: "Legacy project mapping".to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "ticktick" => config.ticktick = Some(TickTickConfig::init(&config.ticktick)?),
                "dashboard" => {
                    let default = config.dashboard.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleDashboard);
                    config.dashboard = Some(DashboardConfig {
                        data_dir: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptDataDir.to_string())
                            .default(default.data_dir)
                            .interact_text()?,
                        hourly_rate: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptHourlyRate.to_string())
                            .default(default.hourly_rate)
                            .interact_text()?,
                    });
                }
                "legacy" => {
                    let default = config.legacy.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleLegacy);
                    let phases: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptLegacyPhases.to_string())
                        .default(default.phases.join(", "))
                        .interact_text()?;
                    config.legacy = Some(LegacyProjectFallback {
                        phases: phases
                            .split(',')
                            .map(|phase| phase.trim().to_string())
                            .filter(|phase| !phase.is_empty())
                            .collect(),
                        project: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptLegacyProject.to_string())
                            .default(default.project)
                            .interact_text()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
