//! Configuration management for the weekhours application.
//!
//! Settings live in `config.json` inside the platform data directory
//! resolved by [`DataStorage`]. Only presentation settings are stored; the
//! times entered for a week are never written to disk.
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use weekhours::libs::config::Config;
//!
//! let config = Config::read()?;
//! let week = config.week_or_default();
//! println!("Week starts on {}", week.week_start);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::week::{Day, SO_FAR_LABEL};
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use tracing::info;

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Presentation settings for the week table.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WeekConfig {
    /// First row of the week table. Totals do not depend on it.
    pub week_start: Day,

    /// Annotation appended to durations measured against the current time.
    pub so_far_label: String,
}

impl Default for WeekConfig {
    fn default() -> Self {
        WeekConfig {
            week_start: Day::Monday,
            so_far_label: SO_FAR_LABEL.to_string(),
        }
    }
}

/// Root configuration object. Missing sections fall back to defaults.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub week: Option<WeekConfig>,
}

impl Config {
    /// Loads the configuration, or the default one when no file exists yet.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(&config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        info!(path = %config_file_path.display(), "configuration loaded");
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(&config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        info!(path = %config_file_path.display(), "configuration saved");
        Ok(())
    }

    /// Removes the configuration file. Returns false when there was none.
    pub fn delete() -> Result<bool> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(&config_file_path)?;
        info!(path = %config_file_path.display(), "configuration deleted");
        Ok(true)
    }

    pub fn week_or_default(&self) -> WeekConfig {
        self.week.clone().unwrap_or_default()
    }

    /// Interactive setup wizard, prefilled with the current settings.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();
        let default = config.week_or_default();

        msg_print!(Message::ConfigModuleWeek);

        let days: Vec<&str> = Day::ALL.iter().map(|day| day.name()).collect();
        let start_index = Day::ALL.iter().position(|day| *day == default.week_start).unwrap_or(0);
        let selected = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptWeekStart.to_string())
            .items(&days)
            .default(start_index)
            .interact()?;

        let so_far_label: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSoFarLabel.to_string())
            .default(default.so_far_label)
            .interact_text()?;

        config.week = Some(WeekConfig {
            week_start: Day::ALL[selected],
            so_far_label,
        });

        Ok(config)
    }
}
