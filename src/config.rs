//! Application settings and form files.
//!
//! Settings live in `<config_dir>/agent-brief/config.json`. Form files are TOML
//! documents holding a [`FormInput`], so a brief can be regenerated from the same
//! answers later.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use dirs::config_dir;
use serde::{Deserialize, Serialize};

use crate::clipboard::STATUS_FLASH;
use crate::models::FormInput;

const APP_NAME: &str = "agent-brief";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Copy every generated brief to the clipboard without being asked.
    pub copy_after_generate: bool,
    /// How long the copy status stays visible, in milliseconds.
    pub status_flash_ms: u64,
    /// Form file used by `generate` when `--form` is not given.
    pub default_form: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            copy_after_generate: false,
            status_flash_ms: STATUS_FLASH.as_millis() as u64,
            default_form: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from the user's config directory.
    /// Returns default config if the file doesn't exist or fails to parse.
    pub fn load() -> Self {
        match get_config_path().and_then(|path| Self::load_from(&path)) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load config, using defaults: {:#}", e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).context("Failed to read config file")?;

        let config = serde_json::from_str(&content).context("Failed to parse config file")?;

        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = serde_json::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, content).context("Failed to write config file")?;

        Ok(())
    }

    pub fn status_flash(&self) -> Duration {
        Duration::from_millis(self.status_flash_ms)
    }
}

pub fn get_config_path() -> Result<PathBuf> {
    let mut path =
        config_dir().ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
    path.push(APP_NAME);
    path.push(CONFIG_FILE);
    Ok(path)
}

/// Read a form file. Fields the file leaves out keep their fresh-form values.
pub fn load_form(path: &Path) -> Result<FormInput> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read form file {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse form file {}", path.display()))
}

/// Write a form file pre-filled the way a fresh form looks.
///
/// Refuses to overwrite an existing file.
pub fn write_form_template(path: &Path) -> Result<()> {
    if path.exists() {
        anyhow::bail!("{} already exists", path.display());
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).context("Failed to create form directory")?;
    }
    let content =
        toml::to_string_pretty(&FormInput::template()).context("Failed to serialize form")?;
    fs::write(path, content)
        .with_context(|| format!("Failed to write form file {}", path.display()))?;
    Ok(())
}
