//! Configuration handling for the recruitment form

use crate::state::Domain;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User configuration for the form
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormConfig {
    /// Clear the form after a successful submit
    pub reset_on_success: Option<bool>,
    /// Also require year and resume on submit
    pub strict_required_fields: Option<bool>,
    /// Domain preselected on a fresh form
    pub default_domain: Option<Domain>,
}

impl FormConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("org", "acm-sigkdd", "recruit-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, writing the defaults on first run
    pub fn load() -> Result<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };

        if path.exists() {
            return Self::load_from(&path);
        }

        if let Err(err) = Self::seeded().save() {
            tracing::warn!("could not write default config to {}: {err:#}", path.display());
        }
        Ok(Self::default())
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            self.save_to(&path)?;
        }
        Ok(())
    }

    fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: FormConfig = serde_json::from_str(&content)?;
        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Defaults with every option written out
    fn seeded() -> Self {
        Self {
            reset_on_success: Some(false),
            strict_required_fields: Some(false),
            default_domain: Some(Domain::default()),
        }
    }

    pub fn reset_on_success(&self) -> bool {
        self.reset_on_success.unwrap_or(false)
    }

    pub fn strict_required_fields(&self) -> bool {
        self.strict_required_fields.unwrap_or(false)
    }

    pub fn default_domain(&self) -> Domain {
        self.default_domain.unwrap_or_default()
    }
}
