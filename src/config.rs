//! Configuration for the page models
//!
//! TOML-backed settings the embedder can tune: the default sort method
//! for origin lists, the display limit for download URLs, and the
//! load-time string overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sites::sort::SortMethod;
use crate::strings::LoadTimeData;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PageConfig {
    #[serde(default)]
    pub sites: SitesSection,
    #[serde(default)]
    pub downloads: DownloadsSection,
    #[serde(default)]
    pub strings: StringsSection,
}

/// Site-settings section
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SitesSection {
    /// Sort method applied to origin lists when the page has not chosen
    /// one; `None` keeps backend order
    pub default_sort: Option<SortMethod>,
}

/// Downloads section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DownloadsSection {
    /// Maximum characters of a download URL shown in the list
    #[serde(default = "default_url_display_limit")]
    pub url_display_limit: usize,
}

fn default_url_display_limit() -> usize {
    300
}

impl Default for DownloadsSection {
    fn default() -> Self {
        Self {
            url_display_limit: default_url_display_limit(),
        }
    }
}

/// Load-time string overrides
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StringsSection {
    #[serde(default)]
    pub is_managed: bool,
    #[serde(default = "default_browser_managed_by_org")]
    pub browser_managed_by_org: String,
}

fn default_browser_managed_by_org() -> String {
    "Your browser is managed by your organization".to_owned()
}

impl Default for StringsSection {
    fn default() -> Self {
        Self {
            is_managed: false,
            browser_managed_by_org: default_browser_managed_by_org(),
        }
    }
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),
    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl PageConfig {
    /// Load configuration from a TOML file and validate it
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: PageConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.downloads.url_display_limit == 0 {
            return Err(ConfigError::InvalidConfig(
                "downloads.url_display_limit must be positive".to_owned(),
            ));
        }
        Ok(())
    }

    /// Load-time data table with this configuration's string overrides
    /// applied over the downloads defaults
    pub fn load_time_data(&self) -> LoadTimeData {
        let mut data = LoadTimeData::downloads_defaults();
        data.set_boolean("isManaged", self.strings.is_managed);
        data.set_string(
            "browserManagedByOrg",
            self.strings.browser_managed_by_org.clone(),
        );
        data
    }

    /// Create a test configuration for unit testing
    #[cfg(test)]
    pub fn test_config() -> Self {
        let toml_content = r#"
[sites]
default_sort = "storage"

[downloads]
url_display_limit = 300

[strings]
is_managed = false
"#;
        toml::from_str(toml_content).expect("test config should parse")
    }
}
