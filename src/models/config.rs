//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// HTTP client behavior settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Export directory settings
    #[serde(default)]
    pub export: ExportConfig,

    /// CSS selector signatures for the directory site's page templates
    #[serde(default)]
    pub selectors: SelectorConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    ///
    /// Selector strings are validated separately when they are compiled.
    pub fn validate(&self) -> Result<()> {
        if self.http.user_agent.trim().is_empty() {
            return Err(AppError::config("http.user_agent is empty"));
        }
        if self.http.timeout_secs == 0 {
            return Err(AppError::config("http.timeout_secs must be > 0"));
        }
        if self.export.csv_dir.trim().is_empty() {
            return Err(AppError::config("export.csv_dir is empty"));
        }
        if self.export.excel_dir.trim().is_empty() {
            return Err(AppError::config("export.excel_dir is empty"));
        }
        Ok(())
    }
}

/// HTTP client behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Delay between top-level URLs in milliseconds
    #[serde(default = "defaults::request_delay")]
    pub request_delay_ms: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            request_delay_ms: defaults::request_delay(),
        }
    }
}

/// Export directory settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory for CSV output files
    #[serde(default = "defaults::csv_dir")]
    pub csv_dir: String,

    /// Directory for Excel output files
    #[serde(default = "defaults::excel_dir")]
    pub excel_dir: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            csv_dir: defaults::csv_dir(),
            excel_dir: defaults::excel_dir(),
        }
    }
}

/// Selector signatures for both page templates.
///
/// Each entry is a structural fingerprint (tag + class combination) of the
/// site's current rendering. When the site ships new markup the affected
/// fields silently degrade to absent; updating these strings is the fix.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SelectorConfig {
    #[serde(default)]
    pub studio: StudioSelectorConfig,

    #[serde(default)]
    pub workshop: WorkshopSelectorConfig,
}

/// Selector signatures for the studio overview page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudioSelectorConfig {
    /// Studio name heading
    #[serde(default = "defaults::studio_name")]
    pub name: String,

    /// Container holding the overview navigation buttons
    #[serde(default = "defaults::studio_overview")]
    pub overview: String,

    /// Container holding the contact anchors
    #[serde(default = "defaults::studio_contact")]
    pub contact: String,

    /// Address paragraph
    #[serde(default = "defaults::studio_address")]
    pub address: String,

    /// Description container
    #[serde(default = "defaults::studio_description")]
    pub description: String,

    /// Category tag paragraphs
    #[serde(default = "defaults::studio_category")]
    pub category: String,

    /// Promotion paragraph
    #[serde(default = "defaults::studio_promotion")]
    pub promotion: String,
}

impl Default for StudioSelectorConfig {
    fn default() -> Self {
        Self {
            name: defaults::studio_name(),
            overview: defaults::studio_overview(),
            contact: defaults::studio_contact(),
            address: defaults::studio_address(),
            description: defaults::studio_description(),
            category: defaults::studio_category(),
            promotion: defaults::studio_promotion(),
        }
    }
}

/// Selector signatures for the workshop schedule and event detail pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkshopSelectorConfig {
    /// Schedule page heading (studio name)
    #[serde(default = "defaults::studio_name")]
    pub heading: String,

    /// Container holding the schedule rows
    #[serde(default = "defaults::workshop_schedule")]
    pub schedule: String,

    /// Title node inside a schedule row anchor
    #[serde(default = "defaults::workshop_row_title")]
    pub row_title: String,

    /// Date node inside a schedule row anchor
    #[serde(default = "defaults::workshop_row_date")]
    pub row_date: String,

    /// Path marker identifying event detail links
    #[serde(default = "defaults::event_path_marker")]
    pub event_path_marker: String,

    /// Event detail: title heading
    #[serde(default = "defaults::studio_name")]
    pub detail_title: String,

    /// Event detail: date paragraph
    #[serde(default = "defaults::workshop_detail_date")]
    pub detail_date: String,

    /// Event detail: time paragraph
    #[serde(default = "defaults::workshop_detail_time")]
    pub detail_time: String,

    /// Event detail: price paragraph
    #[serde(default = "defaults::workshop_detail_price")]
    pub detail_price: String,

    /// Event detail: trainer paragraph
    #[serde(default = "defaults::workshop_detail_trainer")]
    pub detail_trainer: String,

    /// Event detail: description container
    #[serde(default = "defaults::studio_description")]
    pub detail_description: String,
}

impl Default for WorkshopSelectorConfig {
    fn default() -> Self {
        Self {
            heading: defaults::studio_name(),
            schedule: defaults::workshop_schedule(),
            row_title: defaults::workshop_row_title(),
            row_date: defaults::workshop_row_date(),
            event_path_marker: defaults::event_path_marker(),
            detail_title: defaults::studio_name(),
            detail_date: defaults::workshop_detail_date(),
            detail_time: defaults::workshop_detail_time(),
            detail_price: defaults::workshop_detail_price(),
            detail_trainer: defaults::workshop_detail_trainer(),
            detail_description: defaults::studio_description(),
        }
    }
}

mod defaults {
    // HTTP defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; polescrape/0.1)".into()
    }
    pub fn timeout() -> u64 {
        30
    }
    pub fn request_delay() -> u64 {
        100
    }

    // Export defaults (fixed directory names the operator expects)
    pub fn csv_dir() -> String {
        "CSV".into()
    }
    pub fn excel_dir() -> String {
        "Excel".into()
    }

    // Studio page fingerprints (MUI class hashes of the current rendering)
    pub fn studio_name() -> String {
        "h1.MuiTypography-root.MuiTypography-h1.css-l64ylu".into()
    }
    pub fn studio_overview() -> String {
        "div.MuiStack-root.css-sgccrm".into()
    }
    pub fn studio_contact() -> String {
        "div.css-1x2phcg".into()
    }
    pub fn studio_address() -> String {
        "p.MuiTypography-root.MuiTypography-body1.css-1619old".into()
    }
    pub fn studio_description() -> String {
        "div.MuiBox-root.css-0".into()
    }
    pub fn studio_category() -> String {
        "p.MuiTypography-root.MuiTypography-body1.css-6ik050".into()
    }
    pub fn studio_promotion() -> String {
        "p.MuiTypography-root.MuiTypography-body1.css-153qxhx".into()
    }

    // Schedule and event page fingerprints
    pub fn workshop_schedule() -> String {
        "div.MuiStack-root.css-1v5z18m".into()
    }
    pub fn workshop_row_title() -> String {
        "p.MuiTypography-root.MuiTypography-body1.css-d8fzsd".into()
    }
    pub fn workshop_row_date() -> String {
        "p.MuiTypography-root.MuiTypography-body2.css-1a4qu0s".into()
    }
    pub fn event_path_marker() -> String {
        "/e/".into()
    }
    pub fn workshop_detail_date() -> String {
        "p.MuiTypography-root.MuiTypography-body1.css-1e1x7b6".into()
    }
    pub fn workshop_detail_time() -> String {
        "p.MuiTypography-root.MuiTypography-body1.css-cs23xy".into()
    }
    pub fn workshop_detail_price() -> String {
        "p.MuiTypography-root.MuiTypography-body1.css-wjsspw".into()
    }
    pub fn workshop_detail_trainer() -> String {
        "p.MuiTypography-root.MuiTypography-body1.css-1t2vmkw".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_user_agent() {
        let mut config = Config::default();
        config.http.user_agent = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.http.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.export.csv_dir, "CSV");
        assert_eq!(config.export.excel_dir, "Excel");
        assert!(config.selectors.studio.name.starts_with("h1."));
    }

    #[test]
    fn partial_toml_overrides_one_field() {
        let config: Config = toml::from_str(
            r#"
            [selectors.studio]
            name = "h1.new-fingerprint"
            "#,
        )
        .unwrap();
        assert_eq!(config.selectors.studio.name, "h1.new-fingerprint");
        // untouched siblings keep their defaults
        assert_eq!(config.selectors.studio.contact, "div.css-1x2phcg");
    }
}
