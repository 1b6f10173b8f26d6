//! # Console Configuration
//!
//! Configuration loaded once at startup and read-only afterwards.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     STOCKROOM_CATALOG_SOURCE=seeded|file                               │
//! │     STOCKROOM_CATALOG_PATH=/srv/catalog.json                           │
//! │     STOCKROOM_STORE_NAME="Corner Shop"                                 │
//! │     STOCKROOM_TOP_SELLERS=10                                           │
//! │     STOCKROOM_AUTOLOAD=false                                           │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config <path>, or                                                │
//! │     ~/.config/stockroom/stockroom.toml (Linux)                         │
//! │     ~/Library/Application Support/com.stockroom.console/... (macOS)    │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     seeded catalog, autoload on, top 5 sellers                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [store]
//! name = "Corner Shop"
//!
//! [catalog]
//! source = "file"       # seeded | file
//! path = "/srv/catalog.json"
//! autoload = true
//!
//! [reports]
//! top_sellers_limit = 5
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use stockroom_catalog::Catalog;
use stockroom_core::TOP_SELLERS_LIMIT;
use thiserror::Error;
use tracing::{debug, info, warn};

// =============================================================================
// Config Errors
// =============================================================================

/// Configuration load failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Catalog Source
// =============================================================================

/// Where the product catalog comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogSourceKind {
    /// Built-in demo catalog.
    #[default]
    Seeded,

    /// JSON file at `catalog.path`.
    File,
}

impl std::fmt::Display for CatalogSourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogSourceKind::Seeded => write!(f, "seeded"),
            CatalogSourceKind::File => write!(f, "file"),
        }
    }
}

impl std::str::FromStr for CatalogSourceKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "seeded" | "demo" => Ok(CatalogSourceKind::Seeded),
            "file" | "json" => Ok(CatalogSourceKind::File),
            other => Err(ConfigError::Invalid(format!(
                "Unknown catalog source: '{}'. Valid options: seeded, file",
                other
            ))),
        }
    }
}

// =============================================================================
// Sections
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSettings {
    /// Shown at the top of the dashboard.
    #[serde(default = "default_store_name")]
    pub name: String,
}

fn default_store_name() -> String {
    "Stockroom".to_string()
}

impl Default for StoreSettings {
    fn default() -> Self {
        StoreSettings {
            name: default_store_name(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSettings {
    #[serde(default)]
    pub source: CatalogSourceKind,

    /// Catalog file, required when `source = "file"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Load the catalog at startup if nothing has been loaded yet.
    #[serde(default = "default_true")]
    pub autoload: bool,
}

fn default_true() -> bool {
    true
}

impl Default for CatalogSettings {
    fn default() -> Self {
        CatalogSettings {
            source: CatalogSourceKind::default(),
            path: None,
            autoload: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSettings {
    /// Top sellers listed on the reports page.
    #[serde(default = "default_top_sellers_limit")]
    pub top_sellers_limit: usize,
}

fn default_top_sellers_limit() -> usize {
    TOP_SELLERS_LIMIT
}

impl Default for ReportSettings {
    fn default() -> Self {
        ReportSettings {
            top_sellers_limit: default_top_sellers_limit(),
        }
    }
}

// =============================================================================
// Main Console Configuration
// =============================================================================

/// Complete console configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConsoleConfig {
    #[serde(default)]
    pub store: StoreSettings,

    #[serde(default)]
    pub catalog: CatalogSettings,

    #[serde(default)]
    pub reports: ReportSettings,
}

impl ConsoleConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (stockroom.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        Self::load_with(config_path, |key| std::env::var(key).ok())
    }

    /// [`ConsoleConfig::load`] with an explicit variable lookup.
    fn load_with(
        config_path: Option<PathBuf>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading console config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(lookup);
        config.validate()?;

        Ok(config)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.catalog.source == CatalogSourceKind::File && self.catalog.path.is_none() {
            return Err(ConfigError::Invalid(
                "catalog.path is required when catalog.source = \"file\"".into(),
            ));
        }

        if self.reports.top_sellers_limit == 0 {
            return Err(ConfigError::Invalid(
                "top_sellers_limit must be greater than 0".into(),
            ));
        }

        if self.store.name.trim().is_empty() {
            return Err(ConfigError::Invalid("store.name must not be empty".into()));
        }

        Ok(())
    }

    /// The catalog loader this configuration selects.
    pub fn catalog_loader(&self) -> Catalog {
        match (&self.catalog.source, &self.catalog.path) {
            (CatalogSourceKind::File, Some(path)) => Catalog::file(path),
            _ => Catalog::seeded(),
        }
    }

    /// Applies overrides from a variable lookup.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(source) = lookup("STOCKROOM_CATALOG_SOURCE") {
            match source.parse::<CatalogSourceKind>() {
                Ok(kind) => self.catalog.source = kind,
                Err(err) => warn!(error = %err, "Ignoring STOCKROOM_CATALOG_SOURCE"),
            }
        }

        // A catalog path implies a file catalog
        if let Some(path) = lookup("STOCKROOM_CATALOG_PATH") {
            debug!(path = %path, "Overriding catalog path from environment");
            self.catalog.source = CatalogSourceKind::File;
            self.catalog.path = Some(PathBuf::from(path));
        }

        if let Some(name) = lookup("STOCKROOM_STORE_NAME") {
            self.store.name = name;
        }

        if let Some(limit) = lookup("STOCKROOM_TOP_SELLERS") {
            match limit.parse::<usize>() {
                Ok(n) => self.reports.top_sellers_limit = n,
                Err(_) => warn!(value = %limit, "Ignoring non-numeric STOCKROOM_TOP_SELLERS"),
            }
        }

        if let Some(autoload) = lookup("STOCKROOM_AUTOLOAD") {
            match autoload.to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => self.catalog.autoload = true,
                "0" | "false" | "no" | "off" => self.catalog.autoload = false,
                _ => warn!(value = %autoload, "Unknown STOCKROOM_AUTOLOAD value"),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "stockroom", "console")
            .map(|dirs| dirs.config_dir().join("stockroom.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use stockroom_catalog::CatalogLoader;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ConsoleConfig::default();
        assert_eq!(config.catalog.source, CatalogSourceKind::Seeded);
        assert!(config.catalog.autoload);
        assert_eq!(config.reports.top_sellers_limit, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: ConsoleConfig = toml::from_str(
            r#"
            [catalog]
            source = "file"
            path = "/srv/catalog.json"
            "#,
        )
        .unwrap();

        assert_eq!(config.catalog.source, CatalogSourceKind::File);
        assert!(config.catalog.autoload);
        assert_eq!(config.store.name, "Stockroom");
        assert_eq!(config.catalog_loader().describe(), "file:/srv/catalog.json");
    }

    #[test]
    fn test_config_validation() {
        let mut config = ConsoleConfig::default();

        config.catalog.source = CatalogSourceKind::File;
        assert!(config.validate().is_err());

        config.catalog.path = Some(PathBuf::from("catalog.json"));
        assert!(config.validate().is_ok());

        config.reports.top_sellers_limit = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = ConsoleConfig::default();
        config.apply_overrides(env(&[
            ("STOCKROOM_CATALOG_PATH", "/tmp/catalog.json"),
            ("STOCKROOM_STORE_NAME", "Corner Shop"),
            ("STOCKROOM_TOP_SELLERS", "3"),
            ("STOCKROOM_AUTOLOAD", "off"),
        ]));

        assert_eq!(config.catalog.source, CatalogSourceKind::File);
        assert_eq!(config.catalog.path, Some(PathBuf::from("/tmp/catalog.json")));
        assert_eq!(config.store.name, "Corner Shop");
        assert_eq!(config.reports.top_sellers_limit, 3);
        assert!(!config.catalog.autoload);
    }

    #[test]
    fn test_bad_env_values_are_ignored() {
        let mut config = ConsoleConfig::default();
        config.apply_overrides(env(&[
            ("STOCKROOM_TOP_SELLERS", "many"),
            ("STOCKROOM_AUTOLOAD", "maybe"),
        ]));

        assert_eq!(config.reports.top_sellers_limit, 5);
        assert!(config.catalog.autoload);
    }

    #[test]
    fn test_load_from_explicit_file() {
        let path = std::env::temp_dir().join(format!("stockroom-{}-config.toml", std::process::id()));
        std::fs::write(&path, "[store]\nname = \"Harbor Goods\"\n[reports]\ntop_sellers_limit = 8\n")
            .unwrap();

        let config = ConsoleConfig::load_with(Some(path.clone()), env(&[])).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.store.name, "Harbor Goods");
        assert_eq!(config.reports.top_sellers_limit, 8);
    }

    #[test]
    fn test_load_applies_overrides_after_file() {
        let path = std::env::temp_dir().join(format!("stockroom-{}-override.toml", std::process::id()));
        std::fs::write(&path, "[catalog]\nsource = \"file\"\npath = \"/srv/catalog.json\"\n").unwrap();

        let config = ConsoleConfig::load_with(
            Some(path.clone()),
            env(&[("STOCKROOM_CATALOG_SOURCE", "seeded")]),
        )
        .unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.catalog.source, CatalogSourceKind::Seeded);
        assert_eq!(config.catalog_loader().describe(), "seeded");
    }

    #[test]
    fn test_catalog_source_override() {
        let mut config = ConsoleConfig::default();
        config.apply_overrides(env(&[("STOCKROOM_CATALOG_SOURCE", "demo")]));
        assert_eq!(config.catalog.source, CatalogSourceKind::Seeded);

        config.apply_overrides(env(&[("STOCKROOM_CATALOG_SOURCE", "http")]));
        assert_eq!(config.catalog.source, CatalogSourceKind::Seeded);

        // Without a path a file source fails validation
        config.apply_overrides(env(&[("STOCKROOM_CATALOG_SOURCE", "file")]));
        assert_eq!(config.catalog.source, CatalogSourceKind::File);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_catalog_source_parsing() {
        assert_eq!("seeded".parse::<CatalogSourceKind>().unwrap(), CatalogSourceKind::Seeded);
        assert_eq!("JSON".parse::<CatalogSourceKind>().unwrap(), CatalogSourceKind::File);
        assert!("http".parse::<CatalogSourceKind>().is_err());
    }

    #[test]
    fn test_toml_serialization() {
        let toml_str = toml::to_string_pretty(&ConsoleConfig::default()).unwrap();
        assert!(toml_str.contains("[store]"));
        assert!(toml_str.contains("[catalog]"));
    }
}
