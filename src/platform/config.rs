// Estatery - platform/config.rs
//
// Platform-specific configuration, data directory resolution, and
// config.toml loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for Estatery data and configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/estatery/).
    pub config_dir: PathBuf,

    /// Data directory for the catalog, favourites, and session stores.
    pub data_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to the current directory if platform dirs cannot be
    /// determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            let data_dir = proj_dirs.data_dir().to_path_buf();

            tracing::debug!(
                config = %config_dir.display(),
                data = %data_dir.display(),
                "Platform paths resolved"
            );

            Self {
                config_dir,
                data_dir,
            }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            let fallback = PathBuf::from(".");
            Self {
                config_dir: fallback.clone(),
                data_dir: fallback,
            }
        }
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility -- a newer
/// config file can be used with an older binary without crashing.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[catalog]` section.
    pub catalog: CatalogSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[catalog]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct CatalogSection {
    /// Initial number of cards revealed on listing pages.
    pub visible_count: Option<usize>,
    /// Cards revealed per "Load More" press.
    pub load_more_step: Option<usize>,
    /// Admin dashboard page size in grid view.
    pub grid_page_size: Option<usize>,
    /// Admin dashboard page size in table view.
    pub table_page_size: Option<usize>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: trace, debug, info, warn, error.
    pub level: Option<String>,
}

/// Validated runtime configuration with all defaults applied.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub visible_count: usize,
    pub load_more_step: usize,
    pub grid_page_size: usize,
    pub table_page_size: usize,
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            visible_count: constants::DEFAULT_VISIBLE_COUNT,
            load_more_step: constants::LOAD_MORE_STEP,
            grid_page_size: constants::DEFAULT_GRID_PAGE_SIZE,
            table_page_size: constants::DEFAULT_TABLE_PAGE_SIZE,
            log_level: None,
        }
    }
}

/// Load and validate config.toml from the config directory.
///
/// Returns the validated config plus human-readable warnings for every
/// value that was clamped or rejected. A missing file is not a warning;
/// a malformed file falls back to defaults with a warning.
pub fn load_config(config_dir: &Path) -> (AppConfig, Vec<String>) {
    let mut warnings = Vec::new();
    let path = config_dir.join(constants::CONFIG_FILE_NAME);

    let raw = match std::fs::read_to_string(&path) {
        Ok(content) => match toml::from_str::<RawConfig>(&content) {
            Ok(raw) => raw,
            Err(e) => {
                warnings.push(format!(
                    "Config file '{}' is malformed ({e}); using defaults",
                    path.display()
                ));
                RawConfig::default()
            }
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => RawConfig::default(),
        Err(e) => {
            warnings.push(format!(
                "Cannot read config file '{}' ({e}); using defaults",
                path.display()
            ));
            RawConfig::default()
        }
    };

    let mut config = AppConfig::default();

    if let Some(value) = raw.catalog.visible_count {
        config.visible_count = clamp_page_size("catalog.visible_count", value, &mut warnings);
    }
    if let Some(value) = raw.catalog.load_more_step {
        config.load_more_step = clamp_page_size("catalog.load_more_step", value, &mut warnings);
    }
    if let Some(value) = raw.catalog.grid_page_size {
        config.grid_page_size = clamp_page_size("catalog.grid_page_size", value, &mut warnings);
    }
    if let Some(value) = raw.catalog.table_page_size {
        config.table_page_size = clamp_page_size("catalog.table_page_size", value, &mut warnings);
    }

    if let Some(level) = raw.logging.level {
        match level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => config.log_level = Some(level),
            other => warnings.push(format!(
                "Config 'logging.level' = '{other}' is not a valid level; using default"
            )),
        }
    }

    (config, warnings)
}

/// Clamp a page-size style value into the allowed range, recording a
/// warning when adjustment was needed.
fn clamp_page_size(field: &str, value: usize, warnings: &mut Vec<String>) -> usize {
    let clamped = value.clamp(constants::MIN_PAGE_SIZE, constants::MAX_PAGE_SIZE);
    if clamped != value {
        warnings.push(format!(
            "Config '{field}' = {value} is out of range [{}..{}]; clamped to {clamped}",
            constants::MIN_PAGE_SIZE,
            constants::MAX_PAGE_SIZE
        ));
    }
    clamped
}

// =============================================================================
// Unit tests
// =============================================================================
