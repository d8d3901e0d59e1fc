//! Quakelist configuration.
//!
//! The file is resolved through a chain:
//!
//! 1. `--config <path>`, an explicit per-command override
//! 2. `QUAKELIST_CONFIG` env var
//! 3. `~/.quakelist/config.toml`, used only if it exists
//!
//! With no file, every setting takes its default. Named files (1 and 2)
//! must exist.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::{env, fs, io};

use jiff::tz::TimeZone;
use serde::{Deserialize, Serialize};

use crate::format::{
    DEFAULT_NEARBY_OFFSET, DEFAULT_SEPARATOR, EarthquakeFormatter, MagnitudeCategory,
};

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "QUAKELIST_CONFIG";

/// Errors that can occur while loading or applying configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("unknown palette key '{0}': expected magnitude1 through magnitude9 or magnitude10plus")]
    UnknownPaletteKey(String),

    #[error("unknown time zone '{name}': {source}")]
    TimeZone { name: String, source: jiff::Error },
}

/// Quakelist configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct Config {
    /// Token splitting an offset from a place name, e.g. `"of"`.
    pub location_separator: String,

    /// Offset shown when a location has no separator.
    pub nearby_offset: String,

    /// `"UTC"`, `"system"`, or an IANA name such as `"Asia/Tokyo"`.
    pub time_zone: String,

    /// Category key to color. Keys left out use [`default_color`].
    pub palette: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            location_separator: DEFAULT_SEPARATOR.to_string(),
            nearby_offset: DEFAULT_NEARBY_OFFSET.to_string(),
            time_zone: "UTC".to_string(),
            palette: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Resolve and load the config from the chain described in the module docs.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        Self::resolve_from(
            explicit,
            env::var(CONFIG_ENV).ok().as_deref(),
            Self::default_path().as_deref(),
        )
    }

    /// The resolution chain with the env value and default path supplied.
    fn resolve_from(
        explicit: Option<&Path>,
        env_path: Option<&str>,
        default_path: Option<&Path>,
    ) -> Result<Self, ConfigError> {
        // 1. Explicit --config flag.
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        // 2. QUAKELIST_CONFIG environment variable.
        if let Some(path) = env_path
            && !path.is_empty()
        {
            return Self::load_from(Path::new(path));
        }

        // 3. ~/.quakelist/config.toml, if present.
        match default_path {
            Some(path) if path.is_file() => Self::load_from(path),
            _ => {
                tracing::debug!("no config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load config from a specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(key) = config
            .palette
            .keys()
            .find(|k| MagnitudeCategory::from_key(k).is_none())
        {
            return Err(ConfigError::UnknownPaletteKey(key.clone()));
        }

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// The default config file path: `~/.quakelist/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".quakelist").join("config.toml"))
    }

    /// Resolve the configured time zone.
    pub fn time_zone(&self) -> Result<TimeZone, ConfigError> {
        match self.time_zone.as_str() {
            "UTC" | "utc" => Ok(TimeZone::UTC),
            "system" => Ok(TimeZone::system()),
            name => TimeZone::get(name).map_err(|source| ConfigError::TimeZone {
                name: name.to_string(),
                source,
            }),
        }
    }

    /// Build a formatter from this config.
    pub fn formatter(&self) -> Result<EarthquakeFormatter, ConfigError> {
        Ok(EarthquakeFormatter::new(
            self.location_separator.as_str(),
            self.nearby_offset.as_str(),
            self.time_zone()?,
        ))
    }

    /// The color for a category, falling back to the default palette.
    pub fn color(&self, category: MagnitudeCategory) -> &str {
        self.palette
            .get(category.key())
            .map_or_else(|| default_color(category), String::as_str)
    }
}

/// Default palette, from pale blue for minor quakes to deep red for the largest.
pub fn default_color(category: MagnitudeCategory) -> &'static str {
    match category {
        MagnitudeCategory::Magnitude1 => "#4A7BA7",
        MagnitudeCategory::Magnitude2 => "#04B4B3",
        MagnitudeCategory::Magnitude3 => "#10CAC9",
        MagnitudeCategory::Magnitude4 => "#F5A623",
        MagnitudeCategory::Magnitude5 => "#FF7D50",
        MagnitudeCategory::Magnitude6 => "#FC6644",
        MagnitudeCategory::Magnitude7 => "#E75F40",
        MagnitudeCategory::Magnitude8 => "#E13A20",
        MagnitudeCategory::Magnitude9 => "#D93218",
        MagnitudeCategory::Magnitude10Plus => "#C03823",
    }
}
