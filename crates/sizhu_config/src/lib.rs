//! TOML configuration for the sizhu engine.
//!
//! Every section and field is optional; missing values take the defaults
//! shown in [`CONFIG_TEMPLATE`]. After parsing, [`SizhuConfig::validate`]
//! rejects values no provider or search could use.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sizhu_calendar::{
    DEFAULT_UTC_OFFSET_MINUTES, MAX_UTC_OFFSET_MINUTES, OnsetAnchor, ProviderConfig,
    ReverseSearchConfig,
};
use sizhu_ganzhi::{MAX_DAYUN_STEPS, MAX_LIUNIAN_COUNT};
use thiserror::Error;

/// Commented configuration file with every default spelled out.
pub const CONFIG_TEMPLATE: &str = r#"# sizhu configuration

[calendar]
# "astronomical" (accurate) or "table" (approximate, 1900-2100)
provider = "astronomical"
# fall back to the table provider when the astronomical one errors
fallback = true
# zone of input moments, minutes east of UTC
utc_offset_minutes = 480

[fortune]
dayun_steps = 10
liunian_count = 10
# "any-term" or "major-term"
onset_anchor = "any-term"

[reverse]
start_year = 1801
end_year = 2099
chunk_days = 366

[logging]
# tracing filter directive, overridden by RUST_LOG
filter = "warn"
"#;

/// Errors loading or validating a configuration file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("cannot serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Which calendar provider the engine should consult first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[default]
    Astronomical,
    Table,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalendarSection {
    pub provider: ProviderKind,
    pub fallback: bool,
    pub utc_offset_minutes: i32,
}

impl Default for CalendarSection {
    fn default() -> Self {
        Self {
            provider: ProviderKind::default(),
            fallback: true,
            utc_offset_minutes: DEFAULT_UTC_OFFSET_MINUTES,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FortuneSection {
    pub dayun_steps: usize,
    pub liunian_count: usize,
    pub onset_anchor: OnsetAnchor,
}

impl Default for FortuneSection {
    fn default() -> Self {
        Self {
            dayun_steps: 10,
            liunian_count: 10,
            onset_anchor: OnsetAnchor::AnyTerm,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReverseSection {
    pub start_year: i32,
    pub end_year: i32,
    pub chunk_days: u32,
}

impl Default for ReverseSection {
    fn default() -> Self {
        let d = ReverseSearchConfig::default();
        Self {
            start_year: d.start_year,
            end_year: d.end_year,
            chunk_days: d.chunk_days,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingSection {
    pub filter: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
        }
    }
}

/// Whole configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SizhuConfig {
    pub calendar: CalendarSection,
    pub fortune: FortuneSection,
    pub reverse: ReverseSection,
    pub logging: LoggingSection,
}

impl SizhuConfig {
    /// Parse and validate TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let offset = self.calendar.utc_offset_minutes;
        if offset.abs() > MAX_UTC_OFFSET_MINUTES {
            return Err(ConfigError::Invalid(format!(
                "calendar.utc_offset_minutes {offset} is beyond ±{MAX_UTC_OFFSET_MINUTES}"
            )));
        }
        let steps = self.fortune.dayun_steps;
        if !(1..=MAX_DAYUN_STEPS).contains(&steps) {
            return Err(ConfigError::Invalid(format!(
                "fortune.dayun_steps {steps} is outside 1..={MAX_DAYUN_STEPS}"
            )));
        }
        let count = self.fortune.liunian_count;
        if !(1..=MAX_LIUNIAN_COUNT).contains(&count) {
            return Err(ConfigError::Invalid(format!(
                "fortune.liunian_count {count} is outside 1..={MAX_LIUNIAN_COUNT}"
            )));
        }
        let r = &self.reverse;
        if r.start_year > r.end_year {
            return Err(ConfigError::Invalid(format!(
                "reverse.start_year {} is after reverse.end_year {}",
                r.start_year, r.end_year
            )));
        }
        if r.chunk_days == 0 {
            return Err(ConfigError::Invalid("reverse.chunk_days must be > 0".into()));
        }
        Ok(())
    }

    pub fn provider_config(&self) -> ProviderConfig {
        ProviderConfig {
            utc_offset_minutes: self.calendar.utc_offset_minutes,
            ..ProviderConfig::default()
        }
    }

    pub fn reverse_config(&self) -> ReverseSearchConfig {
        ReverseSearchConfig {
            start_year: self.reverse.start_year,
            end_year: self.reverse.end_year,
            chunk_days: self.reverse.chunk_days,
        }
    }
}
