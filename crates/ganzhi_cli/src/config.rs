//! Optional TOML configuration file.
//!
//! ```toml
//! utc_offset = "+09:00"
//! start_age_rule = "directional"
//! ```

use std::fs;
use std::path::Path;

use ganzhi_base::StartAgeRule;
use ganzhi_chart::ChartConfig;
use ganzhi_time::UtcOffset;
use serde::Deserialize;

/// Settings read from a config file. Absent keys keep their defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub utc_offset: Option<String>,
    pub start_age_rule: Option<StartAgeRule>,
}

impl FileConfig {
    pub fn parse(contents: &str) -> Result<Self, String> {
        toml::from_str(contents).map_err(|e| format!("Failed to parse config TOML: {e}"))
    }

    pub fn load(path: &Path) -> Result<Self, String> {
        let contents = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file {}: {e}", path.display()))?;
        Self::parse(&contents)
    }

    /// Overlay these settings on `base`.
    pub fn apply(&self, base: ChartConfig) -> Result<ChartConfig, String> {
        let mut config = base;
        if let Some(offset) = &self.utc_offset {
            config.utc_offset = parse_offset(offset)?;
        }
        if let Some(rule) = self.start_age_rule {
            config.start_age_rule = rule;
        }
        Ok(config)
    }
}

pub fn parse_offset(s: &str) -> Result<UtcOffset, String> {
    s.parse::<UtcOffset>()
        .map_err(|e| format!("Invalid UTC offset '{s}': {e}"))
}

/// Chart configuration from defaults, then the config file, then `--offset`.
pub fn resolve(file: Option<&Path>, offset: Option<&str>) -> Result<ChartConfig, String> {
    let mut config = ChartConfig::default();
    if let Some(path) = file {
        config = FileConfig::load(path)?.apply(config)?;
        tracing::debug!(path = %path.display(), "loaded config file");
    }
    if let Some(offset) = offset {
        config.utc_offset = parse_offset(offset)?;
    }
    Ok(config)
}
