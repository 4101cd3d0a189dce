//! JSON-backed scale configuration.
//!
//! ```json
//! {
//!   "min": "10000",
//!   "scales": [
//!     { "value": "1000000", "name": "million" },
//!     { "value": "1000", "name": "thousand" }
//!   ]
//! }
//! ```
//!
//! `min` is optional and defaults to [`presets::DEFAULT_MIN`]. Divisors are
//! not validated here: a malformed divisor is skipped at format time.

use crate::format::Formatter;
use crate::model::{presets, Scale};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read scale config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed scale config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("scale config must list at least one scale")]
    EmptyScaleList,
}

/// A minimum threshold plus an ordered scale list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleConfig {
    #[serde(default = "default_min")]
    pub min: String,
    pub scales: Vec<Scale>,
}

fn default_min() -> String {
    presets::DEFAULT_MIN.to_string()
}

impl ScaleConfig {
    /// Read and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&contents)?;
        tracing::debug!(
            path = %path.display(),
            scales = config.scales.len(),
            "loaded scale config"
        );
        Ok(config)
    }

    /// Parse and validate config text.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        if config.scales.is_empty() {
            return Err(ConfigError::EmptyScaleList);
        }
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn into_formatter(self) -> Formatter {
        Formatter::new(self.min, self.scales)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_full_config() {
        let json = r#"{
            "min": "5000",
            "scales": [
                {"value": "1000000", "name": "million"},
                {"value": "1000", "name": "thousand"}
            ]
        }"#;
        let config = ScaleConfig::from_json(json).unwrap();
        assert_eq!(config.min, "5000");
        assert_eq!(config.scales[0], Scale::new("1000000", "million"));
        assert_eq!(config.scales.len(), 2);
    }

    #[test]
    fn min_defaults_when_missing() {
        let json = r#"{"scales": [{"value": "1000", "name": "thousand"}]}"#;
        let config = ScaleConfig::from_json(json).unwrap();
        assert_eq!(config.min, presets::DEFAULT_MIN);
    }

    #[test]
    fn empty_scale_list_rejected() {
        let err = ScaleConfig::from_json(r#"{"scales": []}"#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyScaleList));
    }

    #[test]
    fn malformed_json_rejected() {
        let err = ScaleConfig::from_json(r#"{"scales": [{"value": 1000}]}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    /// Writing a config out and loading it back from disk yields the same
    /// scales in the same order.
    #[test]
    fn load_from_file() {
        let config = ScaleConfig {
            min: "10000".into(),
            scales: presets::indian(),
        };
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(config.to_json_pretty().unwrap().as_bytes())
            .unwrap();

        let loaded = ScaleConfig::load(file.path()).unwrap();
        assert_eq!(loaded, config);

        let formatter = loaded.into_formatter();
        assert_eq!(formatter.format("10000000", |n: &str| n.to_string()).unwrap(), "1 crore");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let err = ScaleConfig::load(&path).unwrap_err();
        match err {
            ConfigError::Io { path: p, .. } => assert_eq!(p, path),
            other => panic!("expected Io, got {other:?}"),
        }
    }
}
