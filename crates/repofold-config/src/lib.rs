//! Configuration model and validation for repofold.
//!
//! Precedence: CLI arguments > config file > built-in defaults. The size
//! ceilings and the ignore-pattern list are deployment-time configuration,
//! not per-run parameters: a pipeline compiled from one `Config` keeps that
//! configuration for its whole lifetime.
//!
//! # Configuration file format
//!
//! ```toml
//! [limits]
//! per_file_bytes = 102400
//! total_bytes = 512000
//!
//! [selectors]
//! exclude = ["node_modules/**", ".git/**", "**/*.log"]
//! ```

use camino::Utf8Path;
use serde::{Deserialize, Serialize};

use repofold_selectors::Selectors;
use repofold_utils::error::{ConfigError, RepofoldError};

/// Per-file size ceiling: 100 KiB of decoded text.
pub const DEFAULT_PER_FILE_BYTES: usize = 100 * 1024;

/// Aggregate size ceiling across all admitted files: 500 KiB.
pub const DEFAULT_TOTAL_BYTES: usize = 500 * 1024;

/// Size ceilings for budget accounting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limits {
    /// Maximum decoded byte length for a single admitted file.
    #[serde(default = "default_per_file_bytes")]
    pub per_file_bytes: usize,
    /// Maximum total decoded bytes admitted across the whole run.
    #[serde(default = "default_total_bytes")]
    pub total_bytes: usize,
}

fn default_per_file_bytes() -> usize {
    DEFAULT_PER_FILE_BYTES
}

fn default_total_bytes() -> usize {
    DEFAULT_TOTAL_BYTES
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            per_file_bytes: DEFAULT_PER_FILE_BYTES,
            total_bytes: DEFAULT_TOTAL_BYTES,
        }
    }
}

/// Configuration for repofold import runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub limits: Limits,
    #[serde(default)]
    pub selectors: Selectors,
}

impl Config {
    /// Create a builder for programmatic configuration.
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Load configuration from a TOML file and validate it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::FileRead`] if the file cannot be read,
    /// [`ConfigError::Parse`] on invalid TOML, and
    /// [`ConfigError::InvalidValue`] for out-of-range limits or bad globs.
    pub fn from_file(path: &Utf8Path) -> Result<Self, RepofoldError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_string(),
            source,
        })?;

        let config: Self = toml::from_str(&raw).map_err(|e| ConfigError::Parse {
            path: path.to_string(),
            message: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validate limits and glob patterns.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.limits.per_file_bytes == 0 {
            return Err(ConfigError::InvalidValue {
                key: "limits.per_file_bytes".to_string(),
                value: "must be greater than zero".to_string(),
            });
        }
        if self.limits.total_bytes == 0 {
            return Err(ConfigError::InvalidValue {
                key: "limits.total_bytes".to_string(),
                value: "must be greater than zero".to_string(),
            });
        }
        if self.limits.per_file_bytes > self.limits.total_bytes {
            return Err(ConfigError::InvalidValue {
                key: "limits.per_file_bytes".to_string(),
                value: format!(
                    "{} exceeds limits.total_bytes ({})",
                    self.limits.per_file_bytes, self.limits.total_bytes
                ),
            });
        }
        self.selectors.validate()
    }
}

/// Builder for programmatic configuration.
///
/// Values not set explicitly fall back to the built-in defaults.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    per_file_bytes: Option<usize>,
    total_bytes: Option<usize>,
    exclude: Option<Vec<String>>,
}

impl ConfigBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the per-file size ceiling.
    #[must_use]
    pub const fn per_file_bytes(mut self, bytes: usize) -> Self {
        self.per_file_bytes = Some(bytes);
        self
    }

    /// Override the aggregate size ceiling.
    #[must_use]
    pub const fn total_bytes(mut self, bytes: usize) -> Self {
        self.total_bytes = Some(bytes);
        self
    }

    /// Replace the exclusion pattern list.
    #[must_use]
    pub fn exclude_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude = Some(patterns.into_iter().map(Into::into).collect());
        self
    }

    /// Build and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for out-of-range limits or
    /// invalid glob patterns.
    pub fn build(self) -> Result<Config, ConfigError> {
        let defaults = Limits::default();
        let config = Config {
            limits: Limits {
                per_file_bytes: self.per_file_bytes.unwrap_or(defaults.per_file_bytes),
                total_bytes: self.total_bytes.unwrap_or(defaults.total_bytes),
            },
            selectors: self
                .exclude
                .map_or_else(Selectors::default, |exclude| Selectors { exclude }),
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_limits_match_documented_constants() {
        let config = Config::default();
        assert_eq!(config.limits.per_file_bytes, 102_400);
        assert_eq!(config.limits.total_bytes, 512_000);
    }

    #[test]
    fn builder_applies_overrides_and_validates() {
        let config = Config::builder()
            .per_file_bytes(4096)
            .total_bytes(16_384)
            .exclude_patterns(["secret/**"])
            .build()
            .unwrap();
        assert_eq!(config.limits.per_file_bytes, 4096);
        assert_eq!(config.selectors.exclude, vec!["secret/**".to_string()]);
    }

    #[test]
    fn builder_rejects_per_file_above_total() {
        let err = Config::builder()
            .per_file_bytes(1000)
            .total_bytes(500)
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("limits.per_file_bytes"));
    }

    #[test]
    fn builder_rejects_zero_limits() {
        assert!(Config::builder().per_file_bytes(0).build().is_err());
        assert!(Config::builder().total_bytes(0).build().is_err());
    }

    #[test]
    fn from_file_parses_partial_toml_with_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(file, "[limits]\nper_file_bytes = 2048").unwrap();
        let path = camino::Utf8PathBuf::try_from(file.path().to_path_buf()).unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.limits.per_file_bytes, 2048);
        assert_eq!(config.limits.total_bytes, DEFAULT_TOTAL_BYTES);
        assert!(!config.selectors.exclude.is_empty());
    }

    #[test]
    fn from_file_reports_parse_errors() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(file, "limits = 'not a table'").unwrap();
        let path = camino::Utf8PathBuf::try_from(file.path().to_path_buf()).unwrap();

        let err = Config::from_file(&path).unwrap_err();
        assert!(err.to_string().contains("Configuration error"));
    }

    #[test]
    fn from_file_reports_missing_file() {
        let err = Config::from_file(Utf8Path::new("/nonexistent/repofold.toml")).unwrap_err();
        assert!(matches!(
            err,
            RepofoldError::Config(ConfigError::FileRead { .. })
        ));
    }
}
