//! Configuration loading and management for atomizer.
//!
//! Loads settings from `atomizer.toml` with environment variable overrides for
//! the model selection. Every field has a default, so a missing file is not an
//! error: the CLI has to work with no arguments at all.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// File name looked up in the working directory and the user config dir
pub const CONFIG_FILE_NAME: &str = "atomizer.toml";

/// Hard ceiling on the keyword list length
pub const MAX_KEYWORDS: usize = 10;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("invalid config value: {0}")]
    Invalid(String),
}

/// NLP model selection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Model identifier (only "en_rules" ships with the crate)
    pub name: String,
    /// Optional TOML file extending the built-in word lists
    pub lexicon: Option<PathBuf>,
    /// Longest input, in bytes, the model accepts
    pub max_length: usize,
}

/// Order in which keyword candidates are kept before truncation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum KeywordOrder {
    /// Position of the first occurrence in the text
    #[default]
    FirstSeen,
    /// Occurrence count, ties broken by first occurrence
    Frequency,
}

/// Summary derivation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// Number of leading sentences joined into the summary
    pub sentences: usize,
    pub max_keywords: usize,
    pub keyword_order: KeywordOrder,
    /// Reading speed used for the duration estimate
    pub words_per_minute: f64,
    /// Upper bound on the duration estimate
    pub max_duration_secs: f64,
    /// Truncate the title to this many characters when set
    pub title_max_chars: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MetricsConfig {
    /// Adds processing time, word count and sentence count to the output
    pub extended: bool,
}

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub model: ModelConfig,
    pub summary: SummaryConfig,
    pub metrics: MetricsConfig,
}

impl Config {
    /// Load configuration from the default locations, falling back to defaults
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match Self::find_config_file() {
            Some(path) => Self::read_file(&path)?,
            None => {
                debug!("no {} found, using defaults", CONFIG_FILE_NAME);
                Config::default()
            }
        };
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::read_file(path)?;
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    fn read_file(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "loading config");
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Override the model selection from environment variables
    fn apply_env(&mut self) {
        if let Ok(name) = std::env::var("ATOMIZER_MODEL") {
            if !name.trim().is_empty() {
                self.model.name = name;
            }
        }
        if let Ok(lexicon) = std::env::var("ATOMIZER_LEXICON") {
            if !lexicon.trim().is_empty() {
                self.model.lexicon = Some(PathBuf::from(lexicon));
            }
        }
    }

    /// Find the config file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        // Check current directory first
        let local_config = PathBuf::from(CONFIG_FILE_NAME);
        if local_config.exists() {
            return Some(local_config);
        }

        // Check home directory
        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config").join("atomizer").join(CONFIG_FILE_NAME);
            if home_config.exists() {
                return Some(home_config);
            }
        }

        None
    }

    /// Reject values that would make the summary meaningless
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.model.name.trim().is_empty() {
            return Err(ConfigError::Invalid("model.name must not be empty".into()));
        }
        if self.model.max_length == 0 {
            return Err(ConfigError::Invalid("model.max_length must be positive".into()));
        }
        if self.summary.max_keywords > MAX_KEYWORDS {
            return Err(ConfigError::Invalid(format!(
                "summary.max_keywords must be at most {}",
                MAX_KEYWORDS
            )));
        }
        if self.summary.sentences == 0 {
            return Err(ConfigError::Invalid("summary.sentences must be at least 1".into()));
        }
        if !(self.summary.words_per_minute.is_finite() && self.summary.words_per_minute > 0.0) {
            return Err(ConfigError::Invalid(
                "summary.words_per_minute must be a positive number".into(),
            ));
        }
        if !(self.summary.max_duration_secs.is_finite() && self.summary.max_duration_secs >= 0.0) {
            return Err(ConfigError::Invalid(
                "summary.max_duration_secs must not be negative".into(),
            ));
        }
        if self.summary.title_max_chars == Some(0) {
            return Err(ConfigError::Invalid("summary.title_max_chars must be positive".into()));
        }
        Ok(())
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: crate::nlp::DEFAULT_MODEL.to_string(),
            lexicon: None,
            max_length: 1_000_000,
        }
    }
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            sentences: 3,
            max_keywords: MAX_KEYWORDS,
            keyword_order: KeywordOrder::FirstSeen,
            words_per_minute: 200.0,
            max_duration_secs: 180.0,
            title_max_chars: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.model.name, "en_rules");
        assert_eq!(config.summary.sentences, 3);
        assert_eq!(config.summary.max_keywords, 10);
        assert_eq!(config.summary.keyword_order, KeywordOrder::FirstSeen);
        assert_eq!(config.summary.words_per_minute, 200.0);
        assert_eq!(config.summary.max_duration_secs, 180.0);
        assert!(!config.metrics.extended);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[summary]\nsentences = 2\nkeyword_order = \"frequency\"\n\n[metrics]\nextended = true"
        )
        .unwrap();

        let config = Config::read_file(file.path()).unwrap();
        assert_eq!(config.summary.sentences, 2);
        assert_eq!(config.summary.keyword_order, KeywordOrder::Frequency);
        assert_eq!(config.summary.max_keywords, 10);
        assert!(config.metrics.extended);
        assert_eq!(config.model.max_length, 1_000_000);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[summary\nsentences = ").unwrap();

        let err = Config::read_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::read_file(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
    }

    #[test]
    fn zero_sentences_rejected() {
        let mut config = Config::default();
        config.summary.sentences = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn keyword_limit_above_ceiling_rejected() {
        let mut config = Config::default();
        config.summary.max_keywords = 25;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        config.summary.max_keywords = 0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn non_positive_reading_speed_rejected() {
        let mut config = Config::default();
        config.summary.words_per_minute = 0.0;
        assert!(config.validate().is_err());

        config.summary.words_per_minute = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn negative_duration_cap_rejected() {
        let mut config = Config::default();
        config.summary.max_duration_secs = -1.0;
        assert!(config.validate().is_err());
    }
}
