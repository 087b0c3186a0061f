//! Application and estimator configuration.
//!
//! Two concerns live here: the CLI driver's preferences, loaded from
//! environment variables and .env files, and the read-only linguistic
//! resources injected into the syllable estimator.

use crate::error::{Error, Result};
use crate::syllables::boundary::ONSET_CLUSTERS;
use crate::syllables::dict::COMMON_WORDS;
use dotenv::dotenv;
use std::collections::{HashMap, HashSet};
use std::env;
use std::path::PathBuf;

/// Output format for the CLI report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable per-line table.
    #[default]
    Text,
    /// JSON document with lines and reports.
    Json,
}

/// Configuration for the CLI driver.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Report output format.
    pub output: OutputFormat,
    /// Where `Save` writes analyzed lines, if anywhere.
    pub save_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Recognizes `SCANSION_OUTPUT` (`text` or `json`) and `SCANSION_SAVE`
    /// (path for the JSON save sink). A .env file is honored if present.
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        let mut config = Self::default();

        if let Ok(format) = env::var("SCANSION_OUTPUT") {
            config.output = match format.to_lowercase().as_str() {
                "text" => OutputFormat::Text,
                "json" => OutputFormat::Json,
                other => {
                    return Err(Error::config(
                        format!("unknown output format {other:?}"),
                        "Set SCANSION_OUTPUT to \"text\" or \"json\"",
                    ));
                }
            };
        }

        if let Ok(path) = env::var("SCANSION_SAVE") {
            config.save_path = Some(PathBuf::from(path));
        }

        Ok(config)
    }
}

/// Read-only linguistic resources for the syllable estimator.
///
/// Injected rather than referenced as globals so tests can run the
/// estimator against a controlled vocabulary. The default configuration
/// carries the built-in common-word dictionary and onset-cluster table.
#[derive(Debug, Clone)]
pub struct EstimatorConfig {
    /// Cleaned word → stress-per-syllable pattern.
    dictionary: HashMap<String, Vec<bool>>,
    /// Consonant clusters that may begin a syllable.
    onsets: HashSet<String>,
}

impl EstimatorConfig {
    /// Create a configuration with an explicit dictionary and onset table.
    #[must_use]
    pub fn new(dictionary: HashMap<String, Vec<bool>>, onsets: HashSet<String>) -> Self {
        Self { dictionary, onsets }
    }

    /// Create a configuration with an empty dictionary (rule tier only).
    #[must_use]
    pub fn without_dictionary() -> Self {
        Self {
            dictionary: HashMap::new(),
            onsets: ONSET_CLUSTERS.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    /// Look up the stress pattern for a cleaned word.
    #[must_use]
    pub fn lookup(&self, cleaned: &str) -> Option<&[bool]> {
        self.dictionary.get(cleaned).map(Vec::as_slice)
    }

    /// Check whether a consonant cluster is a valid syllable onset.
    #[must_use]
    pub fn is_onset(&self, cluster: &str) -> bool {
        self.onsets.contains(cluster)
    }

    /// Number of dictionary entries.
    #[must_use]
    pub fn dictionary_len(&self) -> usize {
        self.dictionary.len()
    }
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            dictionary: COMMON_WORDS
                .iter()
                .map(|(word, pattern)| ((*word).to_string(), pattern.to_vec()))
                .collect(),
            onsets: ONSET_CLUSTERS.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_default_estimator_config_has_builtins() {
        let config = EstimatorConfig::default();
        assert!(config.dictionary_len() > 100);
        assert_eq!(config.lookup("never"), Some(&[true, false][..]));
        assert!(config.is_onset("str"));
        assert!(!config.is_onset("rst"));
    }

    #[test]
    fn test_injected_vocabulary_overrides() {
        let mut dictionary = HashMap::new();
        dictionary.insert("zap".to_string(), vec![true]);
        let config = EstimatorConfig::new(dictionary, HashSet::new());
        assert_eq!(config.lookup("zap"), Some(&[true][..]));
        assert_eq!(config.lookup("never"), None);
    }

    #[test]
    fn test_without_dictionary_keeps_onsets() {
        let config = EstimatorConfig::without_dictionary();
        assert_eq!(config.dictionary_len(), 0);
        assert!(config.is_onset("spl"));
    }
}
