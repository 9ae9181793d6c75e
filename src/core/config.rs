//! Taglens configuration module
//!
//! Config is read from a single JSON file (`taglens.json` by default).
//! Every field has a default, so a partial file only overrides what it names
//! and a missing file means "all defaults".

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

use crate::tags::seeds::default_dictionary;

pub const CONFIG_FILE: &str = "taglens.json";
pub const CONFIG_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,

    /// Plain-text tag vocabulary, one tag per line
    #[serde(default = "default_vocabulary_path", rename = "vocabularyPath")]
    pub vocabulary_path: String,

    #[serde(default)]
    pub matching: MatchingConfig,

    #[serde(default)]
    pub extraction: ExtractionConfig,

    #[serde(default)]
    pub feed: FeedConfig,

    /// Category name -> trigger phrases
    #[serde(default = "default_dictionary")]
    pub dictionary: BTreeMap<String, Vec<String>>,

    #[serde(default)]
    pub gazetteer: GazetteerConfig,
}

fn default_version() -> u32 {
    CONFIG_VERSION
}

fn default_vocabulary_path() -> String {
    "updated_tags.txt".to_string()
}

/// Tag matching thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Minimum token-sort ratio (0-100) for a fuzzy match
    #[serde(default = "default_fuzzy_threshold", rename = "fuzzyThreshold")]
    pub fuzzy_threshold: u8,

    /// Row cap for the phrase/keyword comparison table
    #[serde(default = "default_comparison_rows", rename = "comparisonRows")]
    pub comparison_rows: usize,
}

fn default_fuzzy_threshold() -> u8 {
    80
}

fn default_comparison_rows() -> usize {
    20
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            fuzzy_threshold: default_fuzzy_threshold(),
            comparison_rows: default_comparison_rows(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Keywords kept by the statistical extractor
    #[serde(default = "default_max_keywords", rename = "maxKeywords")]
    pub max_keywords: usize,

    /// Longest noun phrase (in words) either phrase strategy emits
    #[serde(default = "default_max_phrase_words", rename = "maxPhraseWords")]
    pub max_phrase_words: usize,

    /// Longest keyword n-gram
    #[serde(default = "default_max_ngram", rename = "maxNgram")]
    pub max_ngram: usize,
}

fn default_max_keywords() -> usize {
    10
}

fn default_max_phrase_words() -> usize {
    4
}

fn default_max_ngram() -> usize {
    3
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            max_keywords: default_max_keywords(),
            max_phrase_words: default_max_phrase_words(),
            max_ngram: default_max_ngram(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    #[serde(default = "default_timeout_secs", rename = "timeoutSecs")]
    pub timeout_secs: u64,

    /// Prefix replaced in every item link before it is fetched
    #[serde(default = "default_link_from", rename = "linkRewriteFrom")]
    pub link_rewrite_from: String,

    #[serde(default = "default_link_to", rename = "linkRewriteTo")]
    pub link_rewrite_to: String,

    /// Leading URL part removed when deriving an item category
    #[serde(default = "default_category_base", rename = "categoryBase")]
    pub category_base: String,

    /// Element whose text is the article body; whole page text otherwise
    #[serde(default = "default_content_selector", rename = "contentSelector")]
    pub content_selector: String,
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_link_from() -> String {
    "https://rss.".to_string()
}

fn default_link_to() -> String {
    "https://rss1.".to_string()
}

fn default_category_base() -> String {
    "https://rss1.oneindia.com/xml4apps/www.oneindia.com/".to_string()
}

fn default_content_selector() -> String {
    "content".to_string()
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            link_rewrite_from: default_link_from(),
            link_rewrite_to: default_link_to(),
            category_base: default_category_base(),
            content_selector: default_content_selector(),
        }
    }
}

/// Extra entries merged into the built-in entity gazetteers
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GazetteerConfig {
    #[serde(default)]
    pub locations: Vec<String>,

    #[serde(default)]
    pub groups: Vec<String>,

    #[serde(default)]
    pub organizations: Vec<String>,

    #[serde(default)]
    pub events: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            vocabulary_path: default_vocabulary_path(),
            matching: MatchingConfig::default(),
            extraction: ExtractionConfig::default(),
            feed: FeedConfig::default(),
            dictionary: default_dictionary(),
            gazetteer: GazetteerConfig::default(),
        }
    }
}

impl Config {
    /// Load config, falling back to defaults when the file is absent or broken
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            info!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        }

        match Self::load_from_file(path) {
            Ok(config) => {
                if config.version > CONFIG_VERSION {
                    warn!(
                        "Config version {} is newer than supported version {}.",
                        config.version, CONFIG_VERSION
                    );
                }
                config
            }
            Err(e) => {
                warn!("Failed to load {}: {:#}. Using defaults.", path.display(), e);
                Self::default()
            }
        }
    }

    fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.version, 1);
        assert_eq!(config.matching.fuzzy_threshold, 80);
        assert_eq!(config.matching.comparison_rows, 20);
        assert_eq!(config.feed.timeout_secs, 10);
        assert!(config.dictionary.contains_key("bollywood"));
    }

    #[test]
    fn test_parse_partial_config() {
        let json = r#"{"matching": {"fuzzyThreshold": 90}, "vocabularyPath": "tags.txt"}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.matching.fuzzy_threshold, 90);
        assert_eq!(config.matching.comparison_rows, 20);
        assert_eq!(config.vocabulary_path, "tags.txt");
        assert_eq!(config.extraction.max_keywords, 10);
    }

    #[test]
    fn test_custom_dictionary_replaces_default() {
        let json = r#"{"dictionary": {"weather": ["monsoon", "cyclone"]}}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.dictionary.len(), 1);
        assert_eq!(config.dictionary["weather"], vec!["monsoon", "cyclone"]);
    }

    #[test]
    fn test_load_missing_and_broken() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        assert_eq!(Config::load(&missing).vocabulary_path, "updated_tags.txt");

        let broken = dir.path().join("broken.json");
        fs::write(&broken, "{ not json").unwrap();
        assert_eq!(Config::load(&broken).matching.fuzzy_threshold, 80);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE);
        let mut config = Config::default();
        config.feed.timeout_secs = 3;
        config.save(&path).unwrap();

        let loaded = Config::load(&path);
        assert_eq!(loaded.feed.timeout_secs, 3);
    }
}
