//! Reference tag vocabulary
//!
//! Loaded once per run from a plain-text file and only read afterwards.

use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, warn};

/// Known tags, trimmed and lowercased
#[derive(Debug, Clone, Default)]
pub struct TagVocabulary {
    tags: BTreeSet<String>,
}

impl TagVocabulary {
    /// Read one tag per line. A missing file is an empty vocabulary.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => {
                let vocabulary = Self::from_lines(content.lines());
                debug!(path = %path.display(), tags = vocabulary.len(), "loaded tag vocabulary");
                Ok(vocabulary)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("File not found: {}", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
        }
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tags = lines
            .into_iter()
            .map(|line| line.as_ref().trim().to_lowercase())
            .filter(|line| !line.is_empty())
            .collect();
        Self { tags }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Tags in lexicographic order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_trims_and_lowercases() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "  Bollywood ").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "Power Outage").unwrap();
        writeln!(file, "bollywood").unwrap();

        let vocab = TagVocabulary::load(file.path()).unwrap();
        assert_eq!(vocab.len(), 2);
        assert!(vocab.contains("bollywood"));
        assert!(vocab.contains("power outage"));
        assert_eq!(vocab.iter().collect::<Vec<_>>(), vec!["bollywood", "power outage"]);
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let vocab = TagVocabulary::load(&dir.path().join("updated_tags.txt")).unwrap();
        assert!(vocab.is_empty());
    }
}
