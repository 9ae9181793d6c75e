//! Keyword dictionary lookups

use serde::Serialize;
use std::collections::BTreeMap;

/// Trigger phrases of one category found in a text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DictionaryHit {
    pub category: String,
    pub phrases: Vec<String>,
}

impl DictionaryHit {
    /// Category name with its first letter uppercased
    pub fn label(&self) -> String {
        let mut chars = self.category.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// Category -> trigger phrases, from config
#[derive(Debug, Clone, Default)]
pub struct KeywordDictionary {
    categories: BTreeMap<String, Vec<String>>,
}

impl KeywordDictionary {
    pub fn new(categories: BTreeMap<String, Vec<String>>) -> Self {
        let categories = categories
            .into_iter()
            .map(|(category, phrases)| {
                let phrases = phrases
                    .into_iter()
                    .map(|p| p.trim().to_lowercase())
                    .filter(|p| !p.is_empty())
                    .collect();
                (category, phrases)
            })
            .collect();
        Self { categories }
    }

    /// Categories with at least one phrase occurring in `text` (case-insensitive substring)
    pub fn find(&self, text: &str) -> Vec<DictionaryHit> {
        let text = text.to_lowercase();
        self.categories
            .iter()
            .filter_map(|(category, phrases)| {
                let found: Vec<String> = phrases
                    .iter()
                    .filter(|p| text.contains(p.as_str()))
                    .cloned()
                    .collect();
                (!found.is_empty()).then(|| DictionaryHit {
                    category: category.clone(),
                    phrases: found,
                })
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::seeds::default_dictionary;

    #[test]
    fn test_find_hits() {
        let dictionary = KeywordDictionary::new(default_dictionary());
        let hits = dictionary.find("Shahid Kapoor spoke about the movie industry and yoga.");

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].category, "bollywood");
        assert_eq!(hits[0].phrases, vec!["movie industry", "shahid kapoor"]);
        assert_eq!(hits[0].label(), "Bollywood");
        assert_eq!(hits[1].category, "lifestyle");
    }

    #[test]
    fn test_no_hits() {
        let dictionary = KeywordDictionary::new(default_dictionary());
        assert!(dictionary.find("Nothing relevant").is_empty());
        assert!(KeywordDictionary::default().find("bollywood").is_empty());
    }
}
