//! Tag matching for Taglens
//!
//! Compares extracted candidates and editor-supplied tags against the known
//! tag vocabulary.
//!
//! # Components
//!
//! - `vocabulary`: the reference tag set, one tag per line on disk
//! - `fuzzy`: token-sort similarity scoring
//! - `matcher`: exact, presence, partial-phrase and fuzzy matching
//! - `dictionary`: category trigger phrases
//! - `seeds`: default dictionary data

pub mod dictionary;
pub mod fuzzy;
pub mod matcher;
pub mod seeds;
pub mod vocabulary;

pub use dictionary::{DictionaryHit, KeywordDictionary};
pub use fuzzy::{best_match, token_sort_ratio, FuzzyMatch};
pub use matcher::{
    check_presence, field_occurrences, similar_phrases, Evidence, Field, FieldOccurrence,
    MatchResult, MatchStatus, PresenceCheck, TagMatcher,
};
pub use vocabulary::TagVocabulary;

/// Split a comma-separated tag field into trimmed, lowercase, unique tags.
/// Order of first appearance is kept.
pub fn parse_tag_list(raw: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in raw.split(',') {
        let tag = tag.trim().to_lowercase();
        if !tag.is_empty() && !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tag_list() {
        assert_eq!(
            parse_tag_list(" Bollywood, power outage ,,bollywood, "),
            vec!["bollywood", "power outage"]
        );
        assert!(parse_tag_list("").is_empty());
    }
}
