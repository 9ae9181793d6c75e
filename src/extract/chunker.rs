//! Noun chunk detection
//!
//! Identifies noun phrases with a lexical tagger and the pattern
//! `(ADJ)* (NOUN|PROPN)+`. The tagger is a word list plus suffix rules,
//! which is enough to find the nominal groups in short news copy.

use std::collections::BTreeSet;

use super::tokens::{sentences, strip_possessive, Word};
use super::PhraseExtractor;
use crate::core::stopwords::is_stopword;

const COMMON_VERBS: &[&str] = &[
    "said", "says", "say", "told", "tell", "tells", "made", "make", "makes", "took", "take",
    "takes", "went", "go", "goes", "came", "come", "comes", "got", "get", "gets", "gave",
    "give", "gives", "saw", "see", "sees", "asked", "became", "become", "began", "left",
    "kept", "held", "found", "known", "shown", "seen", "given", "taken", "done", "gone",
    "put", "let", "want", "wants", "need", "needs", "know", "think", "thought", "believe",
    "feel", "felt", "seem", "seems", "remain", "remains", "include", "includes", "won",
    "lost", "hit", "hits", "ran", "run", "runs", "met", "meet", "meets", "led", "lead",
    "leads", "spoke", "speak", "speaks", "wrote", "write", "writes", "may", "might", "must",
    "would", "could", "shall",
];

const COMMON_ADJECTIVES: &[&str] = &[
    "new", "old", "big", "small", "large", "great", "good", "bad", "high", "low", "young",
    "first", "last", "long", "short", "major", "minor", "senior", "junior", "former",
    "latest", "recent", "top", "final", "general", "special", "central", "federal",
    "national", "international", "local", "global", "political", "public", "social",
    "economic", "financial", "several", "many", "various", "whole", "full", "early", "late",
    "hot", "cold", "huge", "key", "main", "real", "little", "best", "better", "worst", "free",
    "strong", "weak", "popular", "famous", "veteran", "upcoming", "official", "total",
    "annual", "daily", "past", "next", "chief", "northern", "southern", "eastern", "western",
];

const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "ive", "able", "ible", "less", "ical"];

/// Words the suffix rules would misread
const NOUN_EXCEPTIONS: &[&str] = &[
    "executive", "detective", "representative", "relative", "archive", "objective", "table",
    "cable", "vegetable", "bible", "family", "rally", "supply", "italy", "assembly", "july",
    "ally", "meeting", "building", "wedding", "funding", "housing", "spending", "training",
    "hearing", "morning", "evening", "ceiling", "hundred", "bed", "shed", "seed", "need",
];

/// Lexical category of a word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosTag {
    Noun,
    ProperNoun,
    Adjective,
    Other,
}

impl PosTag {
    pub fn is_noun(&self) -> bool {
        matches!(self, PosTag::Noun | PosTag::ProperNoun)
    }
}

/// Verb or adverb by word list and inflection
pub(crate) fn is_verb_like(lower: &str) -> bool {
    if NOUN_EXCEPTIONS.contains(&lower) {
        return false;
    }
    COMMON_VERBS.contains(&lower)
        || (lower.len() > 5 && lower.ends_with("ing"))
        || (lower.len() > 4 && lower.ends_with("ed"))
        || (lower.len() > 4 && lower.ends_with("ly"))
}

/// Tag a single word
pub fn tag_word(word: &Word<'_>) -> PosTag {
    let lower = strip_possessive(word.text).to_lowercase();

    if word.is_numeric() || is_stopword(&lower) {
        return PosTag::Other;
    }
    if word.is_capitalized() && !word.is_sentence_start() {
        return PosTag::ProperNoun;
    }
    if is_verb_like(&lower) {
        return PosTag::Other;
    }
    if NOUN_EXCEPTIONS.contains(&lower.as_str()) {
        return PosTag::Noun;
    }
    if COMMON_ADJECTIVES.contains(&lower.as_str())
        || ADJECTIVE_SUFFIXES.iter().any(|s| lower.len() > s.len() + 2 && lower.ends_with(s))
    {
        return PosTag::Adjective;
    }
    PosTag::Noun
}

/// Configuration for noun chunk detection
#[derive(Debug, Clone)]
pub struct ChunkerConfig {
    /// Minimum number of tokens in a chunk
    pub min_length: usize,
    /// Maximum number of tokens in a chunk
    pub max_length: usize,
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            min_length: 1,
            max_length: 4,
        }
    }
}

/// Noun chunk detector
#[derive(Debug, Clone, Default)]
pub struct NounChunker {
    config: ChunkerConfig,
}

impl NounChunker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.config.min_length = min_length.max(1);
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.config.max_length = max_length.max(1);
        self
    }

    /// Noun chunks in document order (duplicates kept)
    pub fn chunks(&self, text: &str) -> Vec<String> {
        let mut out = Vec::new();
        for sentence in sentences(text) {
            let tags: Vec<PosTag> = sentence.iter().map(tag_word).collect();
            let mut i = 0;
            while i < sentence.len() {
                match self.match_noun_phrase(&sentence, &tags, i) {
                    Some(end) => {
                        let len = end - i;
                        if len >= self.config.min_length && len <= self.config.max_length {
                            out.push(
                                sentence[i..end]
                                    .iter()
                                    .map(|w| strip_possessive(w.text))
                                    .collect::<Vec<_>>()
                                    .join(" "),
                            );
                        }
                        i = end;
                    }
                    None => i += 1,
                }
            }
        }
        out
    }

    /// Try `(ADJ)* (NOUN)+` at `start`; returns the exclusive end
    fn match_noun_phrase(&self, words: &[Word<'_>], tags: &[PosTag], start: usize) -> Option<usize> {
        let mut end = start;

        while end < words.len()
            && tags[end] == PosTag::Adjective
            && (end == start || !words[end].after_break)
        {
            end += 1;
        }

        let noun_start = end;
        while end < words.len()
            && tags[end].is_noun()
            && (end == start || !words[end].after_break)
        {
            end += 1;
            // A possessive closes the phrase: "Kapoor's film" -> "Kapoor's", "film"
            if strip_possessive(words[end - 1].text).len() != words[end - 1].text.len() {
                break;
            }
        }

        if end == noun_start {
            return None;
        }
        Some(end)
    }
}

impl PhraseExtractor for NounChunker {
    fn name(&self) -> &'static str {
        "Pattern Noun Phrases"
    }

    fn extract(&self, text: &str) -> BTreeSet<String> {
        self.chunks(text).into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjective_noun_pattern() {
        let chunks = NounChunker::new().chunks(
            "A massive power outage hit the northern district, and residents waited for hours.",
        );
        assert_eq!(
            chunks,
            vec!["massive power outage", "northern district", "residents", "hours"]
        );
    }

    #[test]
    fn test_max_length_drops_long_runs() {
        let chunks = NounChunker::new()
            .with_max_length(2)
            .chunks("The state electricity board office closed.");
        assert!(chunks.is_empty());
    }

    #[test]
    fn test_min_length_drops_single_nouns() {
        let chunks = NounChunker::new().with_min_length(2).chunks(
            "A massive power outage hit the northern district, and residents waited for hours.",
        );
        assert_eq!(chunks, vec!["massive power outage", "northern district"]);
    }

    #[test]
    fn test_proper_nouns_and_possessive() {
        let chunks = NounChunker::new().chunks("Fans praised Shahid Kapoor's new film.");
        assert_eq!(chunks, vec!["Fans", "Shahid Kapoor", "new film"]);
    }

    #[test]
    fn test_tagging() {
        let s = sentences("Officials quickly announced several famous festivals");
        let tags: Vec<PosTag> = s[0].iter().map(tag_word).collect();
        assert_eq!(
            tags,
            vec![
                PosTag::Noun,
                PosTag::Other,
                PosTag::Other,
                PosTag::Adjective,
                PosTag::Adjective,
                PosTag::Noun
            ]
        );
    }
}
