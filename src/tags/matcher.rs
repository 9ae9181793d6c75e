//! Tag matcher
//!
//! Extracted candidates are checked against the vocabulary (exact match after
//! article stripping). Editor-supplied tags are checked against the text
//! itself: plain presence, per-field occurrence, partial-phrase evidence and
//! fuzzy similarity to vocabulary entries.

use serde::Serialize;
use std::collections::BTreeSet;

use super::fuzzy::{best_match, FuzzyMatch};
use super::vocabulary::TagVocabulary;
use crate::core::text::{normalize, strip_articles, strip_punctuation, tokenize};
use crate::extract::{Candidate, Category, Origin};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    Matched,
    Unmatched,
}

/// What justified a match
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Evidence {
    /// The subject itself is a vocabulary entry
    Vocabulary,
    /// Sub-phrases of the subject found among candidates or in the text
    Phrases { phrases: Vec<String> },
    /// Closest vocabulary entry by token-sort ratio
    Fuzzy { choice: String, score: u8 },
}

/// A candidate or tag with its match outcome
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub subject: String,
    pub category: Option<Category>,
    /// Field the candidate came from; `None` for editor-supplied tags
    pub origin: Option<Origin>,
    pub status: MatchStatus,
    pub evidence: Option<Evidence>,
}

impl MatchResult {
    pub fn is_matched(&self) -> bool {
        self.status == MatchStatus::Matched
    }
}

/// Vocabulary-backed matcher
pub struct TagMatcher<'a> {
    vocabulary: &'a TagVocabulary,
    /// Minimum token-sort ratio for fuzzy matches
    threshold: u8,
}

impl<'a> TagMatcher<'a> {
    pub fn new(vocabulary: &'a TagVocabulary) -> Self {
        Self {
            vocabulary,
            threshold: 80,
        }
    }

    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    /// Matched iff the article-stripped, lowercased text is in the vocabulary
    pub fn is_known(&self, text: &str) -> bool {
        self.vocabulary
            .contains(&strip_articles(&text.trim().to_lowercase()))
    }

    pub fn classify(&self, candidate: &Candidate) -> MatchResult {
        let known = self.is_known(&candidate.text);
        MatchResult {
            subject: candidate.text.clone(),
            category: Some(candidate.category),
            origin: Some(candidate.origin),
            status: if known {
                MatchStatus::Matched
            } else {
                MatchStatus::Unmatched
            },
            evidence: known.then_some(Evidence::Vocabulary),
        }
    }

    pub fn classify_all(&self, candidates: &[Candidate]) -> Vec<MatchResult> {
        candidates.iter().map(|c| self.classify(c)).collect()
    }

    /// Best vocabulary entry for `tag` if it clears the threshold
    pub fn fuzzy_match(&self, tag: &str) -> Option<FuzzyMatch> {
        let query = tag.trim().to_lowercase();
        best_match(&query, self.vocabulary.iter())
            .filter(|m| m.score >= self.threshold)
            .map(|m| FuzzyMatch {
                query: tag.to_string(),
                ..m
            })
    }

    /// Fuzzy vocabulary pairing for every tag; one winner per tag at most
    pub fn fuzzy_vocabulary_matches(&self, tags: &[String]) -> Vec<FuzzyMatch> {
        tags.iter().filter_map(|t| self.fuzzy_match(t)).collect()
    }
}

/// Unmatched results, which are the tag suggestions
pub fn suggestions<'a, I>(results: I) -> Vec<&'a MatchResult>
where
    I: IntoIterator<Item = &'a MatchResult>,
{
    results.into_iter().filter(|r| !r.is_matched()).collect()
}

/// Presence of one editor-supplied tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresenceCheck {
    pub tag: String,
    pub found_in_entities: bool,
    pub found_in_text: bool,
    /// The tag and its sub-phrases that were found, in generation order
    pub partial: Vec<String>,
}

impl PresenceCheck {
    pub fn is_present(&self) -> bool {
        self.found_in_text || !self.partial.is_empty()
    }

    /// Evidence column text
    pub fn evidence_label(&self) -> String {
        if self.partial.is_empty() {
            "Not Found".to_string()
        } else {
            self.partial.join(", ")
        }
    }

    pub fn as_match(&self) -> MatchResult {
        MatchResult {
            subject: self.tag.clone(),
            category: None,
            origin: None,
            status: if self.is_present() {
                MatchStatus::Matched
            } else {
                MatchStatus::Unmatched
            },
            evidence: (!self.partial.is_empty()).then(|| Evidence::Phrases {
                phrases: self.partial.clone(),
            }),
        }
    }
}

/// The phrase itself followed by every contiguous word slice, duplicates removed
pub fn sub_phrases(phrase: &str) -> Vec<String> {
    let words = tokenize(phrase);
    let mut out = vec![phrase.to_string()];
    for i in 0..words.len() {
        for j in i + 1..=words.len() {
            let slice = words[i..j].join(" ");
            if !out.contains(&slice) {
                out.push(slice);
            }
        }
    }
    out
}

/// Check an existing tag against entities, candidates and the combined text.
///
/// `text` is the raw title and content joined; it is normalized here, as is
/// the tag. `entities` and `candidates` hold normalized extractor output.
pub fn check_presence(
    tag: &str,
    entities: &BTreeSet<String>,
    candidates: &BTreeSet<String>,
    text: &str,
) -> PresenceCheck {
    let text = normalize(text);
    let needle = normalize(tag);

    let found_in_entities = !needle.is_empty() && entities.contains(&needle);
    let found_in_text = !needle.is_empty()
        && (text.contains(&needle) || tokenize(&text).iter().any(|t| *t == needle));

    let partial = if needle.is_empty() {
        Vec::new()
    } else {
        sub_phrases(&needle)
            .into_iter()
            .filter(|p| candidates.contains(p) || text.contains(p.as_str()))
            .collect()
    };

    PresenceCheck {
        tag: tag.to_string(),
        found_in_entities,
        found_in_text,
        partial,
    }
}

/// Input field of a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Field {
    Title,
    Summary,
    Content,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::Title => "Title",
            Field::Summary => "Summary",
            Field::Content => "Content",
        }
    }
}

/// Fields that contain a tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldOccurrence {
    pub tag: String,
    pub fields: Vec<Field>,
}

impl FieldOccurrence {
    /// `"Title: tag, Content: tag"`
    pub fn label(&self) -> String {
        self.fields
            .iter()
            .map(|f| format!("{}: {}", f.label(), self.tag))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Case-insensitive substring occurrence per field; tags found nowhere are left out
pub fn field_occurrences(
    tags: &[String],
    title: &str,
    summary: &str,
    content: &str,
) -> Vec<FieldOccurrence> {
    let fields = [
        (Field::Title, title.to_lowercase()),
        (Field::Summary, summary.to_lowercase()),
        (Field::Content, content.to_lowercase()),
    ];

    tags.iter()
        .filter_map(|tag| {
            let needle = tag.trim().to_lowercase();
            if needle.is_empty() {
                return None;
            }
            let found: Vec<Field> = fields
                .iter()
                .filter(|(_, text)| text.contains(&needle))
                .map(|(field, _)| *field)
                .collect();
            (!found.is_empty()).then(|| FieldOccurrence {
                tag: tag.clone(),
                fields: found,
            })
        })
        .collect()
}

/// Phrases of title/content resembling each tag.
///
/// The tag loses punctuation and articles first, matching normalized text.
/// For every start word of the cleaned tag, the shortest slice from
/// there that occurs in the text is reported. The closest single word of the
/// text is reported too when its token-sort ratio reaches `threshold`.
/// Pairs are unique and sorted.
pub fn similar_phrases(
    tags: &[String],
    title: &str,
    content: &str,
    threshold: u8,
) -> Vec<(String, String)> {
    let combined = format!("{} {}", title, content).to_lowercase();
    let words = tokenize(&combined);
    let mut pairs: BTreeSet<(String, String)> = BTreeSet::new();

    for tag in tags {
        let cleaned = strip_articles(&strip_punctuation(&tag.trim().to_lowercase()));
        let tag_words = tokenize(&cleaned);

        for i in 0..tag_words.len() {
            for j in i + 1..=tag_words.len() {
                let phrase = tag_words[i..j].join(" ");
                if combined.contains(&phrase) {
                    pairs.insert((tag.clone(), phrase));
                    break;
                }
            }
        }

        if let Some(m) = best_match(&cleaned, words.iter().copied()) {
            if m.score >= threshold {
                pairs.insert((tag.clone(), m.choice));
            }
        }
    }

    pairs.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(text: &str, category: Category) -> Candidate {
        Candidate {
            text: text.to_string(),
            category,
            origin: Origin::Content,
        }
    }

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_exact_match_strips_articles() {
        let vocab = TagVocabulary::from_lines(["bollywood", "hindu"]);
        let matcher = TagMatcher::new(&vocab);

        let results = matcher.classify_all(&[
            candidate("bollywood", Category::Organization),
            candidate("The Hindu", Category::Organization),
            candidate("shahid kapoor", Category::Person),
        ]);
        assert!(results[0].is_matched());
        assert_eq!(results[0].evidence, Some(Evidence::Vocabulary));
        assert!(results[1].is_matched());
        assert!(!results[2].is_matched());
        let suggested: Vec<&str> = suggestions(&results)
            .iter()
            .map(|r| r.subject.as_str())
            .collect();
        assert_eq!(suggested, vec!["shahid kapoor"]);
        assert_eq!(results[2].origin, Some(Origin::Content));
    }

    #[test]
    fn test_empty_inputs() {
        let vocab = TagVocabulary::default();
        let matcher = TagMatcher::new(&vocab);
        assert!(matcher.classify_all(&[]).is_empty());
        assert!(!matcher.classify(&candidate("x", Category::Keyword)).is_matched());
        assert!(matcher.fuzzy_match("anything").is_none());
    }

    #[test]
    fn test_partial_phrase_evidence() {
        let check = check_presence(
            "power outage",
            &BTreeSet::new(),
            &BTreeSet::new(),
            "Residents waited as the outage continued.",
        );
        assert!(!check.found_in_text);
        assert_eq!(check.partial, vec!["outage"]);
        assert!(check.is_present());
        assert_eq!(check.evidence_label(), "outage");
    }

    #[test]
    fn test_presence_full_tag() {
        let entities = set(&["bollywood", "shahid kapoor"]);
        let check = check_presence(
            "Bollywood",
            &entities,
            &entities,
            "Shahid Kapoor attended a Bollywood event.",
        );
        assert!(check.found_in_entities);
        assert!(check.found_in_text);
        assert_eq!(check.partial, vec!["bollywood"]);
    }

    #[test]
    fn test_presence_not_found() {
        let check = check_presence("cricket", &BTreeSet::new(), &BTreeSet::new(), "Film news");
        assert!(!check.is_present());
        assert_eq!(check.evidence_label(), "Not Found");
        assert_eq!(check.as_match().status, MatchStatus::Unmatched);
    }

    #[test]
    fn test_partial_from_candidates() {
        let candidates = set(&["state electricity board"]);
        let check = check_presence(
            "state electricity board",
            &BTreeSet::new(),
            &candidates,
            "The board met.",
        );
        assert_eq!(check.partial, vec!["state electricity board", "board"]);
    }

    #[test]
    fn test_sub_phrases_order() {
        assert_eq!(
            sub_phrases("power outage"),
            vec!["power outage", "power", "outage"]
        );
        assert_eq!(sub_phrases("yoga yoga"), vec!["yoga yoga", "yoga"]);
    }

    #[test]
    fn test_field_occurrences() {
        let tags = vec!["bollywood".to_string(), "cricket".to_string()];
        let found = field_occurrences(
            &tags,
            "Bollywood star",
            "A summary",
            "News from Bollywood",
        );
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].fields, vec![Field::Title, Field::Content]);
        assert_eq!(found[0].label(), "Title: bollywood, Content: bollywood");
    }

    #[test]
    fn test_fuzzy_threshold() {
        let vocab = TagVocabulary::from_lines(["abcde", "abcdefghijklmn"]);
        let matcher = TagMatcher::new(&vocab);

        let m = matcher.fuzzy_match("abcdx").unwrap();
        assert_eq!((m.choice.as_str(), m.score), ("abcde", 80));
        assert!(matcher.fuzzy_match("abcdefghijkxyz").is_none());

        let tags = vec!["abcdx".to_string(), "zzz".to_string()];
        let matches = matcher.fuzzy_vocabulary_matches(&tags);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].query, "abcdx");
    }

    #[test]
    fn test_similar_phrases() {
        let tags = vec!["the power outages".to_string(), "outages".to_string()];
        let pairs = similar_phrases(&tags, "Outage hits city", "power restored later", 80);
        // Substring slice
        assert!(pairs.contains(&("the power outages".to_string(), "power".to_string())));
        // Closest single word, "outages" vs "outage" scores 86
        assert!(pairs.contains(&("outages".to_string(), "outage".to_string())));
        assert_eq!(pairs.len(), 2);
        let mut sorted = pairs.clone();
        sorted.sort();
        assert_eq!(pairs, sorted);
    }

    #[test]
    fn test_similar_phrases_ignore_tag_punctuation() {
        let tags = vec!["covid-19".to_string(), "women's day".to_string()];
        let pairs = similar_phrases(
            &tags,
            &normalize("Covid-19 cases rise"),
            &normalize("Women's Day rally held"),
            80,
        );
        assert!(pairs.contains(&("covid-19".to_string(), "covid19".to_string())));
        assert!(pairs.contains(&("women's day".to_string(), "womens".to_string())));
        assert!(pairs.contains(&("women's day".to_string(), "day".to_string())));
    }
}
