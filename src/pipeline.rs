//! Analysis pipeline
//!
//! One [`Analyzer`] is built at startup from the config and reused for every
//! submission; it holds the extractors, the vocabulary and the keyword
//! dictionary, none of which change afterwards.

use anyhow::Result;
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::debug;

use crate::core::config::Config;
use crate::core::error::BlankField;
use crate::core::paths::resolve_relative;
use crate::core::text::{clean_markup, highlight, normalize, HighlightedText};
use crate::extract::{Extraction, ExtractorSet};
use crate::tags::matcher::{
    check_presence, field_occurrences, similar_phrases, FieldOccurrence, MatchResult,
    PresenceCheck, TagMatcher,
};
use crate::tags::{DictionaryHit, FuzzyMatch, KeywordDictionary, TagVocabulary};

/// One article to analyze
#[derive(Debug, Clone, Default, Serialize)]
pub struct Submission {
    pub title: String,
    pub summary: String,
    pub content: String,
    /// Tags the editor already attached, lowercase
    pub existing_tags: Vec<String>,
}

impl Submission {
    /// First blank required field, in form order
    pub fn validate(&self) -> Result<(), BlankField> {
        let fields = [
            ("Title", &self.title),
            ("Summary", &self.summary),
            ("Content", &self.content),
        ];
        match fields.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((field, _)) => Err(BlankField { field: *field }),
            None => Ok(()),
        }
    }
}

/// Everything computed for one submission
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub extraction: Extraction,
    /// Entities, noun phrases and keywords against the vocabulary
    pub matches: Vec<MatchResult>,
    pub presence: Vec<PresenceCheck>,
    /// Existing tags as match results, with their partial-phrase evidence
    pub tag_matches: Vec<MatchResult>,
    pub occurrences: Vec<FieldOccurrence>,
    pub fuzzy_matches: Vec<FuzzyMatch>,
    pub similar_phrases: Vec<(String, String)>,
    pub dictionary_hits: Vec<DictionaryHit>,
    pub highlighted_title: HighlightedText,
    pub highlighted_content: HighlightedText,
    /// Column headers of the phrase/keyword comparison
    pub strategies: [&'static str; 3],
}

impl Analysis {
    /// Match results for entity candidates only
    pub fn entity_matches(&self) -> impl Iterator<Item = &MatchResult> {
        self.matches
            .iter()
            .filter(|m| m.category.is_some_and(|c| c.is_entity()))
    }
}

/// Tunables that do not belong to a single service
#[derive(Debug, Clone, Copy)]
pub struct Settings {
    pub fuzzy_threshold: u8,
    pub comparison_rows: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fuzzy_threshold: 80,
            comparison_rows: 20,
        }
    }
}

pub struct Analyzer {
    extractors: ExtractorSet,
    vocabulary: TagVocabulary,
    dictionary: KeywordDictionary,
    settings: Settings,
}

impl Analyzer {
    pub fn new(
        extractors: ExtractorSet,
        vocabulary: TagVocabulary,
        dictionary: KeywordDictionary,
        settings: Settings,
    ) -> Self {
        Self {
            extractors,
            vocabulary,
            dictionary,
            settings,
        }
    }

    /// Build every service from config; the vocabulary path is relative to the config file
    pub fn from_config(config: &Config, config_path: &Path) -> Result<Self> {
        let vocabulary_path = resolve_relative(config_path, &config.vocabulary_path);
        let vocabulary = TagVocabulary::load(&vocabulary_path)?;
        debug!(
            vocabulary = vocabulary.len(),
            categories = config.dictionary.len(),
            "analyzer ready"
        );

        Ok(Self::new(
            ExtractorSet::from_config(config),
            vocabulary,
            KeywordDictionary::new(config.dictionary.clone()),
            Settings {
                fuzzy_threshold: config.matching.fuzzy_threshold,
                comparison_rows: config.matching.comparison_rows,
            },
        ))
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn vocabulary(&self) -> &TagVocabulary {
        &self.vocabulary
    }

    pub fn extractors(&self) -> &ExtractorSet {
        &self.extractors
    }

    pub fn analyze(&self, submission: &Submission) -> Analysis {
        let title = clean_markup(&submission.title);
        let summary = clean_markup(&submission.summary);
        let content = clean_markup(&submission.content);
        let tags = &submission.existing_tags;

        let extraction = self.extractors.extract(&title, &content);
        let matcher = TagMatcher::new(&self.vocabulary).with_threshold(self.settings.fuzzy_threshold);
        let matches = matcher.classify_all(&extraction.candidates());

        let entities: BTreeSet<String> = extraction.entities.all();
        let candidates = extraction.candidate_set();
        let combined = format!("{} {}", title, content);

        let presence: Vec<PresenceCheck> = tags
            .iter()
            .map(|tag| check_presence(tag, &entities, &candidates, &combined))
            .collect();
        let tag_matches = presence.iter().map(PresenceCheck::as_match).collect();

        debug!(
            entities = entities.len(),
            candidates = candidates.len(),
            tags = tags.len(),
            "analysis complete"
        );

        Analysis {
            matches,
            presence,
            tag_matches,
            occurrences: field_occurrences(tags, &title, &summary, &content),
            fuzzy_matches: matcher.fuzzy_vocabulary_matches(tags),
            similar_phrases: similar_phrases(
                tags,
                &normalize(&title),
                &normalize(&content),
                self.settings.fuzzy_threshold,
            ),
            dictionary_hits: self.dictionary.find(&content),
            highlighted_title: highlight(&title, &entities),
            highlighted_content: highlight(&content, &entities),
            strategies: self.extractors.strategy_names(),
            extraction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::tests::fixed_set;
    use crate::extract::Category;
    use crate::tags::seeds::default_dictionary;

    fn analyzer(vocabulary: &[&str]) -> Analyzer {
        Analyzer::new(
            ExtractorSet::from_config(&Config::default()),
            TagVocabulary::from_lines(vocabulary.iter()),
            KeywordDictionary::new(default_dictionary()),
            Settings::default(),
        )
    }

    fn submission(title: &str, content: &str, tags: &[&str]) -> Submission {
        Submission {
            title: title.to_string(),
            summary: "summary".to_string(),
            content: content.to_string(),
            existing_tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_end_to_end_scenario() {
        let analysis = analyzer(&["bollywood"]).analyze(&submission(
            "Star sighting",
            "Shahid Kapoor attended a Bollywood event.",
            &["bollywood"],
        ));

        let kapoor = analysis
            .entity_matches()
            .find(|m| m.subject == "shahid kapoor")
            .unwrap();
        assert!(!kapoor.is_matched());

        let bollywood = analysis
            .matches
            .iter()
            .find(|m| m.subject == "bollywood")
            .unwrap();
        assert!(bollywood.is_matched());

        assert_eq!(analysis.presence.len(), 1);
        assert!(analysis.presence[0].found_in_text);
        assert!(analysis.presence[0].found_in_entities);
        assert!(analysis.tag_matches[0].is_matched());

        assert_eq!(analysis.dictionary_hits[0].category, "bollywood");
        assert_eq!(analysis.fuzzy_matches[0].choice, "bollywood");
        assert_eq!(
            analysis.highlighted_content.render(|s| format!("[{}]", s)),
            "[Shahid Kapoor] attended a [Bollywood] event."
        );
    }

    #[test]
    fn test_markup_is_cleaned_before_extraction() {
        let analyzer = Analyzer::new(
            fixed_set(vec![("Kerala", Category::Location)], vec![], vec![], vec![]),
            TagVocabulary::default(),
            KeywordDictionary::default(),
            Settings::default(),
        );
        let analysis = analyzer.analyze(&submission(
            "<h1>Floods</h1>",
            "<p>Rain in Kerala &amp; beyond http://x.co/a</p>",
            &["kerala", "rain"],
        ));

        assert_eq!(analysis.highlighted_title.text, "Floods");
        assert_eq!(analysis.highlighted_content.text, "Rain in Kerala beyond");
        assert_eq!(analysis.occurrences.len(), 2);
        assert!(analysis.presence.iter().all(|p| p.found_in_text));
        assert!(analysis.matches.iter().all(|m| !m.is_matched()));
    }

    #[test]
    fn test_validation_order() {
        let mut s = submission("", "", &[]);
        assert_eq!(s.validate().unwrap_err().to_string(), "Please fill in the Title input.");
        s.title = "t".to_string();
        s.summary = " ".to_string();
        assert_eq!(s.validate().unwrap_err().field, "Summary");
        s.summary = "s".to_string();
        assert_eq!(s.validate().unwrap_err().field, "Content");
        s.content = "c".to_string();
        assert!(s.validate().is_ok());
    }
}
