//! Entity, noun-phrase and keyword extraction
//!
//! Every strategy sits behind [`PhraseExtractor`] so the matcher never cares
//! which one produced a candidate.
//!
//! # Components
//!
//! - `entities`: rule-based named-entity recognizer (five categories)
//! - `chunker`: noun phrases from a lexical `(ADJ)* (NOUN)+` pattern
//! - `segments`: noun phrases from stop-word delimited segments
//! - `keyword`: statistical single-document keyword scoring
//! - `gazetteer`: lookup tables for the recognizer

pub mod chunker;
pub mod entities;
pub mod gazetteer;
pub mod keyword;
pub mod segments;
pub mod tokens;

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

use crate::core::config::Config;
use crate::core::stopwords::{is_all_stopwords, remove_stopwords};
use crate::core::text::{strip_articles, strip_punctuation};

pub use chunker::NounChunker;
pub use entities::{Entity, EntityRecognizer, RuleBasedRecognizer};
pub use gazetteer::Gazetteer;
pub use keyword::KeywordExtractor;
pub use segments::SegmentExtractor;

/// A strategy that turns text into a set of phrases
pub trait PhraseExtractor {
    /// Short label used in report headers
    fn name(&self) -> &'static str;

    /// Raw phrases found in `text`; the caller normalizes them
    fn extract(&self, text: &str) -> BTreeSet<String>;
}

/// Where a candidate came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Person,
    Organization,
    Location,
    Group,
    Event,
    NounPhrase,
    Keyword,
}

/// The five entity categories in report order
pub const ENTITY_CATEGORIES: [Category; 5] = [
    Category::Person,
    Category::Organization,
    Category::Location,
    Category::Group,
    Category::Event,
];

impl Category {
    /// Plural heading for report tables
    pub fn label(&self) -> &'static str {
        match self {
            Category::Person => "Persons",
            Category::Organization => "Organizations",
            Category::Location => "Locations",
            Category::Group => "Groups",
            Category::Event => "Events",
            Category::NounPhrase => "Noun Phrases",
            Category::Keyword => "Keywords",
        }
    }

    pub fn is_entity(&self) -> bool {
        ENTITY_CATEGORIES.contains(self)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which input field a candidate was extracted from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    Title,
    Content,
}

/// A normalized string produced by an extractor
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Candidate {
    pub text: String,
    pub category: Category,
    pub origin: Origin,
}

/// Entity strings grouped by category; a string lives in at most one set
#[derive(Debug, Clone, Default, Serialize)]
pub struct EntitySets {
    pub persons: BTreeSet<String>,
    pub organizations: BTreeSet<String>,
    pub locations: BTreeSet<String>,
    pub groups: BTreeSet<String>,
    pub events: BTreeSet<String>,
}

impl EntitySets {
    /// Insert unless the string is already filed under any category
    pub fn insert(&mut self, category: Category, text: String) -> bool {
        if self.contains(&text) {
            return false;
        }
        match self.get_mut(category) {
            Some(set) => set.insert(text),
            None => false,
        }
    }

    pub fn get(&self, category: Category) -> Option<&BTreeSet<String>> {
        match category {
            Category::Person => Some(&self.persons),
            Category::Organization => Some(&self.organizations),
            Category::Location => Some(&self.locations),
            Category::Group => Some(&self.groups),
            Category::Event => Some(&self.events),
            Category::NounPhrase | Category::Keyword => None,
        }
    }

    fn get_mut(&mut self, category: Category) -> Option<&mut BTreeSet<String>> {
        match category {
            Category::Person => Some(&mut self.persons),
            Category::Organization => Some(&mut self.organizations),
            Category::Location => Some(&mut self.locations),
            Category::Group => Some(&mut self.groups),
            Category::Event => Some(&mut self.events),
            Category::NounPhrase | Category::Keyword => None,
        }
    }

    pub fn contains(&self, text: &str) -> bool {
        ENTITY_CATEGORIES
            .iter()
            .filter_map(|c| self.get(*c))
            .any(|set| set.contains(text))
    }

    /// (category, text) pairs in category order
    pub fn iter(&self) -> impl Iterator<Item = (Category, &String)> {
        ENTITY_CATEGORIES.iter().flat_map(move |c| {
            self.get(*c)
                .into_iter()
                .flat_map(move |set| set.iter().map(move |t| (*c, t)))
        })
    }

    /// Union of all five sets
    pub fn all(&self) -> BTreeSet<String> {
        self.iter().map(|(_, t)| t.clone()).collect()
    }

    /// Fold `other` in; strings already present keep their category
    pub fn merge(&mut self, other: &EntitySets) {
        for (category, text) in other.iter() {
            self.insert(category, text.clone());
        }
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Everything the extractors found for one title/content pair
#[derive(Debug, Clone, Default, Serialize)]
pub struct Extraction {
    pub title_entities: EntitySets,
    pub content_entities: EntitySets,
    /// Per-category union of title and content entities
    pub entities: EntitySets,
    pub noun_chunks: BTreeSet<String>,
    pub noun_segments: BTreeSet<String>,
    pub keywords: BTreeSet<String>,
}

impl Extraction {
    /// Flatten into tagged candidates: entities first, then phrases
    pub fn candidates(&self) -> Vec<Candidate> {
        let mut out: Vec<Candidate> = self
            .entities
            .iter()
            .map(|(category, text)| Candidate {
                text: text.clone(),
                category,
                origin: if self.title_entities.contains(text) {
                    Origin::Title
                } else {
                    Origin::Content
                },
            })
            .collect();

        let phrases = self
            .noun_chunks
            .union(&self.noun_segments)
            .map(|t| (Category::NounPhrase, t))
            .chain(self.keywords.iter().map(|t| (Category::Keyword, t)));
        out.extend(phrases.map(|(category, text)| Candidate {
            text: text.clone(),
            category,
            origin: Origin::Content,
        }));
        out
    }

    /// Union of every extractor output
    pub fn candidate_set(&self) -> BTreeSet<String> {
        let mut all = self.entities.all();
        all.extend(self.noun_chunks.iter().cloned());
        all.extend(self.noun_segments.iter().cloned());
        all.extend(self.keywords.iter().cloned());
        all
    }
}

/// Normalize a recognized entity: articles out, lowercase, no all-stop-word names
pub fn finish_entity(raw: &str) -> Option<String> {
    let text = strip_articles(&strip_punctuation(raw)).to_lowercase();
    if text.is_empty() || is_all_stopwords(&text) {
        None
    } else {
        Some(text)
    }
}

/// Normalize a phrase or keyword: articles and stop words out, lowercase
pub fn finish_phrase(raw: &str) -> Option<String> {
    let text = remove_stopwords(&strip_articles(&strip_punctuation(raw))).to_lowercase();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

fn finish_all<F>(raw: BTreeSet<String>, finish: F) -> BTreeSet<String>
where
    F: Fn(&str) -> Option<String>,
{
    raw.iter().filter_map(|p| finish(p)).collect()
}

/// The injected extraction services, built once and shared read-only
pub struct ExtractorSet {
    recognizer: Box<dyn EntityRecognizer>,
    noun_chunks: Box<dyn PhraseExtractor>,
    noun_segments: Box<dyn PhraseExtractor>,
    keywords: Box<dyn PhraseExtractor>,
}

impl ExtractorSet {
    pub fn new(
        recognizer: Box<dyn EntityRecognizer>,
        noun_chunks: Box<dyn PhraseExtractor>,
        noun_segments: Box<dyn PhraseExtractor>,
        keywords: Box<dyn PhraseExtractor>,
    ) -> Self {
        Self {
            recognizer,
            noun_chunks,
            noun_segments,
            keywords,
        }
    }

    /// Default strategies tuned by the config
    pub fn from_config(config: &Config) -> Self {
        let extraction = &config.extraction;
        Self::new(
            Box::new(RuleBasedRecognizer::new(Gazetteer::with_additions(
                &config.gazetteer,
            ))),
            Box::new(NounChunker::new().with_max_length(extraction.max_phrase_words)),
            Box::new(SegmentExtractor::new().with_max_length(extraction.max_phrase_words)),
            Box::new(
                KeywordExtractor::new()
                    .with_limit(extraction.max_keywords)
                    .with_max_ngram(extraction.max_ngram),
            ),
        )
    }

    /// Names of the two noun-phrase strategies and the keyword strategy
    pub fn strategy_names(&self) -> [&'static str; 3] {
        [
            self.noun_chunks.name(),
            self.noun_segments.name(),
            self.keywords.name(),
        ]
    }

    /// Recognize and normalize entities of one text
    pub fn entities(&self, text: &str) -> EntitySets {
        let mut sets = EntitySets::default();
        for entity in self.recognizer.recognize(text) {
            if !entity.category.is_entity() {
                continue;
            }
            if let Some(name) = finish_entity(&entity.text) {
                sets.insert(entity.category, name);
            }
        }
        sets
    }

    pub fn noun_chunks(&self, text: &str) -> BTreeSet<String> {
        finish_all(self.noun_chunks.extract(text), finish_phrase)
    }

    pub fn noun_segments(&self, text: &str) -> BTreeSet<String> {
        finish_all(self.noun_segments.extract(text), finish_phrase)
    }

    pub fn keywords(&self, text: &str) -> BTreeSet<String> {
        finish_all(self.keywords.extract(text), finish_phrase)
    }

    /// Entities from title and content; phrases and keywords from content
    pub fn extract(&self, title: &str, content: &str) -> Extraction {
        let title_entities = self.entities(title);
        let content_entities = self.entities(content);

        let mut entities = title_entities.clone();
        entities.merge(&content_entities);

        Extraction {
            title_entities,
            content_entities,
            entities,
            noun_chunks: self.noun_chunks(content),
            noun_segments: self.noun_segments(content),
            keywords: self.keywords(content),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Returns a fixed phrase list regardless of input
    pub struct FixedExtractor(pub &'static str, pub Vec<&'static str>);

    impl PhraseExtractor for FixedExtractor {
        fn name(&self) -> &'static str {
            self.0
        }

        fn extract(&self, _text: &str) -> BTreeSet<String> {
            self.1.iter().map(|s| s.to_string()).collect()
        }
    }

    /// Returns fixed entities regardless of input
    pub struct FixedRecognizer(pub Vec<(&'static str, Category)>);

    impl EntityRecognizer for FixedRecognizer {
        fn recognize(&self, _text: &str) -> Vec<Entity> {
            self.0
                .iter()
                .map(|(t, c)| Entity {
                    text: t.to_string(),
                    category: *c,
                })
                .collect()
        }
    }

    pub fn fixed_set(
        entities: Vec<(&'static str, Category)>,
        chunks: Vec<&'static str>,
        segments: Vec<&'static str>,
        keywords: Vec<&'static str>,
    ) -> ExtractorSet {
        ExtractorSet::new(
            Box::new(FixedRecognizer(entities)),
            Box::new(FixedExtractor("chunks", chunks)),
            Box::new(FixedExtractor("segments", segments)),
            Box::new(FixedExtractor("keywords", keywords)),
        )
    }

    #[test]
    fn test_finish_entity() {
        assert_eq!(finish_entity("The Hindu"), Some("hindu".to_string()));
        assert_eq!(finish_entity("Bank of America"), Some("bank of america".to_string()));
        assert_eq!(finish_entity("The"), None);
        assert_eq!(finish_entity("of the"), None);
    }

    #[test]
    fn test_finish_phrase() {
        assert_eq!(finish_phrase("the Power of Music"), Some("power music".to_string()));
        assert_eq!(finish_phrase("it is what it is"), None);
        assert_eq!(finish_phrase("Bollywood's"), Some("bollywoods".to_string()));
    }

    #[test]
    fn test_entity_sets_are_disjoint() {
        let mut sets = EntitySets::default();
        assert!(sets.insert(Category::Person, "kapoor".to_string()));
        assert!(!sets.insert(Category::Organization, "kapoor".to_string()));
        assert!(!sets.insert(Category::Keyword, "other".to_string()));
        assert_eq!(sets.len(), 1);
        assert!(sets.organizations.is_empty());
    }

    #[test]
    fn test_extract_normalizes_and_merges() {
        let set = fixed_set(
            vec![("The Shahid Kapoor", Category::Person), ("Mumbai", Category::Location)],
            vec!["the big event", "of the"],
            vec!["Bollywood event"],
            vec!["Event"],
        );
        let extraction = set.extract("title", "content");

        assert!(extraction.entities.persons.contains("shahid kapoor"));
        assert!(extraction.entities.locations.contains("mumbai"));
        assert_eq!(
            extraction.noun_chunks.iter().collect::<Vec<_>>(),
            vec!["big event"]
        );
        assert!(extraction.noun_segments.contains("bollywood event"));
        assert!(extraction.keywords.contains("event"));

        let all = extraction.candidate_set();
        assert_eq!(all.len(), 5);

        let candidates = extraction.candidates();
        assert!(candidates
            .iter()
            .any(|c| c.text == "shahid kapoor" && c.origin == Origin::Title));
        assert!(candidates
            .iter()
            .any(|c| c.text == "event" && c.category == Category::Keyword));
    }

    #[test]
    fn test_empty_extractors() {
        let set = fixed_set(vec![], vec![], vec![], vec![]);
        let extraction = set.extract("", "");
        assert!(extraction.candidates().is_empty());
        assert!(extraction.candidate_set().is_empty());
        assert_eq!(set.strategy_names(), ["chunks", "segments", "keywords"]);
    }
}
