//! Report building
//!
//! Turns an [`Analysis`] into plain rows of strings. Renderers in
//! `console` and `html` only lay those rows out.

pub mod console;
pub mod html;

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::core::text::HighlightedText;
use crate::extract::{Category, Origin, ENTITY_CATEGORIES};
use crate::pipeline::Analysis;
use crate::tags::matcher::{self, MatchResult};
use crate::tags::{DictionaryHit, FuzzyMatch};

pub const ENTITY_HEADERS: [&str; 3] = ["NER Tags", "Matched Tags", "Unmatched Tags - Suggestable Tags"];
pub const PRESENCE_HEADERS: [&str; 3] = ["Existing Tags", "Found in NER Tags Table", "Found in Title/Content"];
pub const EVIDENCE_HEADERS: [&str; 2] = ["Extracted Tags", "Matched Text Tags"];
pub const OCCURRENCE_HEADERS: [&str; 2] = ["Extracted Tags", "Found in Fields"];

/// Original string, then the same string in the matched or unmatched column
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityRow {
    pub original: String,
    pub matched: String,
    pub unmatched: String,
}

impl EntityRow {
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.original.clone(),
            self.matched.clone(),
            self.unmatched.clone(),
        ]
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EntityTable {
    pub category: Category,
    pub rows: Vec<EntityRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresenceRow {
    pub tag: String,
    pub found_in_entities: bool,
    pub found_in_text: bool,
    /// Partial-phrase evidence or "Not Found"
    pub evidence: String,
}

impl PresenceRow {
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.tag.clone(),
            yes_no(self.found_in_entities).to_string(),
            yes_no(self.found_in_text).to_string(),
        ]
    }

    pub fn evidence_cells(&self) -> Vec<String> {
        vec![self.tag.clone(), self.evidence.clone()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OccurrenceRow {
    pub tag: String,
    /// `"Title: tag, Content: tag"`
    pub fields: String,
}

impl OccurrenceRow {
    pub fn cells(&self) -> Vec<String> {
        vec![self.tag.clone(), self.fields.clone()]
    }
}

/// One extracted candidate and its vocabulary outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateRow {
    pub text: String,
    pub category: Category,
    pub origin: Origin,
    pub matched: bool,
}

/// An unmatched candidate offered as a new tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub text: String,
    pub category: Category,
}

/// Three phrase/keyword strategies side by side
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonTable {
    pub headers: [String; 3],
    pub rows: Vec<[String; 3]>,
}

impl ComparisonTable {
    /// Columns padded with empty strings to equal length, then cut at `max_rows`
    pub fn new(headers: [&str; 3], columns: [&BTreeSet<String>; 3], max_rows: usize) -> Self {
        let columns: Vec<Vec<&String>> = columns.iter().map(|c| c.iter().collect()).collect();
        let longest = columns.iter().map(Vec::len).max().unwrap_or(0);

        let cell = |col: usize, row: usize| -> String {
            columns[col]
                .get(row)
                .map(|s| s.to_string())
                .unwrap_or_default()
        };

        let rows = (0..longest.min(max_rows))
            .map(|row| [cell(0, row), cell(1, row), cell(2, row)])
            .collect();

        Self {
            headers: headers.map(str::to_string),
            rows,
        }
    }
}

/// Every section of one analysis, ready to render
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub entity_tables: Vec<EntityTable>,
    /// Every classified candidate: entities, noun phrases and keywords
    pub candidates: Vec<CandidateRow>,
    pub suggestions: Vec<Suggestion>,
    pub existing_tags: Vec<PresenceRow>,
    /// Existing tags as match results with their partial-phrase evidence
    pub tag_matches: Vec<MatchResult>,
    pub occurrences: Vec<OccurrenceRow>,
    pub comparison: ComparisonTable,
    pub fuzzy_matches: Vec<FuzzyMatch>,
    pub similar_phrases: Vec<(String, String)>,
    pub dictionary_hits: Vec<DictionaryHit>,
    pub highlighted_title: HighlightedText,
    pub highlighted_content: HighlightedText,
}

pub fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

/// Rows for one entity category, in the order the results are given
pub fn entity_rows<'a, I>(results: I) -> Vec<EntityRow>
where
    I: IntoIterator<Item = &'a MatchResult>,
{
    results
        .into_iter()
        .map(|r| EntityRow {
            original: r.subject.clone(),
            matched: if r.is_matched() {
                r.subject.clone()
            } else {
                String::new()
            },
            unmatched: if r.is_matched() {
                String::new()
            } else {
                r.subject.clone()
            },
        })
        .collect()
}

impl Report {
    pub fn build(analysis: &Analysis, comparison_rows: usize) -> Self {
        let entity_tables: Vec<EntityTable> = ENTITY_CATEGORIES
            .iter()
            .map(|category| EntityTable {
                category: *category,
                rows: entity_rows(
                    analysis
                        .entity_matches()
                        .filter(|m| m.category == Some(*category)),
                ),
            })
            .collect();

        let candidates = analysis
            .matches
            .iter()
            .filter_map(|m| {
                Some(CandidateRow {
                    text: m.subject.clone(),
                    category: m.category?,
                    origin: m.origin?,
                    matched: m.is_matched(),
                })
            })
            .collect();

        let suggestions = matcher::suggestions(&analysis.matches)
            .into_iter()
            .filter_map(|m| {
                m.category.map(|category| Suggestion {
                    text: m.subject.clone(),
                    category,
                })
            })
            .collect();

        let existing_tags = analysis
            .presence
            .iter()
            .map(|p| PresenceRow {
                tag: p.tag.clone(),
                found_in_entities: p.found_in_entities,
                found_in_text: p.found_in_text,
                evidence: p.evidence_label(),
            })
            .collect();

        let occurrences = analysis
            .occurrences
            .iter()
            .map(|o| OccurrenceRow {
                tag: o.tag.clone(),
                fields: o.label(),
            })
            .collect();

        let extraction = &analysis.extraction;
        let comparison = ComparisonTable::new(
            analysis.strategies,
            [
                &extraction.noun_chunks,
                &extraction.noun_segments,
                &extraction.keywords,
            ],
            comparison_rows,
        );

        Self {
            generated_at: Utc::now(),
            entity_tables,
            candidates,
            suggestions,
            existing_tags,
            tag_matches: analysis.tag_matches.clone(),
            occurrences,
            comparison,
            fuzzy_matches: analysis.fuzzy_matches.clone(),
            similar_phrases: analysis.similar_phrases.clone(),
            dictionary_hits: analysis.dictionary_hits.clone(),
            highlighted_title: analysis.highlighted_title.clone(),
            highlighted_content: analysis.highlighted_content.clone(),
        }
    }

    /// All entity rows regardless of category
    pub fn entity_rows(&self) -> impl Iterator<Item = &EntityRow> {
        self.entity_tables.iter().flat_map(|t| t.rows.iter())
    }

    /// Suggestions grouped by category, entities first
    pub fn suggestions_by_category(&self) -> BTreeMap<Category, Vec<&str>> {
        let mut grouped: BTreeMap<Category, Vec<&str>> = BTreeMap::new();
        for s in &self.suggestions {
            let texts = grouped.entry(s.category).or_default();
            if !texts.contains(&s.text.as_str()) {
                texts.push(&s.text);
            }
        }
        grouped
    }

    /// Noun phrases and keywords that are already vocabulary tags
    pub fn matched_phrases(&self) -> BTreeSet<&str> {
        self.candidates
            .iter()
            .filter(|c| c.matched && !c.category.is_entity())
            .map(|c| c.text.as_str())
            .collect()
    }
}
