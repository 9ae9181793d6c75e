//! Rule-based named-entity recognition
//!
//! Capitalized word runs are proposed as names, then filed into one of five
//! categories by gazetteer lookup and cue words (`... Party`, `... Cup`).
//! Anything unclassified that still looks like a name is a person.

use std::collections::{BTreeSet, HashSet};

use serde::Serialize;

use super::gazetteer::{
    is_connector, is_event_suffix, is_honorific, is_non_entity, is_org_prefix, is_org_suffix,
    Gazetteer,
};
use super::tokens::{sentences, strip_possessive, Word};
use super::{Category, PhraseExtractor};
use crate::core::stopwords::is_stopword;

/// Longest n-gram looked up in the gazetteer for title-case sentences
const MAX_LOOKUP_WORDS: usize = 3;

/// Spans longer than this are headline fragments, not names
const MAX_NAME_WORDS: usize = 5;

/// A recognized name with its category, as written in the source
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entity {
    pub text: String,
    pub category: Category,
}

/// Named-entity recognition seam
pub trait EntityRecognizer {
    fn recognize(&self, text: &str) -> Vec<Entity>;
}

/// Gazetteer + capitalization heuristics
#[derive(Debug, Clone, Default)]
pub struct RuleBasedRecognizer {
    gazetteer: Gazetteer,
}

impl RuleBasedRecognizer {
    pub fn new(gazetteer: Gazetteer) -> Self {
        Self { gazetteer }
    }

    /// Classify a cleaned name (honorifics already removed)
    fn classify(&self, words: &[&str], honorific: bool) -> Category {
        let lower: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();
        let name = lower.join(" ");
        let first = lower.first().map(String::as_str).unwrap_or_default();
        let last = lower.last().map(String::as_str).unwrap_or_default();
        let multi = words.len() > 1;

        if honorific {
            Category::Person
        } else if self.gazetteer.is_location(&name) {
            Category::Location
        } else if self.gazetteer.is_group(&name) {
            Category::Group
        } else if self.gazetteer.is_event(&name) || (multi && is_event_suffix(last)) {
            Category::Event
        } else if self.gazetteer.is_organization(&name)
            || (multi && (is_org_suffix(last) || is_org_prefix(first)))
            || (!multi && is_acronym(words[0]))
        {
            Category::Organization
        } else {
            Category::Person
        }
    }

    /// Emit one candidate span
    fn emit(&self, span: &[Word<'_>], seen_mid_sentence: &HashSet<String>, out: &mut Vec<Entity>) {
        let mut words: Vec<&str> = span.iter().map(|w| strip_possessive(w.text)).collect();

        let mut honorific = false;
        while words
            .first()
            .is_some_and(|w| is_honorific(&w.to_lowercase()))
        {
            words.remove(0);
            honorific = true;
        }
        while words.last().is_some_and(|w| is_connector(&w.to_lowercase())) {
            words.pop();
        }
        if words.is_empty() {
            return;
        }

        // "Many Indians", "Later Kerala": an unknown opener glued to a known name
        if span[0].is_sentence_start() && !honorific && words.len() > 1 {
            let whole = words.join(" ").to_lowercase();
            let rest = words[1..].join(" ").to_lowercase();
            if !self.gazetteer.knows(&whole) && self.gazetteer.knows(&rest) {
                words.remove(0);
            }
        }

        let name = words.join(" ");
        let lower = name.to_lowercase();

        // A lone capital at sentence start is usually just the first word
        let lone_opener = words.len() == 1 && span[0].is_sentence_start() && !honorific;
        if lone_opener
            && !self.gazetteer.knows(&lower)
            && !seen_mid_sentence.contains(&lower)
            && !is_acronym(words[0])
        {
            return;
        }

        if words.len() > MAX_NAME_WORDS {
            self.lookup_ngrams(span, out);
            return;
        }

        out.push(Entity {
            text: name,
            category: self.classify(&words, honorific),
        });
    }

    /// Gazetteer-only scan for sentences where capitalization says nothing
    fn lookup_ngrams(&self, sentence: &[Word<'_>], out: &mut Vec<Entity>) {
        let mut i = 0;
        while i < sentence.len() {
            let mut matched = 0;
            for n in (1..=MAX_LOOKUP_WORDS.min(sentence.len() - i)).rev() {
                let window = &sentence[i..i + n];
                if window[1..].iter().any(|w| w.after_break) {
                    continue;
                }
                let words: Vec<&str> = window.iter().map(|w| strip_possessive(w.text)).collect();
                let name = words.join(" ");
                if self.gazetteer.knows(&name.to_lowercase()) {
                    out.push(Entity {
                        category: self.classify(&words, false),
                        text: name,
                    });
                    matched = n;
                    break;
                }
            }
            i += matched.max(1);
        }
    }
}

impl EntityRecognizer for RuleBasedRecognizer {
    fn recognize(&self, text: &str) -> Vec<Entity> {
        let sentences = sentences(text);
        let mut out = Vec::new();

        let seen_mid_sentence: HashSet<String> = sentences
            .iter()
            .flatten()
            .filter(|w| !w.is_sentence_start() && is_name_word(w))
            .map(|w| strip_possessive(w.text).to_lowercase())
            .collect();

        for sentence in &sentences {
            if is_title_case(sentence) {
                self.lookup_ngrams(sentence, &mut out);
                continue;
            }

            let mut i = 0;
            while i < sentence.len() {
                if !is_name_word(&sentence[i]) {
                    i += 1;
                    continue;
                }

                let mut end = i + 1;
                while end < sentence.len() && !ends_name(&sentence[end - 1]) {
                    let next = &sentence[end];
                    if next.after_break {
                        break;
                    }
                    if is_name_word(next) {
                        end += 1;
                    } else if is_connector(&next.lower())
                        && end + 1 < sentence.len()
                        && is_name_word(&sentence[end + 1])
                        && !sentence[end + 1].after_break
                    {
                        end += 2;
                    } else {
                        break;
                    }
                }

                self.emit(&sentence[i..end], &seen_mid_sentence, &mut out);
                i = end;
            }
        }

        out
    }
}

impl PhraseExtractor for RuleBasedRecognizer {
    fn name(&self) -> &'static str {
        "Named Entities"
    }

    fn extract(&self, text: &str) -> BTreeSet<String> {
        self.recognize(text).into_iter().map(|e| e.text).collect()
    }
}

/// Capitalized, not a stop word, not a calendar/boilerplate word, not a number
fn is_name_word(word: &Word<'_>) -> bool {
    if !word.is_capitalized() || word.is_numeric() {
        return false;
    }
    let lower = strip_possessive(word.text).to_lowercase();
    !is_stopword(&lower) && !is_non_entity(&lower)
}

/// A possessive closes the name it belongs to
fn ends_name(word: &Word<'_>) -> bool {
    strip_possessive(word.text).len() != word.text.len()
}

fn is_acronym(word: &str) -> bool {
    let letters = word.chars().filter(|c| c.is_alphabetic()).count();
    (2..=6).contains(&letters) && !word.chars().any(|c| c.is_lowercase())
}

/// Headline casing: no lowercase content word in a sentence of 4+ words
fn is_title_case(sentence: &[Word<'_>]) -> bool {
    sentence.len() >= 4
        && sentence
            .iter()
            .filter(|w| !w.is_numeric() && !is_stopword(&w.lower()))
            .all(|w| w.is_capitalized())
}
