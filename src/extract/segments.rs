//! Noun phrases from stop-word delimited segments
//!
//! Splits each sentence at stop words, verbs, numbers and clause punctuation;
//! what remains between delimiters is a content-word run. Runs of two or
//! more words are phrases, as is a lone mid-sentence proper noun.

use std::collections::BTreeSet;

use super::chunker::is_verb_like;
use super::tokens::{sentences, strip_possessive, Word};
use super::PhraseExtractor;
use crate::core::stopwords::is_stopword;

#[derive(Debug, Clone)]
pub struct SegmentExtractor {
    max_length: usize,
}

impl Default for SegmentExtractor {
    fn default() -> Self {
        Self { max_length: 4 }
    }
}

impl SegmentExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Longer runs are cut into pieces of at most this many words
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length.max(1);
        self
    }

    pub fn segments(&self, text: &str) -> Vec<String> {
        let mut out = Vec::new();
        for sentence in sentences(text) {
            let mut run: Vec<&Word<'_>> = Vec::new();
            for word in &sentence {
                if word.after_break || is_delimiter(word) {
                    self.flush(&mut run, &mut out);
                }
                if !is_delimiter(word) {
                    run.push(word);
                }
            }
            self.flush(&mut run, &mut out);
        }
        out
    }

    fn flush(&self, run: &mut Vec<&Word<'_>>, out: &mut Vec<String>) {
        for piece in run.chunks(self.max_length) {
            let keep = piece.len() > 1
                || (piece[0].is_capitalized() && !piece[0].is_sentence_start());
            if keep {
                out.push(
                    piece
                        .iter()
                        .map(|w| strip_possessive(w.text))
                        .collect::<Vec<_>>()
                        .join(" "),
                );
            }
        }
        run.clear();
    }
}

fn is_delimiter(word: &Word<'_>) -> bool {
    let lower = strip_possessive(word.text).to_lowercase();
    word.is_numeric() || is_stopword(&lower) || (!word.is_capitalized() && is_verb_like(&lower))
}

impl PhraseExtractor for SegmentExtractor {
    fn name(&self) -> &'static str {
        "Segment Noun Phrases"
    }

    fn extract(&self, text: &str) -> BTreeSet<String> {
        self.segments(text).into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments_between_stopwords() {
        let segments = SegmentExtractor::new().segments(
            "A massive power outage hit the northern district, and residents waited for hours.",
        );
        assert_eq!(segments, vec!["massive power outage", "northern district"]);
    }

    #[test]
    fn test_lone_proper_noun_kept() {
        let segments = SegmentExtractor::new().segments("Fans in Mumbai cheered for 3 hours.");
        assert_eq!(segments, vec!["Mumbai"]);
    }

    #[test]
    fn test_long_runs_are_cut() {
        let segments = SegmentExtractor::new()
            .with_max_length(2)
            .segments("state electricity board office staff");
        assert_eq!(segments, vec!["state electricity", "board office"]);
    }

    #[test]
    fn test_clause_break_splits_run() {
        let segments = SegmentExtractor::new().segments("film stars, fan clubs");
        assert_eq!(segments, vec!["film stars", "fan clubs"]);
    }
}
