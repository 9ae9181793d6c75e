//! Statistical keyword extraction
//!
//! Single-document, unsupervised scoring in the YAKE family. Each word gets a
//! weight from five features (casing, position, frequency, relatedness to
//! context, spread over sentences); n-gram candidates combine the weights of
//! their words. Lower scores are better.

use std::collections::{BTreeSet, HashMap, HashSet};

use serde::Serialize;

use super::tokens::{sentences, strip_possessive, Word};
use super::PhraseExtractor;
use crate::core::stopwords::is_stopword;

/// Candidates more similar than this to a better one are dropped
const DEDUP_THRESHOLD: f64 = 0.9;

/// A scored keyword
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Keyword {
    pub phrase: String,
    pub score: f64,
}

#[derive(Debug, Default)]
struct TermStats {
    tf: usize,
    tf_upper: usize,
    tf_acronym: usize,
    sentence_ids: Vec<usize>,
    left: Vec<String>,
    right: Vec<String>,
}

/// Keyword extractor
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    limit: usize,
    max_ngram: usize,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self {
            limit: 10,
            max_ngram: 3,
        }
    }
}

impl KeywordExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_max_ngram(mut self, max_ngram: usize) -> Self {
        self.max_ngram = max_ngram.max(1);
        self
    }

    /// Best keywords first
    pub fn extract_keywords(&self, text: &str) -> Vec<Keyword> {
        let sentences = sentences(text);
        if sentences.is_empty() || self.limit == 0 {
            return Vec::new();
        }

        let stats = collect_stats(&sentences);
        let weights = term_weights(&stats, sentences.len());

        // Candidate n-grams and their frequency
        let mut candidates: HashMap<String, (Vec<String>, usize)> = HashMap::new();
        for sentence in &sentences {
            for start in 0..sentence.len() {
                for n in 1..=self.max_ngram.min(sentence.len() - start) {
                    let window = &sentence[start..start + n];
                    if window[1..].iter().any(|w| w.after_break) {
                        break;
                    }
                    if window.iter().any(|w| w.is_numeric()) {
                        break;
                    }
                    let terms: Vec<String> = window.iter().map(term_of).collect();
                    let edge_stop = |t: &String| is_stopword(t) || t.chars().count() < 2;
                    if terms.first().is_some_and(edge_stop) || terms.last().is_some_and(edge_stop) {
                        continue;
                    }
                    let entry = candidates
                        .entry(terms.join(" "))
                        .or_insert_with(|| (terms, 0));
                    entry.1 += 1;
                }
            }
        }

        let mut scored: Vec<Keyword> = candidates
            .into_iter()
            .map(|(phrase, (terms, tf))| {
                let mut product = 1.0;
                let mut sum = 0.0;
                for term in terms.iter().filter(|t| !is_stopword(t)) {
                    let h = weights.get(term).copied().unwrap_or(1.0);
                    product *= h;
                    sum += h;
                }
                Keyword {
                    phrase,
                    score: product / (tf as f64 * (1.0 + sum)),
                }
            })
            .collect();

        scored.sort_by(|a, b| {
            a.score
                .total_cmp(&b.score)
                .then_with(|| a.phrase.cmp(&b.phrase))
        });

        let mut selected: Vec<Keyword> = Vec::new();
        for keyword in scored {
            if selected.len() >= self.limit {
                break;
            }
            let duplicate = selected.iter().any(|k| {
                strsim::normalized_levenshtein(&k.phrase, &keyword.phrase) > DEDUP_THRESHOLD
            });
            if !duplicate {
                selected.push(keyword);
            }
        }
        selected
    }
}

impl PhraseExtractor for KeywordExtractor {
    fn name(&self) -> &'static str {
        "Statistical Keywords"
    }

    fn extract(&self, text: &str) -> BTreeSet<String> {
        self.extract_keywords(text)
            .into_iter()
            .map(|k| k.phrase)
            .collect()
    }
}

fn term_of(word: &Word<'_>) -> String {
    strip_possessive(word.text).to_lowercase()
}

fn collect_stats(sentences: &[Vec<Word<'_>>]) -> HashMap<String, TermStats> {
    let mut stats: HashMap<String, TermStats> = HashMap::new();

    for (sid, sentence) in sentences.iter().enumerate() {
        for (i, word) in sentence.iter().enumerate() {
            if word.is_numeric() {
                continue;
            }
            let entry = stats.entry(term_of(word)).or_default();
            entry.tf += 1;
            if word.is_all_caps() {
                entry.tf_acronym += 1;
            } else if word.is_capitalized() && !word.is_sentence_start() {
                entry.tf_upper += 1;
            }
            entry.sentence_ids.push(sid);

            if i > 0 && !word.after_break && !sentence[i - 1].is_numeric() {
                entry.left.push(term_of(&sentence[i - 1]));
            }
            if let Some(next) = sentence.get(i + 1) {
                if !next.after_break && !next.is_numeric() {
                    entry.right.push(term_of(next));
                }
            }
        }
    }
    stats
}

/// Per-term weight H; only content words get one
fn term_weights(stats: &HashMap<String, TermStats>, sentence_count: usize) -> HashMap<String, f64> {
    let content: Vec<(&String, &TermStats)> =
        stats.iter().filter(|(t, _)| !is_stopword(t)).collect();
    if content.is_empty() {
        return HashMap::new();
    }

    let tfs: Vec<f64> = content.iter().map(|(_, s)| s.tf as f64).collect();
    let mean = tfs.iter().sum::<f64>() / tfs.len() as f64;
    let std = (tfs.iter().map(|tf| (tf - mean).powi(2)).sum::<f64>() / tfs.len() as f64).sqrt();
    let max_tf = tfs.iter().cloned().fold(0.0, f64::max);

    content
        .into_iter()
        .map(|(term, s)| {
            let tf = s.tf as f64;

            let casing = s.tf_upper.max(s.tf_acronym) as f64 / (1.0 + tf.ln());
            let position = (3.0 + median(&s.sentence_ids)).ln().ln();
            let frequency = if mean + std > 0.0 { tf / (mean + std) } else { 0.0 };
            let relatedness = 1.0 + (dispersion(&s.left) + dispersion(&s.right)) * (tf / max_tf);
            let distinct_sentences: HashSet<usize> = s.sentence_ids.iter().copied().collect();
            let spread = distinct_sentences.len() as f64 / sentence_count as f64;

            let weight = (relatedness * position)
                / (casing + frequency / relatedness + spread / relatedness);
            (term.clone(), weight)
        })
        .collect()
}

/// Distinct neighbours over all neighbours
fn dispersion(neighbours: &[String]) -> f64 {
    if neighbours.is_empty() {
        return 0.0;
    }
    let distinct: HashSet<&String> = neighbours.iter().collect();
    distinct.len() as f64 / neighbours.len() as f64
}

fn median(values: &[usize]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let mid = sorted.len() / 2;
    match sorted.len() {
        0 => 0.0,
        n if n % 2 == 0 => (sorted[mid - 1] + sorted[mid]) as f64 / 2.0,
        _ => sorted[mid] as f64,
    }
}
