//! Text normalization
//!
//! Every string that takes part in matching goes through here first: raw
//! title/content is stripped of markup, links and a fixed punctuation set,
//! whitespace is collapsed, and the result is lowercased.
//!
//! Extractors receive the case-preserving [`clean_markup`] output instead,
//! since capitalization and sentence punctuation are their main signals.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

lazy_static! {
    static ref ENTITY_RE: Regex = Regex::new(r"&#?[A-Za-z0-9]+;").unwrap();
    static ref TAG_RE: Regex = Regex::new(r"<[^>]*>").unwrap();
    static ref LINK_RE: Regex = Regex::new(r"(?i)https?://\S+|pic\.twitter\.com/\S+").unwrap();
    static ref PUNCT_RE: Regex = Regex::new(r#"[.,:'"-]"#).unwrap();
    static ref SPACE_RE: Regex = Regex::new(r"\s+").unwrap();
    static ref ARTICLE_RE: Regex = Regex::new(r"(?i)\b(a|an|the)\b").unwrap();
}

/// Characters removed by [`strip_punctuation`]
pub const PUNCTUATION: &[char] = &['.', ',', ':', '\'', '"', '-'];

/// Remove HTML entities, tags, URLs and image-share links, keeping case and
/// sentence punctuation. Whitespace is collapsed.
pub fn clean_markup(raw: &str) -> String {
    let text = raw.replace('\\', "");
    let text = remove_entities(&text);
    let text = TAG_RE.replace_all(&text, " ");
    let text = LINK_RE.replace_all(&text, " ");
    collapse_whitespace(&text)
}

/// [`clean_markup`] followed by punctuation removal. Case is preserved.
pub fn clean(raw: &str) -> String {
    let text = clean_markup(raw);
    let text = PUNCT_RE.replace_all(&text, "");
    // Dropping punctuation can glue a new entity together ("&a.b;")
    let text = remove_entities(&text);
    collapse_whitespace(&text)
}

/// Full normalization: lowercase, then [`clean`].
///
/// Lowercasing can complete an entity (`&\u{212A};` -> `&k;`), so it runs first.
/// Idempotent: `normalize(&normalize(x)) == normalize(x)`.
pub fn normalize(raw: &str) -> String {
    clean(&raw.to_lowercase())
}

/// Remove standalone `a`, `an`, `the` tokens (any case) and trim.
pub fn strip_articles(phrase: &str) -> String {
    let text = ARTICLE_RE.replace_all(phrase, "");
    collapse_whitespace(&text)
}

/// Remove the fixed punctuation set without touching anything else
pub fn strip_punctuation(text: &str) -> String {
    PUNCT_RE.replace_all(text, "").into_owned()
}

/// Whitespace tokens of already-normalized text
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Collapse runs of whitespace to a single space and trim the ends
pub fn collapse_whitespace(text: &str) -> String {
    SPACE_RE.replace_all(text, " ").trim().to_string()
}

fn remove_entities(text: &str) -> String {
    let mut current = text.to_string();
    // Removal can expose a new entity ("&a&b;;" -> "&a;"), so run to a fixpoint
    while ENTITY_RE.is_match(&current) {
        current = ENTITY_RE.replace_all(&current, "").into_owned();
    }
    current
}

/// Byte range of a highlighted term inside a text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// Text with the ranges that matched a set of terms
#[derive(Debug, Clone, Default, Serialize)]
pub struct HighlightedText {
    pub text: String,
    pub spans: Vec<Span>,
}

impl HighlightedText {
    /// Rebuild the text with every span passed through `wrap`
    pub fn render<F>(&self, wrap: F) -> String
    where
        F: Fn(&str) -> String,
    {
        let mut out = String::with_capacity(self.text.len());
        let mut cursor = 0;
        for span in &self.spans {
            out.push_str(&self.text[cursor..span.start]);
            out.push_str(&wrap(&self.text[span.start..span.end]));
            cursor = span.end;
        }
        out.push_str(&self.text[cursor..]);
        out
    }
}

/// Find every whole-word, case-insensitive occurrence of `terms` in `text`.
///
/// Articles are stripped from the terms first. Overlapping hits are merged
/// so the spans are sorted and disjoint.
pub fn highlight<I, S>(text: &str, terms: I) -> HighlightedText
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut spans: Vec<Span> = Vec::new();

    for term in terms {
        let term = strip_articles(term.as_ref());
        if term.is_empty() {
            continue;
        }
        let pattern = format!(r"(?i)\b{}\b", regex::escape(&term));
        let Ok(re) = Regex::new(&pattern) else {
            continue;
        };
        spans.extend(re.find_iter(text).map(|m| Span {
            start: m.start(),
            end: m.end(),
        }));
    }

    spans.sort_by_key(|s| (s.start, s.end));
    let mut merged: Vec<Span> = Vec::with_capacity(spans.len());
    for span in spans {
        match merged.last_mut() {
            Some(last) if span.start <= last.end => last.end = last.end.max(span.end),
            _ => merged.push(span),
        }
    }

    HighlightedText {
        text: text.to_string(),
        spans: merged,
    }
}
