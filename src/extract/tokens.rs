//! Word and sentence segmentation shared by the extractors

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WORD_RE: Regex =
        Regex::new(r"[\p{L}\p{N}]+(?:['’&\-][\p{L}\p{N}]+)*").unwrap();
}

/// Abbreviations whose trailing period does not end a sentence
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "st", "vs", "jr", "sr", "prof", "gen", "lt", "col", "no", "rs",
];

/// A word token with its place in the text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Word<'a> {
    pub text: &'a str,
    /// Sentence number, starting at 0
    pub sentence: usize,
    /// Position within the sentence
    pub position: usize,
    /// Preceded by a clause break (comma, colon, bracket, quote...)
    pub after_break: bool,
}

impl Word<'_> {
    pub fn is_sentence_start(&self) -> bool {
        self.position == 0
    }

    pub fn is_capitalized(&self) -> bool {
        self.text.chars().next().is_some_and(|c| c.is_uppercase())
    }

    /// Acronym-like token: at least two letters, no lowercase
    pub fn is_all_caps(&self) -> bool {
        let letters = self.text.chars().filter(|c| c.is_alphabetic()).count();
        letters >= 2 && !self.text.chars().any(|c| c.is_lowercase())
    }

    pub fn is_numeric(&self) -> bool {
        self.text.chars().all(|c| !c.is_alphabetic())
    }

    pub fn lower(&self) -> String {
        self.text.to_lowercase()
    }
}

/// Split text into sentences of words.
///
/// Sentence ends are `.`, `!`, `?`, `;` or a newline between two words,
/// except after a known abbreviation or a single capital letter.
pub fn sentences(text: &str) -> Vec<Vec<Word<'_>>> {
    let mut out: Vec<Vec<Word<'_>>> = Vec::new();
    let mut current: Vec<Word<'_>> = Vec::new();
    let mut last_end = 0;
    let mut prev: Option<&str> = None;

    for m in WORD_RE.find_iter(text) {
        let gap = &text[last_end..m.start()];
        let ends_sentence = gap.contains(['!', '?', ';', '\n'])
            || (gap.contains('.') && !prev.is_some_and(is_abbreviation));
        let breaks_clause = gap.contains([
            ',', ':', '(', ')', '[', ']', '{', '}', '"', '“', '”', '—', '–', '/', '|',
        ]);

        if ends_sentence && !current.is_empty() {
            out.push(std::mem::take(&mut current));
        }

        current.push(Word {
            text: m.as_str(),
            sentence: out.len(),
            position: current.len(),
            after_break: breaks_clause,
        });

        prev = Some(m.as_str());
        last_end = m.end();
    }

    if !current.is_empty() {
        out.push(current);
    }
    out
}

fn is_abbreviation(word: &str) -> bool {
    let mut chars = word.chars();
    let single_capital = matches!((chars.next(), chars.next()), (Some(c), None) if c.is_uppercase());
    single_capital || ABBREVIATIONS.contains(&word.to_lowercase().as_str())
}

/// Drop a trailing possessive ("India's" -> "India")
pub fn strip_possessive(word: &str) -> &str {
    word.strip_suffix("'s")
        .or_else(|| word.strip_suffix("’s"))
        .unwrap_or(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts<'a>(sentence: &[Word<'a>]) -> Vec<&'a str> {
        sentence.iter().map(|w| w.text).collect()
    }

    #[test]
    fn test_sentence_split() {
        let s = sentences("Shahid Kapoor arrived. He smiled! Was it fun? Yes");
        assert_eq!(s.len(), 4);
        assert_eq!(texts(&s[0]), vec!["Shahid", "Kapoor", "arrived"]);
        assert_eq!(s[1][0].sentence, 1);
        assert!(s[1][0].is_sentence_start());
    }

    #[test]
    fn test_abbreviation_keeps_sentence() {
        let s = sentences("Mr. Modi met U.S. officials.");
        assert_eq!(s.len(), 1);
        assert_eq!(texts(&s[0]), vec!["Mr", "Modi", "met", "U", "S", "officials"]);
    }

    #[test]
    fn test_clause_breaks_and_words() {
        let s = sentences("power cut, AT&T and state-run firms");
        let words = &s[0];
        assert_eq!(texts(words), vec!["power", "cut", "AT&T", "and", "state-run", "firms"]);
        assert!(words[2].after_break);
        assert!(!words[1].after_break);
        assert!(words[2].is_all_caps());
    }

    #[test]
    fn test_strip_possessive() {
        assert_eq!(strip_possessive("India's"), "India");
        assert_eq!(strip_possessive("boss"), "boss");
    }
}
