//! Token-sort similarity
//!
//! Both strings are lowercased, reduced to alphanumeric tokens, sorted and
//! rejoined, so word order does not matter. The score is the normalized
//! Levenshtein similarity of the results, scaled to 0-100.

use serde::Serialize;

/// Best vocabulary entry for a query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FuzzyMatch {
    pub query: String,
    pub choice: String,
    pub score: u8,
}

fn sorted_tokens(text: &str) -> String {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    let mut tokens: Vec<&str> = cleaned.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

/// Word-order-insensitive similarity in [0, 100]
pub fn token_sort_ratio(a: &str, b: &str) -> u8 {
    let a = sorted_tokens(a);
    let b = sorted_tokens(b);
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    (strsim::normalized_levenshtein(&a, &b) * 100.0).round() as u8
}

/// Highest-scoring choice; ties go to the lexicographically smallest choice.
/// `None` only when there are no choices.
pub fn best_match<'a, I>(query: &str, choices: I) -> Option<FuzzyMatch>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<(u8, &str)> = None;
    for choice in choices {
        let score = token_sort_ratio(query, choice);
        let better = match best {
            None => true,
            Some((s, c)) => score > s || (score == s && choice < c),
        };
        if better {
            best = Some((score, choice));
        }
    }
    best.map(|(score, choice)| FuzzyMatch {
        query: query.to_string(),
        choice: choice.to_string(),
        score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_order_ignored() {
        assert_eq!(token_sort_ratio("kapoor shahid", "Shahid Kapoor"), 100);
        assert_eq!(token_sort_ratio("power-outage", "outage power"), 100);
    }

    #[test]
    fn test_threshold_boundary_scores() {
        assert_eq!(token_sort_ratio("abcde", "abcdx"), 80);
        assert_eq!(token_sort_ratio("abcdefghijklmn", "abcdefghijkxyz"), 79);
    }

    #[test]
    fn test_empty_scores_zero() {
        assert_eq!(token_sort_ratio("", "anything"), 0);
        assert_eq!(token_sort_ratio("...", "..."), 0);
    }

    #[test]
    fn test_best_match_tie_break() {
        // "abcdy" and "abcdz" both score 80 against "abcdx"
        let m = best_match("abcdx", ["abcdz", "abcdy", "zzzzz"]).unwrap();
        assert_eq!(m.choice, "abcdy");
        assert_eq!(m.score, 80);
        assert!(best_match("abc", std::iter::empty::<&str>()).is_none());
    }
}
