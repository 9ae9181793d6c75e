//! English stop-word list
//!
//! Same 179-word list NLTK ships for English, plus the apostrophe-free
//! contraction stems that survive [`crate::core::text::normalize`].

use std::collections::HashSet;

lazy_static::lazy_static! {
    static ref STOPWORDS_SET: HashSet<&'static str> = {
        let words: &[&str] = &[
            // Pronouns
            "i", "me", "my", "myself", "we", "our", "ours", "ourselves",
            "you", "you're", "you've", "you'll", "you'd", "your", "yours", "yourself", "yourselves",
            "he", "him", "his", "himself", "she", "she's", "her", "hers", "herself",
            "it", "it's", "its", "itself", "they", "them", "their", "theirs", "themselves",
            "what", "which", "who", "whom", "this", "that", "that'll", "these", "those",
            // Auxiliaries
            "am", "is", "are", "was", "were", "be", "been", "being",
            "have", "has", "had", "having", "do", "does", "did", "doing",
            // Articles, conjunctions, prepositions
            "a", "an", "the", "and", "but", "if", "or", "because", "as", "until", "while",
            "of", "at", "by", "for", "with", "about", "against", "between", "into", "through",
            "during", "before", "after", "above", "below", "to", "from", "up", "down",
            "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
            // Adverbs and quantifiers
            "here", "there", "when", "where", "why", "how", "all", "any", "both", "each",
            "few", "more", "most", "other", "some", "such", "no", "nor", "not", "only",
            "own", "same", "so", "than", "too", "very", "s", "t", "can", "will", "just",
            "don", "don't", "should", "should've", "now", "d", "ll", "m", "o", "re", "ve", "y",
            // Negated contractions
            "ain", "aren", "aren't", "couldn", "couldn't", "didn", "didn't", "doesn", "doesn't",
            "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn", "isn't", "ma",
            "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
            "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
            "wouldn", "wouldn't",
            // Stems left behind once apostrophes are stripped
            "youre", "youve", "youll", "youd", "shes", "thatll", "shouldve", "dont",
            "arent", "couldnt", "didnt", "doesnt", "hadnt", "hasnt", "havent", "isnt",
            "mightnt", "mustnt", "neednt", "shant", "shouldnt", "wasnt", "werent", "wont",
            "wouldnt",
        ];
        words.iter().cloned().collect()
    };
}

/// Check if a word is a stop word (case-insensitive)
pub fn is_stopword(word: &str) -> bool {
    if STOPWORDS_SET.contains(word) {
        return true;
    }
    STOPWORDS_SET.contains(word.to_lowercase().as_str())
}

/// True when every whitespace token of `phrase` is a stop word.
/// An empty phrase counts as all stop words.
pub fn is_all_stopwords(phrase: &str) -> bool {
    phrase.split_whitespace().all(is_stopword)
}

/// Drop stop-word tokens from a phrase, keeping the remaining order
pub fn remove_stopwords(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .filter(|w| !is_stopword(w))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_stopword() {
        assert!(is_stopword("the"));
        assert!(is_stopword("The"));
        assert!(is_stopword("dont"));
        assert!(!is_stopword("bollywood"));
    }

    #[test]
    fn test_all_stopwords() {
        assert!(is_all_stopwords("of the"));
        assert!(is_all_stopwords(""));
        assert!(!is_all_stopwords("the outage"));
    }

    #[test]
    fn test_remove_stopwords() {
        assert_eq!(remove_stopwords("the power of a storm"), "power storm");
        assert_eq!(remove_stopwords("of the"), "");
    }
}
