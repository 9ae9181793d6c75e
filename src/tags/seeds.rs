//! Default keyword dictionary
//!
//! Written into `taglens.json` by `taglens init`; edit it there.

use std::collections::BTreeMap;

/// Category -> trigger phrases
pub const SEED_DICTIONARY: &[(&str, &[&str])] = &[
    (
        "bollywood",
        &["bollywood", "movie industry", "shahid kapoor", "urvashi rautela"],
    ),
    (
        "tollywood",
        &["tollywood", "telugu cinema", "allu arjun", "movie review", "mahesh babu"],
    ),
    ("kollywood", &["kollywood", "tamil cinema", "thalapathy vijay"]),
    (
        "sandalwood",
        &["sandalwood", "kannada cinema", "actor darshan", "kicha suddep"],
    ),
    ("hollywood", &["hollywood", "film industry", "tom cruise"]),
    ("lifestyle", &["yoga", "horoscope", "beauty"]),
    ("cookery", &["recipe", "cook"]),
    ("electricity", &["power outage"]),
];

/// Seed data as the config's dictionary map
pub fn default_dictionary() -> BTreeMap<String, Vec<String>> {
    SEED_DICTIONARY
        .iter()
        .map(|(category, phrases)| {
            (
                category.to_string(),
                phrases.iter().map(|p| p.to_string()).collect(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_dictionary() {
        let dictionary = default_dictionary();
        assert_eq!(dictionary.len(), 8);
        assert!(dictionary["electricity"].contains(&"power outage".to_string()));
        assert!(SEED_DICTIONARY
            .iter()
            .all(|(_, phrases)| phrases.iter().all(|p| *p == p.to_lowercase())));
    }
}
