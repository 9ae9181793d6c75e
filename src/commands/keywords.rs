//! Compare the phrase and keyword strategies on one text

use anyhow::Result;
use colored::*;
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::Path;

use super::load_config;
use crate::core::text::clean_markup;
use crate::extract::keyword::{Keyword, KeywordExtractor};
use crate::extract::ExtractorSet;
use crate::report::{console, ComparisonTable};

#[derive(Serialize)]
struct KeywordsResult {
    noun_chunks: BTreeSet<String>,
    noun_segments: BTreeSet<String>,
    keywords: BTreeSet<String>,
    scored: Vec<Keyword>,
}

pub fn run(text: &str, json: bool, config_path: Option<&Path>) -> Result<()> {
    let (_, config) = load_config(config_path);
    let extractors = ExtractorSet::from_config(&config);
    let text = clean_markup(text);

    let scored = KeywordExtractor::new()
        .with_limit(config.extraction.max_keywords)
        .with_max_ngram(config.extraction.max_ngram)
        .extract_keywords(&text);

    let result = KeywordsResult {
        noun_chunks: extractors.noun_chunks(&text),
        noun_segments: extractors.noun_segments(&text),
        keywords: extractors.keywords(&text),
        scored,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let table = ComparisonTable::new(
        extractors.strategy_names(),
        [&result.noun_chunks, &result.noun_segments, &result.keywords],
        config.matching.comparison_rows,
    );
    let headers: Vec<&str> = table.headers.iter().map(String::as_str).collect();
    let rows: Vec<Vec<String>> = table.rows.iter().map(|r| r.to_vec()).collect();

    println!("{}", "Comparison of Noun Phrases and Keywords:".bold());
    println!("{}", console::render_table(&headers, &rows));

    if !result.scored.is_empty() {
        println!();
        println!("{}", "Keyword scores (lower is better):".bold());
        for keyword in &result.scored {
            println!("  {:>8.4}  {}", keyword.score, keyword.phrase.green());
        }
    }

    Ok(())
}
