//! Config file generation

use anyhow::Result;
use colored::*;
use std::path::Path;

use crate::core::config::Config;
use crate::core::paths::{get_config_path, resolve_relative};

pub fn run(force: bool, config_path: Option<&Path>) -> Result<()> {
    let path = get_config_path(config_path);

    println!("{}", "Taglens Configuration Generator".bold());
    println!("{}", "=".repeat(50));
    println!();

    if path.exists() && !force {
        println!(
            "{}",
            format!("{} already exists. Use --force to overwrite.", path.display()).yellow()
        );
        return Ok(());
    }

    let config = Config::default();
    config.save(&path)?;
    println!("{} Created {}", "✓".green(), path.display());

    let vocabulary = resolve_relative(&path, &config.vocabulary_path);
    if !vocabulary.exists() {
        println!(
            "{} Tag vocabulary not found yet: {} (one tag per line)",
            "→".blue(),
            vocabulary.display()
        );
    }

    println!();
    println!("{}", "Configuration:".cyan());
    println!("  vocabularyPath: \"{}\"", config.vocabulary_path);
    println!("  fuzzyThreshold: {}", config.matching.fuzzy_threshold);
    println!("  comparisonRows: {}", config.matching.comparison_rows);
    println!("  maxKeywords: {}", config.extraction.max_keywords);
    println!("  feed timeout: {}s", config.feed.timeout_secs);
    println!("  dictionary categories: {}", config.dictionary.len());
    println!();
    println!(
        "{}",
        "Edit taglens.json to customize thresholds, feed settings and the keyword dictionary."
            .dimmed()
    );

    Ok(())
}
