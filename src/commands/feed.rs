//! Feed batch analysis

use anyhow::{Context, Result};
use colored::*;
use serde::Serialize;
use std::path::Path;
use std::time::Duration;
use tracing::info;

use super::build_analyzer;
use crate::feed::{load_article, parse_feed, FeedClient, Fetch};
use crate::pipeline::Submission;
use crate::report::{console, Report};

#[derive(Serialize)]
struct ArticleReport {
    link: String,
    category: String,
    title: String,
    report: Report,
}

pub fn run(url: &str, json: bool, config_path: Option<&Path>) -> Result<()> {
    let (config, analyzer) = build_analyzer(config_path)?;
    let client = FeedClient::new(Duration::from_secs(config.feed.timeout_secs))?;

    let body = client
        .fetch(url)
        .with_context(|| format!("Error fetching feed from {}", url))?;
    let items = parse_feed(&body).context("Failed to parse feed")?;
    info!(items = items.len(), "feed parsed");

    let mut reports = Vec::new();

    for item in &items {
        let article = load_article(&client, item, &config.feed);

        let submission = Submission {
            title: article.title.clone(),
            summary: String::new(),
            content: article.content.clone(),
            existing_tags: article.tags.clone(),
        };
        let analysis = analyzer.analyze(&submission);
        let report = Report::build(&analysis, config.matching.comparison_rows);

        if json {
            reports.push(ArticleReport {
                link: article.link,
                category: article.category,
                title: article.title,
                report,
            });
            continue;
        }

        println!("URL: {}", article.link.cyan());
        println!("Category: {}", article.category.bold());
        println!("{}", console::divider());
        console::print_report(&report);
        println!("{}", console::divider());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else if items.is_empty() {
        println!("{}", "No items found in feed.".yellow());
    }

    Ok(())
}
