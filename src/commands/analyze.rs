//! Single-article analysis (the form workflow)

use anyhow::{Context, Result};
use colored::*;
use std::fs;
use std::path::{Path, PathBuf};

use super::build_analyzer;
use crate::pipeline::Submission;
use crate::report::{console, html, Report};
use crate::tags::parse_tag_list;

/// Output format for a report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Console,
    Json,
    Html,
}

pub struct AnalyzeArgs {
    pub title: String,
    pub summary: String,
    pub content: Option<String>,
    pub content_file: Option<PathBuf>,
    pub tags: String,
    pub format: OutputFormat,
}

pub fn run(args: AnalyzeArgs, config_path: Option<&Path>) -> Result<()> {
    let content = match (&args.content, &args.content_file) {
        (_, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read content file: {}", path.display()))?,
        (Some(text), None) => text.clone(),
        (None, None) => String::new(),
    };

    let submission = Submission {
        title: args.title,
        summary: args.summary,
        content,
        existing_tags: parse_tag_list(&args.tags),
    };

    // A blank field is a prompt for the user, not a failure
    if let Err(blank) = submission.validate() {
        println!("{}", blank);
        return Ok(());
    }

    let (config, analyzer) = build_analyzer(config_path)?;
    let analysis = analyzer.analyze(&submission);
    let report = Report::build(&analysis, config.matching.comparison_rows);

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Html => println!("{}", html::render_report(&report)),
        OutputFormat::Console => {
            println!("{}", "Text Analysis".bold());
            println!("{}", "=".repeat(60));
            println!("Vocabulary: {} tags", analyzer.vocabulary().len());
            console::print_report(&report);
            println!();
            println!("{}", console::divider());
        }
    }

    Ok(())
}
