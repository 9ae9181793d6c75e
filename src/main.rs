use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use taglens::commands;
use taglens::commands::analyze::{AnalyzeArgs, OutputFormat};

#[derive(Parser)]
#[command(name = "taglens")]
#[command(about = "Suggest and check article tags against a known-tag vocabulary", long_about = None)]
#[command(version)]
struct Cli {
    #[arg(long, global = true, help = "Path to taglens.json (default: $TAGLENS_CONFIG or ./taglens.json)")]
    config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Verbose logging to stderr")]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze one article: entities, phrases, keywords and tag matches
    Analyze {
        #[arg(long, default_value = "", help = "Article title")]
        title: String,
        #[arg(long, default_value = "", help = "Article summary")]
        summary: String,
        #[arg(long, conflicts_with = "content_file", help = "Article body (HTML allowed)")]
        content: Option<String>,
        #[arg(long, help = "Read the article body from a file")]
        content_file: Option<PathBuf>,
        #[arg(long, default_value = "", help = "Existing tags, comma separated")]
        tags: String,
        #[arg(long, help = "JSON output")]
        json: bool,
        #[arg(long, conflicts_with = "json", help = "HTML tables output")]
        html: bool,
    },
    /// Analyze every article listed in an RSS feed
    Feed {
        /// Feed URL
        url: String,
        #[arg(long, help = "JSON output")]
        json: bool,
    },
    /// Compare noun chunks, noun segments and statistical keywords
    Keywords {
        /// Text to analyze
        text: String,
        #[arg(long, help = "JSON output")]
        json: bool,
    },
    /// Print the normalized form of a phrase
    Normalize {
        /// Text to normalize
        text: String,
        #[arg(long, help = "Also drop articles")]
        articles: bool,
    },
    /// Generate a taglens.json config file
    Init {
        #[arg(long, help = "Overwrite an existing config file")]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.config.as_deref();

    match cli.command {
        None => {
            eprintln!("No command given. Run `taglens --help` for usage.");
            std::process::exit(2);
        }
        Some(Commands::Analyze {
            title,
            summary,
            content,
            content_file,
            tags,
            json,
            html,
        }) => {
            let format = if json {
                OutputFormat::Json
            } else if html {
                OutputFormat::Html
            } else {
                OutputFormat::Console
            };
            commands::analyze::run(
                AnalyzeArgs {
                    title,
                    summary,
                    content,
                    content_file,
                    tags,
                    format,
                },
                config,
            )
        }
        Some(Commands::Feed { url, json }) => commands::feed::run(&url, json, config),
        Some(Commands::Keywords { text, json }) => commands::keywords::run(&text, json, config),
        Some(Commands::Normalize { text, articles }) => commands::normalize::run(&text, articles),
        Some(Commands::Init { force }) => commands::init::run(force, config),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "taglens=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_normalize_articles_flag() {
        let cmd = Cli::command();
        let normalize = cmd.find_subcommand("normalize").unwrap();
        let articles = normalize
            .get_arguments()
            .find(|a| a.get_id() == "articles")
            .unwrap();
        assert_eq!(
            articles.get_help().map(|h| h.to_string()),
            Some("Also drop articles".to_string())
        );

        let cli = Cli::try_parse_from(["taglens", "normalize", "the fox", "--articles"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Normalize { articles: true, .. })
        ));
    }
}
