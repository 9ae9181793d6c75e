//! CLI subcommand handlers

pub mod analyze;
pub mod feed;
pub mod init;
pub mod keywords;
pub mod normalize;

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::core::config::Config;
use crate::core::paths::get_config_path;
use crate::pipeline::Analyzer;

/// Resolved config file location and its contents (defaults when absent)
pub fn load_config(explicit: Option<&Path>) -> (PathBuf, Config) {
    let path = get_config_path(explicit);
    let config = Config::load(&path);
    (path, config)
}

pub fn build_analyzer(explicit: Option<&Path>) -> Result<(Config, Analyzer)> {
    let (path, config) = load_config(explicit);
    let analyzer = Analyzer::from_config(&config, &path)?;
    Ok((config, analyzer))
}
