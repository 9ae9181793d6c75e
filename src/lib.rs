//! Taglens: entity, noun-phrase and keyword extraction matched against a
//! known-tag vocabulary.
//!
//! The flow is normalize → extract → match → report:
//!
//! - [`core`]: config, paths, errors, text normalization and stopwords
//! - [`extract`]: entity recognition, noun chunks, noun segments, keywords
//! - [`tags`]: vocabulary, fuzzy scoring, matching and the keyword dictionary
//! - [`pipeline`]: one [`pipeline::Analyzer`] run over a submission
//! - [`report`]: tables for the console, HTML and JSON
//! - [`feed`]: batch analysis of articles listed in a feed
//! - [`commands`]: CLI subcommand handlers

pub mod commands;
pub mod core;
pub mod extract;
pub mod feed;
pub mod pipeline;
pub mod report;
pub mod tags;
