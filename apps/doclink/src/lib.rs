//! Doclink core library.
//!
//! This crate exposes programmatic APIs for scanning a documentation tree
//! and validating internal markdown links against the repository boundary.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Repository root detection and effective settings.
//! - `links`: Markdown link extraction and classification rules.
//! - `paths`: Lexical path resolution and repository-boundary checks.
//! - `scan`: Scan runner producing the broken-link report.
//! - `models`: Data models for scan output structs.
//! - `output`: Human/JSON printers for the report.
//! - `utils`: Supporting console helpers.
pub mod cli;
pub mod config;
pub mod links;
pub mod models;
pub mod output;
pub mod paths;
pub mod scan;
pub mod utils;
