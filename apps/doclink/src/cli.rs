//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "doclink",
    version,
    about = "Documentation link checker",
    long_about = "Doclink — a tiny, fast CLI that scans a repository for markdown files and verifies that internal relative links resolve to existing files or directories.\n\nExternal, anchor-only, and templated links are skipped; links escaping the repository are flagged as unsafe.",
    after_help = "Examples:\n  doclink\n  doclink check --repo-root ../site\n  doclink check --output json"
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Commands>,
}

#[derive(Subcommand)]
/// Supported subcommands. A bare invocation runs `check` with defaults.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current doclink version.")]
    Version,
    /// Check internal markdown links
    #[command(
        about = "Run the link check",
        long_about = "Scan the repository for markdown files and validate every internal link. Broken or unsafe links contribute to a nonzero exit code.",
        after_help = "Examples:\n  doclink check\n  doclink check --repo-root ../site --output json"
    )]
    Check {
        #[arg(long, help = "Repository root (default: detected from current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Check {
            repo_root: None,
            output: None,
        }
    }
}
