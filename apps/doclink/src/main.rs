//! Doclink CLI binary entry point.
//! Parses arguments, runs the link scan, prints the report, and maps the
//! result onto the process exit code.

use clap::Parser;
use doclink::cli::{Cli, Commands};
use doclink::{config, output, scan, utils};

fn main() {
    let cli = Cli::parse();
    match cli.cmd.unwrap_or_default() {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Check { repo_root, output: out } => {
            let eff = config::resolve_effective(repo_root.as_deref(), out.as_deref());
            if !eff.repo_root.is_dir() {
                eprintln!(
                    "{} {}",
                    utils::error_prefix(),
                    format!("Repository root not found: {}", eff.repo_root.display())
                );
                std::process::exit(2);
            }
            let result = scan::run_scan(&eff.repo_root);
            output::print_diagnostics(&result.diagnostics);
            output::print_scan(&result, &eff.output);
            if result.summary.errors > 0 {
                std::process::exit(1);
            }
        }
    }
}
