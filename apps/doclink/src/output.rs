//! Output rendering for the link check report.
//!
//! Supports `human` (default) and `json` outputs. The JSON form includes
//! the error records, skipped-file diagnostics, and a top-level summary.

use crate::models::{Diagnostic, ScanResult};
use crate::utils;
use owo_colors::OwoColorize;
use serde_json::Value as JsonVal;

fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

const BANNER: &str = "=== doclink - Documentation Link Checker ===";

const TIPS: [&str; 4] = [
    "  - Check if the file exists at the expected location",
    "  - Verify relative path depth (../ for parent directory)",
    "  - Wiki-style links should not include the .md extension",
    "  - Use template syntax for links resolved at publish time: {{ '/path' | relative_url }}",
];

/// Print skipped-file diagnostics to stderr, one line per file.
pub fn print_diagnostics(diags: &[Diagnostic]) {
    for d in diags {
        eprintln!(
            "{} could not read {}: {}",
            utils::warn_prefix(),
            d.file,
            d.detail
        );
    }
}

/// Print the scan report in the requested format.
pub fn print_scan(res: &ScanResult, output: &str) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_scan_json(res)).unwrap()
        ),
        _ => {
            let color = use_colors(output);
            println!("{}\n", BANNER);
            if res.errors.is_empty() {
                let ok = "All internal links are valid!";
                if color {
                    println!("{}", ok.green().bold());
                } else {
                    println!("{}", ok);
                }
                println!("   Checked markdown files in: docs/, tools/, examples/, *.md");
                return;
            }
            let headline = format!("Found {} broken link(s):", res.summary.errors);
            if color {
                println!("{}\n", headline.red().bold());
            } else {
                println!("{}\n", headline);
            }
            for err in &res.errors {
                if color {
                    println!("File: {}", err.file.bold());
                } else {
                    println!("File: {}", err.file);
                }
                println!("  Link: {}", err.link);
                println!("  Expected: {}", err.expected);
                if color {
                    println!("  Type: {}", err.kind.as_str().red());
                } else {
                    println!("  Type: {}", err.kind.as_str());
                }
                println!();
            }
            println!("Tips:");
            for tip in TIPS {
                println!("{}", tip);
            }
        }
    }
}

/// Compose the report JSON object (pure) for testing/snapshot purposes.
pub fn compose_scan_json(res: &ScanResult) -> JsonVal {
    // Directly serialize ScanResult as JSON, keeping stable shape
    serde_json::to_value(res).unwrap()
}
