//! Shared data models for scan output.

use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
/// The failure rule a broken link was rejected by. Each record carries
/// exactly one kind.
pub enum ErrorKind {
    /// Bare page name under the wiki tree with no matching `.md` file.
    #[serde(rename = "wiki-style")]
    WikiStyle,
    /// Resolved target escapes the repository boundary.
    #[serde(rename = "security")]
    Security,
    /// Resolved target does not exist as a file or directory.
    #[serde(rename = "regular")]
    Regular,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::WikiStyle => "wiki-style",
            ErrorKind::Security => "security",
            ErrorKind::Regular => "regular",
        }
    }
}

#[derive(Serialize, Debug, Clone)]
/// A single broken-link record.
pub struct LinkError {
    /// Containing markdown file, relative to the repository root.
    pub file: String,
    /// Raw url as written in the file, anchor included.
    pub link: String,
    /// Resolved path the link was expected to hit, or the unsafe-target
    /// sentinel for `security` records.
    pub expected: String,
    #[serde(rename = "type")]
    pub kind: ErrorKind,
}

#[derive(Serialize, Debug, Clone)]
/// A skipped-file notice: the candidate could not be read.
/// Not a link failure and never affects the exit status.
pub struct Diagnostic {
    pub file: String,
    pub detail: String,
}

#[derive(Serialize)]
/// Aggregated scan summary used by printers.
pub struct Summary {
    pub errors: usize,
    /// Markdown files scanned (readable candidates).
    pub files: usize,
    /// Distinct internal links checked after classification and dedup.
    pub links: usize,
    /// Candidates skipped because they could not be read.
    pub skipped: usize,
}

#[derive(Serialize)]
/// Scan results container.
pub struct ScanResult {
    pub errors: Vec<LinkError>,
    pub diagnostics: Vec<Diagnostic>,
    pub summary: Summary,
}
