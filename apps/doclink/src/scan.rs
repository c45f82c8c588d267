//! Scan runner: discovers markdown files and validates their internal links.
//!
//! Produces a `ScanResult` with broken-link records, skipped-file
//! diagnostics, and a summary. Files are processed in parallel; records are
//! sorted before returning so repeat runs over an unchanged tree emit
//! identical reports.

use crate::links::{self, LinkRecord};
use crate::models::{Diagnostic, ErrorKind, LinkError, ScanResult, Summary};
use crate::paths;
use glob::glob;
use rayon::prelude::*;
use std::collections::HashSet;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

/// Fixed `expected` sentinel for links whose target escapes the repository.
/// The filesystem is never probed for these.
pub const UNSAFE_TARGET: &str = "UNSAFE PATH (outside repository)";

struct FileOutcome {
    errors: Vec<LinkError>,
    links: usize,
    diagnostic: Option<Diagnostic>,
}

/// Scan `repo_root` for markdown files and validate every internal link.
///
/// The root is an explicit parameter: all relative and root-relative link
/// resolution, and the traversal boundary, derive from it alone.
pub fn run_scan(repo_root: &Path) -> ScanResult {
    let root = fs::canonicalize(repo_root).unwrap_or_else(|_| repo_root.to_path_buf());

    let mut files: Vec<PathBuf> = Vec::new();
    for pat in ["*.md", "**/*.md"] {
        let abs_glob = root.join(pat);
        let pattern = abs_glob.to_string_lossy().to_string();
        for entry in glob(&pattern).expect("bad glob pattern").flatten() {
            files.push(entry);
        }
    }
    files.sort();
    files.dedup();
    files.retain(|p| !is_excluded(p, &root));

    let outcomes: Vec<FileOutcome> = files.par_iter().map(|path| scan_file(path, &root)).collect();

    let scanned = outcomes.iter().filter(|o| o.diagnostic.is_none()).count();
    let links_checked: usize = outcomes.iter().map(|o| o.links).sum();
    let mut diagnostics: Vec<Diagnostic> = outcomes
        .iter()
        .filter_map(|o| o.diagnostic.clone())
        .collect();
    let mut errors: Vec<LinkError> = outcomes.into_iter().flat_map(|o| o.errors).collect();
    errors.sort_by(|a, b| a.file.cmp(&b.file).then(a.link.cmp(&b.link)));
    diagnostics.sort_by(|a, b| a.file.cmp(&b.file));

    let summary = Summary {
        errors: errors.len(),
        files: scanned,
        links: links_checked,
        skipped: diagnostics.len(),
    };
    ScanResult {
        errors,
        diagnostics,
        summary,
    }
}

/// Candidate paths with a version-control or dependency-cache segment are
/// excluded, as is the historical `docs/audit` subtree. Matching is
/// segment-wise, so `.github` is not `.git`.
fn is_excluded(path: &Path, root: &Path) -> bool {
    let rel = path.strip_prefix(root).unwrap_or(path);
    let comps: Vec<&OsStr> = rel.components().map(|c| c.as_os_str()).collect();
    if comps.iter().any(|c| *c == ".git" || *c == "node_modules") {
        return true;
    }
    comps.windows(2).any(|w| w[0] == "docs" && w[1] == "audit")
}

fn display_path(path: &Path, root: &Path) -> String {
    pathdiff::diff_paths(path, root)
        .unwrap_or_else(|| path.to_path_buf())
        .to_string_lossy()
        .to_string()
}

fn scan_file(path: &Path, root: &Path) -> FileOutcome {
    let shown = display_path(path, root);
    let bytes = match fs::read(path) {
        Ok(b) => b,
        Err(e) => {
            return FileOutcome {
                errors: Vec::new(),
                links: 0,
                diagnostic: Some(Diagnostic {
                    file: shown,
                    detail: e.to_string(),
                }),
            }
        }
    };
    // Best-effort decode: invalid UTF-8 sequences are replaced, not fatal.
    let content = String::from_utf8_lossy(&bytes);
    let dir = path.parent().unwrap_or(root);

    let records: Vec<LinkRecord> = links::find_links(&content);
    let mut seen: HashSet<&str> = HashSet::new();
    let mut errors: Vec<LinkError> = Vec::new();
    let mut checked = 0usize;

    for rec in &records {
        let url = rec.url.as_str();
        if links::is_external(url) || links::is_anchor_only(url) || links::has_template_marker(url)
        {
            continue;
        }
        let clean = links::strip_anchor(url);
        if clean.is_empty() {
            continue;
        }
        // One check per distinct (file, url) pair; repeats keep the first
        // occurrence's result.
        if !seen.insert(url) {
            continue;
        }
        checked += 1;

        if links::is_wiki_style(clean, path) {
            let target = dir.join(format!("{}.md", clean));
            let resolved = paths::normalize(&target);
            // Boundary first: an out-of-tree wiki target is rejected as
            // nonexistent rather than reported separately.
            if !paths::is_within_root(&resolved, root) || !target.exists() {
                errors.push(LinkError {
                    file: shown.clone(),
                    link: url.to_string(),
                    expected: target.display().to_string(),
                    kind: ErrorKind::WikiStyle,
                });
            }
            continue;
        }

        // Root-relative links are rooted at the docs subtree, not the
        // repository root. All leading slashes are stripped before joining.
        let target = if clean.starts_with('/') {
            root.join("docs").join(clean.trim_start_matches('/'))
        } else {
            dir.join(clean)
        };
        let resolved = paths::normalize(&target);
        if !paths::is_within_root(&resolved, root) {
            errors.push(LinkError {
                file: shown.clone(),
                link: url.to_string(),
                expected: UNSAFE_TARGET.to_string(),
                kind: ErrorKind::Security,
            });
            continue;
        }
        if !resolved.exists() {
            errors.push(LinkError {
                file: shown.clone(),
                link: url.to_string(),
                expected: resolved.display().to_string(),
                kind: ErrorKind::Regular,
            });
        }
    }

    FileOutcome {
        errors,
        links: checked,
        diagnostic: None,
    }
}
