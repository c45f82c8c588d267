//! Repository root detection and effective settings resolution.
//!
//! Doclink is deliberately non-configurable: there is no config file and no
//! environment variable surface. The only knobs are the CLI flags, merged
//! with fixed defaults. Overrides precedence: CLI > defaults.

use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
/// Fully-resolved settings used by the check command.
pub struct Effective {
    pub repo_root: PathBuf,
    pub output: String,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops at the first ancestor containing a `.git` directory; falls back to
/// `start` when none is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Resolve `Effective` by merging CLI flags with defaults.
///
/// When `--repo-root` is given the detection walk starts there, so pointing
/// at any directory inside a repository selects that repository's root.
pub fn resolve_effective(cli_repo_root: Option<&str>, cli_output: Option<&str>) -> Effective {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    let repo_root = detect_repo_root(&start);
    let output = cli_output
        .map(|s| s.to_string())
        .unwrap_or_else(|| "human".to_string());
    Effective { repo_root, output }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_detect_repo_root_walks_up_to_git() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join(".git")).unwrap();
        fs::create_dir_all(root.join("docs/nested")).unwrap();

        let found = detect_repo_root(&root.join("docs/nested"));
        assert_eq!(found, root);
    }

    #[test]
    fn test_detect_repo_root_falls_back_to_start() {
        let dir = tempdir().unwrap();
        let start = dir.path().join("plain");
        fs::create_dir_all(&start).unwrap();

        // No .git anywhere under the tempdir; the walk ends at the
        // filesystem root and returns the starting point unchanged.
        let found = detect_repo_root(&start);
        assert_eq!(found, start);
    }

    #[test]
    fn test_resolve_effective_defaults_and_overrides() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join(".git")).unwrap();

        let eff = resolve_effective(root.to_str(), None);
        assert_eq!(eff.repo_root, root);
        assert_eq!(eff.output, "human");

        let eff = resolve_effective(root.to_str(), Some("json"));
        assert_eq!(eff.output, "json");
    }
}
