//! Lexical path resolution and repository-boundary checks.
//!
//! Link targets may not exist, so resolution never touches the filesystem:
//! `.` and `..` segments are collapsed lexically and the result is compared
//! against the repository root component-wise.

use std::path::{Component, Path, PathBuf};

/// Lexically normalize a path: drop `.` segments and collapse each `..`
/// against the preceding component.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for comp in path.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => {
                let at_root = matches!(
                    out.components().next_back(),
                    Some(Component::RootDir | Component::Prefix(_))
                );
                let has_normal =
                    matches!(out.components().next_back(), Some(Component::Normal(_)));
                if at_root {
                    // `..` at the filesystem root stays at the root
                } else if has_normal {
                    out.pop();
                } else {
                    // leading `..` on a relative path is preserved
                    out.push("..");
                }
            }
            c => out.push(c.as_os_str()),
        }
    }
    out
}

/// True when `target` is the repository root itself or lies beneath it.
/// Both paths must be absolute and normalized; the comparison is
/// component-wise, so `/repo-other` does not pass for root `/repo`.
pub fn is_within_root(target: &Path, root: &Path) -> bool {
    target.starts_with(root)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_dots() {
        assert_eq!(normalize(Path::new("/a/b/../c")), PathBuf::from("/a/c"));
        assert_eq!(normalize(Path::new("/a/./b/./c")), PathBuf::from("/a/b/c"));
        assert_eq!(
            normalize(Path::new("/a/b/c/../../d")),
            PathBuf::from("/a/d")
        );
    }

    #[test]
    fn test_normalize_clamps_at_filesystem_root() {
        assert_eq!(normalize(Path::new("/a/../../b")), PathBuf::from("/b"));
        assert_eq!(normalize(Path::new("/../x")), PathBuf::from("/x"));
    }

    #[test]
    fn test_normalize_keeps_leading_parent_on_relative() {
        assert_eq!(normalize(Path::new("a/../../b")), PathBuf::from("../b"));
        assert_eq!(normalize(Path::new("../a/b")), PathBuf::from("../a/b"));
    }

    #[test]
    fn test_is_within_root() {
        let root = Path::new("/repo");
        assert!(is_within_root(Path::new("/repo"), root));
        assert!(is_within_root(Path::new("/repo/docs/a.md"), root));
        assert!(!is_within_root(Path::new("/etc/passwd"), root));
        assert!(!is_within_root(Path::new("/repo-other/a.md"), root));
    }
}
