//! Markdown link extraction and classification rules.
//!
//! Extraction is a literal regex scan, not a markdown parse. The pattern is
//! part of the tool's contract: link text may not contain `]` and the url
//! ends at the first `)`, so nested brackets and parenthesized urls are
//! unsupported.

use regex::Regex;
use std::path::{Component, Path};

/// The exact extraction pattern: `[<text>](<url>)` with the stated
/// bracket/paren exclusions.
const LINK_PATTERN: &str = r"\[([^\]]*)\]\(([^)]+)\)";

/// One `[text](url)` occurrence extracted from a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRecord {
    pub text: String,
    pub url: String,
}

/// Find all markdown-style links in `content`, in occurrence order.
pub fn find_links(content: &str) -> Vec<LinkRecord> {
    let re = Regex::new(LINK_PATTERN).expect("link pattern");
    re.captures_iter(content)
        .map(|caps| LinkRecord {
            text: caps[1].to_string(),
            url: caps[2].to_string(),
        })
        .collect()
}

/// External links (http/https/mailto) are never checked.
pub fn is_external(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://") || url.starts_with("mailto:")
}

/// Same-page anchors are never checked.
pub fn is_anchor_only(url: &str) -> bool {
    url.starts_with('#')
}

/// Links carrying double-brace template syntax are resolved by the site
/// generator at publish time and cannot be verified here.
pub fn has_template_marker(url: &str) -> bool {
    url.contains("{{") || url.contains("}}")
}

/// Drop the first `#` and everything after it.
pub fn strip_anchor(url: &str) -> &str {
    match url.find('#') {
        Some(i) => &url[..i],
        None => url,
    }
}

/// True when `file` lives under a `docs/wiki` directory pair.
pub fn in_wiki_tree(file: &Path) -> bool {
    let comps: Vec<_> = file
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s),
            _ => None,
        })
        .collect();
    comps.windows(2).any(|w| w[0] == "docs" && w[1] == "wiki")
}

/// A wiki-style link is a bare page name used under the wiki tree: no path
/// separator, no `.md` suffix, no trailing slash. `clean_url` must already
/// be anchor-stripped.
pub fn is_wiki_style(clean_url: &str, file: &Path) -> bool {
    in_wiki_tree(file)
        && !clean_url.ends_with(".md")
        && !clean_url.ends_with('/')
        && !clean_url.contains('/')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_find_links_basic() {
        let content = "intro [setup](./setup.md) mid [site](https://example.com) end";
        let links = find_links(content);
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].text, "setup");
        assert_eq!(links[0].url, "./setup.md");
        assert_eq!(links[1].url, "https://example.com");
    }

    #[test]
    fn test_find_links_matches_images_and_empty_text() {
        // The image bang is outside the bracket pair, so images match too.
        let links = find_links("![diagram](img/arch.png) and [](empty.md)");
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].text, "diagram");
        assert_eq!(links[0].url, "img/arch.png");
        assert_eq!(links[1].text, "");
    }

    #[test]
    fn test_find_links_paren_in_url_truncates() {
        // Contract: the url ends at the first `)`. Not a full parser.
        let links = find_links("[x](file(1).md)");
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].url, "file(1");
    }

    #[test]
    fn test_find_links_nested_brackets_unsupported() {
        assert!(find_links("[a[b]](c.md)").is_empty());
    }

    #[test]
    fn test_classification_predicates() {
        assert!(is_external("http://x"));
        assert!(is_external("https://x"));
        assert!(is_external("mailto:a@b"));
        assert!(!is_external("./x.md"));

        assert!(is_anchor_only("#section"));
        assert!(!is_anchor_only("a#section"));

        assert!(has_template_marker("{{ site.url }}/docs"));
        assert!(has_template_marker("docs/}}"));
        assert!(!has_template_marker("docs/page.md"));
    }

    #[test]
    fn test_strip_anchor() {
        assert_eq!(strip_anchor("page.md#install"), "page.md");
        assert_eq!(strip_anchor("page.md"), "page.md");
        assert_eq!(strip_anchor("#only"), "");
        assert_eq!(strip_anchor("a#b#c"), "a");
    }

    #[test]
    fn test_in_wiki_tree_is_segment_based() {
        assert!(in_wiki_tree(&PathBuf::from("/r/docs/wiki/Home.md")));
        assert!(in_wiki_tree(&PathBuf::from("/r/sub/docs/wiki/Home.md")));
        assert!(!in_wiki_tree(&PathBuf::from("/r/docs/wikis/Home.md")));
        assert!(!in_wiki_tree(&PathBuf::from("/r/mydocs/wiki/Home.md")));
        assert!(!in_wiki_tree(&PathBuf::from("/r/docs/Home.md")));
    }

    #[test]
    fn test_is_wiki_style() {
        let wiki = PathBuf::from("/r/docs/wiki/Home.md");
        let plain = PathBuf::from("/r/docs/Home.md");
        assert!(is_wiki_style("OtherPage", &wiki));
        assert!(!is_wiki_style("OtherPage.md", &wiki));
        assert!(!is_wiki_style("sub/OtherPage", &wiki));
        assert!(!is_wiki_style("OtherPage/", &wiki));
        assert!(!is_wiki_style("OtherPage", &plain));
    }
}
