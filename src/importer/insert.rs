//! Anchor resolution and text splicing.
//!
//! Anchors are located with case-insensitive raw-text search and
//! insertions are spliced into the original text, so untouched content
//! is preserved byte-for-byte. A missing anchor skips the insertion;
//! it never fails the pass.

use super::rules::Anchor;

/// One pending edit: replace `remove` bytes at `at` with `text`.
///
/// Plain insertions use `remove: 0`; the placeholder step removes the
/// marker it replaces.
pub struct Splice {
    pub at: usize,
    pub remove: usize,
    pub text: &'static str,
}

/// Resolve an anchor to a byte offset in the document, or `None` to
/// skip the insertion.
pub fn resolve(html: &str, anchor: Anchor) -> Option<usize> {
    match anchor {
        Anchor::HeadStart => after_open_tag(html, "head"),
        Anchor::HeadEnd => find_ci(html, "</head>"),
        Anchor::BodyEnd => find_ci(html, "</body>"),
    }
}

/// Apply all edits in one pass over the original text.
///
/// Offsets refer to the unedited input. Ties keep push order, so tags
/// sharing an anchor land in rule-table order.
pub fn splice(html: &str, mut edits: Vec<Splice>) -> String {
    edits.sort_by_key(|e| e.at);

    let grow: usize = edits.iter().map(|e| e.text.len()).sum();
    let mut out = String::with_capacity(html.len() + grow);

    let mut last = 0;
    for edit in &edits {
        out.push_str(&html[last..edit.at]);
        out.push_str(edit.text);
        last = edit.at + edit.remove;
    }
    out.push_str(&html[last..]);

    out
}

// =============================================================================
// Search Helpers
// =============================================================================

/// Byte offset just past the `>` of the first `<name ...>` open tag.
fn after_open_tag(html: &str, name: &str) -> Option<usize> {
    let pat = format!("<{name}");
    let mut from = 0;

    while let Some(rel) = find_ci(&html[from..], &pat) {
        let start = from + rel;
        let rest = &html[start + pat.len()..];

        // Reject prefix matches such as <header> for <head>.
        let at_boundary = matches!(rest.chars().next(), Some(c) if c == '>' || c.is_ascii_whitespace());
        if at_boundary && let Some(close) = rest.find('>') {
            return Some(start + pat.len() + close + 1);
        }

        from = start + pat.len();
    }

    None
}

/// Case-insensitive substring search (ASCII).
fn find_ci(haystack: &str, needle: &str) -> Option<usize> {
    let h = haystack.as_bytes();
    let n = needle.as_bytes();
    if n.is_empty() || h.len() < n.len() {
        return None;
    }
    (0..=h.len() - n.len()).find(|&i| h[i..i + n.len()].eq_ignore_ascii_case(n))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_ci() {
        assert_eq!(find_ci("<HTML><HEAD></HEAD>", "</head>"), Some(12));
        assert_eq!(find_ci("<html></html>", "</head>"), None);
        assert_eq!(find_ci("", "</head>"), None);
    }

    #[test]
    fn test_after_open_tag() {
        assert_eq!(after_open_tag("<html><head></head>", "head"), Some(12));
        assert_eq!(after_open_tag("<head lang=\"en\">x", "head"), Some(16));
        assert_eq!(after_open_tag("<HEAD>x", "head"), Some(6));
    }

    #[test]
    fn test_after_open_tag_skips_prefix_matches() {
        // <header> must not satisfy a <head> anchor
        assert_eq!(after_open_tag("<html><header></header></html>", "head"), None);
        assert_eq!(
            after_open_tag("<header></header><head>x</head>", "head"),
            Some(23)
        );
    }

    #[test]
    fn test_resolve_missing_anchor_skips() {
        assert_eq!(resolve("<p>no structure</p>", Anchor::HeadStart), None);
        assert_eq!(resolve("<p>no structure</p>", Anchor::HeadEnd), None);
        assert_eq!(resolve("<p>no structure</p>", Anchor::BodyEnd), None);
    }

    #[test]
    fn test_resolve_body_end() {
        let html = "<body><p>x</p></body>";
        assert_eq!(resolve(html, Anchor::BodyEnd), Some(14));
    }

    #[test]
    fn test_splice_insert_and_replace() {
        let html = "<head>${ampjs}</head>";
        let out = splice(
            html,
            vec![
                Splice {
                    at: 14,
                    remove: 0,
                    text: "<x>",
                },
                Splice {
                    at: 6,
                    remove: 8,
                    text: "<js>",
                },
            ],
        );
        assert_eq!(out, "<head><js><x></head>");
    }

    #[test]
    fn test_splice_keeps_push_order_on_ties() {
        let out = splice(
            "ab",
            vec![
                Splice {
                    at: 1,
                    remove: 0,
                    text: "1",
                },
                Splice {
                    at: 1,
                    remove: 0,
                    text: "2",
                },
            ],
        );
        assert_eq!(out, "a12b");
    }
}
