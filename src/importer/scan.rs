//! Lenient document scan: parse once, answer rule predicates.
//!
//! The parsed tree is used for detection only; insertion positions are
//! resolved against the raw text (see `insert.rs`), so the input is
//! never re-serialized.

use rustc_hash::FxHashSet;

use super::rules::Predicate;

/// Parsed view of one document, valid for a single import pass.
pub struct DocScan<'a> {
    dom: Option<tl::VDom<'a>>,
}

impl<'a> DocScan<'a> {
    /// Parse the input. Parsing is lenient and in practice always
    /// succeeds; a refused input degrades to a scan that matches
    /// nothing, so the document passes through as opaque text.
    pub fn parse(html: &'a str) -> Self {
        let dom = tl::parse(html, tl::ParserOptions::default()).ok();
        Self { dom }
    }

    /// Test a rule predicate against the full tree.
    pub fn matches(&self, predicate: &Predicate) -> bool {
        match predicate {
            Predicate::Attr(name) => self.any_tag(|tag| has_attr(tag, name)),
            Predicate::AttrValue { attr, pattern } => {
                self.any_tag(|tag| attr_value(tag, attr).is_some_and(|v| pattern.is_match(&v)))
            }
            Predicate::Element { tag: want, id } => self.any_tag(|tag| {
                want.is_none_or(|w| tag_name_is(tag, w))
                    && attr_value(tag, "id").is_some_and(|v| v == *id)
            }),
            Predicate::Any(list) => list.iter().any(|p| self.matches(p)),
        }
    }

    /// Collect the script tags already imported into the document.
    pub fn present_scripts(&self) -> PresentTags {
        let mut present = PresentTags::default();
        let Some(dom) = &self.dom else {
            return present;
        };

        for tag in dom.nodes().iter().filter_map(|n| n.as_tag()) {
            if !tag_name_is(tag, "script") {
                continue;
            }
            if let Some(name) = attr_value(tag, "custom-element") {
                present.elements.insert(name);
            }
            if let Some(src) = attr_value(tag, "src") {
                present.sources.insert(src);
            }
        }

        present
    }

    fn any_tag(&self, f: impl Fn(&tl::HTMLTag) -> bool) -> bool {
        let Some(dom) = &self.dom else {
            return false;
        };
        dom.nodes().iter().filter_map(|n| n.as_tag()).any(f)
    }
}

/// Custom-element names and script sources found in the document.
///
/// A tag counts as present when either its `custom-element` name or
/// its script `src` already occurs.
#[derive(Debug, Default)]
pub struct PresentTags {
    elements: FxHashSet<String>,
    sources: FxHashSet<String>,
}

impl PresentTags {
    pub fn contains(&self, name: &str, src: &str) -> bool {
        self.elements.contains(name) || self.has_src(src)
    }

    pub fn has_src(&self, src: &str) -> bool {
        self.sources.contains(src)
    }
}

// =============================================================================
// Tag Helpers
// =============================================================================

fn tag_name_is(tag: &tl::HTMLTag, want: &str) -> bool {
    tag.name().as_utf8_str().eq_ignore_ascii_case(want)
}

fn has_attr(tag: &tl::HTMLTag, name: &str) -> bool {
    tag.attributes().iter().any(|(k, _)| {
        let key: &str = k.as_ref();
        key.eq_ignore_ascii_case(name)
    })
}

fn attr_value(tag: &tl::HTMLTag, name: &str) -> Option<String> {
    tag.attributes()
        .iter()
        .find(|(k, _)| {
            let key: &str = k.as_ref();
            key.eq_ignore_ascii_case(name)
        })
        .and_then(|(_, v)| v.map(|v| v.to_string()))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attr_predicate() {
        let scan = DocScan::parse(r#"<html><body><section amp-access="x"></section></body></html>"#);
        assert!(scan.matches(&Predicate::Attr("amp-access")));
        assert!(!scan.matches(&Predicate::Attr("amp-list")));
    }

    #[test]
    fn test_attr_names_are_case_insensitive() {
        let scan = DocScan::parse(r#"<div AMP-ACCESS="x"></div>"#);
        assert!(scan.matches(&Predicate::Attr("amp-access")));
    }

    #[test]
    fn test_element_predicate_requires_tag_match() {
        let scan = DocScan::parse(r#"<span id="amp-access"></span>"#);
        assert!(!scan.matches(&Predicate::Element {
            tag: Some("script"),
            id: "amp-access",
        }));
        assert!(scan.matches(&Predicate::Element {
            tag: None,
            id: "amp-access",
        }));
    }

    #[test]
    fn test_present_scripts() {
        let scan = DocScan::parse(concat!(
            r#"<head><script async src="https://cdn.ampproject.org/v0.js"></script>"#,
            r#"<script async custom-element="amp-bind" src="https://cdn.ampproject.org/v0/amp-bind-0.1.js"></script></head>"#,
        ));
        let present = scan.present_scripts();

        assert!(present.has_src("https://cdn.ampproject.org/v0.js"));
        assert!(present.contains("amp-bind", "unused"));
        assert!(!present.contains("amp-access", "unused"));
    }
}
