//! The ordered rule table: predicate, anchor, literal tag.
//!
//! Adding a conditional extension tag is a data addition here, not a
//! code change. Rules are independent: no predicate observes another
//! rule's insertion, and evaluation order is fixed.

use std::sync::LazyLock;

use regex::Regex;

use super::tags;

// =============================================================================
// Types
// =============================================================================

/// Structural location where a rule inserts its tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Right after the `<head>` open tag.
    HeadStart,
    /// Right before `</head>`.
    HeadEnd,
    /// Right before `</body>`.
    BodyEnd,
}

/// Condition tested against the scanned document.
pub enum Predicate {
    /// Any element carries the attribute.
    Attr(&'static str),
    /// Any element carries the attribute with a value matching the pattern.
    AttrValue {
        attr: &'static str,
        pattern: &'static LazyLock<Regex>,
    },
    /// An element with the given id exists, optionally of a specific tag.
    Element {
        tag: Option<&'static str>,
        id: &'static str,
    },
    /// Any of the listed predicates holds.
    Any(&'static [Predicate]),
}

/// One importable extension tag.
pub struct Rule {
    /// AMP custom-element name; also matched by the presence check.
    pub name: &'static str,
    pub when: Predicate,
    pub anchor: Anchor,
    /// Literal tag text spliced into the document.
    pub tag: &'static str,
    /// Script source identifying an already-imported copy of this tag.
    pub src: &'static str,
}

// =============================================================================
// Rule Table
// =============================================================================

/// `AMP.setState(...)` inside an `on` attribute value.
static SET_STATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"AMP\.setState\s*\(").unwrap());

/// Conditional extension rules, evaluated in table order.
pub static RULES: &[Rule] = &[
    Rule {
        name: "amp-bind",
        when: Predicate::AttrValue {
            attr: "on",
            pattern: &SET_STATE,
        },
        anchor: Anchor::HeadEnd,
        tag: tags::AMP_BIND_TAG,
        src: tags::AMP_BIND_SRC,
    },
    Rule {
        name: "amp-access",
        when: Predicate::Any(&[
            Predicate::Attr("amp-access"),
            Predicate::Element {
                tag: Some("script"),
                id: "amp-access",
            },
        ]),
        anchor: Anchor::HeadEnd,
        tag: tags::AMP_ACCESS_TAG,
        src: tags::AMP_ACCESS_SRC,
    },
    Rule {
        name: "amp-access-laterpay",
        when: Predicate::Element {
            tag: Some("div"),
            id: "amp-access-laterpay-dialog",
        },
        anchor: Anchor::HeadEnd,
        tag: tags::AMP_ACCESS_LATERPAY_TAG,
        src: tags::AMP_ACCESS_LATERPAY_SRC,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_state_pattern() {
        assert!(SET_STATE.is_match("tap:AMP.setState({open: true})"));
        assert!(SET_STATE.is_match("change:AMP.setState ( {x: 1} )"));
        assert!(!SET_STATE.is_match("tap:lightbox.open"));
        assert!(!SET_STATE.is_match("AMP.setstate(x)"));
    }

    #[test]
    fn test_rule_names_are_unique() {
        for (i, rule) in RULES.iter().enumerate() {
            assert!(
                RULES.iter().skip(i + 1).all(|r| r.name != rule.name),
                "duplicate rule: {}",
                rule.name
            );
        }
    }
}
