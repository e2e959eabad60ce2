//! Predicates deciding whether a text represents a license.
//!
//! A [`Matcher`] is a closed set of variants that compose freely: an
//! [`Any`](Matcher::Any) can hold headers, a [`Header`](Matcher::Header)
//! can wrap an `Any`, and so on. Every variant is a pure function of its
//! input, so one matcher can be shared across threads and reused forever.
//!
//! Textual variants compare against the normalized input (see
//! [`text::normalize`](super::text::normalize)); regexes search the
//! normalized input and are case-sensitive unless they opt in with `(?i)`.

use regex::Regex;

use crate::error::{LicenseError, LicenseResult};
use crate::license::template::Template;
use crate::license::text::{header_excerpt, Document, TextPattern};

#[derive(Debug, Clone)]
pub enum Matcher {
    /// Normalized input equals a literal reference text.
    Text(TextPattern),
    /// Normalized input equals the content of a named template.
    Template { name: String, pattern: TextPattern },
    /// The pattern occurs somewhere in the normalized input.
    Regex(Regex),
    /// The inner matcher succeeds on the leading excerpt of the input.
    Header(Box<Matcher>),
    /// At least one inner matcher succeeds, tried in order.
    Any(Vec<Matcher>),
    /// Never succeeds.
    None,
}

impl Matcher {
    pub fn from_text(text: &str) -> LicenseResult<Self> {
        Ok(Matcher::Text(TextPattern::compile(text)?))
    }

    pub fn from_template(template: &Template) -> LicenseResult<Self> {
        Ok(Matcher::Template {
            name: template.name().to_string(),
            pattern: TextPattern::compile(template.content())?,
        })
    }

    pub fn from_regex(pattern: &str) -> LicenseResult<Self> {
        Regex::new(pattern)
            .map(Matcher::Regex)
            .map_err(|e| LicenseError::invalid_pattern(pattern, e))
    }

    /// Exact comparison against `name`, the default for catalog entries.
    pub fn exact(name: &str) -> Self {
        Matcher::Text(TextPattern::literal(name))
    }

    pub fn header(inner: Matcher) -> Self {
        Matcher::Header(Box::new(inner))
    }

    pub fn any(inner: impl IntoIterator<Item = Matcher>) -> Self {
        Matcher::Any(inner.into_iter().collect())
    }

    pub fn none() -> Self {
        Matcher::None
    }

    /// Whether `text` represents the license this matcher encodes.
    pub fn matches(&self, text: &str) -> bool {
        self.matches_document(&Document::new(text))
    }

    pub(crate) fn matches_document(&self, doc: &Document<'_>) -> bool {
        match self {
            Matcher::Text(pattern) => pattern.is_match(doc.normalized()),
            Matcher::Template { pattern, .. } => pattern.is_match(doc.normalized()),
            Matcher::Regex(regex) => regex.is_match(doc.normalized()),
            Matcher::Header(inner) => {
                inner.matches_document(&Document::new(header_excerpt(doc.raw())))
            }
            Matcher::Any(inner) => inner.iter().any(|m| m.matches_document(doc)),
            Matcher::None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mit_header() -> Matcher {
        Matcher::header(Matcher::from_regex("The MIT Licen[sc]e").unwrap())
    }

    #[test]
    fn test_text_matcher_ignores_whitespace_layout() {
        let m = Matcher::from_text("Permission is hereby granted,\nfree of charge").unwrap();
        assert!(m.matches("  Permission is   hereby granted, free of charge\n"));
        assert!(!m.matches("Permission is hereby granted"));
    }

    #[test]
    fn test_template_matcher() {
        let template = Template::new("tiny", "Copyright <year> <holder>\n\nDo anything.");
        let m = Matcher::from_template(&template).unwrap();
        assert!(m.matches("Copyright 2001 ACME Corp\n\nDo anything."));
        assert!(!m.matches("Copyright 2001 ACME Corp\n\nDo nothing."));
        assert!(matches!(m, Matcher::Template { ref name, .. } if name == "tiny"));
    }

    #[test]
    fn test_regex_matcher_searches_normalized_text() {
        let m = Matcher::from_regex(r"MIT Licen[sc]e.*http://(?:www\.)?opensource\.org").unwrap();
        assert!(m.matches("Released under the MIT License\nsee http://opensource.org/"));
        assert!(!m.matches("Released under the mit license http://opensource.org/"));
    }

    #[test]
    fn test_regex_opt_in_case_insensitive() {
        let m = Matcher::from_regex("(?i)the mit license").unwrap();
        assert!(m.matches("THE MIT LICENSE"));
    }

    #[test]
    fn test_invalid_regex() {
        let err = Matcher::from_regex("MIT (").unwrap_err();
        assert!(matches!(err, LicenseError::InvalidPattern { ref pattern, .. } if pattern == "MIT ("));
    }

    #[test]
    fn test_header_only_sees_first_paragraph() {
        let m = mit_header();
        assert!(m.matches("The MIT License\nCopyright 2020\n\nbody"));
        assert!(!m.matches("Copyright 2020\n\nThe MIT License"));
    }

    #[test]
    fn test_header_ignores_trailing_text() {
        let m = mit_header();
        let inputs = [
            "The MIT License\n\n",
            "Some header\n\n",
            "Copyright 2020\nAll rights reserved.\n \n",
        ];
        let suffixes = ["", "The MIT License", "\n\nmore\n\nThe MIT License"];

        for input in inputs {
            let base = m.matches(input);
            for suffix in suffixes {
                assert_eq!(m.matches(&format!("{input}{suffix}")), base, "{input:?} + {suffix:?}");
            }
        }
    }

    #[test]
    fn test_header_wraps_any_and_any_wraps_header() {
        let nested = Matcher::header(Matcher::any([
            Matcher::exact("MIT"),
            mit_header(),
        ]));
        assert!(nested.matches("MIT\n\nanything"));
        assert!(nested.matches("The MIT License\n\nanything"));
        assert!(!nested.matches("GPL\n\nMIT"));
    }

    #[test]
    fn test_any_is_union() {
        let m1 = Matcher::exact("MIT");
        let m2 = Matcher::from_regex("released under").unwrap();
        let union = Matcher::any([m1.clone(), m2.clone()]);

        for text in ["MIT", "is released under MIT", "GPL", "", "   "] {
            assert_eq!(union.matches(text), m1.matches(text) || m2.matches(text), "{text:?}");
        }
    }

    #[test]
    fn test_empty_any_and_none_never_match() {
        assert!(!Matcher::any([]).matches("anything"));
        assert!(!Matcher::none().matches("anything"));
        assert!(!Matcher::none().matches(""));
    }

    #[test]
    fn test_empty_input_is_not_an_error() {
        let m = Matcher::any([Matcher::exact("MIT"), mit_header()]);
        assert!(!m.matches(""));
        assert!(!m.matches(" \n\t "));
    }
}
