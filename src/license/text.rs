//! Text normalization shared by every textual comparison.
//!
//! Both the reference side (templates, literal texts) and the input side go
//! through [`normalize`] before they are compared, so line wrapping and
//! quoting style never decide a match.

use once_cell::sync::Lazy;
use once_cell::unsync::OnceCell;
use regex::Regex;

use crate::error::{LicenseError, LicenseResult};

/// Upper bound, in characters, of the excerpt a header matcher inspects.
pub const HEADER_MAX_CHARS: usize = 1000;

static SPACES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));
static QUOTES: Lazy<Regex> = Lazy::new(|| Regex::new(r#"['`"]{1,2}"#).expect("valid regex"));
static PLACEHOLDERS: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^<>]+>").expect("valid regex"));

/// Collapse whitespace runs, fold quote characters to `"` and trim.
pub fn normalize(text: &str) -> String {
    let collapsed = SPACES.replace_all(text, " ");
    let quoted = QUOTES.replace_all(&collapsed, "\"");
    quoted.trim().to_string()
}

/// Leading excerpt used for header matching.
///
/// Leading whitespace is skipped, the text is cut at the first blank line,
/// and the result is capped at [`HEADER_MAX_CHARS`] characters.
pub fn header_excerpt(text: &str) -> &str {
    let text = text.trim_start();

    let mut end = text.len();
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        if line.trim().is_empty() {
            end = offset;
            break;
        }
        offset += line.len();
    }

    let excerpt = &text[..end];
    match excerpt.char_indices().nth(HEADER_MAX_CHARS) {
        Some((idx, _)) => &excerpt[..idx],
        None => excerpt,
    }
}

/// An input text with its normalized form computed at most once.
///
/// A full-text lookup evaluates many matchers against the same input;
/// they all share this normalization.
pub struct Document<'a> {
    raw: &'a str,
    normalized: OnceCell<String>,
}

impl<'a> Document<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self {
            raw,
            normalized: OnceCell::new(),
        }
    }

    pub fn raw(&self) -> &'a str {
        self.raw
    }

    pub fn normalized(&self) -> &str {
        self.normalized.get_or_init(|| normalize(self.raw))
    }
}

/// A normalized reference text, compared for whole-text equality.
///
/// `<...>` placeholders in the reference match any run of text; a
/// reference without placeholders is compared as a plain string.
#[derive(Debug, Clone)]
pub struct TextPattern {
    reference: String,
    compiled: Option<Regex>,
}

impl TextPattern {
    /// Compile `reference`, turning placeholders into wildcards.
    pub fn compile(reference: &str) -> LicenseResult<Self> {
        let reference = normalize(reference);
        if !PLACEHOLDERS.is_match(&reference) {
            return Ok(Self::literal_normalized(reference));
        }

        let literals: Vec<String> = PLACEHOLDERS
            .split(&reference)
            .map(regex::escape)
            .collect();
        let pattern = format!("(?s)^{}$", literals.join(".*"));
        let compiled =
            Regex::new(&pattern).map_err(|e| LicenseError::invalid_pattern(&pattern, e))?;

        Ok(Self {
            reference,
            compiled: Some(compiled),
        })
    }

    /// A reference compared verbatim, with no placeholder handling.
    pub fn literal(reference: &str) -> Self {
        Self::literal_normalized(normalize(reference))
    }

    fn literal_normalized(reference: String) -> Self {
        Self {
            reference,
            compiled: None,
        }
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn is_match(&self, normalized: &str) -> bool {
        match &self.compiled {
            Some(regex) => regex.is_match(normalized),
            None => self.reference == normalized,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize("  a\n\n b\t\tc  "), "a b c");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \n\t "), "");
    }

    #[test]
    fn test_normalize_folds_quotes() {
        assert_eq!(normalize("provided ''AS IS''"), "provided \"AS IS\"");
        assert_eq!(normalize("`quoted'"), "\"quoted\"");
    }

    #[test]
    fn test_header_excerpt_stops_at_blank_line() {
        let text = "\n\nThe MIT License\nCopyright 2020\n\nPermission is hereby granted";
        assert_eq!(header_excerpt(text), "The MIT License\nCopyright 2020\n");
    }

    #[test]
    fn test_header_excerpt_whitespace_only_line_is_blank() {
        let text = "first line\n   \t\nsecond paragraph";
        assert_eq!(header_excerpt(text), "first line\n");
    }

    #[test]
    fn test_header_excerpt_is_capped() {
        let text = "é".repeat(HEADER_MAX_CHARS + 50);
        assert_eq!(header_excerpt(&text).chars().count(), HEADER_MAX_CHARS);
    }

    #[test]
    fn test_header_excerpt_of_empty_text() {
        assert_eq!(header_excerpt(""), "");
        assert_eq!(header_excerpt("\n \n"), "");
    }

    #[test]
    fn test_literal_pattern_requires_equality() {
        let pattern = TextPattern::literal("MIT");
        assert!(pattern.is_match("MIT"));
        assert!(!pattern.is_match("MIT License"));
        assert!(!pattern.is_match("mit"));
    }

    #[test]
    fn test_placeholders_match_any_text() {
        let pattern = TextPattern::compile("Copyright (c) <year> <copyright holders>\nAll rights.")
            .unwrap();
        assert!(pattern.is_match("Copyright (c) 2019 Jane Doe All rights."));
        assert!(pattern.is_match("Copyright (c) <year> <copyright holders> All rights."));
        assert!(!pattern.is_match("Copyright (c) 2019 Jane Doe All rights. Extra"));
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        let pattern = TextPattern::compile("(a) [b] *c* <x>").unwrap();
        assert!(pattern.is_match("(a) [b] *c* anything"));
        assert!(!pattern.is_match("a b c anything"));
    }

    #[test]
    fn test_document_normalizes_lazily() {
        let doc = Document::new("  hello \n world ");
        assert_eq!(doc.raw(), "  hello \n world ");
        assert_eq!(doc.normalized(), "hello world");
    }
}
