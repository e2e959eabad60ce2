//! The license recognition engine.
//!
//! - [`text`] — normalization shared by every textual comparison.
//! - [`template`] — canonical reference texts, looked up by name.
//! - [`matcher`] — composable predicates over a text blob.
//! - [`definitions`] — the fixed catalog of recognized licenses.
//! - [`recognizer`] — declared-name and full-text lookup over the catalog.

pub mod definitions;
pub mod matcher;
pub mod recognizer;
pub mod template;
pub mod text;

use std::hash::{Hash, Hasher};

use serde::Serialize;

use matcher::Matcher;
use text::Document;

/// A catalog entry.
///
/// Two licenses are equal when their short names are equal. The matcher is
/// an implementation detail and is never serialized.
#[derive(Debug, Clone, Serialize)]
pub struct License {
    short_name: String,
    pretty_name: Option<String>,
    other_names: Vec<String>,
    url: Option<String>,
    #[serde(skip)]
    matcher: Matcher,
}

impl License {
    /// A license recognized only by exact reproduction of `short_name`.
    pub fn new(short_name: impl Into<String>) -> Self {
        let short_name = short_name.into();
        let matcher = Matcher::exact(&short_name);
        Self {
            short_name,
            pretty_name: None,
            other_names: Vec::new(),
            url: None,
            matcher,
        }
    }

    pub fn pretty_name(mut self, pretty_name: impl Into<String>) -> Self {
        self.pretty_name = Some(pretty_name.into());
        self
    }

    pub fn other_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.other_names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn matcher(mut self, matcher: Matcher) -> Self {
        self.matcher = matcher;
        self
    }

    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    /// Display name: the pretty name when set, otherwise the short name.
    pub fn name(&self) -> &str {
        self.pretty_name.as_deref().unwrap_or(&self.short_name)
    }

    pub fn aliases(&self) -> &[String] {
        &self.other_names
    }

    pub fn reference_url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// The short name followed by every alias.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.short_name.as_str()).chain(self.other_names.iter().map(String::as_str))
    }

    /// Exact, case-sensitive comparison against the short name and aliases.
    pub fn matches_name(&self, name: &str) -> bool {
        self.names().any(|n| n == name)
    }

    pub fn matches_text(&self, text: &str) -> bool {
        self.matcher.matches(text)
    }

    pub(crate) fn matches_document(&self, doc: &Document<'_>) -> bool {
        self.matcher.matches_document(doc)
    }
}

impl PartialEq for License {
    fn eq(&self, other: &Self) -> bool {
        self.short_name == other.short_name
    }
}

impl Eq for License {}

impl Hash for License {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.short_name.hash(state);
    }
}

impl std::fmt::Display for License {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
