use std::ops::Deref;

use crate::license::definitions::Catalog;
use crate::license::text::Document;
use crate::license::License;

/// Sentinel name reported when full text matches no catalog entry.
pub const DEFAULT_FALLBACK_NAME: &str = "unknown";

/// The single license a lookup resolves to.
///
/// Dereferences to [`License`] either way; `Unrecognized` carries a
/// sentinel built by [`Catalog::build_unrecognized`].
#[derive(Debug, Clone)]
pub enum Verdict<'c> {
    Known(&'c License),
    Unrecognized(License),
}

impl Verdict<'_> {
    pub fn is_recognized(&self) -> bool {
        matches!(self, Verdict::Known(_))
    }

    pub fn into_license(self) -> License {
        match self {
            Verdict::Known(license) => license.clone(),
            Verdict::Unrecognized(license) => license,
        }
    }
}

impl Deref for Verdict<'_> {
    type Target = License;

    fn deref(&self) -> &License {
        match self {
            Verdict::Known(license) => *license,
            Verdict::Unrecognized(license) => license,
        }
    }
}

/// Resolve declared license names and license documents against a catalog.
///
/// Both lookups walk the catalog in order and return the first hit.
#[derive(Debug, Clone)]
pub struct Recognizer<'c> {
    catalog: &'c Catalog,
    fallback_name: String,
}

impl<'c> Recognizer<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            fallback_name: DEFAULT_FALLBACK_NAME.to_string(),
        }
    }

    /// Name given to the sentinel when full text matches nothing.
    pub fn with_fallback_name(mut self, name: impl Into<String>) -> Self {
        self.fallback_name = name.into();
        self
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// Look up a license name exactly as a manifest declared it.
    ///
    /// Comparison is case-sensitive against short names and aliases. A name
    /// nothing claims comes back as an unrecognized license of that name.
    pub fn by_name(&self, declared: &str) -> Verdict<'c> {
        match self.catalog.all().iter().find(|l| l.matches_name(declared)) {
            Some(license) => {
                tracing::debug!("Declared name {:?} resolved to {}", declared, license.short_name());
                Verdict::Known(license)
            }
            None => {
                tracing::debug!("Declared name {:?} is not in the catalog", declared);
                Verdict::Unrecognized(Catalog::build_unrecognized(declared))
            }
        }
    }

    /// Classify the contents of a license document.
    pub fn by_text(&self, text: &str) -> Verdict<'c> {
        self.by_text_or(text, &self.fallback_name)
    }

    /// Like [`by_text`](Self::by_text), naming the sentinel `fallback_name`.
    pub fn by_text_or(&self, text: &str, fallback_name: &str) -> Verdict<'c> {
        let doc = Document::new(text);
        match self.catalog.all().iter().find(|l| l.matches_document(&doc)) {
            Some(license) => {
                tracing::debug!("License text matched {}", license.short_name());
                Verdict::Known(license)
            }
            None => {
                tracing::debug!("License text matched no catalog entry");
                Verdict::Unrecognized(Catalog::build_unrecognized(fallback_name))
            }
        }
    }
}
