//! Canonical reference texts, looked up by name.

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{LicenseError, LicenseResult};
use crate::license::text::normalize;

/// Reference texts compiled into the binary, keyed by resource name.
const EMBEDDED: &[(&str, &str)] = &[
    ("BSD2", include_str!("../../templates/BSD2.txt")),
    ("ISC_long", include_str!("../../templates/ISC_long.txt")),
    ("MIT", include_str!("../../templates/MIT.txt")),
    ("MPL2", include_str!("../../templates/MPL2.txt")),
    ("NewBSD", include_str!("../../templates/NewBSD.txt")),
    ("NewBSD_no_star", include_str!("../../templates/NewBSD_no_star.txt")),
    ("Ruby", include_str!("../../templates/Ruby.txt")),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    name: String,
    content: String,
}

impl Template {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Derive an alternate text by replacing `from` with `to`.
    ///
    /// Replacement runs on normalized text, so a phrase that the resource
    /// wraps across lines is still found. The template itself is untouched.
    pub fn substitute(&self, from: &str, to: &str) -> String {
        normalize(&self.content).replace(&normalize(from), &normalize(to))
    }
}

/// Read-only registry of [`Template`]s.
#[derive(Debug, Clone, Default)]
pub struct TemplateStore {
    templates: BTreeMap<String, Template>,
}

impl TemplateStore {
    /// The reference texts shipped with the crate.
    pub fn embedded() -> Self {
        let mut store = Self::default();
        for (name, content) in EMBEDDED {
            store.insert(Template::new(*name, *content));
        }
        store
    }

    /// Embedded texts overlaid with every `<name>.txt` file found in `dir`.
    ///
    /// A file whose stem matches an embedded name replaces that template;
    /// any other stem registers a new one.
    pub fn with_overrides(dir: &Path) -> LicenseResult<Self> {
        let mut store = Self::embedded();

        let entries = std::fs::read_dir(dir).map_err(|source| LicenseError::TemplateIo {
            path: dir.to_path_buf(),
            source,
        })?;

        for entry in entries {
            let path = match entry {
                Ok(entry) => entry.path(),
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry in {}: {}", dir.display(), e);
                    continue;
                }
            };

            if path.extension().and_then(|e| e.to_str()) != Some("txt") {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            let content = std::fs::read_to_string(&path).map_err(|source| {
                LicenseError::TemplateIo {
                    path: path.clone(),
                    source,
                }
            })?;

            tracing::debug!("Loaded template '{}' from {}", name, path.display());
            store.insert(Template::new(name, content));
        }

        Ok(store)
    }

    pub fn insert(&mut self, template: Template) {
        self.templates.insert(template.name.clone(), template);
    }

    pub fn named(&self, name: &str) -> LicenseResult<&Template> {
        self.templates
            .get(name)
            .ok_or_else(|| LicenseError::TemplateNotFound {
                name: name.to_string(),
            })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }
}
