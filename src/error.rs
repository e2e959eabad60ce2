//! Error types for catalog construction.
//!
//! Every variant describes a build-time defect: a template that is not
//! registered, a pattern the regex engine rejects, or a catalog that
//! declares the same short name twice. Recognition itself never fails;
//! an input that matches nothing yields an unrecognized [`License`](crate::License).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for catalog and template operations.
pub type LicenseResult<T> = Result<T, LicenseError>;

#[derive(Debug, Error)]
pub enum LicenseError {
    /// No template is registered under the requested name.
    #[error("template '{name}' not found")]
    TemplateNotFound { name: String },

    /// A regex (or a reference text compiled to one) failed to compile.
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Two catalog entries share a short name.
    #[error("duplicate license short name '{short_name}'")]
    DuplicateLicense { short_name: String },

    /// Reading a template resource from disk failed.
    #[error("failed to read template '{}': {source}", .path.display())]
    TemplateIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LicenseError {
    pub(crate) fn invalid_pattern(pattern: &str, source: regex::Error) -> Self {
        Self::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;

    #[test]
    fn test_template_not_found_display() {
        let err = LicenseError::TemplateNotFound {
            name: "GPLv2".to_string(),
        };
        assert_eq!(err.to_string(), "template 'GPLv2' not found");
    }

    #[test]
    fn test_invalid_pattern_keeps_source() {
        let source = regex::Regex::new("(unclosed").unwrap_err();
        let err = LicenseError::invalid_pattern("(unclosed", source);

        assert!(err.to_string().contains("(unclosed"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_template_io_display() {
        let err = LicenseError::TemplateIo {
            path: PathBuf::from("/tmp/templates/MIT.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let display = err.to_string();
        assert!(display.contains("/tmp/templates/MIT.txt"));
        assert!(display.contains("denied"));
    }
}
