//! Recognize well-known open-source licenses from declared license names
//! and from the contents of LICENSE documents.
//!
//! # Flow
//! 1. Build a [`Catalog`] once ([`Catalog::standard`], or
//!    [`config::Config::build_catalog`] to honor a template directory).
//! 2. Wrap it in a [`Recognizer`] and share it freely; lookups take `&self`.
//! 3. [`Recognizer::by_name`] resolves a manifest's declared string,
//!    [`Recognizer::by_text`] classifies a document.
//! 4. Either way the result derefs to a single [`License`]; an input nothing
//!    matches comes back as an unrecognized license with no URL.
//!
//! ```
//! use license_recognizer::{Catalog, Recognizer};
//!
//! let catalog = Catalog::standard()?;
//! let recognizer = Recognizer::new(&catalog);
//!
//! assert_eq!(recognizer.by_name("Apache-2.0").short_name(), "Apache2");
//! assert_eq!(
//!     recognizer.by_text("This library is released under the MIT license.").short_name(),
//!     "MIT"
//! );
//! assert!(!recognizer.by_name("GPL-9000").is_recognized());
//! # Ok::<(), license_recognizer::LicenseError>(())
//! ```

pub mod config;
pub mod error;
pub mod license;
pub mod models;
pub mod report;

pub use error::{LicenseError, LicenseResult};
pub use license::definitions::Catalog;
pub use license::matcher::Matcher;
pub use license::recognizer::{Recognizer, Verdict};
pub use license::template::{Template, TemplateStore};
pub use license::License;
