//! Report renderers for lookup results.
//!
//! - [`terminal`] — colored table with a summary line; respects `--quiet`.
//! - JSON output is plain `serde_json` over [`Recognition`](crate::models::Recognition)
//!   and lives in the binary.

pub mod terminal;
