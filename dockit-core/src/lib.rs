//! # dockit-core
//!
//! Core library for dockit - building and encoding bulk-commit requests
//! for a documentation store.
//!
//! This crate provides the wire-format value types, the error taxonomy,
//! docs-path normalization, and the canonical JSON + base64 encoding used
//! for committed documents.

pub mod encode;
pub mod error;
pub mod models;
pub mod path;

pub use encode::{canonical_json, encode_content};
pub use error::{Error, Result};
pub use models::{BulkCommitRequest, CommitFile, CommitOutcome};
pub use path::{normalize_docs_path, DOCS_PREFIX};
