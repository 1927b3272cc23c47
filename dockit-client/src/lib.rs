//! # dockit-client
//!
//! Client for committing JSON documents to a docs store.
//!
//! ## Example
//!
//! ```no_run
//! use dockit_client::{DocsApiClient, DocsCommitter};
//! use serde_json::json;
//!
//! let api = DocsApiClient::new("https://items.example.com/items");
//! let committer = DocsCommitter::new(api);
//!
//! committer
//!     .commit("report.json", &json!({"x": 1}), "add report")
//!     .unwrap();
//! ```

use dockit_core::{BulkCommitRequest, CommitFile, CommitOutcome, Error, Result};
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

/// The store's bulk-commit capability.
///
/// Implementations submit a prepared request and hand back the store's
/// response as-is. Tests substitute an in-process implementation.
pub trait BulkCommit {
    fn commit_bulk(&self, request: &BulkCommitRequest) -> Result<CommitOutcome>;
}

/// Commits single JSON documents through an injected [`BulkCommit`]
/// capability, rooting every path under `docs/`.
pub struct DocsCommitter<B> {
    backend: B,
}

impl<B: BulkCommit> DocsCommitter<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Commit one document.
    ///
    /// The path is normalized under `docs/`, the content serialized
    /// canonically and base64-encoded, and the resulting single-file
    /// overwriting request submitted in one call. A response without
    /// `ok == true` fails with [`Error::CommitRejected`]; errors raised
    /// by the capability itself pass through untouched.
    pub fn commit<T>(&self, path: &str, content: &T, message: &str) -> Result<CommitOutcome>
    where
        T: Serialize + ?Sized,
    {
        let file = CommitFile::json(path, content)?;
        debug!(path = %file.path, "committing document");

        let request = BulkCommitRequest::single(message, file);
        let outcome = self.backend.commit_bulk(&request)?;

        if !outcome.ok {
            return Err(Error::CommitRejected { outcome });
        }
        Ok(outcome)
    }
}

/// HTTP implementation of [`BulkCommit`] against the store's
/// `commit-bulk` endpoint.
#[derive(Clone)]
pub struct DocsApiClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl DocsApiClient {
    /// Create a client for a store.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the store's write surface
    ///   (e.g., "https://items.example.com/items")
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Same as [`DocsApiClient::new`], with a per-request timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;

        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }
}

impl BulkCommit for DocsApiClient {
    fn commit_bulk(&self, request: &BulkCommitRequest) -> Result<CommitOutcome> {
        let url = format!("{}/commit-bulk", self.base_url);
        debug!(url = %url, files = request.files.len(), "posting bulk commit");

        let response = self
            .client
            .post(url)
            .json(request)
            .send()?
            .error_for_status()?;

        Ok(response.json()?)
    }
}
