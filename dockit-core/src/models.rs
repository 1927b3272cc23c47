use crate::encode::encode_content;
use crate::error::Result;
use crate::path::normalize_docs_path;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Content type attached to every JSON document commit.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// One encoded file inside a bulk-commit request.
///
/// Invariant: a `CommitFile` built through [`CommitFile::json`] always has
/// a path rooted under `docs/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitFile {
    pub path: String,
    pub content_type: String,
    pub content_base64: String,
}

impl CommitFile {
    /// Build a JSON file entry: normalize the path, serialize the content
    /// canonically, and base64-encode it.
    pub fn json<T>(path: &str, content: &T) -> Result<Self>
    where
        T: Serialize + ?Sized,
    {
        Ok(Self {
            path: normalize_docs_path(path),
            content_type: JSON_CONTENT_TYPE.to_string(),
            content_base64: encode_content(content)?,
        })
    }
}

/// Wire request consumed by the store's bulk-commit endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkCommitRequest {
    pub message: String,
    pub overwrite: bool,
    pub files: Vec<CommitFile>,
}

impl BulkCommitRequest {
    /// Single-file request. Commits are always overwriting.
    pub fn single(message: impl Into<String>, file: CommitFile) -> Self {
        Self {
            message: message.into(),
            overwrite: true,
            files: vec![file],
        }
    }
}

/// Response reported by the store.
///
/// Only `ok` is interpreted; a missing `ok` field counts as failure.
/// Everything else the store sends is carried through verbatim in
/// `details`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitOutcome {
    #[serde(default)]
    pub ok: bool,
    #[serde(flatten)]
    pub details: serde_json::Map<String, serde_json::Value>,
}

impl fmt::Display for CommitOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = serde_json::to_string(self)
            .unwrap_or_else(|_| "<unrenderable outcome>".to_string());
        write!(f, "{}", rendered)
    }
}
