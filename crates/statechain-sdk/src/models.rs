//! Wire models for the graph store REST API
//!
//! `QueryResult` is shared by both clients; the remaining types only
//! describe what the remote server sends back.

use serde::{Deserialize, Serialize};

use crate::error::{SdkError, SdkResult};

/// Result of executing a Cypher statement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    /// Column names
    #[serde(default)]
    pub columns: Vec<String>,
    /// Tabular result rows
    #[serde(default, rename = "data")]
    pub records: Vec<Vec<serde_json::Value>>,
}

impl QueryResult {
    /// Number of result records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the result is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First column of the first row, read as an unsigned count
    pub fn single_u64(&self) -> SdkResult<u64> {
        self.records
            .first()
            .and_then(|row| row.first())
            .and_then(|v| v.as_u64())
            .ok_or_else(|| {
                SdkError::UnexpectedResponse(format!(
                    "expected a single count, got {:?}",
                    self.records
                ))
            })
    }
}

/// Metadata block the server attaches to created nodes and relationships
#[derive(Debug, Clone, Deserialize)]
pub struct EntityMetadata {
    pub id: u64,
}

/// Representation returned by node and relationship creation
#[derive(Debug, Clone, Deserialize)]
pub struct EntityRepresentation {
    /// Canonical URL, e.g. `http://host:7474/db/data/node/17`
    #[serde(rename = "self")]
    pub self_url: String,
    #[serde(default)]
    pub metadata: Option<EntityMetadata>,
}

impl EntityRepresentation {
    /// Numeric id, from `metadata` when present, otherwise the tail of `self`
    pub fn id(&self) -> SdkResult<u64> {
        if let Some(meta) = &self.metadata {
            return Ok(meta.id);
        }
        self.self_url
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .and_then(|tail| tail.parse().ok())
            .ok_or_else(|| SdkError::UnexpectedResponse(format!("no id in {}", self.self_url)))
    }
}

/// One entry of the server's `errors` array
#[derive(Debug, Clone, Deserialize)]
pub struct ServerError {
    #[serde(default)]
    pub code: Option<String>,
    pub message: String,
}

/// Error body the server sends with non-success statuses
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Vec<ServerError>,
}

impl ErrorBody {
    pub fn describe(&self) -> Option<String> {
        self.message
            .clone()
            .or_else(|| self.errors.first().map(|e| e.message.clone()))
    }
}
