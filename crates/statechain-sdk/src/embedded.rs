//! EmbeddedClient — in-process graph store client
//!
//! Writes go straight into a `GraphStore`, no network needed.

use async_trait::async_trait;
use statechain::graph::{EdgeId, EdgeType, GraphError, GraphStore, Label, NodeId, PropertyMap};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::client::{GraphClient, COUNT_NODES, DELETE_ALL};
use crate::error::{SdkError, SdkResult};
use crate::models::QueryResult;

/// In-process client that wraps a GraphStore directly.
///
/// There is no Cypher engine behind it: `execute_query` understands the
/// node count and the full wipe, which is all the loader issues.
pub struct EmbeddedClient {
    store: Arc<RwLock<GraphStore>>,
}

impl EmbeddedClient {
    /// Create a new EmbeddedClient with a fresh empty graph store
    pub fn new() -> Self {
        Self::with_store(Arc::new(RwLock::new(GraphStore::new())))
    }

    /// Create an EmbeddedClient wrapping an existing store
    pub fn with_store(store: Arc<RwLock<GraphStore>>) -> Self {
        Self { store }
    }

    /// Get a reference to the underlying store
    pub fn store(&self) -> &Arc<RwLock<GraphStore>> {
        &self.store
    }

    /// Acquire a read lock on the store for direct inspection
    pub async fn store_read(&self) -> tokio::sync::RwLockReadGuard<'_, GraphStore> {
        self.store.read().await
    }
}

impl Default for EmbeddedClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Collapse whitespace and case so statements compare by content
fn normalize(cypher: &str) -> String {
    cypher
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_ascii_uppercase()
}

fn graph_error(e: GraphError) -> SdkError {
    SdkError::QueryError(e.to_string())
}

#[async_trait]
impl GraphClient for EmbeddedClient {
    async fn execute_query(&self, cypher: &str) -> SdkResult<QueryResult> {
        let statement = normalize(cypher);

        if statement == normalize(COUNT_NODES) {
            let count = self.store.read().await.node_count();
            return Ok(QueryResult {
                columns: vec!["COUNT(n)".to_string()],
                records: vec![vec![serde_json::Value::from(count as u64)]],
            });
        }

        if statement == normalize(DELETE_ALL) {
            let stats = self.store.write().await.clear();
            debug!(
                nodes = stats.nodes_deleted,
                edges = stats.edges_deleted,
                "cleared embedded store"
            );
            return Ok(QueryResult::default());
        }

        Err(SdkError::QueryError(format!(
            "statement not supported by the embedded store: {}",
            cypher.trim()
        )))
    }

    async fn create_node(&self, properties: &PropertyMap) -> SdkResult<NodeId> {
        Ok(self.store.write().await.create_node(properties.clone()))
    }

    async fn add_label(&self, node: NodeId, label: &Label) -> SdkResult<()> {
        self.store
            .write()
            .await
            .add_label_to_node(node, label.clone())
            .map_err(graph_error)
    }

    async fn create_relationship(
        &self,
        rel_type: &EdgeType,
        from: NodeId,
        to: NodeId,
    ) -> SdkResult<EdgeId> {
        self.store
            .write()
            .await
            .create_edge(from, to, rel_type.clone())
            .map_err(graph_error)
    }

    async fn set_relationship_properties(
        &self,
        rel: EdgeId,
        properties: &PropertyMap,
    ) -> SdkResult<()> {
        self.store
            .write()
            .await
            .set_edge_properties(rel, properties.clone())
            .map_err(graph_error)
    }
}
