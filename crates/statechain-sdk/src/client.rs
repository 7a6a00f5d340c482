//! GraphClient trait — the store protocol the loader writes through

use async_trait::async_trait;
use statechain::graph::{EdgeId, EdgeType, Label, NodeId, PropertyMap};

use crate::error::SdkResult;
use crate::models::QueryResult;

/// Statement counting every node in the store
pub const COUNT_NODES: &str = "MATCH (n) RETURN COUNT(n)";

/// Statement removing every node and its relationships
pub const DELETE_ALL: &str = "MATCH (n) DETACH DELETE n";

/// Node and relationship CRUD against a graph store.
///
/// Implemented by:
/// - `RemoteClient` — a Neo4j server over its REST API
/// - `EmbeddedClient` — an in-process `GraphStore`
#[async_trait]
pub trait GraphClient: Send + Sync {
    /// Execute a Cypher statement and return its rows
    async fn execute_query(&self, cypher: &str) -> SdkResult<QueryResult>;

    /// Create an unlabelled node carrying `properties`
    async fn create_node(&self, properties: &PropertyMap) -> SdkResult<NodeId>;

    /// Attach `label` to an existing node
    async fn add_label(&self, node: NodeId, label: &Label) -> SdkResult<()>;

    /// Create a directed relationship `from -[rel_type]-> to`
    async fn create_relationship(
        &self,
        rel_type: &EdgeType,
        from: NodeId,
        to: NodeId,
    ) -> SdkResult<EdgeId>;

    /// Merge `properties` into an existing relationship
    async fn set_relationship_properties(
        &self,
        rel: EdgeId,
        properties: &PropertyMap,
    ) -> SdkResult<()>;

    /// Number of nodes currently in the store
    async fn count_nodes(&self) -> SdkResult<u64> {
        self.execute_query(COUNT_NODES).await?.single_u64()
    }

    /// Delete every node and relationship in the store
    async fn delete_all(&self) -> SdkResult<()> {
        self.execute_query(DELETE_ALL).await?;
        Ok(())
    }
}
