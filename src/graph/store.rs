//! In-memory graph storage
//!
//! Backs offline loader runs and tests. Nodes and edges live in arenas
//! indexed by id, with adjacency lists and label/type indices on the side.

use super::edge::Edge;
use super::node::Node;
use super::property::PropertyMap;
use super::types::{EdgeId, EdgeType, Label, NodeId};
use std::collections::{BTreeSet, HashMap};
use thiserror::Error;

/// Errors that can occur during graph operations
#[derive(Error, Debug, PartialEq)]
pub enum GraphError {
    #[error("Node {0} not found")]
    NodeNotFound(NodeId),

    #[error("Edge {0} not found")]
    EdgeNotFound(EdgeId),

    #[error("Invalid edge: source node {0} does not exist")]
    InvalidEdgeSource(NodeId),

    #[error("Invalid edge: target node {0} does not exist")]
    InvalidEdgeTarget(NodeId),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Counts reported after a wipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClearStats {
    pub nodes_deleted: usize,
    pub edges_deleted: usize,
}

/// In-memory graph storage
///
/// - nodes: NodeId -> Node (slot per id, `None` once deleted)
/// - edges: EdgeId -> Edge
/// - outgoing / incoming: adjacency lists per node slot
/// - label_index / edge_type_index: ordered id sets for deterministic scans
#[derive(Debug)]
pub struct GraphStore {
    nodes: Vec<Option<Node>>,
    edges: Vec<Option<Edge>>,
    outgoing: Vec<Vec<EdgeId>>,
    incoming: Vec<Vec<EdgeId>>,
    label_index: HashMap<Label, BTreeSet<NodeId>>,
    edge_type_index: HashMap<EdgeType, BTreeSet<EdgeId>>,
    next_node_id: u64,
    next_edge_id: u64,
}

impl GraphStore {
    /// Create a new empty graph store
    pub fn new() -> Self {
        GraphStore {
            nodes: Vec::with_capacity(1024),
            edges: Vec::with_capacity(4096),
            outgoing: Vec::with_capacity(1024),
            incoming: Vec::with_capacity(1024),
            label_index: HashMap::new(),
            edge_type_index: HashMap::new(),
            next_node_id: 0,
            next_edge_id: 0,
        }
    }

    /// Create an unlabelled node with the given properties
    pub fn create_node(&mut self, properties: PropertyMap) -> NodeId {
        let node_id = NodeId::new(self.next_node_id);
        self.next_node_id += 1;

        let idx = node_id.as_u64() as usize;
        if idx >= self.nodes.len() {
            self.nodes.resize(idx + 1, None);
            self.outgoing.resize(idx + 1, Vec::new());
            self.incoming.resize(idx + 1, Vec::new());
        }
        self.nodes[idx] = Some(Node::new(node_id, properties));
        node_id
    }

    pub fn get_node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.as_u64() as usize).and_then(|slot| slot.as_ref())
    }

    pub fn has_node(&self, id: NodeId) -> bool {
        self.get_node(id).is_some()
    }

    /// Attach a label to an existing node and index it
    pub fn add_label_to_node(&mut self, node_id: NodeId, label: impl Into<Label>) -> GraphResult<()> {
        let label = label.into();
        let node = self
            .nodes
            .get_mut(node_id.as_u64() as usize)
            .and_then(|slot| slot.as_mut())
            .ok_or(GraphError::NodeNotFound(node_id))?;
        node.add_label(label.clone());

        self.label_index.entry(label).or_default().insert(node_id);
        Ok(())
    }

    /// Create a directed edge between two existing nodes
    pub fn create_edge(
        &mut self,
        source: NodeId,
        target: NodeId,
        edge_type: impl Into<EdgeType>,
    ) -> GraphResult<EdgeId> {
        if !self.has_node(source) {
            return Err(GraphError::InvalidEdgeSource(source));
        }
        if !self.has_node(target) {
            return Err(GraphError::InvalidEdgeTarget(target));
        }

        let edge_id = EdgeId::new(self.next_edge_id);
        self.next_edge_id += 1;

        let edge_type = edge_type.into();
        let idx = edge_id.as_u64() as usize;
        if idx >= self.edges.len() {
            self.edges.resize(idx + 1, None);
        }
        self.edges[idx] = Some(Edge::new(edge_id, source, target, edge_type.clone()));

        self.outgoing[source.as_u64() as usize].push(edge_id);
        self.incoming[target.as_u64() as usize].push(edge_id);
        self.edge_type_index.entry(edge_type).or_default().insert(edge_id);

        Ok(edge_id)
    }

    pub fn get_edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.as_u64() as usize).and_then(|slot| slot.as_ref())
    }

    /// Merge properties into an existing edge
    pub fn set_edge_properties(&mut self, edge_id: EdgeId, properties: PropertyMap) -> GraphResult<()> {
        let edge = self
            .edges
            .get_mut(edge_id.as_u64() as usize)
            .and_then(|slot| slot.as_mut())
            .ok_or(GraphError::EdgeNotFound(edge_id))?;
        edge.set_properties(properties);
        Ok(())
    }

    /// Get all outgoing edges from a node, in creation order
    pub fn get_outgoing_edges(&self, node_id: NodeId) -> Vec<&Edge> {
        self.outgoing
            .get(node_id.as_u64() as usize)
            .map(|edge_ids| edge_ids.iter().filter_map(|&id| self.get_edge(id)).collect())
            .unwrap_or_default()
    }

    /// Get all incoming edges to a node, in creation order
    pub fn get_incoming_edges(&self, node_id: NodeId) -> Vec<&Edge> {
        self.incoming
            .get(node_id.as_u64() as usize)
            .map(|edge_ids| edge_ids.iter().filter_map(|&id| self.get_edge(id)).collect())
            .unwrap_or_default()
    }

    /// Get all nodes with a specific label, ordered by id
    pub fn get_nodes_by_label(&self, label: &Label) -> Vec<&Node> {
        self.label_index
            .get(label)
            .map(|ids| ids.iter().filter_map(|&id| self.get_node(id)).collect())
            .unwrap_or_default()
    }

    /// Get all edges of a specific type, ordered by id
    pub fn get_edges_by_type(&self, edge_type: &EdgeType) -> Vec<&Edge> {
        self.edge_type_index
            .get(edge_type)
            .map(|ids| ids.iter().filter_map(|&id| self.get_edge(id)).collect())
            .unwrap_or_default()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.iter().flatten().count()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.iter().flatten().count()
    }

    /// Delete every node together with its relationships.
    ///
    /// Ids keep increasing afterwards, as a server would not hand out a
    /// deleted id to the very next create.
    pub fn clear(&mut self) -> ClearStats {
        let stats = ClearStats {
            nodes_deleted: self.node_count(),
            edges_deleted: self.edge_count(),
        };
        self.nodes.clear();
        self.edges.clear();
        self.outgoing.clear();
        self.incoming.clear();
        self.label_index.clear();
        self.edge_type_index.clear();
        stats
    }
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::new()
    }
}
