//! statechain
//!
//! Property-graph model and in-memory store underneath the statechain
//! fixture loader. The loader itself talks to a graph store through
//! `statechain-sdk`; this crate holds the types both sides share and the
//! store that backs offline runs.
//!
//! ## Example Usage
//!
//! ```rust
//! use statechain::graph::{GraphStore, Label, PropertyMap, PropertyValue};
//!
//! let mut store = GraphStore::new();
//!
//! let mut props = PropertyMap::new();
//! props.insert("name".to_string(), PropertyValue::from("abcdefghij"));
//! let entity = store.create_node(props);
//! store.add_label_to_node(entity, "Entity").unwrap();
//!
//! let state = store.create_node(PropertyMap::new());
//! store.add_label_to_node(state, "State").unwrap();
//! store.create_edge(entity, state, "HAS_STATE").unwrap();
//!
//! assert_eq!(store.get_nodes_by_label(&Label::new("State")).len(), 1);
//! ```

#![warn(clippy::all)]

pub mod graph;

pub use graph::{
    ClearStats, Edge, EdgeId, EdgeType, GraphError, GraphResult, GraphStore, Label, Node, NodeId,
    PropertyMap, PropertyValue,
};
