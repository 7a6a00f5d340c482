//! Property graph model
//!
//! - Nodes carry a label set and properties
//! - Directed, typed edges carry properties
//! - `GraphStore` keeps everything in memory with label and type indices

pub mod edge;
pub mod node;
pub mod property;
pub mod store;
pub mod types;

pub use edge::Edge;
pub use node::Node;
pub use property::{PropertyMap, PropertyValue};
pub use store::{ClearStats, GraphError, GraphResult, GraphStore};
pub use types::{EdgeId, EdgeType, Label, NodeId};
