//! Node implementation for the property graph

use super::property::{PropertyMap, PropertyValue};
use super::types::{Label, NodeId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A node in the property graph
///
/// Nodes are created unlabelled with an initial property map, matching the
/// REST API where labels are attached by a separate call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier for this node
    pub id: NodeId,

    /// Set of labels for this node
    pub labels: HashSet<Label>,

    /// Properties associated with this node
    pub properties: PropertyMap,
}

impl Node {
    /// Create a new node without labels
    pub fn new(id: NodeId, properties: PropertyMap) -> Self {
        Node {
            id,
            labels: HashSet::new(),
            properties,
        }
    }

    /// Add a label; returns false if it was already present
    pub fn add_label(&mut self, label: impl Into<Label>) -> bool {
        self.labels.insert(label.into())
    }

    pub fn has_label(&self, label: &Label) -> bool {
        self.labels.contains(label)
    }

    pub fn get_property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Node {}

impl std::hash::Hash for Node {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_is_unlabelled() {
        let mut props = PropertyMap::new();
        props.insert("name".to_string(), "abcde".into());
        let node = Node::new(NodeId::new(1), props);

        assert!(node.labels.is_empty());
        assert_eq!(node.get_property("name").and_then(|v| v.as_string()), Some("abcde"));
    }

    #[test]
    fn test_add_label_is_idempotent() {
        let mut node = Node::new(NodeId::new(2), PropertyMap::new());
        assert!(node.add_label("State"));
        assert!(!node.add_label("State"));
        assert!(node.has_label(&Label::new("State")));
        assert_eq!(node.labels.len(), 1);
    }

    #[test]
    fn test_node_equality_by_id() {
        let a = Node::new(NodeId::new(5), PropertyMap::new());
        let mut b = Node::new(NodeId::new(5), PropertyMap::new());
        b.add_label("Entity");
        assert_eq!(a, b);
    }
}
