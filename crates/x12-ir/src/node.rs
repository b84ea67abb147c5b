//! Node types for the generic X12 parse tree

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A node in the parse tree
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Node name (segment id for segments, stable loop name for loops)
    pub name: String,

    /// Node type
    pub node_type: NodeType,

    /// Node value (elements and components only)
    pub value: Option<Value>,

    /// Child nodes
    pub children: Vec<Node>,

    /// Node attributes (loop id, occurrence index, unmapped flag, ...)
    pub attributes: HashMap<String, String>,
}

/// Types of nodes in the parse tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeType {
    /// Interchange envelope (ISA/IEA), the tree root
    Interchange,

    /// Functional group envelope (GS/GE)
    FunctionalGroup,

    /// Transaction set envelope (ST/SE)
    Transaction,

    /// Business loop instance (grammar-defined grouping)
    Loop,

    /// Individual segment
    Segment,

    /// Data element (scalar or composite)
    Element,

    /// Component within a composite element
    Component,
}

/// Values that can be stored in element and component nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// String value
    String(String),

    /// Integer value
    Integer(i64),

    /// Decimal value
    Decimal(f64),

    /// Date value (ISO 8601)
    Date(String),

    /// Time value (ISO 8601)
    Time(String),

    /// DateTime value (ISO 8601)
    DateTime(String),

    /// Null/empty value
    Null,
}

impl Node {
    /// Create a new node
    pub fn new(name: impl Into<String>, node_type: NodeType) -> Self {
        Self {
            name: name.into(),
            node_type,
            value: None,
            children: Vec::new(),
            attributes: HashMap::new(),
        }
    }

    /// Create a node with a value
    pub fn with_value(name: impl Into<String>, node_type: NodeType, value: Value) -> Self {
        Self {
            name: name.into(),
            node_type,
            value: Some(value),
            children: Vec::new(),
            attributes: HashMap::new(),
        }
    }

    /// Add a child node
    pub fn add_child(&mut self, child: Node) -> &mut Self {
        self.children.push(child);
        self
    }

    /// Set an attribute
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Get an attribute value
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Find the first child by name
    #[must_use]
    pub fn find_child(&self, name: &str) -> Option<&Node> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Find all children by name
    #[must_use]
    pub fn find_children(&self, name: &str) -> Vec<&Node> {
        self.children.iter().filter(|c| c.name == name).collect()
    }

    /// Whether the builder attached this node outside the active grammar
    #[must_use]
    pub fn is_unmapped(&self) -> bool {
        self.attribute("unmapped") == Some("true")
    }

    /// Iterate segment leaves that are direct children of this node
    pub fn segments(&self) -> impl Iterator<Item = &Node> {
        self.children
            .iter()
            .filter(|c| c.node_type == NodeType::Segment)
    }

    /// Iterate loop instances that are direct children of this node
    pub fn loops(&self) -> impl Iterator<Item = &Node> {
        self.children
            .iter()
            .filter(|c| c.node_type == NodeType::Loop)
    }

    /// Count every segment leaf in this subtree
    #[must_use]
    pub fn segment_count(&self) -> usize {
        let own = usize::from(self.node_type == NodeType::Segment);
        own + self
            .children
            .iter()
            .filter(|c| c.node_type != NodeType::Element)
            .map(Node::segment_count)
            .sum::<usize>()
    }
}

impl Value {
    /// Convert value to string
    #[must_use]
    pub fn as_string(&self) -> Option<String> {
        match self {
            Value::String(s) => Some(s.clone()),
            Value::Integer(i) => Some(i.to_string()),
            Value::Decimal(d) => Some(d.to_string()),
            Value::Date(d) => Some(d.clone()),
            Value::Time(t) => Some(t.clone()),
            Value::DateTime(dt) => Some(dt.clone()),
            Value::Null => None,
        }
    }

    /// Check if value is null
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_creation() {
        let node = Node::new("claim_payment", NodeType::Loop);
        assert_eq!(node.name, "claim_payment");
        assert_eq!(node.node_type, NodeType::Loop);
        assert!(node.value.is_none());
        assert!(node.children.is_empty());
    }

    #[test]
    fn test_find_children() {
        let mut seg = Node::new("CLP", NodeType::Segment);
        seg.add_child(Node::with_value(
            "01",
            NodeType::Element,
            Value::String("PATIENT1".into()),
        ));
        seg.add_child(Node::with_value(
            "02",
            NodeType::Element,
            Value::String("1".into()),
        ));

        assert!(seg.find_child("01").is_some());
        assert!(seg.find_child("09").is_none());
        assert_eq!(seg.find_children("01").len(), 1);
    }

    #[test]
    fn test_unmapped_attribute() {
        let mut seg = Node::new("ZZZ", NodeType::Segment);
        assert!(!seg.is_unmapped());
        seg.set_attribute("unmapped", "true");
        assert!(seg.is_unmapped());
    }

    #[test]
    fn test_segment_count_recurses_through_loops() {
        let mut root = Node::new("interchange", NodeType::Interchange);
        let mut lp = Node::new("payer_identification", NodeType::Loop);
        lp.add_child(Node::new("N1", NodeType::Segment));
        lp.add_child(Node::new("N3", NodeType::Segment));
        root.add_child(lp);
        root.add_child(Node::new("ISA", NodeType::Segment));

        assert_eq!(root.segment_count(), 3);
    }

    #[test]
    fn test_value_as_string() {
        assert_eq!(Value::Decimal(2000.0).as_string(), Some("2000".to_string()));
        assert_eq!(Value::Integer(5).as_string(), Some("5".to_string()));
        assert_eq!(Value::Null.as_string(), None);
        assert!(Value::Null.is_null());
    }
}
