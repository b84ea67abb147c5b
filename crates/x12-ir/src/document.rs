//! Document container for the generic parse tree
#![allow(clippy::must_use_candidate)] // Builder/constructor API intentionally omits pervasive #[must_use].

use crate::node::Node;
use serde::{Deserialize, Serialize};

/// A parsed X12 document: the interchange tree plus envelope metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Root node of the document (the interchange)
    pub root: Node,

    /// Envelope-level metadata collected during the parse
    pub metadata: DocumentMetadata,
}

/// Envelope metadata lifted from ISA/GS/ST segments
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Transaction set identifier from ST01 (e.g. "835")
    pub transaction_set: Option<String>,

    /// Implementation version from GS08 (e.g. "005010X221A1")
    pub version: Option<String>,

    /// Functional group identifier code from GS01 (e.g. "HP")
    pub functional_group: Option<String>,

    /// Interchange sender id qualifier and id (ISA05/ISA06)
    pub sender: Option<(String, String)>,

    /// Interchange receiver id qualifier and id (ISA07/ISA08)
    pub receiver: Option<(String, String)>,

    /// Interchange date and time (ISA09/ISA10, raw)
    pub interchange_date: Option<String>,
    pub interchange_time: Option<String>,

    /// Interchange control number (ISA13)
    pub interchange_control: Option<String>,

    /// Functional group control number (GS06)
    pub group_control: Option<String>,

    /// Transaction set control numbers in document order (ST02)
    pub transaction_controls: Vec<String>,
}

impl Document {
    /// Create a new document with the given interchange root
    pub fn new(root: Node) -> Self {
        Self {
            root,
            metadata: DocumentMetadata::default(),
        }
    }

    /// Create a new document with metadata
    pub fn with_metadata(root: Node, metadata: DocumentMetadata) -> Self {
        Self { root, metadata }
    }

    /// Total number of segments in the tree
    pub fn segment_count(&self) -> usize {
        self.root.segment_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{Node, NodeType};

    #[test]
    fn test_document_creation() {
        let root = Node::new("interchange", NodeType::Interchange);
        let doc = Document::new(root);

        assert_eq!(doc.root.name, "interchange");
        assert_eq!(doc.root.node_type, NodeType::Interchange);
        assert!(doc.metadata.transaction_set.is_none());
    }

    #[test]
    fn test_document_with_metadata() {
        let root = Node::new("interchange", NodeType::Interchange);
        let metadata = DocumentMetadata {
            transaction_set: Some("835".to_string()),
            version: Some("005010X221A1".to_string()),
            functional_group: Some("HP".to_string()),
            sender: Some(("ZZ".to_string(), "PAYERID".to_string())),
            receiver: Some(("ZZ".to_string(), "PROVIDERID".to_string())),
            interchange_date: Some("240101".to_string()),
            interchange_time: Some("1230".to_string()),
            interchange_control: Some("000000001".to_string()),
            group_control: Some("1".to_string()),
            transaction_controls: vec!["0001".to_string()],
        };

        let doc = Document::with_metadata(root, metadata);

        assert_eq!(doc.metadata.transaction_set.as_deref(), Some("835"));
        assert_eq!(doc.metadata.functional_group.as_deref(), Some("HP"));
        assert_eq!(
            doc.metadata.sender,
            Some(("ZZ".to_string(), "PAYERID".to_string()))
        );
        assert_eq!(doc.metadata.transaction_controls.len(), 1);
    }

    #[test]
    fn test_document_default_metadata() {
        let doc = Document::new(Node::new("interchange", NodeType::Interchange));

        assert!(doc.metadata.version.is_none());
        assert!(doc.metadata.sender.is_none());
        assert!(doc.metadata.transaction_controls.is_empty());
        assert_eq!(doc.segment_count(), 0);
    }
}
