//! Read-only views handed to segment interpreters.

use x12_ir::{Node, NodeType};

/// A segment leaf viewed through its element positions.
///
/// Element access is 1-based to match implementation-guide numbering
/// (CLP01, CLP02, ...).
#[derive(Debug, Clone, Copy)]
pub struct SegmentView<'a> {
    node: &'a Node,
}

impl<'a> SegmentView<'a> {
    /// Wrap a segment node
    #[must_use]
    pub fn new(node: &'a Node) -> Self {
        debug_assert_eq!(node.node_type, NodeType::Segment);
        Self { node }
    }

    /// The segment id (e.g. "CLP")
    #[must_use]
    pub fn id(&self) -> &str {
        &self.node.name
    }

    /// The underlying node
    #[must_use]
    pub fn node(&self) -> &'a Node {
        self.node
    }

    /// Number of elements in the segment
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.node
            .children
            .iter()
            .filter(|c| c.node_type == NodeType::Element)
            .count()
    }

    /// Scalar value at a 1-based element position. Composites rejoin with
    /// ':'. Empty elements yield `None`.
    #[must_use]
    pub fn element(&self, pos: usize) -> Option<String> {
        let child = self.element_node(pos)?;
        if child.children.is_empty() {
            child.value.as_ref().and_then(x12_ir::Value::as_string)
        } else {
            let joined = child
                .children
                .iter()
                .map(|c| {
                    c.value
                        .as_ref()
                        .and_then(x12_ir::Value::as_string)
                        .unwrap_or_default()
                })
                .collect::<Vec<_>>()
                .join(":");
            (!joined.is_empty()).then_some(joined)
        }
    }

    /// Components of a composite element at a 1-based position.
    ///
    /// Uses tokenizer components when the sub-element separator split the
    /// value; otherwise splits the scalar on ':' by convention, so
    /// positionally composite elements unpack the same way.
    #[must_use]
    pub fn components(&self, pos: usize) -> Vec<String> {
        let Some(child) = self.element_node(pos) else {
            return Vec::new();
        };
        if child.children.is_empty() {
            match child.value.as_ref().and_then(x12_ir::Value::as_string) {
                Some(raw) if !raw.is_empty() => raw.split(':').map(str::to_string).collect(),
                _ => Vec::new(),
            }
        } else {
            child
                .children
                .iter()
                .map(|c| {
                    c.value
                        .as_ref()
                        .and_then(x12_ir::Value::as_string)
                        .unwrap_or_default()
                })
                .collect()
        }
    }

    fn element_node(&self, pos: usize) -> Option<&'a Node> {
        let name = format!("{pos:02}");
        self.node
            .children
            .iter()
            .find(|c| c.node_type == NodeType::Element && c.name == name)
    }
}

/// The enclosing loop an interpreter is running under, plus prior sibling
/// context for segments whose meaning is positional.
#[derive(Debug, Clone, Default)]
pub struct LoopContext {
    /// Implementation-guide loop id (e.g. "2100"); "header" for segments
    /// attached directly to the transaction
    pub loop_id: String,

    /// Stable loop name used in the structured output
    pub loop_name: String,

    /// Segment id of the preceding sibling within the loop, when any
    pub prior_segment_id: Option<String>,
}

impl LoopContext {
    /// Context for transaction-direct segments
    #[must_use]
    pub fn header() -> Self {
        Self {
            loop_id: "header".to_string(),
            loop_name: "header".to_string(),
            prior_segment_id: None,
        }
    }

    /// Context for a named loop
    #[must_use]
    pub fn for_loop(loop_id: impl Into<String>, loop_name: impl Into<String>) -> Self {
        Self {
            loop_id: loop_id.into(),
            loop_name: loop_name.into(),
            prior_segment_id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use x12_ir::Value;

    fn svc_node() -> Node {
        let mut seg = Node::new("SVC", NodeType::Segment);
        let mut composite = Node::new("01", NodeType::Element);
        for (i, part) in ["HC", "99213", "26", "27"].iter().enumerate() {
            composite.add_child(Node::with_value(
                (i + 1).to_string(),
                NodeType::Component,
                Value::String((*part).to_string()),
            ));
        }
        seg.add_child(composite);
        seg.add_child(Node::with_value(
            "02",
            NodeType::Element,
            Value::String("100".into()),
        ));
        seg.add_child(Node::with_value("03", NodeType::Element, Value::Null));
        seg
    }

    #[test]
    fn test_element_access() {
        let node = svc_node();
        let view = SegmentView::new(&node);

        assert_eq!(view.id(), "SVC");
        assert_eq!(view.element(2).as_deref(), Some("100"));
        assert_eq!(view.element(3), None);
        assert_eq!(view.element(9), None);
        assert_eq!(view.element(1).as_deref(), Some("HC:99213:26:27"));
    }

    #[test]
    fn test_components_from_tokenized_composite() {
        let node = svc_node();
        let view = SegmentView::new(&node);
        assert_eq!(view.components(1), vec!["HC", "99213", "26", "27"]);
    }

    #[test]
    fn test_components_split_scalar_by_convention() {
        let mut seg = Node::new("CLM", NodeType::Segment);
        seg.add_child(Node::with_value(
            "01",
            NodeType::Element,
            Value::String("11:B:1".into()),
        ));
        let view = SegmentView::new(&seg);
        assert_eq!(view.components(1), vec!["11", "B", "1"]);
    }

    #[test]
    fn test_components_of_empty_element() {
        let node = svc_node();
        let view = SegmentView::new(&node);
        assert!(view.components(3).is_empty());
        assert!(view.components(9).is_empty());
    }
}
