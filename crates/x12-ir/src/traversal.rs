//! Traversal and cursor APIs for navigating the parse tree

use crate::Error;
use crate::Result;
use crate::node::{Node, NodeType};

/// A cursor for navigating the parse tree
#[derive(Debug)]
pub struct Cursor<'a> {
    /// Current node
    node: &'a Node,

    /// Path to current node (for error reporting)
    path: Vec<String>,
}

/// Trait for visitors walking the parse tree depth-first
pub trait Traversal {
    /// Visit a node
    fn visit(&mut self, node: &Node, path: &[String]);

    /// Called when entering a node with children
    fn enter(&mut self, _node: &Node, _path: &[String]) {}

    /// Called when leaving a node with children
    fn leave(&mut self, _node: &Node, _path: &[String]) {}
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the given node
    pub fn new(node: &'a Node) -> Self {
        Self {
            node,
            path: vec![node.name.clone()],
        }
    }

    /// Get the current node
    #[must_use]
    pub fn node(&self) -> &Node {
        self.node
    }

    /// Get the current path
    #[must_use]
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// Navigate to the first child node with the given name
    pub fn child(&self, name: &str) -> Result<Cursor<'a>> {
        match self.node.find_child(name) {
            Some(child) => {
                let mut new_path = self.path.clone();
                new_path.push(name.to_string());
                Ok(Cursor {
                    node: child,
                    path: new_path,
                })
            }
            None => Err(Error::node_not_found(format!(
                "{}/{}",
                self.path.join("/"),
                name
            ))),
        }
    }

    /// Navigate to a child by index
    pub fn child_at(&self, index: usize) -> Result<Cursor<'a>> {
        match self.node.children.get(index) {
            Some(child) => {
                let mut new_path = self.path.clone();
                new_path.push(format!("[{index}]"));
                Ok(Cursor {
                    node: child,
                    path: new_path,
                })
            }
            None => Err(Error::node_not_found(format!(
                "{}[{index}]",
                self.path.join("/")
            ))),
        }
    }

    /// Get cursors for all children matching a name
    #[must_use]
    pub fn children(&self, name: &str) -> Vec<Cursor<'a>> {
        self.node
            .find_children(name)
            .into_iter()
            .enumerate()
            .map(|(idx, child)| {
                let mut new_path = self.path.clone();
                new_path.push(format!("{name}[{idx}]"));
                Cursor {
                    node: child,
                    path: new_path,
                }
            })
            .collect()
    }

    /// Iterate every loop instance in this subtree, depth-first
    #[must_use]
    pub fn descendant_loops(&self) -> Vec<&'a Node> {
        let mut out = Vec::new();
        collect_loops(self.node, &mut out);
        out
    }
}

fn collect_loops<'a>(node: &'a Node, out: &mut Vec<&'a Node>) {
    for child in &node.children {
        if child.node_type == NodeType::Loop {
            out.push(child);
        }
        collect_loops(child, out);
    }
}

/// Walk the tree depth-first with the given visitor
pub fn walk(node: &Node, visitor: &mut dyn Traversal) {
    let mut path = Vec::new();
    walk_inner(node, visitor, &mut path);
}

fn walk_inner(node: &Node, visitor: &mut dyn Traversal, path: &mut Vec<String>) {
    path.push(node.name.clone());
    visitor.visit(node, path);

    if !node.children.is_empty() {
        visitor.enter(node, path);
        for child in &node.children {
            walk_inner(child, visitor, path);
        }
        visitor.leave(node, path);
    }

    path.pop();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Value;

    fn sample_tree() -> Node {
        let mut root = Node::new("interchange", NodeType::Interchange);
        let mut lp = Node::new("payer_identification", NodeType::Loop);
        let mut seg = Node::new("N1", NodeType::Segment);
        seg.add_child(Node::with_value(
            "01",
            NodeType::Element,
            Value::String("PR".into()),
        ));
        lp.add_child(seg);
        root.add_child(lp);
        root
    }

    #[test]
    fn test_cursor_child_navigation() {
        let tree = sample_tree();
        let cursor = Cursor::new(&tree);

        let lp = cursor.child("payer_identification").unwrap();
        assert_eq!(lp.node().node_type, NodeType::Loop);

        let seg = lp.child("N1").unwrap();
        assert_eq!(seg.path().join("/"), "interchange/payer_identification/N1");
    }

    #[test]
    fn test_cursor_missing_child() {
        let tree = sample_tree();
        let cursor = Cursor::new(&tree);

        let err = cursor.child("payee_identification").unwrap_err();
        assert!(matches!(err, Error::NodeNotFound { .. }));
    }

    #[test]
    fn test_descendant_loops() {
        let tree = sample_tree();
        let cursor = Cursor::new(&tree);
        let loops = cursor.descendant_loops();

        assert_eq!(loops.len(), 1);
        assert_eq!(loops[0].name, "payer_identification");
    }

    #[test]
    fn test_walk_visits_every_node() {
        struct Counter(usize);
        impl Traversal for Counter {
            fn visit(&mut self, _node: &Node, _path: &[String]) {
                self.0 += 1;
            }
        }

        let tree = sample_tree();
        let mut counter = Counter(0);
        walk(&tree, &mut counter);

        // interchange + loop + segment + element
        assert_eq!(counter.0, 4);
    }
}
