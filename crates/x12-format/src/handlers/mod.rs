//! Specialized segment interpreters, grouped by business area.

mod claim;
mod envelope;
mod names;
mod reference;
mod remittance;

use crate::registry::{HandlerOutput, HandlerRegistry};
use serde_json::Value as Json;
use x12_codes::CodeSet;

/// Load every standard interpreter into the registry.
pub(crate) fn register_all(registry: &mut HandlerRegistry) {
    envelope::register(registry);
    names::register(registry);
    reference::register(registry);
    remittance::register(registry);
    claim::register(registry);
}

/// Insert `<base>_code` with the raw code and, when the code is known, a
/// parallel `<base>` field with the looked-up description. The raw code is
/// always retained; unknown codes get no synthesized description.
pub(crate) fn insert_coded(out: &mut HandlerOutput, base: &str, set: CodeSet, code: &str) {
    out.insert(format!("{base}_code"), Json::String(code.to_string()));
    if let Some(description) = x12_codes::lookup(set, code) {
        out.insert(base, Json::String(description.to_string()));
    }
}

#[cfg(test)]
pub(crate) mod testutil {
    use x12_ir::{Node, NodeType, Value};

    /// Build a segment node from raw element strings; values containing ':'
    /// become tokenizer-style composites.
    pub(crate) fn segment(id: &str, elements: &[&str]) -> Node {
        let mut node = Node::new(id, NodeType::Segment);
        for (i, raw) in elements.iter().enumerate() {
            let name = format!("{:02}", i + 1);
            let child = if raw.contains(':') {
                let mut composite = Node::new(name, NodeType::Element);
                for (j, part) in raw.split(':').enumerate() {
                    let value = if part.is_empty() {
                        Value::Null
                    } else {
                        Value::String(part.to_string())
                    };
                    composite.add_child(Node::with_value(
                        (j + 1).to_string(),
                        NodeType::Component,
                        value,
                    ));
                }
                composite
            } else if raw.is_empty() {
                Node::with_value(name, NodeType::Element, Value::Null)
            } else {
                Node::with_value(name, NodeType::Element, Value::String((*raw).to_string()))
            };
            node.add_child(child);
        }
        node
    }
}
