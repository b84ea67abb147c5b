//! Generic tree builder.
//!
//! Consumes the flat segment sequence and the loop grammar selected by the
//! document's own ST01/GS08, producing the hierarchical parse tree. The
//! builder keeps a stack of open loop instances and resolves each segment's
//! attachment point innermost-outward: does it open a child loop, re-trigger
//! an open loop (sibling instance), or belong to an open loop's members?
//! Hierarchical-level segments resolve by their explicit HL03 code first,
//! then by the grammar's declared priority order.
//!
//! Totality invariant: every tokenized segment appears exactly once in the
//! tree. Grammar-absent segments attach to the nearest open loop flagged
//! `unmapped`; nothing is dropped.

use crate::tokenizer::{RawElement, RawSegment};
use crate::{Error, Result};
use tracing::{debug, trace};
use x12_grammar::{LoopDef, Repeat, TransactionGrammar, Usage, grammar_for};
use x12_ir::{Document, DocumentMetadata, Node, NodeType, Severity, Value, Warning};

/// Result of a successful parse: the tree plus accumulated non-fatal
/// anomalies
#[derive(Debug)]
pub struct ParseOutcome {
    /// The generic tree
    pub document: Document,
    /// Itemized list of what could not be fully interpreted
    pub warnings: Vec<Warning>,
}

/// Builds the generic tree from a tokenized segment sequence
#[derive(Debug, Default)]
pub struct TreeBuilder {
    warnings: Vec<Warning>,
}

struct OpenLoop {
    def: &'static LoopDef,
    node: Node,
}

struct OpenTransaction {
    node: Node,
    grammar: &'static TransactionGrammar,
    stack: Vec<OpenLoop>,
}

impl TreeBuilder {
    /// Create a new builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the tree. Fatal only for an unregistered transaction set;
    /// structural anomalies become warnings.
    pub fn build(mut self, segments: &[RawSegment]) -> Result<ParseOutcome> {
        let mut metadata = DocumentMetadata::default();
        let mut interchange = Node::new("interchange", NodeType::Interchange);
        let mut group: Option<Node> = None;
        let mut transaction: Option<OpenTransaction> = None;

        for seg in segments {
            match seg.id.as_str() {
                "ISA" => {
                    note_interchange(&mut metadata, seg);
                    interchange.add_child(segment_node(seg));
                }
                "GS" => {
                    self.close_transaction(&mut transaction, &mut group, &mut interchange, true);
                    if let Some(open) = group.take() {
                        self.warn_structural("unterminated-group", seg, "GS before GE");
                        interchange.add_child(open);
                    }
                    note_group(&mut metadata, seg);
                    let mut node = Node::new("functional_group", NodeType::FunctionalGroup);
                    if let Some(code) = seg.value_at(1) {
                        node.set_attribute("code", code);
                    }
                    if let Some(control) = seg.value_at(6) {
                        node.set_attribute("control_number", control);
                    }
                    node.add_child(segment_node(seg));
                    group = Some(node);
                }
                "ST" => {
                    if transaction.is_some() {
                        self.warn_structural("unterminated-transaction", seg, "ST before SE");
                        self.close_transaction(
                            &mut transaction,
                            &mut group,
                            &mut interchange,
                            false,
                        );
                    }
                    transaction = Some(self.open_transaction(seg, &mut metadata)?);
                }
                "SE" => match transaction.as_mut() {
                    Some(tx) => {
                        close_loops(tx, 0);
                        tx.node.add_child(segment_node(seg));
                        self.close_transaction(
                            &mut transaction,
                            &mut group,
                            &mut interchange,
                            false,
                        );
                    }
                    None => {
                        self.attach_stray(seg, group.as_mut().unwrap_or(&mut interchange));
                    }
                },
                "GE" => {
                    self.close_transaction(&mut transaction, &mut group, &mut interchange, true);
                    match group.take() {
                        Some(mut node) => {
                            node.add_child(segment_node(seg));
                            interchange.add_child(node);
                        }
                        None => self.attach_stray(seg, &mut interchange),
                    }
                }
                "IEA" => {
                    self.close_transaction(&mut transaction, &mut group, &mut interchange, true);
                    if let Some(open) = group.take() {
                        self.warn_structural("unterminated-group", seg, "IEA before GE");
                        interchange.add_child(open);
                    }
                    interchange.add_child(segment_node(seg));
                }
                _ => match transaction.as_mut() {
                    Some(tx) => self.place(tx, seg),
                    None => {
                        self.warn_structural(
                            "segment-outside-transaction",
                            seg,
                            "segment outside ST/SE",
                        );
                        self.attach_stray(seg, group.as_mut().unwrap_or(&mut interchange));
                    }
                },
            }
        }

        // Unterminated containers at end of input still land in the tree.
        if transaction.is_some() {
            self.warnings.push(Warning::new(
                "unterminated-transaction",
                "input ended before SE",
                Severity::Warning,
                "transaction",
            ));
            self.close_transaction(&mut transaction, &mut group, &mut interchange, false);
        }
        if let Some(open) = group.take() {
            self.warnings.push(Warning::new(
                "unterminated-group",
                "input ended before GE",
                Severity::Warning,
                "functional_group",
            ));
            interchange.add_child(open);
        }

        debug!(
            segments = segments.len(),
            warnings = self.warnings.len(),
            "built generic tree"
        );

        Ok(ParseOutcome {
            document: Document::with_metadata(interchange, metadata),
            warnings: self.warnings,
        })
    }

    fn open_transaction(
        &mut self,
        seg: &RawSegment,
        metadata: &mut DocumentMetadata,
    ) -> Result<OpenTransaction> {
        let tx_set = seg.value_at(1).unwrap_or_default();
        let version = metadata.version.clone().unwrap_or_default();

        let grammar = grammar_for(&tx_set, &version).ok_or_else(|| {
            Error::UnsupportedTransactionSet {
                transaction_set: tx_set.clone(),
                version: version.clone(),
                offset: seg.position.offset,
            }
        })?;

        if metadata.transaction_set.is_none() {
            metadata.transaction_set = Some(tx_set.clone());
        }
        if let Some(control) = seg.value_at(2) {
            metadata.transaction_controls.push(control);
        }

        let mut node = Node::new("transaction", NodeType::Transaction);
        node.set_attribute("transaction_set", &tx_set);
        if let Some(control) = seg.value_at(2) {
            node.set_attribute("control_number", control);
        }
        node.add_child(segment_node(seg));

        Ok(OpenTransaction {
            node,
            grammar,
            stack: Vec::new(),
        })
    }

    fn close_transaction(
        &mut self,
        transaction: &mut Option<OpenTransaction>,
        group: &mut Option<Node>,
        interchange: &mut Node,
        unexpected: bool,
    ) {
        if let Some(mut tx) = transaction.take() {
            if unexpected {
                self.warnings.push(Warning::new(
                    "unterminated-transaction",
                    "transaction closed without SE",
                    Severity::Warning,
                    "transaction",
                ));
            }
            close_loops(&mut tx, 0);
            self.check_required_loops(tx.grammar, &tx.node, None);
            match group.as_mut() {
                Some(g) => g.add_child(tx.node),
                None => interchange.add_child(tx.node),
            };
        }
    }

    /// Walk the closed transaction and warn for every required loop that has
    /// no instance under its parent. Required loops nested inside optional
    /// loops are only checked where the parent actually appeared.
    fn check_required_loops(
        &mut self,
        grammar: &'static TransactionGrammar,
        container: &Node,
        parent: Option<&str>,
    ) {
        for def in grammar.children_of(parent) {
            if def.usage == Usage::Required
                && !container
                    .children
                    .iter()
                    .any(|c| c.attribute("loop_id") == Some(def.id))
            {
                self.warnings.push(Warning::new(
                    "missing-required-loop",
                    format!("required loop {} ({}) has no instance", def.id, def.name),
                    Severity::Warning,
                    def.name,
                ));
            }
        }
        for child in &container.children {
            if let Some(id) = child.attribute("loop_id") {
                self.check_required_loops(grammar, child, Some(id));
            }
        }
    }

    /// Place a business segment inside the open transaction.
    fn place(&mut self, tx: &mut OpenTransaction, seg: &RawSegment) {
        let node = segment_node(seg);

        if seg.id == "HL" && !tx.grammar.hl_priority.is_empty() {
            self.place_hl(tx, seg, node);
            return;
        }

        // Innermost loop outward: child trigger, sibling re-trigger, then
        // membership.
        for depth in (0..tx.stack.len()).rev() {
            let def = tx.stack[depth].def;

            if let Some(child) = find_trigger(tx.grammar, Some(def.id), seg) {
                close_loops(tx, depth + 1);
                self.open_loop(tx, child, node, seg);
                return;
            }
            if def.hl_level.is_none() && def.trigger.matches(&seg.id, |p| seg.value_at(p)) {
                close_loops(tx, depth);
                self.open_loop(tx, def, node, seg);
                return;
            }
            if def.is_member(&seg.id) {
                close_loops(tx, depth + 1);
                tx.stack[depth].node.add_child(node);
                return;
            }
        }

        if let Some(top) = find_trigger(tx.grammar, None, seg) {
            close_loops(tx, 0);
            self.open_loop(tx, top, node, seg);
            return;
        }
        if tx.grammar.is_transaction_member(&seg.id) {
            close_loops(tx, 0);
            tx.node.add_child(node);
            return;
        }

        self.attach_unmapped(tx, seg, node);
    }

    /// Place an HL segment: explicit HL03 level code wins; unknown or absent
    /// codes fall back to the grammar's declared priority order.
    fn place_hl(&mut self, tx: &mut OpenTransaction, seg: &RawSegment, node: Node) {
        let level = seg.value_at(3);
        let def = match level.as_deref().and_then(|code| tx.grammar.hl_loop(code)) {
            Some(def) => def,
            None => {
                self.warn_structural(
                    "unknown-hl-level",
                    seg,
                    format!(
                        "HL level code '{}' not in grammar, using declared priority",
                        level.as_deref().unwrap_or("")
                    ),
                );
                let fallback = tx
                    .grammar
                    .hl_priority
                    .iter()
                    .filter_map(|code| tx.grammar.hl_loop(code))
                    .find(|d| {
                        d.parents.is_empty()
                            || tx.stack.iter().any(|o| d.parents.contains(&o.def.id))
                    });
                match fallback {
                    Some(def) => def,
                    None => {
                        self.attach_unmapped(tx, seg, node);
                        return;
                    }
                }
            }
        };

        if def.parents.is_empty() {
            close_loops(tx, 0);
        } else if let Some(depth) = tx
            .stack
            .iter()
            .rposition(|o| def.parents.contains(&o.def.id))
        {
            close_loops(tx, depth + 1);
        } else {
            self.warn_structural(
                "missing-parent-loop",
                seg,
                format!("no open parent for loop {}, attaching at transaction", def.id),
            );
            close_loops(tx, 0);
        }
        self.open_loop(tx, def, node, seg);
    }

    fn open_loop(
        &mut self,
        tx: &mut OpenTransaction,
        def: &'static LoopDef,
        trigger_node: Node,
        seg: &RawSegment,
    ) {
        let parent = tx.stack.last().map_or(&tx.node, |open| &open.node);
        let prior = parent
            .children
            .iter()
            .filter(|c| c.attribute("loop_id") == Some(def.id))
            .count();

        if prior >= 1 && def.repeat == Repeat::Once {
            self.warn_structural(
                "occurrence-bound",
                seg,
                format!("loop {} repeats but is bounded to one occurrence", def.id),
            );
        }

        trace!(loop_id = def.id, occurrence = prior, segment = %seg.id, "open loop");

        let mut node = Node::new(def.name, NodeType::Loop);
        node.set_attribute("loop_id", def.id);
        node.set_attribute("occurrence", prior.to_string());
        node.add_child(trigger_node);
        tx.stack.push(OpenLoop { def, node });
    }

    fn attach_unmapped(&mut self, tx: &mut OpenTransaction, seg: &RawSegment, mut node: Node) {
        self.warn_structural(
            "unmapped-segment",
            seg,
            format!(
                "segment {} not in {} grammar",
                seg.id, tx.grammar.transaction_set
            ),
        );
        node.set_attribute("unmapped", "true");
        let target = match tx.stack.last_mut() {
            Some(open) => &mut open.node,
            None => &mut tx.node,
        };
        target.add_child(node);
    }

    fn attach_stray(&mut self, seg: &RawSegment, target: &mut Node) {
        let mut node = segment_node(seg);
        node.set_attribute("unmapped", "true");
        target.add_child(node);
    }

    fn warn_structural(&mut self, code: &str, seg: &RawSegment, message: impl Into<String>) {
        self.warnings.push(
            Warning::new(code, message, Severity::Warning, seg.id.clone())
                .at(seg.position.clone()),
        );
    }
}

fn find_trigger<'g>(
    grammar: &'g TransactionGrammar,
    parent: Option<&str>,
    seg: &RawSegment,
) -> Option<&'g LoopDef> {
    grammar
        .children_of(parent)
        .find(|l| l.hl_level.is_none() && l.trigger.matches(&seg.id, |p| seg.value_at(p)))
}

fn close_loops(tx: &mut OpenTransaction, keep: usize) {
    while tx.stack.len() > keep {
        let closed = tx.stack.pop().expect("stack length checked");
        trace!(loop_id = closed.def.id, "close loop");
        match tx.stack.last_mut() {
            Some(parent) => {
                parent.node.add_child(closed.node);
            }
            None => {
                tx.node.add_child(closed.node);
            }
        }
    }
}

fn segment_node(seg: &RawSegment) -> Node {
    let mut node = Node::new(&seg.id, NodeType::Segment);
    node.set_attribute("line", seg.position.line.to_string());
    node.set_attribute("segment_index", seg.position.segment_index.to_string());

    for (i, element) in seg.elements.iter().enumerate() {
        let name = format!("{:02}", i + 1);
        let elem = match element {
            RawElement::Scalar(v) if v.is_empty() => {
                Node::with_value(name, NodeType::Element, Value::Null)
            }
            RawElement::Scalar(v) => {
                Node::with_value(name, NodeType::Element, Value::String(v.clone()))
            }
            RawElement::Composite(parts) => {
                let mut composite = Node::new(name, NodeType::Element);
                for (j, part) in parts.iter().enumerate() {
                    let value = if part.is_empty() {
                        Value::Null
                    } else {
                        Value::String(part.clone())
                    };
                    composite.add_child(Node::with_value(
                        (j + 1).to_string(),
                        NodeType::Component,
                        value,
                    ));
                }
                composite
            }
        };
        node.add_child(elem);
    }
    node
}

fn note_interchange(metadata: &mut DocumentMetadata, seg: &RawSegment) {
    let trimmed = |pos: usize| seg.value_at(pos).map(|v| v.trim().to_string());

    if let (Some(qual), Some(id)) = (trimmed(5), trimmed(6)) {
        metadata.sender = Some((qual, id));
    }
    if let (Some(qual), Some(id)) = (trimmed(7), trimmed(8)) {
        metadata.receiver = Some((qual, id));
    }
    metadata.interchange_date = trimmed(9);
    metadata.interchange_time = trimmed(10);
    metadata.interchange_control = trimmed(13);
}

fn note_group(metadata: &mut DocumentMetadata, seg: &RawSegment) {
    metadata.functional_group = seg.value_at(1);
    metadata.group_control = seg.value_at(6);
    metadata.version = seg.value_at(8);
}
