//! Segment handler trait, registry, and the default fallback handler.
//!
//! Dispatch is an explicit map from segment id to one shared interpretation
//! interface with exactly one fallback implementation, keeping each
//! interpreter independently testable.

use crate::segment::{LoopContext, SegmentView};
use serde_json::{Map, Value as Json};
use std::collections::HashMap;
use x12_ir::{Severity, Warning};

/// Named, typed fields produced by one interpreter invocation, plus any
/// decode anomalies encountered along the way
#[derive(Debug, Default)]
pub struct HandlerOutput {
    /// Decoded field name → value
    pub fields: Map<String, Json>,
    /// Non-fatal decode anomalies
    pub warnings: Vec<Warning>,
}

impl HandlerOutput {
    /// Create an empty output
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field
    pub fn insert(&mut self, name: impl Into<String>, value: Json) {
        self.fields.insert(name.into(), value);
    }

    /// Insert a field only when the value is present
    pub fn insert_opt(&mut self, name: impl Into<String>, value: Option<Json>) {
        if let Some(value) = value {
            self.fields.insert(name.into(), value);
        }
    }

    /// Record a decode anomaly
    pub fn warn(&mut self, code: &str, message: impl Into<String>, path: impl Into<String>) {
        self.warnings
            .push(Warning::new(code, message, Severity::Warning, path));
    }
}

/// One segment interpreter.
///
/// Input is the segment plus its enclosing loop context; output is named,
/// typed fields. Interpreters must not fail: decode anomalies fall back to
/// raw values and land in the output's warning list.
pub trait SegmentHandler: Send + Sync {
    /// The segment id this handler interprets
    fn segment_id(&self) -> &'static str;

    /// Decode the segment into named fields
    fn interpret(&self, seg: &SegmentView<'_>, ctx: &LoopContext) -> HandlerOutput;
}

/// Fallback interpreter emitting generic positional field names
/// (`zzz_01`, `zzz_02`, ...). This path never fails.
#[derive(Debug, Default)]
pub struct DefaultHandler;

impl SegmentHandler for DefaultHandler {
    fn segment_id(&self) -> &'static str {
        "*"
    }

    fn interpret(&self, seg: &SegmentView<'_>, _ctx: &LoopContext) -> HandlerOutput {
        let mut out = HandlerOutput::new();
        let prefix = seg.id().to_lowercase();
        for pos in 1..=seg.element_count() {
            if let Some(value) = seg.element(pos) {
                out.insert(format!("{prefix}_{pos:02}"), Json::String(value));
            }
        }
        out
    }
}

/// Registry mapping segment id to interpreter, with exactly one default
/// fallback
pub struct HandlerRegistry {
    handlers: HashMap<&'static str, Box<dyn SegmentHandler>>,
    fallback: DefaultHandler,
}

impl HandlerRegistry {
    /// Create an empty registry (everything falls back to the default
    /// handler)
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
            fallback: DefaultHandler,
        }
    }

    /// Create a registry loaded with the standard 835/837/834 interpreters
    #[must_use]
    pub fn with_standard_handlers() -> Self {
        let mut registry = Self::new();
        crate::handlers::register_all(&mut registry);
        registry
    }

    /// Register an interpreter, replacing any existing one for its id
    pub fn register(&mut self, handler: Box<dyn SegmentHandler>) {
        self.handlers.insert(handler.segment_id(), handler);
    }

    /// Whether a specialized handler exists for a segment id
    #[must_use]
    pub fn has_handler(&self, segment_id: &str) -> bool {
        self.handlers.contains_key(segment_id)
    }

    /// Interpret a segment, dispatching to its handler or the default
    #[must_use]
    pub fn interpret(&self, seg: &SegmentView<'_>, ctx: &LoopContext) -> HandlerOutput {
        match self.handlers.get(seg.id()) {
            Some(handler) => handler.interpret(seg, ctx),
            None => {
                tracing::trace!(segment = seg.id(), "no specialized handler, using default");
                self.fallback.interpret(seg, ctx)
            }
        }
    }
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::with_standard_handlers()
    }
}
