#![deny(warnings)]
#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

//! # x12-format
//!
//! Segment interpreters and the structured formatter.
//!
//! The formatter walks a generic parse tree depth-first and dispatches each
//! segment to an interpreter from the handler registry. Interpreters decode
//! composite elements, resolve qualifier codes against the `x12-codes`
//! tables, and assign semantic field names; segments without a specialized
//! interpreter fall through to a default handler that emits generic
//! positional names and never fails. Decode anomalies (unknown codes,
//! malformed composites, non-numeric amounts) fall back to raw values and
//! accumulate as warnings; they never abort a document.

/// Structured formatter walking the parse tree.
pub mod formatter;
/// Qualifier-to-field-name tables.
pub mod naming;
/// Handler trait, registry, and default handler.
pub mod registry;
/// Read-only segment/loop views passed to handlers.
pub mod segment;
/// Money/date/time coercion with raw fallback.
pub mod values;

mod handlers;

pub use formatter::{StructuredDocument, StructuredFormatter};
pub use registry::{HandlerOutput, HandlerRegistry, SegmentHandler};
pub use segment::{LoopContext, SegmentView};
