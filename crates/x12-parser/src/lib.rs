#![deny(warnings)]
#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

//! # x12-parser
//!
//! Element tokenizer and generic tree builder for X12 documents.
//!
//! Parsing is a pure, synchronous batch computation over fully materialized
//! text: the tokenizer reads the delimiters out of the ISA header and splits
//! the document into segments; the tree builder consults the loop grammar
//! selected by the document's own ST01/GS08 and produces the hierarchical
//! parse tree. Non-fatal anomalies accumulate as warnings next to the tree;
//! only an unreadable envelope or an unregistered transaction set aborts a
//! parse.

/// Generic tree builder driven by the loop grammar.
pub mod builder;
/// Delimiter discovery and segment/element splitting.
pub mod tokenizer;

pub use builder::{ParseOutcome, TreeBuilder};
pub use tokenizer::{Delimiters, RawElement, RawSegment, tokenize};

use thiserror::Error;

/// Fatal parse conditions. Anything recoverable is a [`x12_ir::Warning`] on
/// the [`ParseOutcome`] instead.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Malformed interchange envelope at offset {offset}: {reason}")]
    MalformedEnvelope { reason: String, offset: usize },

    #[error(
        "Unsupported transaction set {transaction_set} (version {version}) at offset {offset}"
    )]
    UnsupportedTransactionSet {
        transaction_set: String,
        version: String,
        offset: usize,
    },
}

impl Error {
    /// Build a malformed-envelope error with offending offset.
    pub fn malformed_envelope(reason: impl Into<String>, offset: usize) -> Self {
        Self::MalformedEnvelope {
            reason: reason.into(),
            offset,
        }
    }
}

/// Crate-local result type for parsing.
pub type Result<T> = std::result::Result<T, Error>;

/// Facade tying tokenizer and tree builder together.
///
/// One call parses one document; parses share no mutable state, so callers
/// may run many documents in parallel.
#[derive(Debug, Default)]
pub struct X12Parser;

impl X12Parser {
    /// Create a new parser
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Parse a full X12 document into the generic tree plus warnings.
    pub fn parse(&self, text: &str) -> Result<ParseOutcome> {
        let (delimiters, segments, mut warnings) = tokenize(text)?;
        tracing::debug!(
            segment_count = segments.len(),
            element_separator = %(delimiters.element as char),
            "tokenized document"
        );

        let mut outcome = TreeBuilder::new().build(&segments)?;
        warnings.append(&mut outcome.warnings);
        outcome.warnings = warnings;
        Ok(outcome)
    }
}
