#![deny(warnings)]
#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

//! # x12-ir
//!
//! Generic tree model and traversal APIs for X12 documents.
//!
//! This crate provides the hierarchical parse result produced by the tree
//! builder: an interchange root containing functional groups, transactions,
//! business loops, and segment leaves. The tree is built once per parse and
//! read-only thereafter; the structured formatter consumes it without
//! mutating it.

/// Document container and envelope metadata accessors.
pub mod document;
/// Core tree node model for loops, segments, and elements.
pub mod node;
/// Cursor-based traversal helpers for navigating parse trees.
pub mod traversal;
/// Source positions and accumulated parse/format warnings.
pub mod warning;

/// Primary parse-tree document type.
pub use document::{Document, DocumentMetadata};
/// Node primitives for tree structure and value typing.
pub use node::{Node, NodeType, Value};
/// Traversal entry points for iterative tree navigation.
pub use traversal::{Cursor, Traversal};
/// Position and warning types shared by parser and formatter.
pub use warning::{Position, Severity, Warning};

use thiserror::Error;

/// Errors that can occur when working with the parse tree
#[derive(Error, Debug)]
pub enum Error {
    #[error("Node not found at path: {path}")]
    NodeNotFound { path: String },
}

impl Error {
    /// Build a node-not-found error with path context.
    pub fn node_not_found(path: impl Into<String>) -> Self {
        Self::NodeNotFound { path: path.into() }
    }
}

/// Crate-local result type for tree operations.
pub type Result<T> = std::result::Result<T, Error>;
