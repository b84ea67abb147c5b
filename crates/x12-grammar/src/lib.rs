#![deny(warnings)]
#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

//! # x12-grammar
//!
//! Authored loop grammars for X12 transaction sets plus the registry that
//! selects one from the transaction-set id and version found inside the
//! document.
//!
//! X12 structure is not self-describing: loop boundaries, repeat counts, and
//! attachment points come from these declarative grammars, not from the
//! token stream. Grammars are static data; the registry is safe for
//! concurrent reads from parallel parses.

/// Loop definition model shared by all grammars.
pub mod model;
/// Registry keyed by transaction-set id and version.
pub mod registry;

mod maps;

pub use model::{LoopDef, Repeat, TransactionGrammar, Trigger, Usage};
pub use registry::{grammar_for, require_grammar};

use thiserror::Error;

/// Errors that can occur when selecting a grammar
#[derive(Error, Debug)]
pub enum Error {
    #[error("No grammar registered for transaction set {transaction_set} (version {version})")]
    NotFound {
        transaction_set: String,
        version: String,
    },
}

/// Crate-local result type for grammar selection.
pub type Result<T> = std::result::Result<T, Error>;
