//! Source positions and non-fatal anomaly reporting
#![allow(clippy::must_use_candidate)] // Constructor helpers are clear at call sites without #[must_use].
#![allow(clippy::return_self_not_must_use)] // Fluent setters are designed for chaining.

use serde::{Deserialize, Serialize};

/// Source position information for error and warning reporting
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Position {
    /// Line number (1-indexed)
    pub line: usize,

    /// Byte offset from start of document
    pub offset: usize,

    /// Ordinal of the segment within the document (0-indexed)
    pub segment_index: usize,
}

/// Severity of an accumulated anomaly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// A non-fatal anomaly recorded during parsing or formatting.
///
/// Fatal conditions abort a parse through `x12-parser`'s error type; anything
/// recoverable lands here so malformed real-world documents still yield
/// best-effort output plus an itemized list of what could not be fully
/// interpreted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Warning {
    /// Stable anomaly code (e.g. "unmapped-segment", "unknown-qualifier")
    pub code: String,

    /// Human-readable message
    pub message: String,

    /// Severity level
    pub severity: Severity,

    /// Path to the affected node (loop names joined with '/')
    pub path: String,

    /// Position of the offending segment, when known
    pub position: Option<Position>,
}

impl Position {
    /// Create a new position
    pub fn new(line: usize, offset: usize, segment_index: usize) -> Self {
        Self {
            line,
            offset,
            segment_index,
        }
    }
}

impl Warning {
    /// Create a new warning
    pub fn new(
        code: impl Into<String>,
        message: impl Into<String>,
        severity: Severity,
        path: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            severity,
            path: path.into(),
            position: None,
        }
    }

    /// Attach the offending position
    pub fn at(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_creation() {
        let pos = Position::new(10, 420, 7);
        assert_eq!(pos.line, 10);
        assert_eq!(pos.offset, 420);
        assert_eq!(pos.segment_index, 7);
    }

    #[test]
    fn test_warning_creation() {
        let warn = Warning::new(
            "unmapped-segment",
            "segment ZZZ not in 835 grammar",
            Severity::Warning,
            "transaction/claim_payment",
        );

        assert_eq!(warn.code, "unmapped-segment");
        assert_eq!(warn.severity, Severity::Warning);
        assert!(warn.position.is_none());
    }

    #[test]
    fn test_warning_with_position() {
        let warn = Warning::new("malformed-segment", "empty segment id", Severity::Error, "")
            .at(Position::new(3, 120, 2));

        let pos = warn.position.unwrap();
        assert_eq!(pos.line, 3);
        assert_eq!(pos.segment_index, 2);
    }
}
