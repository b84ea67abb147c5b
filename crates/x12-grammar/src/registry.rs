//! Grammar registry keyed by transaction-set id and version.
//!
//! Selection is driven by the document itself: ST01 supplies the transaction
//! set id, GS08 the implementation version. Grammars are static; reads from
//! concurrent parses need no locking.

use crate::maps::{GRAMMAR_834, GRAMMAR_835, GRAMMAR_837P};
use crate::model::TransactionGrammar;
use crate::{Error, Result};
use tracing::debug;

static GRAMMARS: &[&TransactionGrammar] = &[&GRAMMAR_835, &GRAMMAR_837P, &GRAMMAR_834];

/// Look up the grammar for a transaction set id and version.
///
/// Matches on the six-character base version (e.g. `005010X221A1` matches a
/// grammar authored for `005010`); if no version matches, falls back to the
/// sole grammar registered for the set.
#[must_use]
pub fn grammar_for(transaction_set: &str, version: &str) -> Option<&'static TransactionGrammar> {
    let candidates: Vec<_> = GRAMMARS
        .iter()
        .filter(|g| g.transaction_set == transaction_set)
        .collect();

    let selected = candidates
        .iter()
        .find(|g| version.starts_with(g.version))
        .or_else(|| candidates.first())
        .map(|g| **g);

    if let Some(grammar) = selected {
        debug!(
            transaction_set,
            version,
            grammar = grammar.name,
            "selected loop grammar"
        );
    }
    selected
}

/// Like [`grammar_for`] but failing with [`Error::NotFound`].
pub fn require_grammar(
    transaction_set: &str,
    version: &str,
) -> Result<&'static TransactionGrammar> {
    grammar_for(transaction_set, version).ok_or_else(|| Error::NotFound {
        transaction_set: transaction_set.to_string(),
        version: version.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_set_and_version() {
        let g = grammar_for("835", "005010X221A1").unwrap();
        assert_eq!(g.transaction_set, "835");
        assert_eq!(g.name, "Health Care Claim Payment/Advice");
    }

    #[test]
    fn test_version_fallback_to_sole_grammar() {
        // Unrecognized version still selects the only 834 grammar.
        let g = grammar_for("834", "004010X095A1").unwrap();
        assert_eq!(g.transaction_set, "834");
    }

    #[test]
    fn test_unknown_transaction_set() {
        assert!(grammar_for("999", "005010").is_none());
        let err = require_grammar("999", "005010").unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
    }

    #[test]
    fn test_835_loop_structure() {
        let g = grammar_for("835", "005010X221A1").unwrap();

        let claim = g.loop_def("2100").unwrap();
        assert_eq!(claim.name, "claim_payment");
        assert!(claim.nests_under(Some("2000")));
        assert!(claim.is_member("CAS"));

        let top: Vec<_> = g.children_of(None).map(|l| l.id).collect();
        assert_eq!(top, vec!["1000A", "1000B", "2000"]);
    }

    #[test]
    fn test_837_hl_levels() {
        let g = grammar_for("837", "005010X222A1").unwrap();
        assert_eq!(g.hl_loop("20").unwrap().id, "2000A");
        assert_eq!(g.hl_loop("22").unwrap().id, "2000B");
        assert_eq!(g.hl_loop("23").unwrap().id, "2000C");
        assert_eq!(g.hl_priority, &["20", "22", "23"]);
    }
}
