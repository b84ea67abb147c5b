#![deny(warnings)]
#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

//! # x12-codes
//!
//! Process-wide X12 code tables with a pure lookup API.
//!
//! Tables are static data loaded into hash maps on first use and never
//! mutated afterwards, so concurrent parses can read them without locking.
//! Lookup never fails: an unknown code simply returns `None` and callers
//! retain the raw value.

mod tables;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Code sets partitioning the lookup tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodeSet {
    /// Claim adjustment reason codes (CARC)
    ClaimAdjustmentReason,
    /// Remittance advice remark codes (RARC)
    RemittanceRemark,
    /// Place of service codes
    PlaceOfService,
    /// Claim status codes (CLP02)
    ClaimStatus,
    /// Payment method codes (BPR04)
    PaymentMethod,
    /// Transaction handling codes (BPR01)
    TransactionHandling,
    /// Claim filing indicator codes (CLP06/SBR09)
    FilingIndicator,
    /// Claim adjustment group codes (CAS01)
    AdjustmentGroup,
    /// Entity identifier codes (NM101/N101)
    EntityIdentifier,
    /// Identification code qualifiers (NM108/N103)
    IdQualifier,
    /// Date/time qualifiers (DTM01/DTP01)
    DateQualifier,
    /// Amount qualifier codes (AMT01)
    AmountQualifier,
    /// Quantity qualifier codes (QTY01)
    QuantityQualifier,
    /// Reference identification qualifiers (REF01)
    ReferenceQualifier,
    /// Provider adjustment reason codes (PLB03)
    ProviderAdjustmentReason,
    /// Hierarchical level codes (HL03)
    HierarchicalLevel,
    /// Claim frequency type codes
    ClaimFrequency,
    /// Individual relationship codes (INS02/PAT01)
    Relationship,
    /// Maintenance type codes (INS03)
    MaintenanceType,
    /// Insurance line codes (HD03)
    InsuranceLine,
}

static TABLES: LazyLock<HashMap<CodeSet, HashMap<&'static str, &'static str>>> =
    LazyLock::new(|| {
        let mut map = HashMap::new();
        let mut insert = |set: CodeSet, entries: &[(&'static str, &'static str)]| {
            map.insert(set, entries.iter().copied().collect());
        };

        insert(
            CodeSet::ClaimAdjustmentReason,
            tables::CLAIM_ADJUSTMENT_REASON,
        );
        insert(CodeSet::RemittanceRemark, tables::REMITTANCE_REMARK);
        insert(CodeSet::PlaceOfService, tables::PLACE_OF_SERVICE);
        insert(CodeSet::ClaimStatus, tables::CLAIM_STATUS);
        insert(CodeSet::PaymentMethod, tables::PAYMENT_METHOD);
        insert(CodeSet::TransactionHandling, tables::TRANSACTION_HANDLING);
        insert(CodeSet::FilingIndicator, tables::FILING_INDICATOR);
        insert(CodeSet::AdjustmentGroup, tables::ADJUSTMENT_GROUP);
        insert(CodeSet::EntityIdentifier, tables::ENTITY_IDENTIFIER);
        insert(CodeSet::IdQualifier, tables::ID_QUALIFIER);
        insert(CodeSet::DateQualifier, tables::DATE_QUALIFIER);
        insert(CodeSet::AmountQualifier, tables::AMOUNT_QUALIFIER);
        insert(CodeSet::QuantityQualifier, tables::QUANTITY_QUALIFIER);
        insert(CodeSet::ReferenceQualifier, tables::REFERENCE_QUALIFIER);
        insert(
            CodeSet::ProviderAdjustmentReason,
            tables::PROVIDER_ADJUSTMENT_REASON,
        );
        insert(CodeSet::HierarchicalLevel, tables::HIERARCHICAL_LEVEL);
        insert(CodeSet::ClaimFrequency, tables::CLAIM_FREQUENCY);
        insert(CodeSet::Relationship, tables::RELATIONSHIP);
        insert(CodeSet::MaintenanceType, tables::MAINTENANCE_TYPE);
        insert(CodeSet::InsuranceLine, tables::INSURANCE_LINE);

        map
    });

/// Look up the description for a code within a code set.
///
/// Returns `None` for unknown codes; callers keep the raw value and never
/// synthesize a description.
#[must_use]
pub fn lookup(set: CodeSet, code: &str) -> Option<&'static str> {
    let found = TABLES.get(&set).and_then(|t| t.get(code).copied());
    if found.is_none() {
        tracing::trace!(?set, code, "code not in table, keeping raw value");
    }
    found
}

/// Number of codes registered for a code set.
#[must_use]
pub fn table_len(set: CodeSet) -> usize {
    TABLES.get(&set).map_or(0, HashMap::len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_of_service_office() {
        assert_eq!(lookup(CodeSet::PlaceOfService, "11"), Some("Office"));
    }

    #[test]
    fn test_unknown_code_returns_none() {
        assert_eq!(lookup(CodeSet::PlaceOfService, "99Z"), None);
        assert_eq!(lookup(CodeSet::ClaimAdjustmentReason, "XYZ"), None);
    }

    #[test]
    fn test_adjustment_reason_lookup() {
        assert_eq!(
            lookup(CodeSet::ClaimAdjustmentReason, "197"),
            Some("Precertification/authorization/notification/pre-treatment absent")
        );
        assert!(lookup(CodeSet::ClaimAdjustmentReason, "45").is_some());
    }

    #[test]
    fn test_payment_method_codes() {
        assert_eq!(
            lookup(CodeSet::PaymentMethod, "ACH"),
            Some("Automated Clearing House")
        );
        assert_eq!(lookup(CodeSet::PaymentMethod, "CHK"), Some("Check"));
    }

    #[test]
    fn test_adjustment_group_codes() {
        assert_eq!(
            lookup(CodeSet::AdjustmentGroup, "CO"),
            Some("Contractual Obligations")
        );
        assert_eq!(
            lookup(CodeSet::AdjustmentGroup, "PR"),
            Some("Patient Responsibility")
        );
    }

    #[test]
    fn test_every_table_is_nonempty() {
        for set in [
            CodeSet::ClaimAdjustmentReason,
            CodeSet::RemittanceRemark,
            CodeSet::PlaceOfService,
            CodeSet::ClaimStatus,
            CodeSet::PaymentMethod,
            CodeSet::TransactionHandling,
            CodeSet::FilingIndicator,
            CodeSet::AdjustmentGroup,
            CodeSet::EntityIdentifier,
            CodeSet::IdQualifier,
            CodeSet::DateQualifier,
            CodeSet::AmountQualifier,
            CodeSet::QuantityQualifier,
            CodeSet::ReferenceQualifier,
            CodeSet::ProviderAdjustmentReason,
            CodeSet::HierarchicalLevel,
            CodeSet::ClaimFrequency,
            CodeSet::Relationship,
            CodeSet::MaintenanceType,
            CodeSet::InsuranceLine,
        ] {
            assert!(table_len(set) > 0, "table {set:?} is empty");
        }
    }

    #[test]
    fn test_lookup_is_stable_across_calls() {
        let first = lookup(CodeSet::ClaimStatus, "4");
        let second = lookup(CodeSet::ClaimStatus, "4");
        assert_eq!(first, second);
        assert_eq!(first, Some("Denied"));
    }
}
