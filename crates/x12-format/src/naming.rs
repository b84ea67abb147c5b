//! Qualifier-to-field-name tables.
//!
//! For qualifier-driven segments (REF, DTM/DTP, AMT, QTY) the output field
//! name comes from these tables. Unknown qualifiers fall back to a
//! deterministic generic name (`reference_1x`, `amount_zz`, ...) and the raw
//! qualifier is preserved next to the value; it is never silently dropped.

/// Canonical field name for a REF qualifier
#[must_use]
pub fn reference_field(qualifier: &str) -> Option<&'static str> {
    Some(match qualifier {
        "0B" => "state_license_number",
        "0K" => "policy_form_number",
        "1L" => "group_or_policy_number",
        "1W" => "member_id",
        "28" => "employee_id",
        "2U" => "payer_identification_number",
        "6P" => "group_number",
        "6R" => "provider_control_number",
        "BB" => "authorization_number",
        "CE" => "class_of_contract_code",
        "D9" => "claim_number",
        "EA" => "medical_record_number",
        "EV" => "receiver_identification",
        "F2" => "version_code",
        "F8" => "original_reference_number",
        "G1" => "prior_authorization_number",
        "G2" => "provider_commercial_number",
        "HPI" => "npi",
        "IG" => "insurance_policy_number",
        "LU" => "location_number",
        "PQ" => "payee_identification",
        "SY" => "social_security_number",
        "TJ" => "federal_taxpayer_id",
        _ => return None,
    })
}

/// Canonical field name for a DTM/DTP date qualifier
#[must_use]
pub fn date_field(qualifier: &str) -> Option<&'static str> {
    Some(match qualifier {
        "036" => "coverage_expiration_date",
        "050" => "received_date",
        "096" => "discharge_date",
        "150" => "service_period_start",
        "151" => "service_period_end",
        "232" => "claim_statement_period_start",
        "233" => "claim_statement_period_end",
        "291" => "plan_date",
        "304" => "latest_visit_date",
        "336" => "employment_begin_date",
        "337" => "employment_end_date",
        "338" => "medicare_begin_date",
        "348" => "benefit_begin_date",
        "349" => "benefit_end_date",
        "356" => "eligibility_begin_date",
        "357" => "eligibility_end_date",
        "405" => "production_date",
        "431" => "onset_date",
        "434" => "statement_date",
        "435" => "admission_date",
        "439" => "accident_date",
        "472" => "service_date",
        "573" => "claim_paid_date",
        _ => return None,
    })
}

/// Canonical field name for an AMT qualifier
#[must_use]
pub fn amount_field(qualifier: &str) -> Option<&'static str> {
    Some(match qualifier {
        "A8" => "noncovered_amount",
        "AU" => "coverage_amount",
        "B6" => "allowed_amount",
        "D" => "payor_paid_amount",
        "D8" => "discount_amount",
        "DY" => "per_day_limit_amount",
        "EAF" => "amount_owed",
        "F5" => "patient_paid_amount",
        "I" => "interest_amount",
        "KH" => "deduction_amount",
        "NL" => "negative_ledger_amount",
        "T" => "tax_amount",
        "T2" => "total_claim_before_taxes",
        _ => return None,
    })
}

/// Canonical field name for a QTY qualifier
#[must_use]
pub fn quantity_field(qualifier: &str) -> Option<&'static str> {
    Some(match qualifier {
        "CA" => "covered_quantity",
        "CD" => "coinsured_quantity",
        "LA" => "lifetime_reserve_quantity",
        "NE" => "noncovered_estimated_quantity",
        "OU" => "outlier_days",
        "PS" => "prescription_quantity",
        "VS" => "visit_quantity",
        _ => return None,
    })
}

/// Deterministic generic name for an unknown qualifier
#[must_use]
pub fn generic_field(prefix: &str, qualifier: &str) -> String {
    format!("{prefix}_{}", qualifier.to_lowercase())
}
