//! Claim and enrollment interpreters: HL, CLM, HI, SV1, SVD, SBR, PAT,
//! DTP, INS, HD, COB.

use crate::handlers::insert_coded;
use crate::naming;
use crate::registry::{HandlerOutput, HandlerRegistry, SegmentHandler};
use crate::segment::{LoopContext, SegmentView};
use crate::values;
use serde_json::Value as Json;
use x12_codes::CodeSet;

pub(crate) fn register(registry: &mut HandlerRegistry) {
    registry.register(Box::new(Hl));
    registry.register(Box::new(Clm));
    registry.register(Box::new(Hi));
    registry.register(Box::new(Sv1));
    registry.register(Box::new(Svd));
    registry.register(Box::new(Sbr));
    registry.register(Box::new(Pat));
    registry.register(Box::new(Dtp));
    registry.register(Box::new(Ins));
    registry.register(Box::new(Hd));
    registry.register(Box::new(Cob));
}

struct Hl;

impl SegmentHandler for Hl {
    fn segment_id(&self) -> &'static str {
        "HL"
    }

    fn interpret(&self, seg: &SegmentView<'_>, _ctx: &LoopContext) -> HandlerOutput {
        let mut out = HandlerOutput::new();
        out.insert_opt("hierarchical_id", seg.element(1).map(Json::String));
        out.insert_opt("parent_id", seg.element(2).map(Json::String));
        if let Some(code) = seg.element(3) {
            insert_coded(&mut out, "level", CodeSet::HierarchicalLevel, &code);
        }
        out.insert_opt("has_children", seg.element(4).map(|v| Json::Bool(v == "1")));
        out
    }
}

struct Clm;

impl SegmentHandler for Clm {
    fn segment_id(&self) -> &'static str {
        "CLM"
    }

    fn interpret(&self, seg: &SegmentView<'_>, _ctx: &LoopContext) -> HandlerOutput {
        let mut out = HandlerOutput::new();
        out.insert_opt("claim_id", seg.element(1).map(Json::String));
        out.insert_opt("total_charge_amount", seg.element(3).map(|v| values::money(&v)));

        // CLM05 is a composite: place of service, facility code qualifier,
        // claim frequency.
        let parts = seg.components(5);
        if let Some(place) = parts.first().filter(|p| !p.is_empty()) {
            insert_coded(&mut out, "place_of_service", CodeSet::PlaceOfService, place);
        }
        if let Some(frequency) = parts.get(2).filter(|p| !p.is_empty()) {
            insert_coded(&mut out, "frequency", CodeSet::ClaimFrequency, frequency);
        }

        out.insert_opt("provider_signature_on_file", seg.element(6).map(Json::String));
        out.insert_opt("assignment_code", seg.element(7).map(Json::String));
        out.insert_opt("benefits_assignment", seg.element(8).map(Json::String));
        out.insert_opt("release_of_information", seg.element(9).map(Json::String));
        out
    }
}

struct Hi;

impl SegmentHandler for Hi {
    fn segment_id(&self) -> &'static str {
        "HI"
    }

    // Each HI element is a composite of qualifier and diagnosis code; ABK/BK
    // mark the principal diagnosis, ABF/BF the additional ones.
    fn interpret(&self, seg: &SegmentView<'_>, _ctx: &LoopContext) -> HandlerOutput {
        let mut out = HandlerOutput::new();
        let mut diagnoses = Vec::new();
        for pos in 1..=seg.element_count() {
            let parts = seg.components(pos);
            let (Some(qualifier), Some(code)) = (parts.first(), parts.get(1)) else {
                continue;
            };
            if code.is_empty() {
                continue;
            }
            if matches!(qualifier.as_str(), "ABK" | "BK") {
                out.insert("principal_diagnosis", Json::String(code.clone()));
            }
            diagnoses.push(serde_json::json!({
                "qualifier": qualifier,
                "code": code,
            }));
        }
        if !diagnoses.is_empty() {
            out.insert("diagnoses", Json::Array(diagnoses));
        }
        out
    }
}

struct Sv1;

impl SegmentHandler for Sv1 {
    fn segment_id(&self) -> &'static str {
        "SV1"
    }

    fn interpret(&self, seg: &SegmentView<'_>, _ctx: &LoopContext) -> HandlerOutput {
        let mut out = HandlerOutput::new();

        let parts = seg.components(1);
        if let Some(qualifier) = parts.first().filter(|p| !p.is_empty()) {
            out.insert("procedure_qualifier", Json::String(qualifier.clone()));
        }
        if let Some(code) = parts.get(1).filter(|p| !p.is_empty()) {
            out.insert("procedure_code", Json::String(code.clone()));
        }
        let modifiers: Vec<Json> = parts
            .iter()
            .skip(2)
            .filter(|p| !p.is_empty())
            .map(|p| Json::String(p.clone()))
            .collect();
        if !modifiers.is_empty() {
            out.insert("modifiers", Json::Array(modifiers));
        }

        out.insert_opt("charge_amount", seg.element(2).map(|v| values::money(&v)));
        out.insert_opt("unit_basis", seg.element(3).map(Json::String));
        out.insert_opt("units", seg.element(4).map(|v| values::money(&v)));
        if let Some(place) = seg.element(5) {
            insert_coded(&mut out, "place_of_service", CodeSet::PlaceOfService, &place);
        }
        out.insert_opt("diagnosis_pointers", seg.element(7).map(Json::String));
        out
    }
}

struct Svd;

impl SegmentHandler for Svd {
    fn segment_id(&self) -> &'static str {
        "SVD"
    }

    fn interpret(&self, seg: &SegmentView<'_>, _ctx: &LoopContext) -> HandlerOutput {
        let mut out = HandlerOutput::new();
        out.insert_opt("payer_identifier", seg.element(1).map(Json::String));
        out.insert_opt("paid_amount", seg.element(2).map(|v| values::money(&v)));

        let parts = seg.components(3);
        if let Some(code) = parts.get(1).filter(|p| !p.is_empty()) {
            out.insert("procedure_code", Json::String(code.clone()));
        }
        out.insert_opt("paid_units", seg.element(5).map(|v| values::money(&v)));
        out.insert_opt("line_number", seg.element(6).map(|v| values::integer(&v)));
        out
    }
}

struct Sbr;

impl SegmentHandler for Sbr {
    fn segment_id(&self) -> &'static str {
        "SBR"
    }

    fn interpret(&self, seg: &SegmentView<'_>, _ctx: &LoopContext) -> HandlerOutput {
        let mut out = HandlerOutput::new();
        out.insert_opt("payer_responsibility", seg.element(1).map(Json::String));
        if let Some(code) = seg.element(2) {
            insert_coded(&mut out, "relationship", CodeSet::Relationship, &code);
        }
        out.insert_opt("group_or_policy_number", seg.element(3).map(Json::String));
        out.insert_opt("group_name", seg.element(4).map(Json::String));
        if let Some(code) = seg.element(9) {
            insert_coded(&mut out, "filing_indicator", CodeSet::FilingIndicator, &code);
        }
        out
    }
}

struct Pat;

impl SegmentHandler for Pat {
    fn segment_id(&self) -> &'static str {
        "PAT"
    }

    fn interpret(&self, seg: &SegmentView<'_>, _ctx: &LoopContext) -> HandlerOutput {
        let mut out = HandlerOutput::new();
        if let Some(code) = seg.element(1) {
            insert_coded(&mut out, "relationship", CodeSet::Relationship, &code);
        }
        out
    }
}

struct Dtp;

impl SegmentHandler for Dtp {
    fn segment_id(&self) -> &'static str {
        "DTP"
    }

    // DTP02 gives the format: D8 is a single date, RD8 a start-end range.
    fn interpret(&self, seg: &SegmentView<'_>, ctx: &LoopContext) -> HandlerOutput {
        let mut out = HandlerOutput::new();
        let Some(qualifier) = seg.element(1) else {
            return out;
        };
        let Some(raw) = seg.element(3) else {
            return out;
        };

        let base = naming::date_field(&qualifier)
            .map_or_else(|| naming::generic_field("date", &qualifier), str::to_string);

        if seg.element(2).as_deref() == Some("RD8") {
            match values::date_range(&raw) {
                Some((start, end)) => {
                    out.insert(format!("{base}_start"), Json::String(start));
                    out.insert(format!("{base}_end"), Json::String(end));
                }
                None => {
                    out.insert(base, Json::String(raw.clone()));
                    out.warn(
                        "malformed-date-range",
                        format!("expected CCYYMMDD-CCYYMMDD, got {raw:?}"),
                        &ctx.loop_id,
                    );
                }
            }
        } else {
            out.insert(base, values::date_value(&raw));
        }
        if naming::date_field(&qualifier).is_none() {
            out.insert("date_qualifier", Json::String(qualifier));
        }
        out
    }
}

struct Ins;

impl SegmentHandler for Ins {
    fn segment_id(&self) -> &'static str {
        "INS"
    }

    fn interpret(&self, seg: &SegmentView<'_>, _ctx: &LoopContext) -> HandlerOutput {
        let mut out = HandlerOutput::new();
        out.insert_opt("subscriber_indicator", seg.element(1).map(|v| Json::Bool(v == "Y")));
        if let Some(code) = seg.element(2) {
            insert_coded(&mut out, "relationship", CodeSet::Relationship, &code);
        }
        if let Some(code) = seg.element(3) {
            insert_coded(&mut out, "maintenance_type", CodeSet::MaintenanceType, &code);
        }
        out.insert_opt("maintenance_reason_code", seg.element(4).map(Json::String));
        out.insert_opt("benefit_status_code", seg.element(5).map(Json::String));
        out.insert_opt("employment_status_code", seg.element(8).map(Json::String));
        out
    }
}

struct Hd;

impl SegmentHandler for Hd {
    fn segment_id(&self) -> &'static str {
        "HD"
    }

    fn interpret(&self, seg: &SegmentView<'_>, _ctx: &LoopContext) -> HandlerOutput {
        let mut out = HandlerOutput::new();
        if let Some(code) = seg.element(1) {
            insert_coded(&mut out, "maintenance_type", CodeSet::MaintenanceType, &code);
        }
        if let Some(code) = seg.element(3) {
            insert_coded(&mut out, "insurance_line", CodeSet::InsuranceLine, &code);
        }
        out.insert_opt("plan_coverage_description", seg.element(4).map(Json::String));
        out.insert_opt("coverage_level_code", seg.element(5).map(Json::String));
        out
    }
}

struct Cob;

impl SegmentHandler for Cob {
    fn segment_id(&self) -> &'static str {
        "COB"
    }

    fn interpret(&self, seg: &SegmentView<'_>, _ctx: &LoopContext) -> HandlerOutput {
        let mut out = HandlerOutput::new();
        out.insert_opt("payer_responsibility", seg.element(1).map(Json::String));
        out.insert_opt("reference_identification", seg.element(2).map(Json::String));
        out.insert_opt("coordination_code", seg.element(3).map(Json::String));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::testutil::segment;

    #[test]
    fn test_hl_level_decoding() {
        let node = segment("HL", &["1", "", "20", "1"]);
        let view = SegmentView::new(&node);
        let out = Hl.interpret(&view, &LoopContext::for_loop("2000A", "billing_provider"));

        assert_eq!(out.fields.get("hierarchical_id"), Some(&Json::String("1".into())));
        assert_eq!(out.fields.get("level_code"), Some(&Json::String("20".into())));
        assert!(out.fields.get("level").is_some());
        assert_eq!(out.fields.get("has_children"), Some(&Json::Bool(true)));
    }

    #[test]
    fn test_clm_composite_place_and_frequency() {
        let node = segment("CLM", &["CLAIM001", "", "2000", "", "11:B:1", "Y", "A", "Y", "I"]);
        let view = SegmentView::new(&node);
        let out = Clm.interpret(&view, &LoopContext::for_loop("2300", "claim"));

        assert_eq!(out.fields.get("claim_id"), Some(&Json::String("CLAIM001".into())));
        assert_eq!(
            out.fields.get("place_of_service_code"),
            Some(&Json::String("11".into()))
        );
        assert_eq!(
            out.fields.get("place_of_service"),
            Some(&Json::String("Office".into()))
        );
        assert_eq!(out.fields.get("frequency_code"), Some(&Json::String("1".into())));
        assert_eq!(
            out.fields.get("total_charge_amount"),
            Some(&serde_json::json!(2000.0))
        );
    }

    #[test]
    fn test_hi_principal_and_additional_diagnoses() {
        let node = segment("HI", &["ABK:E119", "ABF:I10"]);
        let view = SegmentView::new(&node);
        let out = Hi.interpret(&view, &LoopContext::for_loop("2300", "claim"));

        assert_eq!(
            out.fields.get("principal_diagnosis"),
            Some(&Json::String("E119".into()))
        );
        let diagnoses = out.fields.get("diagnoses").unwrap().as_array().unwrap();
        assert_eq!(diagnoses.len(), 2);
        assert_eq!(diagnoses[1]["code"], "I10");
    }

    #[test]
    fn test_dtp_rd8_range_expansion() {
        let node = segment("DTP", &["434", "RD8", "20240101-20240105"]);
        let view = SegmentView::new(&node);
        let out = Dtp.interpret(&view, &LoopContext::for_loop("2300", "claim"));

        assert_eq!(
            out.fields.get("statement_date_start"),
            Some(&Json::String("2024-01-01".into()))
        );
        assert_eq!(
            out.fields.get("statement_date_end"),
            Some(&Json::String("2024-01-05".into()))
        );
        assert!(out.warnings.is_empty());
    }

    #[test]
    fn test_dtp_single_date() {
        let node = segment("DTP", &["472", "D8", "20240103"]);
        let view = SegmentView::new(&node);
        let out = Dtp.interpret(&view, &LoopContext::for_loop("2400", "service_line"));

        assert_eq!(
            out.fields.get("service_date"),
            Some(&Json::String("2024-01-03".into()))
        );
    }

    #[test]
    fn test_dtp_malformed_range_warns_and_keeps_raw() {
        let node = segment("DTP", &["434", "RD8", "20240101"]);
        let view = SegmentView::new(&node);
        let out = Dtp.interpret(&view, &LoopContext::for_loop("2300", "claim"));

        assert_eq!(
            out.fields.get("statement_date"),
            Some(&Json::String("20240101".into()))
        );
        assert_eq!(out.warnings.len(), 1);
        assert_eq!(out.warnings[0].code, "malformed-date-range");
    }

    #[test]
    fn test_sv1_professional_service() {
        let node = segment("SV1", &["HC:99213:25", "125", "UN", "1", "11", "", "1"]);
        let view = SegmentView::new(&node);
        let out = Sv1.interpret(&view, &LoopContext::for_loop("2400", "service_line"));

        assert_eq!(out.fields.get("procedure_code"), Some(&Json::String("99213".into())));
        assert_eq!(out.fields.get("modifiers"), Some(&serde_json::json!(["25"])));
        assert_eq!(out.fields.get("charge_amount"), Some(&serde_json::json!(125.0)));
        assert_eq!(
            out.fields.get("place_of_service"),
            Some(&Json::String("Office".into()))
        );
    }

    #[test]
    fn test_ins_subscriber_flag() {
        let node = segment("INS", &["Y", "18", "030", "XN", "A", "", "", "FT"]);
        let view = SegmentView::new(&node);
        let out = Ins.interpret(&view, &LoopContext::for_loop("2000", "member"));

        assert_eq!(out.fields.get("subscriber_indicator"), Some(&Json::Bool(true)));
        assert_eq!(out.fields.get("relationship_code"), Some(&Json::String("18".into())));
        assert!(out.fields.get("maintenance_type").is_some());
    }
}
