//! Payment remittance interpreters: BPR, TRN, CUR, CLP, CAS, SVC, PLB,
//! MOA, MIA, LQ, LX, TS3.

use crate::handlers::insert_coded;
use crate::registry::{HandlerOutput, HandlerRegistry, SegmentHandler};
use crate::segment::{LoopContext, SegmentView};
use crate::values;
use serde_json::Value as Json;
use x12_codes::CodeSet;

pub(crate) fn register(registry: &mut HandlerRegistry) {
    registry.register(Box::new(Bpr));
    registry.register(Box::new(Trn));
    registry.register(Box::new(Cur));
    registry.register(Box::new(Clp));
    registry.register(Box::new(Cas));
    registry.register(Box::new(Svc));
    registry.register(Box::new(Plb));
    registry.register(Box::new(Moa));
    registry.register(Box::new(Mia));
    registry.register(Box::new(Lq));
    registry.register(Box::new(Lx));
    registry.register(Box::new(Ts3));
}

struct Bpr;

impl SegmentHandler for Bpr {
    fn segment_id(&self) -> &'static str {
        "BPR"
    }

    fn interpret(&self, seg: &SegmentView<'_>, _ctx: &LoopContext) -> HandlerOutput {
        let mut out = HandlerOutput::new();
        if let Some(code) = seg.element(1) {
            insert_coded(&mut out, "transaction_handling", CodeSet::TransactionHandling, &code);
        }
        out.insert_opt("payment_amount", seg.element(2).map(|v| values::money(&v)));
        out.insert_opt("credit_debit_flag", seg.element(3).map(Json::String));
        if let Some(code) = seg.element(4) {
            insert_coded(&mut out, "payment_method", CodeSet::PaymentMethod, &code);
        }
        out.insert_opt("payer_account_number", seg.element(9).map(Json::String));
        out.insert_opt("payer_identifier", seg.element(10).map(Json::String));
        out.insert_opt("payee_account_number", seg.element(15).map(Json::String));
        out.insert_opt("payment_date", seg.element(16).map(|v| values::date_value(&v)));
        out
    }
}

struct Trn;

impl SegmentHandler for Trn {
    fn segment_id(&self) -> &'static str {
        "TRN"
    }

    fn interpret(&self, seg: &SegmentView<'_>, _ctx: &LoopContext) -> HandlerOutput {
        let mut out = HandlerOutput::new();
        out.insert_opt("trace_type_code", seg.element(1).map(Json::String));
        out.insert_opt("check_or_eft_number", seg.element(2).map(Json::String));
        out.insert_opt("payer_identifier", seg.element(3).map(Json::String));
        out.insert_opt("originating_company_supplemental_code", seg.element(4).map(Json::String));
        out
    }
}

struct Cur;

impl SegmentHandler for Cur {
    fn segment_id(&self) -> &'static str {
        "CUR"
    }

    fn interpret(&self, seg: &SegmentView<'_>, _ctx: &LoopContext) -> HandlerOutput {
        let mut out = HandlerOutput::new();
        out.insert_opt("entity_code", seg.element(1).map(Json::String));
        out.insert_opt("currency_code", seg.element(2).map(Json::String));
        out
    }
}

struct Clp;

impl SegmentHandler for Clp {
    fn segment_id(&self) -> &'static str {
        "CLP"
    }

    fn interpret(&self, seg: &SegmentView<'_>, _ctx: &LoopContext) -> HandlerOutput {
        let mut out = HandlerOutput::new();
        out.insert_opt("patient_account_number", seg.element(1).map(Json::String));
        if let Some(code) = seg.element(2) {
            insert_coded(&mut out, "claim_status", CodeSet::ClaimStatus, &code);
        }
        out.insert_opt("total_charge_amount", seg.element(3).map(|v| values::money(&v)));
        out.insert_opt("payment_amount", seg.element(4).map(|v| values::money(&v)));
        out.insert_opt(
            "patient_responsibility_amount",
            seg.element(5).map(|v| values::money(&v)),
        );
        if let Some(code) = seg.element(6) {
            insert_coded(&mut out, "filing_indicator", CodeSet::FilingIndicator, &code);
        }
        out.insert_opt("payer_control_number", seg.element(7).map(Json::String));
        if let Some(code) = seg.element(8) {
            insert_coded(&mut out, "facility", CodeSet::PlaceOfService, &code);
        }
        out.insert_opt("frequency_code", seg.element(9).map(Json::String));
        out
    }
}

struct Cas;

impl SegmentHandler for Cas {
    fn segment_id(&self) -> &'static str {
        "CAS"
    }

    // CAS carries up to six reason/amount/quantity triples after the group
    // code, at element positions (2,3,4) through (17,18,19).
    fn interpret(&self, seg: &SegmentView<'_>, ctx: &LoopContext) -> HandlerOutput {
        let mut out = HandlerOutput::new();
        if let Some(group) = seg.element(1) {
            insert_coded(&mut out, "adjustment_group", CodeSet::AdjustmentGroup, &group);
        }

        let mut adjustments = Vec::new();
        for base in (2..=17).step_by(3) {
            let Some(reason) = seg.element(base) else {
                continue;
            };
            let mut entry = serde_json::Map::new();
            entry.insert("reason_code".to_string(), Json::String(reason.clone()));
            if let Some(desc) = x12_codes::lookup(CodeSet::ClaimAdjustmentReason, &reason) {
                entry.insert("reason".to_string(), Json::String(desc.to_string()));
            }
            if let Some(amount) = seg.element(base + 1) {
                entry.insert("amount".to_string(), values::money(&amount));
            }
            if let Some(quantity) = seg.element(base + 2) {
                entry.insert("quantity".to_string(), values::money(&quantity));
            }
            adjustments.push(Json::Object(entry));
        }
        if adjustments.is_empty() {
            out.warn(
                "empty-adjustment",
                "CAS segment carries no adjustment triples",
                &ctx.loop_id,
            );
        } else {
            out.insert("adjustments", Json::Array(adjustments));
        }
        out
    }
}

struct Svc;

impl SegmentHandler for Svc {
    fn segment_id(&self) -> &'static str {
        "SVC"
    }

    fn interpret(&self, seg: &SegmentView<'_>, _ctx: &LoopContext) -> HandlerOutput {
        let mut out = HandlerOutput::new();

        // SVC01 is a composite: qualifier, procedure code, then modifiers.
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
        out.insert_opt("payment_amount", seg.element(3).map(|v| values::money(&v)));
        out.insert_opt("revenue_code", seg.element(4).map(Json::String));
        out.insert_opt("units_paid", seg.element(5).map(|v| values::money(&v)));
        out.insert_opt("units_billed", seg.element(7).map(|v| values::money(&v)));
        out
    }
}

struct Plb;

impl SegmentHandler for Plb {
    fn segment_id(&self) -> &'static str {
        "PLB"
    }

    // Provider-level adjustments come in reason/amount pairs at positions
    // (3,4) through (13,14); the reason element is a composite of adjustment
    // code and an optional reference.
    fn interpret(&self, seg: &SegmentView<'_>, _ctx: &LoopContext) -> HandlerOutput {
        let mut out = HandlerOutput::new();
        out.insert_opt("provider_identifier", seg.element(1).map(Json::String));
        out.insert_opt("fiscal_period_date", seg.element(2).map(|v| values::date_value(&v)));

        let mut adjustments = Vec::new();
        for base in (3..=13).step_by(2) {
            let parts = seg.components(base);
            let Some(reason) = parts.first().filter(|p| !p.is_empty()) else {
                continue;
            };
            let mut entry = serde_json::Map::new();
            entry.insert("reason_code".to_string(), Json::String(reason.clone()));
            if let Some(desc) = x12_codes::lookup(CodeSet::ProviderAdjustmentReason, reason) {
                entry.insert("reason".to_string(), Json::String(desc.to_string()));
            }
            if let Some(reference) = parts.get(1).filter(|p| !p.is_empty()) {
                entry.insert("reference".to_string(), Json::String(reference.clone()));
            }
            if let Some(amount) = seg.element(base + 1) {
                entry.insert("amount".to_string(), values::money(&amount));
            }
            adjustments.push(Json::Object(entry));
        }
        if !adjustments.is_empty() {
            out.insert("adjustments", Json::Array(adjustments));
        }
        out
    }
}

struct Moa;

impl SegmentHandler for Moa {
    fn segment_id(&self) -> &'static str {
        "MOA"
    }

    fn interpret(&self, seg: &SegmentView<'_>, _ctx: &LoopContext) -> HandlerOutput {
        let mut out = HandlerOutput::new();
        out.insert_opt("reimbursement_rate", seg.element(1).map(|v| values::money(&v)));
        out.insert_opt("hcpcs_payable_amount", seg.element(2).map(|v| values::money(&v)));

        let mut remarks = Vec::new();
        for pos in 3..=7 {
            let Some(code) = seg.element(pos) else {
                continue;
            };
            let mut entry = serde_json::Map::new();
            entry.insert("code".to_string(), Json::String(code.clone()));
            if let Some(desc) = x12_codes::lookup(CodeSet::RemittanceRemark, &code) {
                entry.insert("remark".to_string(), Json::String(desc.to_string()));
            }
            remarks.push(Json::Object(entry));
        }
        if !remarks.is_empty() {
            out.insert("remark_codes", Json::Array(remarks));
        }
        out
    }
}

struct Mia;

impl SegmentHandler for Mia {
    fn segment_id(&self) -> &'static str {
        "MIA"
    }

    fn interpret(&self, seg: &SegmentView<'_>, _ctx: &LoopContext) -> HandlerOutput {
        let mut out = HandlerOutput::new();
        out.insert_opt("covered_days", seg.element(1).map(|v| values::integer(&v)));
        out.insert_opt("lifetime_psychiatric_days", seg.element(2).map(|v| values::integer(&v)));
        out.insert_opt("drg_amount", seg.element(3).map(|v| values::money(&v)));
        out.insert_opt("claim_payment_remark_code", seg.element(5).map(Json::String));
        out.insert_opt("disproportionate_share_amount", seg.element(6).map(|v| values::money(&v)));
        out
    }
}

struct Lq;

impl SegmentHandler for Lq {
    fn segment_id(&self) -> &'static str {
        "LQ"
    }

    fn interpret(&self, seg: &SegmentView<'_>, _ctx: &LoopContext) -> HandlerOutput {
        let mut out = HandlerOutput::new();
        out.insert_opt("code_list_qualifier", seg.element(1).map(Json::String));
        if let Some(code) = seg.element(2) {
            // HE-qualified LQ codes are remittance remark codes.
            if seg.element(1).as_deref() == Some("HE") {
                insert_coded(&mut out, "remark", CodeSet::RemittanceRemark, &code);
            } else {
                out.insert("industry_code", Json::String(code));
            }
        }
        out
    }
}

struct Lx;

impl SegmentHandler for Lx {
    fn segment_id(&self) -> &'static str {
        "LX"
    }

    fn interpret(&self, seg: &SegmentView<'_>, _ctx: &LoopContext) -> HandlerOutput {
        let mut out = HandlerOutput::new();
        out.insert_opt("assigned_number", seg.element(1).map(|v| values::integer(&v)));
        out
    }
}

struct Ts3;

impl SegmentHandler for Ts3 {
    fn segment_id(&self) -> &'static str {
        "TS3"
    }

    fn interpret(&self, seg: &SegmentView<'_>, _ctx: &LoopContext) -> HandlerOutput {
        let mut out = HandlerOutput::new();
        out.insert_opt("provider_identifier", seg.element(1).map(Json::String));
        if let Some(code) = seg.element(2) {
            insert_coded(&mut out, "facility", CodeSet::PlaceOfService, &code);
        }
        out.insert_opt(
            "fiscal_period_end",
            seg.element(3).map(|v| values::date_value(&v)),
        );
        out.insert_opt("claim_count", seg.element(4).map(|v| values::integer(&v)));
        out.insert_opt(
            "total_charge_amount",
            seg.element(5).map(|v| values::money(&v)),
        );
        out
    }
}
