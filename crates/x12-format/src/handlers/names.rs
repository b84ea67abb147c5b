//! Name, address, and contact interpreters: N1, N3, N4, NM1, PER, DMG, PRV,
//! NTE.

use crate::handlers::insert_coded;
use crate::registry::{HandlerOutput, HandlerRegistry, SegmentHandler};
use crate::segment::{LoopContext, SegmentView};
use crate::values;
use serde_json::Value as Json;
use x12_codes::CodeSet;

pub(crate) fn register(registry: &mut HandlerRegistry) {
    registry.register(Box::new(N1));
    registry.register(Box::new(N3));
    registry.register(Box::new(N4));
    registry.register(Box::new(Nm1));
    registry.register(Box::new(Per));
    registry.register(Box::new(Dmg));
    registry.register(Box::new(Prv));
    registry.register(Box::new(Nte));
}

struct N1;

impl SegmentHandler for N1 {
    fn segment_id(&self) -> &'static str {
        "N1"
    }

    fn interpret(&self, seg: &SegmentView<'_>, _ctx: &LoopContext) -> HandlerOutput {
        let mut out = HandlerOutput::new();
        if let Some(code) = seg.element(1) {
            insert_coded(&mut out, "entity", CodeSet::EntityIdentifier, &code);
        }
        out.insert_opt("name", seg.element(2).map(Json::String));
        if let Some(qual) = seg.element(3) {
            insert_coded(&mut out, "id_qualifier", CodeSet::IdQualifier, &qual);
        }
        out.insert_opt("identifier", seg.element(4).map(Json::String));
        out
    }
}

struct N3;

impl SegmentHandler for N3 {
    fn segment_id(&self) -> &'static str {
        "N3"
    }

    fn interpret(&self, seg: &SegmentView<'_>, _ctx: &LoopContext) -> HandlerOutput {
        let mut out = HandlerOutput::new();
        out.insert_opt("address_line_1", seg.element(1).map(Json::String));
        out.insert_opt("address_line_2", seg.element(2).map(Json::String));
        out
    }
}

struct N4;

impl SegmentHandler for N4 {
    fn segment_id(&self) -> &'static str {
        "N4"
    }

    fn interpret(&self, seg: &SegmentView<'_>, _ctx: &LoopContext) -> HandlerOutput {
        let mut out = HandlerOutput::new();
        out.insert_opt("city", seg.element(1).map(Json::String));
        out.insert_opt("state", seg.element(2).map(Json::String));
        out.insert_opt("postal_code", seg.element(3).map(Json::String));
        out.insert_opt("country_code", seg.element(4).map(Json::String));
        out
    }
}

struct Nm1;

impl SegmentHandler for Nm1 {
    fn segment_id(&self) -> &'static str {
        "NM1"
    }

    fn interpret(&self, seg: &SegmentView<'_>, _ctx: &LoopContext) -> HandlerOutput {
        let mut out = HandlerOutput::new();
        if let Some(code) = seg.element(1) {
            insert_coded(&mut out, "entity", CodeSet::EntityIdentifier, &code);
        }

        // NM102: 1 = person, 2 = non-person entity
        let is_person = seg.element(2).as_deref() == Some("1");
        out.insert_opt("entity_type", seg.element(2).map(Json::String));
        if is_person {
            out.insert_opt("last_name", seg.element(3).map(Json::String));
            out.insert_opt("first_name", seg.element(4).map(Json::String));
            out.insert_opt("middle_name", seg.element(5).map(Json::String));
            out.insert_opt("suffix", seg.element(7).map(Json::String));
        } else {
            out.insert_opt("organization_name", seg.element(3).map(Json::String));
        }

        if let Some(qual) = seg.element(8) {
            insert_coded(&mut out, "id_qualifier", CodeSet::IdQualifier, &qual);
        }
        out.insert_opt("identifier", seg.element(9).map(Json::String));
        out
    }
}

struct Per;

impl SegmentHandler for Per {
    fn segment_id(&self) -> &'static str {
        "PER"
    }

    fn interpret(&self, seg: &SegmentView<'_>, _ctx: &LoopContext) -> HandlerOutput {
        let mut out = HandlerOutput::new();
        out.insert_opt("contact_function_code", seg.element(1).map(Json::String));
        out.insert_opt("name", seg.element(2).map(Json::String));

        // Up to three qualifier/number pairs at (3,4) (5,6) (7,8).
        let mut contacts = Vec::new();
        for (qual_pos, num_pos) in [(3, 4), (5, 6), (7, 8)] {
            if let (Some(qual), Some(number)) = (seg.element(qual_pos), seg.element(num_pos)) {
                contacts.push(serde_json::json!({
                    "type": qual,
                    "number": number,
                }));
            }
        }
        if !contacts.is_empty() {
            out.insert("communications", Json::Array(contacts));
        }
        out
    }
}

struct Dmg;

impl SegmentHandler for Dmg {
    fn segment_id(&self) -> &'static str {
        "DMG"
    }

    fn interpret(&self, seg: &SegmentView<'_>, _ctx: &LoopContext) -> HandlerOutput {
        let mut out = HandlerOutput::new();
        out.insert_opt("format_qualifier", seg.element(1).map(Json::String));
        out.insert_opt(
            "birth_date",
            seg.element(2).map(|v| values::date_value(&v)),
        );
        out.insert_opt("gender", seg.element(3).map(Json::String));
        out
    }
}

struct Prv;

impl SegmentHandler for Prv {
    fn segment_id(&self) -> &'static str {
        "PRV"
    }

    fn interpret(&self, seg: &SegmentView<'_>, _ctx: &LoopContext) -> HandlerOutput {
        let mut out = HandlerOutput::new();
        out.insert_opt("provider_code", seg.element(1).map(Json::String));
        out.insert_opt("reference_qualifier", seg.element(2).map(Json::String));
        out.insert_opt("taxonomy_code", seg.element(3).map(Json::String));
        out
    }
}

struct Nte;

impl SegmentHandler for Nte {
    fn segment_id(&self) -> &'static str {
        "NTE"
    }

    fn interpret(&self, seg: &SegmentView<'_>, _ctx: &LoopContext) -> HandlerOutput {
        let mut out = HandlerOutput::new();
        out.insert_opt("note_reference_code", seg.element(1).map(Json::String));
        out.insert_opt("description", seg.element(2).map(Json::String));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::testutil::segment;

    #[test]
    fn test_n1_decodes_entity() {
        let node = segment("N1", &["PR", "ACME HEALTH PLAN"]);
        let view = SegmentView::new(&node);
        let out = N1.interpret(&view, &LoopContext::header());

        assert_eq!(out.fields.get("entity_code"), Some(&Json::String("PR".into())));
        assert_eq!(out.fields.get("entity"), Some(&Json::String("Payer".into())));
        assert_eq!(
            out.fields.get("name"),
            Some(&Json::String("ACME HEALTH PLAN".into()))
        );
    }

    #[test]
    fn test_nm1_person_vs_organization() {
        let person = segment("NM1", &["QC", "1", "DOE", "JANE", "A"]);
        let view = SegmentView::new(&person);
        let out = Nm1.interpret(&view, &LoopContext::for_loop("2100", "claim_payment"));
        assert_eq!(out.fields.get("last_name"), Some(&Json::String("DOE".into())));
        assert_eq!(out.fields.get("first_name"), Some(&Json::String("JANE".into())));

        let org = segment("NM1", &["PE", "2", "GOOD CLINIC", "", "", "", "", "XX", "1234567890"]);
        let view = SegmentView::new(&org);
        let out = Nm1.interpret(&view, &LoopContext::header());
        assert_eq!(
            out.fields.get("organization_name"),
            Some(&Json::String("GOOD CLINIC".into()))
        );
        assert_eq!(
            out.fields.get("identifier"),
            Some(&Json::String("1234567890".into()))
        );
        assert!(out.fields.get("id_qualifier").is_some());
    }

    #[test]
    fn test_nm1_unknown_entity_has_no_description() {
        let node = segment("NM1", &["Q9", "1", "SMITH"]);
        let view = SegmentView::new(&node);
        let out = Nm1.interpret(&view, &LoopContext::header());

        assert_eq!(out.fields.get("entity_code"), Some(&Json::String("Q9".into())));
        assert!(!out.fields.contains_key("entity"));
    }

    #[test]
    fn test_per_communication_pairs() {
        let node = segment("PER", &["IC", "BILLING DEPT", "TE", "5551234567", "EM", "a@b.co"]);
        let view = SegmentView::new(&node);
        let out = Per.interpret(&view, &LoopContext::header());

        let comms = out.fields.get("communications").unwrap().as_array().unwrap();
        assert_eq!(comms.len(), 2);
        assert_eq!(comms[0]["type"], "TE");
        assert_eq!(comms[1]["number"], "a@b.co");
    }

    #[test]
    fn test_dmg_birth_date() {
        let node = segment("DMG", &["D8", "19800115", "F"]);
        let view = SegmentView::new(&node);
        let out = Dmg.interpret(&view, &LoopContext::header());

        assert_eq!(
            out.fields.get("birth_date"),
            Some(&Json::String("1980-01-15".into()))
        );
        assert_eq!(out.fields.get("gender"), Some(&Json::String("F".into())));
    }
}
