//! Qualifier-driven interpreters: REF, DTM, AMT, QTY.
//!
//! These segments mean nothing without their leading qualifier; the field
//! name comes from the qualifier tables, with a deterministic generic name
//! and the raw qualifier preserved when the table has no entry.

use crate::naming;
use crate::registry::{HandlerOutput, HandlerRegistry, SegmentHandler};
use crate::segment::{LoopContext, SegmentView};
use crate::values;
use serde_json::Value as Json;

pub(crate) fn register(registry: &mut HandlerRegistry) {
    registry.register(Box::new(Ref));
    registry.register(Box::new(Dtm));
    registry.register(Box::new(Amt));
    registry.register(Box::new(Qty));
}

struct Ref;

impl SegmentHandler for Ref {
    fn segment_id(&self) -> &'static str {
        "REF"
    }

    fn interpret(&self, seg: &SegmentView<'_>, _ctx: &LoopContext) -> HandlerOutput {
        let mut out = HandlerOutput::new();
        let Some(qualifier) = seg.element(1) else {
            return out;
        };
        let Some(value) = seg.element(2) else {
            return out;
        };
        match naming::reference_field(&qualifier) {
            Some(name) => out.insert(name, Json::String(value)),
            None => {
                out.insert(
                    naming::generic_field("reference", &qualifier),
                    Json::String(value),
                );
                out.insert("reference_qualifier", Json::String(qualifier));
            }
        }
        out.insert_opt("description", seg.element(3).map(Json::String));
        out
    }
}

struct Dtm;

impl SegmentHandler for Dtm {
    fn segment_id(&self) -> &'static str {
        "DTM"
    }

    fn interpret(&self, seg: &SegmentView<'_>, _ctx: &LoopContext) -> HandlerOutput {
        let mut out = HandlerOutput::new();
        let Some(qualifier) = seg.element(1) else {
            return out;
        };
        let Some(raw) = seg.element(2) else {
            return out;
        };
        match naming::date_field(&qualifier) {
            Some(name) => out.insert(name, values::date_value(&raw)),
            None => {
                out.insert(
                    naming::generic_field("date", &qualifier),
                    values::date_value(&raw),
                );
                out.insert("date_qualifier", Json::String(qualifier));
            }
        }
        out
    }
}

struct Amt;

impl SegmentHandler for Amt {
    fn segment_id(&self) -> &'static str {
        "AMT"
    }

    fn interpret(&self, seg: &SegmentView<'_>, _ctx: &LoopContext) -> HandlerOutput {
        let mut out = HandlerOutput::new();
        let Some(qualifier) = seg.element(1) else {
            return out;
        };
        let Some(raw) = seg.element(2) else {
            return out;
        };
        match naming::amount_field(&qualifier) {
            Some(name) => out.insert(name, values::money(&raw)),
            None => {
                out.insert(
                    naming::generic_field("amount", &qualifier),
                    values::money(&raw),
                );
                out.insert("amount_qualifier", Json::String(qualifier));
            }
        }
        out
    }
}

struct Qty;

impl SegmentHandler for Qty {
    fn segment_id(&self) -> &'static str {
        "QTY"
    }

    fn interpret(&self, seg: &SegmentView<'_>, _ctx: &LoopContext) -> HandlerOutput {
        let mut out = HandlerOutput::new();
        let Some(qualifier) = seg.element(1) else {
            return out;
        };
        let Some(raw) = seg.element(2) else {
            return out;
        };
        match naming::quantity_field(&qualifier) {
            Some(name) => out.insert(name, values::money(&raw)),
            None => {
                out.insert(
                    naming::generic_field("quantity", &qualifier),
                    values::money(&raw),
                );
                out.insert("quantity_qualifier", Json::String(qualifier));
            }
        }
        out
    }
}
