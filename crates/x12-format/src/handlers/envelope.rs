//! Envelope and transaction-opening interpreters: ISA, GS, ST, SE, GE, IEA,
//! BHT (837), BGN (834).

use crate::registry::{HandlerOutput, HandlerRegistry, SegmentHandler};
use crate::segment::{LoopContext, SegmentView};
use crate::values;
use serde_json::Value as Json;

pub(crate) fn register(registry: &mut HandlerRegistry) {
    registry.register(Box::new(Isa));
    registry.register(Box::new(Gs));
    registry.register(Box::new(St));
    registry.register(Box::new(Se));
    registry.register(Box::new(Ge));
    registry.register(Box::new(Iea));
    registry.register(Box::new(Bht));
    registry.register(Box::new(Bgn));
}

fn trimmed(seg: &SegmentView<'_>, pos: usize) -> Option<String> {
    seg.element(pos)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

struct Isa;

impl SegmentHandler for Isa {
    fn segment_id(&self) -> &'static str {
        "ISA"
    }

    fn interpret(&self, seg: &SegmentView<'_>, _ctx: &LoopContext) -> HandlerOutput {
        let mut out = HandlerOutput::new();
        out.insert_opt("sender_qualifier", trimmed(seg, 5).map(Json::String));
        out.insert_opt("sender_id", trimmed(seg, 6).map(Json::String));
        out.insert_opt("receiver_qualifier", trimmed(seg, 7).map(Json::String));
        out.insert_opt("receiver_id", trimmed(seg, 8).map(Json::String));
        out.insert_opt(
            "date",
            trimmed(seg, 9).map(|v| values::date_value(&v)),
        );
        out.insert_opt(
            "time",
            trimmed(seg, 10).map(|v| values::time_value(&v)),
        );
        out.insert_opt("version", trimmed(seg, 12).map(Json::String));
        out.insert_opt("control_number", trimmed(seg, 13).map(Json::String));
        out.insert_opt("usage_indicator", trimmed(seg, 15).map(Json::String));
        out
    }
}

struct Gs;

impl SegmentHandler for Gs {
    fn segment_id(&self) -> &'static str {
        "GS"
    }

    fn interpret(&self, seg: &SegmentView<'_>, _ctx: &LoopContext) -> HandlerOutput {
        let mut out = HandlerOutput::new();
        out.insert_opt("functional_id_code", seg.element(1).map(Json::String));
        out.insert_opt("application_sender", seg.element(2).map(Json::String));
        out.insert_opt("application_receiver", seg.element(3).map(Json::String));
        out.insert_opt("date", seg.element(4).map(|v| values::date_value(&v)));
        out.insert_opt("time", seg.element(5).map(|v| values::time_value(&v)));
        out.insert_opt("control_number", seg.element(6).map(Json::String));
        out.insert_opt("version", seg.element(8).map(Json::String));
        out
    }
}

struct St;

impl SegmentHandler for St {
    fn segment_id(&self) -> &'static str {
        "ST"
    }

    fn interpret(&self, seg: &SegmentView<'_>, _ctx: &LoopContext) -> HandlerOutput {
        let mut out = HandlerOutput::new();
        out.insert_opt("transaction_set", seg.element(1).map(Json::String));
        out.insert_opt("control_number", seg.element(2).map(Json::String));
        out.insert_opt("implementation_reference", seg.element(3).map(Json::String));
        out
    }
}

struct Se;

impl SegmentHandler for Se {
    fn segment_id(&self) -> &'static str {
        "SE"
    }

    fn interpret(&self, seg: &SegmentView<'_>, _ctx: &LoopContext) -> HandlerOutput {
        let mut out = HandlerOutput::new();
        out.insert_opt(
            "segment_count",
            seg.element(1).map(|v| values::integer(&v)),
        );
        out.insert_opt("control_number", seg.element(2).map(Json::String));
        out
    }
}

struct Ge;

impl SegmentHandler for Ge {
    fn segment_id(&self) -> &'static str {
        "GE"
    }

    fn interpret(&self, seg: &SegmentView<'_>, _ctx: &LoopContext) -> HandlerOutput {
        let mut out = HandlerOutput::new();
        out.insert_opt(
            "transaction_count",
            seg.element(1).map(|v| values::integer(&v)),
        );
        out.insert_opt("control_number", seg.element(2).map(Json::String));
        out
    }
}

struct Iea;

impl SegmentHandler for Iea {
    fn segment_id(&self) -> &'static str {
        "IEA"
    }

    fn interpret(&self, seg: &SegmentView<'_>, _ctx: &LoopContext) -> HandlerOutput {
        let mut out = HandlerOutput::new();
        out.insert_opt("group_count", seg.element(1).map(|v| values::integer(&v)));
        out.insert_opt("control_number", seg.element(2).map(Json::String));
        out
    }
}

struct Bht;

impl SegmentHandler for Bht {
    fn segment_id(&self) -> &'static str {
        "BHT"
    }

    fn interpret(&self, seg: &SegmentView<'_>, _ctx: &LoopContext) -> HandlerOutput {
        let mut out = HandlerOutput::new();
        out.insert_opt(
            "hierarchical_structure_code",
            seg.element(1).map(Json::String),
        );
        out.insert_opt("purpose_code", seg.element(2).map(Json::String));
        out.insert_opt("reference_identification", seg.element(3).map(Json::String));
        out.insert_opt("date", seg.element(4).map(|v| values::date_value(&v)));
        out.insert_opt("time", seg.element(5).map(|v| values::time_value(&v)));
        out.insert_opt("transaction_type_code", seg.element(6).map(Json::String));
        out
    }
}

struct Bgn;

impl SegmentHandler for Bgn {
    fn segment_id(&self) -> &'static str {
        "BGN"
    }

    fn interpret(&self, seg: &SegmentView<'_>, _ctx: &LoopContext) -> HandlerOutput {
        let mut out = HandlerOutput::new();
        out.insert_opt("purpose_code", seg.element(1).map(Json::String));
        out.insert_opt("reference_identification", seg.element(2).map(Json::String));
        out.insert_opt("date", seg.element(3).map(|v| values::date_value(&v)));
        out.insert_opt("time", seg.element(4).map(|v| values::time_value(&v)));
        out.insert_opt("action_code", seg.element(8).map(Json::String));
        out
    }
}
