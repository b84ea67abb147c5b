//! 834 Benefit Enrollment and Maintenance (005010X220) loop grammar.

use crate::model::{LoopDef, Repeat, TransactionGrammar, Trigger, Usage};

pub(crate) static GRAMMAR_834: TransactionGrammar = TransactionGrammar {
    transaction_set: "834",
    version: "005010",
    name: "Benefit Enrollment and Maintenance",
    segments: &["BGN", "REF", "DTP", "QTY"],
    loops: &[
        LoopDef {
            id: "1000A",
            name: "sponsor",
            parents: &[],
            trigger: Trigger::qualified("N1", 1, &["P5"]),
            repeat: Repeat::Once,
            usage: Usage::Required,
            hl_level: None,
            segments: &[],
        },
        LoopDef {
            id: "1000B",
            name: "payer",
            parents: &[],
            trigger: Trigger::qualified("N1", 1, &["IN"]),
            repeat: Repeat::Once,
            usage: Usage::Required,
            hl_level: None,
            segments: &[],
        },
        LoopDef {
            id: "1000C",
            name: "broker",
            parents: &[],
            trigger: Trigger::qualified("N1", 1, &["BO", "TV"]),
            repeat: Repeat::Once,
            usage: Usage::Optional,
            hl_level: None,
            segments: &[],
        },
        LoopDef {
            id: "2000",
            name: "member",
            parents: &[],
            trigger: Trigger::on("INS"),
            repeat: Repeat::Many,
            usage: Usage::Required,
            hl_level: None,
            segments: &["REF", "DTP"],
        },
        LoopDef {
            id: "2100A",
            name: "member_name",
            parents: &["2000"],
            trigger: Trigger::qualified("NM1", 1, &["IL", "74"]),
            repeat: Repeat::Once,
            usage: Usage::Required,
            hl_level: None,
            segments: &["PER", "N3", "N4", "DMG", "EC", "ICM", "AMT", "HLH", "LUI"],
        },
        LoopDef {
            id: "2100C",
            name: "member_mailing_address",
            parents: &["2000"],
            trigger: Trigger::qualified("NM1", 1, &["31"]),
            repeat: Repeat::Once,
            usage: Usage::Optional,
            hl_level: None,
            segments: &["N3", "N4"],
        },
        LoopDef {
            id: "2100D",
            name: "member_employer",
            parents: &["2000"],
            trigger: Trigger::qualified("NM1", 1, &["36"]),
            repeat: Repeat::Once,
            usage: Usage::Optional,
            hl_level: None,
            segments: &["PER", "N3", "N4"],
        },
        LoopDef {
            id: "2300",
            name: "health_coverage",
            parents: &["2000"],
            trigger: Trigger::on("HD"),
            repeat: Repeat::Many,
            usage: Usage::Optional,
            hl_level: None,
            segments: &["DTP", "AMT", "REF", "IDC"],
        },
        LoopDef {
            id: "2310",
            name: "provider_information",
            parents: &["2300"],
            trigger: Trigger::on("LX"),
            repeat: Repeat::Many,
            usage: Usage::Optional,
            hl_level: None,
            segments: &["NM1", "N3", "N4", "PER"],
        },
        LoopDef {
            id: "2320",
            name: "coordination_of_benefits",
            parents: &["2300"],
            trigger: Trigger::on("COB"),
            repeat: Repeat::Many,
            usage: Usage::Optional,
            hl_level: None,
            segments: &["REF", "DTP"],
        },
    ],
    hl_priority: &[],
};
