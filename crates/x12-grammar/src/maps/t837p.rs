//! 837 Health Care Claim: Professional (005010X222) loop grammar.
//!
//! The 837 nests through HL segments: billing provider (level 20) contains
//! subscribers (22), which may contain dependents (23). Claims hang off the
//! subscriber level, or the patient level when the patient is not the
//! subscriber.

use crate::model::{LoopDef, Repeat, TransactionGrammar, Trigger, Usage};

pub(crate) static GRAMMAR_837P: TransactionGrammar = TransactionGrammar {
    transaction_set: "837",
    version: "005010",
    name: "Health Care Claim: Professional",
    segments: &["BHT", "REF"],
    loops: &[
        LoopDef {
            id: "1000A",
            name: "submitter",
            parents: &[],
            trigger: Trigger::qualified("NM1", 1, &["41"]),
            repeat: Repeat::Once,
            usage: Usage::Required,
            hl_level: None,
            segments: &["PER"],
        },
        LoopDef {
            id: "1000B",
            name: "receiver",
            parents: &[],
            trigger: Trigger::qualified("NM1", 1, &["40"]),
            repeat: Repeat::Once,
            usage: Usage::Required,
            hl_level: None,
            segments: &[],
        },
        LoopDef {
            id: "2000A",
            name: "billing_provider",
            parents: &[],
            trigger: Trigger::on("HL"),
            repeat: Repeat::Many,
            usage: Usage::Required,
            hl_level: Some("20"),
            segments: &["PRV", "CUR"],
        },
        LoopDef {
            id: "2010AA",
            name: "billing_provider_name",
            parents: &["2000A"],
            trigger: Trigger::qualified("NM1", 1, &["85"]),
            repeat: Repeat::Once,
            usage: Usage::Required,
            hl_level: None,
            segments: &["N3", "N4", "REF", "PER"],
        },
        LoopDef {
            id: "2010AB",
            name: "pay_to_address",
            parents: &["2000A"],
            trigger: Trigger::qualified("NM1", 1, &["87"]),
            repeat: Repeat::Once,
            usage: Usage::Optional,
            hl_level: None,
            segments: &["N3", "N4"],
        },
        LoopDef {
            id: "2000B",
            name: "subscriber",
            parents: &["2000A"],
            trigger: Trigger::on("HL"),
            repeat: Repeat::Many,
            usage: Usage::Required,
            hl_level: Some("22"),
            segments: &["SBR", "PAT"],
        },
        LoopDef {
            id: "2010BA",
            name: "subscriber_name",
            parents: &["2000B"],
            trigger: Trigger::qualified("NM1", 1, &["IL"]),
            repeat: Repeat::Once,
            usage: Usage::Required,
            hl_level: None,
            segments: &["N3", "N4", "DMG", "REF", "PER"],
        },
        LoopDef {
            id: "2010BB",
            name: "payer_name",
            parents: &["2000B"],
            trigger: Trigger::qualified("NM1", 1, &["PR"]),
            repeat: Repeat::Once,
            usage: Usage::Required,
            hl_level: None,
            segments: &["N3", "N4", "REF"],
        },
        LoopDef {
            id: "2000C",
            name: "patient",
            parents: &["2000B"],
            trigger: Trigger::on("HL"),
            repeat: Repeat::Many,
            usage: Usage::Optional,
            hl_level: Some("23"),
            segments: &["PAT"],
        },
        LoopDef {
            id: "2010CA",
            name: "patient_name",
            parents: &["2000C"],
            trigger: Trigger::qualified("NM1", 1, &["QC"]),
            repeat: Repeat::Once,
            usage: Usage::Required,
            hl_level: None,
            segments: &["N3", "N4", "DMG", "REF", "PER"],
        },
        LoopDef {
            id: "2300",
            name: "claim",
            parents: &["2000B", "2000C"],
            trigger: Trigger::on("CLM"),
            repeat: Repeat::Many,
            usage: Usage::Optional,
            hl_level: None,
            segments: &["DTP", "REF", "NTE", "HI", "AMT", "CN1", "K3"],
        },
        LoopDef {
            id: "2310A",
            name: "referring_provider",
            parents: &["2300"],
            trigger: Trigger::qualified("NM1", 1, &["DN", "P3"]),
            repeat: Repeat::Many,
            usage: Usage::Optional,
            hl_level: None,
            segments: &["REF"],
        },
        LoopDef {
            id: "2310B",
            name: "rendering_provider",
            parents: &["2300"],
            trigger: Trigger::qualified("NM1", 1, &["82"]),
            repeat: Repeat::Once,
            usage: Usage::Optional,
            hl_level: None,
            segments: &["PRV", "REF"],
        },
        LoopDef {
            id: "2310C",
            name: "service_facility",
            parents: &["2300"],
            trigger: Trigger::qualified("NM1", 1, &["77"]),
            repeat: Repeat::Once,
            usage: Usage::Optional,
            hl_level: None,
            segments: &["N3", "N4", "REF"],
        },
        LoopDef {
            id: "2320",
            name: "other_subscriber",
            parents: &["2300"],
            trigger: Trigger::on("SBR"),
            repeat: Repeat::Many,
            usage: Usage::Optional,
            hl_level: None,
            segments: &["CAS", "AMT", "OI", "MOA"],
        },
        LoopDef {
            id: "2330A",
            name: "other_subscriber_name",
            parents: &["2320"],
            trigger: Trigger::qualified("NM1", 1, &["IL"]),
            repeat: Repeat::Once,
            usage: Usage::Required,
            hl_level: None,
            segments: &["N3", "N4", "REF"],
        },
        LoopDef {
            id: "2330B",
            name: "other_payer_name",
            parents: &["2320"],
            trigger: Trigger::qualified("NM1", 1, &["PR"]),
            repeat: Repeat::Once,
            usage: Usage::Required,
            hl_level: None,
            segments: &["N3", "N4", "DTP", "REF"],
        },
        LoopDef {
            id: "2400",
            name: "service_line",
            parents: &["2300"],
            trigger: Trigger::on("LX"),
            repeat: Repeat::Many,
            usage: Usage::Required,
            hl_level: None,
            segments: &["SV1", "SV5", "DTP", "REF", "AMT", "NTE", "PS1", "HCP", "QTY"],
        },
        LoopDef {
            id: "2420A",
            name: "line_rendering_provider",
            parents: &["2400"],
            trigger: Trigger::qualified("NM1", 1, &["82"]),
            repeat: Repeat::Once,
            usage: Usage::Optional,
            hl_level: None,
            segments: &["PRV", "REF"],
        },
        LoopDef {
            id: "2430",
            name: "line_adjudication",
            parents: &["2400"],
            trigger: Trigger::on("SVD"),
            repeat: Repeat::Many,
            usage: Usage::Optional,
            hl_level: None,
            segments: &["CAS", "DTP", "AMT"],
        },
    ],
    hl_priority: &["20", "22", "23"],
};
