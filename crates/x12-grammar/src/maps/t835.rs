//! 835 Health Care Claim Payment/Advice (005010X221) loop grammar.

use crate::model::{LoopDef, Repeat, TransactionGrammar, Trigger, Usage};

pub(crate) static GRAMMAR_835: TransactionGrammar = TransactionGrammar {
    transaction_set: "835",
    version: "005010",
    name: "Health Care Claim Payment/Advice",
    segments: &["BPR", "TRN", "CUR", "REF", "DTM", "PLB"],
    loops: &[
        LoopDef {
            id: "1000A",
            name: "payer_identification",
            parents: &[],
            trigger: Trigger::qualified("N1", 1, &["PR"]),
            repeat: Repeat::Once,
            usage: Usage::Required,
            hl_level: None,
            segments: &["N3", "N4", "REF", "PER"],
        },
        LoopDef {
            id: "1000B",
            name: "payee_identification",
            parents: &[],
            trigger: Trigger::qualified("N1", 1, &["PE"]),
            repeat: Repeat::Once,
            usage: Usage::Required,
            hl_level: None,
            segments: &["N3", "N4", "REF", "RDM"],
        },
        LoopDef {
            id: "2000",
            name: "header_number",
            parents: &[],
            trigger: Trigger::on("LX"),
            repeat: Repeat::Many,
            usage: Usage::Optional,
            hl_level: None,
            segments: &["TS3", "TS2"],
        },
        LoopDef {
            id: "2100",
            name: "claim_payment",
            parents: &["2000"],
            trigger: Trigger::on("CLP"),
            repeat: Repeat::Many,
            usage: Usage::Required,
            hl_level: None,
            segments: &[
                "CAS", "NM1", "MIA", "MOA", "REF", "DTM", "PER", "AMT", "QTY",
            ],
        },
        LoopDef {
            id: "2110",
            name: "service_payment",
            parents: &["2100"],
            trigger: Trigger::on("SVC"),
            repeat: Repeat::Many,
            usage: Usage::Optional,
            hl_level: None,
            segments: &["DTM", "CAS", "REF", "AMT", "QTY", "LQ"],
        },
    ],
    hl_priority: &[],
};
