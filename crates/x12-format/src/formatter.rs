//! Structured formatter.
//!
//! Walks the generic parse tree depth-first and reshapes it into business
//! JSON: envelope metadata at the top level, one object per transaction,
//! loops nested under their stable names. A loop that occurs once becomes an
//! object; repeated occurrences become a list. Segment fields merge into the
//! enclosing loop object, with deterministic `_2`, `_3` suffixes on name
//! collisions.

use crate::registry::HandlerRegistry;
use crate::segment::{LoopContext, SegmentView};
use serde::Serialize;
use serde_json::{Map, Value as Json};
use tracing::debug;
use x12_ir::{Document, Node, NodeType, Warning};

/// Business-shaped output plus every anomaly accumulated along the way
#[derive(Debug, Serialize)]
pub struct StructuredDocument {
    /// The formatted document body
    pub body: Json,
    /// Non-fatal interpretation anomalies, with tree paths
    pub warnings: Vec<Warning>,
}

/// Reshapes a parse tree into structured JSON using a handler registry.
pub struct StructuredFormatter {
    registry: HandlerRegistry,
}

impl Default for StructuredFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl StructuredFormatter {
    /// Create a formatter with the standard 835/837/834 interpreters
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: HandlerRegistry::with_standard_handlers(),
        }
    }

    /// Create a formatter with a caller-supplied registry
    #[must_use]
    pub fn with_registry(registry: HandlerRegistry) -> Self {
        Self { registry }
    }

    /// Format a parsed document. Never fails: anomalies become warnings and
    /// raw values are retained.
    #[must_use]
    pub fn format(&self, document: &Document) -> StructuredDocument {
        let mut warnings = Vec::new();
        let mut body = Map::new();

        let meta = &document.metadata;
        insert_opt_str(&mut body, "transaction_type", meta.transaction_set.as_deref());
        insert_opt_str(&mut body, "x12_version", meta.version.as_deref());
        insert_opt_str(&mut body, "functional_group", meta.functional_group.as_deref());

        if let Some(isa) = document.root.find_child("ISA") {
            let fields = self.interpret_segment(isa, &LoopContext::header(), "interchange", &mut warnings);
            body.insert("interchange".to_string(), Json::Object(fields));
        }

        let mut transactions = Vec::new();
        let groups = document.root.find_children("functional_group");
        let transaction_nodes = groups
            .iter()
            .flat_map(|g| g.find_children("transaction"))
            // Transactions outside any functional group still format.
            .chain(document.root.find_children("transaction"));
        for (i, tx) in transaction_nodes.enumerate() {
            let path = format!("transactions[{i}]");
            transactions.push(Json::Object(self.format_container(tx, &path, &mut warnings)));
        }
        body.insert("transactions".to_string(), Json::Array(transactions));

        debug!(
            transactions = body["transactions"].as_array().map_or(0, Vec::len),
            warnings = warnings.len(),
            "formatted document"
        );

        StructuredDocument {
            body: Json::Object(body),
            warnings,
        }
    }

    /// Format a transaction or loop node into one JSON object.
    fn format_container(
        &self,
        node: &Node,
        path: &str,
        warnings: &mut Vec<Warning>,
    ) -> Map<String, Json> {
        let mut out = Map::new();

        if node.node_type == NodeType::Transaction {
            insert_opt_str(&mut out, "transaction_set", node.attribute("transaction_set"));
            insert_opt_str(&mut out, "control_number", node.attribute("control_number"));
        }

        let ctx = match node.node_type {
            NodeType::Loop => LoopContext::for_loop(
                node.attribute("loop_id").unwrap_or_default(),
                node.name.clone(),
            ),
            _ => LoopContext::header(),
        };

        // Loop children grouped by name, in first-appearance order.
        let mut loop_groups: Vec<(String, Vec<Json>)> = Vec::new();
        let mut prior_segment: Option<String> = None;

        for child in &node.children {
            match child.node_type {
                NodeType::Segment => {
                    // ST/SE bookkeeping already lives in the attributes.
                    if node.node_type == NodeType::Transaction
                        && matches!(child.name.as_str(), "ST" | "SE")
                    {
                        continue;
                    }
                    let mut ctx = ctx.clone();
                    ctx.prior_segment_id = prior_segment.clone();
                    let fields = self.interpret_segment(child, &ctx, path, warnings);
                    merge_fields(&mut out, fields);
                    prior_segment = Some(child.name.clone());
                }
                NodeType::Loop => {
                    let occurrence = loop_groups
                        .iter()
                        .find(|(name, _)| *name == child.name)
                        .map_or(0, |(_, v)| v.len());
                    let child_path = format!("{path}/{}[{occurrence}]", child.name);
                    let formatted = Json::Object(self.format_container(child, &child_path, warnings));
                    match loop_groups.iter_mut().find(|(name, _)| *name == child.name) {
                        Some((_, instances)) => instances.push(formatted),
                        None => loop_groups.push((child.name.clone(), vec![formatted])),
                    }
                }
                _ => {}
            }
        }

        for (name, mut instances) in loop_groups {
            let value = if instances.len() == 1 {
                instances.remove(0)
            } else {
                Json::Array(instances)
            };
            merge_one(&mut out, name, value);
        }

        out
    }

    fn interpret_segment(
        &self,
        node: &Node,
        ctx: &LoopContext,
        path: &str,
        warnings: &mut Vec<Warning>,
    ) -> Map<String, Json> {
        let view = SegmentView::new(node);
        let mut output = self.registry.interpret(&view, ctx);
        for mut warning in output.warnings.drain(..) {
            warning.path = format!("{path}/{}", node.name);
            warnings.push(warning);
        }
        output.fields
    }
}

fn insert_opt_str(target: &mut Map<String, Json>, key: &str, value: Option<&str>) {
    if let Some(value) = value {
        target.insert(key.to_string(), Json::String(value.to_string()));
    }
}

/// Merge fields into a target object, suffixing colliding names with `_2`,
/// `_3`, ... so repeated sibling segments never overwrite each other.
fn merge_fields(target: &mut Map<String, Json>, fields: Map<String, Json>) {
    for (key, value) in fields {
        merge_one(target, key, value);
    }
}

fn merge_one(target: &mut Map<String, Json>, key: String, value: Json) {
    if !target.contains_key(&key) {
        target.insert(key, value);
        return;
    }
    for n in 2.. {
        let candidate = format!("{key}_{n}");
        if !target.contains_key(&candidate) {
            target.insert(candidate, value);
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use x12_parser::X12Parser;

    const ISA: &str = "ISA*00*          *00*          *ZZ*SENDERID       *ZZ*RECEIVERID     \
*240101*1230*^*00501*000000001*0*P*:~";

    fn remittance() -> String {
        format!(
            "{ISA}\
GS*HP*PAYERID*PROVID*20240101*1230*1*X*005010X221A1~\
ST*835*0001~\
BPR*I*810.8*C*ACH~\
TRN*1*CHECK123*1999999999~\
DTM*405*20240101~\
N1*PR*ACME HEALTH PLAN~\
N4*METROPOLIS*NY*10001~\
N1*PE*GOOD CLINIC*XX*1234567890~\
LX*1~\
CLP*PATACCT1*1*100*80**12*ICN001*11*1~\
CAS*CO*45*20~\
NM1*QC*1*DOE*JANE~\
SVC*HC:99213:26*100*80~\
DTM*472*20240102~\
CLP*PATACCT2*4*200*0**12*ICN002~\
CAS*PR*197*200~\
SE*16*0001~\
GE*1*1~\
IEA*1*000000001~"
        )
    }

    fn format_remittance() -> StructuredDocument {
        let outcome = X12Parser::new().parse(&remittance()).unwrap();
        StructuredFormatter::new().format(&outcome.document)
    }

    #[test]
    fn test_top_level_shape() {
        let structured = format_remittance();
        let body = structured.body.as_object().unwrap();

        assert_eq!(body["transaction_type"], "835");
        assert_eq!(body["x12_version"], "005010X221A1");
        assert_eq!(body["functional_group"], "HP");
        assert_eq!(body["interchange"]["sender_id"], "SENDERID");
        assert_eq!(body["transactions"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_header_fields_merge_into_transaction() {
        let structured = format_remittance();
        let tx = &structured.body["transactions"][0];

        assert_eq!(tx["control_number"], "0001");
        assert_eq!(tx["payment_amount"], serde_json::json!(810.8));
        assert_eq!(tx["payment_method_code"], "ACH");
        assert_eq!(tx["check_or_eft_number"], "CHECK123");
        assert_eq!(tx["production_date"], "2024-01-01");
    }

    #[test]
    fn test_single_loop_is_object_repeated_is_list() {
        let structured = format_remittance();
        let tx = &structured.body["transactions"][0];

        // one payer loop: object
        assert_eq!(tx["payer_identification"]["name"], "ACME HEALTH PLAN");
        assert_eq!(tx["payer_identification"]["city"], "METROPOLIS");

        // two claims under the single LX: list
        let claims = tx["header_number"]["claim_payment"].as_array().unwrap();
        assert_eq!(claims.len(), 2);
        assert_eq!(claims[0]["patient_account_number"], "PATACCT1");
        assert_eq!(claims[1]["patient_account_number"], "PATACCT2");
        assert_eq!(claims[1]["claim_status"], "Denied");
    }

    #[test]
    fn test_nested_service_payment() {
        let structured = format_remittance();
        let claims = &structured.body["transactions"][0]["header_number"]["claim_payment"];

        let service = &claims[0]["service_payment"];
        assert_eq!(service["procedure_code"], "99213");
        assert_eq!(service["modifiers"], serde_json::json!(["26"]));
        assert_eq!(service["service_date"], "2024-01-02");

        let adjustments = claims[0]["adjustments"].as_array().unwrap();
        assert_eq!(adjustments[0]["reason_code"], "45");
    }

    #[test]
    fn test_collision_suffixes_are_deterministic() {
        let doc = remittance().replace(
            "NM1*QC*1*DOE*JANE~",
            "NM1*QC*1*DOE*JANE~REF*EV*FIRST~REF*EV*SECOND~",
        );
        let outcome = X12Parser::new().parse(&doc).unwrap();
        let structured = StructuredFormatter::new().format(&outcome.document);
        let claim = &structured.body["transactions"][0]["header_number"]["claim_payment"][0];

        assert_eq!(claim["receiver_identification"], "FIRST");
        assert_eq!(claim["receiver_identification_2"], "SECOND");
    }

    #[test]
    fn test_unmapped_segment_formats_with_generic_names() {
        let doc = remittance().replace("CAS*CO*45*20~", "CAS*CO*45*20~ZZZ*A*B~");
        let outcome = X12Parser::new().parse(&doc).unwrap();
        let structured = StructuredFormatter::new().format(&outcome.document);
        let claim = &structured.body["transactions"][0]["header_number"]["claim_payment"][0];

        assert_eq!(claim["zzz_01"], "A");
        assert_eq!(claim["zzz_02"], "B");
    }

    #[test]
    fn test_handler_warnings_carry_paths() {
        let doc = remittance().replace("CAS*PR*197*200~", "CAS*PR~");
        let outcome = X12Parser::new().parse(&doc).unwrap();
        let structured = StructuredFormatter::new().format(&outcome.document);

        let warning = structured
            .warnings
            .iter()
            .find(|w| w.code == "empty-adjustment")
            .unwrap();
        assert!(warning.path.contains("claim_payment[1]"), "path: {}", warning.path);
        assert!(warning.path.ends_with("/CAS"));
    }

    #[test]
    fn test_formatting_is_idempotent() {
        let outcome = X12Parser::new().parse(&remittance()).unwrap();
        let formatter = StructuredFormatter::new();
        let first = formatter.format(&outcome.document);
        let second = formatter.format(&outcome.document);

        assert_eq!(first.body, second.body);
        assert_eq!(first.warnings.len(), second.warnings.len());
    }
}
