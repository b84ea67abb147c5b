//! End-to-end parse tests over full 835, 837P, and 834 documents

use x12_parser::{Error, X12Parser};

const ISA: &str = "ISA*00*          *00*          *ZZ*SENDERID       *ZZ*RECEIVERID     \
*240101*1230*^*00501*000000001*0*P*:~";

fn remittance_835() -> String {
    format!(
        "{ISA}\n\
GS*HP*PAYERID*PROVID*20240101*1230*1*X*005010X221A1~\n\
ST*835*0001~\n\
BPR*I*810.8*C*ACH*CCP~\n\
TRN*1*CHECK123*1999999999~\n\
DTM*405*20240101~\n\
N1*PR*ACME HEALTH PLAN~\n\
N3*123 PAYER WAY~\n\
N4*METROPOLIS*NY*10001~\n\
N1*PE*GOOD CLINIC*XX*1234567890~\n\
LX*1~\n\
CLP*PATACCT1*1*100*80**12*ICN001*11*1~\n\
CAS*CO*45*20~\n\
NM1*QC*1*DOE*JANE~\n\
SVC*HC:99213:26*100*80~\n\
DTM*472*20240102~\n\
PLB*1234567890*20241231*WO:CLAIM88*25.5~\n\
SE*16*0001~\n\
GE*1*1~\n\
IEA*1*000000001~\n"
    )
}

fn claim_837p() -> String {
    format!(
        "{ISA}\n\
GS*HC*SUBMITID*RECVID*20240105*1144*1*X*005010X222A1~\n\
ST*837*0001~\n\
BHT*0019*00*REF123*20240105*1144*CH~\n\
NM1*41*2*SUBMITTER INC~\n\
PER*IC*JANE*TE*5551234567~\n\
NM1*40*2*CLEARINGHOUSE~\n\
HL*1**20*1~\n\
PRV*BI*PXC*207Q00000X~\n\
NM1*85*2*GOOD CLINIC*****XX*1234567890~\n\
N3*100 MAIN ST~\n\
N4*METROPOLIS*NY*10001~\n\
HL*2*1*22*1~\n\
SBR*P********CI~\n\
NM1*IL*1*DOE*JOHN~\n\
NM1*PR*2*ACME HEALTH PLAN~\n\
HL*3*2*23*0~\n\
PAT*19~\n\
NM1*QC*1*DOE*JANE~\n\
CLM*CLAIM001*250***11:B:1*Y*A*Y*I~\n\
HI*ABK:E119~\n\
LX*1~\n\
SV1*HC:99213:25*125*UN*1*11**1~\n\
DTP*472*D8*20240103~\n\
LX*2~\n\
SV1*HC:87070*125*UN*1~\n\
DTP*472*D8*20240103~\n\
SE*25*0001~\n\
GE*1*1~\n\
IEA*1*000000001~\n"
    )
}

fn enrollment_834() -> String {
    format!(
        "{ISA}\n\
GS*BE*SPONSOR*PAYER*20240101*1230*1*X*005010X220A1~\n\
ST*834*0001~\n\
BGN*00*REF123*20240101*1230****4~\n\
REF*38*GROUP123~\n\
N1*P5*EMPLOYER INC*FI*123456789~\n\
N1*IN*ACME HEALTH*FI*987654321~\n\
INS*Y*18*030*XN*A***FT~\n\
REF*0F*SUBSCRIBER123~\n\
DTP*336*D8*20200101~\n\
NM1*IL*1*SMITH*PAT*A***34*111223333~\n\
PER*IP**HP*7172343334~\n\
N3*100 MARKET ST~\n\
N4*CAMP HILL*PA*17011~\n\
DMG*D8*19800115*F~\n\
HD*030**HLT*PLAN A*EMP~\n\
DTP*348*D8*20240101~\n\
SE*16*0001~\n\
GE*1*1~\n\
IEA*1*000000001~\n"
    )
}

fn transaction(outcome: &x12_parser::ParseOutcome) -> &x12_ir::Node {
    outcome
        .document
        .root
        .find_child("functional_group")
        .expect("functional group")
        .find_child("transaction")
        .expect("transaction")
}

#[test]
fn test_835_parses_without_warnings() {
    let outcome = X12Parser::new().parse(&remittance_835()).unwrap();
    assert!(outcome.warnings.is_empty(), "{:?}", outcome.warnings);
    assert_eq!(
        outcome.document.metadata.transaction_set.as_deref(),
        Some("835")
    );
}

#[test]
fn test_totality_across_transaction_sets() {
    for doc in [remittance_835(), claim_837p(), enrollment_834()] {
        let segment_count = doc.matches('~').count();
        let outcome = X12Parser::new().parse(&doc).unwrap();
        assert_eq!(outcome.document.segment_count(), segment_count);
    }
}

#[test]
fn test_837_hierarchical_nesting() {
    let outcome = X12Parser::new().parse(&claim_837p()).unwrap();
    let tx = transaction(&outcome);

    let billing = tx.find_child("billing_provider").expect("billing provider");
    assert!(billing.find_child("PRV").is_some());
    assert!(billing.find_child("billing_provider_name").is_some());

    let subscriber = billing.find_child("subscriber").expect("subscriber");
    assert!(subscriber.find_child("SBR").is_some());
    assert!(subscriber.find_child("subscriber_name").is_some());
    assert!(subscriber.find_child("payer_name").is_some());

    let patient = subscriber.find_child("patient").expect("patient");
    assert!(patient.find_child("PAT").is_some());

    // claim hangs off the patient level when the patient is not the
    // subscriber
    let claim = patient.find_child("claim").expect("claim");
    assert!(claim.find_child("CLM").is_some());
    assert!(claim.find_child("HI").is_some());
    assert_eq!(claim.find_children("service_line").len(), 2);
}

#[test]
fn test_834_member_loops() {
    let outcome = X12Parser::new().parse(&enrollment_834()).unwrap();
    let tx = transaction(&outcome);

    assert!(tx.find_child("sponsor").is_some());
    assert!(tx.find_child("payer").is_some());

    let member = tx.find_child("member").expect("member loop");
    assert!(member.find_child("INS").is_some());
    assert!(member.find_child("REF").is_some());

    let name = member.find_child("member_name").expect("member name loop");
    assert!(name.find_child("DMG").is_some());

    let coverage = member.find_child("health_coverage").expect("coverage loop");
    assert!(coverage.find_child("HD").is_some());
    assert!(coverage.find_child("DTP").is_some());
}

#[test]
fn test_delimiter_independence() {
    let default_doc = remittance_835();
    // Same logical content with '|' elements and '!' terminators; the ISA
    // header re-declares both at its fixed positions.
    let odd_doc = default_doc.replace('*', "|").replace('~', "!");

    let default_outcome = X12Parser::new().parse(&default_doc).unwrap();
    let odd_outcome = X12Parser::new().parse(&odd_doc).unwrap();

    assert_eq!(
        default_outcome.document.segment_count(),
        odd_outcome.document.segment_count()
    );

    let default_tx = transaction(&default_outcome);
    let odd_tx = transaction(&odd_outcome);
    assert_eq!(
        default_tx.find_child("header_number").is_some(),
        odd_tx.find_child("header_number").is_some()
    );

    let default_names: Vec<_> = default_tx.children.iter().map(|c| &c.name).collect();
    let odd_names: Vec<_> = odd_tx.children.iter().map(|c| &c.name).collect();
    assert_eq!(default_names, odd_names);
}

#[test]
fn test_document_serializes_to_json() {
    let outcome = X12Parser::new().parse(&remittance_835()).unwrap();
    let json = serde_json::to_value(&outcome.document).unwrap();

    assert_eq!(json["metadata"]["transaction_set"], "835");
    assert_eq!(json["root"]["name"], "interchange");
}

#[test]
fn test_truncated_envelope_is_fatal() {
    let err = X12Parser::new().parse("ISA*00*bad~").unwrap_err();
    assert!(matches!(err, Error::MalformedEnvelope { .. }));
}

#[test]
fn test_multiple_transactions_in_one_group() {
    let two_tx = remittance_835().replace(
        "GE*1*1~",
        "ST*835*0002~\nBPR*I*5*C*CHK~\nSE*3*0002~\nGE*2*1~",
    );
    let outcome = X12Parser::new().parse(&two_tx).unwrap();
    let group = outcome
        .document
        .root
        .find_child("functional_group")
        .unwrap();

    assert_eq!(group.find_children("transaction").len(), 2);
    assert_eq!(
        outcome.document.metadata.transaction_controls,
        vec!["0001".to_string(), "0002".to_string()]
    );
}
