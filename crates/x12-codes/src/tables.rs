//! Static code→description tables.
//!
//! Source data follows the Washington Publishing Company code lists as
//! carried by common 835/837/834 implementations. Tables are intentionally
//! partial: unknown codes fall back to the raw value at lookup time, so a
//! missing entry is never an error.

/// Claim adjustment reason codes (CARC), CAS02/05/08/11/14/17
pub(crate) static CLAIM_ADJUSTMENT_REASON: &[(&str, &str)] = &[
    ("1", "Deductible amount"),
    ("2", "Coinsurance amount"),
    ("3", "Co-payment amount"),
    ("4", "The procedure code is inconsistent with the modifier used"),
    ("5", "The procedure code/type of bill is inconsistent with the place of service"),
    ("6", "The procedure/revenue code is inconsistent with the patient's age"),
    ("11", "The diagnosis is inconsistent with the procedure"),
    ("16", "Claim/service lacks information or has submission/billing error(s)"),
    ("18", "Exact duplicate claim/service"),
    ("22", "This care may be covered by another payer per coordination of benefits"),
    ("23", "The impact of prior payer(s) adjudication including payments and/or adjustments"),
    ("26", "Expenses incurred prior to coverage"),
    ("27", "Expenses incurred after coverage terminated"),
    ("29", "The time limit for filing has expired"),
    ("31", "Patient cannot be identified as our insured"),
    ("45", "Charge exceeds fee schedule/maximum allowable or contracted/legislated fee arrangement"),
    ("50", "These are non-covered services because this is not deemed a medical necessity by the payer"),
    ("51", "These are non-covered services because this is a pre-existing condition"),
    ("55", "Procedure/treatment/drug is deemed experimental/investigational by the payer"),
    ("58", "Treatment was deemed by the payer to have been rendered in an invalid place of service"),
    ("59", "Processed based on multiple or concurrent procedure rules"),
    ("96", "Non-covered charge(s)"),
    ("97", "The benefit for this service is included in the payment/allowance for another service/procedure"),
    ("109", "Claim/service not covered by this payer/contractor"),
    ("119", "Benefit maximum for this time period or occurrence has been reached"),
    ("131", "Claim specific negotiated discount"),
    ("136", "Failure to follow prior payer's coverage rules"),
    ("140", "Patient/Insured health identification number and name do not match"),
    ("146", "Diagnosis was invalid for the date(s) of service reported"),
    ("151", "Payment adjusted because the payer deems the information submitted does not support this many/frequency of services"),
    ("197", "Precertification/authorization/notification/pre-treatment absent"),
    ("198", "Precertification/notification/authorization/pre-treatment exceeded"),
    ("204", "This service/equipment/drug is not covered under the patient's current benefit plan"),
    ("226", "Information requested from the billing/rendering provider was not provided or insufficient/incomplete"),
    ("227", "Information requested from the patient/insured/responsible party was not provided or insufficient/incomplete"),
    ("242", "Services not provided by network/primary care providers"),
    ("253", "Sequestration - reduction in federal payment"),
    ("A1", "Claim/service denied"),
    ("B7", "This provider was not certified/eligible to be paid for this procedure/service on this date of service"),
    ("B13", "Previously paid. Payment for this claim/service may have been provided in a previous payment"),
];

/// Remittance advice remark codes (RARC), LQ02/MOA/MIA
pub(crate) static REMITTANCE_REMARK: &[(&str, &str)] = &[
    ("M15", "Separately billed services/tests have been bundled as they are considered components of the same procedure"),
    ("M25", "The information furnished does not substantiate the need for this level of service"),
    ("M51", "Missing/incomplete/invalid procedure code(s)"),
    ("M76", "Missing/incomplete/invalid diagnosis or condition"),
    ("M80", "Not covered when performed during the same session/date as a previously processed service for the patient"),
    ("MA01", "Alert: If you do not agree with what we approved for these services, you may appeal our decision"),
    ("MA04", "Secondary payment cannot be considered without the identity of or payment information from the primary payer"),
    ("MA130", "Your claim contains incomplete and/or invalid information, and no appeal rights are afforded"),
    ("N130", "Consult plan benefit documents/guidelines for information about restrictions for this service"),
    ("N179", "Additional information has been requested from the member"),
    ("N290", "Missing/incomplete/invalid rendering provider primary identifier"),
    ("N362", "The number of days or units of service exceeds our acceptable maximum"),
    ("N479", "Missing Explanation of Benefits (Coordination of Benefits or Medicare Secondary Payer)"),
    ("N522", "Duplicate of a claim processed, or to be processed, as a crossover claim"),
];

/// Place of service codes, CLP08 / SV105 / CLM05-1
pub(crate) static PLACE_OF_SERVICE: &[(&str, &str)] = &[
    ("01", "Pharmacy"),
    ("02", "Telehealth Provided Other than in Patient's Home"),
    ("10", "Telehealth Provided in Patient's Home"),
    ("11", "Office"),
    ("12", "Home"),
    ("13", "Assisted Living Facility"),
    ("15", "Mobile Unit"),
    ("17", "Walk-in Retail Health Clinic"),
    ("19", "Off Campus-Outpatient Hospital"),
    ("20", "Urgent Care Facility"),
    ("21", "Inpatient Hospital"),
    ("22", "On Campus-Outpatient Hospital"),
    ("23", "Emergency Room - Hospital"),
    ("24", "Ambulatory Surgical Center"),
    ("25", "Birthing Center"),
    ("31", "Skilled Nursing Facility"),
    ("32", "Nursing Facility"),
    ("33", "Custodial Care Facility"),
    ("34", "Hospice"),
    ("41", "Ambulance - Land"),
    ("49", "Independent Clinic"),
    ("50", "Federally Qualified Health Center"),
    ("51", "Inpatient Psychiatric Facility"),
    ("60", "Mass Immunization Center"),
    ("65", "End-Stage Renal Disease Treatment Facility"),
    ("71", "Public Health Clinic"),
    ("81", "Independent Laboratory"),
    ("99", "Other Place of Service"),
];

/// Claim status codes, CLP02
pub(crate) static CLAIM_STATUS: &[(&str, &str)] = &[
    ("1", "Processed as Primary"),
    ("2", "Processed as Secondary"),
    ("3", "Processed as Tertiary"),
    ("4", "Denied"),
    ("19", "Processed as Primary, Forwarded to Additional Payer(s)"),
    ("20", "Processed as Secondary, Forwarded to Additional Payer(s)"),
    ("21", "Processed as Tertiary, Forwarded to Additional Payer(s)"),
    ("22", "Reversal of Previous Payment"),
    ("23", "Not Our Claim, Forwarded to Additional Payer(s)"),
    ("25", "Predetermination Pricing Only - No Payment"),
];

/// Payment method codes, BPR04
pub(crate) static PAYMENT_METHOD: &[(&str, &str)] = &[
    ("ACH", "Automated Clearing House"),
    ("BOP", "Financial Institution Option"),
    ("CHK", "Check"),
    ("FWT", "Federal Reserve Funds/Wire Transfer"),
    ("NON", "Non-Payment Data"),
];

/// Transaction handling codes, BPR01
pub(crate) static TRANSACTION_HANDLING: &[(&str, &str)] = &[
    ("C", "Payment Accompanies Remittance Advice"),
    ("D", "Make Payment Only"),
    ("H", "Notification Only"),
    ("I", "Remittance Information Only"),
    ("P", "Prenotification of Future Transfers"),
    ("U", "Split Payment and Remittance"),
    ("X", "Handling Party's Option to Split Payment and Remittance"),
];

/// Claim filing indicator codes, CLP06 / SBR09
pub(crate) static FILING_INDICATOR: &[(&str, &str)] = &[
    ("11", "Other Non-Federal Programs"),
    ("12", "Preferred Provider Organization (PPO)"),
    ("13", "Point of Service (POS)"),
    ("14", "Exclusive Provider Organization (EPO)"),
    ("15", "Indemnity Insurance"),
    ("16", "Health Maintenance Organization (HMO) Medicare Risk"),
    ("17", "Dental Maintenance Organization"),
    ("AM", "Automobile Medical"),
    ("BL", "Blue Cross/Blue Shield"),
    ("CH", "CHAMPUS"),
    ("CI", "Commercial Insurance Co."),
    ("DS", "Disability"),
    ("FI", "Federal Employees Program"),
    ("HM", "Health Maintenance Organization"),
    ("LM", "Liability Medical"),
    ("MA", "Medicare Part A"),
    ("MB", "Medicare Part B"),
    ("MC", "Medicaid"),
    ("OF", "Other Federal Program"),
    ("TV", "Title V"),
    ("VA", "Veterans Affairs Plan"),
    ("WC", "Workers' Compensation Health Claim"),
    ("ZZ", "Mutually Defined"),
];

/// Claim adjustment group codes, CAS01
pub(crate) static ADJUSTMENT_GROUP: &[(&str, &str)] = &[
    ("CO", "Contractual Obligations"),
    ("CR", "Correction and Reversals"),
    ("OA", "Other Adjustments"),
    ("PI", "Payor Initiated Reductions"),
    ("PR", "Patient Responsibility"),
];

/// Entity identifier codes, NM101/N101
pub(crate) static ENTITY_IDENTIFIER: &[(&str, &str)] = &[
    ("03", "Dependent"),
    ("1P", "Provider"),
    ("2B", "Third-Party Administrator"),
    ("31", "Postal Mailing Address"),
    ("36", "Employer"),
    ("40", "Receiver"),
    ("41", "Submitter"),
    ("45", "Drop-off Location"),
    ("71", "Attending Physician"),
    ("72", "Operating Physician"),
    ("77", "Service Location"),
    ("82", "Rendering Provider"),
    ("85", "Billing Provider"),
    ("87", "Pay-to Provider"),
    ("DN", "Referring Provider"),
    ("DQ", "Supervising Physician"),
    ("GB", "Other Insured"),
    ("IL", "Insured or Subscriber"),
    ("IN", "Insurer"),
    ("LR", "Legal Representative"),
    ("P5", "Plan Sponsor"),
    ("PE", "Payee"),
    ("PR", "Payer"),
    ("QC", "Patient"),
    ("TT", "Transfer To"),
    ("TV", "Third Party Repricing Organization"),
];

/// Identification code qualifiers, NM108/N103
pub(crate) static ID_QUALIFIER: &[(&str, &str)] = &[
    ("24", "Employer's Identification Number"),
    ("34", "Social Security Number"),
    ("46", "Electronic Transmitter Identification Number (ETIN)"),
    ("FI", "Federal Taxpayer's Identification Number"),
    ("II", "Standard Unique Health Identifier"),
    ("MI", "Member Identification Number"),
    ("MR", "Medicaid Recipient Identification Number"),
    ("PC", "Provider Commercial Number"),
    ("PI", "Payor Identification"),
    ("SL", "State License Number"),
    ("XV", "Centers for Medicare and Medicaid Services PlanID"),
    ("XX", "Centers for Medicare and Medicaid Services National Provider Identifier"),
];

/// Date/time qualifiers, DTM01/DTP01
pub(crate) static DATE_QUALIFIER: &[(&str, &str)] = &[
    ("036", "Coverage Expiration"),
    ("050", "Received"),
    ("096", "Discharge"),
    ("150", "Service Period Start"),
    ("151", "Service Period End"),
    ("232", "Claim Statement Period Start"),
    ("233", "Claim Statement Period End"),
    ("291", "Plan"),
    ("304", "Latest Visit or Consultation"),
    ("336", "Employment Begin"),
    ("337", "Employment End"),
    ("338", "Medicare Begin"),
    ("348", "Benefit Begin"),
    ("349", "Benefit End"),
    ("356", "Eligibility Begin"),
    ("357", "Eligibility End"),
    ("405", "Production"),
    ("431", "Onset of Current Symptoms or Illness"),
    ("434", "Statement"),
    ("435", "Admission"),
    ("439", "Accident"),
    ("472", "Service"),
    ("573", "Date Claim Paid"),
];

/// Amount qualifier codes, AMT01
pub(crate) static AMOUNT_QUALIFIER: &[(&str, &str)] = &[
    ("A8", "Noncovered Charges - Actual"),
    ("AU", "Coverage Amount"),
    ("B6", "Allowed - Actual"),
    ("C5", "Estimated Amount Due - Per Day"),
    ("D", "Payor Amount Paid"),
    ("D8", "Discount Amount"),
    ("DY", "Per Day Limit"),
    ("EAF", "Amount Owed"),
    ("F4", "Postage Claimed"),
    ("F5", "Patient Amount Paid"),
    ("I", "Interest"),
    ("KH", "Deduction Amount"),
    ("NL", "Negative Ledger Balance"),
    ("T", "Tax"),
    ("T2", "Total Claim Before Taxes"),
    ("ZK", "Federal Medicare or Medicaid Payment Mandate - Category 1"),
];

/// Quantity qualifier codes, QTY01
pub(crate) static QUANTITY_QUALIFIER: &[(&str, &str)] = &[
    ("CA", "Covered - Actual"),
    ("CD", "Co-insured - Actual"),
    ("LA", "Life-time Reserve - Actual"),
    ("LE", "Life-time Reserve - Estimated"),
    ("NE", "Non-Covered - Estimated"),
    ("NR", "Not Replaced Blood Units"),
    ("OU", "Outlier Days"),
    ("PS", "Prescription"),
    ("VS", "Visits"),
    ("ZK", "Federal Medicare or Medicaid Payment Mandate - Category 1"),
];

/// Reference identification qualifiers, REF01
pub(crate) static REFERENCE_QUALIFIER: &[(&str, &str)] = &[
    ("0B", "State License Number"),
    ("0K", "Policy Form Identifying Number"),
    ("1L", "Group or Policy Number"),
    ("1W", "Member Identification Number"),
    ("28", "Employee Identification Number"),
    ("2U", "Payer Identification Number"),
    ("6P", "Group Number"),
    ("6R", "Provider Control Number"),
    ("BB", "Authorization Number"),
    ("CE", "Class of Contract Code"),
    ("D9", "Claim Number"),
    ("EA", "Medical Record Identification Number"),
    ("EV", "Receiver Identification Number"),
    ("F2", "Version Code - Local"),
    ("F8", "Original Reference Number"),
    ("G1", "Prior Authorization Number"),
    ("G2", "Provider Commercial Number"),
    ("HPI", "Centers for Medicare and Medicaid Services National Provider Identifier"),
    ("IG", "Insurance Policy Number"),
    ("LU", "Location Number"),
    ("PQ", "Payee Identification"),
    ("SY", "Social Security Number"),
    ("TJ", "Federal Taxpayer's Identification Number"),
];

/// Provider adjustment reason codes, PLB03-1
pub(crate) static PROVIDER_ADJUSTMENT_REASON: &[(&str, &str)] = &[
    ("50", "Late Charge"),
    ("51", "Interest Penalty Charge"),
    ("72", "Authorized Return"),
    ("90", "Early Payment Allowance"),
    ("AH", "Origination Fee"),
    ("AM", "Applied to Borrower's Account"),
    ("AP", "Acceleration of Benefits"),
    ("B2", "Rebate"),
    ("B3", "Recovery Allowance"),
    ("BD", "Bad Debt Adjustment"),
    ("BN", "Bonus"),
    ("C5", "Temporary Allowance"),
    ("CS", "Adjustment"),
    ("CT", "Capitation Interest"),
    ("CV", "Capital Passthru"),
    ("CW", "Certified Registered Nurse Anesthetist Passthru"),
    ("DM", "Direct Medical Education Passthru"),
    ("E3", "Withholding"),
    ("FB", "Forwarding Balance"),
    ("FC", "Fund Allocation"),
    ("GO", "Graduate Medical Education Passthru"),
    ("IP", "Incentive Premium Payment"),
    ("IR", "Internal Revenue Service Withholding"),
    ("IS", "Interim Settlement"),
    ("J1", "Nonreimbursable"),
    ("L3", "Penalty"),
    ("L6", "Interest Owed"),
    ("LE", "Levy"),
    ("LS", "Lump Sum"),
    ("OA", "Organ Acquisition Passthru"),
    ("OB", "Offset for Affiliated Providers"),
    ("PI", "Periodic Interim Payment"),
    ("PL", "Payment Final"),
    ("RA", "Retro-activity Adjustment"),
    ("RE", "Return on Equity"),
    ("SL", "Student Loan Repayment"),
    ("TL", "Third Party Liability"),
    ("WO", "Overpayment Recovery"),
    ("WU", "Unspecified Recovery"),
];

/// Hierarchical level codes, HL03
pub(crate) static HIERARCHICAL_LEVEL: &[(&str, &str)] = &[
    ("20", "Information Source"),
    ("21", "Information Receiver"),
    ("22", "Subscriber"),
    ("23", "Dependent"),
];

/// Claim frequency type codes, CLM05-3 / CLP09
pub(crate) static CLAIM_FREQUENCY: &[(&str, &str)] = &[
    ("1", "Original"),
    ("6", "Corrected"),
    ("7", "Replacement"),
    ("8", "Void"),
];

/// Individual relationship codes, INS02 / PAT01
pub(crate) static RELATIONSHIP: &[(&str, &str)] = &[
    ("01", "Spouse"),
    ("18", "Self"),
    ("19", "Child"),
    ("21", "Unknown"),
    ("34", "Other Adult"),
    ("53", "Life Partner"),
    ("G8", "Other Relationship"),
];

/// Maintenance type codes, INS03
pub(crate) static MAINTENANCE_TYPE: &[(&str, &str)] = &[
    ("001", "Change"),
    ("021", "Addition"),
    ("024", "Cancellation or Termination"),
    ("025", "Reinstatement"),
    ("030", "Audit or Compare"),
];

/// Insurance line codes, HD03
pub(crate) static INSURANCE_LINE: &[(&str, &str)] = &[
    ("AG", "Preventative Care/Wellness"),
    ("DEN", "Dental"),
    ("DCP", "Dental Capitation"),
    ("EPO", "Exclusive Provider Organization"),
    ("HE", "Hearing"),
    ("HLT", "Health"),
    ("HMO", "Health Maintenance Organization"),
    ("LTC", "Long-Term Care"),
    ("MM", "Major Medical"),
    ("PDG", "Prescription Drug"),
    ("POS", "Point of Service"),
    ("PPO", "Preferred Provider Organization"),
    ("VIS", "Vision"),
];
