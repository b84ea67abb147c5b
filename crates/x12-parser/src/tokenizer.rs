//! Delimiter discovery and segment/element splitting.
//!
//! X12 declares its own delimiters inside the fixed-format ISA header: the
//! element separator is the fourth character, the repetition separator sits
//! at ISA11, and the last two characters of the 106-byte header are the
//! sub-element separator and the segment terminator. Everything after the
//! header is split mechanically with those characters; no grammar knowledge
//! is involved here.

use crate::{Error, Result};
use x12_ir::{Position, Severity, Warning};

/// Fixed ISA header geometry (bytes)
const ISA_LENGTH: usize = 106;
const ELEMENT_SEPARATOR_POS: usize = 3;
const REPETITION_SEPARATOR_POS: usize = 82;
const COMPONENT_SEPARATOR_POS: usize = 104;
const SEGMENT_TERMINATOR_POS: usize = 105;

/// Separators discovered from the interchange header, immutable for the
/// lifetime of one document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiters {
    /// Element separator (ISA position 4)
    pub element: u8,
    /// Sub-element (component) separator (ISA16)
    pub component: u8,
    /// Segment terminator (the byte after ISA16)
    pub segment: u8,
    /// Repetition separator (ISA11); captured but repeats are not split
    pub repetition: u8,
}

impl Delimiters {
    /// Extract delimiters from the fixed positions of an ISA header.
    ///
    /// `isa` must be the document text starting at the `ISA` tag. Fails with
    /// [`Error::MalformedEnvelope`] when the header is too short or its
    /// separator positions hold implausible characters.
    pub fn from_isa(isa: &[u8], offset: usize) -> Result<Self> {
        if isa.len() < ISA_LENGTH {
            return Err(Error::malformed_envelope(
                format!(
                    "interchange header requires {ISA_LENGTH} characters, found {}",
                    isa.len()
                ),
                offset,
            ));
        }
        if &isa[0..3] != b"ISA" {
            return Err(Error::malformed_envelope(
                "document does not start with an ISA header",
                offset,
            ));
        }

        let element = isa[ELEMENT_SEPARATOR_POS];
        let component = isa[COMPONENT_SEPARATOR_POS];
        let segment = isa[SEGMENT_TERMINATOR_POS];
        let repetition = isa[REPETITION_SEPARATOR_POS];

        for (name, byte) in [
            ("element separator", element),
            ("sub-element separator", component),
            ("segment terminator", segment),
        ] {
            if byte.is_ascii_alphanumeric() {
                return Err(Error::malformed_envelope(
                    format!("{name} position holds alphanumeric byte '{}'", byte as char),
                    offset,
                ));
            }
        }
        if element == component {
            return Err(Error::malformed_envelope(
                "element and sub-element separators are identical",
                offset,
            ));
        }

        Ok(Self {
            element,
            component,
            segment,
            repetition,
        })
    }
}

/// A data element as split by the tokenizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawElement {
    /// Scalar value
    Scalar(String),
    /// Composite value (ordered components, split by the sub-element
    /// separator)
    Composite(Vec<String>),
}

impl RawElement {
    /// The element as a plain string; composites rejoin with ':'
    #[must_use]
    pub fn as_str(&self) -> String {
        match self {
            RawElement::Scalar(s) => s.clone(),
            RawElement::Composite(parts) => parts.join(":"),
        }
    }
}

/// One segment as split by the tokenizer
#[derive(Debug, Clone)]
pub struct RawSegment {
    /// Segment id (e.g. "CLP")
    pub id: String,
    /// Ordered elements following the id
    pub elements: Vec<RawElement>,
    /// Position of the segment within the source text
    pub position: Position,
}

impl RawSegment {
    /// Element value at a 1-based position; composites yield their first
    /// component (qualifier conventions place qualifiers in scalars)
    #[must_use]
    pub fn value_at(&self, pos: usize) -> Option<String> {
        match self.elements.get(pos.checked_sub(1)?)? {
            RawElement::Scalar(s) if s.is_empty() => None,
            RawElement::Scalar(s) => Some(s.clone()),
            RawElement::Composite(parts) => parts.first().filter(|p| !p.is_empty()).cloned(),
        }
    }

    /// Whether the segment id looks structurally valid (2-3 alphanumeric
    /// characters starting with a letter)
    #[must_use]
    pub fn has_valid_id(&self) -> bool {
        let bytes = self.id.as_bytes();
        (2..=3).contains(&bytes.len())
            && bytes[0].is_ascii_uppercase()
            && bytes.iter().all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
    }
}

/// Split a full document into segments.
///
/// Pure function: text in, delimiters plus ordered segment list out. A
/// malformed individual segment does not abort the parse; it is retained
/// verbatim and flagged with a warning.
pub fn tokenize(text: &str) -> Result<(Delimiters, Vec<RawSegment>, Vec<Warning>)> {
    let bytes = text.as_bytes();
    let start = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .ok_or_else(|| Error::malformed_envelope("document is empty", 0))?;

    let delimiters = Delimiters::from_isa(&bytes[start..], start)?;

    let mut segments = Vec::new();
    let mut warnings = Vec::new();
    let mut line = 1 + bytes[..start].iter().filter(|&&b| b == b'\n').count();
    let mut offset = start;

    for chunk in bytes[start..].split(|&b| b == delimiters.segment) {
        let chunk_lines = chunk.iter().filter(|&&b| b == b'\n').count();

        // Trim inter-segment whitespace while tracking source position.
        let lead = chunk
            .iter()
            .position(|b| !b.is_ascii_whitespace())
            .unwrap_or(chunk.len());
        let body = &chunk[lead..];
        let body = &body[..body
            .iter()
            .rposition(|b| !b.is_ascii_whitespace())
            .map_or(0, |p| p + 1)];

        if !body.is_empty() {
            let seg_line = line + chunk[..lead].iter().filter(|&&b| b == b'\n').count();
            let seg_offset = offset + lead;
            let segment = split_segment(body, &delimiters, seg_line, seg_offset, segments.len());

            if !segment.has_valid_id() {
                warnings.push(
                    Warning::new(
                        "malformed-segment",
                        format!("segment id '{}' is not a valid X12 id", segment.id),
                        Severity::Warning,
                        "",
                    )
                    .at(segment.position.clone()),
                );
            }
            segments.push(segment);
        }

        line += chunk_lines;
        offset += chunk.len() + 1;
    }

    Ok((delimiters, segments, warnings))
}

fn split_segment(
    body: &[u8],
    delimiters: &Delimiters,
    line: usize,
    offset: usize,
    index: usize,
) -> RawSegment {
    let mut parts = body.split(|&b| b == delimiters.element);
    let id = String::from_utf8_lossy(parts.next().unwrap_or_default()).to_string();

    let elements = parts
        .map(|raw| {
            if raw.contains(&delimiters.component) {
                RawElement::Composite(
                    raw.split(|&b| b == delimiters.component)
                        .map(|c| String::from_utf8_lossy(c).to_string())
                        .collect(),
                )
            } else {
                RawElement::Scalar(String::from_utf8_lossy(raw).to_string())
            }
        })
        .collect();

    RawSegment {
        id,
        elements,
        position: Position::new(line, offset, index),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ISA: &str = "ISA*00*          *00*          *ZZ*SENDERID       *ZZ*RECEIVERID     \
*240101*1230*^*00501*000000001*0*P*:~";

    #[test]
    fn test_delimiters_from_isa() {
        let (delims, _, _) = tokenize(ISA).unwrap();
        assert_eq!(delims.element, b'*');
        assert_eq!(delims.component, b':');
        assert_eq!(delims.segment, b'~');
        assert_eq!(delims.repetition, b'^');
    }

    #[test]
    fn test_short_envelope_is_fatal() {
        let err = tokenize("ISA*00*x~").unwrap_err();
        assert!(matches!(err, Error::MalformedEnvelope { .. }));
    }

    #[test]
    fn test_non_isa_start_is_fatal() {
        let padded = format!("GS{}", "X".repeat(120));
        let err = tokenize(&padded).unwrap_err();
        assert!(matches!(err, Error::MalformedEnvelope { .. }));
    }

    #[test]
    fn test_empty_document_is_fatal() {
        assert!(matches!(
            tokenize("   \n "),
            Err(Error::MalformedEnvelope { .. })
        ));
    }

    #[test]
    fn test_segment_and_element_split() {
        let doc = format!("{ISA}GS*HP*S*R*20240101*1230*1*X*005010X221A1~SVC*HC:99213:26:27*100*80~");
        let (_, segments, warnings) = tokenize(&doc).unwrap();

        assert!(warnings.is_empty());
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].id, "ISA");
        assert_eq!(segments[2].id, "SVC");

        match &segments[2].elements[0] {
            RawElement::Composite(parts) => {
                assert_eq!(parts, &["HC", "99213", "26", "27"]);
            }
            RawElement::Scalar(_) => panic!("SVC01 should be composite"),
        }
        assert_eq!(segments[2].value_at(2).as_deref(), Some("100"));
    }

    #[test]
    fn test_uncommon_delimiters_equivalent_counts() {
        let default_doc = format!("{ISA}GS*HP*S*R*20240101*1230*1*X*005010X221A1~TRN*1*CHECK123~");

        // Same logical content with '|' elements, '>' components, '!' terminator.
        let odd_isa = "ISA|00|          |00|          |ZZ|SENDERID       |ZZ|RECEIVERID     \
|240101|1230|^|00501|000000001|0|P|>!";
        let odd_doc = format!("{odd_isa}GS|HP|S|R|20240101|1230|1|X|005010X221A1!TRN|1|CHECK123!");

        let (_, default_segs, _) = tokenize(&default_doc).unwrap();
        let (_, odd_segs, _) = tokenize(&odd_doc).unwrap();

        assert_eq!(default_segs.len(), odd_segs.len());
        for (a, b) in default_segs.iter().zip(odd_segs.iter()) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.elements.len(), b.elements.len());
        }
    }

    #[test]
    fn test_newlines_between_segments() {
        let doc = format!("{ISA}\nGS*HP*S*R*20240101*1230*1*X*005010X221A1~\r\nSE*2*0001~\n");
        let (_, segments, _) = tokenize(&doc).unwrap();
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[1].position.line, 2);
    }

    #[test]
    fn test_malformed_segment_retained_with_warning() {
        let doc = format!("{ISA}x1z*bad*segment~GE*1*1~");
        let (_, segments, warnings) = tokenize(&doc).unwrap();

        assert_eq!(segments.len(), 3);
        assert_eq!(segments[1].id, "x1z");
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].code, "malformed-segment");
    }
}
