use std::collections::BTreeMap;

/// Key identifying an optional annotation attached to a decode result
///
/// A closed set; a metadata map holds at most one value per key. The `Ord`
/// derive gives maps keyed by this enum a stable iteration order matching
/// declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MetadataKey {
    /// Unspecified, application-specific annotation
    Other,
    /// Orientation of the symbol in degrees, as an integer value
    Orientation,
    /// Raw byte segments in the order they appear in the bitstream
    ByteSegments,
    /// Error correction level used, rendered symbology-specifically as text
    ErrorCorrectionLevel,
    /// Number of codewords repaired by error correction
    ErrorsCorrected,
    /// Issue number, for symbologies that carry one
    IssueNumber,
    /// Suggested retail price, from a UPC/EAN extension
    SuggestedPrice,
    /// Likely country of origin read from the symbol
    PossibleCountry,
    /// Text of an EAN-2/EAN-5 supplemental symbol
    UpcEanExtension,
    /// Extra PDF417-specific annotations
    Pdf417ExtraMetadata,
    /// Position of this symbol in a structured-append sequence
    StructuredAppendSequence,
    /// Parity byte shared by all symbols of a structured append
    StructuredAppendParity,
    /// Symbology identifier prefix, e.g. "]Q1"
    SymbologyIdentifier,
}

/// Value attached to a metadata key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataValue {
    /// Textual annotation
    Text(String),
    /// Integral annotation (orientation, sequence positions, counts)
    Integer(i64),
    /// Raw byte segments from the symbol's bitstream
    ByteSegments(Vec<Vec<u8>>),
}

impl MetadataValue {
    /// Get the annotation as text, if it is textual
    pub fn as_text(&self) -> Option<&str> {
        match self {
            MetadataValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Get the annotation as an integer, if it is integral
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            MetadataValue::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// Get the annotation as byte segments, if it carries them
    pub fn as_byte_segments(&self) -> Option<&[Vec<u8>]> {
        match self {
            MetadataValue::ByteSegments(segments) => Some(segments),
            _ => None,
        }
    }
}

/// Ordered metadata map attached to a decode result
pub type ResultMetadata = BTreeMap<MetadataKey, MetadataValue>;
