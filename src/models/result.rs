use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use super::{
    BarcodeFormat, Coordinate, MatrixRecord, MetadataKey, MetadataValue, ResultMetadata,
    ResultPoint,
};

/// Result of decoding a barcode within an image
///
/// The hand-off record between the decoding engine and its consumers. The
/// engine constructs one as soon as a payload is available, then enriches
/// it in place (geometry refinement, metadata annotation) before returning
/// it. One instance belongs to one decode operation; share it with the
/// rest of the system only after decoding completes.
///
/// Payload, format and timestamp are fixed at construction. Result points
/// and metadata grow through [`add_result_points`](Self::add_result_points),
/// [`put_metadata`](Self::put_metadata) and
/// [`put_all_metadata`](Self::put_all_metadata); the remaining geometry and
/// timing fields are plain mutable state with no cross-field validation.
#[derive(Debug, Clone)]
pub struct BarcodeResult {
    text: String,
    raw_bytes: Option<Vec<u8>>,
    result_points: Option<Vec<ResultPoint>>,
    format: BarcodeFormat,
    result_metadata: Option<ResultMetadata>,
    timestamp: u64,
    /// Top-left corner of the symbol's bounding box, in pixel space
    pub top_left: Option<Coordinate>,
    /// Bottom-right corner of the symbol's bounding box, in pixel space
    pub bottom_right: Option<Coordinate>,
    /// Time spent decoding the payload, in milliseconds
    pub decode_time: u64,
    /// Time spent locating the symbol, in milliseconds
    pub detect_time: u64,
    /// Grid-recognition record kept for diagnostics and re-decoding
    pub matrix_record: Option<MatrixRecord>,
    /// Width of the source image in pixels
    pub width: usize,
    /// Height of the source image in pixels
    pub height: usize,
    /// Raw sample positions prior to geometric correction
    pub original_square_coordinates: Option<Vec<Coordinate>>,
}

impl BarcodeResult {
    /// Create a result stamped with the current wall-clock time
    pub fn new(
        text: String,
        raw_bytes: Option<Vec<u8>>,
        result_points: Option<Vec<ResultPoint>>,
        format: BarcodeFormat,
    ) -> Self {
        Self::with_timestamp(text, raw_bytes, result_points, format, current_millis())
    }

    /// Create a result with an explicit timestamp in milliseconds since the
    /// Unix epoch
    ///
    /// Used for deterministic construction in tests and for reconstructing
    /// results with a historical timestamp.
    pub fn with_timestamp(
        text: String,
        raw_bytes: Option<Vec<u8>>,
        result_points: Option<Vec<ResultPoint>>,
        format: BarcodeFormat,
        timestamp: u64,
    ) -> Self {
        Self {
            text,
            raw_bytes,
            result_points,
            format,
            result_metadata: None,
            timestamp,
            top_left: None,
            bottom_right: None,
            decode_time: 0,
            detect_time: 0,
            matrix_record: None,
            width: 0,
            height: 0,
            original_square_coordinates: None,
        }
    }

    /// Decoded payload as text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Decoded payload as raw bytes, if applicable to the symbology
    pub fn raw_bytes(&self) -> Option<&[u8]> {
        self.raw_bytes.as_deref()
    }

    /// Points locating the symbol in the image
    ///
    /// Typically finder pattern centers or corners; the exact meaning is
    /// specific to the symbology that was decoded. Indices are stable:
    /// appends never reorder or drop earlier points.
    pub fn result_points(&self) -> Option<&[ResultPoint]> {
        self.result_points.as_deref()
    }

    /// Symbology of the decoded barcode
    pub fn format(&self) -> BarcodeFormat {
        self.format
    }

    /// Optional annotations recorded during decoding, such as orientation
    ///
    /// `None` until the first [`put_metadata`](Self::put_metadata) or
    /// [`put_all_metadata`](Self::put_all_metadata) call.
    pub fn result_metadata(&self) -> Option<&ResultMetadata> {
        self.result_metadata.as_ref()
    }

    /// Milliseconds since the Unix epoch at which this result was created
    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    /// Attach a single metadata entry
    ///
    /// The map is allocated on first use. A repeated key silently replaces
    /// the earlier value.
    pub fn put_metadata(&mut self, key: MetadataKey, value: MetadataValue) {
        self.result_metadata
            .get_or_insert_with(ResultMetadata::new)
            .insert(key, value);
    }

    /// Merge a batch of metadata entries
    ///
    /// `None` is a no-op. If no metadata has been recorded yet, the input
    /// map is moved in wholesale and becomes this result's map. Otherwise
    /// the input is merged entry by entry, the input winning on key
    /// collisions; existing keys absent from the input are preserved.
    pub fn put_all_metadata(&mut self, metadata: Option<ResultMetadata>) {
        let Some(metadata) = metadata else {
            return;
        };
        match self.result_metadata.as_mut() {
            None => self.result_metadata = Some(metadata),
            Some(existing) => existing.extend(metadata),
        }
    }

    /// Append points found by a later detection pass
    ///
    /// With no points stored yet, the input is moved in unchanged, even an
    /// empty list. Otherwise a present, non-empty input is appended after
    /// the existing points in order; an absent or empty input leaves the
    /// stored points untouched.
    pub fn add_result_points(&mut self, new_points: Option<Vec<ResultPoint>>) {
        match self.result_points.as_mut() {
            None => self.result_points = new_points,
            Some(existing) => {
                if let Some(new_points) = new_points {
                    if !new_points.is_empty() {
                        existing.extend(new_points);
                    }
                }
            }
        }
    }
}

/// Renders the decoded text only; not a serialization format
impl fmt::Display for BarcodeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

fn current_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or_default()
}
