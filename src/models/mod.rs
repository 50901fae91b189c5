pub mod coordinate;
pub mod format;
pub mod matrix_record;
pub mod metadata;
pub mod point;
pub mod result;

pub use coordinate::Coordinate;
pub use format::BarcodeFormat;
pub use matrix_record::{MatrixRecord, ModuleGrid};
pub use metadata::{MetadataKey, MetadataValue, ResultMetadata};
pub use point::ResultPoint;
pub use result::BarcodeResult;
