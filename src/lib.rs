//! RustBarcode - barcode decode result types
//!
//! The hand-off contract between a barcode decoding engine and downstream
//! consumers: decoded text and bytes, the geometric points that located the
//! symbol, classification metadata, and timing diagnostics. Pure Rust, no
//! image processing here.
//!
//! The engine constructs a [`BarcodeResult`] as soon as a payload is
//! available and enriches it in place; everything else reads it through the
//! accessor surface.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Core data structures (BarcodeResult, ResultPoint, Coordinate, etc.)
pub mod models;

pub use models::{
    BarcodeFormat, BarcodeResult, Coordinate, MatrixRecord, MetadataKey, MetadataValue,
    ModuleGrid, ResultMetadata, ResultPoint,
};
