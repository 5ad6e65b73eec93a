//! Error types for rleimage-core
//!
//! Only the construction and image-level APIs are fallible. Cursor
//! stepping never reports errors; its preconditions are documented on
//! [`ScanlineCursor`](crate::ScanlineCursor) and checked by assertions
//! in debug builds.

use thiserror::Error;

/// rleimage error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A run was given a length of zero or one larger than the counter allows
    #[error("invalid run length {length} (counter maximum {max})")]
    InvalidRunLength { length: usize, max: usize },

    /// A line must contain at least one run
    #[error("line must contain at least one run")]
    EmptyLine,

    /// Installed line does not cover the buffered width
    #[error("line width mismatch: expected {expected}, got {actual}")]
    LineWidthMismatch { expected: usize, actual: usize },

    /// Region with an unusable shape
    #[error("invalid region: {0}")]
    InvalidRegion(String),

    /// Requested region is not inside the buffered region
    #[error("region {requested} is not inside buffered region {buffered}")]
    RegionOutOfBounds { requested: String, buffered: String },

    /// Pixel index outside the region it addresses
    #[error("index {index} is outside region {region}")]
    IndexOutOfBounds { index: String, region: String },

    /// Dense buffer length does not match the region's pixel count
    #[error("buffer size mismatch: expected {expected} pixels, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },
}

/// Result type alias for rleimage operations
pub type Result<T> = std::result::Result<T, Error>;
