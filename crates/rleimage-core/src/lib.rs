//! rleimage Core - Run-length encoded raster storage and scanline traversal
//!
//! Each 1-D scanline along the fastest axis (axis 0) of an N-dimensional
//! image is stored as an ordered list of `(length, value)` runs. This crate
//! provides:
//!
//! - [`Run`] / [`RunCounter`] - One run and its length integer type
//! - [`Line`] - A compressed scanline
//! - [`Region`] - N-dimensional half-open index box
//! - [`RleImage`] - The image container, one line per slow-axis position
//! - [`LineEnumerator`] - Walks the line positions of a region
//! - [`ScanlineCursor`] - Steps along lines without decompressing them
//! - [`Pixels`] / [`IndexedPixels`] / [`RegionRuns`] - Iterator adaptors
//!
//! # Features
//!
//! - `strict-bounds`: keep [`ScanlineCursor`] precondition assertions in
//!   release builds. The assertion tests run in release only with it:
//!   `cargo test --release -p rleimage-core --features strict-bounds`.
//!
//! # Example
//!
//! ```
//! use rleimage_core::{Region, RleImage};
//!
//! let region = Region::from_size([4, 2]).unwrap();
//! let image: RleImage<u8, 2> =
//!     RleImage::from_dense(region, &[0, 0, 9, 9, 5, 5, 5, 5]).unwrap();
//! assert_eq!(image.run_count(), 3);
//!
//! let mut cursor = image.scanline_cursor(&region).unwrap();
//! let mut row = Vec::new();
//! while !cursor.is_at_end_of_line() {
//!     row.push(cursor.value());
//!     cursor.step_forward();
//! }
//! assert_eq!(row, vec![0, 0, 9, 9]);
//! ```

pub mod cursor;
pub mod error;
pub mod image;
pub mod iter;
pub mod line;
pub mod lines;
pub mod region;
pub mod run;

pub use cursor::ScanlineCursor;
pub use error::{Error, Result};
pub use image::RleImage;
pub use iter::{IndexedPixels, Pixels, RegionRuns, RunSpan};
pub use line::Line;
pub use lines::LineEnumerator;
pub use region::{Index, Region};
pub use run::{Run, RunCounter};
