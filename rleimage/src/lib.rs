//! rleimage - Run-length encoded images for Rust
//!
//! Stores N-dimensional pixel data with every scanline along the fastest
//! axis compressed into `(length, value)` runs, and walks it scanline by
//! scanline without decompressing.
//!
//! # Overview
//!
//! - Compact storage with a configurable run counter width
//! - Dense buffer conversion and pixel-level access
//! - Region-clipped scanline cursors with O(1) amortized stepping
//! - Pixel and run iterators over arbitrary sub-regions
//!
//! # Features
//!
//! - `strict-bounds`: keep cursor precondition assertions in release builds
//!
//! # Example
//!
//! ```
//! use rleimage::{Region, RleImage};
//!
//! let region = Region::from_size([640, 480]).unwrap();
//! let mut image: RleImage<u8, 2> = RleImage::new(region, 0).unwrap();
//! image.set_pixel(&[10, 20], 255).unwrap();
//! assert_eq!(image.pixel(&[10, 20]), Some(255));
//! assert_eq!(image.run_count(), 482);
//! ```

pub use rleimage_core::*;
