//! rleimage-test - Regression test helpers for rleimage
//!
//! Provides [`RegParams`], which numbers and records every comparison made
//! by a regression test and reports all failures at the end, plus fixture
//! builders for lines and images described as run tables.
//!
//! # Usage
//!
//! ```ignore
//! use rleimage_test::RegParams;
//!
//! let mut rp = RegParams::new("scanline");
//! rp.compare_values(9.0, count as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod fixtures;
mod params;

pub use fixtures::{image_from_runs, line_from_runs, walk_backward, walk_forward};
pub use params::RegParams;
