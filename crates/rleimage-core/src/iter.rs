//! Region iterators built on [`ScanlineCursor`]
//!
//! These adapt the cursor's explicit line/step protocol to Rust iterators:
//! they visit lines in enumeration order and pixels left to right within
//! each clipped line.

use crate::cursor::ScanlineCursor;
use crate::error::Result;
use crate::image::RleImage;
use crate::region::{Index, Region};
use crate::run::RunCounter;

/// Every pixel value of a region in scanline order.
#[derive(Debug, Clone)]
pub struct Pixels<'a, T, const D: usize, C = u16> {
    cursor: ScanlineCursor<'a, T, D, C>,
}

impl<'a, T: Copy + PartialEq, const D: usize, C: RunCounter> Pixels<'a, T, D, C> {
    /// Iterate over `region` of `image`.
    ///
    /// # Errors
    ///
    /// Returns an error if `region` is not inside the buffered region.
    pub fn new(image: &'a RleImage<T, D, C>, region: &Region<D>) -> Result<Self> {
        Ok(Self {
            cursor: ScanlineCursor::new(image, region)?,
        })
    }

    /// Pair every value with its absolute index.
    pub fn indexed(self) -> IndexedPixels<'a, T, D, C> {
        IndexedPixels {
            cursor: self.cursor,
        }
    }
}

/// Move the cursor onto a readable pixel, crossing lines as needed.
/// Returns `false` once the region is exhausted.
fn settle<T: Copy + PartialEq, const D: usize, C: RunCounter>(
    cursor: &mut ScanlineCursor<'_, T, D, C>,
) -> bool {
    loop {
        if cursor.is_at_end() {
            return false;
        }
        if !cursor.is_at_end_of_line() {
            return true;
        }
        cursor.next_line();
    }
}

impl<T: Copy + PartialEq, const D: usize, C: RunCounter> Iterator for Pixels<'_, T, D, C> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if !settle(&mut self.cursor) {
            return None;
        }
        let value = self.cursor.value();
        self.cursor.step_forward();
        Some(value)
    }
}

/// Every `(index, value)` pair of a region in scanline order.
#[derive(Debug, Clone)]
pub struct IndexedPixels<'a, T, const D: usize, C = u16> {
    cursor: ScanlineCursor<'a, T, D, C>,
}

impl<T: Copy + PartialEq, const D: usize, C: RunCounter> Iterator
    for IndexedPixels<'_, T, D, C>
{
    type Item = (Index<D>, T);

    fn next(&mut self) -> Option<Self::Item> {
        if !settle(&mut self.cursor) {
            return None;
        }
        let item = (self.cursor.index(), self.cursor.value());
        self.cursor.step_forward();
        Some(item)
    }
}

/// A region-clipped piece of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSpan<T, const D: usize> {
    /// Absolute index of the first pixel
    pub start: Index<D>,
    /// Number of pixels
    pub length: usize,
    /// Shared value
    pub value: T,
}

/// The runs of a region, clipped to it, in scanline order.
///
/// Runs are reported as stored: two adjacent spans may carry the same value
/// if the line was not compacted.
#[derive(Debug, Clone)]
pub struct RegionRuns<'a, T, const D: usize, C = u16> {
    cursor: ScanlineCursor<'a, T, D, C>,
}

impl<'a, T: Copy + PartialEq, const D: usize, C: RunCounter> RegionRuns<'a, T, D, C> {
    /// Iterate over the runs of `region` of `image`.
    ///
    /// # Errors
    ///
    /// Returns an error if `region` is not inside the buffered region.
    pub fn new(image: &'a RleImage<T, D, C>, region: &Region<D>) -> Result<Self> {
        Ok(Self {
            cursor: ScanlineCursor::new(image, region)?,
        })
    }
}

impl<T: Copy + PartialEq, const D: usize, C: RunCounter> Iterator for RegionRuns<'_, T, D, C> {
    type Item = RunSpan<T, D>;

    fn next(&mut self) -> Option<Self::Item> {
        if !settle(&mut self.cursor) {
            return None;
        }
        let span = RunSpan {
            start: self.cursor.index(),
            length: self.cursor.run_span(),
            value: self.cursor.value(),
        };
        self.cursor.skip_run();
        Some(span)
    }
}

impl<T: Copy + PartialEq, const D: usize, C: RunCounter> RleImage<T, D, C> {
    /// Pixel values of `region` in scanline order.
    pub fn pixels(&self, region: &Region<D>) -> Result<Pixels<'_, T, D, C>> {
        Pixels::new(self, region)
    }

    /// Clipped runs of `region` in scanline order.
    pub fn region_runs(&self, region: &Region<D>) -> Result<RegionRuns<'_, T, D, C>> {
        RegionRuns::new(self, region)
    }

    /// Scanline cursor over `region`.
    pub fn scanline_cursor(&self, region: &Region<D>) -> Result<ScanlineCursor<'_, T, D, C>> {
        ScanlineCursor::new(self, region)
    }
}
