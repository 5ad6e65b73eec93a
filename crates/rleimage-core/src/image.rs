//! RleImage - N-dimensional image stored as compressed scanlines
//!
//! One [`Line`] is kept per combination of indices along axes `1..D`.
//! Every line covers the full buffered width along axis 0.
//!
//! # Line layout
//!
//! Lines are stored in a flat `Vec` in ascending lexicographic order of
//! their axis `1..D` indices, axis 1 varying fastest. That is the same
//! order the [`LineEnumerator`](crate::LineEnumerator) visits them in.
//!
//! # Mutation
//!
//! Writes go through whole-line rewrites ([`RleImage::set_line`],
//! [`RleImage::set_pixel`], [`RleImage::fill`], [`RleImage::compact`]).
//! They need `&mut self`, so the borrow checker keeps them from running
//! while any cursor borrows the image.

use crate::error::{Error, Result};
use crate::iter::RegionRuns;
use crate::line::Line;
use crate::region::{Index, Region};
use crate::run::RunCounter;
use tracing::debug;

/// Run-length encoded N-dimensional image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RleImage<T, const D: usize, C = u16> {
    buffered: Region<D>,
    lines: Vec<Line<T, C>>,
}

impl<T: Copy + PartialEq, const D: usize, C: RunCounter> RleImage<T, D, C> {
    /// Allocate an image covering `buffered`, every pixel set to `fill`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRegion`] if `buffered` is empty.
    pub fn new(buffered: Region<D>, fill: T) -> Result<Self> {
        Self::check_buffered(&buffered)?;
        let line = Line::uniform(buffered.size[0], fill)?;
        let lines = vec![line; line_count_of(&buffered)];
        debug!(
            region = %buffered,
            lines = lines.len(),
            "allocated rle image"
        );
        Ok(Self { buffered, lines })
    }

    /// Encode a dense buffer laid out with axis 0 fastest.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferSizeMismatch`] if `data.len()` differs from the
    /// region's pixel count, or [`Error::InvalidRegion`] if it is empty.
    pub fn from_dense(buffered: Region<D>, data: &[T]) -> Result<Self> {
        Self::check_buffered(&buffered)?;
        let expected = buffered.number_of_pixels();
        if data.len() != expected {
            return Err(Error::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        let lines = data
            .chunks_exact(buffered.size[0])
            .map(Line::from_pixels)
            .collect::<Result<Vec<_>>>()?;
        let image = Self { buffered, lines };
        debug!(
            region = %buffered,
            runs = image.run_count(),
            pixels = expected,
            "encoded dense buffer"
        );
        Ok(image)
    }

    fn check_buffered(buffered: &Region<D>) -> Result<()> {
        if D == 0 || buffered.is_empty() {
            return Err(Error::InvalidRegion(format!(
                "buffered region must be non-empty: {buffered}"
            )));
        }
        Ok(())
    }

    /// Decode the pixels of `region` into a dense buffer, axis 0 fastest.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RegionOutOfBounds`] if `region` is not inside the
    /// buffered region.
    pub fn to_dense(&self, region: &Region<D>) -> Result<Vec<T>> {
        let mut out = Vec::with_capacity(region.number_of_pixels());
        for span in RegionRuns::new(self, region)? {
            out.extend(std::iter::repeat_n(span.value, span.length));
        }
        Ok(out)
    }

    /// The region actually stored.
    #[inline]
    pub fn buffered_region(&self) -> &Region<D> {
        &self.buffered
    }

    /// Width of every line (extent of the buffered region along axis 0).
    #[inline]
    pub fn full_width(&self) -> usize {
        self.buffered.size[0]
    }

    /// Number of stored lines.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total number of runs over all lines.
    pub fn run_count(&self) -> usize {
        self.lines.iter().map(Line::run_count).sum()
    }

    /// Flat storage slot of the line through `position`.
    ///
    /// Component 0 of `position` is ignored. Returns `None` when any other
    /// component lies outside the buffered region.
    pub(crate) fn line_offset(&self, position: &Index<D>) -> Option<usize> {
        let mut offset = 0;
        let mut stride = 1;
        for d in 1..D {
            let rel = position[d] - self.buffered.begin(d);
            if rel < 0 || rel as usize >= self.buffered.size[d] {
                return None;
            }
            offset += rel as usize * stride;
            stride *= self.buffered.size[d];
        }
        Some(offset)
    }

    #[inline]
    pub(crate) fn line_at(&self, offset: usize) -> &Line<T, C> {
        &self.lines[offset]
    }

    /// The line through `position` (component 0 ignored).
    pub fn line(&self, position: &Index<D>) -> Option<&Line<T, C>> {
        self.line_offset(position).map(|o| &self.lines[o])
    }

    /// Replace the line through `position`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `position` is outside the image,
    /// or [`Error::LineWidthMismatch`] if `line` does not cover the full width.
    pub fn set_line(&mut self, position: &Index<D>, line: Line<T, C>) -> Result<()> {
        let offset = self.checked_line_offset(position)?;
        if line.width() != self.full_width() {
            return Err(Error::LineWidthMismatch {
                expected: self.full_width(),
                actual: line.width(),
            });
        }
        debug!(?position, runs = line.run_count(), "rewrote line");
        self.lines[offset] = line;
        Ok(())
    }

    fn checked_line_offset(&self, position: &Index<D>) -> Result<usize> {
        self.line_offset(position)
            .ok_or_else(|| Error::IndexOutOfBounds {
                index: format!("{position:?}"),
                region: self.buffered.to_string(),
            })
    }

    /// Column of `index` relative to the start of its line.
    #[inline]
    fn column(&self, index: &Index<D>) -> i64 {
        index[0] - self.buffered.begin(0)
    }

    /// Pixel value at `index`, or `None` if it is outside the image.
    pub fn pixel(&self, index: &Index<D>) -> Option<T> {
        if !self.buffered.contains_index(index) {
            return None;
        }
        let line = self.line(index)?;
        line.pixel(self.column(index) as usize)
    }

    /// Set the pixel at `index`, rewriting its line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `index` is outside the image.
    pub fn set_pixel(&mut self, index: &Index<D>, value: T) -> Result<()> {
        if !self.buffered.contains_index(index) {
            return Err(Error::IndexOutOfBounds {
                index: format!("{index:?}"),
                region: self.buffered.to_string(),
            });
        }
        let offset = self.checked_line_offset(index)?;
        let column = self.column(index) as usize;
        self.lines[offset].set_pixel(column, value)
    }

    /// Set every pixel to `value`.
    pub fn fill(&mut self, value: T) -> Result<()> {
        let line = Line::uniform(self.full_width(), value)?;
        for l in &mut self.lines {
            l.clone_from(&line);
        }
        debug!(lines = self.lines.len(), "filled rle image");
        Ok(())
    }

    /// Merge adjacent equal-valued runs in every line.
    ///
    /// Returns the number of runs removed.
    pub fn compact(&mut self) -> usize {
        let removed: usize = self.lines.iter_mut().map(Line::compact).sum();
        debug!(removed, remaining = self.run_count(), "compacted rle image");
        removed
    }

    /// Clipped column range `[begin0, end0)` of `region` on the line through
    /// `position`, relative to the start of that line.
    ///
    /// Regions are boxes, so the range is the same for every line; the
    /// position only selects which line it applies to.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `position` is outside the image,
    /// or [`Error::RegionOutOfBounds`] if `region` is not inside the
    /// buffered region.
    pub fn region_bounds_for_line(
        &self,
        position: &Index<D>,
        region: &Region<D>,
    ) -> Result<(usize, usize)> {
        self.checked_line_offset(position)?;
        region.require_inside(&self.buffered)?;
        Ok(self.clipped_columns(region))
    }

    /// Column range of `region`, which the caller has already checked to lie
    /// inside the buffered region.
    #[inline]
    pub(crate) fn clipped_columns(&self, region: &Region<D>) -> (usize, usize) {
        debug_assert!(region.is_empty() || region.begin(0) >= self.buffered.begin(0));
        let begin = (region.begin(0) - self.buffered.begin(0)) as usize;
        (begin, begin + region.size[0])
    }
}

fn line_count_of<const D: usize>(region: &Region<D>) -> usize {
    region.size.iter().skip(1).product()
}
