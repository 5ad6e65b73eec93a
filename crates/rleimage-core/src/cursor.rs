//! Scanline cursor over a run-length encoded image
//!
//! The cursor keeps two coordinate systems in step:
//!
//! - an absolute column `index0` along axis 0 (relative to the start of the
//!   stored line), bounded by the region-clipped range
//!   `[begin_index0, end_index0)` of the current line;
//! - a run-relative position: `real_index` is the run holding `index0` and
//!   `segment_remainder` counts the pixels from `index0` (inclusive) to the
//!   end of that run.
//!
//! Seeking ([`ScanlineCursor::seek`], [`ScanlineCursor::set_index`], and
//! line changes) searches the run list once. Stepping along the line only
//! touches the run list when a run boundary is crossed, so a full line
//! traversal costs O(pixels) whatever the number of runs.
//!
//! # Unchecked stepping
//!
//! Stepping past the end of a line, stepping back before its start and
//! reading [`ScanlineCursor::value`] at the end of a line are caller errors.
//! They are asserted when `debug_assertions` or the `strict-bounds` feature
//! is enabled and otherwise not checked at all: a release build without
//! `strict-bounds` leaves the cursor in a meaningless state (and may panic
//! on a later slice access) instead of paying a bounds test on every step.
//! Test [`ScanlineCursor::is_at_end_of_line`] before stepping forward.

use crate::error::{Error, Result};
use crate::image::RleImage;
use crate::line::Line;
use crate::lines::LineEnumerator;
use crate::region::{Index, Region};
use crate::run::RunCounter;
use tracing::trace;

macro_rules! check_precondition {
    ($cond:expr, $($arg:tt)+) => {
        if cfg!(any(debug_assertions, feature = "strict-bounds")) {
            assert!($cond, $($arg)+);
        }
    };
}

/// Cursor walking a region of an [`RleImage`] scanline by scanline.
#[derive(Debug, Clone)]
pub struct ScanlineCursor<'a, T, const D: usize, C = u16> {
    image: &'a RleImage<T, D, C>,
    lines: LineEnumerator<D>,
    line: &'a Line<T, C>,
    index0: usize,
    begin_index0: usize,
    end_index0: usize,
    real_index: usize,
    segment_remainder: usize,
}

impl<'a, T: Copy + PartialEq, const D: usize, C: RunCounter> ScanlineCursor<'a, T, D, C> {
    /// Create a cursor positioned on the first pixel of `region`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RegionOutOfBounds`] if `region` is not inside the
    /// image's buffered region.
    pub fn new(image: &'a RleImage<T, D, C>, region: &Region<D>) -> Result<Self> {
        region.require_inside(image.buffered_region())?;
        let mut cursor = Self {
            image,
            lines: LineEnumerator::new(*region),
            line: image.line_at(0),
            index0: 0,
            begin_index0: 0,
            end_index0: 0,
            real_index: 0,
            segment_remainder: 0,
        };
        cursor.go_to_begin();
        trace!(region = %region, "created scanline cursor");
        Ok(cursor)
    }

    /// Create a cursor over `region` positioned at `index`.
    ///
    /// This is the conversion path from any other traversal that only knows
    /// an absolute position: the run-relative state is re-derived by a seek.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RegionOutOfBounds`] if `region` is not inside the
    /// buffered region, or [`Error::IndexOutOfBounds`] if `index` is not
    /// inside `region`.
    pub fn at_index(
        image: &'a RleImage<T, D, C>,
        region: &Region<D>,
        index: &Index<D>,
    ) -> Result<Self> {
        let mut cursor = Self::new(image, region)?;
        if !region.contains_index(index) {
            return Err(Error::IndexOutOfBounds {
                index: format!("{index:?}"),
                region: region.to_string(),
            });
        }
        cursor.set_index(index);
        Ok(cursor)
    }

    /// Rewind to the first pixel of the region.
    pub fn go_to_begin(&mut self) {
        self.lines.reset();
        if self.lines.is_exhausted() {
            self.index0 = 0;
            self.begin_index0 = 0;
            self.end_index0 = 0;
            self.real_index = 0;
            self.segment_remainder = 0;
            return;
        }
        self.load_line();
        self.seek(self.begin_index0);
    }

    /// Position the cursor at `index`, which must lie inside the region.
    pub fn set_index(&mut self, index: &Index<D>) {
        check_precondition!(
            self.lines.region().contains_index(index),
            "index {index:?} outside iteration region"
        );
        self.lines.set_position(index);
        self.load_line();
        let column = index[0] - self.image.buffered_region().begin(0);
        self.seek(column as usize);
    }

    /// Make the line under the line enumerator current and recompute the
    /// clipped column range.
    fn load_line(&mut self) {
        let position = self.lines.current();
        let offset = self.image.line_offset(position);
        debug_assert!(offset.is_some(), "line {position:?} not stored");
        self.line = self.image.line_at(offset.unwrap_or(0));
        let (begin, end) = self.image.clipped_columns(self.lines.region());
        self.begin_index0 = begin;
        self.end_index0 = end;
    }

    /// Move to `column` of the current line, searching for its run.
    ///
    /// `column` is relative to the start of the stored line and may equal
    /// the line width, which yields the one-past-the-end state.
    pub fn seek(&mut self, column: usize) {
        check_precondition!(
            column <= self.line.width(),
            "column {column} outside line of width {}",
            self.line.width()
        );
        let (real_index, remainder) = self.line.locate(column);
        self.index0 = column;
        self.real_index = real_index;
        self.segment_remainder = remainder;
    }

    /// Value of the pixel under the cursor.
    ///
    /// Undefined at the end of a line (asserted in debug builds).
    #[inline]
    pub fn value(&self) -> T {
        check_precondition!(!self.is_at_end_of_line(), "value() read at end of line");
        self.line.runs()[self.real_index].value()
    }

    /// Jump to the first pixel of the current line.
    ///
    /// Resets to run 0 without searching, so it is only exact when the
    /// region starts at the first stored column. For a region clipped on
    /// the left, use [`seek`](Self::seek) with
    /// [`begin_index0`](Self::begin_index0) instead.
    pub fn go_to_begin_of_line(&mut self) {
        self.index0 = self.begin_index0;
        self.real_index = 0;
        self.segment_remainder = self.line.runs()[0].len();
    }

    /// Jump to one past the last pixel of the current line.
    ///
    /// The run index is set to the last stored run, which borders the end
    /// column only when the region reaches the end of the stored line.
    pub fn go_to_end_of_line(&mut self) {
        self.index0 = self.end_index0;
        self.real_index = self.line.run_count() - 1;
        self.segment_remainder = 0;
    }

    /// True when the cursor is one past the last pixel of the line.
    #[inline]
    pub fn is_at_end_of_line(&self) -> bool {
        self.index0 == self.end_index0
    }

    /// True when the cursor is on the first pixel of the line.
    #[inline]
    pub fn is_at_begin_of_line(&self) -> bool {
        self.index0 == self.begin_index0
    }

    /// True once every line of the region has been passed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.lines.is_exhausted()
    }

    /// Advance to the first pixel of the next line of the region.
    ///
    /// Past the last line nothing is loaded: the column is reset to the
    /// begin column of the last visited line and [`is_at_end`](Self::is_at_end)
    /// turns true. Calling it again keeps that state.
    pub fn next_line(&mut self) {
        self.lines.advance();
        if !self.lines.is_exhausted() {
            self.load_line();
            self.seek(self.begin_index0);
        } else {
            self.index0 = self.begin_index0;
        }
    }

    /// Step one pixel forward along the line.
    ///
    /// Must not be called at the end of the line.
    #[inline]
    pub fn step_forward(&mut self) {
        check_precondition!(!self.is_at_end_of_line(), "stepped past end of line");
        self.index0 += 1;
        self.segment_remainder -= 1;
        if self.segment_remainder > 0 {
            return;
        }
        if self.is_at_end_of_line() {
            return;
        }
        self.real_index += 1;
        self.segment_remainder = self.line.runs()[self.real_index].len();
    }

    /// Step one pixel backward along the line.
    ///
    /// After crossing into the previous run the remainder is 1: the cursor
    /// sits on that run's last pixel. Must not be called at the beginning
    /// of the line.
    #[inline]
    pub fn step_backward(&mut self) {
        check_precondition!(
            self.index0 > self.begin_index0,
            "stepped before beginning of line"
        );
        self.index0 -= 1;
        self.segment_remainder += 1;
        if self.segment_remainder <= self.line.runs()[self.real_index].len() {
            return;
        }
        self.real_index -= 1;
        self.segment_remainder = 1;
    }

    /// Pixels from the cursor to the next run boundary or the end of the
    /// clipped line, whichever comes first. Zero at the end of the line.
    #[inline]
    pub fn run_span(&self) -> usize {
        self.segment_remainder.min(self.end_index0 - self.index0)
    }

    /// Advance by [`run_span`](Self::run_span) pixels in one move.
    ///
    /// Leaves the cursor on the first pixel of the next run or at the end
    /// of the line. Must not be called at the end of the line.
    pub fn skip_run(&mut self) {
        check_precondition!(!self.is_at_end_of_line(), "skipped past end of line");
        let span = self.run_span();
        self.index0 += span;
        self.segment_remainder -= span;
        if self.segment_remainder > 0 || self.is_at_end_of_line() {
            return;
        }
        self.real_index += 1;
        self.segment_remainder = self.line.runs()[self.real_index].len();
    }

    /// Absolute index of the pixel under the cursor.
    pub fn index(&self) -> Index<D> {
        let mut index = *self.lines.current();
        index[0] = self.image.buffered_region().begin(0) + self.index0 as i64;
        index
    }

    /// Column relative to the start of the stored line.
    #[inline]
    pub fn index0(&self) -> usize {
        self.index0
    }

    /// First column of the region on the current line.
    #[inline]
    pub fn begin_index0(&self) -> usize {
        self.begin_index0
    }

    /// One past the last column of the region on the current line.
    #[inline]
    pub fn end_index0(&self) -> usize {
        self.end_index0
    }

    /// Index of the run holding (or, at the line end, bordering) the cursor.
    #[inline]
    pub fn real_index(&self) -> usize {
        self.real_index
    }

    /// Pixels from the cursor (inclusive) to the end of the current run.
    #[inline]
    pub fn segment_remainder(&self) -> usize {
        self.segment_remainder
    }

    /// The line currently being walked.
    #[inline]
    pub fn line(&self) -> &'a Line<T, C> {
        self.line
    }

    /// The iteration region.
    #[inline]
    pub fn region(&self) -> &Region<D> {
        self.lines.region()
    }

    /// The image being walked.
    #[inline]
    pub fn image(&self) -> &'a RleImage<T, D, C> {
        self.image
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image_abc() -> RleImage<char, 1> {
        let region = Region::from_size([9]).unwrap();
        let mut image = RleImage::new(region, ' ').unwrap();
        let line = Line::from_runs(&[(3, 'A'), (2, 'B'), (4, 'C')]).unwrap();
        image.set_line(&[0], line).unwrap();
        image
    }

    fn state<T: Copy + PartialEq, const D: usize>(
        c: &ScanlineCursor<'_, T, D>,
    ) -> (usize, usize, usize) {
        (c.index0(), c.real_index(), c.segment_remainder())
    }

    #[test]
    fn test_forward_traversal() {
        let image = image_abc();
        let mut c = ScanlineCursor::new(&image, image.buffered_region()).unwrap();
        c.go_to_begin_of_line();
        let mut out = String::new();
        while !c.is_at_end_of_line() {
            out.push(c.value());
            c.step_forward();
        }
        assert_eq!(out, "AAABBCCCC");
        assert_eq!(state(&c), (9, 2, 0));
    }

    #[test]
    fn test_boundary_state() {
        let image = image_abc();
        let mut c = ScanlineCursor::new(&image, image.buffered_region()).unwrap();
        for _ in 0..3 {
            c.step_forward();
        }
        assert_eq!(state(&c), (3, 1, 2));
        assert_eq!(c.value(), 'B');
    }

    #[test]
    fn test_backward_crossing_remainder_is_one() {
        let image = image_abc();
        let mut c = ScanlineCursor::new(&image, image.buffered_region()).unwrap();
        c.seek(3);
        c.step_backward();
        assert_eq!(state(&c), (2, 0, 1));
        assert_eq!(c.value(), 'A');
    }

    #[test]
    fn test_go_to_end_of_line() {
        let image = image_abc();
        let mut c = ScanlineCursor::new(&image, image.buffered_region()).unwrap();
        c.go_to_end_of_line();
        assert!(c.is_at_end_of_line());
        assert_eq!(state(&c), (9, 2, 0));
        c.step_backward();
        assert_eq!(state(&c), (8, 2, 1));
        assert_eq!(c.value(), 'C');
    }

    #[test]
    fn test_go_to_begin_of_line_does_not_search() {
        let image = image_abc();
        let region = Region::new([4], [3]).unwrap();
        let mut c = ScanlineCursor::new(&image, &region).unwrap();
        assert_eq!(state(&c), (4, 1, 1));
        c.go_to_begin_of_line();
        assert_eq!(state(&c), (4, 0, 3));
        c.seek(c.begin_index0());
        assert_eq!(state(&c), (4, 1, 1));
    }

    #[test]
    fn test_seek_matches_stepping() {
        let image = image_abc();
        let mut stepped = ScanlineCursor::new(&image, image.buffered_region()).unwrap();
        let mut sought = stepped.clone();
        for column in 0..9 {
            sought.seek(column);
            assert_eq!(state(&sought), state(&stepped));
            stepped.step_forward();
        }
    }

    #[test]
    fn test_run_span_and_skip_run() {
        let image = image_abc();
        let region = Region::new([1], [6]).unwrap();
        let mut c = ScanlineCursor::new(&image, &region).unwrap();
        let mut spans = Vec::new();
        while !c.is_at_end_of_line() {
            spans.push((c.index0(), c.run_span(), c.value()));
            c.skip_run();
        }
        assert_eq!(spans, vec![(1, 2, 'A'), (3, 2, 'B'), (5, 2, 'C')]);
        assert_eq!(c.run_span(), 0);
    }

    #[test]
    fn test_region_outside_buffer_rejected() {
        let image = image_abc();
        let region = Region::new([5], [5]).unwrap();
        assert!(ScanlineCursor::new(&image, &region).is_err());
    }

    #[test]
    fn test_at_index() {
        let image = image_abc();
        let c = ScanlineCursor::at_index(&image, image.buffered_region(), &[4]).unwrap();
        assert_eq!(state(&c), (4, 1, 1));
        assert_eq!(c.index(), [4]);
        assert!(ScanlineCursor::at_index(&image, image.buffered_region(), &[9]).is_err());
    }

    #[test]
    fn test_empty_region() {
        let image = image_abc();
        let region = Region::new([2], [0]).unwrap();
        let mut c = ScanlineCursor::new(&image, &region).unwrap();
        assert!(c.is_at_end());
        assert!(c.is_at_end_of_line());
        c.next_line();
        assert!(c.is_at_end());
    }

    #[test]
    fn test_go_to_end_of_line_keeps_last_run_when_clipped() {
        let image = image_abc();
        let region = Region::new([0], [5]).unwrap();
        let mut c = ScanlineCursor::new(&image, &region).unwrap();
        c.go_to_end_of_line();
        assert_eq!(state(&c), (5, 2, 0));
        c.step_backward();
        assert_eq!(state(&c), (4, 2, 1));
        assert_eq!(c.value(), 'C');
        c.seek(4);
        assert_eq!(state(&c), (4, 1, 1));
        assert_eq!(c.value(), 'B');
    }

    // In release builds these run only with `--features strict-bounds`.
    #[test]
    #[cfg(any(debug_assertions, feature = "strict-bounds"))]
    #[should_panic(expected = "stepped past end of line")]
    fn test_step_past_end_asserts() {
        let image = image_abc();
        let mut c = ScanlineCursor::new(&image, image.buffered_region()).unwrap();
        c.go_to_end_of_line();
        c.step_forward();
    }

    #[test]
    #[cfg(any(debug_assertions, feature = "strict-bounds"))]
    #[should_panic(expected = "stepped before beginning of line")]
    fn test_step_before_begin_asserts() {
        let image = image_abc();
        let region = Region::new([2], [4]).unwrap();
        let mut c = ScanlineCursor::new(&image, &region).unwrap();
        c.step_backward();
    }

    #[test]
    #[cfg(any(debug_assertions, feature = "strict-bounds"))]
    #[should_panic(expected = "value() read at end of line")]
    fn test_value_at_end_asserts() {
        let image = image_abc();
        let mut c = ScanlineCursor::new(&image, image.buffered_region()).unwrap();
        c.go_to_end_of_line();
        let _ = c.value();
    }
}
