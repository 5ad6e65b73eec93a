//! Line - one run-length compressed scanline
//!
//! A line is the ordered list of runs covering the full buffered width of
//! one scanline. The sum of its run lengths is the line width.
//!
//! # Mutation
//!
//! Lines are read-only while a cursor walks them. All mutating methods here
//! rebuild the run list as a whole; they are meant for the image-level
//! write API, not for use during traversal.

use crate::error::{Error, Result};
use crate::run::{Run, RunCounter};

/// A compressed scanline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line<T, C = u16> {
    runs: Vec<Run<T, C>>,
    width: usize,
}

impl<T: Copy + PartialEq, C: RunCounter> Line<T, C> {
    /// Create a line from already validated runs.
    ///
    /// Adjacent runs with equal values are kept as given.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyLine`] if `runs` is empty.
    pub fn new(runs: Vec<Run<T, C>>) -> Result<Self> {
        if runs.is_empty() {
            return Err(Error::EmptyLine);
        }
        let width = runs.iter().map(Run::len).sum();
        Ok(Self { runs, width })
    }

    /// Create a line from `(length, value)` pairs.
    ///
    /// # Errors
    ///
    /// Returns an error if `pairs` is empty or any length is invalid for
    /// the counter type.
    pub fn from_runs(pairs: &[(usize, T)]) -> Result<Self> {
        let runs = pairs
            .iter()
            .map(|&(length, value)| Run::new(length, value))
            .collect::<Result<Vec<_>>>()?;
        Self::new(runs)
    }

    /// Create a line of `width` pixels all set to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyLine`] if `width` is zero.
    pub fn uniform(width: usize, value: T) -> Result<Self> {
        if width == 0 {
            return Err(Error::EmptyLine);
        }
        let mut runs = Vec::with_capacity(width.div_ceil(C::MAX));
        push_merged(&mut runs, width, value);
        Ok(Self { runs, width })
    }

    /// Encode a dense row of pixels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyLine`] if `pixels` is empty.
    pub fn from_pixels(pixels: &[T]) -> Result<Self> {
        if pixels.is_empty() {
            return Err(Error::EmptyLine);
        }
        let mut runs = Vec::new();
        let mut start = 0;
        for i in 1..=pixels.len() {
            if i == pixels.len() || pixels[i] != pixels[start] {
                push_merged(&mut runs, i - start, pixels[start]);
                start = i;
            }
        }
        Ok(Self {
            runs,
            width: pixels.len(),
        })
    }

    /// Full buffered width of the line in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of runs.
    #[inline]
    pub fn run_count(&self) -> usize {
        self.runs.len()
    }

    /// The runs, in column order.
    #[inline]
    pub fn runs(&self) -> &[Run<T, C>] {
        &self.runs
    }

    /// Find the run owning `column`.
    ///
    /// Returns `(run_index, remainder)` where `remainder` counts the pixels
    /// from `column` (inclusive) to the end of that run. A column equal to
    /// the width maps to the one-past-the-end position `(last_run, 0)`.
    ///
    /// This is a linear scan; it is meant for seeking, not per-pixel use.
    /// Columns beyond the width are a caller error and are only checked in
    /// debug builds.
    pub fn locate(&self, column: usize) -> (usize, usize) {
        debug_assert!(
            column <= self.width,
            "column {column} outside line of width {}",
            self.width
        );
        let mut end = 0;
        for (i, run) in self.runs.iter().enumerate() {
            end += run.len();
            if column < end {
                return (i, end - column);
            }
        }
        (self.runs.len() - 1, 0)
    }

    /// Pixel value at `column`, or `None` if it is outside the line.
    pub fn pixel(&self, column: usize) -> Option<T> {
        if column >= self.width {
            return None;
        }
        let (i, _) = self.locate(column);
        Some(self.runs[i].value())
    }

    /// Iterate over the decoded pixels.
    pub fn pixels(&self) -> impl Iterator<Item = T> + '_ {
        self.runs
            .iter()
            .flat_map(|run| std::iter::repeat_n(run.value(), run.len()))
    }

    /// Append the decoded pixels to `out`.
    pub fn decode_into(&self, out: &mut Vec<T>) {
        out.reserve(self.width);
        out.extend(self.pixels());
    }

    /// Set one pixel, splitting the owning run as needed.
    ///
    /// The affected neighbourhood is merged back so that no two adjacent
    /// runs share a value unless the counter limit forces it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `column >= width`.
    pub fn set_pixel(&mut self, column: usize, value: T) -> Result<()> {
        if column >= self.width {
            return Err(Error::IndexOutOfBounds {
                index: column.to_string(),
                region: format!("[0, {})", self.width),
            });
        }
        let (target, remainder) = self.locate(column);
        let run = self.runs[target];
        if run.value() == value {
            return Ok(());
        }

        let left = run.len() - remainder;
        let right = remainder - 1;
        let mut runs = Vec::with_capacity(self.runs.len() + 2);
        for r in &self.runs[..target] {
            push_merged(&mut runs, r.len(), r.value());
        }
        push_merged(&mut runs, left, run.value());
        push_merged(&mut runs, 1, value);
        push_merged(&mut runs, right, run.value());
        for r in &self.runs[target + 1..] {
            push_merged(&mut runs, r.len(), r.value());
        }
        self.runs = runs;
        Ok(())
    }

    /// Merge adjacent runs that share a value.
    ///
    /// Returns the number of runs removed.
    pub fn compact(&mut self) -> usize {
        let before = self.runs.len();
        let mut runs = Vec::with_capacity(before);
        for r in &self.runs {
            push_merged(&mut runs, r.len(), r.value());
        }
        self.runs = runs;
        before - self.runs.len()
    }
}

/// Append `length` pixels of `value`, extending the last run when it has the
/// same value and splitting at the counter maximum.
fn push_merged<T: Copy + PartialEq, C: RunCounter>(
    runs: &mut Vec<Run<T, C>>,
    mut length: usize,
    value: T,
) {
    if let Some(last) = runs.last_mut() {
        if last.value() == value {
            let take = (C::MAX - last.len()).min(length);
            last.set_len(last.len() + take);
            length -= take;
        }
    }
    while length > 0 {
        let chunk = length.min(C::MAX);
        runs.push(Run::new_unchecked(chunk, value));
        length -= chunk;
    }
}
