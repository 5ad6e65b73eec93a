//! Line enumeration over the slow axes of a region
//!
//! Visits every line position of a region in ascending lexicographic order
//! of the axis `1..D` indices, axis 1 varying fastest. This matches the
//! storage order of [`RleImage`](crate::RleImage) lines.

use crate::region::{Index, Region};

/// Cursor over the line positions of a region.
///
/// Component 0 of [`current`](Self::current) is always the region's first
/// column; only components `1..D` move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineEnumerator<const D: usize> {
    region: Region<D>,
    current: Index<D>,
    exhausted: bool,
}

impl<const D: usize> LineEnumerator<D> {
    /// Start at the first line position of `region`.
    ///
    /// An empty region is exhausted from the start.
    pub fn new(region: Region<D>) -> Self {
        Self {
            region,
            current: region.index,
            exhausted: region.is_empty(),
        }
    }

    /// Move to the next line position.
    ///
    /// After the last position the enumerator becomes exhausted and
    /// [`current`](Self::current) keeps reporting the last visited
    /// position. Advancing an exhausted enumerator does nothing.
    pub fn advance(&mut self) {
        if self.exhausted {
            return;
        }
        for d in 1..D {
            if self.current[d] + 1 < self.region.end(d) {
                self.current[d] += 1;
                for e in 1..d {
                    self.current[e] = self.region.begin(e);
                }
                return;
            }
        }
        self.exhausted = true;
    }

    /// True once advanced past the final line position.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// The active line position. Meaningless once exhausted.
    #[inline]
    pub fn current(&self) -> &Index<D> {
        &self.current
    }

    /// The region being enumerated.
    #[inline]
    pub fn region(&self) -> &Region<D> {
        &self.region
    }

    /// Return to the first line position.
    pub fn reset(&mut self) {
        *self = Self::new(self.region);
    }

    /// Jump to the line through `index`, which must lie inside the region.
    pub fn set_position(&mut self, index: &Index<D>) {
        debug_assert!(self.region.contains_index(index));
        self.current = *index;
        self.current[0] = self.region.begin(0);
        self.exhausted = false;
    }
}
