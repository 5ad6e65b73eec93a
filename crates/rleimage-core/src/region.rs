//! Region - an N-dimensional half-open box of pixel indices
//!
//! Axis 0 is the fastest-varying axis (the scanline direction). A region
//! covers `[index[d], index[d] + size[d])` along every axis `d`.

use crate::error::{Error, Result};
use std::fmt;

/// Multi-dimensional pixel index.
pub type Index<const D: usize> = [i64; D];

/// N-dimensional region.
///
/// A small `Copy` value, passed around freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region<const D: usize> {
    /// First index along each axis
    pub index: Index<D>,
    /// Extent along each axis
    pub size: [usize; D],
}

impl<const D: usize> Region<D> {
    /// Create a region.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRegion`] if `D == 0`.
    pub fn new(index: Index<D>, size: [usize; D]) -> Result<Self> {
        if D == 0 {
            return Err(Error::InvalidRegion(
                "regions need at least one axis".to_string(),
            ));
        }
        Ok(Self { index, size })
    }

    /// Region starting at the origin.
    pub fn from_size(size: [usize; D]) -> Result<Self> {
        Self::new([0; D], size)
    }

    /// First index along `axis`.
    #[inline]
    pub fn begin(&self, axis: usize) -> i64 {
        self.index[axis]
    }

    /// One past the last index along `axis`.
    #[inline]
    pub fn end(&self, axis: usize) -> i64 {
        self.index[axis] + self.size[axis] as i64
    }

    /// Total number of pixels.
    pub fn number_of_pixels(&self) -> usize {
        self.size.iter().product()
    }

    /// True when any axis has zero extent.
    pub fn is_empty(&self) -> bool {
        self.size.contains(&0)
    }

    /// Check whether `index` lies inside the region.
    pub fn contains_index(&self, index: &Index<D>) -> bool {
        (0..D).all(|d| index[d] >= self.begin(d) && index[d] < self.end(d))
    }

    /// Check whether `self` lies entirely inside `other`.
    ///
    /// An empty region is inside any region.
    pub fn is_inside(&self, other: &Region<D>) -> bool {
        if self.is_empty() {
            return true;
        }
        (0..D).all(|d| self.begin(d) >= other.begin(d) && self.end(d) <= other.end(d))
    }

    /// Intersection of two regions, or `None` if they do not overlap.
    pub fn crop(&self, other: &Region<D>) -> Option<Region<D>> {
        let mut index = [0; D];
        let mut size = [0; D];
        for d in 0..D {
            let begin = self.begin(d).max(other.begin(d));
            let end = self.end(d).min(other.end(d));
            if end <= begin {
                return None;
            }
            index[d] = begin;
            size[d] = (end - begin) as usize;
        }
        Some(Region { index, size })
    }

    pub(crate) fn require_inside(&self, buffered: &Region<D>) -> Result<()> {
        if self.is_inside(buffered) {
            Ok(())
        } else {
            Err(Error::RegionOutOfBounds {
                requested: self.to_string(),
                buffered: buffered.to_string(),
            })
        }
    }
}

impl<const D: usize> fmt::Display for Region<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "index {:?} size {:?}", self.index, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        let r = Region::new([2, -1], [3, 4]).unwrap();
        assert_eq!(r.begin(0), 2);
        assert_eq!(r.end(0), 5);
        assert_eq!(r.begin(1), -1);
        assert_eq!(r.end(1), 3);
        assert_eq!(r.number_of_pixels(), 12);
    }

    #[test]
    fn test_zero_dimensional_rejected() {
        assert!(Region::<0>::new([], []).is_err());
    }

    #[test]
    fn test_contains_index() {
        let r = Region::from_size([4, 2]).unwrap();
        assert!(r.contains_index(&[0, 0]));
        assert!(r.contains_index(&[3, 1]));
        assert!(!r.contains_index(&[4, 1]));
        assert!(!r.contains_index(&[0, -1]));
    }

    #[test]
    fn test_is_inside() {
        let outer = Region::from_size([10, 10]).unwrap();
        let inner = Region::new([3, 2], [4, 8]).unwrap();
        let spill = Region::new([3, 2], [4, 9]).unwrap();
        assert!(inner.is_inside(&outer));
        assert!(!spill.is_inside(&outer));
        assert!(Region::new([50, 50], [0, 3]).unwrap().is_inside(&outer));
    }

    #[test]
    fn test_crop() {
        let a = Region::from_size([10, 10]).unwrap();
        let b = Region::new([7, -3], [5, 5]).unwrap();
        let c = a.crop(&b).unwrap();
        assert_eq!(c.index, [7, 0]);
        assert_eq!(c.size, [3, 2]);
        assert!(a.crop(&Region::new([10, 0], [2, 2]).unwrap()).is_none());
    }
}
