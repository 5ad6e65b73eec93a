//! Run - a span of equal-valued pixels
//!
//! A run stores `length` consecutive pixels sharing one value. The length
//! lives in a caller-chosen counter type so that lines of small runs can be
//! kept compact; see [`RunCounter`].

use crate::error::{Error, Result};
use std::fmt::Debug;

/// Integer type used to store run lengths.
///
/// Narrow counters save memory on images with many short runs. A span of
/// equal pixels longer than [`RunCounter::MAX`] is stored as several
/// consecutive runs with the same value.
pub trait RunCounter: Copy + Debug + Eq + Ord + Default {
    /// Largest length a single run can hold.
    const MAX: usize;

    /// Widen to `usize`.
    fn to_usize(self) -> usize;

    /// Narrow from `usize`. Callers guarantee `n <= Self::MAX`.
    fn from_usize(n: usize) -> Self;
}

macro_rules! impl_run_counter {
    ($($t:ty),*) => {
        $(
            impl RunCounter for $t {
                const MAX: usize = if (<$t>::MAX as u128) > (usize::MAX as u128) {
                    usize::MAX
                } else {
                    <$t>::MAX as usize
                };

                #[inline]
                fn to_usize(self) -> usize {
                    self as usize
                }

                #[inline]
                fn from_usize(n: usize) -> Self {
                    debug_assert!(n <= <Self as RunCounter>::MAX);
                    n as $t
                }
            }
        )*
    };
}

impl_run_counter!(u8, u16, u32, u64, usize);

/// One run of a compressed scanline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Run<T, C = u16> {
    length: C,
    value: T,
}

impl<T: Copy, C: RunCounter> Run<T, C> {
    /// Create a run.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRunLength`] if `length` is zero or exceeds
    /// [`RunCounter::MAX`].
    pub fn new(length: usize, value: T) -> Result<Self> {
        if length == 0 || length > C::MAX {
            return Err(Error::InvalidRunLength {
                length,
                max: C::MAX,
            });
        }
        Ok(Self::new_unchecked(length, value))
    }

    /// Create a run without validation.
    #[inline]
    pub(crate) fn new_unchecked(length: usize, value: T) -> Self {
        Self {
            length: C::from_usize(length),
            value,
        }
    }

    /// Number of pixels covered by this run.
    #[inline]
    pub fn len(&self) -> usize {
        self.length.to_usize()
    }

    /// Runs are never empty; present for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pixel value shared by the whole run.
    #[inline]
    pub fn value(&self) -> T {
        self.value
    }

    #[inline]
    pub(crate) fn set_len(&mut self, length: usize) {
        self.length = C::from_usize(length);
    }
}
