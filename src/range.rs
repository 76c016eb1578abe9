use core::ops::RangeInclusive;

use log::debug;

use crate::{Error, Result};

/// Inclusive index range `[left, right]` into a slice. `left > right` denotes the empty range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub left: usize,
    pub right: usize,
}

impl Range {
    pub const fn new(left: usize, right: usize) -> Self {
        Self { left, right }
    }

    /// Validates `[left, right]` as a non-empty range inside a slice of length `len`.
    pub fn checked(len: usize, left: usize, right: usize) -> Result<Self> {
        if left > right || right >= len {
            debug!("rejecting range [{left}, {right}] for length {len}");
            return Err(Error::InvalidRange { left, right, len });
        }

        Ok(Self::new(left, right))
    }

    pub const fn len(&self) -> usize {
        if self.left > self.right {
            0
        } else {
            self.right - self.left + 1
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.left > self.right
    }

    pub(crate) fn indices(&self) -> RangeInclusive<usize> {
        self.left..=self.right
    }
}
