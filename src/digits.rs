//! Operand digit-length indices
//!
//! Each benchmark draws its operands from a sample pool selected by the
//! number of decimal digits in the operand. Pools exist for 0 through 16
//! digits, the full mantissa range of a 64-bit decimal.

use std::fmt;
use std::iter::FusedIterator;
use std::ops::RangeInclusive;
use thiserror::Error;

/// Errors for digit-length construction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DigitCountError {
    #[error("Digit count {value} out of range: must be at most {max}")]
    OutOfRange { value: u8, max: u8 },
}

/// Index of a sample pool, by operand digit count (0..=16)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DigitCount(u8);

impl DigitCount {
    /// Largest digit count with a sample pool
    pub const MAX: u8 = 16;

    /// Smallest digit count
    pub const ZERO: DigitCount = DigitCount(0);

    /// Create a digit count, rejecting values above [`DigitCount::MAX`]
    pub fn new(value: u8) -> Result<Self, DigitCountError> {
        if value > Self::MAX {
            return Err(DigitCountError::OutOfRange {
                value,
                max: Self::MAX,
            });
        }
        Ok(Self(value))
    }

    /// Raw digit count
    pub fn get(self) -> u8 {
        self.0
    }

    /// All digit counts in ascending order
    pub fn all() -> DigitCounts {
        DigitCounts(0..=Self::MAX)
    }

    /// Digit counts from `self` up to [`DigitCount::MAX`], inclusive
    pub fn up_to_max(self) -> DigitCounts {
        DigitCounts(self.0..=Self::MAX)
    }
}

impl From<DigitCount> for u8 {
    fn from(digits: DigitCount) -> Self {
        digits.0
    }
}

impl fmt::Display for DigitCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ascending run of digit counts ending at [`DigitCount::MAX`]
#[derive(Debug, Clone)]
pub struct DigitCounts(RangeInclusive<u8>);

impl Iterator for DigitCounts {
    type Item = DigitCount;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(DigitCount)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl DoubleEndedIterator for DigitCounts {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().map(DigitCount)
    }
}

impl ExactSizeIterator for DigitCounts {}

impl FusedIterator for DigitCounts {}
