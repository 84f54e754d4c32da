use crate::board::Digit;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents a digit in a specific cell
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[allow(missing_docs)]
pub struct Candidate {
    pub cell: usize,
    pub digit: Digit,
}

impl Candidate {
    /// Constructs a new candidate.
    ///
    /// # Panics
    ///
    /// panics if `!(1..=32).contains(digit)`
    #[inline]
    pub fn new(cell: usize, digit: u8) -> Candidate {
        Candidate {
            cell,
            digit: Digit::new(digit),
        }
    }

    /// Position of this candidate in a grid with `digits` digits per cell.
    #[inline]
    pub(crate) fn bit(self, digits: u8) -> usize {
        self.cell * usize::from(digits) + self.digit.as_index()
    }
}
