use std::fmt;
use std::num::NonZeroU8;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest number of distinct digits a grid may use.
pub const MAX_DIGITS: u8 = 32;

// define digit separately because it has an offset
/// A digit that can be entered in a cell of a grid.
///
/// Digits above 9 are written as letters, `A` for 10 up to `W` for 32.
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Digit(NonZeroU8);

impl Digit {
    /// Constructs a new `Digit`.
    ///
    /// # Panic
    /// Panics, if the digit is not in the range of `1..=32`.
    pub fn new(digit: u8) -> Self {
        match Self::new_checked(digit) {
            Some(digit) => digit,
            None => panic!("digit {} is outside of 1..={}", digit, MAX_DIGITS),
        }
    }

    /// Constructs a new `Digit`. Returns `None`, if the digit is not in the range of `1..=32`.
    pub fn new_checked(digit: u8) -> Option<Self> {
        if digit > MAX_DIGITS {
            return None;
        }
        NonZeroU8::new(digit).map(Digit)
    }

    /// Constructs a new `Digit` from an index, i.e. `digit - 1`.
    ///
    /// # Panic
    /// Panics, if the index is not in the range of `0..32`.
    pub(crate) fn from_index(idx: usize) -> Self {
        assert!(idx < usize::from(MAX_DIGITS));
        Self::new(idx as u8 + 1)
    }

    /// Returns an iterator over the digits `1..=digits`.
    pub fn all(digits: u8) -> impl Iterator<Item = Self> {
        (1..=digits).map(Digit::new)
    }

    /// Returns the digit contained within.
    pub fn get(self) -> u8 {
        self.0.get()
    }

    /// Returns the number contained within as `usize`, offset by `-1`. Guarantees that the numbering starts from `0`.
    pub fn as_index(self) -> usize {
        self.get() as usize - 1
    }

    /// Character used for this digit in the line format.
    pub fn to_char(self) -> char {
        match self.get() {
            d @ 1..=9 => char::from(b'0' + d),
            d => char::from(b'A' + d - 10),
        }
    }

    /// Inverse of [`Digit::to_char`].
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '1'..='9' => Some(Digit::new(ch as u8 - b'0')),
            'A'..='W' => Some(Digit::new(ch as u8 - b'A' + 10)),
            _ => None,
        }
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
