//! Fixed-width bitsets
//!
//! Shadings and grids are packed into slices of `u64` words. This module contains the
//! word level primitives they share, so that the solver itself can be written in
//! terms of set operations. It also contains [`Mask`], the set of digits that are still
//! possible in a single cell.

use crate::board::Digit;
use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub(crate) const WORD_BITS: usize = 64;

/// Number of words needed to store `bits` bits.
pub(crate) fn words_for(bits: usize) -> usize {
    (bits + WORD_BITS - 1) / WORD_BITS
}

/// Population count over all words.
pub(crate) fn count(words: &[u64]) -> usize {
    words.iter().map(|word| word.count_ones() as usize).sum()
}

#[inline]
pub(crate) fn get(words: &[u64], bit: usize) -> bool {
    words[bit / WORD_BITS] & (1 << (bit % WORD_BITS)) != 0
}

#[inline]
pub(crate) fn set(words: &mut [u64], bit: usize) {
    words[bit / WORD_BITS] |= 1 << (bit % WORD_BITS);
}

#[inline]
pub(crate) fn clear(words: &mut [u64], bit: usize) {
    words[bit / WORD_BITS] &= !(1 << (bit % WORD_BITS));
}

fn low_bits(width: usize) -> u64 {
    if width >= WORD_BITS {
        !0
    } else {
        (1 << width) - 1
    }
}

/// Reads `width <= 32` bits starting at `offset`. Fields may straddle a word boundary.
#[inline]
pub(crate) fn field(words: &[u64], offset: usize, width: usize) -> u32 {
    debug_assert!(width <= 32);
    let word = offset / WORD_BITS;
    let shift = offset % WORD_BITS;
    let mut value = words[word] >> shift;
    if shift + width > WORD_BITS {
        value |= words[word + 1] << (WORD_BITS - shift);
    }
    (value & low_bits(width)) as u32
}

/// Overwrites `width <= 32` bits starting at `offset` with the low bits of `value`.
#[inline]
pub(crate) fn set_field(words: &mut [u64], offset: usize, width: usize, value: u32) {
    debug_assert!(width <= 32);
    let mask = low_bits(width);
    let value = u64::from(value) & mask;
    let word = offset / WORD_BITS;
    let shift = offset % WORD_BITS;
    words[word] = (words[word] & !(mask << shift)) | (value << shift);
    if shift + width > WORD_BITS {
        let spill = WORD_BITS - shift;
        words[word + 1] = (words[word + 1] & !(mask >> spill)) | (value >> spill);
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////

/// Iterator over the positions of the set bits in a sequence of words, lowest first.
#[derive(Debug, Clone)]
pub struct Ones<S> {
    words: S,
    index: usize,
    current: u64,
}

impl<S: AsRef<[u64]>> Ones<S> {
    pub(crate) fn new(words: S) -> Self {
        let current = words.as_ref().first().copied().unwrap_or(0);
        Ones {
            words,
            index: 0,
            current,
        }
    }
}

impl<S: AsRef<[u64]>> Iterator for Ones<S> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        loop {
            if self.current != 0 {
                let bit = self.current.trailing_zeros() as usize;
                self.current &= self.current - 1;
                return Some(self.index * WORD_BITS + bit);
            }
            self.index += 1;
            self.current = *self.words.as_ref().get(self.index)?;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self
            .words
            .as_ref()
            .get(self.index + 1..)
            .map_or(0, count);
        let len = self.current.count_ones() as usize + rest;
        (len, Some(len))
    }
}

impl<S: AsRef<[u64]>> ExactSizeIterator for Ones<S> {}

///////////////////////////////////////////////////////////////////////////////////////////////
//                                  Mask
///////////////////////////////////////////////////////////////////////////////////////////////

/// The set of digits that are still possible in one cell.
///
/// Bit `n` stands for the digit `n + 1`. An empty mask is a contradiction,
/// a mask with a single digit is a fixed cell.
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Mask(u32);

/// Potential return value for [`Mask::unique`]
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct Empty;

macro_rules! impl_mask_bitops {
    ( $( $trait:ident, $fn_name:ident, $assign_trait:ident, $assign_fn:ident);* $(;)* ) => {
        $(
            impl $trait for Mask {
                type Output = Self;

                #[inline(always)]
                fn $fn_name(self, other: Self) -> Self {
                    Mask($trait::$fn_name(self.0, other.0))
                }
            }

            impl $trait<Digit> for Mask {
                type Output = Self;

                #[inline(always)]
                fn $fn_name(self, other: Digit) -> Self {
                    $trait::$fn_name(self, Mask::single(other))
                }
            }

            impl $assign_trait for Mask {
                #[inline(always)]
                fn $assign_fn(&mut self, other: Self) {
                    $assign_trait::$assign_fn(&mut self.0, other.0)
                }
            }
        )*
    };
}

impl_mask_bitops!(
    BitAnd, bitand, BitAndAssign, bitand_assign;
    BitOr, bitor, BitOrAssign, bitor_assign;
    BitXor, bitxor, BitXorAssign, bitxor_assign;
);

impl Mask {
    /// Mask without any digit
    pub const NONE: Mask = Mask(0);

    /// All digits `1..=digits`.
    pub fn all(digits: u8) -> Mask {
        Mask(low_bits(usize::from(digits)) as u32)
    }

    /// The even digits of `1..=digits`.
    pub fn even(digits: u8) -> Mask {
        Mask(0xaaaa_aaaa) & Mask::all(digits)
    }

    /// The odd digits of `1..=digits`.
    pub fn odd(digits: u8) -> Mask {
        Mask(0x5555_5555) & Mask::all(digits)
    }

    /// Mask that only contains `digit`.
    pub fn single(digit: Digit) -> Mask {
        Mask(1 << digit.as_index())
    }

    /// Construct a mask from a raw integer.
    pub fn from_bits(bits: u32) -> Mask {
        Mask(bits)
    }

    /// Return the raw integer backing the mask.
    pub fn bits(self) -> u32 {
        self.0
    }

    /// Returns the digits in this mask that aren't present in `other`.
    pub fn without(self, other: Mask) -> Mask {
        Mask(self.0 & !other.0)
    }

    /// Checks if `self` and `other` contain any common digit.
    pub fn overlaps(self, other: Mask) -> bool {
        self.0 & other.0 != 0
    }

    /// Checks if `digit` is part of the mask.
    pub fn contains(self, digit: Digit) -> bool {
        self.overlaps(Mask::single(digit))
    }

    /// Returns the number of digits in this mask.
    pub fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Checks whether this mask contains any digit.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the only digit in this mask, iff only 1 digit exists.
    /// If no digits exist, it returns `Err(Empty)`.
    /// If more than 1 digit exists, it returns `Ok(None)`.
    pub fn unique(self) -> Result<Option<Digit>, Empty> {
        match self.len() {
            0 => Err(Empty),
            1 => Ok(Some(Digit::from_index(self.0.trailing_zeros() as usize))),
            _ => Ok(None),
        }
    }

    /// Iterate over the digits in this mask, smallest first.
    pub fn iter(self) -> impl Iterator<Item = Digit> {
        Ones::new([u64::from(self.0)]).map(Digit::from_index)
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let digits: String = self.iter().map(Digit::to_char).collect();
        f.pad(&digits)
    }
}

impl fmt::Debug for Mask {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Mask({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_straddle_words() {
        let mut words = [0u64; 2];
        set_field(&mut words, 60, 9, 0b1_0110_1011);
        assert_eq!(field(&words, 60, 9), 0b1_0110_1011);
        assert_eq!(words[0] >> 60, 0b1011);
        assert_eq!(words[1], 0b1_0110);

        set_field(&mut words, 60, 9, 0);
        assert_eq!(words, [0, 0]);
    }

    #[test]
    fn ones_iterates_lowest_first() {
        let words = [0b1010u64, 0, 1 << 63];
        let ones: Vec<_> = Ones::new(&words[..]).collect();
        assert_eq!(ones, vec![1, 3, 191]);
        assert_eq!(Ones::new(&words[..]).len(), 3);
        assert_eq!(Ones::new(&[0u64; 0][..]).next(), None);
    }

    #[test]
    fn parity_masks() {
        assert_eq!(Mask::even(9).bits(), 0xaa);
        assert_eq!(Mask::odd(9).bits(), 0x155);
        assert_eq!(Mask::all(32).len(), 32);
        assert_eq!(Mask::even(6).to_string(), "246");
    }

    #[test]
    fn unique() {
        assert_eq!(Mask::NONE.unique(), Err(Empty));
        assert_eq!(Mask::single(Digit::new(4)).unique(), Ok(Some(Digit::new(4))));
        assert_eq!(Mask::all(4).unique(), Ok(None));
    }
}
