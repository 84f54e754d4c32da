use crate::bitset::{self, Ones, WORD_BITS};
use crate::errors::CellOutOfRange;
use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest number of cells a grid may have.
pub const MAX_CELLS: usize = 256;

const WORDS: usize = MAX_CELLS / WORD_BITS;

/// A set of cells.
///
/// Shadings are used for houses, regions and the cells in which a single digit can still
/// be placed. Every shading knows the size of the grid it belongs to, so that
/// its complement is taken relative to that grid.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Shading {
    words: [u64; WORDS],
    cells: u16,
}

///////////////////////////////////////////////////////////////////////////////////////////////
//                                  Bitops
///////////////////////////////////////////////////////////////////////////////////////////////

macro_rules! impl_binary_bitops {
    ( $( $trait:ident, $fn_name:ident, $assign_trait:ident, $assign_fn:ident);* $(;)* ) => {
        $(
            impl $trait for Shading {
                type Output = Self;

                #[inline(always)]
                fn $fn_name(mut self, other: Self) -> Self {
                    $assign_trait::$assign_fn(&mut self, other);
                    self
                }
            }

            impl $assign_trait for Shading {
                #[inline(always)]
                fn $assign_fn(&mut self, other: Self) {
                    debug_assert_eq!(self.cells, other.cells);
                    for (word, other) in self.words.iter_mut().zip(other.words.iter()) {
                        $assign_trait::$assign_fn(word, *other);
                    }
                }
            }
        )*
    };
}

impl_binary_bitops!(
    BitAnd, bitand, BitAndAssign, bitand_assign;
    BitOr, bitor, BitOrAssign, bitor_assign;
    BitXor, bitxor, BitXorAssign, bitxor_assign;
);

impl Not for Shading {
    type Output = Self;

    fn not(self) -> Self {
        Shading::full(self.universe()).without(self)
    }
}

impl Shading {
    /// The empty shading over a grid of `cells` cells.
    ///
    /// # Panics
    /// Panics if `cells > 256`.
    pub fn empty(cells: usize) -> Shading {
        assert!(
            cells <= MAX_CELLS,
            "grids are limited to {} cells, got {}",
            MAX_CELLS,
            cells
        );
        Shading {
            words: [0; WORDS],
            cells: cells as u16,
        }
    }

    /// The shading that contains every cell of a grid with `cells` cells.
    ///
    /// # Panics
    /// Panics if `cells > 256`.
    pub fn full(cells: usize) -> Shading {
        let mut shading = Shading::empty(cells);
        for (idx, word) in shading.words.iter_mut().enumerate() {
            let start = idx * WORD_BITS;
            *word = match cells.saturating_sub(start) {
                0 => 0,
                n if n >= WORD_BITS => !0,
                n => (1 << n) - 1,
            };
        }
        shading
    }

    /// Builds a shading from a list of cell addresses.
    pub fn from_cells(
        cells: usize,
        members: impl IntoIterator<Item = usize>,
    ) -> Result<Shading, CellOutOfRange> {
        let mut shading = Shading::empty(cells);
        for cell in members {
            if cell >= cells {
                return Err(CellOutOfRange { cell, cells });
            }
            bitset::set(&mut shading.words, cell);
        }
        Ok(shading)
    }

    /// The shading that only contains `cell`.
    ///
    /// # Panics
    /// Panics if `cell` is not part of the grid.
    pub fn single(cells: usize, cell: usize) -> Shading {
        let mut shading = Shading::empty(cells);
        shading.insert(cell);
        shading
    }

    /// Number of cells in the grid this shading belongs to.
    pub fn universe(&self) -> usize {
        usize::from(self.cells)
    }

    /// Adds `cell` to the shading.
    ///
    /// # Panics
    /// Panics if `cell` is not part of the grid.
    pub fn insert(&mut self, cell: usize) {
        assert!(cell < self.universe(), "cell {} is out of range", cell);
        bitset::set(&mut self.words, cell);
    }

    /// Removes `cell` from the shading.
    pub fn remove(&mut self, cell: usize) {
        if cell < self.universe() {
            bitset::clear(&mut self.words, cell);
        }
    }

    /// Checks whether `cell` is part of the shading.
    pub fn contains(&self, cell: usize) -> bool {
        cell < self.universe() && bitset::get(&self.words, cell)
    }

    /// Returns the cells in this shading that aren't present in `other`.
    pub fn without(mut self, other: Shading) -> Shading {
        debug_assert_eq!(self.cells, other.cells);
        for (word, other) in self.words.iter_mut().zip(other.words.iter()) {
            *word &= !other;
        }
        self
    }

    /// Checks if `self` and `other` share any cell.
    pub fn overlaps(&self, other: Shading) -> bool {
        !(*self & other).is_empty()
    }

    /// Checks if every cell of `self` is also part of `other`.
    pub fn is_subset(&self, other: Shading) -> bool {
        self.without(other).is_empty()
    }

    /// Number of cells in this shading.
    pub fn len(&self) -> usize {
        bitset::count(&self.words)
    }

    /// Checks whether the shading contains no cell.
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&word| word == 0)
    }

    /// Checks whether the shading contains the whole grid.
    pub fn is_full(&self) -> bool {
        *self == Shading::full(self.universe())
    }

    /// The lowest cell in the shading.
    pub fn first(&self) -> Option<usize> {
        self.iter().next()
    }

    /// Iterate over the cells in ascending order.
    pub fn iter(&self) -> Ones<[u64; WORDS]> {
        Ones::new(self.words)
    }
}

impl IntoIterator for Shading {
    type Item = usize;
    type IntoIter = Ones<[u64; WORDS]>;

    fn into_iter(self) -> Self::IntoIter {
        Ones::new(self.words)
    }
}

// Square grids are drawn row by row, everything else on a single line.
impl fmt::Display for Shading {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let cells = self.universe();
        let width = crate::board::square_width(cells).unwrap_or(cells.max(1));
        for cell in 0..cells {
            if cell != 0 && cell % width == 0 {
                writeln!(f)?;
            }
            f.write_str(if self.contains(cell) { "x" } else { "." })?;
        }
        Ok(())
    }
}

impl fmt::Debug for Shading {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Shading<{}>", self.cells)?;
        f.debug_set().entries(self.iter()).finish()
    }
}
