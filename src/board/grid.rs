use crate::bitset::{self, Mask};
use crate::board::{square_width, Candidate, CandidateTable, Digit, Shading, MAX_CELLS, MAX_DIGITS};
use crate::errors::FromValuesError;
use crate::parse_errors::{InvalidEntry, ParseError};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The state of a puzzle: one [`Mask`] of possible digits per cell.
///
/// The masks are packed back to back, so candidate `(cell, digit)` is bit
/// `cell * digits + digit - 1`. Fixed cells have a single candidate, open cells
/// have several. A cell without candidates makes the grid unsolvable.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Grid {
    cells: u16,
    digits: u8,
    words: Box<[u64]>,
}

impl Grid {
    fn zeroed(cells: usize, digits: u8) -> Grid {
        assert!(
            cells <= MAX_CELLS,
            "grids are limited to {} cells, got {}",
            MAX_CELLS,
            cells
        );
        assert!(
            (1..=MAX_DIGITS).contains(&digits),
            "digit count {} is outside of 1..={}",
            digits,
            MAX_DIGITS
        );
        Grid {
            cells: cells as u16,
            digits,
            words: vec![0; bitset::words_for(cells * usize::from(digits))].into_boxed_slice(),
        }
    }

    /// A grid of `cells` cells in which every digit of `1..=digits` is still possible everywhere.
    ///
    /// # Panics
    /// Panics if `cells > 256` or `digits` is not in `1..=32`.
    pub fn open(cells: usize, digits: u8) -> Grid {
        Grid::expand(Shading::full(cells), digits, Mask::all(digits))
    }

    /// Aligns a shading with the grid layout: every cell in `shading` gets `mask`,
    /// every other cell gets no candidates at all.
    ///
    /// # Panics
    /// Panics if `digits` is not in `1..=32`.
    pub fn expand(shading: Shading, digits: u8, mask: Mask) -> Grid {
        let mut grid = Grid::zeroed(shading.universe(), digits);
        let mask = mask & Mask::all(digits);
        for cell in shading {
            grid.set_mask(cell, mask);
        }
        grid
    }

    /// The "1-grid" of a shading, all digits possible in the shaded cells and none elsewhere.
    pub fn from_shading(shading: Shading, digits: u8) -> Grid {
        Grid::expand(shading, digits, Mask::all(digits))
    }

    /// Colors each cell with the number of the region it belongs to, counting from 1.
    /// Cells in several regions get several candidates, cells in none get an empty mask.
    ///
    /// # Panics
    /// Panics if `regions` is empty, contains more than 32 shadings
    /// or shadings of different sizes.
    pub fn from_regions(regions: &[Shading]) -> Grid {
        assert!(!regions.is_empty(), "no regions given");
        let cells = regions[0].universe();
        let mut grid = Grid::zeroed(cells, regions.len() as u8);
        for (idx, region) in regions.iter().enumerate() {
            assert_eq!(region.universe(), cells);
            let digit = Digit::from_index(idx);
            for cell in *region {
                grid.set_mask(cell, grid.mask(cell) | digit);
            }
        }
        grid
    }

    /// Builds a grid from one value per cell, `0` for open cells.
    pub fn from_values(values: &[u8], digits: u8) -> Result<Grid, FromValuesError> {
        if values.is_empty() || values.len() > MAX_CELLS {
            return Err(FromValuesError::WrongLength(values.len()));
        }
        let mut grid = Grid::open(values.len(), digits);
        for (cell, &value) in values.iter().enumerate() {
            if value == 0 {
                continue;
            }
            if value > digits {
                return Err(FromValuesError::ValueOutOfRange {
                    cell,
                    value,
                    digits,
                });
            }
            grid.set_mask(cell, Mask::single(Digit::new(value)));
        }
        Ok(grid)
    }

    /// One value per cell, the digit for fixed cells and `0` for all others.
    pub fn values(&self) -> Vec<u8> {
        (0..self.cells())
            .map(|cell| match self.mask(cell).unique() {
                Ok(Some(digit)) => digit.get(),
                _ => 0,
            })
            .collect()
    }

    /// Reads a grid in the line format, one token per cell.
    ///
    /// Accepted tokens are `1`..`9` and `A`..`W` for the digits 1 to 32,
    /// `.`, `_` or `0` for open cells, `e` for cells that must be even and `o` for cells
    /// that must be odd. Whitespace and the delimiters `|`, `-` and `+` are skipped,
    /// so block layouts can be read as well.
    ///
    /// # Panics
    /// Panics if `digits` is not in `1..=32`.
    pub fn parse(text: &str, cells: usize, digits: u8) -> Result<Grid, ParseError> {
        if cells > MAX_CELLS {
            return Err(ParseError::CellCount(cells));
        }
        let mut grid = Grid::open(cells, digits);
        let mut cell = 0;
        for ch in text.chars() {
            let mask = match ch {
                '.' | '_' | '0' => Mask::all(digits),
                'e' => Mask::even(digits),
                'o' => Mask::odd(digits),
                ch if ch.is_whitespace() || matches!(ch, '|' | '-' | '+') => continue,
                ch => match Digit::from_char(ch) {
                    Some(digit) if digit.get() <= digits => Mask::single(digit),
                    Some(digit) => {
                        return Err(ParseError::DigitOutOfRange {
                            cell,
                            digit: digit.get(),
                            digits,
                        })
                    }
                    None => return Err(ParseError::InvalidEntry(InvalidEntry { cell, ch })),
                },
            };
            // surplus tokens are only counted, for the error below
            if cell < cells {
                grid.set_mask(cell, mask);
            }
            cell += 1;
        }
        if cell != cells {
            return Err(ParseError::WrongCellCount {
                expected: cells,
                found: cell,
            });
        }
        Ok(grid)
    }

    /// Writes the grid in the line format read by [`Grid::parse`].
    ///
    /// Masks that are neither open, fixed nor a parity class are written as `?`,
    /// empty masks as `!`.
    pub fn to_line(&self) -> String {
        (0..self.cells()).map(|cell| self.token(cell)).collect()
    }

    fn token(&self, cell: usize) -> char {
        let mask = self.mask(cell);
        match mask.unique() {
            Ok(Some(digit)) => digit.to_char(),
            Err(_) => '!',
            Ok(None) if mask == Mask::all(self.digits) => '.',
            Ok(None) if mask == Mask::even(self.digits) => 'e',
            Ok(None) if mask == Mask::odd(self.digits) => 'o',
            Ok(None) => '?',
        }
    }

    /// Number of cells.
    pub fn cells(&self) -> usize {
        usize::from(self.cells)
    }

    /// Number of digits.
    pub fn digits(&self) -> u8 {
        self.digits
    }

    /// The digits that are still possible in `cell`.
    #[inline]
    pub fn mask(&self, cell: usize) -> Mask {
        assert!(cell < self.cells());
        let width = usize::from(self.digits);
        Mask::from_bits(bitset::field(&self.words, cell * width, width))
    }

    /// Replaces the candidates of `cell`. Digits above the digit count are dropped.
    #[inline]
    pub fn set_mask(&mut self, cell: usize, mask: Mask) {
        assert!(cell < self.cells());
        let width = usize::from(self.digits);
        bitset::set_field(&mut self.words, cell * width, width, mask.bits());
    }

    /// Checks whether `candidate` is still possible.
    pub fn contains(&self, candidate: Candidate) -> bool {
        candidate.cell < self.cells()
            && candidate.digit.get() <= self.digits
            && bitset::get(&self.words, candidate.bit(self.digits))
    }

    /// Rules out `candidate`.
    pub fn remove(&mut self, candidate: Candidate) {
        assert!(candidate.cell < self.cells() && candidate.digit.get() <= self.digits);
        bitset::clear(&mut self.words, candidate.bit(self.digits));
    }

    /// The cells in which `digit` is still possible.
    pub fn plane(&self, digit: Digit) -> Shading {
        let mut plane = Shading::empty(self.cells());
        for cell in 0..self.cells() {
            if bitset::get(&self.words, Candidate { cell, digit }.bit(self.digits)) {
                plane.insert(cell);
            }
        }
        plane
    }

    /// Rules out `digit` in every cell of `shading`.
    pub fn remove_digit(&mut self, shading: Shading, digit: Digit) {
        debug_assert_eq!(shading.universe(), self.cells());
        for cell in shading {
            bitset::clear(&mut self.words, Candidate { cell, digit }.bit(self.digits));
        }
    }

    /// Fixes every cell of `shading` to `digit`.
    pub fn fix(&mut self, shading: Shading, digit: Digit) {
        debug_assert_eq!(shading.universe(), self.cells());
        for cell in shading {
            self.set_mask(cell, Mask::single(digit));
        }
    }

    /// Checks whether every candidate of `self` is also a candidate of `other`.
    pub fn is_subset(&self, other: &Grid) -> bool {
        self.cells == other.cells
            && self.digits == other.digits
            && self
                .words
                .iter()
                .zip(other.words.iter())
                .all(|(a, b)| a & !b == 0)
    }

    /// Total number of candidates left.
    pub fn count(&self) -> usize {
        bitset::count(&self.words)
    }

    /// Number of cells in which `digit` is still possible.
    pub fn count_digit(&self, digit: Digit) -> usize {
        self.plane(digit).len()
    }

    /// Checks whether `cell` holds exactly one candidate.
    pub fn is_fixed(&self, cell: usize) -> bool {
        self.mask(cell).len() == 1
    }

    /// Checks whether every cell holds exactly one candidate.
    /// Whether the digits obey any rules is up to the [`Geometry`](crate::Geometry).
    pub fn is_filled(&self) -> bool {
        (0..self.cells()).all(|cell| self.is_fixed(cell))
    }

    /// Iterate over every remaining candidate.
    pub fn candidates(&self) -> impl Iterator<Item = Candidate> + '_ {
        let digits = usize::from(self.digits);
        bitset::Ones::new(&self.words[..]).map(move |bit| Candidate {
            cell: bit / digits,
            digit: Digit::from_index(bit % digits),
        })
    }

    /// Tabulates the candidates of each cell, `width` cells per row.
    pub fn candidate_table(&self, width: usize) -> CandidateTable {
        CandidateTable::new(self, width)
    }
}

// Square grids are drawn row by row, everything else on a single line.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let cells = self.cells();
        let width = square_width(cells).unwrap_or(cells.max(1));
        for cell in 0..cells {
            if cell != 0 && cell % width == 0 {
                writeln!(f)?;
            }
            write!(f, "{}", self.token(cell))?;
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Grid<{}x{}>({})", self.cells, self.digits, self.to_line())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout() {
        let mut grid = Grid::open(81, 9);
        assert_eq!(grid.count(), 729);
        assert_eq!(grid.mask(80), Mask::all(9));

        grid.set_mask(7, Mask::single(Digit::new(3)));
        assert_eq!(grid.mask(7).unique(), Ok(Some(Digit::new(3))));
        assert_eq!(grid.mask(6), Mask::all(9));
        assert_eq!(grid.mask(8), Mask::all(9));
        assert!(grid.contains(Candidate::new(7, 3)));
        assert!(!grid.contains(Candidate::new(7, 4)));
        assert_eq!(grid.count(), 729 - 8);
    }

    #[test]
    fn planes() {
        let mut grid = Grid::open(16, 4);
        let row = Shading::from_cells(16, 0..4).unwrap();
        grid.remove_digit(row, Digit::new(2));
        assert_eq!(grid.plane(Digit::new(2)), !row);
        assert_eq!(grid.count_digit(Digit::new(1)), 16);

        grid.fix(row, Digit::new(1));
        assert!(grid.is_fixed(3));
        assert_eq!(grid.plane(Digit::new(3)), !row);
    }

    #[test]
    fn parse_tokens() {
        let grid = Grid::parse("1.eo | 4_0- 3+2 ", 9, 9).unwrap();
        assert_eq!(grid.values(), vec![1, 0, 0, 0, 4, 0, 0, 3, 2]);
        assert_eq!(grid.mask(2), Mask::even(9));
        assert_eq!(grid.mask(3), Mask::odd(9));
        assert_eq!(grid.to_line(), "1.eo4..32");
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            Grid::parse("1.x.", 4, 4),
            Err(ParseError::InvalidEntry(InvalidEntry { cell: 2, ch: 'x' }))
        );
        assert_eq!(
            Grid::parse("1...5", 5, 4),
            Err(ParseError::DigitOutOfRange {
                cell: 4,
                digit: 5,
                digits: 4
            })
        );
        assert_eq!(
            Grid::parse("1..", 4, 4),
            Err(ParseError::WrongCellCount {
                expected: 4,
                found: 3
            })
        );
        assert_eq!(
            Grid::parse("1....", 4, 4),
            Err(ParseError::WrongCellCount {
                expected: 4,
                found: 5
            })
        );
    }

    #[test]
    fn oversized_grids_are_rejected() {
        assert_eq!(
            Grid::parse(&".".repeat(300), 300, 4),
            Err(ParseError::CellCount(300))
        );
        assert_eq!(Grid::parse(&".".repeat(256), 256, 16).unwrap().cells(), 256);
    }

    #[test]
    fn one_grid_of_a_shading() {
        let diagonal = Shading::from_cells(16, vec![0, 5, 10, 15]).unwrap();
        let grid = Grid::from_shading(diagonal, 4);
        assert_eq!(grid.cells(), 16);
        for digit in Digit::all(4) {
            assert_eq!(grid.plane(digit), diagonal);
        }
        assert_eq!(grid.mask(5), Mask::all(4));
        assert!(grid.mask(1).is_empty());
        assert_eq!(grid.count(), 16);

        let open = Grid::open(16, 4);
        assert!(grid.is_subset(&open));
        assert!(!open.is_subset(&grid));
        assert_eq!(Grid::from_shading(Shading::full(16), 4), open);
    }

    #[test]
    fn candidates_and_removal() {
        let mut grid = Grid::parse("1.2.", 4, 2).unwrap();
        grid.remove(Candidate::new(1, 2));
        assert_eq!(grid.mask(1).unique(), Ok(Some(Digit::new(1))));
        assert!(!grid.contains(Candidate::new(1, 2)));

        let candidates: Vec<Candidate> = grid.candidates().collect();
        assert_eq!(
            candidates,
            vec![
                Candidate::new(0, 1),
                Candidate::new(1, 1),
                Candidate::new(2, 2),
                Candidate::new(3, 1),
                Candidate::new(3, 2),
            ]
        );
        assert_eq!(candidates.len(), grid.count());
    }

    #[test]
    fn values_roundtrip() {
        let values = [1, 0, 3, 16, 0, 12];
        let grid = Grid::from_values(&values, 16).unwrap();
        assert_eq!(grid.values(), values);
        assert_eq!(grid.to_line(), "1.3G.C");
        assert_eq!(
            Grid::from_values(&[1, 5], 4),
            Err(FromValuesError::ValueOutOfRange {
                cell: 1,
                value: 5,
                digits: 4
            })
        );
    }

    #[test]
    fn regions() {
        let left = Shading::from_cells(4, vec![0, 2]).unwrap();
        let right = Shading::from_cells(4, vec![1, 3]).unwrap();
        let grid = Grid::from_regions(&[left, right]);
        assert_eq!(grid.values(), vec![1, 2, 1, 2]);
    }

    #[test]
    fn display_square() {
        let grid = Grid::parse("1221", 4, 2).unwrap();
        assert_eq!(grid.to_string(), "12\n21");
        let grid = Grid::parse("1.o", 3, 3).unwrap();
        assert_eq!(grid.to_string(), "1.o");
    }
}
