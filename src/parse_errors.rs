//! Errors that may be encountered when reading a grid from a string

/// An invalid grid entry encountered during parsing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct InvalidEntry {
    /// Number of the cell the entry would have filled, counting from 0
    pub cell: usize,
    /// The parsed invalid char
    pub ch: char,
}

/// A structure representing an error caused when parsing a grid
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ParseError {
    /// Accepted values are digits, `A`..`W` for digits above 9,
    /// '.', '_' or '0' for open cells and 'e' or 'o' for parity cells.
    #[error("cell {} contains invalid character '{}'", .0.cell, .0.ch)]
    InvalidEntry(InvalidEntry),
    /// Grids hold at most 256 cells.
    #[error("grids are limited to 256 cells, requested {0}")]
    CellCount(usize),
    /// Number of cells does not match the grid size.
    #[error("grid contains {found} cells instead of required {expected}")]
    WrongCellCount {
        /// Cells expected by the geometry
        expected: usize,
        /// Cells supplied
        found: usize,
    },
    /// A digit is valid syntax but too large for the grid.
    #[error("cell {cell} contains digit {digit}, but the grid only uses {digits} digits")]
    DigitOutOfRange {
        /// Number of the cell, counting from 0
        cell: usize,
        /// The parsed digit
        digit: u8,
        /// Number of digits of the grid
        digits: u8,
    },
}
