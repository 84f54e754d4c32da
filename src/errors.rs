//! Errors raised while building geometries, converting grids or generating puzzles
#[cfg(doc)]
use crate::{generator, Geometry, Grid};

/// A cell address that lies outside the grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("cell {cell} is out of range for a grid of {cells} cells")]
pub struct CellOutOfRange {
    /// The offending address
    pub cell: usize,
    /// Number of cells in the grid
    pub cells: usize,
}

/// Error for [`Geometry::builder`] and [`Geometry::from_houses`]
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    /// Grids hold between 1 and 256 cells.
    #[error("cell count {0} is outside of 1..=256")]
    CellCount(usize),
    /// Grids hold between 1 and 32 digits.
    #[error("digit count {0} is outside of 1..=32")]
    DigitCount(u8),
    /// Every digit has to appear equally often.
    #[error("{cells} cells cannot be split evenly between {digits} digits")]
    Indivisible {
        /// Number of cells
        cells: usize,
        /// Number of digits
        digits: u8,
    },
    /// A shading was built for a grid of a different size.
    #[error("shading covers {found} cells, expected {expected}")]
    UniverseMismatch {
        /// Cell count of the geometry
        expected: usize,
        /// Cell count of the shading
        found: usize,
    },
    /// A cell address outside of the grid was referenced.
    #[error(transparent)]
    CellOutOfRange(#[from] CellOutOfRange),
    /// No houses were declared, so the grid size is unknown.
    #[error("geometry declares no houses")]
    NoHouses,
    /// Houses must contain exactly one cell per digit.
    #[error("house {index} contains {size} cells instead of {digits}")]
    HouseSize {
        /// Position of the house in declaration order
        index: usize,
        /// Number of cells in the house
        size: usize,
        /// Number of digits
        digits: u8,
    },
    /// Every cell has to belong to at least one house.
    #[error("cell {0} is not part of any house")]
    UncoveredCell(usize),
    /// Adjacency is declared pairwise.
    #[error("adjacency entry {index} contains {size} cells instead of 2")]
    Adjacency {
        /// Position of the entry in declaration order
        index: usize,
        /// Number of cells in the entry
        size: usize,
    },
}

/// Error for [`Grid::from_values`]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum FromValuesError {
    /// Grids hold at most 256 cells.
    #[error("value slice should have length 1..=256, found {0}")]
    WrongLength(usize),
    /// Values range from 0 (open) to the digit count.
    #[error("cell {cell} contains {value}, which is larger than {digits}")]
    ValueOutOfRange {
        /// Cell of the offending value
        cell: usize,
        /// The offending value
        value: u8,
        /// Number of digits
        digits: u8,
    },
}

/// A cell ran out of candidates during propagation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("cell {cell} has no candidates left")]
pub struct Contradiction {
    /// The first cell found without candidates
    pub cell: usize,
}

/// Error for the functions in [`generator`]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum GenerationError {
    /// Random region growth kept painting itself into a corner.
    #[error("gave up after {attempts} attempts")]
    RetriesExhausted {
        /// Size of the retry budget
        attempts: usize,
    },
    /// The geometry admits no filled grid.
    #[error("geometry has no solution")]
    Unsolvable,
}
