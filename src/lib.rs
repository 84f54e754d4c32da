#![warn(missing_docs)]
//! A solver for sudoku-like puzzles of any shape
//!
//! ## Overview
//!
//! A puzzle is described by a [`Geometry`]: a number of cells, a number of digits, and
//! *houses*, sets of cells that must contain every digit exactly once. Rows, columns, boxes
//! and irregular regions are all houses. Extra rules such as anti-knight are added as
//! *constraints*, sets of cells that must merely hold distinct digits.
//!
//! The solver does not use human solving techniques. It enumerates every way a single digit
//! can be placed in the grid (the [patterns](Geometry::patterns)) once per geometry, and then
//! searches for solutions by placing whole digits at a time, propagating after every step.
//! Solutions are produced lazily, so asking for at most 2 is a cheap uniqueness test.
//!
//! ## Example
//!
//! ```
//! use sudoku_patterns::variants;
//!
//! let geometry = variants::classic();
//! let sudoku_line = "...2...633....54.1..1..398........9....538....3........263..5..5.37....847...1...";
//! let sudoku = geometry.parse_grid(sudoku_line).unwrap();
//!
//! if let Some(solution) = geometry.solve_unique(&sudoku) {
//!     assert!(geometry.is_solution(&solution));
//!     println!("{}", solution.to_line());
//! }
//! ```
//!
//! Geometries of any shape can be declared directly:
//!
//! ```
//! use sudoku_patterns::geometry::shapes;
//! use sudoku_patterns::Geometry;
//!
//! // a 4x4 grid with 2x2 boxes in which cells a knight's move apart must differ
//! let geometry = Geometry::builder(16, 4)
//!     .houses(shapes::rows(4))
//!     .houses(shapes::cols(4))
//!     .houses(shapes::boxes(4, 2, 2))
//!     .constraints(shapes::tessellate(4, shapes::ANTI_KNIGHT))
//!     .build()
//!     .unwrap();
//! assert_eq!(geometry.patterns().len(), 4);
//! assert_eq!(geometry.count_at_most(&geometry.open_grid(), 100), 24);
//! ```

pub mod bitset;
pub mod board;
mod errors;
pub mod generator;
pub mod geometry;
pub mod normalize;
pub mod parse_errors;
pub mod patterns;
pub mod render;
pub mod solver;
pub mod variants;

pub use crate::bitset::Mask;
pub use crate::board::{Candidate, Digit, Grid, Shading};
pub use crate::errors::{
    CellOutOfRange, Contradiction, FromValuesError, GenerationError, GeometryError,
};
pub use crate::geometry::{Geometry, GeometryBuilder};
pub use crate::patterns::PatternCatalog;
pub use crate::solver::Solutions;
