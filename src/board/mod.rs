//! Types for cells, digits and grids
mod candidate;
mod digit;
mod grid;
mod grid_state;
mod shading;

pub use self::{
    candidate::Candidate,
    digit::{Digit, MAX_DIGITS},
    grid::Grid,
    grid_state::CandidateTable,
    shading::{Shading, MAX_CELLS},
};

/// Side length of a square grid with `cells` cells.
pub(crate) fn square_width(cells: usize) -> Option<usize> {
    (1..=16).find(|side| side * side == cells)
}
