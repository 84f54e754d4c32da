//! Random regions, filled grids and puzzles
//!
//! Randomness always comes from the caller, so that results can be reproduced with a
//! seeded generator.

use crate::bitset::Mask;
use crate::board::{Grid, Shading};
use crate::errors::GenerationError;
use crate::solver;
use crate::Geometry;
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

// Reservoir sampling over the cells of `shading`.
fn pick_cell<R: Rng + ?Sized>(shading: Shading, rng: &mut R) -> Option<usize> {
    let mut picked = None;
    for (seen, cell) in shading.iter().enumerate() {
        if rng.gen_range(0..=seen) == 0 {
            picked = Some(cell);
        }
    }
    picked
}

// A random cell among those with the fewest available neighbors.
fn pick_corner<R: Rng + ?Sized>(
    geometry: &Geometry,
    available: Shading,
    rng: &mut R,
) -> Option<usize> {
    let mut picked = None;
    let mut fewest = usize::MAX;
    let mut ties = 0;
    for cell in available {
        let liberties =
            (geometry.neighbors_of(Shading::single(geometry.cells(), cell)) & available).len();
        if liberties < fewest {
            fewest = liberties;
            ties = 0;
        }
        if liberties == fewest {
            if rng.gen_range(0..=ties) == 0 {
                picked = Some(cell);
            }
            ties += 1;
        }
    }
    picked
}

fn grow_regions<R: Rng + ?Sized>(geometry: &Geometry, rng: &mut R) -> Option<Vec<Shading>> {
    let size = usize::from(geometry.digits());
    let mut available = geometry.all();
    let mut regions = Vec::with_capacity(geometry.cells_per_digit());
    for _ in 0..geometry.cells_per_digit() {
        let start = pick_corner(geometry, available, rng)?;
        let mut region = Shading::single(geometry.cells(), start);
        available.remove(start);
        for _ in 1..size {
            let eligible = geometry.neighbors_of(region) & available;
            let next = pick_cell(eligible, rng)?;
            region.insert(next);
            available.remove(next);
        }
        regions.push(region);
    }
    Some(regions)
}

/// Splits the grid into connected regions of `digits` cells each.
///
/// Regions are grown one at a time from a cell with few free neighbors, adding random
/// adjacent cells. If a region gets stuck before reaching its size, everything is thrown
/// away and growth starts over, at most `attempts` times.
pub fn make_regions<R: Rng + ?Sized>(
    geometry: &Geometry,
    rng: &mut R,
    attempts: usize,
) -> Result<Vec<Shading>, GenerationError> {
    for attempt in 1..=attempts {
        if let Some(regions) = grow_regions(geometry, rng) {
            return Ok(regions);
        }
        debug!("painted into a corner, attempt {}/{}", attempt, attempts);
    }
    Err(GenerationError::RetriesExhausted { attempts })
}

/// Generate a random, completely filled grid that obeys every rule of `geometry`.
pub fn generate_filled<R: Rng + ?Sized>(
    geometry: &Geometry,
    rng: &mut R,
) -> Result<Grid, GenerationError> {
    solver::solve(geometry, &geometry.open_grid(), 1)
        .shuffle_patterns(rng)
        .next()
        .ok_or(GenerationError::Unsolvable)
}

/// Generate a random puzzle with a unique solution.
///
/// Starts from a filled grid and opens cells in random order as long as the solution stays unique.
/// The result is minimal: opening any further given makes it ambiguous.
pub fn generate_unique<R: Rng + ?Sized>(
    geometry: &Geometry,
    rng: &mut R,
) -> Result<Grid, GenerationError> {
    let mut puzzle = generate_filled(geometry, rng)?;
    let mut cells: Vec<usize> = (0..geometry.cells()).collect();
    cells.shuffle(rng);

    let all = Mask::all(geometry.digits());
    for cell in cells {
        let given = puzzle.mask(cell);
        puzzle.set_mask(cell, all);
        if !geometry.is_uniquely_solvable(&puzzle) {
            puzzle.set_mask(cell, given);
        }
    }
    debug!(
        "generated puzzle with {} givens",
        (0..geometry.cells()).filter(|&cell| puzzle.is_fixed(cell)).count()
    );
    Ok(puzzle)
}
