//! Constraint propagation from fixed cells
use crate::bitset::{Empty, Mask};
use crate::board::Grid;
use crate::errors::Contradiction;
use crate::Geometry;

/// Removes the digit of every fixed cell from all cells it excludes, repeating full passes
/// over the grid until one of them changes nothing.
///
/// Success only means that no cell ran out of candidates, not that the grid is solved.
///
/// # Panics
/// Panics if the grid does not have as many cells and digits as the geometry.
pub fn normalize(geometry: &Geometry, grid: &Grid) -> Result<Grid, Contradiction> {
    assert_eq!(grid.cells(), geometry.cells(), "grid and geometry differ in size");
    assert_eq!(grid.digits(), geometry.digits(), "grid and geometry differ in digits");

    let mut out = grid.clone();
    loop {
        let mut changed = false;
        for cell in 0..out.cells() {
            let digit = match out.mask(cell).unique() {
                Ok(Some(digit)) => digit,
                Ok(None) => continue,
                Err(Empty) => return Err(Contradiction { cell }),
            };
            for peer in geometry.exclusions_of(cell).iter() {
                let mask = out.mask(peer);
                if !mask.contains(digit) {
                    continue;
                }
                let rest = mask.without(Mask::single(digit));
                if rest.is_empty() {
                    return Err(Contradiction { cell: peer });
                }
                out.set_mask(peer, rest);
                changed = true;
            }
        }
        if !changed {
            return Ok(out);
        }
    }
}
