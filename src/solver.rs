//! Backtracking search over the pattern catalog
//!
//! Every node of the search is normalized first. A node in which some digit has fewer
//! possible cells than it needs is dead. A node in which every digit has exactly as many
//! possible cells as it needs is solved. Otherwise, the digit with the fewest surplus
//! cells is placed on each pattern that still fits, one child per pattern.
//!
//! The search keeps its own stack, so its depth is bounded by the number of digits
//! and it can stop after any solution.

use crate::board::{Digit, Grid, Shading};
use crate::patterns::PatternCatalog;
use crate::Geometry;
use log::{debug, trace};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Lazily enumerates up to `limit` solutions of `grid`.
///
/// With a limit of 2 this is a uniqueness test: no solution, exactly one, or more than one.
///
/// # Panics
/// Panics if the grid does not have as many cells and digits as the geometry.
pub fn solve<'a>(geometry: &'a Geometry, grid: &Grid, limit: usize) -> Solutions<'a> {
    assert_eq!(grid.cells(), geometry.cells(), "grid and geometry differ in size");
    assert_eq!(grid.digits(), geometry.digits(), "grid and geometry differ in digits");

    if limit == 0 {
        return Solutions::exhausted(geometry);
    }
    let root = match geometry.normalize(grid) {
        Ok(root) => root,
        Err(contradiction) => {
            debug!("givens are contradictory: {}", contradiction);
            return Solutions::exhausted(geometry);
        }
    };
    let catalog = geometry.patterns();

    // Patterns that no longer fit a digit at the root never will further down.
    let by_digit: Vec<Vec<usize>> = Digit::all(geometry.digits())
        .map(|digit| {
            let plane = root.plane(digit);
            catalog
                .iter()
                .enumerate()
                .filter(|(_, pattern)| pattern.is_subset(plane))
                .map(|(index, _)| index)
                .collect()
        })
        .collect();
    debug!(
        "solving with {} patterns, per digit {:?}",
        catalog.len(),
        by_digit.iter().map(Vec::len).collect::<Vec<_>>()
    );

    Solutions {
        geometry,
        catalog: Some(catalog),
        by_digit,
        root: Some(root),
        stack: Vec::new(),
        seen: HashSet::new(),
        remaining: limit,
    }
}

/// Iterator over the solutions of a grid, created by [`solve`] or [`Geometry::solve`].
///
/// Solutions are computed on demand. Dropping the iterator cancels the search.
#[derive(Debug)]
pub struct Solutions<'a> {
    geometry: &'a Geometry,
    // not computed when the search is over before it starts
    catalog: Option<&'a PatternCatalog>,
    by_digit: Vec<Vec<usize>>,
    root: Option<Grid>,
    stack: Vec<Branch>,
    seen: HashSet<Grid>,
    remaining: usize,
}

// A node whose children are being visited: `digit` is placed on
// the patterns in `by_digit[digit]`, starting at `next`.
#[derive(Debug)]
struct Branch {
    grid: Grid,
    digit: Digit,
    plane: Shading,
    next: usize,
}

enum Node {
    Dead,
    Solved(Grid),
    Branch(Branch),
}

impl<'a> Solutions<'a> {
    fn exhausted(geometry: &'a Geometry) -> Self {
        Solutions {
            geometry,
            catalog: None,
            by_digit: Vec::new(),
            root: None,
            stack: Vec::new(),
            seen: HashSet::new(),
            remaining: 0,
        }
    }

    /// Visit the patterns of each digit in random order. Used to generate random grids.
    pub fn shuffle_patterns<R: Rng + ?Sized>(mut self, rng: &mut R) -> Self {
        for patterns in &mut self.by_digit {
            patterns.shuffle(rng);
        }
        self
    }

    fn visit(&self, grid: &Grid) -> Node {
        let grid = match self.geometry.normalize(grid) {
            Ok(grid) => grid,
            Err(contradiction) => {
                trace!("pruned: {}", contradiction);
                return Node::Dead;
            }
        };

        let needed = self.geometry.cells_per_digit();
        let mut best: Option<(usize, Digit)> = None;
        for digit in Digit::all(self.geometry.digits()) {
            let count = grid.count_digit(digit);
            if count < needed {
                trace!("pruned: digit {} fits only {} cells", digit, count);
                return Node::Dead;
            }
            // strict comparison, ties go to the lower digit
            if count > needed && best.map_or(true, |(fewest, _)| count < fewest) {
                best = Some((count, digit));
            }
        }

        match best {
            None => Node::Solved(grid),
            Some((_, digit)) => Node::Branch(Branch {
                plane: grid.plane(digit),
                grid,
                digit,
                next: 0,
            }),
        }
    }

    // The next child of the innermost branch, popping exhausted branches.
    fn next_child(&mut self) -> Option<Grid> {
        loop {
            let catalog = self.catalog?;
            let branch = self.stack.last_mut()?;
            let patterns = &self.by_digit[branch.digit.as_index()];
            while let Some(&index) = patterns.get(branch.next) {
                branch.next += 1;
                let pattern = match catalog.get(index) {
                    Some(pattern) if pattern.is_subset(branch.plane) => pattern,
                    _ => continue,
                };
                let mut child = branch.grid.clone();
                child.remove_digit(catalog.exclusions_of(index), branch.digit);
                child.fix(pattern, branch.digit);
                return Some(child);
            }
            self.stack.pop();
        }
    }
}

impl Iterator for Solutions<'_> {
    type Item = Grid;

    fn next(&mut self) -> Option<Grid> {
        while self.remaining > 0 {
            let grid = match self.root.take() {
                Some(root) => root,
                None => self.next_child()?,
            };
            match self.visit(&grid) {
                Node::Dead => {}
                Node::Branch(branch) => self.stack.push(branch),
                Node::Solved(solution) => {
                    if self.seen.insert(solution.clone()) {
                        trace!("solution {}", solution.to_line());
                        self.remaining -= 1;
                        if self.remaining == 0 {
                            self.stack.clear();
                        }
                        return Some(solution);
                    }
                }
            }
        }
        None
    }
}
