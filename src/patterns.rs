//! Every way a single digit can be placed in a grid
//!
//! A pattern picks exactly one cell from every house such that no two picked cells
//! exclude each other. In a solved grid, the cells holding any one digit form a pattern,
//! so the solver can place a digit all at once by choosing one from the catalog.
//! Patterns do not depend on the digit, one catalog serves all of them.

use crate::board::Shading;
use crate::Geometry;
use log::debug;

/// All patterns of a [`Geometry`], computed by [`Geometry::patterns`].
#[derive(Clone, Debug)]
pub struct PatternCatalog {
    patterns: Vec<Shading>,
    // union of the exclusion sets of each pattern's cells
    exclusions: Vec<Shading>,
}

impl PatternCatalog {
    pub(crate) fn enumerate(geometry: &Geometry) -> PatternCatalog {
        let houses = geometry.houses();
        let mut patterns = Vec::new();

        // (next house, cells picked so far, cells still available)
        let mut stack = vec![(0, Shading::empty(geometry.cells()), geometry.all())];
        while let Some((house, picked, available)) = stack.pop() {
            let Some(&cells) = houses.get(house) else {
                patterns.push(picked);
                continue;
            };
            if cells.overlaps(picked) {
                stack.push((house + 1, picked, available));
                continue;
            }
            // reversed, so that lower cells are explored first
            let options: Vec<usize> = (cells & available).iter().collect();
            for &cell in options.iter().rev() {
                let mut next = picked;
                next.insert(cell);
                let mut rest = available.without(*geometry.exclusions_of(cell));
                rest.remove(cell);
                stack.push((house + 1, next, rest));
            }
        }

        let exclusions = patterns
            .iter()
            .map(|pattern| {
                pattern.iter().fold(Shading::empty(geometry.cells()), |acc, cell| {
                    acc | *geometry.exclusions_of(cell)
                })
            })
            .collect();

        debug!(
            "enumerated {} patterns over {} houses and {} constraints",
            patterns.len(),
            houses.len(),
            geometry.constraints().len()
        );

        PatternCatalog {
            patterns,
            exclusions,
        }
    }

    /// Number of patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Checks whether no pattern exists. Such a geometry has no solution.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// The pattern at `index`.
    pub fn get(&self, index: usize) -> Option<Shading> {
        self.patterns.get(index).copied()
    }

    /// The cells that must not hold a digit once it is placed on pattern `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    pub fn exclusions_of(&self, index: usize) -> Shading {
        self.exclusions[index]
    }

    /// Iterate over all patterns.
    pub fn iter(&self) -> std::slice::Iter<'_, Shading> {
        self.patterns.iter()
    }
}

impl<'a> IntoIterator for &'a PatternCatalog {
    type Item = &'a Shading;
    type IntoIter = std::slice::Iter<'a, Shading>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
