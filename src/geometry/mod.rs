//! The rules of a puzzle: which cells must hold distinct digits and which cells touch
pub mod shapes;

use crate::bitset::Mask;
use crate::board::{Candidate, Grid, Shading, MAX_CELLS, MAX_DIGITS};
use crate::errors::{Contradiction, GeometryError};
use crate::normalize;
use crate::parse_errors::ParseError;
use crate::patterns::PatternCatalog;
use crate::solver::{self, Solutions};
use std::fmt;
use std::sync::OnceLock;

/// The rules of a puzzle.
///
/// A geometry is made of
/// * houses, sets of exactly `digits` cells that hold every digit once,
/// * constraints, sets of cells that must hold distinct digits without having to hold all of them,
///   such as pairs of cells a knight's move apart,
/// * adjacency, pairs of cells that touch. Adjacency does not restrict digits, it is used for
///   connectivity queries on regions.
///
/// From these, every cell gets its exclusion set, the cells that may not share its digit.
/// The catalog of [patterns](Geometry::patterns) is computed on first use and kept for the
/// lifetime of the geometry.
#[derive(Clone)]
pub struct Geometry {
    cells: usize,
    digits: u8,
    houses: Vec<Shading>,
    constraints: Vec<Shading>,
    exclusions: Vec<Shading>,
    neighbors: Vec<Shading>,
    catalog: OnceLock<PatternCatalog>,
}

/// Incrementally declares a [`Geometry`]. Created by [`Geometry::builder`].
///
/// Errors are collected and reported by [`GeometryBuilder::build`].
#[derive(Clone, Debug)]
pub struct GeometryBuilder {
    cells: usize,
    digits: u8,
    houses: Vec<Shading>,
    constraints: Vec<Shading>,
    adjacency: Vec<Shading>,
    error: Option<GeometryError>,
}

impl GeometryBuilder {
    fn check(&mut self, shading: Shading) -> Shading {
        if self.error.is_none() && shading.universe() != self.cells {
            self.error = Some(GeometryError::UniverseMismatch {
                expected: self.cells,
                found: shading.universe(),
            });
        }
        shading
    }

    fn collect(&mut self, cells: impl IntoIterator<Item = usize>) -> Option<Shading> {
        if self.cells > MAX_CELLS {
            return None;
        }
        match Shading::from_cells(self.cells, cells) {
            Ok(shading) => Some(shading),
            Err(err) => {
                self.error.get_or_insert(err.into());
                None
            }
        }
    }

    /// Adds a house.
    pub fn house(mut self, house: Shading) -> Self {
        let house = self.check(house);
        self.houses.push(house);
        self
    }

    /// Adds a house given by its cell addresses.
    pub fn house_cells(mut self, cells: impl IntoIterator<Item = usize>) -> Self {
        if let Some(house) = self.collect(cells) {
            self.houses.push(house);
        }
        self
    }

    /// Adds several houses.
    pub fn houses(self, houses: impl IntoIterator<Item = Shading>) -> Self {
        houses.into_iter().fold(self, Self::house)
    }

    /// Adds a set of cells that must hold distinct digits.
    pub fn constraint(mut self, constraint: Shading) -> Self {
        let constraint = self.check(constraint);
        self.constraints.push(constraint);
        self
    }

    /// Adds several constraints.
    pub fn constraints(self, constraints: impl IntoIterator<Item = Shading>) -> Self {
        constraints.into_iter().fold(self, Self::constraint)
    }

    /// Declares the two cells of `pair` adjacent.
    pub fn adjacency(mut self, pair: Shading) -> Self {
        let pair = self.check(pair);
        self.adjacency.push(pair);
        self
    }

    /// Declares several pairs of cells adjacent.
    pub fn adjacencies(self, pairs: impl IntoIterator<Item = Shading>) -> Self {
        pairs.into_iter().fold(self, Self::adjacency)
    }

    /// Declares the cells `a` and `b` adjacent.
    pub fn adjacent(mut self, a: usize, b: usize) -> Self {
        if let Some(pair) = self.collect([a, b]) {
            self.adjacency.push(pair);
        }
        self
    }

    /// Validates the declarations and derives the exclusion sets.
    pub fn build(self) -> Result<Geometry, GeometryError> {
        let GeometryBuilder {
            cells,
            digits,
            houses,
            constraints,
            adjacency,
            error,
        } = self;

        if cells == 0 || cells > MAX_CELLS {
            return Err(GeometryError::CellCount(cells));
        }
        if digits == 0 || digits > MAX_DIGITS {
            return Err(GeometryError::DigitCount(digits));
        }
        if let Some(err) = error {
            return Err(err);
        }
        if cells % usize::from(digits) != 0 {
            return Err(GeometryError::Indivisible { cells, digits });
        }
        if houses.is_empty() {
            return Err(GeometryError::NoHouses);
        }
        for (index, house) in houses.iter().enumerate() {
            if house.len() != usize::from(digits) {
                return Err(GeometryError::HouseSize {
                    index,
                    size: house.len(),
                    digits,
                });
            }
        }
        let covered = houses
            .iter()
            .fold(Shading::empty(cells), |covered, &house| covered | house);
        if let Some(cell) = (!covered).first() {
            return Err(GeometryError::UncoveredCell(cell));
        }
        for (index, pair) in adjacency.iter().enumerate() {
            if pair.len() != 2 {
                return Err(GeometryError::Adjacency {
                    index,
                    size: pair.len(),
                });
            }
        }

        let exclusions = relate(cells, houses.iter().chain(constraints.iter()));
        let neighbors = relate(cells, adjacency.iter());

        Ok(Geometry {
            cells,
            digits,
            houses,
            constraints,
            exclusions,
            neighbors,
            catalog: OnceLock::new(),
        })
    }
}

// For every cell, the union of all groups containing it, minus the cell itself.
fn relate<'a>(cells: usize, groups: impl Iterator<Item = &'a Shading>) -> Vec<Shading> {
    let mut related = vec![Shading::empty(cells); cells];
    for &group in groups {
        for cell in group {
            related[cell] |= group;
        }
    }
    for (cell, shading) in related.iter_mut().enumerate() {
        shading.remove(cell);
    }
    related
}

impl Geometry {
    /// Starts declaring a geometry with `cells` cells and `digits` digits.
    pub fn builder(cells: usize, digits: u8) -> GeometryBuilder {
        GeometryBuilder {
            cells,
            digits,
            houses: Vec::new(),
            constraints: Vec::new(),
            adjacency: Vec::new(),
            error: None,
        }
    }

    /// Builds a geometry from houses alone. The grid size is taken from the shadings.
    pub fn from_houses(
        digits: u8,
        houses: impl IntoIterator<Item = Shading>,
    ) -> Result<Geometry, GeometryError> {
        let houses: Vec<Shading> = houses.into_iter().collect();
        let cells = houses
            .first()
            .map(Shading::universe)
            .ok_or(GeometryError::NoHouses)?;
        Geometry::builder(cells, digits).houses(houses).build()
    }

    /// Number of cells.
    pub fn cells(&self) -> usize {
        self.cells
    }

    /// Number of digits.
    pub fn digits(&self) -> u8 {
        self.digits
    }

    /// How often each digit appears in a solution.
    pub fn cells_per_digit(&self) -> usize {
        self.cells / usize::from(self.digits)
    }

    /// The houses, in declaration order.
    pub fn houses(&self) -> &[Shading] {
        &self.houses
    }

    /// The constraints, in declaration order.
    pub fn constraints(&self) -> &[Shading] {
        &self.constraints
    }

    /// The shading containing every cell.
    pub fn all(&self) -> Shading {
        Shading::full(self.cells)
    }

    /// All cells that share a house or constraint with `cell`, without `cell` itself.
    ///
    /// # Panics
    /// Panics if `cell` is out of range.
    pub fn exclusions_of(&self, cell: usize) -> &Shading {
        &self.exclusions[cell]
    }

    /// Checks whether `a` and `b` may not hold the same digit.
    pub fn excludes(&self, a: usize, b: usize) -> bool {
        a < self.cells && self.exclusions[a].contains(b)
    }

    /// Every candidate ruled out by placing `candidate`: the same digit in all
    /// excluded cells, and every other digit in the cell itself.
    pub fn exclusion(&self, candidate: Candidate) -> Grid {
        let digit = candidate.digit;
        let mut grid = Grid::expand(
            self.exclusions[candidate.cell],
            self.digits,
            Mask::single(digit),
        );
        grid.set_mask(candidate.cell, Mask::all(self.digits).without(Mask::single(digit)));
        grid
    }

    /// The cells adjacent to `region`, without `region` itself.
    pub fn neighbors_of(&self, region: Shading) -> Shading {
        region
            .iter()
            .fold(Shading::empty(self.cells), |acc, cell| acc | self.neighbors[cell])
            .without(region)
    }

    // Grows `start` within `region` until it stops changing.
    fn flood(&self, start: Shading, region: Shading) -> Shading {
        let mut reached = start;
        loop {
            let next = (reached | self.neighbors_of(reached)) & region;
            if next == reached {
                return reached;
            }
            reached = next;
        }
    }

    /// Checks whether every cell of `region` can be reached from every other one
    /// through adjacent cells of `region`. Empty regions are connected.
    pub fn is_connected(&self, region: Shading) -> bool {
        match region.first() {
            Some(start) => self.flood(Shading::single(self.cells, start), region) == region,
            None => true,
        }
    }

    /// Splits `region` into its connected parts, ordered by their lowest cell.
    pub fn connected_components(&self, region: Shading) -> Vec<Shading> {
        let mut components = Vec::new();
        let mut rest = region;
        while let Some(start) = rest.first() {
            let component = self.flood(Shading::single(self.cells, start), rest);
            rest = rest.without(component);
            components.push(component);
        }
        components
    }

    /// The cells of `region` that can be taken away without disconnecting the rest.
    pub fn periphery_of(&self, region: Shading) -> Shading {
        let mut periphery = Shading::empty(self.cells);
        for cell in region {
            let mut rest = region;
            rest.remove(cell);
            if self.is_connected(rest) {
                periphery.insert(cell);
            }
        }
        periphery
    }

    /// The catalog of every placement of a single digit that satisfies all houses and constraints.
    pub fn patterns(&self) -> &PatternCatalog {
        self.catalog.get_or_init(|| PatternCatalog::enumerate(self))
    }

    /// A grid in which every digit is still possible everywhere.
    pub fn open_grid(&self) -> Grid {
        Grid::open(self.cells, self.digits)
    }

    /// Reads a grid of this geometry's size, see [`Grid::parse`].
    pub fn parse_grid(&self, text: &str) -> Result<Grid, ParseError> {
        Grid::parse(text, self.cells, self.digits)
    }

    /// Checks whether `grid` is completely filled and obeys every house and constraint.
    pub fn is_solution(&self, grid: &Grid) -> bool {
        if grid.cells() != self.cells || grid.digits() != self.digits || !grid.is_filled() {
            return false;
        }
        let houses_complete = self.houses.iter().all(|house| {
            let digits = house.iter().fold(Mask::NONE, |acc, cell| acc | grid.mask(cell));
            digits == Mask::all(self.digits)
        });
        houses_complete
            && (0..self.cells).all(|cell| {
                let mask = grid.mask(cell);
                self.exclusions[cell]
                    .iter()
                    .all(|other| !grid.mask(other).overlaps(mask))
            })
    }

    /// Propagates fixed cells until nothing changes, see [`normalize::normalize`].
    pub fn normalize(&self, grid: &Grid) -> Result<Grid, Contradiction> {
        normalize::normalize(self, grid)
    }

    /// Lazily enumerates up to `limit` solutions of `grid`, see [`solver::solve`].
    pub fn solve<'a>(&'a self, grid: &Grid, limit: usize) -> Solutions<'a> {
        solver::solve(self, grid, limit)
    }

    /// Find up to `limit` solutions and return them.
    pub fn solve_at_most(&self, grid: &Grid, limit: usize) -> Vec<Grid> {
        self.solve(grid, limit).collect()
    }

    /// Find a solution, if one exists.
    pub fn solve_one(&self, grid: &Grid) -> Option<Grid> {
        self.solve(grid, 1).next()
    }

    /// Solve the puzzle if it has exactly one solution.
    pub fn solve_unique(&self, grid: &Grid) -> Option<Grid> {
        let mut solutions = self.solve_at_most(grid, 2);
        match solutions.len() {
            1 => solutions.pop(),
            _ => None,
        }
    }

    /// Counts the number of solutions, up to a maximum of `limit`.
    pub fn count_at_most(&self, grid: &Grid, limit: usize) -> usize {
        self.solve(grid, limit).count()
    }

    /// Checks whether `grid` has exactly one solution.
    pub fn is_uniquely_solvable(&self, grid: &Grid) -> bool {
        self.count_at_most(grid, 2) == 1
    }
}

impl fmt::Debug for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Geometry")
            .field("cells", &self.cells)
            .field("digits", &self.digits)
            .field("houses", &self.houses.len())
            .field("constraints", &self.constraints.len())
            .field("patterns", &self.catalog.get().map(PatternCatalog::len))
            .finish()
    }
}
