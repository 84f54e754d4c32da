//! Ready-made geometries for common puzzle types
//!
//! All of them are `n`×`n` grids with `n` digits, rows and columns as houses and
//! orthogonally touching cells as adjacency.

use crate::board::{Shading, MAX_CELLS};
use crate::errors::GeometryError;
use crate::geometry::shapes::{self, ANTI_KING, ANTI_KNIGHT, ORTHOGONAL};
use crate::geometry::GeometryBuilder;
use crate::Geometry;

fn lines(n: usize) -> Result<GeometryBuilder, GeometryError> {
    if n == 0 || n * n > MAX_CELLS {
        return Err(GeometryError::CellCount(n * n));
    }
    Ok(Geometry::builder(n * n, n as u8)
        .houses(shapes::rows(n))
        .houses(shapes::cols(n))
        .adjacencies(shapes::tessellate(n, ORTHOGONAL)))
}

fn boxed(n: usize, box_rows: usize, box_cols: usize) -> Result<GeometryBuilder, GeometryError> {
    let builder = lines(n)?;
    if box_rows * box_cols != n {
        return Err(GeometryError::HouseSize {
            index: 2 * n,
            size: box_rows * box_cols,
            digits: n as u8,
        });
    }
    Ok(builder.houses(shapes::boxes(n, box_rows, box_cols)))
}

/// Rows and columns only.
pub fn latin_square(n: usize) -> Result<Geometry, GeometryError> {
    lines(n)?.build()
}

/// Rows, columns and boxes of `box_rows`×`box_cols` cells.
pub fn standard(n: usize, box_rows: usize, box_cols: usize) -> Result<Geometry, GeometryError> {
    boxed(n, box_rows, box_cols)?.build()
}

/// Like [`standard`], with box dimensions picked by [`shapes::box_dims`].
pub fn square(n: usize) -> Result<Geometry, GeometryError> {
    let (box_rows, box_cols) = shapes::box_dims(n);
    standard(n, box_rows, box_cols)
}

/// The classic 9×9 sudoku.
pub fn classic() -> Geometry {
    standard(9, 3, 3).expect("9x9 grid with 3x3 boxes is valid")
}

/// A standard grid in which cells a knight's move apart must differ.
pub fn anti_knight(n: usize, box_rows: usize, box_cols: usize) -> Result<Geometry, GeometryError> {
    boxed(n, box_rows, box_cols)?
        .constraints(shapes::tessellate(n, ANTI_KNIGHT))
        .build()
}

/// A standard grid in which diagonally touching cells must differ.
pub fn anti_king(n: usize, box_rows: usize, box_cols: usize) -> Result<Geometry, GeometryError> {
    boxed(n, box_rows, box_cols)?
        .constraints(shapes::tessellate(n, ANTI_KING))
        .build()
}

/// Rows, columns and `n` irregular regions of `n` cells each.
pub fn irregular(n: usize, regions: &[Shading]) -> Result<Geometry, GeometryError> {
    lines(n)?.houses(regions.iter().copied()).build()
}

/// 4×4 grid whose boxes, both diagonals and the four center cells hold every digit once.
pub fn diagonal_4x4() -> Geometry {
    let center = [5, 6, 9, 10];
    boxed(4, 2, 2)
        .map(|builder| {
            builder
                .houses(shapes::diagonals(4))
                .house_cells(center)
        })
        .and_then(GeometryBuilder::build)
        .expect("4x4 diagonal grid is valid")
}
