//! Houses and constraints of square grids
//!
//! Cells of an `n`×`n` grid are numbered row by row, `row * n + col`.

use crate::board::Shading;

/// Diagonal king moves. Orthogonal ones are already covered by rows and columns.
pub const ANTI_KING: &[(isize, isize)] = &[(1, 1), (1, -1)];

/// Knight moves, pointing downwards.
pub const ANTI_KNIGHT: &[(isize, isize)] = &[(1, 2), (1, -2), (2, 1), (2, -1)];

/// Edge adjacency.
pub const ORTHOGONAL: &[(isize, isize)] = &[(0, 1), (1, 0)];

fn shading(n: usize, cells: impl IntoIterator<Item = usize>) -> Shading {
    let mut shading = Shading::empty(n * n);
    for cell in cells {
        shading.insert(cell);
    }
    shading
}

/// The `n` rows of an `n`×`n` grid, top to bottom.
///
/// # Panics
/// Panics if `n > 16`.
pub fn rows(n: usize) -> Vec<Shading> {
    (0..n)
        .map(|row| shading(n, (0..n).map(|col| row * n + col)))
        .collect()
}

/// The `n` columns of an `n`×`n` grid, left to right.
///
/// # Panics
/// Panics if `n > 16`.
pub fn cols(n: usize) -> Vec<Shading> {
    (0..n)
        .map(|col| shading(n, (0..n).map(|row| row * n + col)))
        .collect()
}

/// Box dimensions `(rows, cols)` for an `n`×`n` grid. Boxes are as square as possible
/// and never taller than wide, e.g. 2×3 for `n = 6`.
pub fn box_dims(n: usize) -> (usize, usize) {
    let rows = (1..=n)
        .take_while(|rows| rows * rows <= n)
        .filter(|rows| n % rows == 0)
        .last()
        .unwrap_or(1);
    (rows, n / rows)
}

/// The boxes of an `n`×`n` grid, each `box_rows` tall and `box_cols` wide,
/// numbered left to right, top to bottom.
///
/// # Panics
/// Panics if `box_rows * box_cols != n` or `n > 16`.
pub fn boxes(n: usize, box_rows: usize, box_cols: usize) -> Vec<Shading> {
    assert_eq!(
        box_rows * box_cols,
        n,
        "{}x{} boxes do not fit a {}x{} grid",
        box_rows,
        box_cols,
        n,
        n
    );
    let mut out = vec![Shading::empty(n * n); n];
    for row in 0..n {
        for col in 0..n {
            let b = (row / box_rows) * (n / box_cols) + col / box_cols;
            out[b].insert(row * n + col);
        }
    }
    out
}

/// Both main diagonals of an `n`×`n` grid.
pub fn diagonals(n: usize) -> Vec<Shading> {
    vec![
        shading(n, (0..n).map(|i| i * n + i)),
        shading(n, (0..n).map(|i| i * n + n - 1 - i)),
    ]
}

/// Every pair of cells of an `n`×`n` grid that lie one of `offsets` apart.
///
/// Each offset is `(rows, cols)`. Pairs that would leave the grid are skipped.
pub fn tessellate(n: usize, offsets: &[(isize, isize)]) -> Vec<Shading> {
    let mut out = Vec::new();
    let inside = |value: isize| usize::try_from(value).ok().filter(|&v| v < n);
    for row in 0..n {
        for col in 0..n {
            for &(dr, dc) in offsets {
                let other_row = inside(row as isize + dr);
                let other_col = inside(col as isize + dc);
                if let (Some(r), Some(c)) = (other_row, other_col) {
                    out.push(shading(n, [row * n + col, r * n + c]));
                }
            }
        }
    }
    out
}
