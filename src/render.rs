//! Drawing grids with their region boundaries
//!
//! Purely presentational. Each cell takes three characters, with a line or a blank
//! between two cells depending on whether they belong to the same region.

use crate::board::Grid;

/* Example output for a 4x4 grid with two L shaped regions at the bottom
┌───────┬───────┐
│ 1   2 │ 3   4 │
│       │       │
│ 3   4 │ 1   2 │
├───┬───┴───────┤
│ 2 │ 1   4   3 │
│   └───────┐   │
│ 4   3   2 │ 1 │
└───────────┴───┘
*/

// Glyph for a corner with arms pointing up, down, left and right.
fn corner(up: bool, down: bool, left: bool, right: bool) -> char {
    match (up, down, left, right) {
        (false, false, false, false) => ' ',
        (true, true, false, false) => '│',
        (false, false, true, true) => '─',
        (false, true, false, true) => '┌',
        (false, true, true, false) => '┐',
        (true, false, false, true) => '└',
        (true, false, true, false) => '┘',
        (true, true, false, true) => '├',
        (true, true, true, false) => '┤',
        (false, true, true, true) => '┬',
        (true, false, true, true) => '┴',
        (true, true, true, true) => '┼',
        (true, false, false, false) => '╵',
        (false, true, false, false) => '╷',
        (false, false, true, false) => '╴',
        (false, false, false, true) => '╶',
    }
}

struct Layout<'a> {
    width: usize,
    height: usize,
    regions: &'a Grid,
}

impl Layout<'_> {
    // Region of the cell at (row, col), `None` outside of the grid.
    // Cells in no region or several regions count as their own region.
    fn region(&self, row: isize, col: isize) -> Option<Result<u8, usize>> {
        if row < 0 || col < 0 || row as usize >= self.height || col as usize >= self.width {
            return None;
        }
        let cell = row as usize * self.width + col as usize;
        Some(match self.regions.mask(cell).unique() {
            Ok(Some(digit)) => Ok(digit.get()),
            _ => Err(cell),
        })
    }

    fn split(&self, a: (isize, isize), b: (isize, isize)) -> bool {
        self.region(a.0, a.1) != self.region(b.0, b.1)
    }
}

/// Draws a grid `width` cells wide, with lines wherever the region changes.
///
/// `regions` assigns each cell its region as a fixed digit, see [`Grid::from_regions`].
/// Cells show the digit of `values` if it is fixed there, `.` otherwise.
/// Without `values`, cells are left blank.
///
/// # Panics
/// Panics if `width` is zero or does not divide the number of cells,
/// or if `values` has a different number of cells than `regions`.
pub fn regions(width: usize, regions: &Grid, values: Option<&Grid>) -> String {
    assert!(width > 0 && regions.cells() % width == 0, "width does not fit the grid");
    if let Some(values) = values {
        assert_eq!(values.cells(), regions.cells());
    }
    let layout = Layout {
        width,
        height: regions.cells() / width,
        regions,
    };

    let mut out = String::new();
    for line in 0..=2 * layout.height {
        let row = (line / 2) as isize;
        for column in 0..=2 * width {
            let col = (column / 2) as isize;
            match (line % 2 == 1, column % 2 == 1) {
                // inside a cell
                (true, true) => {
                    let cell = row as usize * width + col as usize;
                    let content = match values.map(|values| values.mask(cell).unique()) {
                        Some(Ok(Some(digit))) => digit.to_char(),
                        Some(_) => '.',
                        None => ' ',
                    };
                    out.push(' ');
                    out.push(content);
                    out.push(' ');
                }
                // vertical edge between (row, col - 1) and (row, col)
                (true, false) => out.push(if layout.split((row, col - 1), (row, col)) {
                    '│'
                } else {
                    ' '
                }),
                // horizontal edge between (row - 1, col) and (row, col)
                (false, true) => out.push_str(if layout.split((row - 1, col), (row, col)) {
                    "───"
                } else {
                    "   "
                }),
                // corner shared by the four cells around it
                (false, false) => {
                    let top_left = (row - 1, col - 1);
                    let top_right = (row - 1, col);
                    let bottom_left = (row, col - 1);
                    let bottom_right = (row, col);
                    out.push(corner(
                        layout.split(top_left, top_right),
                        layout.split(bottom_left, bottom_right),
                        layout.split(top_left, bottom_left),
                        layout.split(top_right, bottom_right),
                    ));
                }
            }
        }
        if line < 2 * layout.height {
            out.push('\n');
        }
    }
    out
}
