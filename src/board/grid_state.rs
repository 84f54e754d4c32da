use crate::bitset::Mask;
use crate::board::Grid;
use std::fmt::{self, Formatter};

/// The candidates of every cell of a [`Grid`], laid out as a table.
///
/// Created by [`Grid::candidate_table`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidateTable {
    width: usize,
    masks: Vec<Mask>,
}

/* Example output
┌──────────────────────┐
│ 1   2     1234  1234 │
│ 24  1234  1234  1234 │
└──────────────────────┘
*/

impl CandidateTable {
    pub(crate) fn new(grid: &Grid, width: usize) -> Self {
        CandidateTable {
            width: width.max(1),
            masks: (0..grid.cells()).map(|cell| grid.mask(cell)).collect(),
        }
    }

    /// Candidates of `cell`.
    pub fn get(&self, cell: usize) -> Option<Mask> {
        self.masks.get(cell).copied()
    }
}

impl fmt::Display for CandidateTable {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        let column_widths: Vec<usize> = (0..self.width)
            .map(|col| {
                self.masks
                    .iter()
                    .skip(col)
                    .step_by(self.width)
                    .map(|mask| std::cmp::max(1, mask.len() as usize))
                    .max()
                    .unwrap_or(1)
            })
            .collect();

        // spaces in between cells and walls
        let inner = column_widths.iter().sum::<usize>() + 2 * self.width;
        let print_horizontal_delimiter = |f: &mut Formatter, left: char, right: char| {
            write!(f, "{left}{0:─<1$}{right}", "", inner, left = left, right = right)
        };

        print_horizontal_delimiter(f, '┌', '┐')?;
        for row in self.masks.chunks(self.width) {
            write!(f, "\n│")?;
            for (mask, &width) in row.iter().zip(column_widths.iter()) {
                if mask.is_empty() {
                    write!(f, " {:width$} ", "_", width = width)?;
                } else {
                    write!(f, " {:width$} ", mask, width = width)?;
                }
            }
            let missing = &column_widths[row.len()..];
            for &width in missing {
                write!(f, " {:width$} ", "", width = width)?;
            }
            write!(f, "│")?;
        }
        writeln!(f)?;
        print_horizontal_delimiter(f, '└', '┘')
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Grid;

    #[test]
    fn table_layout() {
        let grid = Grid::parse("12.. e...", 8, 4).unwrap();
        let expected = "\
┌──────────────────────┐
│ 1   2     1234  1234 │
│ 24  1234  1234  1234 │
└──────────────────────┘";
        assert_eq!(grid.candidate_table(4).to_string(), expected);
    }

    #[test]
    fn ragged_last_row() {
        let grid = Grid::parse("1.3", 3, 3).unwrap();
        let printed = grid.candidate_table(2).to_string();
        let lines: Vec<&str> = printed.lines().collect();
        assert_eq!(lines[1], "│ 1  123 │");
        assert_eq!(lines[2], "│ 3      │");
    }
}
