use std::fmt;

use itertools::Itertools;

use crate::error::{ShapeError, SystemParseError};

/// Largest integer magnitude an entry can hold without losing precision.
pub const MAX_EXACT_ENTRY: i64 = 1 << 53;

/// `n` equations in `n` unknowns, each row holding `n` coefficients
/// followed by the constant term.
#[derive(Debug, Clone, PartialEq)]
pub struct AugmentedMatrix {
    pub number_of_columns: usize,
    pub rows: Vec<Vec<f64>>,
}

impl AugmentedMatrix {
    pub fn zeroes(equations: usize) -> Self {
        let cols = equations + 1;
        Self {
            number_of_columns: cols,
            rows: (0..equations).map(|_| vec![0.0; cols]).collect(),
        }
    }

    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, ShapeError> {
        if rows.is_empty() {
            return Err(ShapeError::Empty);
        }
        let expected = rows.len() + 1;
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|(_, len)| *len != expected)
        {
            return Err(ShapeError::RaggedRow {
                row,
                expected,
                found,
            });
        }
        Ok(Self {
            number_of_columns: expected,
            rows,
        })
    }

    pub fn from_integer_rows<R: AsRef<[i64]>>(rows: &[R]) -> Result<Self, ShapeError> {
        Self::from_rows(
            rows.iter()
                .map(|row| row.as_ref().iter().map(|v| *v as f64).collect())
                .collect(),
        )
    }

    /// Parses `4,4,1,24;2,-4,1,0;5,-4,-5,12`: rows split on `;`, integer
    /// cells split on `,`.
    pub fn parse_system(text: &str) -> Result<Self, SystemParseError> {
        let mut rows = Vec::new();
        for (row_idx, row_text) in text
            .split(';')
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .enumerate()
        {
            let mut row = Vec::new();
            for (cell_idx, cell) in row_text.split(',').map(str::trim).enumerate() {
                let value: i64 = cell.parse().map_err(|_| SystemParseError::NotAnInteger {
                    row: row_idx,
                    cell: cell_idx,
                    text: cell.to_string(),
                })?;
                if value.unsigned_abs() > MAX_EXACT_ENTRY.unsigned_abs() {
                    return Err(SystemParseError::OutOfRange {
                        row: row_idx,
                        cell: cell_idx,
                        value,
                    });
                }
                row.push(value as f64);
            }
            rows.push(row);
        }
        Ok(Self::from_rows(rows)?)
    }

    pub fn number_of_equations(&self) -> usize {
        self.rows.len()
    }

    pub fn last_col_idx(&self) -> usize {
        self.number_of_columns - 1
    }

    pub fn get(&self, r: usize, c: usize) -> f64 {
        self.rows[r][c]
    }

    pub fn set(&mut self, r: usize, c: usize, v: f64) {
        self.rows[r][c] = v;
    }

    pub fn constant(&self, r: usize) -> f64 {
        self.rows[r][self.last_col_idx()]
    }

    pub fn swap_rows(&mut self, a: usize, b: usize) {
        self.rows.swap(a, b);
    }

    /// Flags any coefficient column whose entries sum to exactly zero.
    ///
    /// A column of nonzero entries that cancel out (e.g. `1` and `-1`) is
    /// rejected the same way as a column of zeros. Whole-number columns
    /// within [`MAX_EXACT_ENTRY`] are summed as integers.
    pub fn find_degenerate_column(&self) -> Option<usize> {
        (0..self.last_col_idx()).find(|&col| self.column_sums_to_zero(col))
    }

    fn column_sums_to_zero(&self, col: usize) -> bool {
        let column = self.rows.iter().map(|row| row[col]);
        let exact_integers = column
            .clone()
            .all(|v| v.fract() == 0.0 && v.abs() <= MAX_EXACT_ENTRY as f64);
        if exact_integers {
            column.map(|v| v as i128).sum::<i128>() == 0
        } else {
            column.sum::<f64>() == 0.0
        }
    }

    pub fn has_no_degenerate_column(&self) -> bool {
        self.find_degenerate_column().is_none()
    }

    /// Renders one row the way the user typed it, e.g. `[4, -4, 1, 0]`.
    pub fn format_row(&self, r: usize) -> String {
        format!("[{}]", self.rows[r].iter().join(", "))
    }

    /// Renders the whole system as a nested list, e.g. `[[0, 1, 1], [0, 2, 3]]`.
    pub fn format_rows(&self) -> String {
        format!(
            "[{}]",
            (0..self.number_of_equations())
                .map(|r| self.format_row(r))
                .join(", ")
        )
    }
}

impl fmt::Display for AugmentedMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .rows
            .iter()
            .map(|row| format!("[{}]", row.iter().map(|v| format!("{v:?}")).join(", ")))
            .join("\n");
        write!(f, "{rendered}")
    }
}
