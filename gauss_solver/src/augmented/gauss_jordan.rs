use clap::ValueEnum;
use strum_macros::{Display, EnumIter};

use super::matrix::AugmentedMatrix;
use crate::error::SolveError;

/// Which row a pivot candidate is swapped with when the diagonal entry is zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumIter, ValueEnum)]
#[strum(serialize_all = "kebab-case")]
pub enum RowSwapPolicy {
    /// Swap the diagonal row with the first row below it that has a
    /// nonzero entry in the pivot column.
    #[default]
    TargetRow,
    /// Swap each candidate below the diagonal into row 0, one after the
    /// other, re-checking the diagonal entry after every swap. Only
    /// finds a pivot for the first column; later zero pivots fail.
    FirstRow,
}

/// Makes `matrix[row][column]` nonzero by reordering rows below `row`.
pub fn locate_pivot(
    matrix: &mut AugmentedMatrix,
    row: usize,
    column: usize,
    policy: RowSwapPolicy,
) -> Result<(), SolveError> {
    match policy {
        RowSwapPolicy::TargetRow => locate_pivot_swapping_target(matrix, row, column),
        RowSwapPolicy::FirstRow => locate_pivot_swapping_first_row(matrix, row, column),
    }
}

fn locate_pivot_swapping_target(
    matrix: &mut AugmentedMatrix,
    row: usize,
    column: usize,
) -> Result<(), SolveError> {
    if matrix.get(row, column) != 0.0 {
        return Ok(());
    }
    let candidate = (row + 1..matrix.number_of_equations())
        .find(|&candidate| matrix.get(candidate, column) != 0.0)
        .ok_or(SolveError::NoUniqueSolution { column })?;
    log::debug!("pivot for column {column}: swapping row {row} with row {candidate}");
    matrix.swap_rows(row, candidate);
    Ok(())
}

fn locate_pivot_swapping_first_row(
    matrix: &mut AugmentedMatrix,
    row: usize,
    column: usize,
) -> Result<(), SolveError> {
    let last_row = matrix.number_of_equations() - 1;
    let mut candidate = column + 1;
    while matrix.get(row, column) == 0.0 {
        if candidate > last_row {
            return Err(SolveError::NoUniqueSolution { column });
        }
        log::debug!("pivot for column {column}: swapping row 0 with row {candidate}");
        matrix.swap_rows(0, candidate);
        candidate += 1;
    }
    Ok(())
}

/// Divides `row` by its entry at `column`, leaving a unit pivot.
pub fn normalize_row(matrix: &mut AugmentedMatrix, row: usize, column: usize) {
    let divide_by = matrix.get(row, column);
    debug_assert!(divide_by != 0.0, "normalizing row {row} by a zero pivot");
    for value in matrix.rows[row].iter_mut() {
        *value /= divide_by;
    }
}

/// Subtracts the multiple of `pivot_row` that zeroes `target_row` at
/// `column`. The pivot row must already be normalized at `column`.
pub fn eliminate_row(
    matrix: &mut AugmentedMatrix,
    pivot_row: usize,
    target_row: usize,
    column: usize,
) {
    let multiply_by = matrix.get(target_row, column);
    for idx in 0..matrix.number_of_columns {
        let pivot_value = matrix.rows[pivot_row][idx];
        matrix.rows[target_row][idx] -= pivot_value * multiply_by;
    }
}

/// Forward elimination over an augmented system, one diagonal position at
/// a time. Leaves unit pivots and zeros below the diagonal; entries above
/// the diagonal are left for [`super::backwards_substitution`].
pub struct GaussJordan<'a> {
    matrix: &'a mut AugmentedMatrix,
    policy: RowSwapPolicy,
    active_column: usize,
}

impl<'a> GaussJordan<'a> {
    pub fn new(matrix: &'a mut AugmentedMatrix, policy: RowSwapPolicy) -> Self {
        Self {
            matrix,
            policy,
            active_column: 0,
        }
    }

    pub fn go_to_echelon_form(&mut self) -> Result<(), SolveError> {
        while self.is_not_in_echelon_form() {
            self.pivot_active_column()?;
            self.go_to_next_column();
        }
        log::trace!("echelon form:\n{}", self.matrix);
        Ok(())
    }

    fn is_not_in_echelon_form(&self) -> bool {
        self.active_column < self.matrix.number_of_equations()
    }

    fn pivot_active_column(&mut self) -> Result<(), SolveError> {
        // row and column coincide: every step targets the diagonal
        let pivot = self.active_column;
        locate_pivot(self.matrix, pivot, pivot, self.policy)?;
        normalize_row(self.matrix, pivot, pivot);
        for target in pivot + 1..self.matrix.number_of_equations() {
            eliminate_row(self.matrix, pivot, target, pivot);
        }
        log::debug!("column {pivot} eliminated below the diagonal");
        Ok(())
    }

    fn go_to_next_column(&mut self) {
        self.active_column += 1;
    }
}
