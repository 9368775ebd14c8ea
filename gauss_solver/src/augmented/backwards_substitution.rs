use super::matrix::AugmentedMatrix;

/// Sweeps upward from the last equation of a matrix in echelon form,
/// folding every solved variable into the constants of the rows above and
/// clearing its coefficient there. Afterwards each row's constant holds the
/// value of its own variable.
pub fn substitute_backwards(matrix: &mut AugmentedMatrix) {
    let last_col_idx = matrix.last_col_idx();
    let mut solved = matrix.number_of_equations();
    while solved > 1 {
        solved -= 1;
        let z = matrix.constant(solved);
        for i in (0..solved).rev() {
            let row = &mut matrix.rows[i];
            let coefficient = row[solved];
            row[last_col_idx] -= coefficient * z;
            row[solved] = 0.0;
        }
    }
    log::trace!("after back substitution:\n{matrix}");
}
