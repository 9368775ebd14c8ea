use std::fmt;

use super::matrix::AugmentedMatrix;

const DECIMAL_PLACES: i32 = 2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// 1-based index of the unknown.
    pub variable: usize,
    pub value: f64,
}

impl Solution {
    pub fn label(&self) -> String {
        format!("x_{}", self.variable)
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {:?}", self.label(), self.value)
    }
}

/// Rounds the stored binary value to `places` decimals, half to even.
///
/// `value * scale` can land exactly on a `.5` that the stored value is
/// only near; the fused residual tells which side it really lies on.
pub fn round_to_places(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    let scaled = value * scale;
    let rounded = if (scaled - scaled.trunc()).abs() == 0.5 {
        let residual = value.mul_add(scale, -scaled);
        if residual > 0.0 {
            scaled + 0.5
        } else if residual < 0.0 {
            scaled - 0.5
        } else {
            scaled.round_ties_even()
        }
    } else {
        scaled.round()
    };
    rounded / scale
}

/// Rounds every constant to two decimal places, half to even. Coefficients
/// are left alone.
pub fn round_solutions(matrix: &mut AugmentedMatrix) {
    let last_col_idx = matrix.last_col_idx();
    for row in matrix.rows.iter_mut() {
        row[last_col_idx] = round_to_places(row[last_col_idx], DECIMAL_PLACES);
    }
    log::trace!("after rounding:\n{matrix}");
}

pub fn extract_solutions(matrix: &AugmentedMatrix) -> Vec<Solution> {
    (0..matrix.number_of_equations())
        .map(|row| {
            let value = matrix.constant(row);
            Solution {
                variable: row + 1,
                // folds -0.0 into 0.0
                value: if value == 0.0 { 0.0 } else { value },
            }
        })
        .collect()
}

#[cfg(test)]
mod test {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn rounds_only_the_constant_column() {
        let mut m = AugmentedMatrix::from_rows(vec![
            vec![1.0, 0.123456, 1.3333333333333335],
            vec![0.0, 1.0, 1.3333333333333333],
        ])
        .unwrap();
        round_solutions(&mut m);
        assert_eq!(m.rows[0], vec![1.0, 0.123456, 1.33]);
        assert_eq!(m.rows[1], vec![0.0, 1.0, 1.33]);
    }

    #[test]
    fn halfway_values_round_to_even() {
        assert_eq!(round_to_places(0.125, 2), 0.12);
        assert_eq!(round_to_places(0.375, 2), 0.38);
        assert_eq!(round_to_places(-0.125, 2), -0.12);
        assert_eq!(round_to_places(2.0, 2), 2.0);
    }

    #[test]
    fn near_ties_round_by_their_binary_value() {
        // 0.005 and 0.025 are stored slightly above the tie, 0.015 below
        assert_eq!(round_to_places(1.0 / 200.0, 2), 0.01);
        assert_eq!(round_to_places(1.0 / 40.0, 2), 0.03);
        assert_eq!(round_to_places(3.0 / 200.0, 2), 0.01);
        assert_eq!(round_to_places(-1.0 / 200.0, 2), -0.01);
        assert_eq!(round_to_places(-3.0 / 200.0, 2), -0.01);
        assert_eq!(round_to_places(2.675, 2), 2.67);
    }

    #[test]
    fn rounding_twice_changes_nothing() {
        let mut m = AugmentedMatrix::from_rows(vec![
            vec![1.0, 0.0, 0.0, 2.0 / 3.0],
            vec![0.0, 1.0, 0.0, -7.0 / 9.0],
            vec![0.0, 0.0, 1.0, 1234.5678],
        ])
        .unwrap();
        round_solutions(&mut m);
        let once = m.clone();
        round_solutions(&mut m);
        assert_eq!(m, once);
    }

    #[test]
    fn negative_zero_is_reported_as_zero() {
        let m = AugmentedMatrix::from_rows(vec![
            vec![1.0, 0.0, 0.0, 4.0],
            vec![-0.0, 1.0, 0.0, 2.0],
            vec![-0.0, -0.0, 1.0, -0.0],
        ])
        .unwrap();
        let solutions = extract_solutions(&m);
        assert!(solutions[2].value.is_sign_positive());
        assert_eq!(
            solutions.iter().map(|s| s.to_string()).collect_vec(),
            vec!["x_1 = 4.0", "x_2 = 2.0", "x_3 = 0.0"]
        );
    }

    #[test]
    fn labels_are_one_based() {
        let m = AugmentedMatrix::from_rows(vec![vec![1.0, -3.25]]).unwrap();
        let solutions = extract_solutions(&m);
        assert_eq!(solutions.len(), 1);
        assert_eq!(solutions[0].label(), "x_1");
        assert_eq!(solutions[0].to_string(), "x_1 = -3.25");
    }
}
