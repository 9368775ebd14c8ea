pub mod backwards_substitution;
pub mod gauss_jordan;
pub mod matrix;
pub mod solution;

pub use matrix::AugmentedMatrix;
