pub mod augmented;
pub mod error;
pub mod pipeline;
pub mod session;

pub use augmented::{gauss_jordan::RowSwapPolicy, solution::Solution, AugmentedMatrix};
pub use error::SolveError;
pub use pipeline::solve_system;
