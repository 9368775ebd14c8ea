use std::time::Instant;

use strum_macros::{Display, EnumIter};

use crate::augmented::{
    backwards_substitution::substitute_backwards,
    gauss_jordan::{GaussJordan, RowSwapPolicy},
    solution::{extract_solutions, round_solutions, Solution},
    AugmentedMatrix,
};
use crate::error::SolveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum PipelineStage {
    Unvalidated,
    Validated,
    ForwardEliminated,
    BackSubstituted,
    Rounded,
    Extracted,
    Failed,
}

impl PipelineStage {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Extracted | Self::Failed)
    }
}

/// Runs every reduction stage over one borrowed matrix, in order. The
/// matrix is mutated in place; after a failure its contents are
/// meaningless and should be discarded.
pub struct Pipeline<'a> {
    matrix: &'a mut AugmentedMatrix,
    policy: RowSwapPolicy,
    stage: PipelineStage,
}

impl<'a> Pipeline<'a> {
    pub fn new(matrix: &'a mut AugmentedMatrix, policy: RowSwapPolicy) -> Self {
        Self {
            matrix,
            policy,
            stage: PipelineStage::Unvalidated,
        }
    }

    pub fn stage(&self) -> PipelineStage {
        self.stage
    }

    pub fn run(mut self) -> Result<Vec<Solution>, SolveError> {
        let start = Instant::now();
        let outcome = self.run_stages();
        if outcome.is_err() {
            self.go_to(PipelineStage::Failed);
        }
        log::debug!("pipeline finished in {:#?}", start.elapsed());
        outcome
    }

    fn run_stages(&mut self) -> Result<Vec<Solution>, SolveError> {
        self.validate()?;
        self.eliminate_forward()?;
        self.substitute_backwards();
        self.round();
        Ok(self.extract())
    }

    fn validate(&mut self) -> Result<(), SolveError> {
        debug_assert_eq!(self.stage, PipelineStage::Unvalidated);
        if let Some(column) = self.matrix.find_degenerate_column() {
            return Err(SolveError::DegenerateColumn { column });
        }
        self.go_to(PipelineStage::Validated);
        Ok(())
    }

    fn eliminate_forward(&mut self) -> Result<(), SolveError> {
        debug_assert_eq!(self.stage, PipelineStage::Validated);
        GaussJordan::new(self.matrix, self.policy).go_to_echelon_form()?;
        self.go_to(PipelineStage::ForwardEliminated);
        Ok(())
    }

    fn substitute_backwards(&mut self) {
        debug_assert_eq!(self.stage, PipelineStage::ForwardEliminated);
        substitute_backwards(self.matrix);
        self.go_to(PipelineStage::BackSubstituted);
    }

    fn round(&mut self) {
        debug_assert_eq!(self.stage, PipelineStage::BackSubstituted);
        round_solutions(self.matrix);
        self.go_to(PipelineStage::Rounded);
    }

    fn extract(&mut self) -> Vec<Solution> {
        debug_assert_eq!(self.stage, PipelineStage::Rounded);
        let solutions = extract_solutions(self.matrix);
        self.go_to(PipelineStage::Extracted);
        solutions
    }

    fn go_to(&mut self, next: PipelineStage) {
        log::debug!("pipeline: {} -> {}", self.stage, next);
        self.stage = next;
    }
}

/// Solves `matrix` in place and returns the labeled, rounded solutions.
pub fn solve_system(
    matrix: &mut AugmentedMatrix,
    policy: RowSwapPolicy,
) -> Result<Vec<Solution>, SolveError> {
    Pipeline::new(matrix, policy).run()
}
