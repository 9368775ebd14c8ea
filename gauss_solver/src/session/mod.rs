pub mod prompt;

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use strum_macros::Display;

use crate::augmented::{
    gauss_jordan::RowSwapPolicy, matrix::MAX_EXACT_ENTRY, solution::Solution, AugmentedMatrix,
};
use crate::error::SolveError;
use crate::pipeline::solve_system;
use prompt::Console;

const COUNT_PROMPT: &str = "How many variables/equations?: ";
const COUNT_COMPLAINT: &str = "Invalid input please input an integer greater than 0";
const CELL_COMPLAINT: &str = "Invalid input please input a whole number no larger than 2^53";
const CONSTANT_PROMPT: &str = "Insert constant that equation is equal to\n";
const DEGENERATE_COLUMN: &str = "The equation you have input has a full column of zeros. \
If you would like to solve the equation you have input decrease your variable count by 1 \
before you start to input coefficients";
pub const NO_UNIQUE_SOLUTION: &str = "Given equation has no unique solutions";
const EXIT_PROMPT: &str = "Input x to exit. Input any other character to try again\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SessionState {
    CollectingInput,
    Validating,
    Solving,
    Reporting,
    Done,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SessionConfig {
    /// Fixed equation count; when unset the user is asked for one.
    pub equations: Option<usize>,
    pub policy: RowSwapPolicy,
}

/// Interactive solve loop: collect a system, validate it, solve it, report,
/// then offer another round.
pub struct Session<R, W> {
    console: Console<R, W>,
    config: SessionConfig,
    state: SessionState,
    matrix: Option<AugmentedMatrix>,
    solutions: Vec<Solution>,
    solved_systems: usize,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: SessionConfig) -> Self {
        Self {
            console: Console::new(input, output),
            config,
            state: SessionState::CollectingInput,
            matrix: None,
            solutions: Vec::new(),
            solved_systems: 0,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn solved_systems(&self) -> usize {
        self.solved_systems
    }

    pub fn into_output(self) -> W {
        self.console.into_output()
    }

    pub fn run(&mut self) -> Result<()> {
        while self.state != SessionState::Done {
            let next = self.step()?;
            log::debug!("session: {} -> {}", self.state, next);
            self.state = next;
        }
        Ok(())
    }

    fn step(&mut self) -> Result<SessionState> {
        match self.state {
            SessionState::CollectingInput => self.collect_input(),
            SessionState::Validating => self.validate(),
            SessionState::Solving => self.solve(),
            SessionState::Reporting => self.report(),
            SessionState::Done => Ok(SessionState::Done),
        }
    }

    fn collect_input(&mut self) -> Result<SessionState> {
        let equations = match self.config.equations {
            Some(n) => n,
            None => {
                let answer =
                    self.console
                        .ask_integer(COUNT_PROMPT, COUNT_COMPLAINT, |n| n > 0)?;
                match answer {
                    Some(n) => n as usize,
                    None => return Ok(SessionState::Done),
                }
            }
        };
        let mut matrix = AugmentedMatrix::zeroes(equations);
        for row_idx in 0..equations {
            self.console.say(matrix.format_row(row_idx))?;
            for position in 0..=equations {
                let prompt = if position == equations {
                    CONSTANT_PROMPT.to_string()
                } else {
                    format!("Insert coefficient for variable at position {}\n", position + 1)
                };
                let equation_number = row_idx + 1;
                let Some(value) = self.console.ask_integer_with(
                    |c| c.say(format!("for equation number {equation_number}")),
                    &prompt,
                    CELL_COMPLAINT,
                    |v| v.unsigned_abs() <= MAX_EXACT_ENTRY.unsigned_abs(),
                )?
                else {
                    return Ok(SessionState::Done);
                };
                matrix.set(row_idx, position, value as f64);
                self.console.say(matrix.format_row(row_idx))?;
            }
        }
        self.matrix = Some(matrix);
        Ok(SessionState::Validating)
    }

    fn validate(&mut self) -> Result<SessionState> {
        let matrix = self.matrix.as_ref().context("no system collected")?;
        if matrix.has_no_degenerate_column() {
            return Ok(SessionState::Solving);
        }
        let rendered = matrix.format_rows();
        self.matrix = None;
        self.console.say(rendered)?;
        self.console.say(DEGENERATE_COLUMN)?;
        Ok(SessionState::CollectingInput)
    }

    fn solve(&mut self) -> Result<SessionState> {
        let mut matrix = self.matrix.take().context("no system collected")?;
        match solve_system(&mut matrix, self.config.policy) {
            Ok(solutions) => {
                self.solutions = solutions;
                self.solved_systems += 1;
                Ok(SessionState::Reporting)
            }
            Err(err @ SolveError::NoUniqueSolution { .. }) => {
                log::info!("{err}");
                self.console.say(NO_UNIQUE_SOLUTION)?;
                Ok(SessionState::CollectingInput)
            }
            Err(err @ SolveError::DegenerateColumn { .. }) => {
                log::info!("{err}");
                self.console.say(DEGENERATE_COLUMN)?;
                Ok(SessionState::CollectingInput)
            }
        }
    }

    fn report(&mut self) -> Result<SessionState> {
        for solution in std::mem::take(&mut self.solutions) {
            self.console.say(solution.to_string())?;
        }
        match self.console.ask(EXIT_PROMPT)? {
            Some(answer) if !answer.eq_ignore_ascii_case("x") => Ok(SessionState::CollectingInput),
            _ => Ok(SessionState::Done),
        }
    }
}
