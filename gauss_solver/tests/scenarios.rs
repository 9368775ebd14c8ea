use std::io::Cursor;

use gauss_solver::{
    session::{Session, SessionConfig, NO_UNIQUE_SOLUTION},
    solve_system, AugmentedMatrix, RowSwapPolicy, SolveError,
};
use itertools::Itertools;

fn solve(system: &str, policy: RowSwapPolicy) -> Result<Vec<String>, SolveError> {
    let mut matrix = AugmentedMatrix::parse_system(system).unwrap();
    solve_system(&mut matrix, policy).map(|s| s.iter().map(|s| s.to_string()).collect_vec())
}

#[test]
fn three_unknowns() {
    assert_eq!(
        solve("4,4,1,24;2,-4,1,0;5,-4,-5,12", RowSwapPolicy::TargetRow).unwrap(),
        vec!["x_1 = 4.0", "x_2 = 2.0", "x_3 = 0.0"]
    );
}

#[test]
fn two_unknowns_rounded() {
    assert_eq!(
        solve("1,2,4;2,1,4", RowSwapPolicy::FirstRow).unwrap(),
        vec!["x_1 = 1.33", "x_2 = 1.33"]
    );
}

#[test]
fn singular_system() {
    assert_eq!(
        solve("1,1,2;1,1,2", RowSwapPolicy::TargetRow),
        Err(SolveError::NoUniqueSolution { column: 1 })
    );
}

#[test]
fn interactive_round_trip_through_all_scenarios() {
    let input = [
        // singular first, then recollected
        "2", "1", "1", "2", "1", "1", "2",
        // three unknowns
        "3", "4", "4", "1", "24", "2", "-4", "1", "0", "5", "-4", "-5", "12",
        "again",
        "2", "1", "2", "4", "2", "1", "4",
        "x",
    ]
    .iter()
    .map(|line| format!("{line}\n"))
    .join("");
    let mut session = Session::new(
        Cursor::new(input.into_bytes()),
        Vec::new(),
        SessionConfig::default(),
    );
    session.run().unwrap();
    assert_eq!(session.solved_systems(), 2);
    let out = String::from_utf8(session.into_output()).unwrap();
    assert_eq!(out.matches(NO_UNIQUE_SOLUTION).count(), 1);
    assert!(out.contains("x_1 = 4.0\nx_2 = 2.0\nx_3 = 0.0\n"), "{out}");
    assert!(out.contains("x_1 = 1.33\nx_2 = 1.33\n"), "{out}");
}

#[test]
fn single_unknown_near_rounding_ties() {
    for (system, expected) in [("200,1", "x_1 = 0.01"), ("40,1", "x_1 = 0.03"), ("200,3", "x_1 = 0.01")] {
        assert_eq!(
            solve(system, RowSwapPolicy::TargetRow).unwrap(),
            vec![expected],
            "{system}"
        );
    }
}
