use approx::assert_abs_diff_eq;
use linsys::{solve_linear_system, LinearSystem, Method, ParseOptions, SolveError, StepKind};

#[test]
fn solves_reference_two_by_two() {
    let solution =
        solve_linear_system(&["2x + 3y = 7", "x - y = 1"], Method::Elimination).expect("solve");
    assert_abs_diff_eq!(solution.get("x").expect("x"), 2.0, epsilon = 1e-9);
    assert_abs_diff_eq!(solution.get("y").expect("y"), 1.0, epsilon = 1e-9);
}

#[test]
fn zero_pivot_triggers_row_swap() {
    let solution =
        solve_linear_system(&["0x + 2y = 4", "3x + y = 5"], Method::Elimination).expect("solve");
    assert_abs_diff_eq!(solution.get("y").expect("y"), 2.0, epsilon = 1e-9);
    assert_abs_diff_eq!(solution.get("x").expect("x"), 1.0, epsilon = 1e-9);

    let swap = solution
        .steps()
        .iter()
        .find(|step| step.kind() == StepKind::RowSwap)
        .expect("row swap recorded");
    assert!(swap.description().contains("row 1 with row 2"));
    assert_eq!(swap.matrix()[0], "Row 1: [3, 1] = 5");
}

#[test]
fn solves_three_by_three_and_round_trips() {
    let equations = ["2x + 3y + 8z = 7", "x - 4y + 6z = 1", "3x - y - z = 8"];
    let solution = solve_linear_system(&equations, Method::Elimination).expect("solve");

    let system = LinearSystem::parse(&equations, &ParseOptions::default()).expect("parse");
    for residual in system.residuals(solution.values()) {
        assert_abs_diff_eq!(residual, 0.0, epsilon = 1e-6);
    }
}

#[test]
fn trace_has_expected_shape() {
    let solution =
        solve_linear_system(&["2x + 3y = 7", "x - y = 1"], Method::Elimination).expect("solve");
    let kinds: Vec<StepKind> = solution.steps().iter().map(|s| s.kind()).collect();
    assert_eq!(
        kinds,
        [
            StepKind::OriginalSystem,
            StepKind::ForwardElimination,
            StepKind::UpperTriangular,
            StepKind::BackSubstitution,
            StepKind::BackSubstitution,
            StepKind::Verification,
        ]
    );

    let first_back = &solution.steps()[3];
    assert_eq!(first_back.title(), "Back substitution: y");
    assert_eq!(first_back.operations().last().map(String::as_str), Some("y = 1.000"));

    let verify = solution.steps().last().expect("verification");
    assert!(verify.operations().iter().all(|op| op.ends_with("satisfied") && !op.contains("NOT")));
}

#[test]
fn singular_system_is_rejected() {
    let err = solve_linear_system(&["x + y = 2", "2x + 2y = 4"], Method::Elimination)
        .expect_err("dependent rows");
    match err {
        SolveError::SingularSystem { variable, .. } => assert_eq!(variable, "y"),
        other => panic!("expected singular system, got {other:?}"),
    }
}

#[test]
fn all_zero_column_is_rejected() {
    let err = solve_linear_system(&["0x + y = 2", "0x - y = 4"], Method::Elimination)
        .expect_err("no pivot for x");
    assert!(matches!(err, SolveError::SingularSystem { ref variable, .. } if variable == "x"));
}
