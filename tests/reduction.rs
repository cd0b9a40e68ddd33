use approx::assert_abs_diff_eq;
use linsys::{solve_linear_system, Method, SolveError, StepKind};

#[test]
fn solves_reference_two_by_two() {
    let solution =
        solve_linear_system(&["2x + 3y = 7", "x - y = 1"], Method::Reduction).expect("solve");
    assert_abs_diff_eq!(solution.get("x").expect("x"), 2.0, epsilon = 1e-9);
    assert_abs_diff_eq!(solution.get("y").expect("y"), 1.0, epsilon = 1e-9);
}

#[test]
fn uses_least_common_multiple_for_multipliers() {
    let solution =
        solve_linear_system(&["4x + y = 9", "6x - y = 1"], Method::Reduction).expect("solve");
    assert_abs_diff_eq!(solution.get("x").expect("x"), 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(solution.get("y").expect("y"), 5.0, epsilon = 1e-9);

    let find = solution
        .steps()
        .iter()
        .find(|s| s.kind() == StepKind::FindMultiple)
        .expect("find multiple step");
    assert_eq!(find.operations()[0], "LCM(|4|, |6|) = 12");
    assert_eq!(find.operations()[1], "Multiplier for equation 1: 12 ÷ 4 = 3");
}

#[test]
fn handles_fractional_and_negative_coefficients() {
    let solution =
        solve_linear_system(&["0.5x + y = 2", "-1.5x + 2y = 1"], Method::Reduction)
            .expect("solve");
    assert_abs_diff_eq!(solution.get("x").expect("x"), 1.2, epsilon = 1e-9);
    assert_abs_diff_eq!(solution.get("y").expect("y"), 1.4, epsilon = 1e-9);
}

#[test]
fn zero_coefficient_in_second_equation_is_inapplicable() {
    let err = solve_linear_system(&["x + y = 3", "0x + 2y = 4"], Method::Reduction)
        .expect_err("x missing from equation 2");
    assert_eq!(
        err,
        SolveError::UnsolvableByReduction {
            variable: "x".to_string(),
            equation: 1
        }
    );
}

#[test]
fn dependent_equations_are_singular() {
    let err = solve_linear_system(&["x + 2y = 3", "2x + 4y = 6"], Method::Reduction)
        .expect_err("dependent");
    match err {
        SolveError::SingularSystem { detail, .. } => assert!(detail.contains("dependent")),
        other => panic!("expected singular system, got {other:?}"),
    }
}

#[test]
fn zero_coefficient_in_first_equation_is_inapplicable() {
    let err = solve_linear_system(&["0x + 2y = 4", "3x + y = 5"], Method::Reduction)
        .expect_err("x missing from equation 1");
    assert_eq!(
        err,
        SolveError::UnsolvableByReduction {
            variable: "x".to_string(),
            equation: 0
        }
    );
}

#[test]
fn parallel_lines_are_inconsistent() {
    let err = solve_linear_system(&["x + y = 2", "x + y = 3"], Method::Reduction)
        .expect_err("no solution");
    match err {
        SolveError::SingularSystem { variable, detail } => {
            assert_eq!(variable, "y");
            assert!(detail.contains("inconsistent"));
        }
        other => panic!("expected singular system, got {other:?}"),
    }
}

#[test]
fn larger_systems_are_unsupported() {
    let err = solve_linear_system(
        &["x + y + z = 3", "x - y = 0", "y - z = 0"],
        Method::Reduction,
    )
    .expect_err("3x3");
    assert_eq!(
        err,
        SolveError::UnsupportedSize {
            method: Method::Reduction,
            size: 3
        }
    );
}

#[test]
fn back_substitution_text_keeps_signs_readable() {
    let solution =
        solve_linear_system(&["x - y = 1", "2x + 3y = 7"], Method::Reduction).expect("solve");
    let back = solution
        .steps()
        .iter()
        .find(|s| s.kind() == StepKind::BackSubstitution)
        .expect("back substitution step");
    assert_eq!(back.operations()[0], "x - 1 × 1.000 = 1");
    assert_eq!(back.operations()[1], "x = 2.000");
}
