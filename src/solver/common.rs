use crate::equation::LinearSystem;
use crate::format::{compact, fixed, matrix};
use crate::steps::{StepDraft, StepKind};

use super::SolverOptions;

pub(super) fn original_system(system: &LinearSystem, details: impl Into<String>) -> StepDraft {
    let a = system.coefficient_matrix();
    let b = system.constants();
    StepDraft::new(
        StepKind::OriginalSystem,
        "Original system",
        format!(
            "{} equations in the unknowns {}:",
            system.len(),
            system.variables().join(", ")
        ),
    )
    .details(details)
    .equations(
        system
            .equations()
            .iter()
            .map(|eq| eq.source().to_string())
            .collect(),
    )
    .matrix(matrix(&a, &b))
}

/// Largest coefficient magnitude; pivot checks scale with it.
pub(super) fn scale(a: &[Vec<f64>]) -> f64 {
    a.iter().flatten().fold(0.0_f64, |max, x| max.max(x.abs()))
}

/// Whether `left - right` vanishes relative to the size of its operands.
pub(super) fn cancels(left: f64, right: f64, tolerance: f64) -> bool {
    (left - right).abs() <= tolerance * left.abs().max(right.abs())
}

/// Explains a reduced equation `0 * var = left - right`.
pub(super) fn dependent_or_inconsistent(left: f64, right: f64, options: &SolverOptions) -> String {
    if cancels(left, right, options.pivot_tolerance) {
        "the equations are dependent (infinitely many solutions)".to_string()
    } else {
        "the equations are inconsistent (no solution)".to_string()
    }
}

/// Re-evaluates every original equation at `values`. Informational only.
pub(super) fn verification(
    system: &LinearSystem,
    values: &[f64],
    options: &SolverOptions,
) -> StepDraft {
    let p = options.precision;
    let lhs = system.lhs_values(values);
    let operations: Vec<String> = system
        .coefficient_matrix()
        .iter()
        .zip(system.constants())
        .zip(lhs)
        .enumerate()
        .map(|(idx, ((row, constant), total))| {
            let terms: Vec<String> = row
                .iter()
                .zip(values)
                .map(|(coeff, value)| format!("{} × {}", compact(*coeff), fixed(*value, p)))
                .collect();
            let verdict = if (total - constant).abs() <= options.verify_tolerance {
                "satisfied"
            } else {
                "NOT satisfied"
            };
            format!(
                "Equation {}: {} = {} (expected {}): {verdict}",
                idx + 1,
                terms.join(" + "),
                fixed(total, p),
                compact(constant)
            )
        })
        .collect();

    let assignment: Vec<String> = system
        .variables()
        .iter()
        .zip(values)
        .map(|(name, value)| format!("{name} = {}", fixed(*value, p)))
        .collect();

    StepDraft::new(
        StepKind::Verification,
        "Verify the solution",
        format!(
            "Substitute {} into the original equations:",
            assignment.join(", ")
        ),
    )
    .details("Each left-hand side should reproduce its constant.")
    .operations(operations)
}
