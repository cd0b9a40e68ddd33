use crate::equation::LinearSystem;
use crate::error::{Result, SolveError};
use crate::format::{compact, equation, fixed, matrix, term_list};
use crate::steps::{StepDraft, StepKind, StepTrace};

use super::{common, SolverOptions};

/// Gaussian elimination with partial pivoting, then back-substitution.
pub(super) fn solve(
    system: &LinearSystem,
    options: &SolverOptions,
    trace: &mut StepTrace,
) -> Result<Vec<f64>> {
    let variables = system.variables();
    let mut a = system.coefficient_matrix();
    let mut b = system.constants();
    let n = a.len();
    let p = options.precision;
    let zero = options.pivot_tolerance * common::scale(&a);

    trace.record(|| {
        common::original_system(system, "Write the system as the augmented matrix [A | b].")
    });

    for i in 0..n {
        let max_row = (i + 1..n).fold(i, |best, k| {
            if a[k][i].abs() > a[best][i].abs() {
                k
            } else {
                best
            }
        });

        if max_row != i {
            a.swap(i, max_row);
            b.swap(i, max_row);
            trace.record(|| {
                StepDraft::new(
                    StepKind::RowSwap,
                    "Row swap (partial pivoting)",
                    format!(
                        "Swap row {} with row {} to put the largest pivot on the diagonal",
                        i + 1,
                        max_row + 1
                    ),
                )
                .details(format!(
                    "|{}| > |{}| in column {}: pivot on the larger magnitude",
                    compact(a[i][i]),
                    compact(a[max_row][i]),
                    variables[i]
                ))
                .matrix(matrix(&a, &b))
            });
        }

        let pivot = a[i][i];
        if pivot.abs() <= zero {
            return Err(SolveError::SingularSystem {
                variable: variables[i].clone(),
                detail: format!("no non-zero pivot left in column {}", i + 1),
            });
        }

        for k in i + 1..n {
            let (upper, lower) = a.split_at_mut(k);
            let pivot_row = &upper[i];
            let target = &mut lower[0];

            let before = target.clone();
            let before_b = b[k];
            let factor = target[i] / pivot;

            target[i] = 0.0;
            for j in i + 1..n {
                target[j] -= factor * pivot_row[j];
            }
            b[k] -= factor * b[i];

            trace.record(|| {
                StepDraft::new(
                    StepKind::ForwardElimination,
                    "Forward elimination",
                    format!(
                        "Eliminate entry ({}, {}) using row {} as the pivot row",
                        k + 1,
                        i + 1,
                        i + 1
                    ),
                )
                .details(format!(
                    "Elimination factor: {} ÷ {} = {}",
                    compact(before[i]),
                    compact(pivot),
                    fixed(factor, p)
                ))
                .operations(vec![
                    format!("Row {} before: [{}] = {}", k + 1, cells(&before), compact(before_b)),
                    format!(
                        "Row {} = Row {} - {} × Row {}",
                        k + 1,
                        k + 1,
                        fixed(factor, p),
                        i + 1
                    ),
                    format!("Row {} after: [{}] = {}", k + 1, cells(&a[k]), compact(b[k])),
                ])
                .matrix(matrix(&a, &b))
            });
        }
    }

    trace.record(|| {
        StepDraft::new(
            StepKind::UpperTriangular,
            "Upper triangular matrix",
            "Every entry below the diagonal is now zero:",
        )
        .details("Solve from the last row upwards with back-substitution.")
        .matrix(matrix(&a, &b))
    });

    let mut solution = vec![0.0; n];
    for i in (0..n).rev() {
        let subtracted: f64 = (i + 1..n).map(|j| a[i][j] * solution[j]).sum();
        let rhs = b[i] - subtracted;
        solution[i] = rhs / a[i][i];

        trace.record(|| back_substitution_step(&a[i], b[i], &solution, variables, i, p));
    }

    trace.record(|| common::verification(system, &solution, options));

    Ok(solution)
}

fn back_substitution_step(
    row: &[f64],
    constant: f64,
    solution: &[f64],
    variables: &[String],
    i: usize,
    p: usize,
) -> StepDraft {
    let var = &variables[i];
    let pivot = compact(row[i]);
    let unknown = term_list(&row[i..=i], &variables[i..=i]);
    let terms: Vec<String> = (i + 1..row.len())
        .map(|j| {
            format!(
                "{} × {} = {}",
                compact(row[j]),
                fixed(solution[j], p),
                fixed(row[j] * solution[j], p)
            )
        })
        .collect();
    let rhs = solution[i] * row[i];

    let mut operations = Vec::with_capacity(4);
    if !terms.is_empty() {
        operations.push(format!(
            "{unknown} = {} - ({})",
            compact(constant),
            terms.join(" + ")
        ));
    }
    operations.push(format!("{unknown} = {}", fixed(rhs, p)));
    operations.push(format!("{var} = {} ÷ {pivot}", fixed(rhs, p)));
    operations.push(format!("{var} = {}", fixed(solution[i], p)));

    StepDraft::new(
        StepKind::BackSubstitution,
        format!("Back substitution: {var}"),
        format!("Solve row {} for {var}:", i + 1),
    )
    .details(equation(&row[i..], &variables[i..], constant))
    .operations(operations)
}

fn cells(row: &[f64]) -> String {
    row.iter()
        .copied()
        .map(compact)
        .collect::<Vec<_>>()
        .join(", ")
}
