use num_integer::Integer;
use num_traits::ToPrimitive;

use crate::equation::LinearSystem;
use crate::error::{Result, SolveError};
use crate::format::{compact, equation, fixed, signed_term, term_list};
use crate::steps::{StepDraft, StepKind, StepTrace};

use super::{common, SolverOptions};

/// Largest magnitude for which the integer LCM path cannot overflow `i64`.
const INTEGER_LCM_LIMIT: f64 = 1e9;

/// Scale both equations so the first variable's coefficients match, then subtract.
pub(super) fn solve(
    system: &LinearSystem,
    options: &SolverOptions,
    trace: &mut StepTrace,
) -> Result<Vec<f64>> {
    let p = options.precision;
    let variables = system.variables();
    let (var1, var2) = (&variables[0], &variables[1]);
    let a = system.coefficient_matrix();
    let b = system.constants();

    trace.record(|| {
        common::original_system(
            system,
            format!("Make the coefficients of {var1} equal, then subtract the equations."),
        )
    });

    for (idx, row) in a.iter().enumerate() {
        if row[0] == 0.0 {
            return Err(SolveError::UnsolvableByReduction {
                variable: var1.clone(),
                equation: idx,
            });
        }
    }

    let lcm = common_multiple(a[0][0], a[1][0]);
    let mult1 = lcm / a[0][0];
    let mult2 = lcm / a[1][0];

    trace.record(|| {
        StepDraft::new(
            StepKind::FindMultiple,
            "Find a common multiple",
            format!("Make the coefficients of {var1} equal in both equations:"),
        )
        .details(format!(
            "The coefficients of {var1} are {} and {}.",
            compact(a[0][0]),
            compact(a[1][0])
        ))
        .operations(vec![
            format!(
                "LCM(|{}|, |{}|) = {}",
                compact(a[0][0]),
                compact(a[1][0]),
                compact(lcm)
            ),
            multiplier(1, lcm, a[0][0], mult1),
            multiplier(2, lcm, a[1][0], mult2),
        ])
    });

    let scaled1: Vec<f64> = a[0].iter().map(|x| x * mult1).collect();
    let scaled2: Vec<f64> = a[1].iter().map(|x| x * mult2).collect();
    let scaled_b1 = b[0] * mult1;
    let scaled_b2 = b[1] * mult2;

    trace.record(|| {
        StepDraft::new(
            StepKind::Multiply,
            "Multiply the equations",
            "Scale every term of each equation by its multiplier:",
        )
        .operations(vec![
            format!(
                "Equation 1 × {}: {} becomes {}",
                compact(mult1),
                equation(&a[0], variables, b[0]),
                equation(&scaled1, variables, scaled_b1)
            ),
            format!(
                "Equation 2 × {}: {} becomes {}",
                compact(mult2),
                equation(&a[1], variables, b[1]),
                equation(&scaled2, variables, scaled_b2)
            ),
        ])
        .equations(vec![
            equation(&scaled1, variables, scaled_b1),
            equation(&scaled2, variables, scaled_b2),
        ])
    });

    let reduced_coeff = scaled1[1] - scaled2[1];
    let reduced_const = scaled_b1 - scaled_b2;

    trace.record(|| {
        StepDraft::new(
            StepKind::Subtract,
            "Subtract the equations",
            format!("Subtract equation 2 from equation 1 so {var1} cancels:"),
        )
        .operations(vec![
            format!(
                "({} - {}){var1} + ({} - {}){var2} = {} - {}",
                compact(scaled1[0]),
                compact(scaled2[0]),
                compact(scaled1[1]),
                compact(scaled2[1]),
                compact(scaled_b1),
                compact(scaled_b2)
            ),
            format!(
                "{} = {}",
                term_list(&[reduced_coeff], &variables[1..2]),
                compact(reduced_const)
            ),
        ])
    });

    if common::cancels(scaled1[1], scaled2[1], options.pivot_tolerance) {
        return Err(SolveError::SingularSystem {
            variable: var2.clone(),
            detail: common::dependent_or_inconsistent(scaled_b1, scaled_b2, options),
        });
    }

    let value2 = reduced_const / reduced_coeff;
    trace.record(|| {
        StepDraft::new(
            StepKind::SolveVariable,
            format!("Solve for {var2}"),
            format!("Divide both sides by {}:", compact(reduced_coeff)),
        )
        .operations(vec![
            format!("{var2} = {} / {}", compact(reduced_const), compact(reduced_coeff)),
            format!("{var2} = {}", fixed(value2, p)),
        ])
    });

    let value1 = (b[0] - a[0][1] * value2) / a[0][0];
    trace.record(|| {
        StepDraft::new(
            StepKind::BackSubstitution,
            format!("Solve for {var1}"),
            format!("Put {var2} = {} into the original equation 1:", fixed(value2, p)),
        )
        .details(equation(&a[0], variables, b[0]))
        .operations(vec![
            format!(
                "{}{} × {} = {}",
                term_list(&a[0][..1], &variables[..1]),
                signed_term(a[0][1], ""),
                fixed(value2, p),
                compact(b[0])
            ),
            format!(
                "{} = {}",
                term_list(&a[0][..1], &variables[..1]),
                fixed(b[0] - a[0][1] * value2, p)
            ),
            format!("{var1} = {}", fixed(value1, p)),
        ])
    });

    let solution = vec![value1, value2];
    trace.record(|| common::verification(system, &solution, options));
    Ok(solution)
}

fn multiplier(index: usize, lcm: f64, coefficient: f64, factor: f64) -> String {
    format!(
        "Multiplier for equation {index}: {} ÷ {} = {}",
        compact(lcm),
        compact(coefficient),
        compact(factor)
    )
}

/// Least common multiple of `|a|` and `|b|`. Non-integral or very large
/// coefficients fall back to `|a * b|`, which is a common multiple but not the least.
fn common_multiple(a: f64, b: f64) -> f64 {
    match (as_small_integer(a), as_small_integer(b)) {
        (Some(x), Some(y)) => x.lcm(&y) as f64,
        _ => (a * b).abs(),
    }
}

fn as_small_integer(value: f64) -> Option<i64> {
    if value.fract() != 0.0 || value.abs() > INTEGER_LCM_LIMIT {
        return None;
    }
    value.to_i64()
}
