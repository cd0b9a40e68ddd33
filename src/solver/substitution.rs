use crate::equation::LinearSystem;
use crate::error::{Result, SolveError};
use crate::format::{compact, equation, fixed, signed_term, term_list};
use crate::steps::{StepDraft, StepKind, StepTrace};

use super::{common, SolverOptions};

/// Isolate the first variable in equation 1 and substitute it into equation 2.
pub(super) fn solve(
    system: &LinearSystem,
    options: &SolverOptions,
    trace: &mut StepTrace,
) -> Result<Vec<f64>> {
    let p = options.precision;
    let variables = system.variables();
    let (var1, var2) = (&variables[0], &variables[1]);
    let pair = [var1.clone(), var2.clone()];
    let eq1 = &system.equations()[0];
    let eq2 = &system.equations()[1];

    let (a1, b1, c1) = (eq1.coefficient(var1), eq1.coefficient(var2), eq1.constant());
    let (a2, b2, c2) = (eq2.coefficient(var1), eq2.coefficient(var2), eq2.constant());

    trace.record(|| {
        common::original_system(
            system,
            "Isolate one variable in one equation, then substitute it into the other.",
        )
    });

    if a1 == 0.0 {
        return Err(SolveError::UnsolvableBySubstitution {
            variable: var1.clone(),
            equation: 0,
        });
    }

    let first = equation(&[a1, b1], &pair, c1);
    let remainder = format!("{}{}", compact(c1), signed_term(-b1, var2));
    let isolated = format!("({remainder}) / {}", compact(a1));
    let (verb, moved) = if b1 < 0.0 {
        ("Add", term_list(&[-b1], &pair[1..]))
    } else {
        ("Subtract", term_list(&[b1], &pair[1..]))
    };

    trace.record(|| {
        StepDraft::new(
            StepKind::Isolate,
            format!("Isolate {var1} in equation 1"),
            format!("Move the {var2} term to the right, then divide by the coefficient of {var1}:"),
        )
        .equations(vec![first.clone()])
        .operations(vec![
            format!("Start from {first}"),
            format!(
                "{verb} {moved} on both sides: {} = {remainder}",
                term_list(&[a1], &pair[..1])
            ),
            format!("Divide both sides by {}: {var1} = {isolated}", compact(a1)),
        ])
    });

    let second = equation(&[a2, b2], &pair, c2);
    trace.record(|| {
        StepDraft::new(
            StepKind::Substitute,
            "Substitute into equation 2",
            format!("Replace {var1} in equation 2 with the expression from the previous step:"),
        )
        .equations(vec![second.clone()])
        .operations(vec![
            format!("Start from {second}"),
            format!(
                "{} × {isolated}{} = {}",
                compact(a2),
                signed_term(b2, var2),
                compact(c2)
            ),
        ])
        .details(format!("Only {var2} is left as an unknown."))
    });

    trace.record(|| {
        StepDraft::new(
            StepKind::ClearDenominator,
            "Clear the denominator",
            format!("Multiply both sides by {} to remove the fraction:", compact(a1)),
        )
        .operations(vec![
            format!(
                "{} × [{} × {isolated}{}] = {} × {}",
                compact(a1),
                compact(a2),
                signed_term(b2, var2),
                compact(a1),
                compact(c2)
            ),
            format!(
                "{} × ({remainder}){} = {}",
                compact(a2),
                signed_term(a1 * b2, var2),
                compact(a1 * c2)
            ),
        ])
    });

    let reduced_coeff = b2 * a1 - a2 * b1;
    let reduced_const = c2 * a1 - a2 * c1;

    trace.record(|| {
        StepDraft::new(
            StepKind::Simplify,
            format!("Collect the {var2} terms"),
            "Distribute and move the constant term to the right:",
        )
        .operations(vec![
            format!(
                "{}{}{} = {}",
                compact(a2 * c1),
                signed_term(-a2 * b1, var2),
                signed_term(a1 * b2, var2),
                compact(a1 * c2)
            ),
            format!(
                "({} - {}){var2} = {} - {}",
                compact(a1 * b2),
                compact(a2 * b1),
                compact(a1 * c2),
                compact(a2 * c1)
            ),
            format!(
                "{} = {}",
                term_list(&[reduced_coeff], &pair[1..]),
                compact(reduced_const)
            ),
        ])
    });

    if common::cancels(b2 * a1, a2 * b1, options.pivot_tolerance) {
        return Err(SolveError::SingularSystem {
            variable: var2.clone(),
            detail: common::dependent_or_inconsistent(c2 * a1, a2 * c1, options),
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

    let value1 = (c1 - b1 * value2) / a1;
    trace.record(|| {
        StepDraft::new(
            StepKind::BackSubstitution,
            format!("Solve for {var1}"),
            format!("Put {var2} = {} into {var1} = {isolated}:", fixed(value2, p)),
        )
        .operations(vec![
            format!(
                "{var1} = ({}{} × {}) / {}",
                compact(c1),
                signed_term(-b1, ""),
                fixed(value2, p),
                compact(a1)
            ),
            format!(
                "{var1} = {} / {}",
                fixed(c1 - b1 * value2, p),
                compact(a1)
            ),
            format!("{var1} = {}", fixed(value1, p)),
        ])
    });

    let solution = vec![value1, value2];
    trace.record(|| common::verification(system, &solution, options));
    Ok(solution)
}
