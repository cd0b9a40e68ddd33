//! String-based UI helpers for quick usage and rendering.

mod solve;

use crate::error::Result;
use crate::solver::{solve_linear_system_with, Method, Solution, SolverOptions};

pub use solve::{solve_summary, steps_summary};

/// Solve with a method given by name (`"elimination"`, `"substitution"`, `"reduction"`).
pub fn solve_system(equations: &[&str], method: &str) -> Result<Solution> {
    solve_system_with(equations, method, &SolverOptions::default())
}

pub fn solve_system_with(
    equations: &[&str],
    method: &str,
    options: &SolverOptions,
) -> Result<Solution> {
    let method: Method = method.parse()?;
    solve_linear_system_with(equations, method, options)
}

pub fn solve(equations: &[&str], method: &str) -> Result<Vec<String>> {
    let options = SolverOptions::default().with_steps(false);
    let solution = solve_system_with(equations, method, &options)?;
    Ok(solve_summary(&solution, options.precision))
}

/// Summary followed by the full step trace.
pub fn solve_with_steps(equations: &[&str], method: &str) -> Result<Vec<String>> {
    let options = SolverOptions::default();
    let solution = solve_system_with(equations, method, &options)?;
    let mut lines = solve_summary(&solution, options.precision);
    lines.push(String::new());
    lines.extend(steps_summary(solution.steps()));
    Ok(lines)
}
