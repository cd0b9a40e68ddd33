use crate::format::fixed;
use crate::solver::Solution;
use crate::steps::SolutionStep;

/// Render a [`Solution`] as `x = 2.000` lines under a method header.
pub fn solve_summary(solution: &Solution, precision: usize) -> Vec<String> {
    let mut lines = vec![format!("Solution ({}):", solution.method())];
    for (name, value) in solution.iter() {
        lines.push(format!("{name} = {}", fixed(value, precision)));
    }
    lines
}

/// Flatten a step trace into display lines.
pub fn steps_summary(steps: &[SolutionStep]) -> Vec<String> {
    let mut lines = Vec::new();
    for step in steps {
        lines.push(format!("Step {}: {}", step.step(), step.title()));
        lines.push(format!("  {}", step.description()));
        if let Some(details) = step.details() {
            lines.push(format!("  {details}"));
        }
        for eq in step.equations() {
            lines.push(format!("    {eq}"));
        }
        for op in step.operations() {
            lines.push(format!("    {op}"));
        }
        for row in step.matrix() {
            lines.push(format!("    {row}"));
        }
    }
    lines
}
