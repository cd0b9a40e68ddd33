//! Solving square linear systems with a step-by-step trace.
//!
//! Three strategies are available through [`Method`]:
//! - **Elimination**: Gaussian elimination with partial pivoting followed by
//!   back-substitution. Works for any `n x n` system.
//! - **Substitution**: isolates the first variable of the first equation and
//!   substitutes it into the second. Two equations only.
//! - **Reduction**: scales both equations to a common multiple of the first
//!   variable's coefficients and subtracts them. Two equations only.
//!
//! Every strategy records a [`SolutionStep`] per algebraic transformation and
//! finishes with a verification step against the original equations.

mod common;
mod elimination;
mod reduction;
mod substitution;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::equation::LinearSystem;
use crate::error::{Result, SolveError};
use crate::parser::ParseOptions;
use crate::steps::{SolutionStep, StepTrace};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    Elimination,
    Substitution,
    Reduction,
}

impl Method {
    pub const ALL: [Method; 3] = [Method::Elimination, Method::Substitution, Method::Reduction];

    pub fn as_str(self) -> &'static str {
        match self {
            Method::Elimination => "elimination",
            Method::Substitution => "substitution",
            Method::Reduction => "reduction",
        }
    }

    /// Largest system the method handles, `None` when unbounded.
    pub fn max_equations(self) -> Option<usize> {
        match self {
            Method::Elimination => None,
            Method::Substitution | Method::Reduction => Some(2),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = SolveError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Method::ALL
            .into_iter()
            .find(|method| method.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SolveError::UnknownMethod(wanted.to_string()))
    }
}

/// Settings shared by every strategy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverOptions {
    pub parse: ParseOptions,
    /// Relative zero threshold. A pivot counts as zero at or below this times
    /// the largest coefficient; a reduced coefficient when it cancels to this
    /// fraction of the products it was computed from.
    pub pivot_tolerance: f64,
    /// Residual allowed when the verification step marks an equation as satisfied.
    pub verify_tolerance: f64,
    /// Decimals used for computed values in step text.
    pub precision: usize,
    pub record_steps: bool,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            parse: ParseOptions::default(),
            pivot_tolerance: 1e-12,
            verify_tolerance: 1e-6,
            precision: 3,
            record_steps: true,
        }
    }
}

impl SolverOptions {
    pub fn with_parse(mut self, parse: ParseOptions) -> Self {
        self.parse = parse;
        self
    }

    pub fn with_pivot_tolerance(mut self, tolerance: f64) -> Self {
        self.pivot_tolerance = tolerance;
        self
    }

    pub fn with_verify_tolerance(mut self, tolerance: f64) -> Self {
        self.verify_tolerance = tolerance;
        self
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_steps(mut self, record_steps: bool) -> Self {
        self.record_steps = record_steps;
        self
    }
}

/// Solved values aligned with the system's variable order, plus the trace
/// that produced them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solution {
    method: Method,
    variables: Vec<String>,
    values: Vec<f64>,
    steps: Vec<SolutionStep>,
}

impl Solution {
    pub fn method(&self) -> Method {
        self.method
    }

    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn steps(&self) -> &[SolutionStep] {
        &self.steps
    }

    pub fn get(&self, variable: &str) -> Option<f64> {
        self.variables
            .iter()
            .position(|name| name == variable)
            .map(|idx| self.values[idx])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.variables
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    pub fn to_map(&self) -> BTreeMap<String, f64> {
        self.iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect()
    }
}

/// Parse `equations` and solve them with `method` using default options.
pub fn solve_linear_system<S: AsRef<str>>(equations: &[S], method: Method) -> Result<Solution> {
    solve_linear_system_with(equations, method, &SolverOptions::default())
}

pub fn solve_linear_system_with<S: AsRef<str>>(
    equations: &[S],
    method: Method,
    options: &SolverOptions,
) -> Result<Solution> {
    let system = LinearSystem::parse(equations, &options.parse)?;
    solve_system(&system, method, options)
}

/// Validate an already parsed system and dispatch it to `method`.
///
/// The variable/equation parity check runs first, so a lone `x + y = 7`
/// reports [`SolveError::VariableCountMismatch`]; a square system with fewer
/// than two equations reports [`SolveError::InsufficientEquations`].
pub fn solve_system(
    system: &LinearSystem,
    method: Method,
    options: &SolverOptions,
) -> Result<Solution> {
    if !system.is_square() {
        return Err(SolveError::VariableCountMismatch {
            variables: system.variables().len(),
            equations: system.len(),
        });
    }
    if system.len() < 2 {
        return Err(SolveError::InsufficientEquations {
            found: system.len(),
        });
    }
    if let Some(max) = method.max_equations() {
        if system.len() > max {
            return Err(SolveError::UnsupportedSize {
                method,
                size: system.len(),
            });
        }
    }

    log::debug!("solving {n}x{n} system by {method}", n = system.len());

    let mut trace = StepTrace::new(options.record_steps);
    let values = match method {
        Method::Elimination => elimination::solve(system, options, &mut trace),
        Method::Substitution => substitution::solve(system, options, &mut trace),
        Method::Reduction => reduction::solve(system, options, &mut trace),
    }
    .map_err(|err| {
        log::debug!("{method} failed: {err}");
        err
    })?;

    if let Some(idx) = values.iter().position(|value| !value.is_finite()) {
        return Err(SolveError::SingularSystem {
            variable: system.variables()[idx].clone(),
            detail: format!("computed value {} is not finite", values[idx]),
        });
    }

    Ok(Solution {
        method,
        variables: system.variables().to_vec(),
        values,
        steps: trace.into_steps(),
    })
}
