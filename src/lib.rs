//! Parsing and step-by-step solving of small square linear systems such as
//! `["2x + 3y = 7", "x - y = 1"]`.

pub mod equation;
pub mod error;
pub mod format;
pub mod parser;
pub mod prelude;
pub mod solver;
pub mod steps;
pub mod ui;

pub use equation::{LinearSystem, ParsedEquation};
pub use error::{ParseError, ParseErrorKind, Result, SolveError};
pub use parser::{parse_equation, parse_equation_with, ParseOptions, TermPolicy};
pub use solver::{
    solve_linear_system, solve_linear_system_with, solve_system, Method, Solution, SolverOptions,
};
pub use steps::{SolutionStep, StepKind};
