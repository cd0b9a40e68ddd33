use std::fmt;

use thiserror::Error;

use crate::solver::Method;

pub type Result<T> = std::result::Result<T, SolveError>;

/// Why an equation string could not be turned into a [`ParsedEquation`](crate::ParsedEquation).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    MissingEquals,
    MultipleEquals(usize),
    EmptyLeftSide,
    MalformedTerm { term: String },
    InvalidConstant { text: String },
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::MissingEquals => write!(f, "equation must contain '='"),
            ParseErrorKind::MultipleEquals(count) => {
                write!(f, "equation must contain exactly one '=', found {count}")
            }
            ParseErrorKind::EmptyLeftSide => write!(f, "left-hand side has no terms"),
            ParseErrorKind::MalformedTerm { term } => {
                write!(f, "term `{term}` is not a coefficient followed by a variable")
            }
            ParseErrorKind::InvalidConstant { text } => {
                write!(f, "right-hand side `{text}` is not a finite number")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("parse error in `{input}`: {kind}")]
pub struct ParseError {
    pub input: String,
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub(crate) fn new(input: &str, kind: ParseErrorKind) -> Self {
        Self {
            input: input.trim().to_string(),
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    #[error("equation {}: {source}", .index + 1)]
    Parse {
        index: usize,
        #[source]
        source: ParseError,
    },
    #[error("at least 2 equations are required, got {found}")]
    InsufficientEquations { found: usize },
    #[error(
        "number of variables must equal number of equations ({variables} variables, {equations} equations)"
    )]
    VariableCountMismatch { variables: usize, equations: usize },
    #[error(
        "cannot solve by substitution: coefficient of `{variable}` in equation {} is 0",
        .equation + 1
    )]
    UnsolvableBySubstitution { variable: String, equation: usize },
    #[error(
        "cannot solve by reduction: coefficient of `{variable}` in equation {} is 0",
        .equation + 1
    )]
    UnsolvableByReduction { variable: String, equation: usize },
    #[error("system has no unique solution (while solving for `{variable}`): {detail}")]
    SingularSystem { variable: String, detail: String },
    #[error("{method} only supports 2 equations, got {size}")]
    UnsupportedSize { method: Method, size: usize },
    #[error("unknown solving method `{0}`")]
    UnknownMethod(String),
}
