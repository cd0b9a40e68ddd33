//! Parsed linear equations and the square systems built from them.

use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;

use serde::Serialize;

use crate::error::{ParseError, Result, SolveError};
use crate::parser::{parse_equation, parse_equation_with, ParseOptions};

/// One equation `sum(coefficient * variable) = constant`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedEquation {
    source: String,
    coefficients: BTreeMap<String, f64>,
    constant: f64,
    variables: BTreeSet<String>,
}

impl ParsedEquation {
    pub fn new(
        source: impl Into<String>,
        coefficients: BTreeMap<String, f64>,
        constant: f64,
    ) -> Self {
        let variables = coefficients.keys().cloned().collect();
        Self {
            source: source.into(),
            coefficients,
            constant,
            variables,
        }
    }

    /// The trimmed text this equation was parsed from.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn coefficients(&self) -> &BTreeMap<String, f64> {
        &self.coefficients
    }

    /// Coefficient of `variable`, 0 when the equation does not mention it.
    pub fn coefficient(&self, variable: &str) -> f64 {
        self.coefficients.get(variable).copied().unwrap_or(0.0)
    }

    pub fn constant(&self) -> f64 {
        self.constant
    }

    pub fn variables(&self) -> &BTreeSet<String> {
        &self.variables
    }
}

impl FromStr for ParsedEquation {
    type Err = ParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        parse_equation(s)
    }
}

/// An ordered list of equations plus the global, deduplicated variable order.
///
/// Variables are ordered by first appearance while walking the equations in
/// order; within one equation they are visited alphabetically.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinearSystem {
    equations: Vec<ParsedEquation>,
    variables: Vec<String>,
}

impl LinearSystem {
    pub fn new(equations: Vec<ParsedEquation>) -> Self {
        let mut variables: Vec<String> = Vec::new();
        for equation in &equations {
            for name in equation.variables() {
                if !variables.contains(name) {
                    variables.push(name.clone());
                }
            }
        }
        log::debug!(
            "assembled system of {} equations over [{}]",
            equations.len(),
            variables.join(", ")
        );
        Self {
            equations,
            variables,
        }
    }

    /// Parses every equation, reporting the index of the first one that fails.
    pub fn parse<S: AsRef<str>>(equations: &[S], options: &ParseOptions) -> Result<Self> {
        let parsed = equations
            .iter()
            .enumerate()
            .map(|(index, raw)| {
                parse_equation_with(raw.as_ref(), options)
                    .map_err(|source| SolveError::Parse { index, source })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(parsed))
    }

    pub fn equations(&self) -> &[ParsedEquation] {
        &self.equations
    }

    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    pub fn len(&self) -> usize {
        self.equations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.equations.is_empty()
    }

    pub fn is_square(&self) -> bool {
        self.variables.len() == self.equations.len()
    }

    /// Rows follow the equations, columns follow [`LinearSystem::variables`].
    pub fn coefficient_matrix(&self) -> Vec<Vec<f64>> {
        self.equations
            .iter()
            .map(|equation| {
                self.variables
                    .iter()
                    .map(|name| equation.coefficient(name))
                    .collect()
            })
            .collect()
    }

    pub fn constants(&self) -> Vec<f64> {
        self.equations.iter().map(ParsedEquation::constant).collect()
    }

    /// Left-hand side of every equation evaluated at `values` (aligned with the variables).
    pub fn lhs_values(&self, values: &[f64]) -> Vec<f64> {
        self.coefficient_matrix()
            .iter()
            .map(|row| row.iter().zip(values).map(|(a, x)| a * x).sum::<f64>())
            .collect()
    }

    /// `lhs - constant` for every equation.
    pub fn residuals(&self, values: &[f64]) -> Vec<f64> {
        self.lhs_values(values)
            .into_iter()
            .zip(self.constants())
            .map(|(lhs, constant)| lhs - constant)
            .collect()
    }
}
