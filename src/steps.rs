//! Explanatory trace of a solve. Steps are plain data: they never influence
//! the computation and carry no rendering concerns.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    OriginalSystem,
    RowSwap,
    ForwardElimination,
    UpperTriangular,
    BackSubstitution,
    Isolate,
    Substitute,
    ClearDenominator,
    Simplify,
    SolveVariable,
    FindMultiple,
    Multiply,
    Subtract,
    Verification,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolutionStep {
    step: usize,
    kind: StepKind,
    title: String,
    description: String,
    details: Option<String>,
    operations: Vec<String>,
    equations: Vec<String>,
    matrix: Vec<String>,
}

impl SolutionStep {
    /// 1-based position in the trace.
    pub fn step(&self) -> usize {
        self.step
    }

    pub fn kind(&self) -> StepKind {
        self.kind
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    /// The literal algebraic manipulations, in order.
    pub fn operations(&self) -> &[String] {
        &self.operations
    }

    pub fn equations(&self) -> &[String] {
        &self.equations
    }

    /// One rendering per augmented-matrix row.
    pub fn matrix(&self) -> &[String] {
        &self.matrix
    }
}

/// A step before it has been given its index.
#[derive(Debug, Clone)]
pub(crate) struct StepDraft {
    kind: StepKind,
    title: String,
    description: String,
    details: Option<String>,
    operations: Vec<String>,
    equations: Vec<String>,
    matrix: Vec<String>,
}

impl StepDraft {
    pub(crate) fn new(
        kind: StepKind,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            description: description.into(),
            details: None,
            operations: Vec::new(),
            equations: Vec::new(),
            matrix: Vec::new(),
        }
    }

    pub(crate) fn details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub(crate) fn operations(mut self, operations: Vec<String>) -> Self {
        self.operations = operations;
        self
    }

    pub(crate) fn equations(mut self, equations: Vec<String>) -> Self {
        self.equations = equations;
        self
    }

    pub(crate) fn matrix(mut self, matrix: Vec<String>) -> Self {
        self.matrix = matrix;
        self
    }
}

/// Append-only list of steps, numbered from 1 in recording order.
#[derive(Debug)]
pub(crate) struct StepTrace {
    steps: Vec<SolutionStep>,
    enabled: bool,
}

impl StepTrace {
    pub(crate) fn new(enabled: bool) -> Self {
        Self {
            steps: Vec::new(),
            enabled,
        }
    }

    /// Builds and appends a step. `build` is not called when recording is off.
    pub(crate) fn record(&mut self, build: impl FnOnce() -> StepDraft) {
        if !self.enabled {
            return;
        }
        let draft = build();
        let step = self.steps.len() + 1;
        log::trace!("step {step}: {}", draft.title);
        self.steps.push(SolutionStep {
            step,
            kind: draft.kind,
            title: draft.title,
            description: draft.description,
            details: draft.details,
            operations: draft.operations,
            equations: draft.equations,
            matrix: draft.matrix,
        });
    }

    pub(crate) fn into_steps(self) -> Vec<SolutionStep> {
        self.steps
    }
}
