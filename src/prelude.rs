//! String-based convenience API for quick experimentation.

pub use crate::ui::{solve, solve_summary, solve_system, solve_with_steps, steps_summary};
pub use crate::Method;
