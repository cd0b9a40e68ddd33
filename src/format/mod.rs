//! Formatting helpers for rendering numbers, equations and augmented rows in step text.

mod number;
mod system;

pub use number::{compact, fixed};
pub use system::{equation, matrix, row, signed_term, term_list};
