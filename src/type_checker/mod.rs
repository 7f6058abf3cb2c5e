//! Type checking module for the TINY front end.
//!
//! This module validates the two-type system (Integer, Boolean) over a
//! completed syntax tree:
//!
//! - Conditions of `if` and `repeat` must be Boolean
//! - Assignments, `read` targets and `write` operands must be Integer
//! - Binary operators take Integer operands on both sides
//! - Leaves must self-report Integer
//!
//! The traversal is postorder and never aborts: every violation in a
//! program is collected and reported together.

pub mod type_checker;

#[cfg(test)]
mod tests;
