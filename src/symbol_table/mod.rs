//! Symbol table construction for the TINY front end.
//!
//! This module builds the name -> memory slot table from a completed
//! syntax tree. It handles:
//!
//! - One full preorder traversal over the tree
//! - Sequential memory slot allocation in first-seen order
//! - Per-variable occurrence line lists, in order of appearance
//! - Hash-bucketed storage with per-bucket chaining

pub mod symbol_table;

#[cfg(test)]
mod tests;
