//! AST (Abstract Syntax Tree) module
//! Contains all definitions related to the AST structure
//!
//! Submodules:
//! - ast: The tree node type, node kinds, operators and the tree dump

pub mod ast;
