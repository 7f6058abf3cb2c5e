//! Lexical analysis module for the TINY front end.
//!
//! This module contains the scanner that converts TINY source text
//! into a pull-based stream of tokens for parsing. It handles:
//!
//! - Reserved words, identifiers, numbers and symbolic tokens
//! - Brace comments and whitespace, with line counting
//! - Maximal-munch tokenization with one character of lookahead
//! - Token line tracking for error reporting

pub mod scanner;
pub mod tokens;
