//! Error types and error handling for the front end.
//!
//! This module defines the error types used throughout the pipeline.
//! It includes:
//!
//! - Error structures with source line information
//! - Specific error variants for the scan, parse and type-check phases
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;
