//! Error types and error handling for the front end.
//!
//! This module defines the syntax errors raised while parsing. It includes:
//!
//! - Error structures carrying the offending source line
//! - Specific error variants for each kind of grammar violation
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
