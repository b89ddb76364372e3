//! Lexical analysis module for the front end.
//!
//! This module contains the token source the parser pulls from. It handles:
//!
//! - On-demand tokenization of source code using regex patterns
//! - Recognition of keywords, identifiers, literals, and operators
//! - Line tracking for error reporting
//! - Comments and whitespace handling

pub mod lexer;
pub mod tokens;
