//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive descent parser that transforms a
//! stream of tokens into an Abstract Syntax Tree. It handles:
//!
//! - Statement parsing (declarations, assignments, functions, control flow)
//! - Expression parsing (precedence climbing over relational, additive and
//!   multiplicative levels, function calls, literals)
//! - Type parsing for type annotations
//!
//! Decisions are made on the current token plus one token of lookahead.
//! The first grammar violation aborts the parse.

pub mod expr;
pub mod lookahead;
pub mod parser;
pub mod stmt;
pub mod types;
