//! Type annotations for the AST.
//!
//! The language has a closed set of primitive types. They appear after the
//! `:` of a declaration, a function parameter, or a function's return.

use std::fmt::Display;

use crate::lexer::tokens::TokenKind;

/// The primitive types a declaration, parameter or function may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Integer,
    Real,
    Boolean,
    String,
}

impl Type {
    /// Maps a type keyword token to its type, or `None` for any other token.
    pub fn from_token_kind(kind: TokenKind) -> Option<Type> {
        match kind {
            TokenKind::IntType => Some(Type::Integer),
            TokenKind::RealType => Some(Type::Real),
            TokenKind::BoolType => Some(Type::Boolean),
            TokenKind::StringType => Some(Type::String),
            _ => None,
        }
    }

    /// The keyword used to write this type in source.
    pub fn keyword(&self) -> &'static str {
        match self {
            Type::Integer => "int",
            Type::Real => "real",
            Type::Boolean => "bool",
            Type::String => "string",
        }
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.keyword())
    }
}
