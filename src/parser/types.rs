//! Type parsing implementation.
//!
//! A type position holds exactly one of the type keywords `int`, `real`,
//! `bool` or `string`.

use crate::{
    ast::types::Type,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenSource,
};

use super::parser::Parser;

/// Resolves the current token as a type annotation for `identifier`.
pub fn parse_type<S: TokenSource>(parser: &Parser<S>, identifier: &str) -> Result<Type, Error> {
    let token = parser.current_token();

    Type::from_token_kind(token.kind).ok_or_else(|| {
        Error::new(
            ErrorImpl::InvalidType {
                identifier: identifier.to_string(),
                found: token.value.clone(),
            },
            token.line,
        )
    })
}
