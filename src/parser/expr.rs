//! Expression parsing by precedence climbing.
//!
//! Each precedence level parses its tighter neighbour, then recurses on
//! itself when the lookahead shows one of its own operators. Chains at every
//! level therefore group to the right: `1 - 2 - 3` is `1 - (2 - 3)`.
//!
//! Every routine starts with `current` on the token before the expression
//! and finishes with `current` on the expression's last token.

use crate::{
    ast::expressions::{Expr, Literal},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{TokenKind, TokenSource},
};

use super::parser::Parser;

/// Relational level, the loosest binding.
pub fn parse_expr<S: TokenSource>(parser: &mut Parser<S>) -> Result<Expr, Error> {
    parser.descend(|parser| {
        let left = parse_simple_expr(parser)?;

        // `=` after a complete operand can only be the equality operator
        if matches!(
            parser.next_token_kind(),
            TokenKind::RelationalOp | TokenKind::Assignment
        ) {
            parser.advance();
            let operator = parser.current_token().value.clone();
            return Ok(Expr::binary(operator, left, parse_expr(parser)?));
        }

        Ok(left)
    })
}

/// Additive level.
pub fn parse_simple_expr<S: TokenSource>(parser: &mut Parser<S>) -> Result<Expr, Error> {
    parser.descend(|parser| {
        let left = parse_term(parser)?;

        if parser.next_token_kind() == TokenKind::AdditiveOp {
            parser.advance();
            let operator = parser.current_token().value.clone();
            return Ok(Expr::binary(operator, left, parse_simple_expr(parser)?));
        }

        Ok(left)
    })
}

/// Multiplicative level.
pub fn parse_term<S: TokenSource>(parser: &mut Parser<S>) -> Result<Expr, Error> {
    parser.descend(|parser| {
        let left = parse_factor(parser)?;

        if parser.next_token_kind() == TokenKind::MultiplicativeOp {
            parser.advance();
            let operator = parser.current_token().value.clone();
            return Ok(Expr::binary(operator, left, parse_term(parser)?));
        }

        Ok(left)
    })
}

/// Primary expressions and prefix operators.
pub fn parse_factor<S: TokenSource>(parser: &mut Parser<S>) -> Result<Expr, Error> {
    parser.advance();

    let token = parser.current_token();
    match token.kind {
        TokenKind::Int => token
            .value
            .parse::<i32>()
            .map(|value| Expr::Literal(Literal::Integer(value)))
            .map_err(|_| invalid_literal(&token.value, token.line)),
        // `f32` parsing saturates to infinity instead of failing
        TokenKind::Real => token
            .value
            .parse::<f32>()
            .ok()
            .filter(|value| value.is_finite())
            .map(|value| Expr::Literal(Literal::Real(value)))
            .ok_or_else(|| invalid_literal(&token.value, token.line)),
        TokenKind::Bool => Ok(Expr::Literal(Literal::Boolean(token.value == "true"))),
        TokenKind::String => Ok(Expr::Literal(Literal::String(unescape_string(&token.value)))),
        TokenKind::Identifier => {
            if parser.next_token_kind() == TokenKind::OpenParen {
                parse_call_expr(parser)
            } else {
                Ok(Expr::identifier(token.value.clone()))
            }
        }
        TokenKind::OpenParen => {
            let expr = parse_expr(parser)?;
            parser.expect(TokenKind::CloseParen, "')'", "after expression")?;
            Ok(expr)
        }
        TokenKind::AdditiveOp | TokenKind::Not if is_prefix_operator(&token.value) => {
            let operator = token.value.clone();
            Ok(Expr::unary(operator, parse_expr(parser)?))
        }
        _ => Err(Error::new(
            ErrorImpl::UnexpectedExpressionStart {
                token: token.value.clone(),
            },
            token.line,
        )),
    }
}

/// Parses `identifier ( [arguments] )` starting on the identifier.
pub fn parse_call_expr<S: TokenSource>(parser: &mut Parser<S>) -> Result<Expr, Error> {
    let name = parser.current_token().value.clone();
    let context = format!("after arguments to {}", name);

    parser.expect(TokenKind::OpenParen, "'('", format!("after {}", name))?;

    let mut arguments = Vec::new();

    if parser.next_token_kind() == TokenKind::CloseParen {
        parser.advance();
        return Ok(Expr::call(name, arguments));
    }

    arguments.push(parse_expr(parser)?);
    parser.advance();

    while parser.current_token_kind() == TokenKind::Comma {
        arguments.push(parse_expr(parser)?);
        parser.advance();
    }

    if parser.current_token_kind() != TokenKind::CloseParen {
        return Err(parser.missing("')'", context));
    }

    Ok(Expr::call(name, arguments))
}

/// Strips the enclosing quotes and turns every `\"` into `"`.
pub fn unescape_string(lexeme: &str) -> String {
    let inner = lexeme
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(lexeme);

    inner.replace("\\\"", "\"")
}

// The lexer only produces these, but a `TokenBuffer` can carry any lexeme
fn is_prefix_operator(operator: &str) -> bool {
    matches!(operator, "+" | "-" | "!" | "not")
}

fn invalid_literal(lexeme: &str, line: u32) -> Error {
    Error::new(
        ErrorImpl::InvalidLiteral {
            token: lexeme.to_string(),
        },
        line,
    )
}
