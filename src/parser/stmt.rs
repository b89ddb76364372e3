use tracing::trace;

use crate::{
    ast::statements::{
        AssignmentStmt, BlockStmt, FnDeclStmt, IfStmt, PrintStmt, ReturnStmt, Stmt, VarDeclStmt,
        WhileStmt,
    },
    ast::types::Type,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{TokenKind, TokenSource},
};

use super::{expr::parse_expr, parser::Parser, types::parse_type};

pub fn parse_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Result<Stmt, Error> {
    trace!(
        token = %parser.current_token().value,
        line = parser.current_token().line,
        "parsing statement"
    );

    parser.descend(|parser| match parser.current_token_kind() {
        TokenKind::Var => parse_var_decl_stmt(parser).map(Stmt::VarDecl),
        TokenKind::Set => parse_assignment_stmt(parser).map(Stmt::Assignment),
        TokenKind::Print => parse_print_stmt(parser).map(Stmt::Print),
        TokenKind::If => parse_if_stmt(parser).map(Stmt::If),
        TokenKind::While => parse_while_stmt(parser).map(Stmt::While),
        TokenKind::Return => parse_return_stmt(parser).map(Stmt::Return),
        TokenKind::Def => parse_fn_decl_stmt(parser).map(Stmt::FnDecl),
        TokenKind::OpenCurly => parse_block_stmt(parser).map(Stmt::Block),
        _ => {
            let token = parser.current_token();
            Err(Error::new(
                ErrorImpl::UnexpectedStatementStart {
                    token: token.value.clone(),
                },
                token.line,
            ))
        }
    })
}

pub fn parse_var_decl_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Result<VarDeclStmt, Error> {
    let identifier = parser
        .expect(TokenKind::Identifier, "variable name", "after 'var'")?
        .value;

    parser.expect(TokenKind::Colon, "':'", format!("after {}", identifier))?;

    parser.advance();
    let explicit_type = parse_type(parser, &identifier)?;

    parser.expect(
        TokenKind::Assignment,
        "assignment operator '='",
        format!("for {}", identifier),
    )?;

    let assigned_value = parse_expr(parser)?;

    parser.expect(
        TokenKind::Semicolon,
        "';'",
        format!("after assignment of {}", identifier),
    )?;

    Ok(VarDeclStmt {
        explicit_type,
        identifier,
        assigned_value,
    })
}

pub fn parse_assignment_stmt<S: TokenSource>(
    parser: &mut Parser<S>,
) -> Result<AssignmentStmt, Error> {
    let identifier = parser
        .expect(TokenKind::Identifier, "variable name", "after 'set'")?
        .value;

    parser.expect(
        TokenKind::Assignment,
        "assignment operator '='",
        format!("after {}", identifier),
    )?;

    let value = parse_expr(parser)?;

    parser.expect(
        TokenKind::Semicolon,
        "';'",
        format!("after assignment of {}", identifier),
    )?;

    Ok(AssignmentStmt { identifier, value })
}

pub fn parse_print_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Result<PrintStmt, Error> {
    let value = parse_expr(parser)?;

    parser.expect(TokenKind::Semicolon, "';'", "after print statement")?;

    Ok(PrintStmt { value })
}

pub fn parse_return_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Result<ReturnStmt, Error> {
    let value = parse_expr(parser)?;

    parser.expect(TokenKind::Semicolon, "';'", "after return statement")?;

    Ok(ReturnStmt { value })
}

/// Parses `{ statement* }` starting on the opening brace.
///
/// Ends on the closing brace. Running into the end of input or a lexer error
/// token first is an `UnterminatedBlock` error.
pub fn parse_block_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Result<BlockStmt, Error> {
    let mut body = Vec::new();

    parser.advance();
    while parser.current_token_kind() != TokenKind::CloseCurly
        && !parser.current_token().is_terminal()
    {
        body.push(parse_stmt(parser)?);
        parser.advance();
    }

    if parser.current_token_kind() != TokenKind::CloseCurly {
        let token = parser.current_token();
        return Err(Error::new(
            ErrorImpl::UnterminatedBlock {
                token: token.value.clone(),
            },
            token.line,
        ));
    }

    Ok(BlockStmt { body })
}

pub fn parse_if_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Result<IfStmt, Error> {
    parser.expect(TokenKind::OpenParen, "'('", "after 'if'")?;

    let condition = parse_expr(parser)?;

    parser.expect(TokenKind::CloseParen, "')'", "after if-condition")?;
    parser.expect(TokenKind::OpenCurly, "'{'", "after if-condition")?;

    let then_body = parse_block_stmt(parser)?;

    // Only commit to an else branch when the lookahead shows one
    if parser.next_token_kind() != TokenKind::Else {
        return Ok(IfStmt {
            condition,
            then_body,
            else_body: None,
        });
    }

    parser.advance();
    parser.expect(TokenKind::OpenCurly, "'{'", "after 'else'")?;

    let else_body = parse_block_stmt(parser)?;

    Ok(IfStmt {
        condition,
        then_body,
        else_body: Some(else_body),
    })
}

pub fn parse_while_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Result<WhileStmt, Error> {
    parser.expect(TokenKind::OpenParen, "'('", "after 'while'")?;

    let condition = parse_expr(parser)?;

    parser.expect(TokenKind::CloseParen, "')'", "after while-condition")?;
    parser.expect(TokenKind::OpenCurly, "'{'", "after while-condition")?;

    let body = parse_block_stmt(parser)?;

    Ok(WhileStmt { condition, body })
}

pub fn parse_fn_decl_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Result<FnDeclStmt, Error> {
    let identifier = parser
        .expect(TokenKind::Identifier, "function name", "after 'def'")?
        .value;

    parser.expect(TokenKind::OpenParen, "'('", format!("after {}", identifier))?;

    let mut parameters = Vec::new();

    // Onto ')' or the first parameter
    parser.advance();
    if parser.current_token_kind() != TokenKind::CloseParen {
        parameters.push(parse_parameter(parser)?);
        parser.advance();

        while parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
            parameters.push(parse_parameter(parser)?);
            parser.advance();
        }

        if parser.current_token_kind() != TokenKind::CloseParen {
            return Err(parser.missing(
                "')' or more parameters",
                format!("in definition of {}", identifier),
            ));
        }
    }

    parser.expect(TokenKind::Colon, "':'", "after ')'")?;

    parser.advance();
    let return_type = parse_type(parser, &identifier)?;

    parser.expect(
        TokenKind::OpenCurly,
        "'{'",
        format!("after definition of function {}", identifier),
    )?;

    let body = parse_block_stmt(parser)?;

    Ok(FnDeclStmt {
        identifier,
        parameters,
        return_type,
        body,
    })
}

/// Parses `identifier : type` starting on the identifier.
fn parse_parameter<S: TokenSource>(parser: &mut Parser<S>) -> Result<(String, Type), Error> {
    if parser.current_token_kind() != TokenKind::Identifier {
        return Err(parser.missing("parameter name", "in function definition"));
    }
    let name = parser.current_token().value.clone();

    parser.expect(TokenKind::Colon, "':'", format!("after {}", name))?;

    parser.advance();
    let ty = parse_type(parser, &name)?;

    Ok((name, ty))
}
