//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the parsing entry points.
//! Every grammar routine follows the same cursor discipline: on entry the
//! current token is the first token of the construct (for expressions, the
//! token just before it), and on exit the current token is the construct's
//! last token.

use tracing::debug;

use crate::{
    ast::statements::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenBuffer, TokenKind, TokenSource},
    },
};

use super::{lookahead::Lookahead, stmt::parse_stmt};

/// How many grammar routines may be active at once before parsing gives up.
///
/// Right-recursive chains count one level per operator, so this also bounds
/// the length of an unparenthesized operator chain.
pub const MAX_NESTING_DEPTH: usize = 512;

/// The main parser structure that maintains parsing state.
///
/// The parser owns its token window exclusively for the duration of a parse.
pub struct Parser<S: TokenSource> {
    tokens: Lookahead<S>,
    depth: usize,
}

impl<S: TokenSource> Parser<S> {
    /// Creates a new Parser instance, filling the lookahead window.
    pub fn new(source: S) -> Self {
        Parser {
            tokens: Lookahead::new(source),
            depth: 0,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        self.tokens.current()
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.tokens.current().kind
    }

    /// Returns the kind of the lookahead token.
    pub fn next_token_kind(&self) -> TokenKind {
        self.tokens.peek().kind
    }

    /// Consumes the current token.
    pub fn advance(&mut self) {
        self.tokens.advance();
    }

    /// Builds a `MissingToken` error against the current token.
    pub fn missing(&self, expected: &str, context: impl Into<String>) -> Error {
        let token = self.current_token();
        Error::new(
            ErrorImpl::MissingToken {
                expected: expected.to_string(),
                context: context.into(),
                found: token.value.clone(),
            },
            token.line,
        )
    }

    /// Advances onto the next token and checks that it is of the expected kind.
    ///
    /// # Arguments
    ///
    /// * `expected_kind` - The TokenKind the grammar requires here
    /// * `expected` - How the expected token is named in the error message
    /// * `context` - Where in the construct the token was required
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) with the matched token, otherwise a `MissingToken` error.
    pub fn expect(
        &mut self,
        expected_kind: TokenKind,
        expected: &str,
        context: impl Into<String>,
    ) -> Result<Token, Error> {
        self.advance();

        if self.current_token_kind() != expected_kind {
            return Err(self.missing(expected, context));
        }

        Ok(self.current_token().clone())
    }

    /// Runs a recursive grammar routine one nesting level deeper.
    ///
    /// Fails with `NestingTooDeep` instead of recursing past
    /// `MAX_NESTING_DEPTH`.
    pub fn descend<T>(
        &mut self,
        routine: impl FnOnce(&mut Self) -> Result<T, Error>,
    ) -> Result<T, Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            let token = self.current_token();
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                token.line,
            ));
        }

        self.depth += 1;
        let result = routine(self);
        self.depth -= 1;

        result
    }

    /// Parses statements until the end of input.
    pub fn parse_program(&mut self) -> Result<Program, Error> {
        let mut statements = vec![];

        while self.current_token_kind() != TokenKind::EOF {
            statements.push(parse_stmt(self)?);
            self.advance();
        }

        debug!(statements = statements.len(), "parsed program");

        Ok(Program { statements })
    }
}

/// Parses an already tokenized program.
///
/// This is the main entry point for callers that bring their own tokens.
/// The caller receives either the complete tree or the first syntax error.
pub fn parse(tokens: Vec<Token>) -> Result<Program, Error> {
    Parser::new(TokenBuffer::new(tokens)).parse_program()
}

/// Lexes and parses source text, pulling tokens on demand.
pub fn parse_source(source: &str) -> Result<Program, Error> {
    Parser::new(Lexer::new(source)).parse_program()
}
