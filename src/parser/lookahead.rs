//! The two-token window the parser decides on.

use crate::lexer::tokens::{Token, TokenSource};

/// Holds the token being consumed and one token of lookahead.
///
/// `advance` shifts `next` into `current` and pulls exactly one new token
/// from the source, so no more than two tokens are ever live.
pub struct Lookahead<S: TokenSource> {
    source: S,
    current: Token,
    next: Token,
}

impl<S: TokenSource> Lookahead<S> {
    pub fn new(mut source: S) -> Self {
        let current = source.next_token();
        let next = source.next_token();

        Lookahead {
            source,
            current,
            next,
        }
    }

    pub fn current(&self) -> &Token {
        &self.current
    }

    pub fn peek(&self) -> &Token {
        &self.next
    }

    pub fn advance(&mut self) {
        let upcoming = self.source.next_token();
        self.current = std::mem::replace(&mut self.next, upcoming);
    }
}
