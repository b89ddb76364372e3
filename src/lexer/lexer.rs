use lazy_static::lazy_static;
use regex::Regex;

use crate::{MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, TokenSource, RESERVED_LOOKUP};

/// Turns a matched lexeme and its starting line into a token, or `None` to skip it.
pub type RegexHandler = fn(&str, u32) -> Option<Token>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

impl RegexPattern {
    fn new(pattern: &str, handler: RegexHandler) -> Self {
        RegexPattern {
            regex: Regex::new(pattern).expect("token patterns are valid regular expressions"),
            handler,
        }
    }
}

lazy_static! {
    // Every pattern is anchored, first match in table order wins.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern::new(r"^\s+", skip_handler),
        RegexPattern::new(r"^//[^\n]*", skip_handler),
        RegexPattern::new(r"^/\*(?s:.*?)\*/", skip_handler),
        RegexPattern::new(r"^[0-9]+\.[0-9]+", MK_DEFAULT_HANDLER!(TokenKind::Real)),
        RegexPattern::new(r"^[0-9]+", MK_DEFAULT_HANDLER!(TokenKind::Int)),
        RegexPattern::new(r#"^"(?:[^"\\\n]|\\.)*""#, MK_DEFAULT_HANDLER!(TokenKind::String)),
        RegexPattern::new(r"^[a-zA-Z_][a-zA-Z0-9_]*", symbol_handler),
        RegexPattern::new(r"^(?:<>|<=|>=|==|!=|<|>)", MK_DEFAULT_HANDLER!(TokenKind::RelationalOp)),
        RegexPattern::new(r"^=", MK_DEFAULT_HANDLER!(TokenKind::Assignment)),
        RegexPattern::new(r"^!", MK_DEFAULT_HANDLER!(TokenKind::Not)),
        RegexPattern::new(r"^[+-]", MK_DEFAULT_HANDLER!(TokenKind::AdditiveOp)),
        RegexPattern::new(r"^[*/]", MK_DEFAULT_HANDLER!(TokenKind::MultiplicativeOp)),
        RegexPattern::new(r"^\{", MK_DEFAULT_HANDLER!(TokenKind::OpenCurly)),
        RegexPattern::new(r"^\}", MK_DEFAULT_HANDLER!(TokenKind::CloseCurly)),
        RegexPattern::new(r"^\(", MK_DEFAULT_HANDLER!(TokenKind::OpenParen)),
        RegexPattern::new(r"^\)", MK_DEFAULT_HANDLER!(TokenKind::CloseParen)),
        RegexPattern::new(r"^;", MK_DEFAULT_HANDLER!(TokenKind::Semicolon)),
        RegexPattern::new(r"^:", MK_DEFAULT_HANDLER!(TokenKind::Colon)),
        RegexPattern::new(r"^,", MK_DEFAULT_HANDLER!(TokenKind::Comma)),
    ];
}

/// On-demand tokenizer over an owned source string.
///
/// Tokens are scanned one at a time as the parser asks for them. Characters
/// no pattern accepts come back as single `Error` tokens.
#[derive(Clone, Debug)]
pub struct Lexer {
    source: String,
    pos: usize,
    line: u32,
}

impl Lexer {
    pub fn new(source: impl Into<String>) -> Lexer {
        Lexer {
            source: source.into(),
            pos: 0,
            line: 1,
        }
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn advance_over(&mut self, lexeme: &str) {
        self.pos += lexeme.len();
        self.line += lexeme.matches('\n').count() as u32;
    }
}

impl TokenSource for Lexer {
    fn next_token(&mut self) -> Token {
        loop {
            if self.at_eof() {
                return MK_TOKEN!(TokenKind::EOF, String::from("EOF"), self.line);
            }

            let matched = PATTERNS.iter().find_map(|pattern| {
                pattern
                    .regex
                    .find(self.remainder())
                    .map(|found| (pattern.handler, found.as_str().to_string()))
            });

            let start_line = self.line;
            match matched {
                Some((handler, lexeme)) => {
                    self.advance_over(&lexeme);
                    if let Some(token) = handler(&lexeme, start_line) {
                        return token;
                    }
                }
                None => {
                    let unrecognised: String = self.remainder().chars().take(1).collect();
                    self.advance_over(&unrecognised);
                    return MK_TOKEN!(TokenKind::Error, unrecognised, start_line);
                }
            }
        }
    }
}

fn skip_handler(_value: &str, _line: u32) -> Option<Token> {
    None
}

fn symbol_handler(value: &str, line: u32) -> Option<Token> {
    let kind = RESERVED_LOOKUP
        .get(value)
        .copied()
        .unwrap_or(TokenKind::Identifier);

    Some(MK_TOKEN!(kind, String::from(value), line))
}

/// Scans the whole source, including the trailing `EOF` token.
pub fn tokenize(source: impl Into<String>) -> Vec<Token> {
    let mut lex = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);

        if done {
            return tokens;
        }
    }
}
