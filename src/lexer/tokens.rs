use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("var", TokenKind::Var);
        map.insert("set", TokenKind::Set);
        map.insert("print", TokenKind::Print);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("while", TokenKind::While);
        map.insert("return", TokenKind::Return);
        map.insert("def", TokenKind::Def);
        map.insert("int", TokenKind::IntType);
        map.insert("real", TokenKind::RealType);
        map.insert("bool", TokenKind::BoolType);
        map.insert("string", TokenKind::StringType);
        map.insert("true", TokenKind::Bool);
        map.insert("false", TokenKind::Bool);
        map.insert("not", TokenKind::Not);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Error,

    // Literals
    Int,
    Real,
    Bool,
    String,
    Identifier,

    // Operator classes, the lexeme carries the concrete operator
    RelationalOp,
    AdditiveOp,
    MultiplicativeOp,
    Not,

    Assignment, // =

    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Semicolon,
    Colon,
    Comma,

    // Reserved
    Var,
    Set,
    Print,
    If,
    Else,
    While,
    Return,
    Def,

    IntType,
    RealType,
    BoolType,
    StringType,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub line: u32,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}) on line {}", self.kind, self.value, self.line)
    }
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>, line: u32) -> Self {
        Token {
            kind,
            value: value.into(),
            line,
        }
    }

    /// True for the two kinds that end a token stream.
    pub fn is_terminal(&self) -> bool {
        matches!(self.kind, TokenKind::EOF | TokenKind::Error)
    }
}

/// A pull-based supplier of tokens.
///
/// Once the input is exhausted an implementation keeps returning `EOF`.
pub trait TokenSource {
    fn next_token(&mut self) -> Token;
}

/// Replays a token list that was produced ahead of time.
pub struct TokenBuffer {
    tokens: std::vec::IntoIter<Token>,
    last_line: u32,
}

impl TokenBuffer {
    pub fn new(tokens: Vec<Token>) -> Self {
        TokenBuffer {
            tokens: tokens.into_iter(),
            last_line: 1,
        }
    }
}

impl TokenSource for TokenBuffer {
    fn next_token(&mut self) -> Token {
        match self.tokens.next() {
            Some(token) => {
                self.last_line = token.line;
                token
            }
            None => Token::new(TokenKind::EOF, "EOF", self.last_line),
        }
    }
}
