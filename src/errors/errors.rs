use std::fmt::Display;

use thiserror::Error;

/// A fatal syntax error together with the line it was raised on.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    line: u32,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, line: u32) -> Self {
        Error {
            internal_error: error_impl,
            line,
        }
    }

    pub fn get_line(&self) -> u32 {
        self.line
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::MissingToken { .. } => "MissingToken",
            ErrorImpl::UnexpectedStatementStart { .. } => "UnexpectedStatementStart",
            ErrorImpl::UnexpectedExpressionStart { .. } => "UnexpectedExpressionStart",
            ErrorImpl::UnterminatedBlock { .. } => "UnterminatedBlock",
            ErrorImpl::InvalidType { .. } => "InvalidType",
            ErrorImpl::InvalidLiteral { .. } => "InvalidLiteral",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::MissingToken { expected, .. } if expected == "';'" => {
                ErrorTip::Suggestion(String::from("did you miss a semicolon?"))
            }
            ErrorImpl::MissingToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedStatementStart { .. } => ErrorTip::Suggestion(String::from(
                "statements start with var, set, print, if, while, return, def or '{'",
            )),
            ErrorImpl::UnexpectedExpressionStart { .. } => ErrorTip::None,
            ErrorImpl::UnterminatedBlock { .. } => {
                ErrorTip::Suggestion(String::from("is a closing '}' missing?"))
            }
            ErrorImpl::InvalidType { .. } => {
                ErrorTip::Suggestion(String::from("valid types are int, real, bool and string"))
            }
            ErrorImpl::InvalidLiteral { .. } => {
                ErrorTip::Suggestion(String::from("is it above the literal's limit?"))
            }
            ErrorImpl::NestingTooDeep { .. } => ErrorTip::Suggestion(String::from(
                "split the construct up using intermediate variables",
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} on line {}.", self.internal_error, self.line)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("Expected {expected} {context}, found '{found}'")]
    MissingToken {
        expected: String,
        context: String,
        found: String,
    },
    #[error("Invalid statement starting with '{token}' encountered")]
    UnexpectedStatementStart { token: String },
    #[error("Expected expression, found '{token}'")]
    UnexpectedExpressionStart { token: String },
    #[error("Reached '{token}' while parsing a block, mismatched scopes")]
    UnterminatedBlock { token: String },
    #[error("Expected type for {identifier} after ':', found '{found}'")]
    InvalidType { identifier: String, found: String },
    #[error("Invalid literal '{token}'")]
    InvalidLiteral { token: String },
    #[error("Nesting exceeds {limit} levels")]
    NestingTooDeep { limit: usize },
}
