//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};

fn missing_semicolon() -> Error {
    Error::new(
        ErrorImpl::MissingToken {
            expected: "';'".to_string(),
            context: "after print statement".to_string(),
            found: "EOF".to_string(),
        },
        3,
    )
}

#[test]
fn test_error_line() {
    assert_eq!(missing_semicolon().get_line(), 3);
}

#[test]
fn test_missing_token_message() {
    assert_eq!(
        missing_semicolon().to_string(),
        "Expected ';' after print statement, found 'EOF' on line 3."
    );
    assert_eq!(missing_semicolon().get_error_name(), "MissingToken");
}

#[test]
fn test_unexpected_statement_start_message() {
    let error = Error::new(
        ErrorImpl::UnexpectedStatementStart {
            token: "else".to_string(),
        },
        7,
    );

    assert_eq!(error.get_error_name(), "UnexpectedStatementStart");
    assert_eq!(
        error.to_string(),
        "Invalid statement starting with 'else' encountered on line 7."
    );
}

#[test]
fn test_unexpected_expression_start_message() {
    let error = Error::new(
        ErrorImpl::UnexpectedExpressionStart {
            token: ";".to_string(),
        },
        1,
    );

    assert_eq!(error.get_error_name(), "UnexpectedExpressionStart");
    assert_eq!(error.to_string(), "Expected expression, found ';' on line 1.");
}

#[test]
fn test_unterminated_block_name() {
    let error = Error::new(
        ErrorImpl::UnterminatedBlock {
            token: "EOF".to_string(),
        },
        2,
    );

    assert_eq!(error.get_error_name(), "UnterminatedBlock");
    assert!(error.to_string().contains("'EOF'"));
}

#[test]
fn test_invalid_type_message() {
    let error = Error::new(
        ErrorImpl::InvalidType {
            identifier: "x".to_string(),
            found: "float".to_string(),
        },
        4,
    );

    assert_eq!(error.get_error_name(), "InvalidType");
    assert_eq!(
        error.to_string(),
        "Expected type for x after ':', found 'float' on line 4."
    );
}

#[test]
fn test_invalid_literal_name() {
    let error = Error::new(
        ErrorImpl::InvalidLiteral {
            token: "99999999999".to_string(),
        },
        1,
    );

    assert_eq!(error.get_error_name(), "InvalidLiteral");
}

#[test]
fn test_nesting_too_deep_message() {
    let error = Error::new(ErrorImpl::NestingTooDeep { limit: 512 }, 2);

    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert_eq!(error.to_string(), "Nesting exceeds 512 levels on line 2.");
}

#[test]
fn test_error_tip_semicolon_suggestion() {
    match missing_semicolon().get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("semicolon")),
        ErrorTip::None => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_none_for_other_missing_tokens() {
    let error = Error::new(
        ErrorImpl::MissingToken {
            expected: "')'".to_string(),
            context: "after expression".to_string(),
            found: ";".to_string(),
        },
        1,
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
