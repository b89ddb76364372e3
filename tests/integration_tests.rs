//! Integration tests for the front end.
//!
//! These tests drive the public API from source text through tokenization
//! and parsing, checking the shape of the resulting trees and the
//! diagnostics raised for malformed programs.

use minilang::{
    ast::{
        expressions::Expr,
        printer::pretty_print,
        statements::Stmt,
        types::Type,
    },
    lexer::lexer::tokenize,
    parser::parser::{parse, parse_source},
};

const FACTORIAL: &str = r#"
// Computes factorials iteratively and recursively
def factorial(n: int): int {
    if (n <= 1) {
        return 1;
    } else {
        return n * factorial(n - 1);
    }
}

def iterative(n: int): int {
    var result: int = 1;
    var i: int = 2;
    while (i <= n) {
        set result = result * i;
        set i = i + 1;
    }
    return result;
}

var label: string = "5! = ";
print label;
print factorial(5) = iterative(5);
"#;

#[test]
fn test_parse_complete_program() {
    let program = parse_source(FACTORIAL).expect("program parses");
    assert_eq!(program.len(), 5);

    match &program.statements[0] {
        Stmt::FnDecl(function) => {
            assert_eq!(function.identifier, "factorial");
            assert_eq!(function.parameters, vec![("n".to_string(), Type::Integer)]);
            assert_eq!(function.body.body.len(), 1);
            assert!(matches!(function.body.body[0], Stmt::If(_)));
        }
        other => panic!("expected function definition, got {:?}", other),
    }

    match &program.statements[4] {
        Stmt::Print(print) => {
            assert_eq!(print.value.to_string(), "(factorial(5) = iterative(5))")
        }
        other => panic!("expected print, got {:?}", other),
    }
}

#[test]
fn test_token_list_and_source_agree() {
    let from_tokens = parse(tokenize(FACTORIAL)).expect("token list parses");
    let from_source = parse_source(FACTORIAL).expect("source parses");

    assert_eq!(from_tokens, from_source);
}

#[test]
fn test_statement_count_matches_top_level_statements() {
    let statements = [
        "var a: int = 1;",
        "set a = 2;",
        "print a;",
        "return a;",
        "{ print a; print a; }",
        "if (a) { print a; }",
        "if (a) { } else { }",
        "while (a > 0) { set a = a - 1; }",
        "def g(): bool { return true; }",
    ];

    for count in 0..=statements.len() {
        let source = statements[..count].join("\n");
        let program = parse_source(&source).expect("prefix parses");
        assert_eq!(program.len(), count, "source: {}", source);
    }
}

#[test]
fn test_zero_argument_call_in_expression() {
    let program = parse_source("var t: real = now() * 2.0;").expect("program parses");

    match &program.statements[0] {
        Stmt::VarDecl(decl) => match &decl.assigned_value {
            Expr::Binary(binary) => assert_eq!(*binary.left, Expr::call("now", vec![])),
            other => panic!("expected binary expression, got {:?}", other),
        },
        other => panic!("expected declaration, got {:?}", other),
    }
}

#[test]
fn test_pretty_print_nested_function() {
    let program =
        parse_source("def f(): int { while (true) { return 1; } }").expect("program parses");

    assert_eq!(
        pretty_print(&program),
        "Program\n  FunctionDefinition f(): int\n    While true\n      Return 1\n"
    );
}

#[test]
fn test_error_reports_first_violation_only() {
    let error = parse_source("print 1\nprint 2\n").expect_err("missing semicolons");

    assert_eq!(error.get_error_name(), "MissingToken");
    assert_eq!(error.get_line(), 2);
    assert_eq!(
        error.to_string(),
        "Expected ';' after print statement, found 'print' on line 2."
    );
}

#[test]
fn test_unterminated_function_body() {
    let error = parse_source("def f(): int {\n    return 1;\n").expect_err("missing brace");

    assert_eq!(error.get_error_name(), "UnterminatedBlock");
    assert_eq!(error.get_line(), 3);
}
