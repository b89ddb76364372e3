//! Unit tests for the AST module.
//!
//! Covers the textual forms of types, expressions and whole programs.

use crate::{lexer::tokens::TokenKind, parser::parser::parse_source};

use super::{
    expressions::{Expr, Literal},
    printer::pretty_print,
    types::Type,
};

#[test]
fn test_type_from_token_kind() {
    assert_eq!(Type::from_token_kind(TokenKind::IntType), Some(Type::Integer));
    assert_eq!(Type::from_token_kind(TokenKind::RealType), Some(Type::Real));
    assert_eq!(Type::from_token_kind(TokenKind::BoolType), Some(Type::Boolean));
    assert_eq!(Type::from_token_kind(TokenKind::StringType), Some(Type::String));
    assert_eq!(Type::from_token_kind(TokenKind::Identifier), None);
}

#[test]
fn test_type_display() {
    assert_eq!(Type::Integer.to_string(), "int");
    assert_eq!(Type::Boolean.to_string(), "bool");
}

#[test]
fn test_expr_display() {
    let expr = Expr::binary(
        "*",
        Expr::unary("-", Expr::identifier("x")),
        Expr::call(
            "f",
            vec![
                Expr::Literal(Literal::Integer(1)),
                Expr::Literal(Literal::String("say \"hi\"".to_string())),
            ],
        ),
    );

    assert_eq!(expr.to_string(), r#"((-x) * f(1, "say \"hi\""))"#);
}

#[test]
fn test_real_literal_display_keeps_decimal_point() {
    assert_eq!(Literal::Real(1.0).to_string(), "1.0");
    assert_eq!(Literal::Real(2.5).to_string(), "2.5");
    assert_eq!(Literal::Integer(1).to_string(), "1");
}

#[test]
fn test_word_operator_display() {
    let expr = Expr::unary("not", Expr::Literal(Literal::Boolean(true)));
    assert_eq!(expr.to_string(), "(not true)");
}

#[test]
fn test_pretty_print_program() {
    let program = parse_source(
        "def f(a: int): bool { return a > 0; }\n\
         var x: int = 1;\n\
         if (f(x)) { print \"yes\"; } else { set x = 2; }\n\
         while (x < 3) { { print x; } }",
    )
    .expect("program parses");

    let expected = "\
Program
  FunctionDefinition f(a: int): bool
    Return (a > 0)
  Declaration x: int = 1
  If f(x)
    Then
      Print \"yes\"
    Else
      Assignment x = 2
  While (x < 3)
    Block
      Print x
";

    assert_eq!(pretty_print(&program), expected);
}
