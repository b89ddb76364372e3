use std::fmt::Display;

// LITERALS

/// Literal Value
/// A constant written directly in source.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Integer(i32),
    Real(f32),
    Boolean(bool),
    String(String),
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::Integer(value) => write!(f, "{}", value),
            Literal::Real(value) => write!(f, "{:?}", value),
            Literal::Boolean(value) => write!(f, "{}", value),
            Literal::String(value) => write!(f, "\"{}\"", value.replace('"', "\\\"")),
        }
    }
}

// COMPOUND

/// Binary Expression
/// `left operator right`, where `operator` is the operator's lexeme.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub operator: String,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

/// Unary Expression
/// A prefix `+`, `-` or logical not applied to an operand.
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub operator: String,
    pub operand: Box<Expr>,
}

/// Call Expression
/// `name(arguments...)`. A call without arguments has an empty list.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub name: String,
    pub arguments: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Binary(BinaryExpr),
    Unary(UnaryExpr),
    Literal(Literal),
    Identifier(String),
    Call(CallExpr),
}

impl Expr {
    pub fn binary(operator: impl Into<String>, left: Expr, right: Expr) -> Expr {
        Expr::Binary(BinaryExpr {
            operator: operator.into(),
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    pub fn unary(operator: impl Into<String>, operand: Expr) -> Expr {
        Expr::Unary(UnaryExpr {
            operator: operator.into(),
            operand: Box::new(operand),
        })
    }

    pub fn identifier(name: impl Into<String>) -> Expr {
        Expr::Identifier(name.into())
    }

    pub fn call(name: impl Into<String>, arguments: Vec<Expr>) -> Expr {
        Expr::Call(CallExpr {
            name: name.into(),
            arguments,
        })
    }
}

/// Renders the expression fully parenthesized, so grouping is explicit.
impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Binary(binary) => {
                write!(f, "({} {} {})", binary.left, binary.operator, binary.right)
            }
            Expr::Unary(unary) if unary.operator.chars().all(char::is_alphabetic) => {
                write!(f, "({} {})", unary.operator, unary.operand)
            }
            Expr::Unary(unary) => write!(f, "({}{})", unary.operator, unary.operand),
            Expr::Literal(literal) => write!(f, "{}", literal),
            Expr::Identifier(name) => write!(f, "{}", name),
            Expr::Call(call) => {
                write!(f, "{}(", call.name)?;
                for (i, argument) in call.arguments.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", argument)?;
                }
                write!(f, ")")
            }
        }
    }
}
