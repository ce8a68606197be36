use std::fmt::{self, Display};

use crate::prelude::Token;

/// A parsed source file: the sequence of top-level statements.
#[derive(Debug, Clone)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

#[derive(Debug, Clone)]
pub enum Stmt {
    Let {
        token: Token,
        name: Identifier,
        value: Expr,
    },
    Return {
        token: Token,
        value: Expr,
    },
    Expression {
        expr: Expr,
    },
}

/// A braced statement list, as used by `if` arms and function bodies.
#[derive(Debug, Clone)]
pub struct Block {
    pub token: Token,
    pub statements: Vec<Stmt>,
}

#[derive(Debug, Clone)]
pub struct Identifier {
    pub token: Token,
    pub name: String,
}

#[derive(Debug, Clone)]
pub enum Expr {
    Identifier(Identifier),
    IntegerLiteral {
        token: Token,
        value: i64,
    },
    BooleanLiteral {
        token: Token,
        value: bool,
    },
    StringLiteral {
        token: Token,
        value: String,
    },
    ArrayLiteral {
        token: Token,
        elements: Vec<Expr>,
    },
    /// Pairs stay in source order; evaluation decides what wins on
    /// duplicate keys.
    HashLiteral {
        token: Token,
        pairs: Vec<(Expr, Expr)>,
    },
    Prefix {
        operator: Token,
        right: Box<Expr>,
    },
    Infix {
        left: Box<Expr>,
        operator: Token,
        right: Box<Expr>,
    },
    If {
        token: Token,
        condition: Box<Expr>,
        consequence: Block,
        alternative: Option<Block>,
    },
    FunctionLiteral {
        token: Token,
        parameters: Vec<Identifier>,
        body: Block,
    },
    Call {
        token: Token,
        callee: Box<Expr>,
        arguments: Vec<Expr>,
    },
    Index {
        token: Token,
        left: Box<Expr>,
        index: Box<Expr>,
    },
}

impl Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{}", statement)?;
        }
        Ok(())
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let { name, value, .. } => write!(f, "let {} = {};", name, value),
            Self::Return { value, .. } => write!(f, "return {};", value),
            Self::Expression { expr } => write!(f, "{}", expr),
        }
    }
}

impl Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let statements = self
            .statements
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>();
        write!(f, "{{ {} }}", statements.join(" "))
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(identifier) => write!(f, "{}", identifier),
            Self::IntegerLiteral { value, .. } => write!(f, "{}", value),
            Self::BooleanLiteral { value, .. } => write!(f, "{}", value),
            Self::StringLiteral { value, .. } => write!(f, "\"{}\"", value),
            Self::ArrayLiteral { elements, .. } => {
                write!(f, "[{}]", join_expressions(elements))
            }
            Self::HashLiteral { pairs, .. } => {
                let pairs = pairs
                    .iter()
                    .map(|(key, value)| format!("{}: {}", key, value))
                    .collect::<Vec<_>>();
                write!(f, "{{{}}}", pairs.join(", "))
            }
            Self::Prefix { operator, right } => write!(f, "({}{})", operator.literal, right),
            Self::Infix {
                left,
                operator,
                right,
            } => write!(f, "({} {} {})", left, operator.literal, right),
            Self::If {
                condition,
                consequence,
                alternative,
                ..
            } => {
                write!(f, "if {} {}", condition, consequence)?;
                if let Some(alternative) = alternative {
                    write!(f, " else {}", alternative)?;
                }
                Ok(())
            }
            Self::FunctionLiteral {
                parameters, body, ..
            } => {
                let parameters = parameters
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>();
                write!(f, "fn({}) {}", parameters.join(", "), body)
            }
            Self::Call {
                callee, arguments, ..
            } => write!(f, "{}({})", callee, join_expressions(arguments)),
            Self::Index { left, index, .. } => write!(f, "({}[{}])", left, index),
        }
    }
}

fn join_expressions(expressions: &[Expr]) -> String {
    expressions
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
