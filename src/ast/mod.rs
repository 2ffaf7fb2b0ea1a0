mod evaluator;
mod parser;
mod scanner;
mod token;
mod value;

pub use evaluator::{evaluate, Interpreter};
pub use parser::Parser;
pub use scanner::Scanner;
pub use token::{Token, TokenKind};
pub use value::Value;

use crate::functions::Function;

/// Expression tree produced by the parser and consumed once by the interpreter.
///
/// Operators are stored as the token kind that introduced them. The interpreter
/// only has handlers for `+`/`-` on unary nodes and `+ - * / ^` on binary nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum ASTNode {
    Number(Value),
    UnaryOperation {
        operator: TokenKind,
        operand: Box<ASTNode>,
    },
    BinaryOperation {
        left: Box<ASTNode>,
        operator: TokenKind,
        right: Box<ASTNode>,
    },
    FunctionCall {
        function: Function,
        operand: Box<ASTNode>,
    },
}

impl ASTNode {
    pub fn number(value: impl Into<Value>) -> Self {
        ASTNode::Number(value.into())
    }

    pub fn unary(operator: TokenKind, operand: ASTNode) -> Self {
        ASTNode::UnaryOperation {
            operator,
            operand: Box::new(operand),
        }
    }

    pub fn binary(left: ASTNode, operator: TokenKind, right: ASTNode) -> Self {
        ASTNode::BinaryOperation {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    pub fn call(function: Function, operand: ASTNode) -> Self {
        ASTNode::FunctionCall {
            function,
            operand: Box::new(operand),
        }
    }

    /// Nesting depth of the tree; a lone literal has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            ASTNode::Number(_) => 1,
            ASTNode::UnaryOperation { operand, .. } | ASTNode::FunctionCall { operand, .. } => {
                1 + operand.depth()
            }
            ASTNode::BinaryOperation { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}
