use crate::ast::{Token, TokenKind, Value};
use thiserror::Error;

/// Raised by the scanner when the input contains something it cannot tokenize.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LexError {
    #[error("Invalid character: {0}")]
    InvalidCharacter(char),
    #[error("Unrecognized function: {0}")]
    UnrecognizedFunction(String),
    #[error("Invalid number literal: {0}")]
    InvalidNumber(String),
}

/// Raised by the parser when the token stream does not match the grammar.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("Invalid syntax: expected {expected} but received {found}")]
    UnexpectedToken { expected: TokenKind, found: Token },
    #[error("Invalid syntax: unexpected {0}")]
    InvalidSyntax(Token),
    #[error("Syntax error: expected a number but received {0}")]
    ExpectedNumber(Token),
}

/// Raised while evaluating an expression tree.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Math domain error: {function} is undefined for {operand}")]
    Domain {
        function: &'static str,
        operand: Value,
    },
    #[error("Numerical result out of range")]
    Overflow,
    #[error("No handler for {0}")]
    NoHandler(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
