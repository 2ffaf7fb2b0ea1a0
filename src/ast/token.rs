use crate::ast::Value;
use crate::functions::Function;
use std::fmt;

/// Lexical categories known to the scanner and parser.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Eof,
    Number,
    Plus,
    Minus,
    Multiply,
    Divide,
    Power,
    LeftParen,
    RightParen,
    Function,
    /// Reserved: the exponent marker is folded into number literals and never emitted.
    Scientific,
    /// Reserved: there are no variables, so identifiers are never emitted.
    Identifier,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TokenKind::Eof => "end of input",
            TokenKind::Number => "number",
            TokenKind::Plus => "'+'",
            TokenKind::Minus => "'-'",
            TokenKind::Multiply => "'*'",
            TokenKind::Divide => "'/'",
            TokenKind::Power => "'^'",
            TokenKind::LeftParen => "'('",
            TokenKind::RightParen => "')'",
            TokenKind::Function => "function",
            TokenKind::Scientific => "'E'",
            TokenKind::Identifier => "identifier",
        };
        f.write_str(text)
    }
}

/// A token produced by the scanner. Only numbers and function names carry a value.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Eof,
    Number(Value),
    Plus,
    Minus,
    Multiply,
    Divide,
    Power,
    LeftParen,
    RightParen,
    Function(Function),
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Eof => TokenKind::Eof,
            Token::Number(_) => TokenKind::Number,
            Token::Plus => TokenKind::Plus,
            Token::Minus => TokenKind::Minus,
            Token::Multiply => TokenKind::Multiply,
            Token::Divide => TokenKind::Divide,
            Token::Power => TokenKind::Power,
            Token::LeftParen => TokenKind::LeftParen,
            Token::RightParen => TokenKind::RightParen,
            Token::Function(_) => TokenKind::Function,
        }
    }

    /// Maps a single operator or parenthesis character to its token.
    pub fn from_symbol(symbol: char) -> Option<Token> {
        match symbol {
            '+' => Some(Token::Plus),
            '-' => Some(Token::Minus),
            '*' => Some(Token::Multiply),
            '/' => Some(Token::Divide),
            '^' => Some(Token::Power),
            '(' => Some(Token::LeftParen),
            ')' => Some(Token::RightParen),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(value) => write!(f, "number {}", value),
            Token::Function(function) => write!(f, "function {}", function),
            other => write!(f, "{}", other.kind()),
        }
    }
}
