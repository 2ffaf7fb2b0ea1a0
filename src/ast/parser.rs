//! Recursive descent parser building an `ASTNode` tree from a token stream.
//!
//! Grammar, lowest to highest precedence:
//!
//! ```text
//! expression := term (("+" | "-") term)*
//! term       := factor (("*" | "/") factor)*
//! factor     := atom ("^" atom)?
//! atom       := ("+" | "-") atom | number | "(" expression ")" | FUNCTION atom
//! number     := ("+" | "-")? NUMBER
//! ```
//!
//! `factor` accepts a single exponent only, so `2^3^2` must be written with
//! parentheses; the unparenthesized form is rejected because the whole input
//! has to be consumed.

use crate::ast::{ASTNode, Scanner, Token, TokenKind};
use crate::error::{CalcError, LexError, ParseError};
use log::debug;

pub struct Parser<I> {
    tokens: I,
    current_token: Token,
}

impl Parser<Scanner> {
    /// Scans and parses `input` in one go.
    pub fn parse_expression(input: &str) -> Result<ASTNode, CalcError> {
        debug!("Parsing expression: {}", input);
        Parser::new(Scanner::new(input))?.parse()
    }
}

impl<I> Parser<I>
where
    I: Iterator<Item = Result<Token, LexError>>,
{
    /// Wraps a token source and pulls its first token.
    pub fn new(mut tokens: I) -> Result<Self, LexError> {
        let current_token = tokens.next().unwrap_or(Ok(Token::Eof))?;
        Ok(Self {
            tokens,
            current_token,
        })
    }

    /// Parses the whole token stream into a single expression tree.
    pub fn parse(&mut self) -> Result<ASTNode, CalcError> {
        debug!("Parsing from token {}", self.current_token);
        let node = self.expression()?;
        if self.current_token != Token::Eof {
            return Err(ParseError::UnexpectedToken {
                expected: TokenKind::Eof,
                found: self.current_token.clone(),
            }
            .into());
        }
        debug!("Parse result: {:#?}", node);
        Ok(node)
    }

    /// Consumes the current token if it has the expected kind.
    fn eat(&mut self, kind: TokenKind) -> Result<(), CalcError> {
        if self.current_token.kind() != kind {
            return Err(ParseError::UnexpectedToken {
                expected: kind,
                found: self.current_token.clone(),
            }
            .into());
        }
        self.current_token = self.tokens.next().unwrap_or(Ok(Token::Eof))?;
        Ok(())
    }

    fn expression(&mut self) -> Result<ASTNode, CalcError> {
        let mut node = self.term()?;
        while let kind @ (TokenKind::Plus | TokenKind::Minus) = self.current_token.kind() {
            self.eat(kind)?;
            node = ASTNode::binary(node, kind, self.term()?);
        }
        Ok(node)
    }

    fn term(&mut self) -> Result<ASTNode, CalcError> {
        let mut node = self.factor()?;
        while let kind @ (TokenKind::Multiply | TokenKind::Divide) = self.current_token.kind() {
            self.eat(kind)?;
            node = ASTNode::binary(node, kind, self.factor()?);
        }
        Ok(node)
    }

    fn factor(&mut self) -> Result<ASTNode, CalcError> {
        let node = self.atom()?;
        if self.current_token.kind() == TokenKind::Power {
            self.eat(TokenKind::Power)?;
            return Ok(ASTNode::binary(node, TokenKind::Power, self.atom()?));
        }
        Ok(node)
    }

    fn atom(&mut self) -> Result<ASTNode, CalcError> {
        match self.current_token.kind() {
            kind @ (TokenKind::Plus | TokenKind::Minus) => {
                self.eat(kind)?;
                Ok(ASTNode::unary(kind, self.atom()?))
            }
            TokenKind::Number => self.number(),
            TokenKind::LeftParen => {
                self.eat(TokenKind::LeftParen)?;
                let node = self.expression()?;
                self.eat(TokenKind::RightParen)?;
                Ok(node)
            }
            TokenKind::Function => self.function_call(),
            _ => Err(ParseError::InvalidSyntax(self.current_token.clone()).into()),
        }
    }

    fn number(&mut self) -> Result<ASTNode, CalcError> {
        match self.current_token {
            Token::Plus | Token::Minus => {
                let kind = self.current_token.kind();
                self.eat(kind)?;
                Ok(ASTNode::unary(kind, self.number()?))
            }
            Token::Number(value) => {
                self.eat(TokenKind::Number)?;
                Ok(ASTNode::Number(value))
            }
            _ => Err(ParseError::ExpectedNumber(self.current_token.clone()).into()),
        }
    }

    fn function_call(&mut self) -> Result<ASTNode, CalcError> {
        let Token::Function(function) = self.current_token else {
            return Err(ParseError::InvalidSyntax(self.current_token.clone()).into());
        };
        self.eat(TokenKind::Function)?;
        // A parenthesized argument is itself an atom.
        Ok(ASTNode::call(function, self.atom()?))
    }
}
