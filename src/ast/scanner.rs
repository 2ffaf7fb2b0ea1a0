use crate::ast::{Token, Value};
use crate::error::LexError;
use crate::functions::Function;
use log::trace;

/// Turns an expression into a lazy sequence of tokens.
///
/// The input is upper-cased up front, so function names and the exponent
/// marker are case-insensitive. Exhaustion is signaled by `None`, after which
/// the cursor is rewound: calling `next` again starts over from the first
/// character.
pub struct Scanner {
    text: Vec<char>,
    pos: usize,
    current_char: Option<char>,
}

impl Scanner {
    pub fn new(text: &str) -> Self {
        let text: Vec<char> = text.to_uppercase().chars().collect();
        let current_char = text.first().copied();
        Self {
            text,
            pos: 0,
            current_char,
        }
    }

    /// Index of the character the scanner will look at next.
    pub fn position(&self) -> usize {
        self.pos
    }

    fn advance(&mut self) {
        self.pos += 1;
        self.current_char = self.text.get(self.pos).copied();
    }

    fn peek(&self, offset: usize) -> Option<char> {
        self.text.get(self.pos + offset).copied()
    }

    fn reset(&mut self) {
        self.pos = 0;
        self.current_char = self.text.first().copied();
    }

    fn skip_whitespace(&mut self) {
        while self.current_char.is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    fn take_digits(&mut self, buffer: &mut String) {
        while let Some(ch) = self.current_char.filter(char::is_ascii_digit) {
            buffer.push(ch);
            self.advance();
        }
    }

    /// An `E` only starts an exponent when digits (optionally signed) follow it.
    fn exponent_follows(&self) -> bool {
        match self.peek(1) {
            Some(ch) if ch.is_ascii_digit() => true,
            Some('+' | '-') => self.peek(2).is_some_and(|ch| ch.is_ascii_digit()),
            _ => false,
        }
    }

    fn number(&mut self) -> Result<Token, LexError> {
        let mut buffer = String::new();
        self.take_digits(&mut buffer);

        if self.current_char == Some('.') {
            buffer.push('.');
            self.advance();
            self.take_digits(&mut buffer);
        }

        if self.current_char == Some('E') && self.exponent_follows() {
            buffer.push('E');
            self.advance();
            if let Some(sign @ ('+' | '-')) = self.current_char {
                buffer.push(sign);
                self.advance();
            }
            self.take_digits(&mut buffer);
        }

        let decoded: f64 = buffer
            .parse()
            .map_err(|_| LexError::InvalidNumber(buffer.clone()))?;
        Ok(Token::Number(Value::from_decoded(decoded)))
    }

    fn function(&mut self) -> Result<Token, LexError> {
        let mut word = String::new();
        while let Some(ch) = self.current_char.filter(|ch| ch.is_alphabetic()) {
            word.push(ch);
            self.advance();
        }

        Function::try_from(word.as_str())
            .map(Token::Function)
            .map_err(LexError::UnrecognizedFunction)
    }
}

impl Iterator for Scanner {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_whitespace();

        let Some(ch) = self.current_char else {
            self.reset();
            return None;
        };

        let token = if ch.is_ascii_digit() || ch == '.' {
            self.number()
        } else if let Some(token) = Token::from_symbol(ch) {
            self.advance();
            Ok(token)
        } else if ch.is_alphabetic() {
            self.function()
        } else {
            self.advance();
            Err(LexError::InvalidCharacter(ch))
        };

        trace!("Scanned {:?} ending at {}", token, self.pos);
        Some(token)
    }
}
