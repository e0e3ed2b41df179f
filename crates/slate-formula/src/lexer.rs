//! Formula tokenizer
//!
//! A longest-match scanner over the six lexical classes of the formula
//! grammar: parentheses, the four arithmetic operators, variables (letters
//! followed by digits), numeric literals, and whitespace. Whitespace only
//! separates tokens; anything that matches no class is emitted as
//! [`Token::Unknown`] so validation can report it instead of silently
//! dropping it.

use std::fmt;

/// A lexical unit of a formula
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// Numeric literal, e.g. `5`, `3.25`, `2e7`
    Number(f64),
    /// One or more letters followed by one or more digits, e.g. `a1`, `AB12`
    ///
    /// The source spelling is kept as written; views normalize to uppercase.
    Variable(String),
    /// A maximal run of input that matched no lexical class
    Unknown(String),
}

impl Token {
    /// Whether this token may begin an operand: '(', a number, or a variable
    pub fn begins_operand(&self) -> bool {
        matches!(self, Token::LeftParen | Token::Number(_) | Token::Variable(_))
    }

    /// Whether this token may end an operand: ')', a number, or a variable
    pub fn ends_operand(&self) -> bool {
        matches!(self, Token::RightParen | Token::Number(_) | Token::Variable(_))
    }

    /// Whether this token is one of `+`, `-`, `*`, `/`
    pub fn is_operator(&self) -> bool {
        matches!(self, Token::Plus | Token::Minus | Token::Star | Token::Slash)
    }
}

/// Renders the canonical lexeme: variables uppercased, numbers through
/// `f64`'s shortest round-trip formatting (`5.0000` → `5`, `3e6` → `3000000`).
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::LeftParen => f.write_str("("),
            Token::RightParen => f.write_str(")"),
            Token::Plus => f.write_str("+"),
            Token::Minus => f.write_str("-"),
            Token::Star => f.write_str("*"),
            Token::Slash => f.write_str("/"),
            Token::Number(n) => write!(f, "{}", n),
            Token::Variable(name) => f.write_str(&name.to_uppercase()),
            Token::Unknown(text) => f.write_str(text),
        }
    }
}

/// Split a formula string into tokens, in source order
///
/// Never fails; junk input surfaces as [`Token::Unknown`] entries for the
/// validator to reject.
pub(crate) fn tokenize(input: &str) -> Vec<Token> {
    let mut lexer = Lexer { input, pos: 0 };
    let mut tokens = Vec::new();

    loop {
        lexer.skip_whitespace();
        let c = match lexer.peek_char() {
            Some(c) => c,
            None => break,
        };
        tokens.push(lexer.scan_token(c));
    }

    tokens
}

struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    /// `c` is the character at the current position, already peeked by
    /// the caller.
    fn scan_token(&mut self, c: char) -> Token {
        match c {
            '(' => {
                self.advance();
                Token::LeftParen
            }
            ')' => {
                self.advance();
                Token::RightParen
            }
            '+' => {
                self.advance();
                Token::Plus
            }
            '-' => {
                self.advance();
                Token::Minus
            }
            '*' => {
                self.advance();
                Token::Star
            }
            '/' => {
                self.advance();
                Token::Slash
            }
            _ if c.is_ascii_alphabetic() => self.scan_variable(),
            _ if c.is_ascii_digit() => self.scan_number(),
            '.' if self.peek_char_at(1).is_some_and(|c| c.is_ascii_digit()) => self.scan_number(),
            _ => {
                self.advance();
                Token::Unknown(c.to_string())
            }
        }
    }

    /// Letters then digits. A letter run without a trailing digit run is
    /// not a variable and comes back as `Unknown`.
    fn scan_variable(&mut self) -> Token {
        let start = self.pos;

        while self.peek_char().is_some_and(|c| c.is_ascii_alphabetic()) {
            self.advance();
        }

        let digits_start = self.pos;
        while self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        let text = &self.input[start..self.pos];
        if self.pos == digits_start {
            return Token::Unknown(text.to_string());
        }

        Token::Variable(text.to_string())
    }

    /// Digits with optional fractional part and optional exponent. The
    /// exponent marker is consumed only when digits actually follow it,
    /// so `2e` lexes as the number `2` and the junk token `e`.
    fn scan_number(&mut self) -> Token {
        let start = self.pos;

        while self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        if self.peek_char() == Some('.') {
            self.advance();
            while self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        if self.peek_char().is_some_and(|c| c == 'e' || c == 'E') {
            let after_marker = self.peek_char_at(1);
            let exponent_digits = match after_marker {
                Some('+') | Some('-') => self.peek_char_at(2).is_some_and(|c| c.is_ascii_digit()),
                Some(c) => c.is_ascii_digit(),
                None => false,
            };

            if exponent_digits {
                self.advance();
                if matches!(self.peek_char(), Some('+') | Some('-')) {
                    self.advance();
                }
                while self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
                    self.advance();
                }
            }
        }

        // A literal whose value overflows f64 (e.g. "1e999") is junk:
        // an infinite Number would render as "inf", which does not lex
        // back, breaking the canonical round-trip.
        let text = &self.input[start..self.pos];
        match text.parse::<f64>() {
            Ok(n) if n.is_finite() => Token::Number(n),
            _ => Token::Unknown(text.to_string()),
        }
    }

    // === Helper methods ===

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn peek_char_at(&self, offset: usize) -> Option<char> {
        self.input[self.pos..].chars().nth(offset)
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            self.pos += c.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek_char().is_some_and(|c| c.is_whitespace()) {
            self.advance();
        }
    }
}
