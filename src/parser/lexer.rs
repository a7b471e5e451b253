//! Lexer (tokenizer) for arithmetic expressions
//!
//! Scans the input on demand: each call to [`Lexer::next_token`] produces
//! exactly one [`Token`]. The only mutable state is the cursor, which moves
//! forward and never back.
//!
//! Unrecognised characters are not errors at this stage. They come back as
//! [`TokenKind::Invalid`] tokens and the caller decides what to do.

use super::ast::SourceLocation;
use std::fmt;

/// All token kinds produced by the lexer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Integer,
    Plus,
    Minus,
    Multiply,
    Divide,
    OpenParen,
    CloseParen,
    EndOfFile,
    Invalid,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Integer => write!(f, "integer"),
            TokenKind::Plus => write!(f, "'+'"),
            TokenKind::Minus => write!(f, "'-'"),
            TokenKind::Multiply => write!(f, "'*'"),
            TokenKind::Divide => write!(f, "'/'"),
            TokenKind::OpenParen => write!(f, "'('"),
            TokenKind::CloseParen => write!(f, "')'"),
            TokenKind::EndOfFile => write!(f, "end of input"),
            TokenKind::Invalid => write!(f, "invalid character"),
        }
    }
}

/// A single lexical unit.
///
/// `text` holds the digit run for `Integer` tokens and is empty for every
/// other kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub location: SourceLocation,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            kind,
            text: text.into(),
            location,
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Integer => write!(f, "integer {}", self.text),
            kind => write!(f, "{}", kind),
        }
    }
}

/// On-demand lexer over a single line of input
pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
        }
    }

    /// Current cursor position (character index)
    pub fn position(&self) -> usize {
        self.position
    }

    /// The source character a token at `location` started with
    pub fn char_at(&self, location: SourceLocation) -> Option<char> {
        location
            .column
            .checked_sub(1)
            .and_then(|idx| self.input.get(idx))
            .copied()
    }

    /// Drain the lexer. The result always ends with a single `EndOfFile`
    /// token; `Invalid` tokens are kept in place.
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = token.is(TokenKind::EndOfFile);
            tokens.push(token);
            if done {
                break;
            }
        }
        tokens
    }

    /// Produce the next token, advancing past the characters it consumed.
    /// Once the input is exhausted every call returns `EndOfFile`.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let loc = self.current_location();
        let Some(ch) = self.peek() else {
            return Token::new(TokenKind::EndOfFile, "", loc);
        };

        let kind = match ch {
            '0'..='9' => return self.number_literal(loc),
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Multiply,
            '/' => TokenKind::Divide,
            '(' => TokenKind::OpenParen,
            ')' => TokenKind::CloseParen,
            _ => TokenKind::Invalid,
        };
        self.advance();
        Token::new(kind, "", loc)
    }

    fn number_literal(&mut self, loc: SourceLocation) -> Token {
        let start = self.position;
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.advance();
        }
        let text: String = self.input[start..self.position].iter().collect();
        Token::new(TokenKind::Integer, text, loc)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.advance();
        }
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;
        Some(ch)
    }

    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.position + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Lexer::new(source)
            .tokenize()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_operators_and_parens() {
        assert_eq!(
            kinds("+-*/()"),
            vec![
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Multiply,
                TokenKind::Divide,
                TokenKind::OpenParen,
                TokenKind::CloseParen,
                TokenKind::EndOfFile,
            ]
        );
    }

    #[test]
    fn test_operator_text_is_empty() {
        let tokens = Lexer::new("( + )").tokenize();
        assert!(tokens.iter().all(|t| t.text.is_empty()));
    }

    #[test]
    fn test_multi_digit_number_is_greedy() {
        let mut lexer = Lexer::new("12345+6");
        let first = lexer.next_token();
        assert_eq!(first.kind, TokenKind::Integer);
        assert_eq!(first.text, "12345");
        assert_eq!(lexer.position(), 5);
        assert_eq!(lexer.next_token().kind, TokenKind::Plus);
        assert_eq!(lexer.next_token().text, "6");
    }

    #[test]
    fn test_no_overflow_check_in_lexer() {
        let mut lexer = Lexer::new("99999999999999999999999");
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::Integer);
        assert_eq!(token.text, "99999999999999999999999");
    }

    #[test]
    fn test_whitespace_is_skipped() {
        let tokens = Lexer::new("  1 \t+\n 2  ").tokenize();
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Integer,
                TokenKind::Plus,
                TokenKind::Integer,
                TokenKind::EndOfFile
            ]
        );
        assert_eq!(tokens[0].location.column, 3);
        assert_eq!(tokens[1].location.column, 6);
        assert!(tokens.iter().all(|t| !t.text.contains(char::is_whitespace)));
    }

    #[test]
    fn test_eof_is_idempotent() {
        let mut lexer = Lexer::new("7");
        assert_eq!(lexer.next_token().kind, TokenKind::Integer);
        for _ in 0..3 {
            assert_eq!(lexer.next_token().kind, TokenKind::EndOfFile);
        }
        assert_eq!(lexer.position(), 1);
    }

    #[test]
    fn test_empty_input_is_eof() {
        assert_eq!(kinds(""), vec![TokenKind::EndOfFile]);
        assert_eq!(kinds("   "), vec![TokenKind::EndOfFile]);
    }

    #[test]
    fn test_invalid_consumes_one_char_and_continues() {
        let mut lexer = Lexer::new("1 $ 2");
        assert_eq!(lexer.next_token().kind, TokenKind::Integer);
        let invalid = lexer.next_token();
        assert_eq!(invalid.kind, TokenKind::Invalid);
        assert!(invalid.text.is_empty());
        assert_eq!(lexer.char_at(invalid.location), Some('$'));
        assert_eq!(lexer.next_token().text, "2");
    }

    #[test]
    fn test_non_ascii_digit_is_invalid() {
        assert_eq!(kinds("٣"), vec![TokenKind::Invalid, TokenKind::EndOfFile]);
    }
}
