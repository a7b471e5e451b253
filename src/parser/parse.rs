//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including error types, token handling, and the main parse entry point.
//!
//! # Parser Architecture
//!
//! The parser is LL(1): it holds exactly one lookahead token pulled from the
//! [`Lexer`] and only [`Parser::eat`] replaces it.
//! - This module: Parser struct, error type, `eat`, and coordination
//! - `expressions`: the `expr` / `term` / `factor` grammar rules
//!
//! Parser methods are split across both files using `impl Parser` blocks.

use crate::parser::ast::*;
use crate::parser::lexer::{Lexer, Token, TokenKind};
use std::fmt;

/// Deepest tree, and deepest parenthesis nesting, the parser will build.
///
/// Every tree walk (evaluation, rendering, drop) recurses once per level, so
/// this bounds the stack any accepted expression can need.
pub const MAX_DEPTH: usize = 512;

/// Parser error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The lexer produced an `Invalid` token for this character
    InvalidCharacter {
        character: char,
        location: SourceLocation,
    },

    /// A token that no production accepts at this point
    UnexpectedToken {
        expected: String,
        found: TokenKind,
        location: SourceLocation,
    },

    /// An integer literal that does not convert to a native integer
    MalformedNumber {
        text: String,
        location: SourceLocation,
    },

    /// Parentheses nested, or operators chained, past [`MAX_DEPTH`]
    TooDeep {
        limit: usize,
        location: SourceLocation,
    },
}

impl ParseError {
    pub fn location(&self) -> SourceLocation {
        match self {
            ParseError::InvalidCharacter { location, .. }
            | ParseError::UnexpectedToken { location, .. }
            | ParseError::MalformedNumber { location, .. }
            | ParseError::TooDeep { location, .. } => *location,
        }
    }

    /// The source line followed by a caret under the failing column and the
    /// error message. Tabs before the column are kept so the caret lines up
    /// however the terminal expands them.
    pub fn render_with_source(&self, source: &str) -> String {
        let column = self.location().column.max(1);
        let padding: String = source
            .chars()
            .chain(std::iter::repeat(' '))
            .take(column - 1)
            .map(|c| if c == '\t' { '\t' } else { ' ' })
            .collect();
        format!("{}\n{}^ {}", source, padding, self.message())
    }

    fn message(&self) -> String {
        match self {
            ParseError::InvalidCharacter { character, .. } => {
                format!("invalid character '{}'", character)
            }
            ParseError::UnexpectedToken {
                expected, found, ..
            } => format!("expected {}, found {}", expected, found),
            ParseError::MalformedNumber { text, .. } => {
                format!("integer literal '{}' is out of range", text)
            }
            ParseError::TooDeep { limit, .. } => {
                format!("expression nests deeper than {} levels", limit)
            }
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Parse error at column {}: {}",
            self.location().column,
            self.message()
        )
    }
}

impl std::error::Error for ParseError {}

/// Recursive descent parser for integer arithmetic
pub struct Parser {
    pub(crate) lexer: Lexer,
    pub(crate) current_token: Token,
    /// Open parentheses the grammar rules are currently inside
    pub(crate) nesting: usize,
}

impl Parser {
    pub fn new(source: &str) -> Self {
        Self::from_lexer(Lexer::new(source))
    }

    /// Wrap an existing lexer, pulling the first lookahead token immediately.
    pub fn from_lexer(mut lexer: Lexer) -> Self {
        let current_token = lexer.next_token();
        Self {
            lexer,
            current_token,
            nesting: 0,
        }
    }

    /// Parse the whole input as one expression.
    ///
    /// Anything left over after the expression (a stray `)`, a second
    /// number) is an error, as is empty input.
    pub fn parse(&mut self) -> Result<Expr, ParseError> {
        let (expr, _) = self.parse_expr()?;
        if !self.check(TokenKind::EndOfFile) {
            return Err(self.unexpected("an operator or end of input"));
        }
        Ok(expr)
    }

    /// The current lookahead token
    pub fn current_token(&self) -> &Token {
        &self.current_token
    }

    // ===== Helper methods =====

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.current_token.is(kind)
    }

    /// Consume the lookahead if it has the expected kind and return it.
    /// A mismatch leaves the parser untouched and fails.
    pub(crate) fn eat(&mut self, expected: TokenKind) -> Result<Token, ParseError> {
        if self.check(expected) {
            let next = self.lexer.next_token();
            Ok(std::mem::replace(&mut self.current_token, next))
        } else {
            Err(self.unexpected(&expected.to_string()))
        }
    }

    /// Build the error for the current lookahead. `Invalid` tokens are
    /// reported as the character that produced them.
    pub(crate) fn unexpected(&self, expected: &str) -> ParseError {
        let location = self.current_token.location;
        if self.check(TokenKind::Invalid) {
            if let Some(character) = self.lexer.char_at(location) {
                return ParseError::InvalidCharacter {
                    character,
                    location,
                };
            }
        }
        ParseError::UnexpectedToken {
            expected: expected.to_string(),
            found: self.current_token.kind,
            location,
        }
    }
}
