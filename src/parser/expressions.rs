//! Expression grammar
//!
//! Three mutually recursive rules, lowest precedence first:
//!
//! ```text
//! expr   := term   ( ('+' | '-') term   )*
//! term   := factor ( ('*' | '/') factor )*
//! factor := INTEGER | '(' expr ')'
//! ```
//!
//! Both repetition rules fold into the left operand, so operators of equal
//! precedence associate to the left: `a - b - c` is `(a - b) - c`.

use crate::parser::ast::*;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseError, Parser, MAX_DEPTH};

/// A parsed subtree together with its depth (a lone number is depth 1)
pub(crate) type Subtree = (Expr, usize);

impl Parser {
    /// Parse additive level (+ -)
    pub(crate) fn parse_expr(&mut self) -> Result<Subtree, ParseError> {
        let mut left = self.parse_term()?;

        while let Some((op, location)) =
            self.match_operator(&[TokenKind::Plus, TokenKind::Minus])?
        {
            let right = self.parse_term()?;
            left = fold(op, left, right, location)?;
        }

        Ok(left)
    }

    /// Parse multiplicative level (* /)
    pub(crate) fn parse_term(&mut self) -> Result<Subtree, ParseError> {
        let mut left = self.parse_factor()?;

        while let Some((op, location)) =
            self.match_operator(&[TokenKind::Multiply, TokenKind::Divide])?
        {
            let right = self.parse_factor()?;
            left = fold(op, left, right, location)?;
        }

        Ok(left)
    }

    /// Parse an integer literal or a parenthesised sub-expression
    pub(crate) fn parse_factor(&mut self) -> Result<Subtree, ParseError> {
        match self.current_token.kind {
            TokenKind::Integer => {
                let token = self.eat(TokenKind::Integer)?;
                let value = token
                    .text
                    .parse::<i64>()
                    .map_err(|_| ParseError::MalformedNumber {
                        text: token.text.clone(),
                        location: token.location,
                    })?;
                Ok((Expr::number(value), 1))
            }
            TokenKind::OpenParen => {
                if self.nesting >= MAX_DEPTH {
                    return Err(ParseError::TooDeep {
                        limit: MAX_DEPTH,
                        location: self.current_token.location,
                    });
                }
                self.eat(TokenKind::OpenParen)?;
                self.nesting += 1;
                let inner = self.parse_expr();
                self.nesting -= 1;
                let inner = inner?;
                self.eat(TokenKind::CloseParen)?;
                Ok(inner)
            }
            _ => Err(self.unexpected("an integer or '('")),
        }
    }

    /// Consume the lookahead if it is one of `kinds`, returning its operator
    /// and where it was.
    fn match_operator(
        &mut self,
        kinds: &[TokenKind],
    ) -> Result<Option<(BinOp, SourceLocation)>, ParseError> {
        let kind = self.current_token.kind;
        if !kinds.contains(&kind) {
            return Ok(None);
        }
        let token = self.eat(kind)?;
        Ok(BinOp::from_token_kind(kind).map(|op| (op, token.location)))
    }
}

/// Join two operands under `op`, refusing trees deeper than [`MAX_DEPTH`].
fn fold(
    op: BinOp,
    (left, left_depth): Subtree,
    (right, right_depth): Subtree,
    location: SourceLocation,
) -> Result<Subtree, ParseError> {
    let depth = left_depth.max(right_depth) + 1;
    if depth > MAX_DEPTH {
        return Err(ParseError::TooDeep {
            limit: MAX_DEPTH,
            location,
        });
    }
    Ok((Expr::binary(op, left, right), depth))
}
