//! Arithmetic expression parser
//!
//! This module transforms a line of text into an Abstract Syntax Tree (AST):
//! - [`lexer`]: Tokenization (source text → tokens, one per request)
//! - [`parse`]: Parser state, errors, and the entry point
//! - `expressions`: The `expr` / `term` / `factor` grammar
//! - [`ast`]: AST node definitions and tree rendering
//!
//! # Supported Grammar
//!
//! Non-negative integer literals, the binary operators `+ - * /`, and
//! parentheses. `*` and `/` bind tighter than `+` and `-`; all four are
//! left-associative. There are no unary operators, variables, or floats.
//!
//! # Parser Implementation
//!
//! Hand-written LL(1) recursive descent parser, one function per precedence
//! level. No external parser generator dependencies.

pub mod ast;
pub mod lexer;
pub mod parse;

mod expressions;

use ast::Expr;
use parse::{ParseError, Parser};

/// Parse `source` into an expression tree.
pub fn parse(source: &str) -> Result<Expr, ParseError> {
    Parser::new(source).parse()
}
