//! # Introduction
//!
//! exprtree turns a line of integer arithmetic into an abstract syntax tree
//! that encodes operator precedence and associativity, then evaluates it one
//! node at a time. The reduction history can be browsed forward and backward
//! in a terminal UI built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Parser → AST → Interpreter → Snapshots → TUI
//! ```
//!
//! 1. [`parser`]: on-demand lexer and LL(1) recursive descent parser.
//! 2. [`interpreter`]: checked integer evaluation, either one-shot
//!    ([`interpreter::evaluate`]) or stepwise with history.
//! 3. [`snapshot`]: memory-bounded history of reduction steps.
//! 4. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Grammar
//!
//! ```text
//! expr   := term   ( ('+' | '-') term   )*
//! term   := factor ( ('*' | '/') factor )*
//! factor := INTEGER | '(' expr ')'
//! ```

pub mod interpreter;
pub mod parser;
pub mod snapshot;
pub mod ui;

pub use parser::ast::{BinOp, Expr};
pub use parser::parse;
pub use parser::parse::{ParseError, MAX_DEPTH};
