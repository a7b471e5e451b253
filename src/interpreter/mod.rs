//! Expression evaluation engine
//!
//! This module provides the evaluation logic:
//! - [`engine`]: [`evaluate`] for a one-shot result and the stepping
//!   [`engine::Interpreter`] with reduction history
//! - [`errors`]: Runtime error types
//! - [`ops`]: Checked integer arithmetic for each operator
//!
//! # Execution Model
//!
//! The tree is reduced in post-order: left subtree, right subtree, then the
//! node itself. The stepping interpreter records a snapshot after every
//! reduced node so the history can be walked in both directions.

pub mod engine;
pub mod errors;
pub mod ops;

pub use engine::evaluate;
