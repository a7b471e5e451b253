//! Runtime error types for expression evaluation
//!
//! This module defines [`RuntimeError`], which represents all errors that can occur
//! while reducing an expression tree (as opposed to parse errors).
//!
//! Arithmetic errors are fatal: evaluation stops at the first one and no
//! partial result is produced.

use crate::parser::ast::NodeId;
use std::fmt;

/// Runtime errors that can occur during evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// Division by zero
    DivisionByZero { operation: String, node: NodeId },

    /// Integer overflow in arithmetic operation
    IntegerOverflow { operation: String, node: NodeId },

    /// Snapshot history limit exceeded
    SnapshotLimitExceeded { current: usize, limit: usize },

    /// History navigation failure and other non-arithmetic errors
    Generic { message: String },
}

impl RuntimeError {
    /// The tree node whose reduction failed, if any
    pub fn node(&self) -> Option<NodeId> {
        match self {
            RuntimeError::DivisionByZero { node, .. }
            | RuntimeError::IntegerOverflow { node, .. } => Some(*node),
            RuntimeError::SnapshotLimitExceeded { .. } | RuntimeError::Generic { .. } => None,
        }
    }
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeError::DivisionByZero { operation, node } => {
                write!(f, "Division by zero in {} (node {})", operation, node)
            }
            RuntimeError::IntegerOverflow { operation, node } => {
                write!(
                    f,
                    "Integer overflow in operation: {} (node {})",
                    operation, node
                )
            }
            RuntimeError::SnapshotLimitExceeded { current, limit } => {
                write!(
                    f,
                    "Snapshot memory limit exceeded: {} bytes used, limit is {}",
                    current, limit
                )
            }
            RuntimeError::Generic { message } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for RuntimeError {}
