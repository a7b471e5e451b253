//! Evaluation engine for expression trees
//!
//! Both walks hand back the size of the subtree they reduced alongside its
//! value, so the right child's pre-order id is known without recounting.

use crate::interpreter::errors::RuntimeError;
use crate::interpreter::ops::apply_binop;
use crate::parser::ast::{Expr, NodeId};
use crate::snapshot::{Snapshot, SnapshotManager};
use rustc_hash::FxHashMap;

/// Evaluate a tree to its integer value.
pub fn evaluate(expr: &Expr) -> Result<i64, RuntimeError> {
    eval_node(expr, 0).map(|(value, _)| value)
}

/// Value of the subtree rooted at `id`, and how many nodes it spans
fn eval_node(expr: &Expr, id: NodeId) -> Result<(i64, usize), RuntimeError> {
    match expr {
        Expr::Number { value } => Ok((*value, 1)),
        Expr::BinaryOp { op, left, right } => {
            let (a, left_size) = eval_node(left, id + 1)?;
            let (b, right_size) = eval_node(right, id + 1 + left_size)?;
            Ok((apply_binop(*op, a, b, id)?, 1 + left_size + right_size))
        }
    }
}

/// Step-by-step evaluator that records one snapshot per reduced node
pub struct Interpreter {
    /// The tree being evaluated
    expr: Expr,

    /// Snapshot manager for stepping backward and forward
    snapshot_manager: SnapshotManager,

    /// Current position in evaluation history
    history_position: usize,

    /// Values of the nodes reduced so far during `run`
    values: FxHashMap<NodeId, i64>,

    /// Final value, once `run` completes
    result: Option<i64>,

    /// Error that stopped `run`, if any
    error: Option<RuntimeError>,

    /// Whether `run` has been called
    finished: bool,
}

impl Interpreter {
    /// Create a new interpreter for the given tree
    pub fn new(expr: Expr, snapshot_memory_limit: usize) -> Self {
        Interpreter {
            expr,
            snapshot_manager: SnapshotManager::new(snapshot_memory_limit),
            history_position: 0,
            values: FxHashMap::default(),
            result: None,
            error: None,
            finished: false,
        }
    }

    /// Reduce the whole tree, building the history.
    ///
    /// On error the snapshots recorded up to the failing node are kept, so
    /// the partial evaluation can still be inspected.
    pub fn run(&mut self) -> Result<i64, RuntimeError> {
        self.snapshot_manager.clear();
        self.values.clear();
        self.result = None;
        self.error = None;

        let outcome = self
            .record(Snapshot::initial())
            .and_then(|()| {
                // Clone the tree so the recursion can borrow self mutably
                let expr = self.expr.clone();
                self.reduce(&expr, 0).map(|(value, _)| value)
            });

        self.finished = true;
        self.history_position = self.snapshot_manager.len().saturating_sub(1);

        match outcome {
            Ok(value) => {
                self.result = Some(value);
                Ok(value)
            }
            Err(e) => {
                self.error = Some(e.clone());
                Err(e)
            }
        }
    }

    fn reduce(&mut self, expr: &Expr, id: NodeId) -> Result<(i64, usize), RuntimeError> {
        let (value, size, description) = match expr {
            Expr::Number { value } => (*value, 1, format!("Number {}", value)),
            Expr::BinaryOp { op, left, right } => {
                let (a, left_size) = self.reduce(left, id + 1)?;
                let (b, right_size) = self.reduce(right, id + 1 + left_size)?;
                let value = apply_binop(*op, a, b, id)?;
                let description = format!("{} {} {} = {}", a, op, b, value);
                (value, 1 + left_size + right_size, description)
            }
        };

        self.values.insert(id, value);
        self.record(Snapshot {
            step: self.snapshot_manager.len(),
            node: Some(id),
            values: self.values.clone(),
            description,
        })?;
        Ok((value, size))
    }

    fn record(&mut self, snapshot: Snapshot) -> Result<(), RuntimeError> {
        self.snapshot_manager
            .push(snapshot)
            .map_err(|_| RuntimeError::SnapshotLimitExceeded {
                current: self.snapshot_manager.memory_usage(),
                limit: self.snapshot_manager.memory_limit(),
            })
    }

    /// Step backward in evaluation history
    pub fn step_backward(&mut self) -> Result<(), RuntimeError> {
        if self.history_position == 0 {
            return Err(RuntimeError::Generic {
                message: "Already at the beginning of evaluation".to_string(),
            });
        }
        self.history_position -= 1;
        Ok(())
    }

    /// Step forward in evaluation history
    pub fn step_forward(&mut self) -> Result<(), RuntimeError> {
        if self.history_position + 1 >= self.snapshot_manager.len() {
            return Err(RuntimeError::Generic {
                message: "No more snapshots available (evaluation finished)".to_string(),
            });
        }
        self.history_position += 1;
        Ok(())
    }

    /// Rewind to the beginning of evaluation history
    pub fn rewind_to_start(&mut self) -> Result<(), RuntimeError> {
        if self.snapshot_manager.is_empty() {
            return Err(RuntimeError::Generic {
                message: "No snapshots available".to_string(),
            });
        }
        self.history_position = 0;
        Ok(())
    }

    /// Jump to the last recorded snapshot
    pub fn jump_to_end(&mut self) -> Result<(), RuntimeError> {
        if self.snapshot_manager.is_empty() {
            return Err(RuntimeError::Generic {
                message: "No snapshots available".to_string(),
            });
        }
        self.history_position = self.snapshot_manager.len() - 1;
        Ok(())
    }

    // ========== Getter methods for UI ==========

    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    /// Snapshot at the current history position
    pub fn current_snapshot(&self) -> Option<&Snapshot> {
        self.snapshot_manager.get(self.history_position)
    }

    /// Node reduced at the current history position
    pub fn current_node(&self) -> Option<NodeId> {
        self.current_snapshot().and_then(|s| s.node)
    }

    pub fn history_position(&self) -> usize {
        self.history_position
    }

    /// Get the total number of snapshots
    pub fn total_snapshots(&self) -> usize {
        self.snapshot_manager.len()
    }

    pub fn result(&self) -> Option<i64> {
        self.result
    }

    pub fn error(&self) -> Option<&RuntimeError> {
        self.error.as_ref()
    }

    /// Check if `run` has completed (successfully or not)
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}
