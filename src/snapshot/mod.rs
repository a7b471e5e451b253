//! Snapshot management for stepping through evaluation

use crate::parser::ast::NodeId;
use rustc_hash::FxHashMap;

/// Evaluation state after one reduction step
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Position of this snapshot in the history (0 = nothing reduced yet)
    pub step: usize,
    /// The node reduced in this step
    pub node: Option<NodeId>,
    /// Every node reduced so far, with its value
    pub values: FxHashMap<NodeId, i64>,
    /// Human-readable summary, e.g. `3 * 4 = 12`
    pub description: String,
}

impl Snapshot {
    /// The initial, empty state
    pub fn initial() -> Self {
        Snapshot {
            step: 0,
            node: None,
            values: FxHashMap::default(),
            description: "Start".to_string(),
        }
    }

    /// Estimate the memory usage of this snapshot in bytes
    pub fn estimated_size(&self) -> usize {
        // Rough estimate: fixed header plus one map entry per value
        let values_size = self.values.len() * 2 * std::mem::size_of::<u64>();
        std::mem::size_of::<Self>() + values_size + self.description.len()
    }

    pub fn value_of(&self, node: NodeId) -> Option<i64> {
        self.values.get(&node).copied()
    }
}

/// Manages evaluation history for stepping backward and forward
#[derive(Debug)]
pub struct SnapshotManager {
    snapshots: Vec<Snapshot>,
    max_memory: usize,
    current_memory: usize,
}

impl SnapshotManager {
    pub fn new(max_memory: usize) -> Self {
        SnapshotManager {
            snapshots: Vec::new(),
            max_memory,
            current_memory: 0,
        }
    }

    /// Add a snapshot to history
    pub fn push(&mut self, snapshot: Snapshot) -> Result<(), String> {
        let snapshot_size = snapshot.estimated_size();

        if self.current_memory + snapshot_size > self.max_memory {
            return Err(format!(
                "Snapshot memory limit exceeded: {} + {} > {}",
                self.current_memory, snapshot_size, self.max_memory
            ));
        }

        self.current_memory += snapshot_size;
        self.snapshots.push(snapshot);
        Ok(())
    }

    /// Drop all recorded history
    pub fn clear(&mut self) {
        self.snapshots.clear();
        self.current_memory = 0;
    }

    /// Get a snapshot by index
    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    /// Get the number of snapshots
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Get current memory usage
    pub fn memory_usage(&self) -> usize {
        self.current_memory
    }

    /// Get max memory limit
    pub fn memory_limit(&self) -> usize {
        self.max_memory
    }
}
