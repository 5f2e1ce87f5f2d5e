// Snapshot management for reverse execution

use crate::interpreter::constants::{IP_COUNT, SNAPSHOT_BASE_SIZE};
use crate::interpreter::engine::InstructionPointer;
use crate::interpreter::errors::RuntimeError;
use crate::interpreter::io::InputCursor;
use crate::memory::Memory;

/// Snapshot of the mutable execution state after a tick
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub memory: Memory,
    pub ips: [InstructionPointer; IP_COUNT],
    pub active_ip: usize,
    pub tick: u64,
    pub input: InputCursor,
    pub output_len: usize,
    pub finished: bool,
}

impl Snapshot {
    /// Estimate the memory usage of this snapshot in bytes
    pub fn estimated_size(&self) -> usize {
        SNAPSHOT_BASE_SIZE + self.memory.estimated_size()
    }
}

/// Manages execution history for reverse execution
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
    pub fn push(&mut self, snapshot: Snapshot) -> Result<(), RuntimeError> {
        let snapshot_size = snapshot.estimated_size();

        if self.current_memory + snapshot_size > self.max_memory {
            return Err(RuntimeError::SnapshotLimitExceeded {
                current: self.current_memory + snapshot_size,
                limit: self.max_memory,
            });
        }

        self.current_memory += snapshot_size;
        self.snapshots.push(snapshot);
        Ok(())
    }

    /// Drop every snapshot from `len` onwards
    pub fn truncate(&mut self, len: usize) {
        for snapshot in self.snapshots.drain(len.min(self.snapshots.len())..) {
            self.current_memory -= snapshot.estimated_size();
        }
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
