//! Runtime error types for the Hexagony interpreter
//!
//! This module defines [`RuntimeError`], which represents every failure that can
//! stop a run. Malformed input to `?` and end of input on `,` are *not* errors;
//! they produce `0` and `-1` respectively.
//!
//! All runtime errors are fatal - they halt execution and are reported on stderr.

use crate::grid::AxialPoint;
use std::io;
use thiserror::Error;

/// Runtime errors that can occur during execution
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// `:` or `%` with a zero right operand
    #[error("Division by zero in '{opcode}' at tick {tick}, cell {point}")]
    DivisionByZero {
        opcode: char,
        tick: u64,
        point: AxialPoint,
    },

    /// Reading input or writing output/trace failed
    #[error("I/O error in '{opcode}' at tick {tick}: {source}")]
    Io {
        opcode: char,
        tick: u64,
        #[source]
        source: io::Error,
    },

    /// Snapshot history limit exceeded
    #[error("Snapshot memory limit exceeded: {current} bytes used, limit is {limit}")]
    SnapshotLimitExceeded { current: usize, limit: usize },

    /// History navigation was not possible (already at the start, no history recorded, ...)
    #[error("History operation failed: {message}")]
    HistoryOperationFailed { message: String },
}

impl RuntimeError {
    /// Tick at which the error occurred, if it happened while executing a cell
    pub fn tick(&self) -> Option<u64> {
        match self {
            RuntimeError::DivisionByZero { tick, .. } => Some(*tick),
            RuntimeError::Io { tick, .. } => Some(*tick),
            RuntimeError::SnapshotLimitExceeded { .. } => None,
            RuntimeError::HistoryOperationFailed { .. } => None,
        }
    }

    /// Opcode that was executing when the error occurred
    pub fn opcode(&self) -> Option<char> {
        match self {
            RuntimeError::DivisionByZero { opcode, .. } | RuntimeError::Io { opcode, .. } => {
                Some(*opcode)
            }
            _ => None,
        }
    }

    pub(crate) fn history(message: impl Into<String>) -> Self {
        RuntimeError::HistoryOperationFailed {
            message: message.into(),
        }
    }
}
