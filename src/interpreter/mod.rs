//! Hexagony execution engine
//!
//! This module provides the core execution logic:
//! - [`engine`]: The interpreter, its step loop and execution history
//! - [`ops`]: Opcode handlers, as `impl Interpreter` blocks
//! - [`edges`]: Boundary wrap and corner teleport
//! - [`io`]: Program input with pushback, captured or streamed output
//! - [`trace`]: The backtick-triggered debug trace
//! - [`errors`]: Runtime error types
//!
//! # Execution Model
//!
//! One IP executes per tick. The opcode under it runs, the IP moves one cell
//! along its direction (wrapping at the hexagon boundary) and control passes
//! to whichever IP the opcode selected. When history is enabled a snapshot is
//! taken after every tick to enable time-travel debugging.

pub mod constants;
pub mod edges;
pub mod engine;
pub mod errors;
pub mod io;
pub mod ops;
pub mod trace;
