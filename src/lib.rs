//! # Introduction
//!
//! HexTTY runs [Hexagony](https://esolangs.org/wiki/Hexagony) programs: source
//! text laid out on a hexagonal grid, executed by six instruction pointers
//! over a memory of big-integer edges. Every tick can be snapshotted so the
//! run is navigable forward and backward through a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Execution pipeline
//!
//! ```text
//! Source → Grid → Interpreter (IPs + Memory) → Output / Trace / Snapshots → TUI
//! ```
//!
//! 1. [`grid`] lays the source out on the hexagon and holds the axial
//!    coordinate and direction types.
//! 2. [`memory`] is the edge memory: a sparse map from hexagon edges to
//!    [`num_bigint::BigInt`] values and the pointer that walks it.
//! 3. [`interpreter`] fetches, executes and moves the six IPs, including the
//!    boundary wrap and corner teleport rules.
//! 4. [`snapshot`] keeps per-tick state under a configurable memory limit.
//! 5. [`ui`] is the ratatui-based TUI; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! use hextty::interpreter::engine::Interpreter;
//! use hextty::interpreter::io::Input;
//! use hextty::interpreter::trace::DebugLevel;
//!
//! let mut interpreter = Interpreter::new("H;i;@", Input::empty(), DebugLevel::Off);
//! interpreter.run().unwrap();
//! assert_eq!(interpreter.output().bytes(), b"Hi");
//! ```

pub mod grid;
pub mod interpreter;
pub mod memory;
pub mod snapshot;
pub mod ui;
