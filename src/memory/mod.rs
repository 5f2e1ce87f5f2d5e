//! Edge-addressed memory for the Hexagony interpreter
//!
//! This module provides the memory model:
//! - [`edge`]: The memory pointer and its canonical left/right transitions
//! - [`value`]: Big-integer helpers for division, output and IP selection
//!
//! # Layout
//!
//! Memory is a conceptually infinite grid of hexagons whose *edges* hold
//! values. The pointer sits on one edge facing one way; from there it can
//! move to the left or right neighbouring edge, which makes the memory look
//! like a binary tree from wherever the pointer currently is. Unwritten edges
//! read as zero and nothing is stored until the first write.

pub mod edge;
pub mod value;

use crate::grid::{AxialPoint, Direction};
use edge::{EdgeKey, MemoryPointer};
use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use rustc_hash::FxHashMap;

/// The memory edges and the pointer into them
#[derive(Debug, Clone, Default)]
pub struct Memory {
    edges: FxHashMap<EdgeKey, BigInt>,
    pointer: MemoryPointer,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the pointer's orientation without moving it
    pub fn reverse(&mut self) {
        self.pointer = self.pointer.reversed();
    }

    pub fn move_left(&mut self) {
        self.pointer = self.pointer.left();
    }

    pub fn move_right(&mut self) {
        self.pointer = self.pointer.right();
    }

    /// Value on the current edge
    pub fn get(&self) -> BigInt {
        self.value_at(self.pointer.key())
    }

    pub fn set(&mut self, value: BigInt) {
        self.edges.insert(self.pointer.key(), value);
    }

    /// Value on the left neighbour, without moving
    pub fn get_left(&self) -> BigInt {
        self.value_at(self.pointer.left().key())
    }

    /// Value on the right neighbour, without moving
    pub fn get_right(&self) -> BigInt {
        self.value_at(self.pointer.right().key())
    }

    /// Whether the current edge holds a value greater than zero
    pub fn is_positive(&self) -> bool {
        self.edges
            .get(&self.pointer.key())
            .is_some_and(|value| value.is_positive())
    }

    fn value_at(&self, key: EdgeKey) -> BigInt {
        self.edges.get(&key).cloned().unwrap_or_else(BigInt::zero)
    }

    pub fn pointer(&self) -> MemoryPointer {
        self.pointer
    }

    /// Number of edges that have been written
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Written edges in display order: by `q`, then `r`, then SE, E, NE
    pub fn entries(&self) -> Vec<(AxialPoint, Direction, &BigInt)> {
        let mut entries: Vec<_> = self
            .edges
            .iter()
            .map(|((point, dir), value)| (*point, *dir, value))
            .collect();
        entries.sort_by_key(|(point, dir, _)| (point.q, point.r, -dir.vector().r));
        entries
    }

    /// Rough heap footprint, used to budget snapshot history
    pub fn estimated_size(&self) -> usize {
        self.edges
            .values()
            .map(|value| 32 + value.bits() as usize / 8)
            .sum()
    }

    /// Full listing of the stored edges and the pointer
    pub fn to_debug_string(&self) -> String {
        let mut out = String::from(
            "Memory (values are stored on the E, NE, and SE edges of the hexagons indicated by the coordinates):\n",
        );

        let lines: Vec<String> = self
            .entries()
            .into_iter()
            .map(|(point, dir, value)| {
                let active = if self.pointer.key() == (point, dir) {
                    " (active)"
                } else {
                    ""
                };
                format!("{}: {:>6}{}", format_edge(point, dir), value, active)
            })
            .collect();
        out.push_str(&lines.join("\n"));

        out.push_str("\nPointer:\n");
        out.push_str(&format_edge(self.pointer.point, self.pointer.dir));
        out.push_str(&format!("\nClockwise: {}", self.pointer.clockwise));
        out
    }
}

/// `(Q: q, R: r, Dir: d)` with column-aligned fields
pub fn format_edge(point: AxialPoint, dir: Direction) -> String {
    format!("(Q: {:>3}, R: {:>3}, Dir: {:>2})", point.q, point.r, dir)
}
