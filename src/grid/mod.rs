//! Hexagonal program grid
//!
//! This module turns source text into the hexagon the instruction pointers
//! walk over:
//! - [`point`]: Axial coordinates ([`AxialPoint`])
//! - [`direction`]: The six directions and their mirror tables ([`Direction`])
//!
//! # Layout
//!
//! A grid of side `size` holds `3 * size * (size - 1) + 1` cells arranged in
//! `2 * size - 1` rows. Row `i` corresponds to `r = i - size + 1` and the cell
//! at column `j` of that row has `q = j - min(i, size - 1)`. Source characters
//! fill the rows top to bottom, left to right; cells past the end of the source
//! are `.` (no-op).
//!
//! ```text
//!    a b          size 2, source "abcdefg"
//!   c d e
//!    f g
//! ```

pub mod direction;
pub mod point;

pub use direction::Direction;
pub use point::AxialPoint;

use std::fmt;

/// Character used for cells not covered by the source
pub const NO_OP: char = '.';

/// Marker that flags the next significant character for debug tracing
pub const DEBUG_MARKER: char = '`';

/// A single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    /// Set when the source character was preceded by a backtick
    pub debug: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Cell {
            ch: NO_OP,
            debug: false,
        }
    }
}

/// Location of a cell's character in the source text (byte offset and length)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub index: usize,
    pub length: usize,
}

impl Position {
    pub fn new(index: usize, length: usize) -> Self {
        Position { index, length }
    }
}

/// The parsed program hexagon
#[derive(Debug, Clone)]
pub struct Grid {
    size: usize,
    rows: Vec<Vec<Cell>>,
    positions: Vec<Vec<Position>>,
    end_position: Position,
}

impl Grid {
    /// Create an empty hexagon of the given side length
    pub fn new(size: usize) -> Self {
        Self::build(size, 0, Vec::new())
    }

    /// Parse source text into the smallest hexagon that holds every significant character
    pub fn parse(source: &str) -> Self {
        let mut debug = false;
        let mut data = Vec::new();

        for (index, ch) in source.char_indices() {
            match ch {
                ' ' | '\t' | '\r' | '\n' => continue,
                DEBUG_MARKER => {
                    debug = true;
                    continue;
                }
                _ => {}
            }

            data.push((Cell { ch, debug }, Position::new(index, ch.len_utf8())));
            debug = false;
        }

        Self::build(Self::size_for(data.len()), source.len(), data)
    }

    /// Smallest side length whose hexagon has at least `count` cells
    pub fn size_for(count: usize) -> usize {
        let mut size = 1;
        while Self::cell_count(size) < count {
            size += 1;
        }
        size
    }

    /// Number of cells in a hexagon of side `size`
    pub fn cell_count(size: usize) -> usize {
        3 * size * size.saturating_sub(1) + 1
    }

    fn build(size: usize, source_len: usize, data: Vec<(Cell, Position)>) -> Self {
        let end_position = Position::new(source_len, 0);
        let mut data = data.into_iter();

        let mut rows = Vec::with_capacity(2 * size - 1);
        let mut positions = Vec::with_capacity(2 * size - 1);
        for i in 0..2 * size - 1 {
            let len = Self::row_len(size, i);
            let mut row = Vec::with_capacity(len);
            let mut row_positions = Vec::with_capacity(len);
            for _ in 0..len {
                let (cell, position) = data.next().unwrap_or((Cell::default(), end_position));
                row.push(cell);
                row_positions.push(position);
            }
            rows.push(row);
            positions.push(row_positions);
        }

        Grid {
            size,
            rows,
            positions,
            end_position,
        }
    }

    fn row_len(size: usize, row: usize) -> usize {
        2 * size - 1 - (size - 1).abs_diff(row)
    }

    /// Side length of the hexagon
    pub fn size(&self) -> usize {
        self.size
    }

    /// Rows of cells, top to bottom
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Whether a point lies inside the hexagon
    pub fn contains(&self, point: AxialPoint) -> bool {
        (point.distance_from_origin() as usize) < self.size
    }

    fn axial_to_index(&self, point: AxialPoint) -> Option<(usize, usize)> {
        if !self.contains(point) {
            return None;
        }
        let size = self.size as i32;
        let i = point.r + size - 1;
        let j = point.q + i.min(size - 1);
        Some((i as usize, j as usize))
    }

    /// Axial coordinates of the cell at `(row, column)`
    pub fn index_to_axial(&self, row: usize, column: usize) -> AxialPoint {
        let (q_start, _) = self.row_q_range(row);
        AxialPoint::new(q_start + column as i32, self.row_r(row))
    }

    /// The `r` coordinate shared by every cell of a row
    pub fn row_r(&self, row: usize) -> i32 {
        row as i32 - self.size as i32 + 1
    }

    /// Inclusive range of `q` coordinates covered by a row
    pub fn row_q_range(&self, row: usize) -> (i32, i32) {
        let size = self.size as i32;
        let q1 = (1 - size).max(-(row as i32));
        let q2 = q1 + Self::row_len(self.size, row) as i32 - 1;
        (q1, q2)
    }

    /// Cell at a point; points outside the hexagon read as `.`
    pub fn get(&self, point: AxialPoint) -> Cell {
        self.axial_to_index(point)
            .map(|(i, j)| self.rows[i][j])
            .unwrap_or_default()
    }

    /// Source position of the character at a point
    pub fn get_position(&self, point: AxialPoint) -> Position {
        self.axial_to_index(point)
            .map(|(i, j)| self.positions[i][j])
            .unwrap_or(self.end_position)
    }

    fn padding(&self, row: &[Cell]) -> String {
        " ".repeat(2 * self.size - row.len())
    }

    fn join_row(row: &[Cell]) -> String {
        row.iter()
            .map(|cell| cell.ch.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The grid with the coordinate range of every row, as printed in debug traces
    pub fn to_debug_string(&self) -> String {
        self.rows
            .iter()
            .enumerate()
            .map(|(index, row)| {
                let padding = self.padding(row);
                let (q1, q2) = self.row_q_range(index);
                format!(
                    "{}{}{}    Q: [{:>3},{:>3}], R: {:>2}",
                    padding,
                    Self::join_row(row),
                    padding,
                    q1,
                    q2,
                    self.row_r(index)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self
            .rows
            .iter()
            .map(|row| format!("{}{}", self.padding(row), Self::join_row(row)))
            .collect();
        write!(f, "{}", lines.join("\n"))
    }
}
