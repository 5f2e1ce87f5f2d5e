//! Canonical memory-edge navigation
//!
//! Every memory cell lives on an edge between two hexagons. An edge can be
//! named from either side, so only the East, NorthEast and SouthEast edges of
//! a hexagon are ever used as keys; the transitions below rewrite every move
//! into that canonical form. The `clockwise` flag records which way along the
//! edge the pointer is facing and only influences where the next move lands.

use crate::grid::{AxialPoint, Direction};

/// Key of a stored memory edge
pub type EdgeKey = (AxialPoint, Direction);

/// The memory pointer: an edge plus an orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemoryPointer {
    pub point: AxialPoint,
    /// Always one of East, NorthEast or SouthEast
    pub dir: Direction,
    pub clockwise: bool,
}

impl Default for MemoryPointer {
    fn default() -> Self {
        MemoryPointer {
            point: AxialPoint::ORIGIN,
            dir: Direction::East,
            clockwise: false,
        }
    }
}

impl MemoryPointer {
    pub fn new(point: AxialPoint, dir: Direction, clockwise: bool) -> Self {
        MemoryPointer {
            point,
            dir,
            clockwise,
        }
    }

    pub fn key(self) -> EdgeKey {
        (self.point, self.dir)
    }

    /// Same edge, facing the other way
    pub fn reversed(self) -> Self {
        MemoryPointer {
            clockwise: !self.clockwise,
            ..self
        }
    }

    /// The left neighbour edge
    pub fn left(self) -> Self {
        let MemoryPointer {
            point,
            dir,
            clockwise: cw,
        } = self;

        match dir {
            Direction::NorthEast => MemoryPointer::new(
                point
                    + if cw {
                        AxialPoint::new(1, -1)
                    } else {
                        AxialPoint::new(0, -1)
                    },
                Direction::SouthEast,
                !cw,
            ),
            Direction::East => MemoryPointer::new(
                if cw { point + AxialPoint::new(0, 1) } else { point },
                Direction::NorthEast,
                cw,
            ),
            Direction::SouthEast => MemoryPointer::new(
                if cw { point + AxialPoint::new(-1, 1) } else { point },
                Direction::East,
                cw,
            ),
            // Non-canonical directions never reach the pointer
            _ => self,
        }
    }

    /// The right neighbour edge
    pub fn right(self) -> Self {
        let MemoryPointer {
            point,
            dir,
            clockwise: cw,
        } = self;

        match dir {
            Direction::NorthEast => MemoryPointer::new(
                if cw { point } else { point + AxialPoint::new(0, -1) },
                Direction::East,
                cw,
            ),
            Direction::East => MemoryPointer::new(
                if cw { point } else { point + AxialPoint::new(1, -1) },
                Direction::SouthEast,
                cw,
            ),
            Direction::SouthEast => MemoryPointer::new(
                point
                    + if cw {
                        AxialPoint::new(-1, 1)
                    } else {
                        AxialPoint::new(0, 1)
                    },
                Direction::NorthEast,
                !cw,
            ),
            _ => self,
        }
    }
}
