//! Axial hex coordinates
//!
//! A hexagon cell is addressed by two of the three cube coordinates, `q` and `r`.
//! The third, `y = -q - r`, is derived on demand and is only needed for the
//! "is this inside the hexagon" test.

use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// A position in a hex grid using the axial convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AxialPoint {
    pub q: i32,
    pub r: i32,
}

impl AxialPoint {
    pub const ORIGIN: AxialPoint = AxialPoint { q: 0, r: 0 };

    pub const fn new(q: i32, r: i32) -> Self {
        AxialPoint { q, r }
    }

    /// The implied third coordinate
    pub const fn y(self) -> i32 {
        -self.q - self.r
    }

    /// Largest of |q|, |y|, |r|; a point lies inside a hexagon of side `size`
    /// exactly when this is below `size`
    pub fn distance_from_origin(self) -> i32 {
        self.q.abs().max(self.y().abs()).max(self.r.abs())
    }
}

impl Add for AxialPoint {
    type Output = AxialPoint;

    fn add(self, rhs: AxialPoint) -> AxialPoint {
        AxialPoint::new(self.q + rhs.q, self.r + rhs.r)
    }
}

impl AddAssign for AxialPoint {
    fn add_assign(&mut self, rhs: AxialPoint) {
        *self = *self + rhs;
    }
}

impl Sub for AxialPoint {
    type Output = AxialPoint;

    fn sub(self, rhs: AxialPoint) -> AxialPoint {
        AxialPoint::new(self.q - rhs.q, self.r - rhs.r)
    }
}

impl SubAssign for AxialPoint {
    fn sub_assign(&mut self, rhs: AxialPoint) {
        *self = *self - rhs;
    }
}

impl fmt::Display for AxialPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(Q: {:>3}, R: {:>3})", self.q, self.r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_third_coordinate() {
        let p = AxialPoint::new(2, -5);
        assert_eq!(p.y(), 3);
        assert_eq!(p.distance_from_origin(), 5);
        assert_eq!(AxialPoint::ORIGIN.distance_from_origin(), 0);
    }

    #[test]
    fn test_vector_arithmetic() {
        let mut p = AxialPoint::new(1, -1);
        p += AxialPoint::new(0, 1);
        assert_eq!(p, AxialPoint::new(1, 0));
        p -= AxialPoint::new(2, 2);
        assert_eq!(p, AxialPoint::new(-1, -2));
        assert_eq!(p - p, AxialPoint::ORIGIN);
    }

    #[test]
    fn test_display_is_column_aligned() {
        assert_eq!(AxialPoint::new(-1, 12).to_string(), "(Q:  -1, R:  12)");
    }
}
