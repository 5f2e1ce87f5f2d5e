//! The six hex directions and their reflection tables
//!
//! Every mirror and branch opcode is a pure function from the incoming
//! direction to the outgoing one. The tables below are the whole of the
//! language's control-flow geometry; nothing validates them at runtime.

use super::point::AxialPoint;
use std::fmt;

/// One of the six directions around a hexagon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    East,
    SouthEast,
    SouthWest,
    West,
    NorthWest,
    NorthEast,
}

impl Direction {
    /// All directions, clockwise from East
    pub const ALL: [Direction; 6] = [
        Direction::East,
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
        Direction::NorthEast,
    ];

    /// Unit displacement for one step in this direction
    pub const fn vector(self) -> AxialPoint {
        match self {
            Direction::East => AxialPoint::new(1, 0),
            Direction::SouthEast => AxialPoint::new(0, 1),
            Direction::SouthWest => AxialPoint::new(-1, 1),
            Direction::West => AxialPoint::new(-1, 0),
            Direction::NorthWest => AxialPoint::new(0, -1),
            Direction::NorthEast => AxialPoint::new(1, -1),
        }
    }

    pub fn reflect_at_slash(self) -> Direction {
        match self {
            Direction::East => Direction::NorthWest,
            Direction::SouthEast => Direction::West,
            Direction::SouthWest => Direction::SouthWest,
            Direction::West => Direction::SouthEast,
            Direction::NorthWest => Direction::East,
            Direction::NorthEast => Direction::NorthEast,
        }
    }

    pub fn reflect_at_backslash(self) -> Direction {
        match self {
            Direction::East => Direction::SouthWest,
            Direction::SouthEast => Direction::SouthEast,
            Direction::SouthWest => Direction::East,
            Direction::West => Direction::NorthEast,
            Direction::NorthWest => Direction::NorthWest,
            Direction::NorthEast => Direction::West,
        }
    }

    pub fn reflect_at_underscore(self) -> Direction {
        match self {
            Direction::East => Direction::East,
            Direction::SouthEast => Direction::NorthEast,
            Direction::SouthWest => Direction::NorthWest,
            Direction::West => Direction::West,
            Direction::NorthWest => Direction::SouthWest,
            Direction::NorthEast => Direction::SouthEast,
        }
    }

    pub fn reflect_at_pipe(self) -> Direction {
        match self {
            Direction::East => Direction::West,
            Direction::SouthEast => Direction::SouthWest,
            Direction::SouthWest => Direction::SouthEast,
            Direction::West => Direction::East,
            Direction::NorthWest => Direction::NorthEast,
            Direction::NorthEast => Direction::NorthWest,
        }
    }

    /// Branch at `<`: only an IP moving East consults the memory sign
    pub fn reflect_at_less_than(self, positive: bool) -> Direction {
        match self {
            Direction::East if positive => Direction::SouthEast,
            Direction::East => Direction::NorthEast,
            Direction::SouthEast => Direction::NorthWest,
            Direction::SouthWest => Direction::West,
            Direction::West => Direction::East,
            Direction::NorthWest => Direction::West,
            Direction::NorthEast => Direction::SouthWest,
        }
    }

    /// Branch at `>`: only an IP moving West consults the memory sign
    pub fn reflect_at_greater_than(self, positive: bool) -> Direction {
        match self {
            Direction::East => Direction::West,
            Direction::SouthEast => Direction::East,
            Direction::SouthWest => Direction::NorthEast,
            Direction::West if positive => Direction::NorthWest,
            Direction::West => Direction::SouthWest,
            Direction::NorthWest => Direction::SouthEast,
            Direction::NorthEast => Direction::East,
        }
    }

    /// Short compass name (`E`, `SE`, ...)
    pub fn name(self) -> &'static str {
        match self {
            Direction::East => "E",
            Direction::SouthEast => "SE",
            Direction::SouthWest => "SW",
            Direction::West => "W",
            Direction::NorthWest => "NW",
            Direction::NorthEast => "NE",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad() so that width specifiers like {:>2} apply
        f.pad(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::Direction::*;
    use super::*;

    fn table(reflect: fn(Direction) -> Direction) -> Vec<Direction> {
        Direction::ALL.iter().map(|d| reflect(*d)).collect()
    }

    #[test]
    fn test_slash_reflections() {
        assert_eq!(
            table(Direction::reflect_at_slash),
            vec![NorthWest, West, SouthWest, SouthEast, East, NorthEast]
        );
    }

    #[test]
    fn test_backslash_reflections() {
        assert_eq!(
            table(Direction::reflect_at_backslash),
            vec![SouthWest, SouthEast, East, NorthEast, NorthWest, West]
        );
    }

    #[test]
    fn test_underscore_reflections() {
        assert_eq!(
            table(Direction::reflect_at_underscore),
            vec![East, NorthEast, NorthWest, West, SouthWest, SouthEast]
        );
    }

    #[test]
    fn test_pipe_reflections() {
        assert_eq!(
            table(Direction::reflect_at_pipe),
            vec![West, SouthWest, SouthEast, East, NorthEast, NorthWest]
        );
    }

    #[test]
    fn test_less_than_branches() {
        let positive: Vec<_> = Direction::ALL
            .iter()
            .map(|d| d.reflect_at_less_than(true))
            .collect();
        let non_positive: Vec<_> = Direction::ALL
            .iter()
            .map(|d| d.reflect_at_less_than(false))
            .collect();
        assert_eq!(
            positive,
            vec![SouthEast, NorthWest, West, East, West, SouthWest]
        );
        assert_eq!(
            non_positive,
            vec![NorthEast, NorthWest, West, East, West, SouthWest]
        );
    }

    #[test]
    fn test_greater_than_branches() {
        let positive: Vec<_> = Direction::ALL
            .iter()
            .map(|d| d.reflect_at_greater_than(true))
            .collect();
        let non_positive: Vec<_> = Direction::ALL
            .iter()
            .map(|d| d.reflect_at_greater_than(false))
            .collect();
        assert_eq!(
            positive,
            vec![West, East, NorthEast, NorthWest, SouthEast, East]
        );
        assert_eq!(
            non_positive,
            vec![West, East, NorthEast, SouthWest, SouthEast, East]
        );
    }

    #[test]
    fn test_mirrors_are_involutions() {
        // Reflecting twice in the same mirror undoes the first reflection
        for d in Direction::ALL {
            assert_eq!(d.reflect_at_slash().reflect_at_slash(), d);
            assert_eq!(d.reflect_at_backslash().reflect_at_backslash(), d);
            assert_eq!(d.reflect_at_underscore().reflect_at_underscore(), d);
            assert_eq!(d.reflect_at_pipe().reflect_at_pipe(), d);
        }
    }

    #[test]
    fn test_vectors_are_unit_steps() {
        for d in Direction::ALL {
            assert_eq!(d.vector().distance_from_origin(), 1);
        }
        assert_eq!(East.vector() + West.vector(), AxialPoint::ORIGIN);
        assert_eq!(NorthEast.vector() + SouthWest.vector(), AxialPoint::ORIGIN);
        assert_eq!(NorthWest.vector() + SouthEast.vector(), AxialPoint::ORIGIN);
    }

    #[test]
    fn test_display_honours_width() {
        assert_eq!(format!("{:>2}", East), " E");
        assert_eq!(format!("{:>2}", NorthWest), "NW");
    }
}
