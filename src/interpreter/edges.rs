//! Boundary handling for instruction pointers
//!
//! An IP that steps off the hexagon re-enters on the opposite side. Leaving
//! through a flat edge is purely geometric. Leaving through a corner (two
//! coordinates out of range at once) picks one of the two adjacent edges
//! based on the sign of the current memory value.

use crate::grid::{AxialPoint, Direction};

/// Position of an IP after it moved to `point` travelling in `dir`
///
/// `positive` is only consulted when the move went through a corner, so the
/// memory lookup behind it is skipped for ordinary moves.
pub fn wrap(
    point: AxialPoint,
    dir: Direction,
    size: usize,
    positive: impl FnOnce() -> bool,
) -> AxialPoint {
    if size == 1 {
        return AxialPoint::ORIGIN;
    }

    let size = size as i32;
    if point.distance_from_origin() < size {
        return point;
    }

    let x_bigger = point.q.abs() >= size;
    let y_bigger = point.y().abs() >= size;
    let z_bigger = point.r.abs() >= size;

    // Re-enter relative to the cell the IP just left
    let AxialPoint { q, r } = point - dir.vector();
    let across_xy = AxialPoint::new(q + r, -r);
    let across_yz = AxialPoint::new(-q, q + r);
    let across_zx = AxialPoint::new(-r, -q);

    if !x_bigger && !y_bigger {
        across_xy
    } else if !y_bigger && !z_bigger {
        across_yz
    } else if !z_bigger && !x_bigger {
        across_zx
    } else {
        let is_positive = positive();
        if (!x_bigger && !is_positive) || (!y_bigger && is_positive) {
            across_xy
        } else if !y_bigger || (!z_bigger && is_positive) {
            across_yz
        } else if !z_bigger || !x_bigger {
            across_zx
        } else {
            point - dir.vector()
        }
    }
}
