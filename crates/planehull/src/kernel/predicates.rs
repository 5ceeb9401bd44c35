//! Orientation predicate kernel.
//!
//! Purpose
//! - Single source of geometric truth: every "which side", "is convex" and
//!   sort-order decision in the hull family routes through `turn` or one of
//!   the derived tests below, so epsilon handling stays consistent.
//!
//! Why one epsilon
//! - An inconsistent predicate silently produces wrong hulls or infinite
//!   recursion in the splitting strategies; tolerances therefore live in
//!   `GeomCfg` and are threaded through rather than re-derived per call
//!   site.

use super::types::{GeomError, Point, TriangleSite, Turn};

/// Classify the turn a → b → c from the sign of the cross product
/// `(b-a) × (c-a)`. Magnitudes below `eps` classify as `Colinear`.
#[inline]
pub fn turn(a: Point, b: Point, c: Point, eps: f64) -> Turn {
    let cross = (b - a).perp(&(c - a));
    if cross.abs() < eps {
        Turn::Colinear
    } else if cross > 0.0 {
        Turn::Left
    } else {
        Turn::Right
    }
}

/// Tolerance-aware point equality; the dedup counterpart of `turn`'s
/// collinearity threshold.
#[inline]
pub fn coincident(p: Point, q: Point, eps: f64) -> bool {
    (p - q).norm() < eps
}

/// Perpendicular distance from `p` to the line through `a` and `b`.
///
/// Errors with `UndefinedGeometry` when `a` and `b` coincide within `eps`
/// instead of dividing by (near-)zero.
#[inline]
pub fn distance_to_line(a: Point, b: Point, p: Point, eps: f64) -> Result<f64, GeomError> {
    let len = (b - a).norm();
    if !len.is_finite() || len < eps {
        return Err(GeomError::UndefinedGeometry);
    }
    Ok((b - a).perp(&(p - a)).abs() / len)
}

/// Whether `p` lies on the closed segment [a, b] (collinear and within the
/// segment's bounding range, both up to `eps`).
pub fn point_on_segment(p: Point, a: Point, b: Point, eps: f64) -> bool {
    if turn(a, b, p, eps) != Turn::Colinear {
        return false;
    }
    p.x >= a.x.min(b.x) - eps
        && p.x <= a.x.max(b.x) + eps
        && p.y >= a.y.min(b.y) - eps
        && p.y <= a.y.max(b.y) + eps
}

/// Classify `p` against triangle (a, b, c).
///
/// Winding of the triangle is irrelevant; collinear-degenerate triangles
/// classify only `Boundary` or `Outside`.
pub fn point_in_triangle(p: Point, a: Point, b: Point, c: Point, eps: f64) -> TriangleSite {
    let mut has_left = false;
    let mut has_right = false;
    let mut on_edge = false;
    for (u, v) in [(a, b), (b, c), (c, a)] {
        match turn(u, v, p, eps) {
            Turn::Left => has_left = true,
            Turn::Right => has_right = true,
            Turn::Colinear => {
                // On the edge's carrier line but beyond the segment means
                // outside the (convex) triangle.
                if point_on_segment(p, u, v, eps) {
                    on_edge = true;
                } else {
                    return TriangleSite::Outside;
                }
            }
        }
    }
    if has_left && has_right {
        TriangleSite::Outside
    } else if on_edge {
        TriangleSite::Boundary
    } else {
        TriangleSite::Inside
    }
}
