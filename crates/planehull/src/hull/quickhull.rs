//! QuickHull: recursive farthest-point expansion from a leftmost/rightmost
//! baseline. Expected O(n log n), O(n²) on adversarial inputs.

use crate::kernel::{coincident, distance_to_line, turn, GeomCfg, Point, Turn};

use super::{dedup_points, HullError};

/// Partition by side of the baseline, then expand each side into an
/// ordered open chain. Sub-chains are returned by value and concatenated
/// by the caller, so no shared output list crosses the recursion.
///
/// Recursion depth is bounded by the input size on adversarial
/// (near-collinear) inputs; acceptable at the demonstration scales this
/// family targets.
pub(super) fn hull(points: &[Point], cfg: GeomCfg) -> Result<Vec<Point>, HullError> {
    let pts = dedup_points(points, cfg.eps);
    if pts.len() < 3 {
        return Ok(pts);
    }

    // Lexicographic extremes so a shared-x tie still yields a non-degenerate
    // baseline with every other point strictly between its endpoints.
    let mut leftmost = pts[0];
    let mut rightmost = pts[0];
    for &p in &pts {
        if (p.x, p.y) < (leftmost.x, leftmost.y) {
            leftmost = p;
        }
        if (p.x, p.y) > (rightmost.x, rightmost.y) {
            rightmost = p;
        }
    }

    let mut left_set: Vec<Point> = Vec::new();
    let mut right_set: Vec<Point> = Vec::new();
    for &p in &pts {
        if coincident(p, leftmost, cfg.eps) || coincident(p, rightmost, cfg.eps) {
            continue;
        }
        match turn(leftmost, rightmost, p, cfg.eps) {
            Turn::Left => left_set.push(p),
            Turn::Right => right_set.push(p),
            // On the baseline means strictly between the lexicographic
            // extremes: never a hull vertex.
            Turn::Colinear => {}
        }
    }

    let mut out = Vec::with_capacity(pts.len());
    out.push(leftmost);
    out.extend(expand(leftmost, rightmost, &left_set, cfg)?);
    out.push(rightmost);
    out.extend(expand(rightmost, leftmost, &right_set, cfg)?);
    Ok(out)
}

/// Ordered open chain of hull vertices strictly between `p1` and `p2`,
/// given the subset lying to the left of p1 → p2. The farthest point is a
/// hull vertex; it is excluded from both sub-partitions so each recursive
/// step strictly shrinks its subset.
fn expand(p1: Point, p2: Point, set: &[Point], cfg: GeomCfg) -> Result<Vec<Point>, HullError> {
    if set.is_empty() {
        return Ok(Vec::new());
    }

    let mut farthest = set[0];
    let mut best = f64::NEG_INFINITY;
    for &p in set {
        let d = distance_to_line(p1, p2, p, cfg.eps)?;
        if d > best {
            best = d;
            farthest = p;
        }
    }

    let mut outside1: Vec<Point> = Vec::new();
    let mut outside2: Vec<Point> = Vec::new();
    for &p in set {
        if coincident(p, farthest, cfg.eps) {
            continue;
        }
        if turn(p1, farthest, p, cfg.eps) == Turn::Left {
            outside1.push(p);
        } else if turn(farthest, p2, p, cfg.eps) == Turn::Left {
            outside2.push(p);
        }
    }

    let mut chain = expand(p1, farthest, &outside1, cfg)?;
    chain.push(farthest);
    chain.extend(expand(farthest, p2, &outside2, cfg)?);
    Ok(chain)
}
