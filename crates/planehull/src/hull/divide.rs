//! Divide & conquer: farthest-point splitting materialized into one owned
//! hull list, driven by an explicit work-list instead of call recursion.

use crate::kernel::{
    coincident, distance_to_line, point_on_segment, turn, GeomCfg, Point, Turn,
};

use super::{dedup_points, HullError};

/// Each work item is a directed sub-problem (start, end, candidates): the
/// farthest candidate from the baseline is inserted into the hull list
/// immediately before `end`, preserving cyclic order, and the two derived
/// sub-problems are pushed back. Memory is bounded by the input since the
/// candidate sets partition strictly.
///
/// Insertion can leave redundant points on a straight edge, so a collinear
/// cleanup pass runs over the finished loop.
pub(super) fn hull(points: &[Point], cfg: GeomCfg) -> Result<Vec<Point>, HullError> {
    let pts = dedup_points(points, cfg.eps);
    if pts.len() < 3 {
        return Ok(pts);
    }

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

    let mut above: Vec<Point> = Vec::new();
    let mut below: Vec<Point> = Vec::new();
    for &p in &pts {
        match turn(leftmost, rightmost, p, cfg.eps) {
            Turn::Left => above.push(p),
            Turn::Right => below.push(p),
            Turn::Colinear => {}
        }
    }

    let mut hull = vec![leftmost, rightmost];
    let mut work: Vec<(Point, Point, Vec<Point>)> = vec![
        (leftmost, rightmost, above),
        (rightmost, leftmost, below),
    ];
    while let Some((start, end, set)) = work.pop() {
        if set.is_empty() {
            continue;
        }

        let mut farthest = set[0];
        let mut best = f64::NEG_INFINITY;
        for &p in &set {
            let d = distance_to_line(start, end, p, cfg.eps)?;
            if d > best {
                best = d;
                farthest = p;
            }
        }

        // Deduplicated input guarantees exactly one occurrence of `end`.
        let at = hull
            .iter()
            .position(|&q| coincident(q, end, cfg.eps))
            .unwrap_or(hull.len());
        hull.insert(at, farthest);

        let mut outside1: Vec<Point> = Vec::new();
        let mut outside2: Vec<Point> = Vec::new();
        for &p in &set {
            if coincident(p, farthest, cfg.eps) {
                continue;
            }
            if turn(start, farthest, p, cfg.eps) == Turn::Left {
                outside1.push(p);
            } else if turn(farthest, end, p, cfg.eps) == Turn::Left {
                outside2.push(p);
            }
        }
        work.push((start, farthest, outside1));
        work.push((farthest, end, outside2));
    }

    let removed = remove_collinear(&mut hull, cfg.eps);
    if removed > 0 {
        tracing::debug!(removed, "divide-and-conquer collinear cleanup");
    }
    Ok(hull)
}

/// Drop every hull point that lies on the segment between its cyclic
/// neighbors. Returns the number of points removed.
fn remove_collinear(hull: &mut Vec<Point>, eps: f64) -> usize {
    let before = hull.len();
    let mut i = 0;
    while hull.len() >= 3 && i < hull.len() {
        let prev = hull[(i + hull.len() - 1) % hull.len()];
        let next = hull[(i + 1) % hull.len()];
        if point_on_segment(hull[i], prev, next, eps) {
            hull.remove(i);
        } else {
            i += 1;
        }
    }
    before - hull.len()
}
