//! Extreme segments: brute-force O(n³) correctness oracle.
//!
//! A directed pair is a hull edge iff every other point lies strictly on
//! one side of it or collinear within the segment; a collinear point off
//! the segment disqualifies the pair. Hull vertices are the union of edge
//! endpoints.

use crate::kernel::{coincident, point_on_segment, turn, GeomCfg, Point, Turn};

use super::{dedup_points, order_ccw, HullError};

pub(super) fn hull(points: &[Point], cfg: GeomCfg) -> Result<Vec<Point>, HullError> {
    let pts = dedup_points(points, cfg.eps);
    if pts.len() < 3 {
        return Ok(pts);
    }

    let mut out: Vec<Point> = Vec::new();
    for i in 0..pts.len() {
        for j in 0..pts.len() {
            if i == j {
                continue;
            }
            if is_hull_edge(pts[i], pts[j], i, j, &pts, cfg) {
                for p in [pts[i], pts[j]] {
                    if !out.iter().any(|&q| coincident(p, q, cfg.eps)) {
                        out.push(p);
                    }
                }
            }
        }
    }
    Ok(order_ccw(out))
}

fn is_hull_edge(a: Point, b: Point, i: usize, j: usize, pts: &[Point], cfg: GeomCfg) -> bool {
    let mut has_left = false;
    let mut has_right = false;
    for (k, &p) in pts.iter().enumerate() {
        if k == i || k == j {
            continue;
        }
        match turn(a, b, p, cfg.eps) {
            Turn::Left => has_left = true,
            Turn::Right => has_right = true,
            Turn::Colinear => {
                if !point_on_segment(p, a, b, cfg.eps) {
                    return false;
                }
            }
        }
        if has_left && has_right {
            return false;
        }
    }
    true
}
