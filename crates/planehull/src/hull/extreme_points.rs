//! Extreme points: brute-force O(n⁴) correctness oracle.
//!
//! A point is a hull vertex iff no triple of other points has it inside or
//! on the boundary of their triangle. Reference code for cross-checking
//! the fast strategies on small inputs, not a production path.

use crate::kernel::{point_in_triangle, GeomCfg, Point, TriangleSite};

use super::{dedup_points, order_ccw, HullError};

pub(super) fn hull(points: &[Point], cfg: GeomCfg) -> Result<Vec<Point>, HullError> {
    let pts = dedup_points(points, cfg.eps);
    if pts.len() <= 3 {
        return Ok(pts);
    }

    let mut out: Vec<Point> = Vec::new();
    for (idx, &p) in pts.iter().enumerate() {
        if is_extreme(idx, p, &pts, cfg) {
            out.push(p);
        }
    }
    Ok(order_ccw(out))
}

fn is_extreme(idx: usize, p: Point, pts: &[Point], cfg: GeomCfg) -> bool {
    for i in 0..pts.len() {
        if i == idx {
            continue;
        }
        for j in (i + 1)..pts.len() {
            if j == idx {
                continue;
            }
            for k in (j + 1)..pts.len() {
                if k == idx {
                    continue;
                }
                if point_in_triangle(p, pts[i], pts[j], pts[k], cfg.eps) != TriangleSite::Outside {
                    return false;
                }
            }
        }
    }
    true
}
