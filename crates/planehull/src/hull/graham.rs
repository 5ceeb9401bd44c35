//! Graham scan: sort once, build lower and upper chains. O(n log n).

use crate::kernel::{turn, GeomCfg, Point, Turn};

use super::{dedup_points, sort_xy, HullError};

/// Lower + upper monotone chains with the strict-left-turn discard rule.
/// Collinear triples classify through the kernel, so near-collinear
/// boundary points are dropped consistently with the other strategies.
pub(super) fn hull(points: &[Point], cfg: GeomCfg) -> Result<Vec<Point>, HullError> {
    let mut pts = dedup_points(points, cfg.eps);
    if pts.len() < 3 {
        return Ok(pts);
    }
    sort_xy(&mut pts);

    let mut lower: Vec<Point> = Vec::with_capacity(pts.len());
    for &p in &pts {
        while lower.len() >= 2
            && turn(lower[lower.len() - 2], lower[lower.len() - 1], p, cfg.eps) != Turn::Left
        {
            lower.pop();
        }
        lower.push(p);
    }

    let mut upper: Vec<Point> = Vec::with_capacity(pts.len());
    for &p in pts.iter().rev() {
        while upper.len() >= 2
            && turn(upper[upper.len() - 2], upper[upper.len() - 1], p, cfg.eps) != Turn::Left
        {
            upper.pop();
        }
        upper.push(p);
    }

    // Each chain ends on the other chain's first point; drop both.
    lower.pop();
    upper.pop();
    lower.extend(upper);
    Ok(lower)
}
