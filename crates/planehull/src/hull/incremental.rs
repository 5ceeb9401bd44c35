//! Incremental hull: one sorted sweep building both chains into a single
//! combined list with an explicit lower-chain start index.

use crate::kernel::{turn, GeomCfg, Point, Turn};

use super::{dedup_points, sort_xy, HullError};

/// Same strict-left discard rule as the Graham scan, but accumulated into
/// one list: upper chain left-to-right, then lower chain right-to-left
/// guarded by `lower_start` so repairs never eat into the finished chain.
pub(super) fn hull(points: &[Point], cfg: GeomCfg) -> Result<Vec<Point>, HullError> {
    let mut pts = dedup_points(points, cfg.eps);
    if pts.len() < 3 {
        return Ok(pts);
    }
    sort_xy(&mut pts);

    let mut hull: Vec<Point> = vec![pts[0], pts[1]];
    for &p in &pts[2..] {
        hull.push(p);
        while hull.len() > 2 && !trailing_left_turn(&hull, cfg) {
            hull.remove(hull.len() - 2);
        }
    }

    let lower_start = hull.len();
    for &p in pts[..pts.len() - 1].iter().rev() {
        hull.push(p);
        while hull.len() > lower_start + 1 && !trailing_left_turn(&hull, cfg) {
            hull.remove(hull.len() - 2);
        }
    }

    // The reverse sweep re-appends the first sorted point; trim it.
    hull.pop();
    Ok(hull)
}

#[inline]
fn trailing_left_turn(hull: &[Point], cfg: GeomCfg) -> bool {
    let n = hull.len();
    turn(hull[n - 3], hull[n - 2], hull[n - 1], cfg.eps) == Turn::Left
}
