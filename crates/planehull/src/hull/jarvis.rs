//! Jarvis march (gift wrapping). O(n·h) in the hull size h.

use crate::kernel::{coincident, turn, GeomCfg, Point, Turn};

use super::{dedup_points, HullError, Strategy};

/// Wrap from the lexicographically lowest point, always advancing along
/// the outermost edge: a candidate replaces the current pick when it lies
/// to the left of the ray, or when it is collinear and farther (so runs of
/// boundary-collinear points cannot stall the wrap).
pub(super) fn hull(points: &[Point], cfg: GeomCfg) -> Result<Vec<Point>, HullError> {
    let pts = dedup_points(points, cfg.eps);
    if pts.len() < 3 {
        return Ok(pts);
    }

    let start = *pts
        .iter()
        .min_by(|a, b| {
            match a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal) {
                std::cmp::Ordering::Equal => {
                    a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal)
                }
                o => o,
            }
        })
        .unwrap_or(&pts[0]);

    let mut hull: Vec<Point> = Vec::new();
    let mut current = start;
    loop {
        hull.push(current);
        // A hull cannot have more vertices than input points; exceeding
        // that bound means the tie-breaking failed to advance.
        if hull.len() > pts.len() {
            return Err(HullError::AlgorithmFailure {
                strategy: Strategy::JarvisMarch.name(),
                steps: hull.len(),
            });
        }

        let mut next = match pts.iter().find(|&&p| !coincident(p, current, cfg.eps)) {
            Some(&p) => p,
            None => break,
        };
        for &candidate in &pts {
            if coincident(candidate, current, cfg.eps) {
                continue;
            }
            match turn(current, next, candidate, cfg.eps) {
                Turn::Left => next = candidate,
                Turn::Colinear => {
                    if (candidate - current).norm() > (next - current).norm() {
                        next = candidate;
                    }
                }
                Turn::Right => {}
            }
        }

        current = next;
        if coincident(current, start, cfg.eps) {
            break;
        }
    }
    Ok(hull)
}
