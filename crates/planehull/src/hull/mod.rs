//! Convex-hull strategy family and dispatch contract.
//!
//! Purpose
//! - Seven interchangeable algorithms behind one entry point: a host picks
//!   a `Strategy` variant and calls `compute` on a `GeomSet`. All
//!   strategies agree on the hull boundary up to vertex ordering and
//!   rotational sense.
//!
//! Why a closed enum
//! - The strategy set is fixed and small; a tagged variant dispatched by
//!   pattern match keeps the contract total and lets hosts enumerate
//!   `Strategy::ALL` for menus and cross-checking.
//!
//! Code cross-refs: `kernel::{turn, GeomCfg}`, per-strategy modules below.

use std::fmt;

use crate::kernel::{coincident, GeomCfg, GeomError, Line, Point, Polygon};

mod divide;
mod extreme_points;
mod extreme_segments;
mod graham;
mod incremental;
mod jarvis;
mod quickhull;

#[cfg(test)]
mod tests;

/// Input/output collections of the dispatch contract.
///
/// Hull strategies read `points` only; `lines` and `polygons` are reserved
/// for peer strategies (triangulation, segment intersection) that share
/// this contract shape.
#[derive(Clone, Debug, Default)]
pub struct GeomSet {
    pub points: Vec<Point>,
    pub lines: Vec<Line>,
    pub polygons: Vec<Polygon>,
}

impl GeomSet {
    #[inline]
    pub fn from_points(points: Vec<Point>) -> Self {
        Self {
            points,
            ..Self::default()
        }
    }
}

/// Conditions surfaced by a strategy. Degenerate inputs (< 3 points) are
/// not errors; they pass through per the dispatch contract.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum HullError {
    #[error(transparent)]
    UndefinedGeometry(#[from] GeomError),
    /// A loop or work-list exceeded its structurally-bounded step count.
    /// Fail-fast: this indicates a logic or input-model violation, not a
    /// transient fault, so nothing is retried.
    #[error("{strategy} failed to converge after {steps} steps")]
    AlgorithmFailure {
        strategy: &'static str,
        steps: usize,
    },
}

/// The closed set of hull strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    DivideAndConquer,
    QuickHull,
    Incremental,
    GrahamScan,
    JarvisMarch,
    ExtremePoints,
    ExtremeSegments,
}

impl Strategy {
    pub const ALL: [Strategy; 7] = [
        Strategy::DivideAndConquer,
        Strategy::QuickHull,
        Strategy::Incremental,
        Strategy::GrahamScan,
        Strategy::JarvisMarch,
        Strategy::ExtremePoints,
        Strategy::ExtremeSegments,
    ];

    /// Human-readable label for host display/selection; no semantic
    /// contract.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::DivideAndConquer => "Convex Hull - Divide & Conquer",
            Strategy::QuickHull => "Convex Hull - Quick Hull",
            Strategy::Incremental => "Convex Hull - Incremental",
            Strategy::GrahamScan => "Convex Hull - Graham Scan",
            Strategy::JarvisMarch => "Convex Hull - Jarvis March",
            Strategy::ExtremePoints => "Convex Hull - Extreme Points",
            Strategy::ExtremeSegments => "Convex Hull - Extreme Segments",
        }
    }

    /// Compute the hull of `input.points`.
    ///
    /// Contract
    /// - `input.lines` and `input.polygons` are ignored; input collections
    ///   are never mutated.
    /// - If the working set (deduplicated where the strategy deduplicates)
    ///   has fewer than 3 points, `points` passes through in order and the
    ///   other output collections stay empty.
    /// - DivideAndConquer and Incremental additionally emit the closed
    ///   hull edge loop in `lines`.
    pub fn compute(self, input: &GeomSet, cfg: GeomCfg) -> Result<GeomSet, HullError> {
        tracing::trace!(
            strategy = self.name(),
            points = input.points.len(),
            "hull dispatch"
        );
        let points = match self {
            Strategy::DivideAndConquer => divide::hull(&input.points, cfg)?,
            Strategy::QuickHull => quickhull::hull(&input.points, cfg)?,
            Strategy::Incremental => incremental::hull(&input.points, cfg)?,
            Strategy::GrahamScan => graham::hull(&input.points, cfg)?,
            Strategy::JarvisMarch => jarvis::hull(&input.points, cfg)?,
            Strategy::ExtremePoints => extreme_points::hull(&input.points, cfg)?,
            Strategy::ExtremeSegments => extreme_segments::hull(&input.points, cfg)?,
        };
        let lines = match self {
            Strategy::DivideAndConquer | Strategy::Incremental => closed_loop(&points),
            _ => Vec::new(),
        };
        Ok(GeomSet {
            points,
            lines,
            polygons: Vec::new(),
        })
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Closed edge loop of an ordered hull; empty below 3 vertices.
fn closed_loop(points: &[Point]) -> Vec<Line> {
    if points.len() < 3 {
        return Vec::new();
    }
    (0..points.len())
        .map(|i| Line::new(points[i], points[(i + 1) % points.len()]))
        .collect()
}

/// Drop coincident points, keeping first occurrences in input order.
fn dedup_points(points: &[Point], eps: f64) -> Vec<Point> {
    let mut out: Vec<Point> = Vec::with_capacity(points.len());
    for &p in points {
        if !out.iter().any(|&q| coincident(p, q, eps)) {
            out.push(p);
        }
    }
    out
}

/// Sort by (x, then y) ascending. Coordinates are finite by the input
/// contract, so the partial order never actually falls back to `Equal`.
fn sort_xy(points: &mut [Point]) {
    points.sort_by(|a, b| {
        match a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal) {
            std::cmp::Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal),
            o => o,
        }
    });
}

/// Order an unordered set of hull vertices counterclockwise around their
/// centroid. Valid for convex vertex sets, which is all the brute-force
/// strategies produce.
fn order_ccw(mut points: Vec<Point>) -> Vec<Point> {
    if points.len() < 3 {
        return points;
    }
    let centroid = points.iter().fold(Point::zeros(), |acc, p| acc + p) / points.len() as f64;
    points.sort_by(|p, q| {
        let ap = (p - centroid).y.atan2((p - centroid).x);
        let aq = (q - centroid).y.atan2((q - centroid).x);
        ap.partial_cmp(&aq).unwrap_or(std::cmp::Ordering::Equal)
    });
    points
}
