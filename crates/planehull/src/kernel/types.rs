//! Basic planar types and tolerances shared by every hull strategy.
//!
//! - `GeomCfg`: centralizes the single epsilon used for both point
//!   coincidence and orientation classification.
//! - `Point`/`Line`/`Polygon`: value types flowing through the dispatch
//!   contract.
//! - `Turn`/`TriangleSite`: predicate results.
//!
//! Code cross-refs: `predicates::{turn, distance_to_line, point_on_segment,
//! point_in_triangle}`, `hull::Strategy`.

use nalgebra::Vector2;

/// Planar point. Plain `Vector2` keeps the kernel arithmetic direct and the
/// exact `PartialEq` semantics of the coordinates; tolerance-aware
/// comparisons go through `predicates::coincident`.
pub type Point = Vector2<f64>;

/// Geometry configuration (tolerance).
///
/// One epsilon serves both coincidence and orientation so that dedup and
/// turn classification can never disagree about whether two points are the
/// same or three points are collinear.
#[derive(Clone, Copy, Debug)]
pub struct GeomCfg {
    pub eps: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self { eps: 1e-9 }
    }
}

/// Directed segment from `start` to `end`.
///
/// Direction matters for turn classification; `same_segment` compares
/// direction-insensitively.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

impl Line {
    #[inline]
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Undirected equality up to `eps`.
    #[inline]
    pub fn same_segment(&self, other: &Line, eps: f64) -> bool {
        let fwd = super::coincident(self.start, other.start, eps)
            && super::coincident(self.end, other.end, eps);
        let rev = super::coincident(self.start, other.end, eps)
            && super::coincident(self.end, other.start, eps);
        fwd || rev
    }
}

/// Ordered closed boundary of `Line`s. Carried through the dispatch
/// contract for peer strategies; never consumed by the hull family.
#[derive(Clone, Debug, Default)]
pub struct Polygon {
    pub edges: Vec<Line>,
}

impl Polygon {
    #[inline]
    pub fn new(edges: Vec<Line>) -> Self {
        Self { edges }
    }
}

/// Turn classification of the ordered triple (a, b, c).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    Left,
    Right,
    Colinear,
}

/// Position of a query point relative to a triangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriangleSite {
    Inside,
    Boundary,
    Outside,
}

/// Numerically undefined kernel operation.
#[derive(thiserror::Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeomError {
    /// A zero-length baseline reached a distance computation. Callers are
    /// expected to guard degenerate baselines before distance-based
    /// selection; surfacing the condition beats propagating NaN.
    #[error("baseline endpoints coincide; perpendicular distance is undefined")]
    UndefinedGeometry,
}
