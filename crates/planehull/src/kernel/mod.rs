//! Geometric primitives and the shared orientation predicate kernel.
//!
//! Purpose
//! - Provide the `Point`/`Line`/`Polygon` value types and the single
//!   epsilon-tolerant turn classifier (plus derived tests) that every hull
//!   strategy depends on.
//!
//! Why strict routing
//! - Strategies must not re-implement cross-product sign logic ad hoc; a
//!   predicate that disagrees with the dedup tolerance produces wrong hulls
//!   on collinear inputs. See `GeomCfg` for the uniform tolerance policy.

mod predicates;
mod types;

pub use predicates::{coincident, distance_to_line, point_in_triangle, point_on_segment, turn};
pub use types::{GeomCfg, GeomError, Line, Point, Polygon, TriangleSite, Turn};
