//! Planar convex hulls via a family of interchangeable strategies.
//!
//! Seven algorithms share one epsilon-tolerant orientation kernel and one
//! dispatch contract: divide & conquer, quickhull, incremental, Graham
//! scan, Jarvis march, and two brute-force extreme-feature oracles. All
//! agree on the hull boundary up to vertex ordering and rotational sense.
//!
//! Hosts pick a [`hull::Strategy`] variant and call `compute` on a
//! [`hull::GeomSet`]; see the `hull_demo` example for the host-side shape.
//! The library emits `tracing` events but installs no subscriber.

pub mod hull;
pub mod kernel;
pub mod sample;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use hull::{GeomSet, HullError, Strategy};
pub use kernel::{GeomCfg, GeomError, Line, Point, Polygon, TriangleSite, Turn};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::hull::{GeomSet, HullError, Strategy};
    pub use crate::kernel::{
        coincident, distance_to_line, point_in_triangle, point_on_segment, turn, GeomCfg,
        GeomError, Line, Point, Polygon, TriangleSite, Turn,
    };
    pub use crate::sample::{draw_point_cloud, CloudCfg, ReplayToken};
    pub use nalgebra::Vector2 as Vec2;
}
