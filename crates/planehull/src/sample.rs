//! Deterministic random point clouds (replay tokens).
//!
//! Purpose
//! - Provide a small, reproducible sampler for the property tests and
//!   benchmarks that exercise the hull family. Determinism uses a replay
//!   token `(seed, index)` mixed into a single RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::kernel::Point;

/// Point-cloud sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub count: usize,
    /// Half-width of the centered sampling square.
    pub extent: f64,
    /// Snap coordinates to this grid step; exercises duplicate points and
    /// collinear runs deterministically. `<= 0` disables snapping.
    pub grid_step: f64,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: 32,
            extent: 10.0,
            grid_step: 0.0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw `cfg.count` points uniformly from the centered square, optionally
/// snapped to a grid.
pub fn draw_point_cloud(cfg: CloudCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let e = cfg.extent.max(1e-9);
    (0..cfg.count)
        .map(|_| {
            let mut x = rng.gen_range(-e..=e);
            let mut y = rng.gen_range(-e..=e);
            if cfg.grid_step > 0.0 {
                x = (x / cfg.grid_step).round() * cfg.grid_step;
                y = (y / cfg.grid_step).round() * cfg.grid_step;
            }
            Vector2::new(x, y)
        })
        .collect()
}
