//! Host-side demo: run every strategy on one sampled cloud and print the
//! labeled hulls. `RUST_LOG=planehull=trace` shows the dispatch events.

use planehull::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cloud = draw_point_cloud(
        CloudCfg {
            count: 24,
            extent: 10.0,
            grid_step: 1.0,
        },
        ReplayToken { seed: 7, index: 0 },
    );
    println!("input: {} points", cloud.len());

    let input = GeomSet::from_points(cloud);
    let cfg = GeomCfg::default();
    for strategy in Strategy::ALL {
        match strategy.compute(&input, cfg) {
            Ok(out) => {
                let verts: Vec<String> = out
                    .points
                    .iter()
                    .map(|p| format!("({}, {})", p.x, p.y))
                    .collect();
                println!("{strategy}: {} vertices: {}", out.points.len(), verts.join(" "));
            }
            Err(err) => println!("{strategy}: error: {err}"),
        }
    }
}
