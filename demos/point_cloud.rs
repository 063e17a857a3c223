//! Point cloud generation example
//!
//! Samples a uniform cloud from a tilted cone, rotates the cone, resamples,
//! and writes both clouds as PLY for any point-cloud viewer.
//!
//! Usage:
//!   cargo run --example point_cloud -- [count]

use conegen_core::{Cone, Vec3};
use conegen_data::save_ply;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::f64::consts::FRAC_PI_2;
use std::path::Path;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let count = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(5_000);

    let mut cone = Cone::new(1.0, 2.0, Vec3::ZERO, Vec3::new(0.5, 0.0, 1.0));
    let mut rng = StdRng::seed_from_u64(2024);

    println!("{cone}");
    let upright = cone.sample_points(count, &mut rng);

    cone.rotate(Vec3::Y, FRAC_PI_2);
    println!("after quarter turn about +Y: {cone}");
    let tipped = cone.sample_points(count, &mut rng);

    if let Err(err) = save_ply(&upright, Path::new("cone_upright.ply"))
        .and_then(|_| save_ply(&tipped, Path::new("cone_tipped.ply")))
    {
        eprintln!("point_cloud failed: {err}");
        std::process::exit(1);
    }

    println!(
        "wrote {} + {} vertices to cone_upright.ply / cone_tipped.ply",
        upright.len(),
        tipped.len()
    );
}
