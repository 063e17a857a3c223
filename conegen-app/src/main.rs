//! Conegen Application
//!
//! Interactive console generator for uniform random point clouds inside a
//! cone volume.
//!
//! Features:
//! - cone setup from the command line
//! - menu-driven point inspection and editing
//! - rotation and reparameterization with resampling
//! - plain-text and PLY output for external viewers

mod app;
mod menu;

use clap::Parser;
use std::path::PathBuf;

/// Conegen - uniform random points in a cone volume
#[derive(Parser, Debug)]
#[command(name = "conegen")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Base radius of the cone
    #[arg(short, long, default_value_t = 1.0)]
    radius: f64,

    /// Height of the cone along its axis
    #[arg(long, default_value_t = 2.0)]
    height: f64,

    /// Base center coordinates
    #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"], allow_negative_numbers = true)]
    center: Option<Vec<f64>>,

    /// Axis direction from base toward apex (normalized before use)
    #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"], allow_negative_numbers = true)]
    normal: Option<Vec<f64>>,

    /// Number of points in the initial batch (prompted when omitted)
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// RNG seed for reproducible clouds
    #[arg(long)]
    seed: Option<u64>,

    /// Output path for sampled points
    #[arg(long, default_value = "points.txt")]
    points_file: PathBuf,

    /// Output path for cone settings
    #[arg(long, default_value = "settings.dat")]
    settings_file: PathBuf,

    /// Output path for PLY export
    #[arg(long, default_value = "points.ply")]
    ply_file: PathBuf,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = app::run(args) {
        eprintln!("Application error: {}", e);
        std::process::exit(1);
    }
}
