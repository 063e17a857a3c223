//! ASCII PLY export for sampled point clouds.
//!
//! Vertex-only PLY 1.0 with double-precision coordinates, readable by the
//! usual point-cloud viewers. Import is out of scope; the points file is
//! the round-trippable format.

use crate::DataError;
use conegen_core::Vec3;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Render a vertex-only ASCII PLY document.
pub fn format_ply(points: &[Vec3]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "ply");
    let _ = writeln!(out, "format ascii 1.0");
    let _ = writeln!(out, "element vertex {}", points.len());
    let _ = writeln!(out, "property double x");
    let _ = writeln!(out, "property double y");
    let _ = writeln!(out, "property double z");
    let _ = writeln!(out, "end_header");
    for p in points {
        let _ = writeln!(out, "{} {} {}", p.x, p.y, p.z);
    }
    out
}

/// Write the PLY file.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn save_ply(points: &[Vec3], path: &Path) -> Result<(), DataError> {
    fs::write(path, format_ply(points))?;
    debug!("Exported {} vertices to PLY", points.len());
    Ok(())
}
