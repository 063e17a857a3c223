//! Point set persistence: one `x y z` line per point.
//!
//! The format matches what external plotting tools ingest with a plain
//! whitespace loader. Blank lines are skipped on read.

use crate::DataError;
use conegen_core::Vec3;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Render points as one `x y z` line each.
pub fn format_points(points: &[Vec3]) -> String {
    let mut out = String::new();
    for p in points {
        // write! to a String cannot fail
        let _ = writeln!(out, "{} {} {}", p.x, p.y, p.z);
    }
    out
}

/// Parse a points file body back into a collection.
pub fn parse_points(text: &str) -> Result<Vec<Vec3>, DataError> {
    let mut points = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut coords = [0.0f64; 3];
        let mut tokens = line.split_whitespace();
        for slot in &mut coords {
            let token = tokens.next().ok_or_else(|| DataError::Malformed {
                line: idx + 1,
                reason: "expected 3 coordinates".to_string(),
            })?;
            *slot = token.parse().map_err(|_| DataError::Malformed {
                line: idx + 1,
                reason: format!("invalid number {:?}", token),
            })?;
        }
        if tokens.next().is_some() {
            return Err(DataError::Malformed {
                line: idx + 1,
                reason: "expected 3 coordinates".to_string(),
            });
        }
        points.push(Vec3::new(coords[0], coords[1], coords[2]));
    }
    Ok(points)
}

/// Write the points file.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn save_points(points: &[Vec3], path: &Path) -> Result<(), DataError> {
    fs::write(path, format_points(points))?;
    debug!("Saved {} points", points.len());
    Ok(())
}

/// Read a points file.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn load_points(path: &Path) -> Result<Vec<Vec3>, DataError> {
    let text = fs::read_to_string(path)?;
    let points = parse_points(&text)?;
    info!("Loaded {} points", points.len());
    Ok(points)
}
