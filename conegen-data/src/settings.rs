//! Cone parameter persistence.
//!
//! Format: a single line of whitespace-separated decimals,
//! `radius height cx cy cz nx ny nz`. Files written before the cone gained
//! an orientable axis carry only the first five numbers; those load with
//! the normal defaulting to +Z. No other layouts are accepted.

use crate::DataError;
use conegen_core::{Cone, Vec3};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Render the cone parameters as the settings line.
pub fn format_settings(cone: &Cone) -> String {
    let c = cone.center();
    let n = cone.normal();
    format!(
        "{} {} {} {} {} {} {} {}",
        cone.radius(),
        cone.height(),
        c.x,
        c.y,
        c.z,
        n.x,
        n.y,
        n.z
    )
}

/// Parse a settings line into a cone.
pub fn parse_settings(text: &str) -> Result<Cone, DataError> {
    let mut values = Vec::new();
    for token in text.split_whitespace() {
        let value: f64 = token.parse().map_err(|_| DataError::Malformed {
            line: 1,
            reason: format!("invalid number {:?}", token),
        })?;
        values.push(value);
    }

    let normal = match values.len() {
        5 => Vec3::Z,
        8 => Vec3::new(values[5], values[6], values[7]),
        n => {
            return Err(DataError::Malformed {
                line: 1,
                reason: format!("expected 5 or 8 values, found {}", n),
            });
        }
    };
    let center = Vec3::new(values[2], values[3], values[4]);

    Ok(Cone::new(values[0], values[1], center, normal))
}

/// Write the settings file.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn save_settings(cone: &Cone, path: &Path) -> Result<(), DataError> {
    fs::write(path, format_settings(cone))?;
    debug!("Saved settings: {}", cone);
    Ok(())
}

/// Read a settings file back into a cone.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn load_settings(path: &Path) -> Result<Cone, DataError> {
    let text = fs::read_to_string(path)?;
    let cone = parse_settings(&text)?;
    info!("Loaded settings: {}", cone);
    Ok(cone)
}
