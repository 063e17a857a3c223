//! Conegen Data Crate
//!
//! Plain-text persistence for cone parameters and sampled point sets, plus
//! ASCII PLY export for point-cloud viewers. This crate is console-agnostic
//! and owns all file error reporting; the core stays free of I/O.
//!
//! Format logic is pure string parsing/formatting; the `save_*`/`load_*`
//! functions are thin filesystem wrappers around it.

use thiserror::Error;

pub mod ply;
pub mod points;
pub mod settings;

pub use ply::{format_ply, save_ply};
pub use points::{format_points, load_points, parse_points, save_points};
pub use settings::{format_settings, load_settings, parse_settings, save_settings};

/// Errors produced by the persistence layer.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed data at line {line}: {reason}")]
    Malformed { line: usize, reason: String },
}
