//! Error types for strict geometry validation.

use thiserror::Error;

/// Rejections produced by the strict constructors and validators.
///
/// The lenient API never returns these: degenerate inputs degrade to
/// degenerate geometry (zero normal, collapsed samples) instead of failing.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    #[error("cone radius must be positive and finite")]
    ZeroRadius,

    #[error("cone height must be positive and finite")]
    ZeroHeight,

    #[error("cone normal has zero or non-finite length")]
    DegenerateNormal,

    #[error("rotation axis has zero or non-finite length")]
    DegenerateAxis,
}
