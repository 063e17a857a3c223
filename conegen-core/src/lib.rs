//! Conegen Core Crate
//!
//! Geometry and sampling primitives for generating uniform random point
//! clouds inside a cone volume. This crate is I/O-agnostic: collaborators
//! consume the cone through its accessors and sampling calls and own their
//! own persistence and console reporting.

pub mod cone;
pub mod error;
pub mod frame;
pub mod vec3;

pub use cone::Cone;
pub use error::GeometryError;
pub use frame::Frame;
pub use vec3::Vec3;
