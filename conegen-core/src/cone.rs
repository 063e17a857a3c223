//! Right circular cone with uniform volume sampling.

use crate::error::GeometryError;
use crate::frame::Frame;
use crate::vec3::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use std::fmt;
use tracing::debug;

/// A right circular cone: a base disk of `radius` around `center` in the
/// plane perpendicular to `normal`, with the apex at
/// `center + normal * height`.
///
/// The stored `normal` is always the normalized input direction. Radius and
/// height are stored verbatim; negative or zero values are accepted and
/// produce degenerate sampling rather than an error. Use [`Cone::try_new`]
/// or [`Cone::validate`] when strict geometry is required.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cone {
    radius: f64,
    height: f64,
    center: Vec3,
    normal: Vec3,
}

impl Cone {
    /// Create a cone. The normal is normalized before storing; a zero input
    /// direction stores the zero vector and degenerates the cone.
    pub fn new(radius: f64, height: f64, center: Vec3, normal: Vec3) -> Self {
        Self {
            radius,
            height,
            center,
            normal: normal.normalize(),
        }
    }

    /// Strict constructor: rejects non-positive or non-finite radius and
    /// height and a zero or non-finite normal.
    pub fn try_new(
        radius: f64,
        height: f64,
        center: Vec3,
        normal: Vec3,
    ) -> Result<Self, GeometryError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(GeometryError::ZeroRadius);
        }
        if !height.is_finite() || height <= 0.0 {
            return Err(GeometryError::ZeroHeight);
        }
        if !normal.is_finite() || normal.length_squared() == 0.0 {
            return Err(GeometryError::DegenerateNormal);
        }
        Ok(Self::new(radius, height, center, normal))
    }

    /// Replace all parameters in place, with the same normalization
    /// contract as [`Cone::new`].
    pub fn set_params(&mut self, radius: f64, height: f64, center: Vec3, normal: Vec3) {
        self.radius = radius;
        self.height = height;
        self.center = center;
        self.normal = normal.normalize();
    }

    /// Rotate the cone about the world origin.
    ///
    /// Both the axis direction and the base center are rotated with the
    /// same axis/angle, so a cone away from the origin revolves around it
    /// rather than spinning in place. Callers wanting an in-place spin must
    /// translate the center to the origin first, rotate, and translate
    /// back. A zero axis leaves the cone untouched.
    pub fn rotate(&mut self, axis: Vec3, angle: f64) {
        self.normal = self.normal.rotate(axis, angle);
        self.center = self.center.rotate(axis, angle);
    }

    /// Strict rotation: rejects a zero or non-finite axis instead of
    /// silently doing nothing.
    pub fn try_rotate(&mut self, axis: Vec3, angle: f64) -> Result<(), GeometryError> {
        if !axis.is_finite() || axis.length_squared() == 0.0 {
            return Err(GeometryError::DegenerateAxis);
        }
        self.rotate(axis, angle);
        Ok(())
    }

    /// Check the current parameters against the strict contract.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(GeometryError::ZeroRadius);
        }
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(GeometryError::ZeroHeight);
        }
        if !self.normal.is_finite() || self.normal.length_squared() == 0.0 {
            return Err(GeometryError::DegenerateNormal);
        }
        Ok(())
    }

    /// Base radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Height along the axis from base to apex.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Center of the base disk.
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Unit axis direction from base toward apex (zero when degenerate).
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Apex position: `center + normal * height`.
    pub fn apex(&self) -> Vec3 {
        self.center + self.normal * self.height
    }

    /// Orthonormal basis with `z_axis` along the cone's axis. Rebuilt from
    /// the current normal on every call.
    pub fn frame(&self) -> Frame {
        Frame::from_normal(self.normal)
    }

    /// Radius of the circular section at height `z` above the base.
    ///
    /// A zero-height cone is treated as a flat disk: its only section is
    /// the full base.
    pub fn section_radius(&self, z: f64) -> f64 {
        if self.height == 0.0 {
            self.radius
        } else {
            self.radius * (1.0 - z / self.height)
        }
    }

    /// Draw one point uniformly distributed over the solid interior.
    ///
    /// The section area shrinks as `(1 - z/h)^2` toward the apex, so the
    /// height is drawn by inverse transform through the cube root,
    /// `z = h (1 - u^(1/3))`, which gives the volume-uniform marginal.
    /// Within the section disk the radius scales with `sqrt(v)` so points
    /// are uniform per unit area rather than per unit radius.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec3 {
        let u: f64 = rng.gen_range(0.0..1.0);
        let z = self.height * (1.0 - u.cbrt());
        let max_radius = self.section_radius(z);

        let angle = rng.gen_range(0.0..TAU);
        let v: f64 = rng.gen_range(0.0..1.0);
        let r = max_radius * v.sqrt();

        let local = Vec3::new(r * angle.cos(), r * angle.sin(), z);
        self.frame().to_world(local, self.center)
    }

    /// Sample exactly `count` points into a fresh collection.
    pub fn sample_points<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<Vec3> {
        let mut points = Vec::with_capacity(count);
        for _ in 0..count {
            points.push(self.sample(rng));
        }
        debug!("Sampled {} points from {}", points.len(), self);
        points
    }
}

impl fmt::Display for Cone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cone: radius={}, height={}, center={}, normal={}",
            self.radius, self.height, self.center, self.normal
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::f64::consts::FRAC_PI_2;

    const TOL: f64 = 1e-9;

    /// Height above the base and distance from the axis, both measured in
    /// the cone's own frame.
    fn axis_coords(cone: &Cone, p: Vec3) -> (f64, f64) {
        let rel = p - cone.center();
        let z = rel.dot(cone.normal());
        let radial = rel - cone.normal() * z;
        (z, radial.length())
    }

    #[test]
    fn test_samples_contained_in_tilted_cone() {
        let cone = Cone::new(
            1.5,
            2.0,
            Vec3::new(0.5, -1.0, 0.25),
            Vec3::new(1.0, 2.0, 3.0),
        );
        let mut rng = StdRng::seed_from_u64(7);
        for p in cone.sample_points(50_000, &mut rng) {
            let (z, d) = axis_coords(&cone, p);
            assert!(z >= -TOL && z <= cone.height() + TOL);
            assert!(d <= cone.section_radius(z) + TOL);
        }
    }

    #[test]
    fn test_height_distribution_matches_volume_cdf() {
        // For a uniform volume draw, P(z/h <= t) = 1 - (1-t)^3.
        let cone = Cone::new(1.0, 2.0, Vec3::ZERO, Vec3::Z);
        let mut rng = StdRng::seed_from_u64(42);
        let n = 100_000;
        let points = cone.sample_points(n, &mut rng);

        for t in [0.25, 0.5, 0.75] {
            let expected = 1.0 - (1.0 - t) * (1.0 - t) * (1.0 - t);
            let below = points
                .iter()
                .filter(|p| {
                    let (z, _) = axis_coords(&cone, **p);
                    z / cone.height() <= t
                })
                .count();
            let observed = below as f64 / n as f64;
            assert!(
                (observed - expected).abs() < 0.015,
                "t={}: observed {} expected {}",
                t,
                observed,
                expected
            );
        }

        // Mean of z/h is 1/4 for the (1-t)^2 density.
        let mean: f64 = points
            .iter()
            .map(|p| axis_coords(&cone, *p).0 / cone.height())
            .sum::<f64>()
            / n as f64;
        assert!((mean - 0.25).abs() < 0.01, "mean normalized height {}", mean);
    }

    #[test]
    fn test_radial_distribution_uniform_over_disk_area() {
        // Conditioned on any height, P(d/max_r <= r) = r^2. The ratio is
        // height-independent, so pooling all samples is valid.
        let cone = Cone::new(2.0, 1.0, Vec3::ZERO, Vec3::Z);
        let mut rng = StdRng::seed_from_u64(3);
        let n = 50_000;
        let points = cone.sample_points(n, &mut rng);

        for rho in [0.5f64, std::f64::consts::FRAC_1_SQRT_2] {
            let expected = rho * rho;
            let inside = points
                .iter()
                .filter(|p| {
                    let (z, d) = axis_coords(&cone, **p);
                    let max_r = cone.section_radius(z);
                    max_r > 0.0 && d / max_r <= rho
                })
                .count();
            let observed = inside as f64 / n as f64;
            assert!(
                (observed - expected).abs() < 0.015,
                "rho={}: observed {} expected {}",
                rho,
                observed,
                expected
            );
        }
    }

    #[test]
    fn test_zero_height_collapses_onto_base_plane() {
        let cone = Cone::new(1.0, 0.0, Vec3::new(0.0, 0.0, 3.0), Vec3::Z);
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..1_000 {
            let p = cone.sample(&mut rng);
            let (z, d) = axis_coords(&cone, p);
            assert!(z.abs() < TOL);
            assert!(d <= cone.radius() + TOL);
        }
    }

    #[test]
    fn test_zero_radius_collapses_onto_axis() {
        let cone = Cone::new(0.0, 2.0, Vec3::ZERO, Vec3::new(0.0, 1.0, 1.0));
        let mut rng = StdRng::seed_from_u64(13);
        for _ in 0..1_000 {
            let p = cone.sample(&mut rng);
            let (z, d) = axis_coords(&cone, p);
            assert!(d < TOL);
            assert!(z >= -TOL && z <= cone.height() + TOL);
        }
    }

    #[test]
    fn test_normal_stays_unit_after_mutations() {
        let mut cone = Cone::new(1.0, 1.0, Vec3::ZERO, Vec3::new(3.0, 0.0, 4.0));
        assert!((cone.normal().length() - 1.0).abs() < TOL);

        cone.set_params(2.0, 3.0, Vec3::X, Vec3::new(-1.0, 5.0, 0.5));
        assert!((cone.normal().length() - 1.0).abs() < TOL);

        cone.rotate(Vec3::new(1.0, 1.0, 0.0), 0.83);
        assert!((cone.normal().length() - 1.0).abs() < TOL);
    }

    #[test]
    fn test_rotation_composes_additively() {
        let base = Cone::new(1.0, 2.0, Vec3::new(0.3, -0.4, 1.0), Vec3::new(0.0, 1.0, 2.0));
        let axis = Vec3::new(1.0, -1.0, 0.5);

        let mut twice = base;
        twice.rotate(axis, 0.4);
        twice.rotate(axis, 0.9);

        let mut once = base;
        once.rotate(axis, 1.3);

        assert!((twice.normal() - once.normal()).length() < TOL);
        assert!((twice.apex() - once.apex()).length() < TOL);
    }

    #[test]
    fn test_rotate_quarter_turn_moves_axis_to_x() {
        let mut cone = Cone::new(1.0, 2.0, Vec3::ZERO, Vec3::Z);
        cone.rotate(Vec3::Y, FRAC_PI_2);
        assert!((cone.normal() - Vec3::X).length() < TOL);
        assert!((cone.apex() - Vec3::new(2.0, 0.0, 0.0)).length() < TOL);
    }

    #[test]
    fn test_rotate_revolves_center_around_origin() {
        let mut cone = Cone::new(1.0, 1.0, Vec3::new(2.0, 0.0, 0.0), Vec3::Z);
        cone.rotate(Vec3::Z, FRAC_PI_2);
        // The base center revolves around the world origin, by contract.
        assert!((cone.center() - Vec3::new(0.0, 2.0, 0.0)).length() < TOL);
        assert!((cone.normal() - Vec3::Z).length() < TOL);
    }

    #[test]
    fn test_rotate_zero_axis_is_noop() {
        let mut cone = Cone::new(1.0, 2.0, Vec3::new(1.0, 1.0, 1.0), Vec3::Z);
        let before = cone;
        cone.rotate(Vec3::ZERO, 1.0);
        assert_eq!(cone, before);
        assert_eq!(cone.try_rotate(Vec3::ZERO, 1.0), Err(GeometryError::DegenerateAxis));
    }

    #[test]
    fn test_strict_constructor_rejects_degenerate_inputs() {
        assert_eq!(
            Cone::try_new(0.0, 1.0, Vec3::ZERO, Vec3::Z).unwrap_err(),
            GeometryError::ZeroRadius
        );
        assert_eq!(
            Cone::try_new(1.0, -2.0, Vec3::ZERO, Vec3::Z).unwrap_err(),
            GeometryError::ZeroHeight
        );
        assert_eq!(
            Cone::try_new(1.0, 1.0, Vec3::ZERO, Vec3::ZERO).unwrap_err(),
            GeometryError::DegenerateNormal
        );
        assert_eq!(
            Cone::try_new(f64::NAN, 1.0, Vec3::ZERO, Vec3::Z).unwrap_err(),
            GeometryError::ZeroRadius
        );
        assert!(Cone::try_new(1.0, 1.0, Vec3::ZERO, Vec3::new(0.0, 0.0, 2.0)).is_ok());
    }

    #[test]
    fn test_validate_after_lenient_mutation() {
        let mut cone = Cone::new(1.0, 1.0, Vec3::ZERO, Vec3::Z);
        assert!(cone.validate().is_ok());
        cone.set_params(1.0, 1.0, Vec3::ZERO, Vec3::ZERO);
        assert_eq!(cone.validate(), Err(GeometryError::DegenerateNormal));
    }

    #[test]
    fn test_apex_and_accessors() {
        let cone = Cone::new(1.0, 2.0, Vec3::new(1.0, 0.0, 0.0), Vec3::Z);
        assert_eq!(cone.radius(), 1.0);
        assert_eq!(cone.height(), 2.0);
        assert!((cone.apex() - Vec3::new(1.0, 0.0, 2.0)).length() < TOL);
    }

    #[test]
    fn test_sample_points_returns_exact_count() {
        let cone = Cone::new(1.0, 2.0, Vec3::ZERO, Vec3::Z);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(cone.sample_points(0, &mut rng).len(), 0);
        assert_eq!(cone.sample_points(257, &mut rng).len(), 257);
    }

    #[test]
    fn test_display_format() {
        let cone = Cone::new(1.0, 2.0, Vec3::ZERO, Vec3::Z);
        assert_eq!(
            cone.to_string(),
            "cone: radius=1, height=2, center=(0, 0, 0), normal=(0, 0, 1)"
        );
    }
}
