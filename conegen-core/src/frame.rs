//! Orthonormal frame construction from a single axis direction.

use crate::vec3::Vec3;

/// A right-handed orthonormal basis embedded in world space.
///
/// `z_axis` is the cone's axis direction; `x_axis` and `y_axis` span the
/// base plane. The basis is recomputed from the current normal on every
/// sampling call rather than cached, since the normal can change between
/// calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub x_axis: Vec3,
    pub y_axis: Vec3,
    pub z_axis: Vec3,
}

impl Frame {
    /// Build a basis whose `z_axis` is the given unit normal.
    ///
    /// The helper direction starts at +X and switches to +Y when the normal
    /// is nearly parallel to +X, keeping the cross products away from zero
    /// length.
    pub fn from_normal(normal: Vec3) -> Self {
        let z_axis = normal;
        let helper = if z_axis.dot(Vec3::X).abs() > 0.9 {
            Vec3::Y
        } else {
            Vec3::X
        };
        let x_axis = z_axis.cross(helper).normalize();
        let y_axis = z_axis.cross(x_axis).normalize();
        Self {
            x_axis,
            y_axis,
            z_axis,
        }
    }

    /// Map a point from this frame's local coordinates to world space.
    pub fn to_world(&self, local: Vec3, origin: Vec3) -> Vec3 {
        origin + self.x_axis * local.x + self.y_axis * local.y + self.z_axis * local.z
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    fn assert_orthonormal(frame: &Frame) {
        assert!((frame.x_axis.length() - 1.0).abs() < TOL);
        assert!((frame.y_axis.length() - 1.0).abs() < TOL);
        assert!((frame.z_axis.length() - 1.0).abs() < TOL);
        assert!(frame.x_axis.dot(frame.y_axis).abs() < TOL);
        assert!(frame.y_axis.dot(frame.z_axis).abs() < TOL);
        assert!(frame.z_axis.dot(frame.x_axis).abs() < TOL);
    }

    #[test]
    fn test_frame_orthonormal_for_generic_normal() {
        let normal = Vec3::new(1.0, -2.0, 0.5).normalize();
        let frame = Frame::from_normal(normal);
        assert_orthonormal(&frame);
        assert_eq!(frame.z_axis, normal);
    }

    #[test]
    fn test_frame_orthonormal_near_helper_axis() {
        // Normal almost parallel to +X forces the +Y helper.
        let normal = Vec3::new(1.0, 1e-6, 0.0).normalize();
        let frame = Frame::from_normal(normal);
        assert_orthonormal(&frame);

        let normal = Vec3::X;
        let frame = Frame::from_normal(normal);
        assert_orthonormal(&frame);
    }

    #[test]
    fn test_frame_is_right_handed() {
        for normal in [
            Vec3::Z,
            Vec3::X,
            -Vec3::Y,
            Vec3::new(0.3, 0.4, -0.8).normalize(),
        ] {
            let frame = Frame::from_normal(normal);
            let cross = frame.x_axis.cross(frame.y_axis);
            assert!((cross - frame.z_axis).length() < TOL);
        }
    }

    #[test]
    fn test_to_world() {
        let frame = Frame::from_normal(Vec3::Z);
        let origin = Vec3::new(1.0, 2.0, 3.0);
        let p = frame.to_world(Vec3::new(0.0, 0.0, 2.0), origin);
        assert!((p - Vec3::new(1.0, 2.0, 5.0)).length() < TOL);
    }
}
