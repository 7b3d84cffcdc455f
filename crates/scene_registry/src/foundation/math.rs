//! Math utilities and types
//!
//! Only the small subset of math the registry needs: 3-vectors and a
//! position/rotation/scale transform with Euler-angle rotation.

pub use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// Transform representing position, rotation, and scale
///
/// Rotation is stored as Euler angles in radians (pitch, yaw, roll), which is
/// how the editor's command surface edits it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Position in 3D space
    pub position: Vec3,

    /// Euler angles in radians
    pub rotation: Vec3,

    /// Scale factors
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Vec3::zeros(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Transform {
    /// Create a new identity transform
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create a transform with only position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Builder pattern: Set rotation
    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    /// Builder pattern: Set scale
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Offset the position by `delta`
    pub fn translate(&mut self, delta: Vec3) {
        self.position += delta;
    }

    /// Check whether this is the identity transform
    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_identity_transform() {
        let t = Transform::identity();
        assert_eq!(t.position, Vec3::zeros());
        assert_eq!(t.scale, Vec3::new(1.0, 1.0, 1.0));
        assert!(t.is_identity());
    }

    #[test]
    fn test_translate_accumulates() {
        let mut t = Transform::from_position(Vec3::new(1.0, 2.0, 3.0));
        t.translate(Vec3::new(0.5, -2.0, 0.25));
        t.translate(Vec3::new(0.5, 0.0, 0.25));

        assert_relative_eq!(t.position, Vec3::new(2.0, 0.0, 3.5));
        assert!(!t.is_identity());
    }

    #[test]
    fn test_builders_keep_position() {
        let t = Transform::from_position(Vec3::new(4.0, 0.0, 0.0))
            .with_rotation(Vec3::new(0.0, std::f32::consts::FRAC_PI_2, 0.0))
            .with_scale(Vec3::new(2.0, 2.0, 2.0));

        assert_relative_eq!(t.position.x, 4.0);
        assert_relative_eq!(t.rotation.y, std::f32::consts::FRAC_PI_2);
        assert_relative_eq!(t.scale.z, 2.0);
    }
}
