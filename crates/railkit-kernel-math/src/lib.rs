#![warn(missing_docs)]

//! Math types for the railkit geometry kernel.
//!
//! Thin wrappers around nalgebra providing the types the railing and stair
//! generators share: points, vectors, directions, rigid placement
//! transforms, and tolerance constants with quantized point keys.

use nalgebra::{Matrix4, Unit, Vector2, Vector3, Vector4};

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// A unit (normalized) direction vector in 3D space.
pub type Dir3 = Unit<Vector3<f64>>;

/// A point in 2D cross-section coordinates.
pub type Point2 = nalgebra::Point2<f64>;

/// A vector in 2D cross-section coordinates.
pub type Vec2 = Vector2<f64>;

/// The horizontal perpendicular of a direction: `(-d.y, d.x, 0)`.
///
/// Railing path math is confined to the horizontal plane; the z component
/// of the input is ignored. Returns `None` when the horizontal projection
/// of `d` is zero (a vertical direction has no horizontal perpendicular).
pub fn horizontal_perp(d: &Vec3) -> Option<Dir3> {
    let p = Vec3::new(-d.y, d.x, 0.0);
    Unit::try_new(p, 1e-12)
}

/// A rigid placement transform: translation plus rotation about the Z axis.
///
/// Stair flights and landings are composed by chaining these; the host
/// scene graph applies them as group transforms.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// The underlying 4x4 matrix.
    pub matrix: Matrix4<f64>,
}

impl Transform {
    /// Identity transform.
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// Translation by `(dx, dy, dz)`.
    pub fn translation(dx: f64, dy: f64, dz: f64) -> Self {
        let mut m = Matrix4::identity();
        m[(0, 3)] = dx;
        m[(1, 3)] = dy;
        m[(2, 3)] = dz;
        Self { matrix: m }
    }

    /// Rotation about the Z axis by `angle` radians.
    pub fn rotation_z(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Matrix4::identity();
        m[(0, 0)] = c;
        m[(0, 1)] = -s;
        m[(1, 0)] = s;
        m[(1, 1)] = c;
        Self { matrix: m }
    }

    /// Compose: apply `other` first, then `self` (self * other).
    pub fn then(&self, other: &Transform) -> Self {
        Self {
            matrix: self.matrix * other.matrix,
        }
    }

    /// Transform a point.
    pub fn apply_point(&self, p: &Point3) -> Point3 {
        let v = self.matrix * Vector4::new(p.x, p.y, p.z, 1.0);
        Point3::new(v.x, v.y, v.z)
    }

    /// Transform a direction vector (ignores translation).
    pub fn apply_vec(&self, v: &Vec3) -> Vec3 {
        let r = self.matrix * Vector4::new(v.x, v.y, v.z, 0.0);
        Vec3::new(r.x, r.y, r.z)
    }

    /// Inverse of this transform, if it exists.
    pub fn inverse(&self) -> Option<Self> {
        self.matrix.try_inverse().map(|matrix| Self { matrix })
    }

    /// The translation component `(dx, dy, dz)`.
    pub fn translation_part(&self) -> Vec3 {
        Vec3::new(self.matrix[(0, 3)], self.matrix[(1, 3)], self.matrix[(2, 3)])
    }

    /// The rotation about Z in radians, assuming a rigid Z rotation.
    pub fn rotation_z_part(&self) -> f64 {
        self.matrix[(1, 0)].atan2(self.matrix[(0, 0)])
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

/// A quantized point key for hash-based coincidence tests.
///
/// Two points are "the same" iff their keys match. This bounded-tolerance
/// equality, not exact float equality, is what keeps picked endpoints with
/// floating-point drift connected.
pub type PointKey = (i64, i64, i64);

/// Tolerance constants for geometric comparisons.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Linear distance tolerance in model units (inches in the source domain).
    pub linear: f64,
    /// Angular tolerance in radians.
    pub angular: f64,
}

impl Tolerance {
    /// Default tolerances for picked geometry (1e-3 unit linear, 1e-4 rad angular).
    ///
    /// Looser than a CAD kernel's: inputs come from interactive picks, not
    /// exact construction, and direction wobble from quantized endpoints
    /// stays well below a tenth of a milliradian.
    pub const DEFAULT: Self = Self {
        linear: 1e-3,
        angular: 1e-4,
    };

    /// Tolerance with the given linear distance and the default angular value.
    pub fn with_linear(linear: f64) -> Self {
        Self {
            linear,
            angular: Self::DEFAULT.angular,
        }
    }

    /// Check if two points are coincident within tolerance.
    pub fn points_equal(&self, a: &Point3, b: &Point3) -> bool {
        (a - b).norm() < self.linear
    }

    /// Check if a scalar distance is effectively zero.
    pub fn is_zero(&self, d: f64) -> bool {
        d.abs() < self.linear
    }

    /// Quantize a point to its integer key at this tolerance.
    pub fn point_key(&self, p: &Point3) -> PointKey {
        let scale = 1.0 / self.linear;
        (
            (p.x * scale).round() as i64,
            (p.y * scale).round() as i64,
            (p.z * scale).round() as i64,
        )
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_identity_transform() {
        let t = Transform::identity();
        let p = Point3::new(1.0, 2.0, 3.0);
        let result = t.apply_point(&p);
        assert!((result - p).norm() < 1e-12);
    }

    #[test]
    fn test_translation() {
        let t = Transform::translation(10.0, 20.0, 30.0);
        let p = Point3::new(1.0, 2.0, 3.0);
        let result = t.apply_point(&p);
        assert!((result.x - 11.0).abs() < 1e-12);
        assert!((result.y - 22.0).abs() < 1e-12);
        assert!((result.z - 33.0).abs() < 1e-12);
    }

    #[test]
    fn test_rotation_z_90() {
        let t = Transform::rotation_z(PI / 2.0);
        let p = Point3::new(1.0, 0.0, 0.0);
        let result = t.apply_point(&p);
        assert!(result.x.abs() < 1e-12);
        assert!((result.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_compose_order() {
        // then(): argument applies first. Rotate (1,0,0) by 90° about Z,
        // then translate by (10,0,0) → (10,1,0).
        let rot = Transform::rotation_z(PI / 2.0);
        let tr = Transform::translation(10.0, 0.0, 0.0);
        let composed = tr.then(&rot);
        let p = Point3::new(1.0, 0.0, 0.0);
        let result = composed.apply_point(&p);
        assert!((result.x - 10.0).abs() < 1e-12);
        assert!((result.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_inverse() {
        let t = Transform::translation(1.0, 2.0, 3.0).then(&Transform::rotation_z(0.7));
        let inv = t.inverse().unwrap();
        let composed = t.then(&inv);
        let p = Point3::new(5.0, 6.0, 7.0);
        let result = composed.apply_point(&p);
        assert!((result - p).norm() < 1e-12);
    }

    #[test]
    fn test_translation_and_rotation_parts() {
        let t = Transform::translation(4.0, -2.0, 36.0).then(&Transform::rotation_z(PI / 2.0));
        let tr = t.translation_part();
        assert!((tr.x - 4.0).abs() < 1e-12);
        assert!((tr.y + 2.0).abs() < 1e-12);
        assert!((tr.z - 36.0).abs() < 1e-12);
        assert!((t.rotation_z_part() - PI / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_horizontal_perp() {
        let d = Vec3::new(1.0, 0.0, 0.0);
        let p = horizontal_perp(&d).unwrap();
        assert!((p.as_ref().y - 1.0).abs() < 1e-12);

        // Vertical direction has no horizontal perpendicular
        assert!(horizontal_perp(&Vec3::new(0.0, 0.0, 1.0)).is_none());
    }

    #[test]
    fn test_tolerance_points_equal() {
        let tol = Tolerance::DEFAULT;
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(1.0 + 1e-4, 2.0, 3.0);
        assert!(tol.points_equal(&a, &b));
        let c = Point3::new(1.01, 2.0, 3.0);
        assert!(!tol.points_equal(&a, &c));
    }

    #[test]
    fn test_point_key_quantization() {
        let tol = Tolerance::DEFAULT;
        let a = Point3::new(48.0, 0.0, 0.0);
        let b = Point3::new(48.0 + 2e-4, -1e-4, 0.0);
        assert_eq!(tol.point_key(&a), tol.point_key(&b));

        let far = Point3::new(48.01, 0.0, 0.0);
        assert_ne!(tol.point_key(&a), tol.point_key(&far));
    }
}
