//! 2D cross-section profiles.

use std::f64::consts::PI;

use railkit_kernel_math::{Point2, Vec2};

use crate::SweepError;

/// Linear tolerance for profile coordinates.
///
/// Profile dimensions are part sizes (glass thickness, rail width), well
/// above pick noise.
const PROFILE_TOL: f64 = 1e-9;

/// A closed 2D cross-section in (local-x, local-z) coordinates.
///
/// Local-x maps to the in-plane perpendicular of the sweep direction,
/// local-z to world up. The outline is an ordered simple polygon: no
/// repeated consecutive points, nonzero area, no self-crossings — so the
/// swept solid cannot self-intersect.
#[derive(Debug, Clone)]
pub struct SectionProfile {
    /// Outline points in order; the closing segment back to the first
    /// point is implied.
    pub points: Vec<Point2>,
}

impl SectionProfile {
    /// Create a profile from an ordered outline.
    ///
    /// # Errors
    ///
    /// - [`SweepError::TooFewProfilePoints`] for fewer than three points
    /// - [`SweepError::DegenerateProfileSegment`] when consecutive points
    ///   coincide (wrap segment included)
    /// - [`SweepError::ZeroAreaProfile`] when the outline is collinear
    /// - [`SweepError::SelfIntersecting`] when non-adjacent outline
    ///   segments cross
    pub fn new(points: Vec<Point2>) -> Result<Self, SweepError> {
        if points.len() < 3 {
            return Err(SweepError::TooFewProfilePoints(points.len()));
        }
        let n = points.len();
        for i in 0..n {
            if (points[(i + 1) % n] - points[i]).norm() < PROFILE_TOL {
                return Err(SweepError::DegenerateProfileSegment(i));
            }
        }

        let profile = Self { points };
        if profile.area().abs() < PROFILE_TOL {
            return Err(SweepError::ZeroAreaProfile);
        }
        if profile.outline_self_intersects() {
            return Err(SweepError::SelfIntersecting);
        }
        Ok(profile)
    }

    /// Rectangular profile centered on local-x, sitting on local-z = 0.
    ///
    /// Counter-clockwise winding. Used for glass panels, rails, treads and
    /// risers — any rectangular stock.
    pub fn rectangle(width: f64, height: f64) -> Result<Self, SweepError> {
        let hw = width / 2.0;
        Self::new(vec![
            Point2::new(-hw, 0.0),
            Point2::new(hw, 0.0),
            Point2::new(hw, height),
            Point2::new(-hw, height),
        ])
    }

    /// U-channel profile opening upward: outer width, outer height, and
    /// wall thickness. Base sits on local-z = 0.
    ///
    /// The shape of a glass base channel (shoe): glass drops into the slot
    /// between the two walls.
    pub fn channel(width: f64, height: f64, wall: f64) -> Result<Self, SweepError> {
        let hw = width / 2.0;
        let inner = hw - wall;
        if inner <= 0.0 || wall >= height {
            return Err(SweepError::ZeroAreaProfile);
        }
        Self::new(vec![
            Point2::new(-hw, 0.0),
            Point2::new(hw, 0.0),
            Point2::new(hw, height),
            Point2::new(inner, height),
            Point2::new(inner, wall),
            Point2::new(-inner, wall),
            Point2::new(-inner, height),
            Point2::new(-hw, height),
        ])
    }

    /// Circular profile centered at the local origin, approximated by `n`
    /// straight segments (minimum 3). Used for cable runs.
    pub fn circle(radius: f64, n: u32) -> Result<Self, SweepError> {
        let n = n.max(3) as usize;
        let points = (0..n)
            .map(|i| {
                let theta = 2.0 * PI * i as f64 / n as f64;
                Point2::new(radius * theta.cos(), radius * theta.sin())
            })
            .collect();
        Self::new(points)
    }

    /// Signed area of the outline (positive for counter-clockwise winding).
    pub fn area(&self) -> f64 {
        let n = self.points.len();
        let mut sum = 0.0;
        for i in 0..n {
            let a = self.points[i];
            let b = self.points[(i + 1) % n];
            sum += a.x * b.y - b.x * a.y;
        }
        sum / 2.0
    }

    /// True when the outline winds counter-clockwise.
    pub fn is_ccw(&self) -> bool {
        self.area() > 0.0
    }

    /// Number of outline points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the outline has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    fn outline_self_intersects(&self) -> bool {
        let n = self.points.len();
        for i in 0..n {
            for j in i + 1..n {
                // Adjacent segments share an endpoint; skip them (and the
                // wrap pair of first and last).
                if j == i + 1 || (i == 0 && j == n - 1) {
                    continue;
                }
                let (a1, a2) = (self.points[i], self.points[(i + 1) % n]);
                let (b1, b2) = (self.points[j], self.points[(j + 1) % n]);
                if segments_cross(a1, a2, b1, b2) {
                    return true;
                }
            }
        }
        false
    }
}

fn orient(a: Point2, b: Point2, c: Point2) -> f64 {
    let ab: Vec2 = b - a;
    let ac: Vec2 = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// Proper intersection test for two 2D segments.
fn segments_cross(a1: Point2, a2: Point2, b1: Point2, b2: Point2) -> bool {
    let d1 = orient(b1, b2, a1);
    let d2 = orient(b1, b2, a2);
    let d3 = orient(a1, a2, b1);
    let d4 = orient(a1, a2, b2);
    d1 * d2 < 0.0 && d3 * d4 < 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_profile() {
        let p = SectionProfile::rectangle(0.5, 36.0).unwrap();
        assert_eq!(p.len(), 4);
        assert!(p.is_ccw());
        assert!((p.area() - 18.0).abs() < 1e-12);
    }

    #[test]
    fn test_channel_profile() {
        let p = SectionProfile::channel(2.5, 4.0, 0.25).unwrap();
        assert_eq!(p.len(), 8);
        assert!(p.is_ccw());
        // Outer area minus the slot.
        let expected = 2.5 * 4.0 - (2.5 - 2.0 * 0.25) * (4.0 - 0.25);
        assert!((p.area() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_channel_rejects_walls_thicker_than_body() {
        assert!(matches!(
            SectionProfile::channel(1.0, 4.0, 0.6),
            Err(SweepError::ZeroAreaProfile)
        ));
    }

    #[test]
    fn test_circle_profile() {
        let p = SectionProfile::circle(0.1875, 12).unwrap();
        assert_eq!(p.len(), 12);
        assert!(p.is_ccw());
        // Polygon area approaches the disc from below.
        assert!(p.area() < PI * 0.1875 * 0.1875);
        assert!(p.area() > 0.9 * PI * 0.1875 * 0.1875);
    }

    #[test]
    fn test_too_few_points() {
        let result = SectionProfile::new(vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)]);
        assert!(matches!(result, Err(SweepError::TooFewProfilePoints(2))));
    }

    #[test]
    fn test_degenerate_segment() {
        let result = SectionProfile::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 1.0),
        ]);
        assert!(matches!(result, Err(SweepError::DegenerateProfileSegment(0))));
    }

    #[test]
    fn test_collinear_outline_rejected() {
        let result = SectionProfile::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
        ]);
        assert!(matches!(result, Err(SweepError::ZeroAreaProfile)));
    }

    #[test]
    fn test_bowtie_rejected() {
        let result = SectionProfile::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
        ]);
        assert!(matches!(result, Err(SweepError::SelfIntersecting)));
    }

    #[test]
    fn test_clockwise_outline_is_allowed() {
        // Winding just has to be consistent; direction is the caller's.
        let p = SectionProfile::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 0.0),
        ])
        .unwrap();
        assert!(!p.is_ccw());
    }
}
