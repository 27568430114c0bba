//! Placing profiles on paths and describing the resulting solids.

use railkit_kernel_math::{horizontal_perp, Dir3, Point2, Point3, Vec3};
use railkit_kernel_path::Polyline;

use crate::{SectionProfile, SweepError};

/// Orthonormal basis placing a 2D profile at the start of a path.
///
/// Local-x maps to the horizontal perpendicular of the initial direction,
/// local-z to world up; the host's follow-path primitive carries the frame
/// through later direction changes. A vertical initial direction (posts)
/// falls back to the world X/Y axes for the profile plane.
#[derive(Debug, Clone)]
pub struct SweepFrame {
    /// Frame origin (the path's first vertex).
    pub origin: Point3,
    /// Unit tangent of the first path segment.
    pub tangent: Dir3,
    /// Where profile local-x goes.
    pub x_axis: Dir3,
    /// Where profile local-z goes.
    pub z_axis: Dir3,
}

impl SweepFrame {
    /// Frame at the start of `path`.
    pub fn at_path_start(path: &Polyline) -> Self {
        let dir = path.segment_direction(0);
        // Polyline invariants guarantee a nonzero first segment.
        let tangent = Dir3::new_normalize(dir);
        match horizontal_perp(&dir) {
            Some(x_axis) => Self {
                origin: path.points[0],
                tangent,
                x_axis,
                z_axis: Dir3::new_normalize(Vec3::z()),
            },
            // Vertical run: profile lies in the horizontal plane.
            None => Self {
                origin: path.points[0],
                tangent,
                x_axis: Dir3::new_normalize(Vec3::x()),
                z_axis: Dir3::new_normalize(Vec3::y()),
            },
        }
    }

    /// Map a profile point (local-x, local-z) into 3D.
    pub fn place(&self, p: Point2) -> Point3 {
        self.origin + p.x * self.x_axis.as_ref() + p.y * self.z_axis.as_ref()
    }
}

/// How the host should drive the starting face along the path.
#[derive(Debug, Clone)]
pub enum Drive {
    /// Straight single-segment path: plain linear extrusion.
    Linear {
        /// Extrusion direction (unit).
        direction: Dir3,
        /// Extrusion distance.
        distance: f64,
    },
    /// Multi-segment path: follow-path sweep along the full polyline.
    Follow(Polyline),
}

/// A fully described swept solid: the placed starting face and its drive.
///
/// This is everything the host's geometry engine needs — an ordered point
/// loop to build the face from, and either an extrusion vector or the
/// polyline to follow.
#[derive(Debug, Clone)]
pub struct SweepBody {
    /// The profile outline placed at the path start, in order.
    pub face: Vec<Point3>,
    /// Extrusion or follow-path drive.
    pub drive: Drive,
}

impl SweepBody {
    /// Axis-aligned bounds of the starting face (diagnostics and tests).
    pub fn face_bounds(&self) -> (Point3, Point3) {
        let mut min = self.face[0];
        let mut max = self.face[0];
        for p in &self.face {
            min = Point3::new(min.x.min(p.x), min.y.min(p.y), min.z.min(p.z));
            max = Point3::new(max.x.max(p.x), max.y.max(p.y), max.z.max(p.z));
        }
        (min, max)
    }
}

/// Sweep a profile along a path.
///
/// The profile is placed at the path's first vertex oriented by
/// [`SweepFrame::at_path_start`]. A single-segment path reduces to a
/// linear extrusion by the segment length; longer paths carry the whole
/// polyline for the host's follow-path primitive.
///
/// The profile type enforces face validity (≥3 points, nonzero area, no
/// self-crossings) at construction, so no partial geometry can be emitted
/// from here.
pub fn sweep(profile: &SectionProfile, path: &Polyline) -> SweepBody {
    let frame = SweepFrame::at_path_start(path);
    let face = profile.points.iter().map(|&p| frame.place(p)).collect();

    let drive = if !path.closed && path.segment_count() == 1 {
        Drive::Linear {
            direction: frame.tangent,
            distance: path.segment_direction(0).norm(),
        }
    } else {
        Drive::Follow(path.clone())
    };

    SweepBody { face, drive }
}

/// Linear extrusion of a profile from an explicit origin.
///
/// Equivalent to sweeping along the two-point path
/// `origin → origin + direction`; the direction's length is the extrusion
/// distance.
///
/// # Errors
///
/// [`SweepError::ZeroExtrusion`] when `direction` has zero length.
pub fn extrude(
    profile: &SectionProfile,
    origin: Point3,
    direction: Vec3,
) -> Result<SweepBody, SweepError> {
    if direction.norm() < 1e-12 {
        return Err(SweepError::ZeroExtrusion);
    }
    let path = Polyline {
        points: vec![origin, origin + direction],
        closed: false,
    };
    Ok(sweep(profile, &path))
}
