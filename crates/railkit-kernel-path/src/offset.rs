//! Offset paths with mitered corners.
//!
//! Railing parts run parallel to the picked edge at some inset: glass sits
//! half its thickness inside the face, cables run at the post centerline,
//! the base channel hugs the slab edge. All of that is one operation —
//! offset an ordered path by a signed distance against per-segment outward
//! reference directions, correcting interior corners with a bisector miter
//! so the offset segments still meet without gap or overlap.
//!
//! Path math is confined to the horizontal plane: displacements have no z
//! component and each vertex keeps its elevation.

use railkit_kernel_math::{Dir3, Tolerance, Vec3};

use crate::{PathError, Polyline};

/// Miter displacement magnitude at a corner turning by `theta` radians.
///
/// `theta` is the angle between the incoming and outgoing unit directions
/// (0 = straight through). The distance diverges as `theta` approaches
/// 180°; callers treat near-zero angles as non-corners and skip the miter
/// entirely.
pub fn miter_distance(distance: f64, theta: f64) -> f64 {
    distance / (theta / 2.0).cos()
}

/// Normalized horizontal projection of a direction, if it has one.
fn horizontal_dir(v: &Vec3) -> Option<Dir3> {
    Dir3::try_new(Vec3::new(v.x, v.y, 0.0), 1e-12)
}

/// Offset a path by a signed distance against per-segment reference
/// directions.
///
/// `reference_dirs[i]` is the outward direction associated with path
/// segment `i`; a positive `distance` moves the path *against* it (inward).
/// Endpoint vertices of an open path move along their single neighbor's
/// reference direction; interior vertices (and every vertex of a closed
/// path) get a bisector miter: `distance / cos(theta/2)` along the
/// horizontal perpendicular of the normalized bisector, signed to agree
/// with the neighboring reference directions. Vertices where the path runs
/// straight through are offset without a miter.
///
/// Segments collapsed to zero length by the offset are skipped, not
/// emitted.
///
/// # Errors
///
/// - [`PathError::ReferenceDirCount`] when the direction list does not
///   match the path's segment count
/// - [`PathError::VerticalReference`] when a reference direction has no
///   horizontal component
/// - [`PathError::OffsetCollapsed`] when fewer than two points survive
pub fn offset_path(
    path: &Polyline,
    reference_dirs: &[Dir3],
    distance: f64,
    tol: Tolerance,
) -> Result<Polyline, PathError> {
    let n_segs = path.segment_count();
    if reference_dirs.len() != n_segs {
        return Err(PathError::ReferenceDirCount {
            expected: n_segs,
            got: reference_dirs.len(),
        });
    }

    // Horizontal projections of the reference directions; z never moves.
    let mut refs_h = Vec::with_capacity(n_segs);
    for (i, r) in reference_dirs.iter().enumerate() {
        let h = horizontal_dir(r.as_ref()).ok_or(PathError::VerticalReference(i))?;
        refs_h.push(h);
    }

    let n = path.points.len();
    let mut offset_points = Vec::with_capacity(n);

    for i in 0..n {
        let p = path.points[i];
        let displacement = if path.closed {
            let prev_seg = (i + n - 1) % n;
            miter_displacement(path, prev_seg, i, &refs_h, distance, tol)
        } else if i == 0 {
            -distance * refs_h[0].as_ref()
        } else if i == n - 1 {
            -distance * refs_h[n_segs - 1].as_ref()
        } else {
            miter_displacement(path, i - 1, i, &refs_h, distance, tol)
        };
        offset_points.push(p + displacement);
    }

    // Drop points that landed on top of their predecessor so no zero-length
    // geometry reaches the host.
    let mut kept: Vec<_> = Vec::with_capacity(offset_points.len());
    for p in offset_points {
        if kept.last().is_none_or(|last| !tol.points_equal(last, &p)) {
            kept.push(p);
        }
    }
    if path.closed {
        while kept.len() > 1 && tol.points_equal(kept.last().unwrap(), &kept[0]) {
            kept.pop();
        }
    }
    if kept.len() < 2 {
        return Err(PathError::OffsetCollapsed);
    }

    Polyline::new(kept, path.closed, tol)
}

/// Displacement for the vertex joining segments `seg_in` and `seg_out`.
fn miter_displacement(
    path: &Polyline,
    seg_in: usize,
    seg_out: usize,
    refs_h: &[Dir3],
    distance: f64,
    tol: Tolerance,
) -> Vec3 {
    let ref_in = refs_h[seg_in];
    let ref_out = refs_h[seg_out];

    let d_in = horizontal_dir(&path.segment_direction(seg_in));
    let d_out = horizontal_dir(&path.segment_direction(seg_out));
    let (Some(d_in), Some(d_out)) = (d_in, d_out) else {
        // A vertical sub-segment has no horizontal turn; offset plainly
        // along the neighbor that does.
        return -distance * ref_in.as_ref();
    };

    let theta = d_in.angle(d_out.as_ref());
    if theta < tol.angular {
        // Straight through: not a corner.
        return -distance * ref_in.as_ref();
    }

    let Some(bisector) = Dir3::try_new(d_in.as_ref() + d_out.as_ref(), 1e-9) else {
        // Exact reversal; no finite miter exists.
        return -distance * ref_in.as_ref();
    };
    let perp = Vec3::new(-bisector.as_ref().y, bisector.as_ref().x, 0.0);
    let mut m = perp * miter_distance(distance, theta);

    // Sign the miter to agree with the outward references: positive
    // distance moves against them, matching the endpoint rule.
    let guide = {
        let sum = ref_in.as_ref() + ref_out.as_ref();
        if sum.norm() > 1e-9 {
            sum
        } else {
            *ref_in.as_ref()
        }
    };
    if m.dot(&guide) * distance > 0.0 {
        m = -m;
    }
    m
}

#[cfg(test)]
mod tests {
    use super::*;
    use railkit_kernel_math::{horizontal_perp, Point3};
    use std::f64::consts::PI;

    fn dir(x: f64, y: f64, z: f64) -> Dir3 {
        Dir3::new_normalize(Vec3::new(x, y, z))
    }

    #[test]
    fn test_miter_distance_formula() {
        // Straight through: plain distance.
        assert!((miter_distance(1.0, 0.0) - 1.0).abs() < 1e-12);
        // 90° turn: sqrt(2) times the distance.
        assert!((miter_distance(1.0, PI / 2.0) - 2f64.sqrt()).abs() < 1e-12);
        // 120° turn: doubles.
        assert!((miter_distance(1.0, 2.0 * PI / 3.0) - 2.0).abs() < 1e-9);
        // Diverges toward reversal.
        assert!(miter_distance(1.0, PI - 1e-6) > 1e5);
    }

    #[test]
    fn test_offset_straight_segment() {
        let path = Polyline::open(vec![Point3::origin(), Point3::new(96.0, 0.0, 0.0)]).unwrap();
        let refs = vec![dir(0.0, 1.0, 0.0)];
        let inset = offset_path(&path, &refs, 2.0, Tolerance::DEFAULT).unwrap();
        assert!((inset.points[0].y + 2.0).abs() < 1e-9);
        assert!((inset.points[1].y + 2.0).abs() < 1e-9);
        assert!((inset.points[1].x - 96.0).abs() < 1e-9);
    }

    #[test]
    fn test_offset_round_trip() {
        let path = Polyline::open(vec![Point3::origin(), Point3::new(48.0, 0.0, 0.0)]).unwrap();
        let out = dir(0.0, 1.0, 0.0);
        let inset = offset_path(&path, &[out], 1.5, Tolerance::DEFAULT).unwrap();
        let back = offset_path(&inset, &[dir(0.0, -1.0, 0.0)], 1.5, Tolerance::DEFAULT).unwrap();
        for (a, b) in back.points.iter().zip(path.points.iter()) {
            assert!((a - b).norm() < 1e-9);
        }
    }

    #[test]
    fn test_offset_straight_through_vertex_is_not_a_corner() {
        // Collinear interior vertex: plain perpendicular offset, no miter.
        let path = Polyline::open(vec![
            Point3::origin(),
            Point3::new(48.0, 0.0, 0.0),
            Point3::new(96.0, 0.0, 0.0),
        ])
        .unwrap();
        let refs = vec![dir(0.0, 1.0, 0.0), dir(0.0, 1.0, 0.0)];
        let inset = offset_path(&path, &refs, 2.0, Tolerance::DEFAULT).unwrap();
        assert_eq!(inset.points.len(), 3);
        for p in &inset.points {
            assert!((p.y + 2.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_offset_right_angle_corner() {
        // L path along +x then +y, outward references pointing away from
        // the interior of the L.
        let path = Polyline::open(vec![
            Point3::origin(),
            Point3::new(10.0, 0.0, 0.0),
            Point3::new(10.0, 10.0, 0.0),
        ])
        .unwrap();
        let refs = vec![dir(0.0, -1.0, 0.0), dir(1.0, 0.0, 0.0)];
        let inset = offset_path(&path, &refs, 1.0, Tolerance::DEFAULT).unwrap();

        // First endpoint: plain offset inward.
        assert!((inset.points[0] - Point3::new(0.0, 1.0, 0.0)).norm() < 1e-9);
        // Corner: the two inset lines y=1 and x=9 meet at (9, 1).
        assert!((inset.points[1] - Point3::new(9.0, 1.0, 0.0)).norm() < 1e-9);
        // Last endpoint.
        assert!((inset.points[2] - Point3::new(9.0, 10.0, 0.0)).norm() < 1e-9);
    }

    #[test]
    fn test_offset_outward_with_negative_distance() {
        let path = Polyline::open(vec![
            Point3::origin(),
            Point3::new(10.0, 0.0, 0.0),
            Point3::new(10.0, 10.0, 0.0),
        ])
        .unwrap();
        let refs = vec![dir(0.0, -1.0, 0.0), dir(1.0, 0.0, 0.0)];
        let outset = offset_path(&path, &refs, -1.0, Tolerance::DEFAULT).unwrap();
        assert!((outset.points[0] - Point3::new(0.0, -1.0, 0.0)).norm() < 1e-9);
        assert!((outset.points[1] - Point3::new(11.0, -1.0, 0.0)).norm() < 1e-9);
        assert!((outset.points[2] - Point3::new(11.0, 10.0, 0.0)).norm() < 1e-9);
    }

    #[test]
    fn test_offset_carries_elevation() {
        // A sloped run (stair stringer line): z passes through unchanged.
        let path = Polyline::open(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(11.0, 0.0, 7.5),
            Point3::new(22.0, 0.0, 15.0),
        ])
        .unwrap();
        let refs = vec![dir(0.0, 1.0, 0.0), dir(0.0, 1.0, 0.0)];
        let inset = offset_path(&path, &refs, 2.0, Tolerance::DEFAULT).unwrap();
        assert!((inset.points[0].z).abs() < 1e-9);
        assert!((inset.points[1].z - 7.5).abs() < 1e-9);
        assert!((inset.points[2].z - 15.0).abs() < 1e-9);
        for p in &inset.points {
            assert!((p.y + 2.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_offset_closed_square() {
        let path = Polyline::new(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(10.0, 0.0, 0.0),
                Point3::new(10.0, 10.0, 0.0),
                Point3::new(0.0, 10.0, 0.0),
            ],
            true,
            Tolerance::DEFAULT,
        )
        .unwrap();
        let refs = vec![
            dir(0.0, -1.0, 0.0),
            dir(1.0, 0.0, 0.0),
            dir(0.0, 1.0, 0.0),
            dir(-1.0, 0.0, 0.0),
        ];
        let inset = offset_path(&path, &refs, 1.0, Tolerance::DEFAULT).unwrap();
        assert!(inset.closed);
        assert_eq!(inset.points.len(), 4);
        assert!((inset.points[0] - Point3::new(1.0, 1.0, 0.0)).norm() < 1e-9);
        assert!((inset.points[2] - Point3::new(9.0, 9.0, 0.0)).norm() < 1e-9);
    }

    #[test]
    fn test_offset_collapse_is_reported() {
        // Inset a 2x2 square by nearly its half-width: all corners land on
        // the center and the result degenerates.
        let path = Polyline::new(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(2.0, 0.0, 0.0),
                Point3::new(2.0, 2.0, 0.0),
                Point3::new(0.0, 2.0, 0.0),
            ],
            true,
            Tolerance::DEFAULT,
        )
        .unwrap();
        let refs = vec![
            dir(0.0, -1.0, 0.0),
            dir(1.0, 0.0, 0.0),
            dir(0.0, 1.0, 0.0),
            dir(-1.0, 0.0, 0.0),
        ];
        let result = offset_path(&path, &refs, 0.9999, Tolerance::DEFAULT);
        assert!(matches!(result, Err(PathError::OffsetCollapsed)));
    }

    #[test]
    fn test_offset_reference_count_mismatch() {
        let path = Polyline::open(vec![Point3::origin(), Point3::new(10.0, 0.0, 0.0)]).unwrap();
        let result = offset_path(&path, &[], 1.0, Tolerance::DEFAULT);
        assert!(matches!(
            result,
            Err(PathError::ReferenceDirCount {
                expected: 1,
                got: 0
            })
        ));
    }

    #[test]
    fn test_offset_vertical_reference_rejected() {
        let path = Polyline::open(vec![Point3::origin(), Point3::new(10.0, 0.0, 0.0)]).unwrap();
        let result = offset_path(&path, &[dir(0.0, 0.0, 1.0)], 1.0, Tolerance::DEFAULT);
        assert!(matches!(result, Err(PathError::VerticalReference(0))));
    }

    #[test]
    fn test_horizontal_perp_convention() {
        // The documented perpendicular: (-y, x, 0).
        let p = horizontal_perp(&Vec3::new(1.0, 0.0, 0.0)).unwrap();
        assert!((p.as_ref().x).abs() < 1e-12);
        assert!((p.as_ref().y - 1.0).abs() < 1e-12);
    }
}
