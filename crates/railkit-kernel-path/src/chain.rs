//! Grouping unordered segments into components and stitching each
//! component into one ordered path.

use std::collections::{HashMap, VecDeque};

use railkit_kernel_math::{Dir3, PointKey, Tolerance};

use crate::{PathError, Polyline, Segment};

/// Endpoint index: `(segment index, true when the key came from the end point)`.
type EndpointRef = (usize, bool);

fn endpoint_index(segments: &[Segment], tol: Tolerance) -> HashMap<PointKey, Vec<EndpointRef>> {
    let mut adjacency: HashMap<PointKey, Vec<EndpointRef>> = HashMap::new();
    for (i, seg) in segments.iter().enumerate() {
        adjacency
            .entry(tol.point_key(&seg.start))
            .or_default()
            .push((i, false));
        adjacency
            .entry(tol.point_key(&seg.end))
            .or_default()
            .push((i, true));
    }
    adjacency
}

/// Partition unordered segments into connected components.
///
/// Two segments are adjacent iff any of their four endpoint keys match at
/// the given tolerance. Components are found by breadth-first traversal;
/// segments within a component come back in no particular order (ordering
/// is [`stitch`]'s job). Degenerate (zero-length) segments are skipped.
///
/// Zero input segments return an empty result, not an error.
pub fn group(segments: &[Segment], tol: Tolerance) -> Vec<Vec<Segment>> {
    let usable: Vec<Segment> = segments
        .iter()
        .copied()
        .filter(|s| !s.is_degenerate(tol))
        .collect();

    let adjacency = endpoint_index(&usable, tol);

    // Visited tracking is by segment index, not by point, so duplicate
    // segments sharing both endpoints cannot cycle forever.
    let mut visited = vec![false; usable.len()];
    let mut components = Vec::new();

    for seed in 0..usable.len() {
        if visited[seed] {
            continue;
        }
        visited[seed] = true;
        let mut queue = VecDeque::from([seed]);
        let mut members = Vec::new();

        while let Some(i) = queue.pop_front() {
            members.push(usable[i]);
            let keys = [
                tol.point_key(&usable[i].start),
                tol.point_key(&usable[i].end),
            ];
            for key in keys {
                for &(j, _) in &adjacency[&key] {
                    if !visited[j] {
                        visited[j] = true;
                        queue.push_back(j);
                    }
                }
            }
        }
        components.push(members);
    }

    components
}

/// One component stitched into an ordered path, with the source segments'
/// reference directions reordered to match.
#[derive(Debug, Clone)]
pub struct StitchedPath {
    /// The ordered path.
    pub path: Polyline,
    /// Outward reference direction per path segment, in path order.
    ///
    /// A segment walked end-to-start keeps its direction: a face normal is
    /// outward regardless of traversal orientation. Length equals
    /// [`Polyline::segment_count`].
    pub reference_dirs: Vec<Option<Dir3>>,
}

/// Stitch one connected component into a single ordered path.
///
/// Prefers a starting endpoint with adjacency degree 1 (an open chain's
/// true end); a closed loop starts at the first segment's start point. The
/// walk greedily extends the open end with an unused segment sharing its
/// key until none remains. If the stitched path returns to its first point,
/// the duplicate closing point is dropped and the path is marked closed.
///
/// # Errors
///
/// - [`PathError::EmptyInput`] when no non-degenerate segments remain
/// - [`PathError::BranchPoint`] when more than two segment ends meet at one
///   key — the selection is not a simple chain
/// - [`PathError::Disconnected`] when segments are left over after the walk
///   (the supplied slice was not one component)
pub fn stitch(segments: &[Segment], tol: Tolerance) -> Result<StitchedPath, PathError> {
    let usable: Vec<Segment> = segments
        .iter()
        .copied()
        .filter(|s| !s.is_degenerate(tol))
        .collect();
    if usable.is_empty() {
        return Err(PathError::EmptyInput);
    }

    let adjacency = endpoint_index(&usable, tol);

    for ends in adjacency.values() {
        if ends.len() > 2 {
            let (i, at_end) = ends[0];
            let p = if at_end { usable[i].end } else { usable[i].start };
            return Err(PathError::BranchPoint(p.x, p.y, p.z));
        }
    }

    // Pick a degree-1 endpoint to start from, scanning segments in input
    // order so the result is deterministic.
    let mut start: Option<EndpointRef> = None;
    'scan: for (i, seg) in usable.iter().enumerate() {
        let ends = [
            (tol.point_key(&seg.start), false),
            (tol.point_key(&seg.end), true),
        ];
        for (key, at_end) in ends {
            if adjacency[&key].len() == 1 {
                start = Some((i, at_end));
                break 'scan;
            }
        }
    }
    let (first, from_end) = start.unwrap_or((0, false));

    let mut used = vec![false; usable.len()];
    used[first] = true;
    let seg = usable[first];
    let mut points = if from_end {
        vec![seg.end, seg.start]
    } else {
        vec![seg.start, seg.end]
    };
    let mut dirs = vec![seg.reference_dir];

    loop {
        let tip_key = tol.point_key(points.last().unwrap());
        let next = adjacency
            .get(&tip_key)
            .and_then(|ends| ends.iter().find(|&&(j, _)| !used[j]));
        match next {
            Some(&(j, at_end)) => {
                used[j] = true;
                // Matched at the end point means we enter there and exit at
                // the start, and vice versa.
                let far = if at_end { usable[j].start } else { usable[j].end };
                points.push(far);
                dirs.push(usable[j].reference_dir);
            }
            None => break,
        }
    }

    let leftover = used.iter().filter(|&&u| !u).count();
    if leftover > 0 {
        return Err(PathError::Disconnected(leftover));
    }

    let mut closed = false;
    if points.len() > 2 && tol.points_equal(&points[0], points.last().unwrap()) {
        points.pop();
        closed = true;
    }

    let path = Polyline::new(points, closed, tol)?;
    debug_assert_eq!(dirs.len(), path.segment_count());
    Ok(StitchedPath {
        path,
        reference_dirs: dirs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use railkit_kernel_math::{Point3, Vec3};

    fn seg(a: [f64; 3], b: [f64; 3]) -> Segment {
        Segment::new(Point3::new(a[0], a[1], a[2]), Point3::new(b[0], b[1], b[2]))
    }

    #[test]
    fn test_group_empty_input() {
        assert!(group(&[], Tolerance::DEFAULT).is_empty());
    }

    #[test]
    fn test_group_single_segment() {
        let components = group(&[seg([0.0; 3], [48.0, 0.0, 0.0])], Tolerance::DEFAULT);
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].len(), 1);
    }

    #[test]
    fn test_group_two_disjoint_chains() {
        let segments = vec![
            seg([0.0; 3], [10.0, 0.0, 0.0]),
            seg([100.0, 0.0, 0.0], [110.0, 0.0, 0.0]),
            seg([10.0, 0.0, 0.0], [20.0, 0.0, 0.0]),
            seg([110.0, 0.0, 0.0], [110.0, 10.0, 0.0]),
        ];
        let components = group(&segments, Tolerance::DEFAULT);
        assert_eq!(components.len(), 2);
        assert_eq!(components[0].len(), 2);
        assert_eq!(components[1].len(), 2);
    }

    #[test]
    fn test_group_is_idempotent() {
        let segments = vec![
            seg([0.0; 3], [10.0, 0.0, 0.0]),
            seg([10.0, 0.0, 0.0], [20.0, 0.0, 0.0]),
            seg([50.0, 0.0, 0.0], [60.0, 0.0, 0.0]),
        ];
        let components = group(&segments, Tolerance::DEFAULT);
        for component in &components {
            let regrouped = group(component, Tolerance::DEFAULT);
            assert_eq!(regrouped.len(), 1);
            assert_eq!(regrouped[0].len(), component.len());
        }
    }

    #[test]
    fn test_group_skips_degenerate_segments() {
        let segments = vec![
            seg([0.0; 3], [10.0, 0.0, 0.0]),
            seg([5.0, 5.0, 0.0], [5.0, 5.0, 0.0]),
        ];
        let components = group(&segments, Tolerance::DEFAULT);
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].len(), 1);
    }

    #[test]
    fn test_stitch_single_segment() {
        let stitched = stitch(&[seg([0.0; 3], [48.0, 0.0, 0.0])], Tolerance::DEFAULT).unwrap();
        assert_eq!(stitched.path.points.len(), 2);
        assert!(!stitched.path.closed);
    }

    #[test]
    fn test_stitch_shuffled_reversed_chain() {
        // Chain 0→10→20→30 on x, supplied out of order with one segment
        // flipped end-for-end.
        let segments = vec![
            seg([20.0, 0.0, 0.0], [10.0, 0.0, 0.0]),
            seg([0.0; 3], [10.0, 0.0, 0.0]),
            seg([20.0, 0.0, 0.0], [30.0, 0.0, 0.0]),
        ];
        let stitched = stitch(&segments, Tolerance::DEFAULT).unwrap();
        let pts = &stitched.path.points;
        assert_eq!(pts.len(), 4);
        // Consecutive distances equal the original segment lengths.
        for i in 0..3 {
            assert!(((pts[i + 1] - pts[i]).norm() - 10.0).abs() < 1e-9);
        }
        // Starts at a true chain end.
        assert!(pts[0].x.abs() < 1e-9 || (pts[0].x - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_stitch_closed_loop() {
        let segments = vec![
            seg([0.0; 3], [10.0, 0.0, 0.0]),
            seg([10.0, 0.0, 0.0], [10.0, 10.0, 0.0]),
            seg([10.0, 10.0, 0.0], [0.0, 10.0, 0.0]),
            seg([0.0, 10.0, 0.0], [0.0; 3]),
        ];
        let stitched = stitch(&segments, Tolerance::DEFAULT).unwrap();
        assert!(stitched.path.closed);
        assert_eq!(stitched.path.points.len(), 4);
        assert_eq!(stitched.reference_dirs.len(), 4);
    }

    #[test]
    fn test_stitch_branch_is_rejected() {
        // T shape: three segments meeting at (10, 0, 0).
        let segments = vec![
            seg([0.0; 3], [10.0, 0.0, 0.0]),
            seg([10.0, 0.0, 0.0], [20.0, 0.0, 0.0]),
            seg([10.0, 0.0, 0.0], [10.0, 10.0, 0.0]),
        ];
        let result = stitch(&segments, Tolerance::DEFAULT);
        assert!(matches!(result, Err(PathError::BranchPoint(..))));
    }

    #[test]
    fn test_stitch_disconnected_is_reported() {
        let segments = vec![
            seg([0.0; 3], [10.0, 0.0, 0.0]),
            seg([50.0, 0.0, 0.0], [60.0, 0.0, 0.0]),
        ];
        let result = stitch(&segments, Tolerance::DEFAULT);
        assert!(matches!(result, Err(PathError::Disconnected(1))));
    }

    #[test]
    fn test_stitch_duplicate_segment_terminates() {
        // Same segment twice: shares both endpoints. Must not loop forever.
        let segments = vec![
            seg([0.0; 3], [10.0, 0.0, 0.0]),
            seg([0.0; 3], [10.0, 0.0, 0.0]),
        ];
        let result = stitch(&segments, Tolerance::DEFAULT);
        // Walks out and back; both segments consumed.
        assert!(result.is_ok());
    }

    #[test]
    fn test_stitch_tolerance_invariance() {
        let base = vec![
            seg([0.0; 3], [10.0, 0.0, 0.0]),
            seg([10.0, 0.0, 0.0], [20.0, 0.0, 0.0]),
            seg([20.0, 0.0, 0.0], [20.0, 10.0, 0.0]),
        ];
        let reference = stitch(&base, Tolerance::DEFAULT).unwrap();

        // Nudge every endpoint by less than the tolerance.
        let nudged: Vec<Segment> = base
            .iter()
            .map(|s| {
                Segment::new(
                    s.start + Vec3::new(2e-4, -2e-4, 1e-4),
                    s.end + Vec3::new(-1e-4, 2e-4, -2e-4),
                )
            })
            .collect();
        let perturbed = stitch(&nudged, Tolerance::DEFAULT).unwrap();

        assert_eq!(reference.path.points.len(), perturbed.path.points.len());
        assert_eq!(reference.path.closed, perturbed.path.closed);
    }

    #[test]
    fn test_stitch_carries_reference_dirs_in_path_order() {
        let a = seg([10.0, 0.0, 0.0], [0.0; 3]).with_reference(Vec3::new(0.0, -1.0, 0.0));
        let b = seg([10.0, 0.0, 0.0], [10.0, 10.0, 0.0]).with_reference(Vec3::new(1.0, 0.0, 0.0));
        let stitched = stitch(&[b, a], Tolerance::DEFAULT).unwrap();

        assert_eq!(stitched.reference_dirs.len(), 2);
        // Whatever end the walk started from, each path segment's direction
        // pairs with the reference of the source segment it came from.
        let first_dir = stitched.path.segment_direction(0);
        let first_ref = stitched.reference_dirs[0].unwrap();
        if first_dir.y.abs() > 1e-9 {
            assert!((first_ref.as_ref().x.abs() - 1.0).abs() < 1e-9);
        } else {
            assert!((first_ref.as_ref().y.abs() - 1.0).abs() < 1e-9);
        }
    }
}
