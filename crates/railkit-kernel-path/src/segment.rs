//! Segment and polyline types.

use railkit_kernel_math::{Dir3, Point3, Tolerance, Vec3};

use crate::PathError;

/// An ordered pair of 3D points, optionally carrying a *reference
/// direction* — the outward unit vector (e.g. a picked face's normal) an
/// offset is later measured against.
///
/// Segments as picked by the user carry no inherent order relative to each
/// other; ordering them is [`stitch`](crate::stitch)'s job.
#[derive(Debug, Clone, Copy)]
pub struct Segment {
    /// Start point.
    pub start: Point3,
    /// End point.
    pub end: Point3,
    /// Outward reference direction for offsetting, if one was picked.
    pub reference_dir: Option<Dir3>,
}

impl Segment {
    /// Create a segment with no reference direction.
    pub fn new(start: Point3, end: Point3) -> Self {
        Self {
            start,
            end,
            reference_dir: None,
        }
    }

    /// Attach an outward reference direction (normalized).
    ///
    /// A zero-length vector leaves the segment without a reference
    /// direction rather than storing a garbage one.
    pub fn with_reference(mut self, dir: Vec3) -> Self {
        self.reference_dir = Dir3::try_new(dir, 1e-12);
        self
    }

    /// The segment's direction vector (end - start).
    pub fn direction(&self) -> Vec3 {
        self.end - self.start
    }

    /// The segment's length.
    pub fn length(&self) -> f64 {
        self.direction().norm()
    }

    /// True when start and end coincide within tolerance.
    pub fn is_degenerate(&self, tol: Tolerance) -> bool {
        tol.points_equal(&self.start, &self.end)
    }
}

/// An ordered sequence of at least two distinct points, open or closed.
///
/// Closed polylines do not repeat the first point at the end; the wrap
/// segment is implied.
#[derive(Debug, Clone)]
pub struct Polyline {
    /// The path vertices in order.
    pub points: Vec<Point3>,
    /// Whether the last point connects back to the first.
    pub closed: bool,
}

impl Polyline {
    /// Create a polyline, validating the path invariants.
    ///
    /// # Errors
    ///
    /// - [`PathError::TooFewPoints`] for fewer than two points
    /// - [`PathError::ZeroLengthSegment`] when consecutive points coincide
    ///   within tolerance (including the wrap segment of a closed path)
    pub fn new(points: Vec<Point3>, closed: bool, tol: Tolerance) -> Result<Self, PathError> {
        if points.len() < 2 {
            return Err(PathError::TooFewPoints(points.len()));
        }
        for i in 0..points.len() - 1 {
            if tol.points_equal(&points[i], &points[i + 1]) {
                return Err(PathError::ZeroLengthSegment(i));
            }
        }
        if closed && tol.points_equal(points.last().unwrap(), &points[0]) {
            return Err(PathError::ZeroLengthSegment(points.len() - 1));
        }
        Ok(Self { points, closed })
    }

    /// Open polyline from points, validated at the default tolerance.
    pub fn open(points: Vec<Point3>) -> Result<Self, PathError> {
        Self::new(points, false, Tolerance::DEFAULT)
    }

    /// Number of segments (wrap segment included for closed paths).
    pub fn segment_count(&self) -> usize {
        if self.closed {
            self.points.len()
        } else {
            self.points.len() - 1
        }
    }

    /// The i-th segment as a start/end point pair.
    pub fn segment(&self, i: usize) -> (Point3, Point3) {
        let n = self.points.len();
        (self.points[i], self.points[(i + 1) % n])
    }

    /// Direction vector of the i-th segment (not normalized).
    pub fn segment_direction(&self, i: usize) -> Vec3 {
        let (a, b) = self.segment(i);
        b - a
    }

    /// Total path length, wrap segment included for closed paths.
    pub fn length(&self) -> f64 {
        (0..self.segment_count())
            .map(|i| self.segment_direction(i).norm())
            .sum()
    }

    /// Copy with interior vertices removed where the path passes straight
    /// through (consecutive directions within the angular tolerance).
    ///
    /// Two collinear picked edges stitch into one run with a cosmetic
    /// midpoint; tiling and sweeping want the maximal straight stretches.
    pub fn simplified(&self, tol: Tolerance) -> Polyline {
        let n = self.points.len();
        let min_points = if self.closed { 3 } else { 2 };
        if n <= min_points {
            return self.clone();
        }

        let is_corner = |i: usize| -> bool {
            let d_in = self.segment_direction((i + n - 1) % n).normalize();
            let d_out = self.segment_direction(i).normalize();
            d_in.angle(&d_out) > tol.angular
        };

        let mut points = Vec::with_capacity(n);
        for i in 0..n {
            let interior = self.closed || (i > 0 && i < n - 1);
            if !interior || is_corner(i) {
                points.push(self.points[i]);
            }
        }
        // A fully collinear closed loop is degenerate input; keep it as-is
        // rather than emit an invalid path.
        if points.len() < min_points {
            return self.clone();
        }
        Polyline {
            points,
            closed: self.closed,
        }
    }
}
