//! Railing tools: thin callers over the geometry kernel.
//!
//! Every tool runs the same pipeline — group picked segments, stitch each
//! component into a run, offset to the part centerline — and differs only
//! in the profiles and tiling parameters it feeds the kernel.

use railkit_ir::Document;
use railkit_kernel_layout::tile;
use railkit_kernel_math::{horizontal_perp, Dir3, Point2, Tolerance, Vec3};
use railkit_kernel_path::{group, offset_path, stitch, Polyline, Segment, StitchedPath};
use railkit_kernel_sweep::{extrude, sweep, SectionProfile};

use crate::part::{assemble, Part};
use crate::{BuildError, CableRailingParams, GlassRailingParams, HandrailParams};

/// Group and stitch a selection into ordered runs.
fn stitched_runs(segments: &[Segment]) -> Result<Vec<StitchedPath>, BuildError> {
    let tol = Tolerance::DEFAULT;
    let components = group(segments, tol);
    if components.is_empty() {
        return Err(BuildError::EmptySelection);
    }
    components
        .iter()
        .map(|component| stitch(component, tol).map_err(BuildError::from))
        .collect()
}

/// Reference directions for every path segment, falling back to the
/// horizontal perpendicular where no face normal was picked (drawn-line
/// input).
fn resolved_reference_dirs(run: &StitchedPath) -> Result<Vec<Dir3>, BuildError> {
    run.reference_dirs
        .iter()
        .enumerate()
        .map(|(i, picked)| match picked {
            Some(d) => Ok(*d),
            None => horizontal_perp(&run.path.segment_direction(i))
                .ok_or(BuildError::VerticalSegment(i)),
        })
        .collect()
}

/// The part centerline: the stitched path inset against its references,
/// with cosmetic collinear joints merged so two collinear picks tile as
/// one straight run.
fn centerline(run: &StitchedPath, inset: f64) -> Result<Polyline, BuildError> {
    let tol = Tolerance::DEFAULT;
    let refs = resolved_reference_dirs(run)?;
    Ok(offset_path(&run.path, &refs, inset, tol)?.simplified(tol))
}

/// Copy of a path shifted vertically — rails and cables run at elevation.
fn raised(line: &Polyline, dz: f64) -> Polyline {
    Polyline {
        points: line
            .points
            .iter()
            .map(|p| p + Vec3::new(0.0, 0.0, dz))
            .collect(),
        closed: line.closed,
    }
}

/// Build a glass panel railing from picked segments.
///
/// Each straight sub-run is tiled into equal-width panels under the gap
/// and width constraints; an optional base channel is swept along the
/// whole centerline.
pub fn glass_railing(
    segments: &[Segment],
    params: &GlassRailingParams,
) -> Result<Document, BuildError> {
    let runs = stitched_runs(segments)?;
    let panel_profile = SectionProfile::rectangle(params.thickness, params.height)?;
    let mut parts = Vec::new();

    for (r, run) in runs.iter().enumerate() {
        let line = centerline(run, params.inset)?;

        for s in 0..line.segment_count() {
            let (a, b) = line.segment(s);
            let span = b - a;
            let length = span.norm();
            let Some(layout) = tile(length, params.panel_gap, params.max_panel_width) else {
                continue;
            };
            let u = span / length;
            for (i, (p0, p1)) in layout.spans().into_iter().enumerate() {
                let body = extrude(&panel_profile, a + p0 * u, (p1 - p0) * u)?;
                parts.push(Part::from_body(
                    format!("run{r}_seg{s}_panel_{i}"),
                    &body,
                    "glass",
                ));
            }
        }

        if params.base_channel {
            let profile = SectionProfile::channel(
                params.channel_width,
                params.channel_height,
                params.channel_wall,
            )?;
            let body = sweep(&profile, &line);
            parts.push(Part::from_body(format!("run{r}_channel"), &body, "aluminum"));
        }
    }

    Ok(assemble("glass_railing", parts, "aluminum"))
}

/// Build a cable railing from picked segments: posts at tiled bay
/// boundaries, horizontal cable runs at even spacing, and a top rail.
pub fn cable_railing(
    segments: &[Segment],
    params: &CableRailingParams,
) -> Result<Document, BuildError> {
    let runs = stitched_runs(segments)?;
    let post_height = params.height - params.rail_height;
    let half = params.post_size / 2.0;
    let post_profile = SectionProfile::new(vec![
        Point2::new(-half, -half),
        Point2::new(half, -half),
        Point2::new(half, half),
        Point2::new(-half, half),
    ])?;
    let cable_profile = SectionProfile::circle(params.cable_diameter / 2.0, 12)?;
    let rail_profile = SectionProfile::rectangle(params.rail_width, params.rail_height)?;

    let mut parts = Vec::new();
    for (r, run) in runs.iter().enumerate() {
        let line = centerline(run, params.inset)?;

        // Posts: both ends of every straight sub-run, plus bay boundaries
        // from the tiler.
        for s in 0..line.segment_count() {
            let (a, b) = line.segment(s);
            let span = b - a;
            let length = span.norm();
            let u = span / length;

            // The previous sub-run's end post already stands on this
            // segment's first point.
            let mut stations = if s == 0 { vec![0.0] } else { Vec::new() };
            if let Some(layout) = tile(length, params.post_size, params.max_post_spacing) {
                for i in 0..layout.count.saturating_sub(1) {
                    let bay_end = layout.panel_start(i) + layout.width;
                    stations.push(bay_end + half);
                }
            }
            stations.push(length);
            for (i, pos) in stations.into_iter().enumerate() {
                let base = a + pos * u;
                let body = extrude(&post_profile, base, Vec3::new(0.0, 0.0, post_height))?;
                parts.push(Part::from_body(
                    format!("run{r}_seg{s}_post_{i}"),
                    &body,
                    "aluminum",
                ));
            }
        }

        // Cables at even vertical spacing below the top rail.
        let spacing = post_height / (params.cable_count + 1) as f64;
        for c in 0..params.cable_count {
            let z = (c + 1) as f64 * spacing;
            let body = sweep(&cable_profile, &raised(&line, z));
            parts.push(Part::from_body(format!("run{r}_cable_{c}"), &body, "steel"));
        }

        let body = sweep(&rail_profile, &raised(&line, post_height));
        parts.push(Part::from_body(format!("run{r}_rail"), &body, "aluminum"));
    }

    Ok(assemble("cable_railing", parts, "aluminum"))
}

/// Build a standalone handrail swept along the picked path at height.
pub fn handrail(segments: &[Segment], params: &HandrailParams) -> Result<Document, BuildError> {
    let runs = stitched_runs(segments)?;
    let profile = SectionProfile::rectangle(params.width, params.thickness)?;

    let mut parts = Vec::new();
    for (r, run) in runs.iter().enumerate() {
        let line = centerline(run, params.inset)?;
        let body = sweep(&profile, &raised(&line, params.height));
        parts.push(Part::from_body(format!("run{r}_rail"), &body, "wood"));
    }

    Ok(assemble("handrail", parts, "wood"))
}
