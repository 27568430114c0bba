//! Glass infill panels along a rail-bearing edge.

use railkit_kernel_layout::tile;
use railkit_kernel_math::{Dir3, Point3, Tolerance, Vec3};
use railkit_kernel_path::{offset_path, Polyline};
use railkit_kernel_sweep::{extrude, SectionProfile, SweepBody};

use crate::{GlassInfill, StairError};

/// A part in element-local coordinates, before placement.
#[derive(Debug, Clone)]
pub(crate) struct LocalPart {
    pub name: String,
    pub body: SweepBody,
    pub material: &'static str,
}

/// Tile glass panels along one edge.
///
/// The edge runs at z = 0 in element-local coordinates with `outward`
/// pointing away from the walking surface; panels sit on the centerline
/// half a panel thickness inside it. `base_z` gives the panel bottom
/// elevation at an offset along the edge (constant for landings, stepped
/// for flights). An edge too short to tile yields no panels.
pub(crate) fn edge_glass_panels(
    start: Point3,
    end: Point3,
    outward: Vec3,
    glass: &GlassInfill,
    base_z: impl Fn(f64) -> f64,
    name_prefix: &str,
) -> Result<Vec<LocalPart>, StairError> {
    let tol = Tolerance::DEFAULT;
    let edge = Polyline::new(vec![start, end], false, tol)?;
    let refs = [Dir3::new_normalize(outward)];
    let centerline = offset_path(&edge, &refs, glass.thickness / 2.0, tol)?;

    let run_dir = Dir3::new_normalize(centerline.segment_direction(0));
    let Some(layout) = tile(centerline.length(), glass.gap, glass.max_panel_width) else {
        return Ok(Vec::new());
    };

    let profile = SectionProfile::rectangle(glass.thickness, glass.height)?;
    let mut parts = Vec::with_capacity(layout.count);
    for (i, (s, e)) in layout.spans().into_iter().enumerate() {
        let origin =
            centerline.points[0] + s * run_dir.as_ref() + Vec3::new(0.0, 0.0, base_z(s));
        let body = extrude(&profile, origin, (e - s) * run_dir.as_ref())?;
        parts.push(LocalPart {
            name: format!("{name_prefix}_panel_{i}"),
            body,
            material: "glass",
        });
    }
    Ok(parts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RailSide;

    #[test]
    fn test_edge_panels_sit_on_centerline() {
        let glass = GlassInfill {
            height: 36.0,
            thickness: 0.5,
            gap: 1.0,
            max_panel_width: 48.0,
            side: RailSide::Both,
        };
        // Edge along +x with outward -y: centerline lands at y = +0.25.
        let parts = edge_glass_panels(
            Point3::origin(),
            Point3::new(96.0, 0.0, 0.0),
            Vec3::new(0.0, -1.0, 0.0),
            &glass,
            |_| 0.0,
            "edge",
        )
        .unwrap();

        assert_eq!(parts.len(), 2);
        for part in &parts {
            let (min, max) = part.body.face_bounds();
            assert!((min.y).abs() < 1e-9, "panel inset toward +y: {min:?}");
            assert!((max.y - 0.5).abs() < 1e-9);
            assert_eq!(part.material, "glass");
        }
    }

    #[test]
    fn test_stepped_base_elevation() {
        let glass = GlassInfill::default();
        let parts = edge_glass_panels(
            Point3::origin(),
            Point3::new(60.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            &glass,
            |s| 7.5 * ((s / 10.0).floor() + 1.0),
            "edge",
        )
        .unwrap();
        assert!(!parts.is_empty());
        // Later panels start higher.
        let (first_min, _) = parts.first().unwrap().body.face_bounds();
        let (last_min, _) = parts.last().unwrap().body.face_bounds();
        assert!(last_min.z > first_min.z);
    }
}
