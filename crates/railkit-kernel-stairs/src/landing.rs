//! Landing slabs with edge-selectable glass infill.

use railkit_kernel_math::{Point3, Vec3};
use railkit_kernel_sweep::{extrude, SectionProfile};

use crate::composer::TurnDirection;
use crate::infill::{edge_glass_panels, LocalPart};
use crate::{StairError, StairStyle};

/// Which side(s) of the walking direction carry glass.
///
/// Inner and Outer are relative to the stair's turn: a left-turning
/// stair's inner side is the walker's left. Turn landings only expose
/// outer rail edges — their inner corner is where the flights meet — so
/// `Inner` suppresses landing glass entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RailSide {
    /// Only the turn's inner side.
    Inner,
    /// Only the turn's outer side.
    Outer,
    /// Both sides.
    Both,
}

/// Build a 90°-turn landing in local coordinates: entry edge at x = 0,
/// slab x ∈ [0, depth], y ∈ [0, width], walking surface at z = 0.
///
/// Rail-bearing edges are the far edge (x = depth) and the side opposite
/// the exit: a left turn exits over y = width, leaving y = 0 railed.
pub(crate) fn build_turn_landing(
    depth: f64,
    width: f64,
    style: &StairStyle,
    turn: TurnDirection,
) -> Result<Vec<LocalPart>, StairError> {
    let mut parts = vec![slab(depth, width, style)?];

    if let Some(glass) = &style.glass {
        if glass.side != RailSide::Inner {
            // Far edge, outward +x.
            parts.extend(edge_glass_panels(
                Point3::new(depth, 0.0, 0.0),
                Point3::new(depth, width, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                glass,
                |_| 0.0,
                "glass_far",
            )?);
            // Railed side edge, opposite the exit.
            let (y, outward) = match turn {
                TurnDirection::Left => (0.0, Vec3::new(0.0, -1.0, 0.0)),
                TurnDirection::Right => (width, Vec3::new(0.0, 1.0, 0.0)),
            };
            parts.extend(edge_glass_panels(
                Point3::new(0.0, y, 0.0),
                Point3::new(depth, y, 0.0),
                outward,
                glass,
                |_| 0.0,
                "glass_side",
            )?);
        }
    }

    Ok(parts)
}

/// Build a switchback landing in local coordinates: both flights attach
/// at x = 0, slab x ∈ [0, depth], y ∈ [0, 2·width], surface at z = 0.
///
/// Rail-bearing edges: the far edge and both side edges.
pub(crate) fn build_switchback_landing(
    depth: f64,
    width: f64,
    style: &StairStyle,
) -> Result<Vec<LocalPart>, StairError> {
    let full = 2.0 * width;
    let mut parts = vec![slab(depth, full, style)?];

    if let Some(glass) = &style.glass {
        if glass.side != RailSide::Inner {
            parts.extend(edge_glass_panels(
                Point3::new(depth, 0.0, 0.0),
                Point3::new(depth, full, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                glass,
                |_| 0.0,
                "glass_far",
            )?);
            for (y, outward, name) in [
                (0.0, Vec3::new(0.0, -1.0, 0.0), "glass_near_side"),
                (full, Vec3::new(0.0, 1.0, 0.0), "glass_return_side"),
            ] {
                parts.extend(edge_glass_panels(
                    Point3::new(0.0, y, 0.0),
                    Point3::new(depth, y, 0.0),
                    outward,
                    glass,
                    |_| 0.0,
                    name,
                )?);
            }
        }
    }

    Ok(parts)
}

fn slab(depth: f64, width: f64, style: &StairStyle) -> Result<LocalPart, StairError> {
    let profile = SectionProfile::rectangle(depth, style.landing_thickness)?;
    let origin = Point3::new(depth / 2.0, 0.0, -style.landing_thickness);
    Ok(LocalPart {
        name: "slab".to_string(),
        body: extrude(&profile, origin, Vec3::new(0.0, width, 0.0))?,
        material: "wood",
    })
}
