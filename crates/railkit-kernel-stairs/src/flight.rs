//! One straight run of treads and risers, built in its local frame.

use railkit_kernel_math::{Point3, Vec3};
use railkit_kernel_sweep::{extrude, SectionProfile};

use crate::infill::{edge_glass_panels, LocalPart};
use crate::landing::RailSide;
use crate::{StairError, StairStyle};

/// Dimensions of one flight.
#[derive(Debug, Clone, Copy)]
pub struct FlightSpec {
    /// Number of treads.
    pub treads: usize,
    /// Horizontal run per tread.
    pub run: f64,
    /// Vertical rise per tread.
    pub rise: f64,
    /// Flight width.
    pub width: f64,
}

impl FlightSpec {
    /// Horizontal length of the flight.
    pub fn length(&self) -> f64 {
        self.treads as f64 * self.run
    }

    /// Total height climbed by the flight.
    pub fn height(&self) -> f64 {
        self.treads as f64 * self.rise
    }

    pub(crate) fn validate(&self, index: usize) -> Result<(), StairError> {
        if self.treads == 0 || self.run <= 0.0 || self.rise <= 0.0 || self.width <= 0.0 {
            return Err(StairError::DegenerateFlight(index));
        }
        Ok(())
    }

    /// Walking-surface elevation at horizontal offset `x` into the flight.
    pub fn surface_elevation(&self, x: f64) -> f64 {
        let step = (x / self.run).floor().max(0.0) as usize;
        (step.min(self.treads - 1) + 1) as f64 * self.rise
    }
}

/// Build a flight's parts in local coordinates: walking direction +x,
/// width across +y, floor at z = 0.
///
/// `inner_is_left` resolves the glass side selection: the turn's inner
/// side is the walker's left (+y) for left-turning stairs.
pub(crate) fn build_flight(
    spec: &FlightSpec,
    style: &StairStyle,
    inner_is_left: bool,
) -> Result<Vec<LocalPart>, StairError> {
    let mut parts = Vec::new();

    let tread_profile = SectionProfile::rectangle(spec.run, style.tread_thickness)?;
    let riser_profile = SectionProfile::rectangle(style.riser_thickness, spec.rise)?;
    let across = Vec3::new(0.0, spec.width, 0.0);

    for i in 0..spec.treads {
        let x0 = i as f64 * spec.run;
        let top = (i + 1) as f64 * spec.rise;

        let tread_origin = Point3::new(x0 + spec.run / 2.0, 0.0, top - style.tread_thickness);
        parts.push(LocalPart {
            name: format!("tread_{i}"),
            body: extrude(&tread_profile, tread_origin, across)?,
            material: "wood",
        });

        let riser_origin = Point3::new(x0 + style.riser_thickness / 2.0, 0.0, top - spec.rise);
        parts.push(LocalPart {
            name: format!("riser_{i}"),
            body: extrude(&riser_profile, riser_origin, across)?,
            material: "wood",
        });
    }

    if let Some(glass) = &style.glass {
        let length = spec.length();
        let edges = [
            // (edge y, outward, is_left)
            (spec.width, Vec3::new(0.0, 1.0, 0.0), true),
            (0.0, Vec3::new(0.0, -1.0, 0.0), false),
        ];
        for (y, outward, is_left) in edges {
            let wanted = match glass.side {
                RailSide::Both => true,
                RailSide::Inner => is_left == inner_is_left,
                RailSide::Outer => is_left != inner_is_left,
            };
            if !wanted {
                continue;
            }
            let prefix = if is_left { "glass_left" } else { "glass_right" };
            parts.extend(edge_glass_panels(
                Point3::new(0.0, y, 0.0),
                Point3::new(length, y, 0.0),
                outward,
                glass,
                |s| spec.surface_elevation(s),
                prefix,
            )?);
        }
    }

    Ok(parts)
}
