#![warn(missing_docs)]

//! Stair flight, landing, and topology composition for the railkit kernel.
//!
//! Flights and landings are each built in their own local frame — walking
//! direction +x, width across +y, floor at z = 0 — and chained through
//! rigid placement transforms (translation plus Z rotation) into straight,
//! L, U, and switchback stairs. Treads and risers come from direct
//! extrusion; glass infill reuses the panel tiler and path offsetting
//! against each rail-bearing edge.

mod composer;
mod flight;
mod infill;
mod landing;

pub use composer::{compose, PlacedPart, StairPlan, StairSpec, StairTopology, TurnDirection};
pub use flight::FlightSpec;
pub use landing::RailSide;

use railkit_kernel_path::PathError;
use railkit_kernel_sweep::SweepError;
use thiserror::Error;

/// Shared cross-part dimensions for one staircase.
#[derive(Debug, Clone)]
pub struct StairStyle {
    /// Tread slab thickness.
    pub tread_thickness: f64,
    /// Riser plate thickness.
    pub riser_thickness: f64,
    /// Landing slab thickness.
    pub landing_thickness: f64,
    /// Glass infill, if the stair carries any.
    pub glass: Option<GlassInfill>,
}

impl Default for StairStyle {
    fn default() -> Self {
        Self {
            tread_thickness: 1.0,
            riser_thickness: 0.75,
            landing_thickness: 1.5,
            glass: Some(GlassInfill::default()),
        }
    }
}

/// Glass infill parameters, applied per flight edge and landing edge.
#[derive(Debug, Clone)]
pub struct GlassInfill {
    /// Panel height above the walking surface.
    pub height: f64,
    /// Panel thickness.
    pub thickness: f64,
    /// Gap between adjacent panels.
    pub gap: f64,
    /// Maximum panel width for the tiler.
    pub max_panel_width: f64,
    /// Which side(s) of the walking direction carry glass.
    pub side: RailSide,
}

impl Default for GlassInfill {
    fn default() -> Self {
        Self {
            height: 36.0,
            thickness: 0.5,
            gap: 1.0,
            max_panel_width: 48.0,
            side: RailSide::Both,
        }
    }
}

/// Errors from stair composition.
#[derive(Debug, Clone, Error)]
pub enum StairError {
    /// The flight list does not match the requested topology.
    #[error("{topology} stairs need {expected} flight(s), got {got}")]
    FlightCount {
        /// Topology name.
        topology: &'static str,
        /// Flights the topology requires.
        expected: usize,
        /// Flights supplied.
        got: usize,
    },

    /// A flight has a non-positive tread count, run, rise, or width.
    #[error("flight {0} has degenerate dimensions")]
    DegenerateFlight(usize),

    /// The landing depth is not positive.
    #[error("landing depth must be positive")]
    DegenerateLanding,

    /// Profile or extrusion construction failed.
    #[error(transparent)]
    Sweep(#[from] SweepError),

    /// Edge offsetting failed.
    #[error(transparent)]
    Path(#[from] PathError),
}
