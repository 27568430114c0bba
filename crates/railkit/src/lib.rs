#![warn(missing_docs)]

//! railkit — parametric railing and stair generation.
//!
//! Turns picked reference edges plus a parameter record into a declarative
//! scene plan: glass panel runs, cable railings, handrails and base
//! channels, and composed staircases. The tools here are thin callers over
//! the geometry kernel — segment chaining, path offsetting, panel tiling,
//! and profile sweeping all happen in the `railkit-kernel-*` crates, and
//! the result is a [`railkit_ir::Document`] a host adapter replays inside
//! one transaction.
//!
//! # Example
//!
//! ```
//! use railkit::{glass_railing, GlassRailingParams, Segment};
//! use railkit::kernel::{Point3, Vec3};
//!
//! // Two picked deck edges meeting at a corner.
//! let segments = vec![
//!     Segment::new(Point3::new(0.0, 0.0, 0.0), Point3::new(96.0, 0.0, 0.0))
//!         .with_reference(Vec3::new(0.0, -1.0, 0.0)),
//!     Segment::new(Point3::new(96.0, 0.0, 0.0), Point3::new(96.0, 72.0, 0.0))
//!         .with_reference(Vec3::new(1.0, 0.0, 0.0)),
//! ];
//!
//! let plan = glass_railing(&segments, &GlassRailingParams::default()).unwrap();
//! assert!(!plan.nodes.is_empty());
//! ```

mod params;
mod part;
mod railing;
mod stair;

pub use params::{
    CableRailingParams, GlassRailingParams, GlassSide, HandrailParams, StairParams, StairShape,
    Turn,
};
pub use part::{assemble, Part};
pub use railing::{cable_railing, glass_railing, handrail};
pub use stair::staircase;

pub use railkit_kernel_path::Segment;

/// Re-exported kernel types callers need to build inputs.
pub mod kernel {
    pub use railkit_kernel_layout::{tile, PanelLayout};
    pub use railkit_kernel_math::{Dir3, Point2, Point3, Tolerance, Transform, Vec3};
    pub use railkit_kernel_path::{
        group, offset_path, stitch, Polyline, Segment, StitchedPath,
    };
    pub use railkit_kernel_stairs::{
        compose, FlightSpec, GlassInfill, PlacedPart, RailSide, StairPlan, StairSpec,
        StairStyle, StairTopology, TurnDirection,
    };
    pub use railkit_kernel_sweep::{extrude, sweep, Drive, SectionProfile, SweepBody, SweepFrame};
}

use railkit_kernel_path::PathError;
use railkit_kernel_stairs::StairError;
use railkit_kernel_sweep::SweepError;
use thiserror::Error;

/// Errors surfaced by the railing and stair tools.
///
/// Every failure is raised before any plan node is emitted, so a host
/// adapter never sees a half-built assembly.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The selection contained no usable segments.
    #[error("selection contains no usable segments")]
    EmptySelection,

    /// A path segment is vertical and no reference direction was picked,
    /// so there is nothing to offset against.
    #[error("segment {0} is vertical and carries no reference direction")]
    VerticalSegment(usize),

    /// Chaining or offsetting failed.
    #[error(transparent)]
    Path(#[from] PathError),

    /// Profile construction or sweeping failed.
    #[error(transparent)]
    Sweep(#[from] SweepError),

    /// Stair composition failed.
    #[error(transparent)]
    Stairs(#[from] StairError),
}
