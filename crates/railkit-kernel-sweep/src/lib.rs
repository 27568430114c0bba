#![warn(missing_docs)]

//! Cross-section profiles and path sweeps for the railkit kernel.
//!
//! A railing run's continuous parts — handrails, base channels, cables —
//! are a 2D cross-section carried along a 3D path. The kernel's job ends
//! at constructing the correctly placed starting face and the ordered
//! path; the host's extrude and follow-path primitives build the solid.

mod profile;
mod sweep;

pub use profile::SectionProfile;
pub use sweep::{extrude, sweep, Drive, SweepBody, SweepFrame};

use thiserror::Error;

/// Errors from profile construction and sweeping.
#[derive(Debug, Clone, Error)]
pub enum SweepError {
    /// A face needs at least three points.
    #[error("profile needs at least 3 points, got {0}")]
    TooFewProfilePoints(usize),

    /// Consecutive profile points coincide.
    #[error("degenerate profile segment at index {0}")]
    DegenerateProfileSegment(usize),

    /// The profile outline encloses no area.
    #[error("profile has zero area")]
    ZeroAreaProfile,

    /// The profile outline crosses itself; sweeping it would self-intersect.
    #[error("profile outline self-intersects")]
    SelfIntersecting,

    /// Extrusion direction has zero length.
    #[error("extrusion direction is zero")]
    ZeroExtrusion,
}
