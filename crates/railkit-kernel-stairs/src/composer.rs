//! Chaining flights and landings into stair topologies.

use std::f64::consts::{FRAC_PI_2, PI};

use railkit_kernel_math::Transform;
use railkit_kernel_sweep::SweepBody;

use crate::flight::{build_flight, FlightSpec};
use crate::infill::LocalPart;
use crate::landing::{build_switchback_landing, build_turn_landing};
use crate::{StairError, StairStyle};

/// The fixed set of stair arrangements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StairTopology {
    /// One flight, no landings.
    Straight,
    /// Two flights joined by one 90° landing.
    LTurn,
    /// Three flights joined by two 90° landings turning the same way.
    UTurn,
    /// Two flights joined by one 180° double-width landing.
    Switchback,
}

impl StairTopology {
    fn name(&self) -> &'static str {
        match self {
            StairTopology::Straight => "straight",
            StairTopology::LTurn => "L",
            StairTopology::UTurn => "U",
            StairTopology::Switchback => "switchback",
        }
    }

    /// Flights this topology is built from.
    pub fn flight_count(&self) -> usize {
        match self {
            StairTopology::Straight => 1,
            StairTopology::LTurn | StairTopology::Switchback => 2,
            StairTopology::UTurn => 3,
        }
    }
}

/// Which way the stair turns at each landing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnDirection {
    /// Turns toward the walker's left.
    Left,
    /// Turns toward the walker's right.
    Right,
}

/// Full description of one staircase.
#[derive(Debug, Clone)]
pub struct StairSpec {
    /// Arrangement of flights and landings.
    pub topology: StairTopology,
    /// Turn direction at every landing.
    pub turn: TurnDirection,
    /// Per-flight dimensions; length must match the topology.
    pub flights: Vec<FlightSpec>,
    /// Landing depth along the incoming walking direction.
    pub landing_depth: f64,
    /// Shared part dimensions and glass infill.
    pub style: StairStyle,
}

/// A part with its placement in the assembly.
#[derive(Debug, Clone)]
pub struct PlacedPart {
    /// Hierarchical part name, e.g. `flight1_tread_3`.
    pub name: String,
    /// Geometry in element-local coordinates.
    pub body: SweepBody,
    /// Rigid placement of the element's local frame.
    pub transform: Transform,
    /// Material key for the scene entry.
    pub material: String,
}

/// A fully composed staircase, still in its own origin frame.
///
/// The orchestration layer groups the parts under one parent transform;
/// re-running composition and re-applying a saved parent transform is how
/// an existing stair is modified.
#[derive(Debug, Clone)]
pub struct StairPlan {
    /// All placed parts in composition order.
    pub parts: Vec<PlacedPart>,
    /// Elevation of the topmost walking surface.
    pub total_rise: f64,
}

/// Compose a staircase from its spec.
///
/// Each flight and landing is built at the origin in its own frame and
/// placed by a cursor transform advanced as a state machine: a flight
/// moves the cursor by its length and height, a landing rotates it 0°,
/// ±90°, or 180° with turn-dependent offsets. Left and Right turns use
/// mirrored offset formulas and mirrored glass-side assignment.
///
/// # Errors
///
/// - [`StairError::FlightCount`] when the flight list does not match the
///   topology
/// - [`StairError::DegenerateFlight`] / [`StairError::DegenerateLanding`]
///   for non-positive dimensions
pub fn compose(spec: &StairSpec) -> Result<StairPlan, StairError> {
    let expected = spec.topology.flight_count();
    if spec.flights.len() != expected {
        return Err(StairError::FlightCount {
            topology: spec.topology.name(),
            expected,
            got: spec.flights.len(),
        });
    }
    let has_landings = expected > 1;
    if has_landings && spec.landing_depth <= 0.0 {
        return Err(StairError::DegenerateLanding);
    }

    let inner_is_left = spec.turn == TurnDirection::Left;
    let mut cursor = Transform::identity();
    let mut parts = Vec::new();
    let mut total_rise = 0.0;

    for (k, flight) in spec.flights.iter().enumerate() {
        flight.validate(k)?;
        let local = build_flight(flight, &spec.style, inner_is_left)?;
        place(&mut parts, local, &cursor, &format!("flight{k}"));
        cursor = cursor.then(&Transform::translation(
            flight.length(),
            0.0,
            flight.height(),
        ));
        total_rise += flight.height();

        if k + 1 == spec.flights.len() {
            break;
        }
        let width = flight.width;
        let depth = spec.landing_depth;

        match spec.topology {
            StairTopology::LTurn | StairTopology::UTurn => {
                let local = build_turn_landing(depth, width, &spec.style, spec.turn)?;
                place(&mut parts, local, &cursor, &format!("landing{k}"));
                cursor = match spec.turn {
                    TurnDirection::Left => cursor
                        .then(&Transform::translation(depth, width, 0.0))
                        .then(&Transform::rotation_z(FRAC_PI_2)),
                    TurnDirection::Right => cursor.then(&Transform::rotation_z(-FRAC_PI_2)),
                };
            }
            StairTopology::Switchback => {
                let local = build_switchback_landing(depth, width, &spec.style)?;
                // The landing is modeled with the entry flight on its near
                // half; a right turn shifts it so the entry is the far half.
                let landing_cursor = match spec.turn {
                    TurnDirection::Left => cursor.clone(),
                    TurnDirection::Right => {
                        cursor.then(&Transform::translation(0.0, -width, 0.0))
                    }
                };
                place(&mut parts, local, &landing_cursor, &format!("landing{k}"));
                cursor = match spec.turn {
                    TurnDirection::Left => cursor
                        .then(&Transform::translation(0.0, 2.0 * width, 0.0))
                        .then(&Transform::rotation_z(PI)),
                    TurnDirection::Right => cursor.then(&Transform::rotation_z(PI)),
                };
            }
            StairTopology::Straight => {}
        }
    }

    Ok(StairPlan { parts, total_rise })
}

fn place(parts: &mut Vec<PlacedPart>, local: Vec<LocalPart>, cursor: &Transform, prefix: &str) {
    for part in local {
        parts.push(PlacedPart {
            name: format!("{prefix}_{}", part.name),
            body: part.body,
            transform: cursor.clone(),
            material: part.material.to_string(),
        });
    }
}
