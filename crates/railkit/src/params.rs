//! Caller-owned parameter records.
//!
//! These are the flat key→value records the orchestration layer persists
//! between invocations ("last used values") and round-trips through job
//! files. Defaults seed the forms; the kernel itself holds no state.

use serde::{Deserialize, Serialize};

use railkit_kernel_stairs::{
    FlightSpec, GlassInfill, RailSide, StairSpec, StairStyle, StairTopology, TurnDirection,
};

/// Parameters for a glass panel railing run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GlassRailingParams {
    /// Panel height above the walking surface.
    pub height: f64,
    /// Glass thickness.
    pub thickness: f64,
    /// Gap between adjacent panels.
    pub panel_gap: f64,
    /// Maximum panel width for the tiler.
    pub max_panel_width: f64,
    /// Inset of the glass centerline from the picked edge, measured
    /// against the reference directions. Zero centers the glass on a
    /// drawn line; half the face thickness flushes it with a picked face.
    pub inset: f64,
    /// Emit a base channel swept along the run.
    pub base_channel: bool,
    /// Base channel outer width.
    pub channel_width: f64,
    /// Base channel height.
    pub channel_height: f64,
    /// Base channel wall thickness.
    pub channel_wall: f64,
}

impl Default for GlassRailingParams {
    fn default() -> Self {
        Self {
            height: 36.0,
            thickness: 0.5,
            panel_gap: 1.0,
            max_panel_width: 48.0,
            inset: 0.0,
            base_channel: true,
            channel_width: 2.5,
            channel_height: 4.0,
            channel_wall: 0.25,
        }
    }
}

/// Parameters for a cable railing run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CableRailingParams {
    /// Railing height (top rail top face).
    pub height: f64,
    /// Number of horizontal cable runs.
    pub cable_count: u32,
    /// Cable diameter.
    pub cable_diameter: f64,
    /// Square post side length.
    pub post_size: f64,
    /// Maximum post spacing along the run.
    pub max_post_spacing: f64,
    /// Inset of the post centerline from the picked edge.
    pub inset: f64,
    /// Top rail width.
    pub rail_width: f64,
    /// Top rail height.
    pub rail_height: f64,
}

impl Default for CableRailingParams {
    fn default() -> Self {
        Self {
            height: 36.0,
            cable_count: 10,
            cable_diameter: 0.375,
            post_size: 2.0,
            max_post_spacing: 48.0,
            inset: 0.0,
            rail_width: 2.5,
            rail_height: 1.5,
        }
    }
}

/// Parameters for a standalone handrail sweep.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HandrailParams {
    /// Rail centerline height above the picked path.
    pub height: f64,
    /// Rail width.
    pub width: f64,
    /// Rail thickness (vertical).
    pub thickness: f64,
    /// Offset of the rail centerline from the picked edge.
    pub inset: f64,
}

impl Default for HandrailParams {
    fn default() -> Self {
        Self {
            height: 34.0,
            width: 2.0,
            thickness: 1.5,
            inset: 3.0,
        }
    }
}

/// Stair arrangement, serde-friendly mirror of
/// [`railkit_kernel_stairs::StairTopology`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StairShape {
    /// One straight flight.
    Straight,
    /// Two flights with a 90° landing.
    L,
    /// Three flights with two 90° landings.
    U,
    /// Two flights with a 180° landing.
    Switchback,
}

/// Turn direction, serde-friendly mirror of
/// [`railkit_kernel_stairs::TurnDirection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Turn {
    /// Turn toward the walker's left.
    Left,
    /// Turn toward the walker's right.
    Right,
}

/// Glass side selection, serde-friendly mirror of
/// [`railkit_kernel_stairs::RailSide`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlassSide {
    /// Only the turn's inner side.
    Inner,
    /// Only the turn's outer side.
    Outer,
    /// Both sides.
    Both,
}

/// Parameters for a composed staircase.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StairParams {
    /// Arrangement of flights and landings.
    pub shape: StairShape,
    /// Turn direction at every landing.
    pub turn: Turn,
    /// Tread count per flight; length must match the shape.
    pub treads_per_flight: Vec<usize>,
    /// Horizontal run per tread.
    pub run: f64,
    /// Vertical rise per tread.
    pub rise: f64,
    /// Flight width.
    pub width: f64,
    /// Landing depth along the incoming walking direction.
    pub landing_depth: f64,
    /// Tread slab thickness.
    pub tread_thickness: f64,
    /// Riser plate thickness.
    pub riser_thickness: f64,
    /// Landing slab thickness.
    pub landing_thickness: f64,
    /// Emit glass infill along the flights and landings.
    pub glass: bool,
    /// Which side(s) carry the glass.
    pub glass_side: GlassSide,
    /// Glass panel height.
    pub glass_height: f64,
    /// Glass thickness.
    pub glass_thickness: f64,
    /// Gap between glass panels.
    pub panel_gap: f64,
    /// Maximum glass panel width.
    pub max_panel_width: f64,
}

impl Default for StairParams {
    fn default() -> Self {
        Self {
            shape: StairShape::L,
            turn: Turn::Left,
            treads_per_flight: vec![8, 8],
            run: 11.0,
            rise: 7.5,
            width: 36.0,
            landing_depth: 36.0,
            tread_thickness: 1.0,
            riser_thickness: 0.75,
            landing_thickness: 1.5,
            glass: true,
            glass_side: GlassSide::Both,
            glass_height: 36.0,
            glass_thickness: 0.5,
            panel_gap: 1.0,
            max_panel_width: 48.0,
        }
    }
}

impl StairParams {
    /// Lower the parameter record into the kernel's stair spec.
    pub fn to_spec(&self) -> StairSpec {
        let flights = self
            .treads_per_flight
            .iter()
            .map(|&treads| FlightSpec {
                treads,
                run: self.run,
                rise: self.rise,
                width: self.width,
            })
            .collect();

        StairSpec {
            topology: match self.shape {
                StairShape::Straight => StairTopology::Straight,
                StairShape::L => StairTopology::LTurn,
                StairShape::U => StairTopology::UTurn,
                StairShape::Switchback => StairTopology::Switchback,
            },
            turn: match self.turn {
                Turn::Left => TurnDirection::Left,
                Turn::Right => TurnDirection::Right,
            },
            flights,
            landing_depth: self.landing_depth,
            style: StairStyle {
                tread_thickness: self.tread_thickness,
                riser_thickness: self.riser_thickness,
                landing_thickness: self.landing_thickness,
                glass: self.glass.then(|| GlassInfill {
                    height: self.glass_height,
                    thickness: self.glass_thickness,
                    gap: self.panel_gap,
                    max_panel_width: self.max_panel_width,
                    side: match self.glass_side {
                        GlassSide::Inner => RailSide::Inner,
                        GlassSide::Outer => RailSide::Outer,
                        GlassSide::Both => RailSide::Both,
                    },
                }),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_lower_to_valid_spec() {
        let spec = StairParams::default().to_spec();
        assert_eq!(spec.flights.len(), 2);
        assert_eq!(spec.topology, StairTopology::LTurn);
        assert!(spec.style.glass.is_some());
    }

    #[test]
    fn test_params_survive_serde_defaults() {
        // A sparse record fills in defaults, the "last values" contract.
        let params: GlassRailingParams = serde_json::from_str(r#"{"height": 42.0}"#).unwrap();
        assert!((params.height - 42.0).abs() < 1e-12);
        assert!((params.thickness - 0.5).abs() < 1e-12);
        assert!(params.base_channel);
    }

    #[test]
    fn test_shape_serializes_snake_case() {
        let json = serde_json::to_string(&StairShape::Switchback).unwrap();
        assert_eq!(json, r#""switchback""#);
    }
}
