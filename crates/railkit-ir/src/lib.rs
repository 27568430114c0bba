#![warn(missing_docs)]

//! Scene plan representation for the railkit ecosystem.
//!
//! The kernel computes railing and stair geometry fully in memory; what it
//! hands to a host 3D environment is this declarative plan — faces from
//! ordered point loops, extrusions, follow-path sweeps, and grouped
//! transforms. A host adapter walks the plan inside one undoable
//! transaction and maps node ids to its own object handles. No mesh data
//! lives here.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Unique identifier for a node in the plan graph.
pub type NodeId = u64;

/// 3D vector or point with f64 components (model units; inches in the
/// source domain).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl Vec3 {
    /// Create a new Vec3.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// One geometry operation — the building block of the plan graph.
///
/// Leaf ops carry point data; combining ops reference children by
/// [`NodeId`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlanOp {
    /// Planar face built from an ordered loop of points.
    Face {
        /// Outline points in order; the closing edge is implied.
        points: Vec<Vec3>,
    },
    /// Linear extrusion of a face node.
    Extrude {
        /// The face to extrude.
        face: NodeId,
        /// Unit extrusion direction.
        direction: Vec3,
        /// Extrusion distance.
        distance: f64,
    },
    /// Follow-path sweep of a face node along a polyline.
    Sweep {
        /// The face to sweep.
        face: NodeId,
        /// Path vertices in order.
        path: Vec<Vec3>,
        /// Whether the path closes back on its first vertex.
        closed: bool,
    },
    /// Assembly of child nodes.
    Group {
        /// Children in creation order.
        children: Vec<NodeId>,
    },
    /// Translation of a child node.
    Translate {
        /// Child node to translate.
        child: NodeId,
        /// Translation offset.
        offset: Vec3,
    },
    /// Rotation of a child node about the world Z axis.
    RotateZ {
        /// Child node to rotate.
        child: NodeId,
        /// Rotation angle in degrees.
        degrees: f64,
    },
}

/// A node in the plan graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier.
    pub id: NodeId,
    /// Optional human-readable name ("panel_3", "handrail").
    pub name: Option<String>,
    /// The operation this node represents.
    pub op: PlanOp,
}

/// Material definition handed to the host's material registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialDef {
    /// Material name (e.g. "glass", "aluminum").
    pub name: String,
    /// Base color as `[r, g, b]` in 0.0..1.0.
    pub color: [f64; 3],
    /// Metallic factor (0.0 = dielectric, 1.0 = metal).
    pub metallic: f64,
    /// Roughness factor (0.0 = mirror, 1.0 = diffuse).
    pub roughness: f64,
    /// Opacity (1.0 = opaque; glass panels are well below).
    pub opacity: f64,
}

/// The stock materials railing parts are assigned by default.
pub fn standard_materials() -> HashMap<String, MaterialDef> {
    let defs = [
        MaterialDef {
            name: "glass".to_string(),
            color: [0.62, 0.78, 0.78],
            metallic: 0.0,
            roughness: 0.05,
            opacity: 0.35,
        },
        MaterialDef {
            name: "aluminum".to_string(),
            color: [0.91, 0.92, 0.93],
            metallic: 1.0,
            roughness: 0.4,
            opacity: 1.0,
        },
        MaterialDef {
            name: "steel".to_string(),
            color: [0.66, 0.67, 0.68],
            metallic: 1.0,
            roughness: 0.3,
            opacity: 1.0,
        },
        MaterialDef {
            name: "wood".to_string(),
            color: [0.55, 0.41, 0.28],
            metallic: 0.0,
            roughness: 0.8,
            opacity: 1.0,
        },
    ];
    defs.into_iter().map(|m| (m.name.clone(), m)).collect()
}

/// An entry in the scene — a root node with an assigned material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneEntry {
    /// Root node of this scene part.
    pub root: NodeId,
    /// Material key referencing a [`MaterialDef::name`].
    pub material: String,
}

/// A railkit plan document — the `.railkit.json` file format.
///
/// Contains the full plan graph, material definitions, and scene assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Format version string (e.g. "0.3").
    pub version: String,
    /// All nodes in the graph, keyed by [`NodeId`].
    pub nodes: HashMap<NodeId, Node>,
    /// Material definitions, keyed by name.
    pub materials: HashMap<String, MaterialDef>,
    /// Per-part material overrides (node name → material name), applied on
    /// top of the owning scene entry's material.
    pub part_materials: HashMap<String, String>,
    /// Scene entries (assembled parts with materials).
    pub roots: Vec<SceneEntry>,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            version: "0.3".to_string(),
            nodes: HashMap::new(),
            materials: HashMap::new(),
            part_materials: HashMap::new(),
            roots: Vec::new(),
        }
    }
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
