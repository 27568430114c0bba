//! Plan-building parts: kernel geometry wrapped as IR subtrees.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use railkit_ir::{standard_materials, Document, Node, NodeId, PlanOp, SceneEntry, Vec3 as IrVec3};
use railkit_kernel_math::{Point3, Transform, Vec3};
use railkit_kernel_sweep::{Drive, SweepBody};

/// Global atomic counter for unique plan node ids.
static NEXT_NODE_ID: AtomicU64 = AtomicU64::new(1);

/// Allocate a globally unique [`NodeId`].
fn alloc_node_id() -> NodeId {
    NEXT_NODE_ID.fetch_add(1, Ordering::Relaxed)
}

fn ir_point(p: &Point3) -> IrVec3 {
    IrVec3::new(p.x, p.y, p.z)
}

fn ir_vec(v: &Vec3) -> IrVec3 {
    IrVec3::new(v.x, v.y, v.z)
}

/// A named piece of the plan: an IR subtree plus a material key.
///
/// Parts accumulate their own node maps and are merged into one
/// [`Document`] by [`assemble`]; node ids are globally unique so merging
/// is a plain union.
#[derive(Debug, Clone)]
pub struct Part {
    /// Part name, used for the node and the material override entry.
    pub name: String,
    /// Material key for this part.
    pub material: String,
    root: NodeId,
    nodes: HashMap<NodeId, Node>,
}

impl Part {
    /// Wrap a swept body as a plan subtree: a face node driven by an
    /// extrude or follow-path sweep node.
    pub fn from_body(name: impl Into<String>, body: &SweepBody, material: &str) -> Self {
        let name = name.into();
        let mut nodes = HashMap::new();

        let face_id = alloc_node_id();
        nodes.insert(
            face_id,
            Node {
                id: face_id,
                name: None,
                op: PlanOp::Face {
                    points: body.face.iter().map(ir_point).collect(),
                },
            },
        );

        let op = match &body.drive {
            Drive::Linear {
                direction,
                distance,
            } => PlanOp::Extrude {
                face: face_id,
                direction: ir_vec(direction.as_ref()),
                distance: *distance,
            },
            Drive::Follow(path) => PlanOp::Sweep {
                face: face_id,
                path: path.points.iter().map(ir_point).collect(),
                closed: path.closed,
            },
        };

        let root = alloc_node_id();
        nodes.insert(
            root,
            Node {
                id: root,
                name: Some(name.clone()),
                op,
            },
        );

        Self {
            name,
            material: material.to_string(),
            root,
            nodes,
        }
    }

    /// Root node id of this part's subtree.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Wrap the part in a rigid placement: rotation about Z, then
    /// translation. Identity components are skipped entirely.
    pub fn placed(mut self, transform: &Transform) -> Self {
        let angle = transform.rotation_z_part();
        let offset = transform.translation_part();

        if angle.abs() > 1e-12 {
            let id = alloc_node_id();
            self.nodes.insert(
                id,
                Node {
                    id,
                    name: None,
                    op: PlanOp::RotateZ {
                        child: self.root,
                        degrees: angle.to_degrees(),
                    },
                },
            );
            self.root = id;
        }

        if offset.norm() > 1e-12 {
            let id = alloc_node_id();
            self.nodes.insert(
                id,
                Node {
                    id,
                    name: None,
                    op: PlanOp::Translate {
                        child: self.root,
                        offset: ir_vec(&offset),
                    },
                },
            );
            self.root = id;
        }

        self
    }
}

/// Merge parts into one plan document grouped under a single named root.
///
/// The group becomes the document's only scene entry with
/// `default_material`; each part's own material lands in
/// `part_materials` keyed by part name. Standard railing materials are
/// always defined so hosts can resolve the keys.
pub fn assemble(name: &str, parts: Vec<Part>, default_material: &str) -> Document {
    let mut doc = Document::new();
    doc.materials = standard_materials();

    let mut children = Vec::with_capacity(parts.len());
    for part in parts {
        children.push(part.root);
        doc.part_materials.insert(part.name, part.material);
        doc.nodes.extend(part.nodes);
    }

    let group_id = alloc_node_id();
    doc.nodes.insert(
        group_id,
        Node {
            id: group_id,
            name: Some(name.to_string()),
            op: PlanOp::Group { children },
        },
    );
    doc.roots.push(SceneEntry {
        root: group_id,
        material: default_material.to_string(),
    });

    doc
}
