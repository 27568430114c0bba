//! Staircase tool: compose the kernel's stair plan into a scene document.

use railkit_ir::Document;
use railkit_kernel_math::Transform;
use railkit_kernel_stairs::compose;

use crate::part::{assemble, Part};
use crate::{BuildError, StairParams};

/// Build a staircase from a parameter record.
///
/// Composition always happens at the origin; `placement` re-applies a
/// saved group transform on top. Modifying an existing stair is therefore
/// delete-the-old-group, rebuild here, hand the host the same placement —
/// composition itself never distinguishes create from modify.
pub fn staircase(params: &StairParams, placement: Option<&Transform>) -> Result<Document, BuildError> {
    let plan = compose(&params.to_spec())?;

    let parts = plan
        .parts
        .into_iter()
        .map(|placed| {
            let mut part = Part::from_body(placed.name, &placed.body, &placed.material)
                .placed(&placed.transform);
            if let Some(placement) = placement {
                part = part.placed(placement);
            }
            part
        })
        .collect();

    Ok(assemble("staircase", parts, "wood"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use railkit_ir::PlanOp;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_staircase_document() {
        let doc = staircase(&StairParams::default(), None).unwrap();

        // One grouped root.
        assert_eq!(doc.roots.len(), 1);
        let group = &doc.nodes[&doc.roots[0].root];
        let PlanOp::Group { children } = &group.op else {
            panic!("expected group root");
        };
        assert!(!children.is_empty());

        // Treads, risers, a landing slab, and glass all present.
        assert!(doc.part_materials.keys().any(|n| n.contains("tread")));
        assert!(doc.part_materials.keys().any(|n| n.contains("riser")));
        assert!(doc.part_materials.keys().any(|n| n.contains("landing0_slab")));
        assert!(doc
            .part_materials
            .iter()
            .any(|(n, m)| n.contains("glass") && m == "glass"));
    }

    #[test]
    fn test_placement_is_applied_on_top() {
        let placement =
            Transform::translation(100.0, 50.0, 0.0).then(&Transform::rotation_z(FRAC_PI_2));
        let doc = staircase(&StairParams::default(), Some(&placement)).unwrap();

        // The outermost node of every placed part is the saved placement's
        // translation.
        let translated = doc
            .nodes
            .values()
            .filter(|n| {
                matches!(&n.op, PlanOp::Translate { offset, .. }
                    if (offset.x - 100.0).abs() < 1e-9 && (offset.y - 50.0).abs() < 1e-9)
            })
            .count();
        assert!(translated > 0);
    }

    #[test]
    fn test_bad_params_fail_before_any_nodes() {
        let params = StairParams {
            treads_per_flight: vec![8],
            ..StairParams::default()
        };
        // L shape with one flight: rejected by the composer.
        assert!(staircase(&params, None).is_err());
    }
}
