//! Glass railing around two edges of a deck, written as a plan document.

use railkit::kernel::{Point3, Vec3};
use railkit::{glass_railing, GlassRailingParams, Segment};

fn main() {
    // Two deck edges picked as faces; normals point off the deck.
    let picks = vec![
        Segment::new(Point3::new(0.0, 0.0, 0.0), Point3::new(144.0, 0.0, 0.0))
            .with_reference(Vec3::new(0.0, -1.0, 0.0)),
        Segment::new(Point3::new(144.0, 0.0, 0.0), Point3::new(144.0, 96.0, 0.0))
            .with_reference(Vec3::new(1.0, 0.0, 0.0)),
    ];

    let params = GlassRailingParams {
        height: 42.0,
        inset: 0.25,
        ..GlassRailingParams::default()
    };

    let plan = glass_railing(&picks, &params).unwrap();
    let panels = plan
        .part_materials
        .iter()
        .filter(|(_, m)| m.as_str() == "glass")
        .count();
    println!(
        "planned {} nodes, {} glass panels",
        plan.nodes.len(),
        panels
    );

    std::fs::write("deck_railing.railkit.json", plan.to_json().unwrap()).unwrap();
    println!("wrote deck_railing.railkit.json");
}
