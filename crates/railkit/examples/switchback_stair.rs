//! A switchback staircase with glass on the outer side.

use railkit::{staircase, GlassSide, StairParams, StairShape, Turn};

fn main() {
    let params = StairParams {
        shape: StairShape::Switchback,
        turn: Turn::Right,
        treads_per_flight: vec![9, 9],
        rise: 7.25,
        run: 11.0,
        width: 42.0,
        landing_depth: 48.0,
        glass_side: GlassSide::Outer,
        ..StairParams::default()
    };

    let plan = staircase(&params, None).unwrap();
    println!(
        "planned {} parts over {} nodes",
        plan.part_materials.len(),
        plan.nodes.len()
    );

    std::fs::write("switchback_stair.railkit.json", plan.to_json().unwrap()).unwrap();
    println!("wrote switchback_stair.railkit.json");
}
