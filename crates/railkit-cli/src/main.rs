//! railkit CLI - batch railing and stair generation
//!
//! Reads a TOML job file describing picked segments and parameters,
//! runs the matching tool, and writes the scene plan as JSON for a host
//! adapter to replay.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use railkit::kernel::{Point3, Vec3};
use railkit::{
    cable_railing, glass_railing, handrail, staircase, CableRailingParams, GlassRailingParams,
    HandrailParams, Segment, StairParams,
};
use railkit_ir::{Document, PlanOp};

#[derive(Parser)]
#[command(name = "railkit")]
#[command(about = "Parametric railing and stair generation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a job file and write the plan document
    Build {
        /// Input job file (.toml)
        job: PathBuf,
        /// Output plan file (.railkit.json)
        output: PathBuf,
    },
    /// Display information about a plan document
    Info {
        /// Path to the plan file
        plan: PathBuf,
    },
    /// Write a documented sample job file
    Sample {
        /// Path for the sample job file
        output: PathBuf,
    },
}

/// Which tool a job runs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
enum Tool {
    Glass,
    Cable,
    Handrail,
    Stairs,
}

/// A picked segment as it appears in the job file.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SegmentSpec {
    start: [f64; 3],
    end: [f64; 3],
    /// Outward face normal, if the segment came from a picked face.
    #[serde(default)]
    normal: Option<[f64; 3]>,
}

impl SegmentSpec {
    fn to_segment(&self) -> Segment {
        let seg = Segment::new(
            Point3::new(self.start[0], self.start[1], self.start[2]),
            Point3::new(self.end[0], self.end[1], self.end[2]),
        );
        match self.normal {
            Some([x, y, z]) => seg.with_reference(Vec3::new(x, y, z)),
            None => seg,
        }
    }
}

/// One batch job: a tool, its segments, and parameter sections.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct JobFile {
    tool: Tool,
    #[serde(default)]
    segments: Vec<SegmentSpec>,
    #[serde(default)]
    glass: GlassRailingParams,
    #[serde(default)]
    cable: CableRailingParams,
    #[serde(default)]
    handrail: HandrailParams,
    #[serde(default)]
    stairs: StairParams,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build { job, output } => build(&job, &output),
        Commands::Info { plan } => info(&plan),
        Commands::Sample { output } => sample(&output),
    }
}

fn run_job(job: &JobFile) -> Result<Document> {
    let segments: Vec<Segment> = job.segments.iter().map(SegmentSpec::to_segment).collect();
    let doc = match job.tool {
        Tool::Glass => glass_railing(&segments, &job.glass)?,
        Tool::Cable => cable_railing(&segments, &job.cable)?,
        Tool::Handrail => handrail(&segments, &job.handrail)?,
        Tool::Stairs => staircase(&job.stairs, None)?,
    };
    Ok(doc)
}

fn build(job_path: &PathBuf, output: &PathBuf) -> Result<()> {
    let text = std::fs::read_to_string(job_path)
        .with_context(|| format!("reading job file {}", job_path.display()))?;
    let job: JobFile = toml::from_str(&text).context("parsing job file")?;

    let doc = run_job(&job)?;

    std::fs::write(output, doc.to_json()?)
        .with_context(|| format!("writing plan to {}", output.display()))?;
    println!(
        "wrote {} ({} nodes, {} parts)",
        output.display(),
        doc.nodes.len(),
        doc.part_materials.len()
    );
    Ok(())
}

fn info(plan_path: &PathBuf) -> Result<()> {
    let text = std::fs::read_to_string(plan_path)
        .with_context(|| format!("reading plan {}", plan_path.display()))?;
    let doc = Document::from_json(&text).context("parsing plan document")?;

    let mut faces = 0;
    let mut extrudes = 0;
    let mut sweeps = 0;
    let mut groups = 0;
    let mut transforms = 0;
    for node in doc.nodes.values() {
        match node.op {
            PlanOp::Face { .. } => faces += 1,
            PlanOp::Extrude { .. } => extrudes += 1,
            PlanOp::Sweep { .. } => sweeps += 1,
            PlanOp::Group { .. } => groups += 1,
            PlanOp::Translate { .. } | PlanOp::RotateZ { .. } => transforms += 1,
        }
    }

    println!("version:    {}", doc.version);
    println!("nodes:      {} total", doc.nodes.len());
    println!("  faces:      {faces}");
    println!("  extrudes:   {extrudes}");
    println!("  sweeps:     {sweeps}");
    println!("  groups:     {groups}");
    println!("  transforms: {transforms}");
    println!("parts:      {}", doc.part_materials.len());
    println!("materials:  {}", doc.materials.len());
    for entry in &doc.roots {
        let name = doc
            .nodes
            .get(&entry.root)
            .and_then(|n| n.name.as_deref())
            .unwrap_or("(unnamed)");
        println!("root:       {} [{}]", name, entry.material);
    }
    Ok(())
}

const SAMPLE_JOB: &str = r#"# railkit job file
#
# tool: glass | cable | handrail | stairs
tool = "glass"

# Picked segments. `normal` is the picked face's outward normal; omit it
# for drawn lines and the offset direction is inferred per segment.
[[segments]]
start = [0.0, 0.0, 0.0]
end = [96.0, 0.0, 0.0]
normal = [0.0, -1.0, 0.0]

[[segments]]
start = [96.0, 0.0, 0.0]
end = [96.0, 72.0, 0.0]
normal = [1.0, 0.0, 0.0]

# Parameter sections are all optional; missing keys take the tool's
# defaults ("last used values" live in files like this one).
[glass]
height = 36.0
thickness = 0.5
panel_gap = 1.0
max_panel_width = 48.0
inset = 0.25
base_channel = true

[stairs]
shape = "l"            # straight | l | u | switchback
turn = "left"
treads_per_flight = [8, 8]
rise = 7.5
run = 11.0
width = 36.0
landing_depth = 36.0
glass_side = "both"    # inner | outer | both
"#;

fn sample(output: &PathBuf) -> Result<()> {
    std::fs::write(output, SAMPLE_JOB)
        .with_context(|| format!("writing sample job to {}", output.display()))?;
    println!("wrote {}", output.display());
    Ok(())
}
