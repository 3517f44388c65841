mod input;

use anyhow::{Context, Result};
use clap::Parser;
use force_graph_layout::{ForceLayout, LayoutEngine};
use input::{placements, GraphFile};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{prelude::*, EnvFilter};

/// Lay out a graph with a force-directed simulation and print node positions
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// RON file describing the nodes and connections
    input: PathBuf,

    /// Number of simulation steps, ten per node by default
    #[arg(short, long)]
    iterations: Option<usize>,

    /// Pull towards the origin, applied on both axes
    #[arg(long, default_value_t = -1.1, allow_negative_numbers = true)]
    gravity: f64,

    /// Repulsion scale, applied on both axes
    #[arg(long, default_value_t = 1000.0, allow_negative_numbers = true)]
    force: f64,

    /// Write the positions to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// Run the layout described by `args` and return the rendered positions
fn run(args: &Args) -> Result<String> {
    let mut graph = GraphFile::load(&args.input)?.into_graph()?;

    let iterations = args.iterations.unwrap_or(graph.len() * 10);
    let config = ForceLayout::new(iterations)
        .with_gravity_constant(args.gravity)
        .with_force_constant(args.force);
    let stats = config.layout(&mut graph);
    info!(
        "Laid out {} nodes in {} iterations (settled: {})",
        graph.len(),
        stats.iterations,
        stats.converged()
    );

    let rendered = ron::ser::to_string_pretty(&placements(&graph), Default::default())
        .context("Failed to render positions")?;
    if let Some(path) = &args.output {
        std::fs::write(path, &rendered)
            .with_context(|| format!("Failed to write positions to {path:?}"))?;
    }
    Ok(rendered)
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let rendered = run(&args)?;
    if args.output.is_none() {
        println!("{rendered}");
    }
    Ok(())
}
