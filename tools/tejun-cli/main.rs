use clap::Parser;
use std::fs;
use std::time::Instant;
use tejun::prelude::*;
use tejun::ui::UiProcedure;

/// A CLI front end for the tejun diagram pipeline: loads a procedure graph
/// from JSON, applies an expansion state, and prints the computed view.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the procedure graph JSON (wire format)
    graph: String,

    /// Comma-separated node IDs to mark expanded, replacing the heuristic
    /// initial state
    #[arg(short, long)]
    expand: Option<String>,

    /// Expand every node regardless of the heuristic
    #[arg(long)]
    expand_all: bool,

    /// Write the computed view to a binary snapshot at this path
    #[arg(short, long)]
    snapshot: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let raw = fs::read_to_string(&cli.graph)?;
    let graph = UiProcedure::from_json(&raw)?.into_graph()?;

    let expansion = if cli.expand_all {
        ExpansionState::from_ids(graph.nodes.iter().map(|n| n.id.clone()))
    } else if let Some(list) = &cli.expand {
        ExpansionState::from_ids(list.split(',').map(|id| id.trim().to_string()))
    } else {
        ExpansionState::new()
    };

    let node_count = graph.nodes.len();
    let engine = DiagramEngine::builder(graph).with_expansion(expansion).build();

    let start = Instant::now();
    let view = engine.compute();
    let elapsed = start.elapsed();

    println!(
        "Computed view in {:?}: {} of {} nodes visible, {} edges",
        elapsed,
        view.nodes.len(),
        node_count,
        view.edges.len()
    );
    println!();

    for node in &view.nodes {
        let marker = if node.is_decision {
            " [decision]"
        } else if !node.has_children {
            " [terminal]"
        } else {
            ""
        };
        println!(
            "  {:<24} ({:>8.1}, {:>8.1}){}{}",
            node.label,
            node.position.x,
            node.position.y,
            if node.expanded { " +" } else { "" },
            marker
        );
        for option in &node.decision_options {
            println!(
                "      -> {} ({})",
                option.label,
                option.target_node_id.as_deref().unwrap_or("?")
            );
        }
    }

    println!();
    for edge in &view.edges {
        println!(
            "  {} -> {}  [{} {}]",
            edge.source,
            edge.target,
            if edge.is_decision_edge {
                "decision"
            } else {
                "sequential"
            },
            edge.style.stroke()
        );
    }

    if let Some(path) = &cli.snapshot {
        let snapshot = DiagramSnapshot::new(engine.expansion().sorted_ids(), view);
        snapshot.save(path)?;
        println!();
        println!("Saved snapshot to '{}'", path);
    }

    Ok(())
}
