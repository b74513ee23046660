use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::json;
use std::fs;

/// A CLI tool to generate random procedure graphs in the tejun wire format
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_graph.json")]
    output: String,

    /// The number of nodes to generate
    #[arg(long, default_value_t = 24)]
    nodes: usize,

    /// The chance that a non-leaf node becomes a decision point
    #[arg(long, default_value_t = 0.35)]
    decision_chance: f64,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

struct GenNode {
    id: String,
    label: String,
    depth: u32,
    parent: Option<usize>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    if cli.nodes == 0 {
        eprintln!("Error: --nodes must be at least 1");
        std::process::exit(1);
    }

    println!(
        "Generating a procedure graph with {} nodes (decision chance {})...",
        cli.nodes, cli.decision_chance
    );

    let mut nodes = vec![GenNode {
        id: "step-1".to_string(),
        label: "Start".to_string(),
        depth: 0,
        parent: None,
    }];

    for index in 1..cli.nodes {
        let parent = rng.random_range(0..nodes.len());
        nodes.push(GenNode {
            id: format!("step-{}", index + 1),
            label: format!("Step {}", index + 1),
            depth: nodes[parent].depth + 1,
            parent: Some(parent),
        });
    }

    let mut child_counts = vec![0usize; nodes.len()];
    for node in &nodes {
        if let Some(parent) = node.parent {
            child_counts[parent] += 1;
        }
    }

    let json_nodes: Vec<serde_json::Value> = nodes
        .iter()
        .enumerate()
        .map(|(index, node)| {
            let node_type = if child_counts[index] == 0 {
                "terminal"
            } else if child_counts[index] > 1 && rng.random_bool(cli.decision_chance) {
                "decision"
            } else {
                "step"
            };
            json!({
                "id": node.id,
                "label": node.label,
                "depth": node.depth,
                "data": { "nodeType": node_type },
            })
        })
        .collect();

    let mut branch_indices = vec![0usize; nodes.len()];
    let json_edges: Vec<serde_json::Value> = nodes
        .iter()
        .filter_map(|node| {
            let parent = node.parent?;
            let branch = branch_indices[parent];
            branch_indices[parent] += 1;
            let mut edge = json!({
                "source": nodes[parent].id,
                "target": node.id,
            });
            // Binary splits read as yes/no; wider fans get choice labels.
            if child_counts[parent] == 2 {
                edge["data"] = json!({ "isYes": branch == 0, "isNo": branch == 1 });
            } else if child_counts[parent] > 2 {
                edge["label"] = json!(format!("Option {}", branch + 1));
            }
            Some(edge)
        })
        .collect();

    let graph = json!({ "nodes": json_nodes, "edges": json_edges });
    let json_output = serde_json::to_string_pretty(&graph)?;
    fs::write(&cli.output, json_output)?;

    println!(
        "Successfully generated and saved a procedure graph to '{}'",
        cli.output
    );

    Ok(())
}
