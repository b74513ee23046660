use crate::expansion::ExpansionState;
use crate::graph::{EdgeDefinition, GraphDefinition, NodeDefinition};
use ahash::AHashSet;

/// The subset of a graph currently eligible for display.
///
/// Node and edge order match the input definition, so downstream stages see
/// a stable, insertion-ordered view.
#[derive(Debug, Clone, Default)]
pub struct VisibleGraph {
    pub nodes: Vec<NodeDefinition>,
    pub edges: Vec<EdgeDefinition>,
}

/// Computes the subset of `graph` visible under `expanded`.
///
/// A node is visible when its depth is 0, when it has no incoming edges, or
/// when at least one incoming edge originates from a node that is itself
/// visible *and* expanded. An edge is visible exactly when both endpoints
/// are. Edges referencing unknown node IDs are dropped up front so partial
/// procedure data still renders.
///
/// The membership test is an iterative fixed point rather than a recursive
/// walk: the visible set only ever grows from the root seed, so cyclic
/// back-edges can never grant visibility on their own and the loop
/// terminates on any input.
pub fn resolve(graph: &GraphDefinition, expanded: &ExpansionState) -> VisibleGraph {
    if graph.nodes.is_empty() {
        return VisibleGraph::default();
    }

    let known: AHashSet<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
    let edges: Vec<&EdgeDefinition> = graph
        .edges
        .iter()
        .filter(|e| known.contains(e.source.as_str()) && known.contains(e.target.as_str()))
        .collect();

    let has_incoming: AHashSet<&str> = edges.iter().map(|e| e.target.as_str()).collect();

    let mut visible: AHashSet<&str> = graph
        .nodes
        .iter()
        .filter(|n| n.depth == 0 || !has_incoming.contains(n.id.as_str()))
        .map(|n| n.id.as_str())
        .collect();

    loop {
        let mut changed = false;
        for edge in &edges {
            if !visible.contains(edge.target.as_str())
                && visible.contains(edge.source.as_str())
                && expanded.contains(&edge.source)
            {
                visible.insert(edge.target.as_str());
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }

    VisibleGraph {
        nodes: graph
            .nodes
            .iter()
            .filter(|n| visible.contains(n.id.as_str()))
            .cloned()
            .collect(),
        edges: edges
            .into_iter()
            .filter(|e| {
                visible.contains(e.source.as_str()) && visible.contains(e.target.as_str())
            })
            .cloned()
            .collect(),
    }
}
