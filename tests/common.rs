//! Common test utilities for building procedure graph definitions.
use tejun::prelude::*;

#[allow(dead_code)]
pub fn node(id: &str, label: &str, depth: u32) -> NodeDefinition {
    NodeDefinition {
        id: id.to_string(),
        label: label.to_string(),
        depth,
        metadata: AHashMap::new(),
    }
}

#[allow(dead_code)]
pub fn typed_node(id: &str, label: &str, depth: u32, node_type: &str) -> NodeDefinition {
    let mut n = node(id, label, depth);
    n.metadata.insert("type".to_string(), node_type.to_string());
    n
}

#[allow(dead_code)]
pub fn edge(id: &str, source: &str, target: &str) -> EdgeDefinition {
    EdgeDefinition {
        id: id.to_string(),
        source: source.to_string(),
        target: target.to_string(),
        label: None,
        hints: EdgeHints::default(),
    }
}

#[allow(dead_code)]
pub fn labeled_edge(id: &str, source: &str, target: &str, label: &str) -> EdgeDefinition {
    let mut e = edge(id, source, target);
    e.label = Some(label.to_string());
    e
}

#[allow(dead_code)]
pub fn yes_edge(id: &str, source: &str, target: &str) -> EdgeDefinition {
    let mut e = edge(id, source, target);
    e.hints.is_yes = true;
    e
}

#[allow(dead_code)]
pub fn no_edge(id: &str, source: &str, target: &str) -> EdgeDefinition {
    let mut e = edge(id, source, target);
    e.hints.is_no = true;
    e
}

/// Root `A` branching to `B` and `C` (a binary decision point).
#[allow(dead_code)]
pub fn decision_graph() -> GraphDefinition {
    GraphDefinition {
        nodes: vec![node("A", "A", 0), node("B", "B", 1), node("C", "C", 1)],
        edges: vec![edge("e1", "A", "B"), edge("e2", "A", "C")],
    }
}

/// Linear chain `A -> B -> C -> D`.
#[allow(dead_code)]
pub fn chain_graph() -> GraphDefinition {
    GraphDefinition {
        nodes: vec![
            node("A", "A", 0),
            node("B", "B", 1),
            node("C", "C", 2),
            node("D", "D", 3),
        ],
        edges: vec![
            edge("e1", "A", "B"),
            edge("e2", "B", "C"),
            edge("e3", "C", "D"),
        ],
    }
}

/// Two-node cycle `A -> B -> A`.
#[allow(dead_code)]
pub fn cyclic_graph() -> GraphDefinition {
    GraphDefinition {
        nodes: vec![node("A", "A", 0), node("B", "B", 1)],
        edges: vec![edge("e1", "A", "B"), edge("e2", "B", "A")],
    }
}

/// Diamond `A -> B`, `A -> C`, `B -> D`, `C -> D` (D has two parents).
#[allow(dead_code)]
pub fn diamond_graph() -> GraphDefinition {
    GraphDefinition {
        nodes: vec![
            node("A", "A", 0),
            node("B", "B", 1),
            node("C", "C", 1),
            node("D", "D", 2),
        ],
        edges: vec![
            edge("e1", "A", "B"),
            edge("e2", "A", "C"),
            edge("e3", "B", "D"),
            edge("e4", "C", "D"),
        ],
    }
}

/// Decision node `X` with labeled branches to `Y` ("Yes") and `Z` ("No").
#[allow(dead_code)]
pub fn yes_no_graph() -> GraphDefinition {
    GraphDefinition {
        nodes: vec![
            node("X", "Check pressure", 0),
            node("Y", "Vent the line", 1),
            node("Z", "Continue", 1),
        ],
        edges: vec![
            labeled_edge("e1", "X", "Y", "Yes"),
            labeled_edge("e2", "X", "Z", "No"),
        ],
    }
}

/// Step-flow-shaped graph; its type metadata triggers the expand-all
/// heuristic.
#[allow(dead_code)]
pub fn stepwise_graph() -> GraphDefinition {
    GraphDefinition {
        nodes: vec![
            typed_node("start", "Start", 0, "step"),
            typed_node("check", "Check valve", 1, "decision"),
            typed_node("vent", "Vent", 2, "step"),
            typed_node("done", "Done", 2, "terminal"),
        ],
        edges: vec![
            edge("e1", "start", "check"),
            yes_edge("e2", "check", "vent"),
            no_edge("e3", "check", "done"),
        ],
    }
}

/// Mind-map-shaped graph with no step metadata; only depth 0 and 1 start
/// expanded.
#[allow(dead_code)]
pub fn mindmap_graph() -> GraphDefinition {
    GraphDefinition {
        nodes: vec![
            node("root", "Topic", 0),
            node("a", "Branch", 1),
            node("b", "Leaf", 2),
            node("c", "Deep leaf", 3),
        ],
        edges: vec![
            edge("e1", "root", "a"),
            edge("e2", "a", "b"),
            edge("e3", "b", "c"),
        ],
    }
}
