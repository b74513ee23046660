use crate::graph::{GraphDefinition, NodeDefinition};
use ahash::AHashSet;

/// The set of node IDs whose children are currently permitted to be
/// visible.
///
/// This is the only externally mutable state in the whole pipeline, and
/// updates are functional: [`ExpansionState::toggled`] returns a new state
/// and leaves the original untouched, so every pipeline run stays a pure
/// function of its inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    expanded: AHashSet<String>,
}

impl ExpansionState {
    /// Creates an empty expansion state (everything collapsed).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a state with the given node IDs marked expanded.
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            expanded: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns whether the node's children are permitted to be visible.
    pub fn contains(&self, node_id: &str) -> bool {
        self.expanded.contains(node_id)
    }

    /// Returns a new state with the node's membership flipped.
    pub fn toggled(&self, node_id: &str) -> Self {
        let mut expanded = self.expanded.clone();
        if !expanded.remove(node_id) {
            expanded.insert(node_id.to_string());
        }
        Self { expanded }
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }

    /// The expanded node IDs, sorted so callers get a stable order.
    pub fn sorted_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.expanded.iter().cloned().collect();
        ids.sort();
        ids
    }
}

/// Builds the initial expansion state for a freshly loaded graph.
///
/// Step-by-step procedure flows start fully expanded so the whole flow is
/// visible at once; anything else gets mind-map-style drill-down where only
/// the root and first-level nodes start expanded. The shape test runs once,
/// on an empty state; afterwards the state only changes through toggles.
pub fn default_expansion(graph: &GraphDefinition) -> ExpansionState {
    if graph.nodes.iter().any(is_step_like) {
        ExpansionState::from_ids(graph.nodes.iter().map(|n| n.id.clone()))
    } else {
        ExpansionState::from_ids(
            graph
                .nodes
                .iter()
                .filter(|n| n.depth <= 1)
                .map(|n| n.id.clone()),
        )
    }
}

/// Whether a node looks like part of a sequential procedure flow.
fn is_step_like(node: &NodeDefinition) -> bool {
    if node.id.starts_with("step") {
        return true;
    }
    matches!(
        node.metadata.get("type").map(String::as_str),
        Some("step" | "decision" | "terminal")
    )
}
