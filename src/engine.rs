use crate::classify::{classify_decision_options, classify_edges};
use crate::expansion::{ExpansionState, default_expansion};
use crate::graph::{GraphDefinition, NodeDefinition};
use crate::layout::{LayoutConfig, layout, shift_left};
use crate::view::{DiagramNode, DiagramView};
use crate::visibility::resolve;
use ahash::AHashSet;

/// Runs the full visibility → classify → layout → shift pipeline for one
/// expansion state.
///
/// This is the correctness baseline: every state change recomputes the view
/// from scratch, so repeated runs on the same inputs produce identical
/// output and no drift can accumulate across toggles.
pub fn compute_view(
    graph: &GraphDefinition,
    expanded: &ExpansionState,
    config: &LayoutConfig,
) -> DiagramView {
    let visible = resolve(graph, expanded);
    let edges = classify_edges(&visible.edges);
    let options = classify_decision_options(&visible.nodes, &visible.edges);
    let positions = shift_left(layout(&visible, config), config.shift_fraction);

    // Children count against the full graph, so a collapsed node still
    // shows its expand affordance.
    let known: AHashSet<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
    let parents: AHashSet<&str> = graph
        .edges
        .iter()
        .filter(|e| known.contains(e.source.as_str()) && known.contains(e.target.as_str()))
        .map(|e| e.source.as_str())
        .collect();

    let nodes = visible
        .nodes
        .iter()
        .map(|node| {
            let decision_options = options.get(&node.id).cloned().unwrap_or_default();
            DiagramNode {
                id: node.id.clone(),
                label: node.label.clone(),
                depth: node.depth,
                metadata: node.metadata.clone(),
                position: positions.get(&node.id).copied().unwrap_or_default(),
                has_children: parents.contains(node.id.as_str()),
                expanded: expanded.contains(&node.id),
                is_decision: !decision_options.is_empty(),
                decision_options,
            }
        })
        .collect();

    DiagramView { nodes, edges }
}

/// Owns a procedure graph together with the interaction state the render
/// adapter mutates through the three named triggers.
///
/// The graph is read-only for the lifetime of the engine; [`toggle_expand`]
/// is the only operation that changes what is visible, and it does so by
/// replacing the expansion state with a new value and recomputing the whole
/// view.
///
/// [`toggle_expand`]: DiagramEngine::toggle_expand
pub struct DiagramEngine {
    graph: GraphDefinition,
    config: LayoutConfig,
    expansion: ExpansionState,
    view_target: Option<String>,
    edit_target: Option<String>,
}

pub struct DiagramEngineBuilder {
    graph: GraphDefinition,
    config: LayoutConfig,
    expansion: ExpansionState,
}

impl DiagramEngineBuilder {
    pub fn new(graph: GraphDefinition) -> Self {
        Self {
            graph,
            config: LayoutConfig::default(),
            expansion: ExpansionState::new(),
        }
    }

    pub fn with_config(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }

    /// Starts from a caller-supplied expansion state, e.g. one restored
    /// from a saved snapshot. An empty state still goes through the
    /// default-expansion heuristic on build.
    pub fn with_expansion(mut self, expansion: ExpansionState) -> Self {
        self.expansion = expansion;
        self
    }

    pub fn build(self) -> DiagramEngine {
        let expansion = if self.expansion.is_empty() {
            default_expansion(&self.graph)
        } else {
            self.expansion
        };
        DiagramEngine {
            graph: self.graph,
            config: self.config,
            expansion,
            view_target: None,
            edit_target: None,
        }
    }
}

impl DiagramEngine {
    pub fn builder(graph: GraphDefinition) -> DiagramEngineBuilder {
        DiagramEngineBuilder::new(graph)
    }

    /// Creates an engine with the default layout spacing and the
    /// default-expansion heuristic applied.
    pub fn new(graph: GraphDefinition) -> Self {
        Self::builder(graph).build()
    }

    pub fn graph(&self) -> &GraphDefinition {
        &self.graph
    }

    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    /// Recomputes the current view. Pure with respect to the engine state.
    pub fn compute(&self) -> DiagramView {
        compute_view(&self.graph, &self.expansion, &self.config)
    }

    /// Flips a node's expansion membership and recomputes the view.
    ///
    /// Nodes without children are left untouched; the recomputed view is
    /// returned either way so click handlers stay unconditional.
    pub fn toggle_expand(&mut self, node_id: &str) -> DiagramView {
        if self.node_has_children(node_id) {
            self.expansion = self.expansion.toggled(node_id);
        }
        self.compute()
    }

    /// Marks a node as the content-viewer target and returns its
    /// definition, or `None` for an unknown ID.
    pub fn select_for_view(&mut self, node_id: &str) -> Option<&NodeDefinition> {
        let node = self.graph.nodes.iter().find(|n| n.id == node_id)?;
        self.view_target = Some(node.id.clone());
        Some(node)
    }

    /// Marks a node as the editor target and returns its definition, or
    /// `None` for an unknown ID.
    pub fn select_for_edit(&mut self, node_id: &str) -> Option<&NodeDefinition> {
        let node = self.graph.nodes.iter().find(|n| n.id == node_id)?;
        self.edit_target = Some(node.id.clone());
        Some(node)
    }

    pub fn view_target(&self) -> Option<&str> {
        self.view_target.as_deref()
    }

    pub fn edit_target(&self) -> Option<&str> {
        self.edit_target.as_deref()
    }

    fn node_has_children(&self, node_id: &str) -> bool {
        let known: AHashSet<&str> = self.graph.nodes.iter().map(|n| n.id.as_str()).collect();
        self.graph
            .edges
            .iter()
            .any(|e| e.source == node_id && known.contains(e.target.as_str()))
    }
}
