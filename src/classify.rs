use crate::graph::{EdgeDefinition, NodeDefinition};
use crate::view::{DecisionOption, DiagramEdge, EdgeStyle};
use ahash::AHashMap;
use itertools::Itertools;

/// Tags every edge with its branch semantics.
///
/// A source node is a decision point exactly when more than one edge leaves
/// it. Edges leaving a decision point get their yes/no tags from explicit
/// hints (mutually exclusive; contradictory hints fall back to a generic
/// option); everything else is a plain sequential edge. Run this on the
/// visibility-filtered edge set so the classification reflects what is on
/// screen.
pub fn classify_edges(edges: &[EdgeDefinition]) -> Vec<DiagramEdge> {
    let outgoing = edges.iter().counts_by(|e| e.source.as_str());

    edges
        .iter()
        .map(|edge| {
            let is_decision_edge = outgoing.get(edge.source.as_str()).copied().unwrap_or(0) > 1;
            let is_yes = is_decision_edge && edge.hints.is_yes && !edge.hints.is_no;
            let is_no = is_decision_edge && edge.hints.is_no && !edge.hints.is_yes;
            let style = if !is_decision_edge {
                EdgeStyle::Plain
            } else if is_yes {
                EdgeStyle::Yes
            } else if is_no {
                EdgeStyle::No
            } else {
                EdgeStyle::Choice
            };

            DiagramEdge {
                id: edge.id.clone(),
                source: edge.source.clone(),
                target: edge.target.clone(),
                label: edge.label.clone(),
                is_decision_edge,
                is_yes,
                is_no,
                style,
            }
        })
        .collect()
}

/// Builds the ordered decision-option summaries for every decision point.
///
/// Options appear in edge-insertion order. The label falls back from the
/// edge label, through the yes/no hints and the choice hint, to the target
/// node's display label; the description comes from the target node's
/// `description` metadata when present.
pub fn classify_decision_options(
    nodes: &[NodeDefinition],
    edges: &[EdgeDefinition],
) -> AHashMap<String, Vec<DecisionOption>> {
    let by_id: AHashMap<&str, &NodeDefinition> =
        nodes.iter().map(|n| (n.id.as_str(), n)).collect();

    edges
        .iter()
        .map(|e| (e.source.as_str(), e))
        .into_group_map()
        .into_iter()
        .filter(|(_, outgoing)| outgoing.len() > 1)
        .map(|(source, outgoing)| {
            let options = outgoing
                .iter()
                .map(|edge| {
                    let target = by_id.get(edge.target.as_str()).copied();
                    DecisionOption {
                        label: option_label(edge, target),
                        description: target
                            .and_then(|n| n.metadata.get("description"))
                            .cloned()
                            .unwrap_or_default(),
                        target_node_id: Some(edge.target.clone()),
                    }
                })
                .collect();
            (source.to_string(), options)
        })
        .collect()
}

fn option_label(edge: &EdgeDefinition, target: Option<&NodeDefinition>) -> String {
    if let Some(label) = &edge.label {
        return label.clone();
    }
    if edge.hints.is_yes && !edge.hints.is_no {
        return "Yes".to_string();
    }
    if edge.hints.is_no && !edge.hints.is_yes {
        return "No".to_string();
    }
    if let Some(choice) = &edge.hints.choice {
        return choice.clone();
    }
    target.map(|n| n.label.clone()).unwrap_or_default()
}
