use crate::error::GraphConversionError;
use crate::graph::{EdgeDefinition, EdgeHints, GraphDefinition, IntoGraph, NodeDefinition};
use ahash::{AHashMap, AHashSet};
use serde::Deserialize;

/// Node payload carrying the category and free-form presentation fields.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct UiNodeData {
    #[serde(default, alias = "nodeType")]
    pub node_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// A node as emitted by the procedure parser.
#[derive(Debug, Deserialize, Clone)]
pub struct UiNode {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub depth: u32,
    #[serde(default)]
    pub data: Option<UiNodeData>,
}

/// Branch hints attached to an edge by the procedure parser.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct UiEdgeData {
    #[serde(default, alias = "isYes")]
    pub is_yes: bool,
    #[serde(default, alias = "isNo")]
    pub is_no: bool,
    #[serde(default)]
    pub choice: Option<String>,
}

/// An edge as emitted by the procedure parser.
#[derive(Debug, Deserialize, Clone)]
pub struct UiEdge {
    #[serde(default)]
    pub id: Option<String>,
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub data: Option<UiEdgeData>,
}

/// Complete procedure graph in the wire format.
#[derive(Debug, Deserialize)]
pub struct UiProcedure {
    pub nodes: Vec<UiNode>,
    pub edges: Vec<UiEdge>,
}

impl UiProcedure {
    /// Parses a procedure graph from its JSON wire representation.
    pub fn from_json(json: &str) -> Result<Self, GraphConversionError> {
        serde_json::from_str(json)
            .map_err(|e| GraphConversionError::JsonParseError(e.to_string()))
    }
}

impl IntoGraph for UiProcedure {
    fn into_graph(self) -> Result<GraphDefinition, GraphConversionError> {
        let mut seen: AHashSet<String> = AHashSet::with_capacity(self.nodes.len());
        let mut nodes = Vec::with_capacity(self.nodes.len());
        for node in self.nodes {
            if node.id.is_empty() {
                return Err(GraphConversionError::ValidationError(
                    "node with empty id".to_string(),
                ));
            }
            if !seen.insert(node.id.clone()) {
                return Err(GraphConversionError::DuplicateNodeId(node.id));
            }

            let mut metadata = AHashMap::new();
            if let Some(data) = node.data {
                if let Some(node_type) = data.node_type {
                    metadata.insert("type".to_string(), node_type);
                }
                if let Some(description) = data.description {
                    metadata.insert("description".to_string(), description);
                }
            }

            nodes.push(NodeDefinition {
                id: node.id,
                label: node.label,
                depth: node.depth,
                metadata,
            });
        }

        let mut edges = Vec::with_capacity(self.edges.len());
        for (index, edge) in self.edges.into_iter().enumerate() {
            let data = edge.data.unwrap_or_default();
            edges.push(EdgeDefinition {
                // Wire edges are not required to carry ids; the index keeps
                // synthetic ids unique even across parallel edges.
                id: edge
                    .id
                    .unwrap_or_else(|| format!("e{}:{}-{}", index, edge.source, edge.target)),
                source: edge.source,
                target: edge.target,
                label: edge.label,
                hints: EdgeHints {
                    is_yes: data.is_yes,
                    is_no: data.is_no,
                    choice: data.choice,
                },
            });
        }

        Ok(GraphDefinition { nodes, edges })
    }
}
