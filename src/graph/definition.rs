use ahash::AHashMap;

/// The complete, canonical definition of a procedure graph, ready for the
/// visibility and layout pipeline.
/// This is the target structure for any custom data model conversion.
#[derive(Debug, Clone, Default)]
pub struct GraphDefinition {
    pub nodes: Vec<NodeDefinition>,
    pub edges: Vec<EdgeDefinition>,
}

/// Defines a single step in the procedure graph.
///
/// The `metadata` map carries the node category (step, decision, terminal)
/// and any other free-form presentation data produced by the graph builder.
/// A `depth` of 0 marks a root node.
#[derive(Debug, Clone)]
pub struct NodeDefinition {
    pub id: String,
    pub label: String,
    pub depth: u32,
    pub metadata: AHashMap<String, String>,
}

/// Defines a directed connection between two nodes.
///
/// Several edges may connect the same node pair through different decision
/// options, so every edge carries its own synthetic `id`.
#[derive(Debug, Clone)]
pub struct EdgeDefinition {
    pub id: String,
    pub source: String,
    pub target: String,
    pub label: Option<String>,
    pub hints: EdgeHints,
}

/// Branch hints attached to an edge during graph construction from the
/// source procedure description.
#[derive(Debug, Clone, Default)]
pub struct EdgeHints {
    pub is_yes: bool,
    pub is_no: bool,
    pub choice: Option<String>,
}
