pub mod snapshot;

pub use snapshot::DiagramSnapshot;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// A 2D layout coordinate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

/// Resolved visual class of an edge, consumed by the render adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgeStyle {
    /// Plain sequential connection.
    Plain,
    /// Affirmative branch of a binary decision.
    Yes,
    /// Negative branch of a binary decision.
    No,
    /// Labeled option of a multi-way decision.
    Choice,
}

impl EdgeStyle {
    /// Stroke color the render adapter applies for this class.
    pub fn stroke(&self) -> &'static str {
        match self {
            EdgeStyle::Plain => "#64748b",
            EdgeStyle::Yes => "#16a34a",
            EdgeStyle::No => "#dc2626",
            EdgeStyle::Choice => "#2563eb",
        }
    }
}

/// One selectable branch leaving a decision node, shown by the render
/// adapter as an inline preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionOption {
    pub label: String,
    pub description: String,
    pub target_node_id: Option<String>,
}

/// A visible node enriched with every pipeline-derived field.
///
/// Input definitions are never mutated; each pipeline run produces fresh
/// records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramNode {
    pub id: String,
    pub label: String,
    pub depth: u32,
    pub metadata: AHashMap<String, String>,
    pub position: Position,
    pub has_children: bool,
    pub expanded: bool,
    pub is_decision: bool,
    pub decision_options: Vec<DecisionOption>,
}

/// A visible edge enriched with its branch classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub label: Option<String>,
    pub is_decision_edge: bool,
    pub is_yes: bool,
    pub is_no: bool,
    pub style: EdgeStyle,
}

/// The complete output of one pipeline run, ready for rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiagramView {
    pub nodes: Vec<DiagramNode>,
    pub edges: Vec<DiagramEdge>,
}
