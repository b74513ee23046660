use super::definition::GraphDefinition;
use crate::error::GraphConversionError;

/// A trait for custom data models that can be converted into a tejun
/// `GraphDefinition`.
///
/// This is the primary extension point for making tejun format-agnostic. By
/// implementing this trait on your own parser output, you provide a
/// translation layer that lets the pipeline consume any procedure format
/// without knowing how it was stored on disk.
///
/// # Example
///
/// ```rust,no_run
/// use tejun::graph::{GraphDefinition, IntoGraph, NodeDefinition};
/// use tejun::error::GraphConversionError;
/// use ahash::AHashMap;
///
/// // 1. Define your custom structs for parsing your format.
/// struct MyStep { id: String, title: String, level: u32 }
/// struct MyProcedure { steps: Vec<MyStep> }
///
/// // 2. Implement `IntoGraph` for your top-level struct.
/// impl IntoGraph for MyProcedure {
///     fn into_graph(self) -> Result<GraphDefinition, GraphConversionError> {
///         let mut nodes = Vec::new();
///         for step in self.steps {
///             nodes.push(NodeDefinition {
///                 id: step.id,
///                 label: step.title,
///                 depth: step.level,
///                 metadata: AHashMap::new(),
///             });
///         }
///
///         Ok(GraphDefinition {
///             nodes,
///             edges: vec![], // Convert your connections here as well
///         })
///     }
/// }
/// ```
pub trait IntoGraph {
    /// Consumes the object and converts it into a tejun-compatible
    /// procedure graph.
    fn into_graph(self) -> Result<GraphDefinition, GraphConversionError>;
}
