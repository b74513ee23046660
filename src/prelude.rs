//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the
//! tejun crate. Import this module to get access to the core functionality
//! without having to import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! // Use the prelude to get easy access to all the core types.
//! use tejun::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! // Load a procedure graph and build an engine
//! let raw = std::fs::read_to_string("path/to/procedure.json")?;
//! let graph = tejun::ui::UiProcedure::from_json(&raw)?.into_graph()?;
//! let mut engine = DiagramEngine::new(graph);
//!
//! // Compute the view and react to a click
//! let view = engine.compute();
//! println!("{} nodes visible", view.nodes.len());
//!
//! let view = engine.toggle_expand("some-node");
//! println!("{} nodes after the toggle", view.nodes.len());
//! # Ok(())
//! # }
//! ```

// Engine facade and the pure pipeline entry point
pub use crate::engine::{DiagramEngine, DiagramEngineBuilder, compute_view};

// Canonical graph model and the conversion boundary
pub use crate::graph::{EdgeDefinition, EdgeHints, GraphDefinition, IntoGraph, NodeDefinition};

// Pipeline stages
pub use crate::classify::{classify_decision_options, classify_edges};
pub use crate::expansion::{ExpansionState, default_expansion};
pub use crate::layout::{LayoutConfig, layout, shift_left};
pub use crate::visibility::{VisibleGraph, resolve};

// Derived view records
pub use crate::view::{
    DecisionOption, DiagramEdge, DiagramNode, DiagramSnapshot, DiagramView, EdgeStyle, Position,
};

// Error types
pub use crate::error::{GraphConversionError, SnapshotError};

// Collections commonly used with this crate
pub use ahash::{AHashMap, AHashSet};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
