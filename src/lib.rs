//! # Tejun - Procedure Diagram Visibility & Layout Engine
//!
//! **Tejun** turns hierarchical procedures (decision trees with branching,
//! terminal, and regular steps) into interactive expandable diagrams. Given
//! a full node/edge graph and the set of currently expanded node IDs, it
//! determines which nodes and edges are visible, assigns non-overlapping 2D
//! positions that respect the parent/child hierarchy and sibling order,
//! classifies edges (including multi-way decision branches) for
//! differentiated rendering, and does all of this deterministically on every
//! state change.
//!
//! ## Core Workflow
//!
//! The engine is format-agnostic. It operates on a canonical internal model
//! of a "procedure graph." The primary workflow is:
//!
//! 1.  **Load Your Data**: Parse your procedure format (YAML, JSON, etc.)
//!     into your own Rust structs, or use the bundled wire-format types in
//!     [`ui`].
//! 2.  **Convert to Tejun's Model**: Implement the `IntoGraph` trait for
//!     your structs to provide a translation layer into Tejun's
//!     `GraphDefinition`.
//! 3.  **Build an Engine**: Use `DiagramEngine::builder` to create an engine
//!     holding the graph and its expansion state. On first load the
//!     default-expansion heuristic decides whether the diagram starts fully
//!     expanded (step-by-step flows) or drilled down (mind-map shapes).
//! 4.  **Compute and Interact**: `compute()` runs the full
//!     resolve → classify → layout → shift pipeline and returns a
//!     `DiagramView` of plain data. The render adapter binds clicks to the
//!     three named triggers `toggle_expand`, `select_for_view`, and
//!     `select_for_edit`; every toggle recomputes the view from scratch, so
//!     no drift accumulates.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tejun::prelude::*;
//! use tejun::ui::UiProcedure;
//!
//! fn main() -> Result<()> {
//!     // Assume `procedure.json` holds a graph in the wire format.
//!     let raw = std::fs::read_to_string("procedure.json")?;
//!     let graph = UiProcedure::from_json(&raw)?.into_graph()?;
//!
//!     let mut engine = DiagramEngine::new(graph);
//!
//!     // First paint.
//!     let view = engine.compute();
//!     for node in &view.nodes {
//!         println!(
//!             "{} at ({}, {}){}",
//!             node.label,
//!             node.position.x,
//!             node.position.y,
//!             if node.is_decision { " [decision]" } else { "" },
//!         );
//!     }
//!
//!     // A click on an expandable node flips it and yields the next view.
//!     let view = engine.toggle_expand("triage");
//!     println!("{} nodes visible", view.nodes.len());
//!
//!     Ok(())
//! }
//! ```

pub mod classify;
pub mod engine;
pub mod error;
pub mod expansion;
pub mod graph;
pub mod layout;
pub mod prelude;
pub mod ui;
pub mod view;
pub mod visibility;
