use thiserror::Error;

/// Errors that can occur when converting a custom source format into a
/// tejun `GraphDefinition`.
#[derive(Error, Debug, Clone)]
pub enum GraphConversionError {
    #[error("Failed to parse graph JSON: {0}")]
    JsonParseError(String),

    #[error("Invalid graph data: {0}")]
    ValidationError(String),

    #[error("Duplicate node id '{0}' in procedure graph")]
    DuplicateNodeId(String),
}

/// Errors that can occur while saving or loading a computed diagram
/// snapshot.
#[derive(Error, Debug, Clone)]
pub enum SnapshotError {
    #[error("{0}")]
    Generic(String),
}
