use crate::error::SnapshotError;
use crate::view::DiagramView;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};

/// A computed diagram view frozen to disk.
///
/// Render adapters that precompute layouts headlessly (or cache the last
/// view between sessions) store the view together with the expansion state
/// it was computed under, so a reload can tell whether the snapshot still
/// matches the user's state.
#[derive(Serialize, Deserialize, Debug)]
pub struct DiagramSnapshot {
    /// Sorted expanded-node IDs the view was computed under.
    pub expanded: Vec<String>,
    pub view: DiagramView,
}

impl DiagramSnapshot {
    pub fn new(mut expanded: Vec<String>, view: DiagramView) -> Self {
        expanded.sort();
        Self { expanded, view }
    }

    /// Saves the snapshot to a file using the bincode format.
    pub fn save(&self, path: &str) -> Result<(), SnapshotError> {
        let bytes = encode_to_vec(self, standard())
            .map_err(|e| SnapshotError::Generic(format!("Serialization failed: {}", e)))?;
        let mut file = fs::File::create(path).map_err(|e| {
            SnapshotError::Generic(format!("Could not create file '{}': {}", path, e))
        })?;
        file.write_all(&bytes).map_err(|e| {
            SnapshotError::Generic(format!("Could not write to file '{}': {}", path, e))
        })?;
        Ok(())
    }

    /// Loads a snapshot from a file.
    pub fn from_file(path: &str) -> Result<Self, SnapshotError> {
        let mut file = fs::File::open(path)
            .map_err(|e| SnapshotError::Generic(format!("Could not open file '{}': {}", path, e)))?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(|e| {
            SnapshotError::Generic(format!("Could not read from file '{}': {}", path, e))
        })?;
        Self::from_bytes(&bytes)
    }

    /// Deserializes a snapshot from a byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        decode_from_slice(bytes, standard())
            .map(|(snapshot, _)| snapshot) // bincode 2 returns a tuple (data, bytes_read)
            .map_err(|e| SnapshotError::Generic(format!("Deserialization failed: {}", e)))
    }
}
