//! Snapshot document loading
//!
//! The CLI reads one file holding the record snapshot and the preferences
//! that steer scoring, as YAML or JSON by extension. Validation runs here at
//! the boundary so the engine only ever sees well-formed numbers.

use std::fs;
use std::path::Path;

use finsight_core::ValidationError;
use finsight_core::model::UserPreferences;
use finsight_core::snapshot::Snapshot;
use serde::Deserialize;

/// On-disk document: records plus the preferences evaluated against them
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SnapshotFile {
    #[serde(default)]
    pub snapshot: Snapshot,
    #[serde(default)]
    pub preferences: UserPreferences,
}

/// Error types for snapshot loading
#[derive(Debug)]
pub enum SnapshotError {
    Io(String),
    Parse(String),
    Validation(ValidationError),
}

impl std::fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SnapshotError::Io(msg) => write!(f, "IO error: {}", msg),
            SnapshotError::Parse(msg) => write!(f, "Parse error: {}", msg),
            SnapshotError::Validation(err) => write!(f, "Invalid snapshot: {}", err),
        }
    }
}

impl std::error::Error for SnapshotError {}

impl From<ValidationError> for SnapshotError {
    fn from(err: ValidationError) -> Self {
        SnapshotError::Validation(err)
    }
}

impl SnapshotFile {
    /// Load and validate a snapshot document.
    ///
    /// `.json` files parse as JSON; everything else is treated as YAML.
    pub fn load(path: &Path) -> Result<SnapshotFile, SnapshotError> {
        let content = fs::read_to_string(path)
            .map_err(|e| SnapshotError::Io(format!("Failed to read {}: {}", path.display(), e)))?;

        let is_json = path.extension().is_some_and(|ext| ext == "json");
        let file: SnapshotFile = if is_json {
            serde_json::from_str(&content).map_err(|e| {
                SnapshotError::Parse(format!("Failed to parse {}: {}", path.display(), e))
            })?
        } else {
            serde_saphyr::from_str(&content).map_err(|e| {
                SnapshotError::Parse(format!("Failed to parse {}: {}", path.display(), e))
            })?
        };

        file.snapshot.validate()?;
        Ok(file)
    }
}
