//! Checkpoint and restore for exercise state.
//!
//! A checkpoint wraps the serializable record of a tracker, store, or
//! counter so a presentation layer can stash it and rebuild the state
//! later. The library never writes checkpoints anywhere itself.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Versioned, timestamped wrapper around a state record.
///
/// ```rust
/// use uikata::checkpoint::Checkpoint;
/// use uikata::game::GameTracker;
///
/// let mut game = GameTracker::new();
/// game.play(4);
///
/// let json = game.checkpoint().to_json().unwrap();
/// let restored = GameTracker::restore(Checkpoint::from_json(&json).unwrap()).unwrap();
/// assert_eq!(restored.history(), game.history());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint<T> {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// The wrapped state record
    pub payload: T,
}

impl<T> Checkpoint<T> {
    /// Wrap `payload`, stamped with the current wall-clock time.
    pub fn new(payload: T) -> Self {
        Self::at(payload, Utc::now())
    }

    /// Wrap `payload` with an explicit timestamp.
    pub fn at(payload: T, timestamp: DateTime<Utc>) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp,
            payload,
        }
    }

    /// Check that this checkpoint uses a supported format version.
    pub fn validate(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }
        Ok(())
    }

    /// Unwrap the payload after validating the version.
    pub fn into_payload(self) -> Result<T, CheckpointError> {
        self.validate()?;
        Ok(self.payload)
    }
}

impl<T: Serialize + DeserializeOwned> Checkpoint<T> {
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self = serde_json::from_str(json)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.validate()?;
        Ok(checkpoint)
    }

    /// Compact binary encoding.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self = bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.validate()?;
        Ok(checkpoint)
    }
}
