use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, warn};

/// Fixed key the snapshot is stored under.
const STORAGE_KEY: &str = "video-state";

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// The persisted slice of playback state. Field names match the wire
/// format the site has always written, so existing snapshots restore.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackSnapshot {
    pub video_id: String,
    pub current_time: f64,
    pub has_user_interacted: bool,
    pub last_updated: i64,
}

/// Stores the playback snapshot as one JSON file under the data dir,
/// the desktop analog of the site's local-storage entry.
#[derive(Debug, Clone)]
pub struct PlaybackStore {
    path: PathBuf,
}

impl PlaybackStore {
    pub fn new(data_dir: PathBuf) -> Self {
        PlaybackStore {
            path: data_dir.join(format!("{}.json", STORAGE_KEY)),
        }
    }

    /// Read the saved snapshot. Missing or corrupt files restore nothing;
    /// the caller falls back to defaults.
    pub fn load(&self) -> Option<PlaybackSnapshot> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(_) => {
                debug!("PlaybackStore: no saved state at {}", self.path.display());
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                warn!("PlaybackStore: corrupt saved state, ignoring: {}", e);
                None
            }
        }
    }

    /// Persist the snapshot. Failures are logged and swallowed: losing a
    /// save never degrades the in-memory state it mirrors.
    pub fn save(&self, snapshot: &PlaybackSnapshot) {
        if let Err(e) = self.try_save(snapshot) {
            warn!("PlaybackStore: failed to save state: {}", e);
        }
    }

    fn try_save(&self, snapshot: &PlaybackSnapshot) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string(snapshot)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}
