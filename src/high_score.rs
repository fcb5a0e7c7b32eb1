use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::HighScoreError;
use crate::sinks::HighScoreStore;

const APP_DIR_NAME: &str = "grid-snake";
const SCORE_FILE_NAME: &str = "scores.json";

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct ScoreFile {
    high_score: u32,
}

/// Returns the platform-correct score file path.
#[must_use]
pub fn default_scores_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(SCORE_FILE_NAME);
    base
}

/// High score persisted as a small JSON document.
#[derive(Debug, Clone)]
pub struct JsonHighScoreStore {
    path: PathBuf,
}

impl JsonHighScoreStore {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the stored score.
    ///
    /// Returns `Ok(None)` when the score file does not exist yet.
    pub fn load(&self) -> Result<Option<u32>, HighScoreError> {
        load_high_score_from_path(&self.path)
    }

    /// Writes `score`, creating parent directories when needed.
    pub fn save(&self, score: u32) -> Result<(), HighScoreError> {
        save_high_score_to_path(&self.path, score)
    }
}

impl Default for JsonHighScoreStore {
    fn default() -> Self {
        Self::new(default_scores_path())
    }
}

impl HighScoreStore for JsonHighScoreStore {
    fn get(&self) -> Option<u32> {
        match self.load() {
            Ok(score) => score,
            Err(error) => {
                warn!(path = %self.path.display(), %error, "ignoring unreadable high score");
                None
            }
        }
    }

    fn set(&mut self, score: u32) {
        match self.save(score) {
            Ok(()) => debug!(path = %self.path.display(), score, "high score saved"),
            Err(error) => warn!(path = %self.path.display(), %error, "failed to save high score"),
        }
    }
}

fn load_high_score_from_path(path: &Path) -> Result<Option<u32>, HighScoreError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let file = serde_json::from_str::<ScoreFile>(&raw)?;
    Ok(Some(file.high_score))
}

fn save_high_score_to_path(path: &Path, score: u32) -> Result<(), HighScoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let payload = ScoreFile { high_score: score };
    let json = serde_json::to_string_pretty(&payload)?;

    fs::write(path, json)?;
    Ok(())
}
