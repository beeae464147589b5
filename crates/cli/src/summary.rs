//! Finished-game summary persisted as JSON for later review.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSummary {
    pub white: String,
    pub black: String,
    /// Raw move strings in the order they were played.
    pub moves: Vec<String>,
    /// Winner's display name; `None` for a stalemate draw.
    pub winner: Option<String>,
    /// Final advantage from White's seat.
    pub advantage: i32,
}

impl GameSummary {
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("could not create {}", dir.display()))?;
        }
        let json = serde_json::to_string_pretty(self).context("could not serialize summary")?;
        fs::write(path, json).with_context(|| format!("could not write {}", path.display()))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("could not read {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("could not parse {}", path.display()))
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod summary_tests;
