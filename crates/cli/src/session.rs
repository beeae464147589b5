//! Append-only session log so an interrupted game can be resumed.
//!
//! The format is deliberately plain: the first two lines are the player
//! display names (White first), then one raw move string per line in the
//! order they were accepted.

use anyhow::{bail, Context, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// A fully loaded session file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub white: String,
    pub black: String,
    pub moves: Vec<String>,
}

/// Handle on the on-disk log.
pub struct SessionLog {
    path: PathBuf,
}

impl SessionLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Begin a fresh session: truncate the file and write the two player
    /// name lines.
    pub fn start(&self, white: &str, black: &str) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("could not create {}", dir.display()))?;
        }
        fs::write(&self.path, format!("{white}\n{black}\n"))
            .with_context(|| format!("could not write {}", self.path.display()))
    }

    /// Append one accepted move as its own line.
    pub fn append(&self, mv: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .with_context(|| format!("could not open {}", self.path.display()))?;
        writeln!(file, "{mv}")
            .with_context(|| format!("could not append to {}", self.path.display()))
    }

    /// Read the whole log back: names first, then the move lines.
    pub fn load(&self) -> Result<Session> {
        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("could not read {}", self.path.display()))?;
        let mut lines = text.lines();

        let white = match lines.next() {
            Some(name) if !name.trim().is_empty() => name.trim().to_string(),
            _ => bail!("session file {} has no player names", self.path.display()),
        };
        let black = match lines.next() {
            Some(name) if !name.trim().is_empty() => name.trim().to_string(),
            _ => bail!("session file {} has no player names", self.path.display()),
        };
        let moves = lines
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Session {
            white,
            black,
            moves,
        })
    }

    /// Drop the finished session file.
    pub fn clear(&self) -> Result<()> {
        if self.exists() {
            fs::remove_file(&self.path)
                .with_context(|| format!("could not remove {}", self.path.display()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
