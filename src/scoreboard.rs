//! Durable scoreboard: a JSON list of submitted scores under a fixed
//! key, appended to on every submit. The game core never validates the
//! store's contents; it only hands records over.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Fixed identifier the scoreboard is stored under.
pub const SCOREBOARD_KEY: &str = "snake-scoreboard";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub username: String,
    pub score: u32,
}

pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store in the working directory under the fixed scoreboard key.
    pub fn default_location() -> Self {
        Self::new(format!("{SCOREBOARD_KEY}.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every submitted entry, oldest first. A missing file reads as an
    /// empty scoreboard.
    pub fn load(&self) -> Result<Vec<ScoreEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("reading scoreboard {}", self.path.display()))?;
        let entries = serde_json::from_str(&data)
            .with_context(|| format!("parsing scoreboard {}", self.path.display()))?;
        Ok(entries)
    }

    /// Append one entry and write the list back.
    pub fn submit(&self, entry: ScoreEntry) -> Result<()> {
        let mut entries = self.load()?;
        entries.push(entry);
        let data = serde_json::to_string_pretty(&entries)?;
        fs::write(&self.path, data)
            .with_context(|| format!("writing scoreboard {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempdir().unwrap();
        let store = ScoreStore::new(dir.path().join("scores.json"));
        assert_eq!(store.load().unwrap(), Vec::new());
    }

    #[test]
    fn submits_append_in_order() {
        let dir = tempdir().unwrap();
        let store = ScoreStore::new(dir.path().join("scores.json"));

        store
            .submit(ScoreEntry {
                username: "ada".into(),
                score: 500,
            })
            .unwrap();
        store
            .submit(ScoreEntry {
                username: "brian".into(),
                score: 1_200,
            })
            .unwrap();

        let entries = store.load().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].username, "ada");
        assert_eq!(entries[0].score, 500);
        assert_eq!(entries[1].username, "brian");
        assert_eq!(entries[1].score, 1_200);
    }

    #[test]
    fn garbage_on_disk_is_an_error_not_a_panic() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scores.json");
        std::fs::write(&path, "not json").unwrap();

        let store = ScoreStore::new(path);
        assert!(store.load().is_err());
    }
}
