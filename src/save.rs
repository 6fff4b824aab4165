//! High-score persistence.
//!
//! The high score is stored in `saves/highscore.toml` as a small versioned
//! snapshot.  It is loaded when a session starts and written back when the
//! player returns to the menu after game-over.  The only expected failure
//! path is a missing file on first launch, which is logged at info level and
//! leaves the high score at zero.

use std::fs;
use std::path::{Path, PathBuf};

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};
use crate::menu::GameState;
use crate::player::HighScore;

const SAVE_VERSION: u32 = 1;

/// On-disk layout of the high-score file.
#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
struct HighScoreFile {
    version: u32,
    high_score: u32,
}

fn save_dir() -> PathBuf {
    PathBuf::from("saves")
}

fn save_path() -> PathBuf {
    save_dir().join("highscore.toml")
}

// ── Disk IO ───────────────────────────────────────────────────────────────────

/// Read and validate a high-score file at `path`.
pub fn load_high_score_from(path: &Path) -> GameResult<u32> {
    let contents = fs::read_to_string(path).map_err(|err| GameError::SaveRead {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;

    let file: HighScoreFile = toml::from_str(&contents).map_err(|err| GameError::SaveParse {
        message: err.to_string(),
    })?;

    if file.version != SAVE_VERSION {
        return Err(GameError::SaveVersion {
            found: file.version,
            expected: SAVE_VERSION,
        });
    }

    Ok(file.high_score)
}

/// Serialize `score` to a high-score file at `path`, creating parent
/// directories as needed.
pub fn write_high_score_to(path: &Path, score: u32) -> GameResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|err| GameError::SaveWrite {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
    }

    let file = HighScoreFile {
        version: SAVE_VERSION,
        high_score: score,
    };
    let serialized = toml::to_string_pretty(&file).map_err(|err| GameError::SaveParse {
        message: err.to_string(),
    })?;

    fs::write(path, serialized).map_err(|err| GameError::SaveWrite {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}

/// Load from the default location (`saves/highscore.toml`).
pub fn load_high_score() -> GameResult<u32> {
    load_high_score_from(&save_path())
}

/// Write to the default location (`saves/highscore.toml`).
pub fn write_high_score(score: u32) -> GameResult<()> {
    write_high_score_to(&save_path(), score)
}

// ── Plugin ────────────────────────────────────────────────────────────────────

pub struct SavePlugin;

impl Plugin for SavePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnExit(GameState::MainMenu), load_high_score_system);
    }
}

/// Populate the [`HighScore`] resource from disk when a session starts.
///
/// A missing file just means nobody has finished a game yet.
pub fn load_high_score_system(mut high: ResMut<HighScore>) {
    let path = save_path();
    if !path.exists() {
        info!("No save file at {}; high score starts at 0", path.display());
        high.best = 0;
        return;
    }

    match load_high_score_from(&path) {
        Ok(best) => {
            high.best = best;
            info!("Loaded high score {best}");
        }
        Err(err) => {
            error!("Ignoring unreadable save file: {err}");
            high.best = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("fracture-{}-{}", std::process::id(), name))
    }

    #[test]
    fn round_trips_a_high_score() {
        let path = temp_file("roundtrip.toml");
        write_high_score_to(&path, 4270).unwrap();
        assert_eq!(load_high_score_from(&path).unwrap(), 4270);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let path = temp_file("does-not-exist.toml");
        match load_high_score_from(&path) {
            Err(GameError::SaveRead { .. }) => {}
            other => panic!("expected SaveRead, got {other:?}"),
        }
    }

    #[test]
    fn garbage_contents_are_a_parse_error() {
        let path = temp_file("garbage.toml");
        fs::write(&path, "not = [valid").unwrap();
        match load_high_score_from(&path) {
            Err(GameError::SaveParse { .. }) => {}
            other => panic!("expected SaveParse, got {other:?}"),
        }
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn future_version_is_rejected() {
        let path = temp_file("future.toml");
        fs::write(&path, "version = 99\nhigh_score = 10\n").unwrap();
        match load_high_score_from(&path) {
            Err(GameError::SaveVersion {
                found: 99,
                expected: SAVE_VERSION,
            }) => {}
            other => panic!("expected SaveVersion, got {other:?}"),
        }
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn writer_creates_missing_parent_directories() {
        let dir = temp_file("nested-dir");
        let path = dir.join("deep").join("highscore.toml");
        write_high_score_to(&path, 1).unwrap();
        assert_eq!(load_high_score_from(&path).unwrap(), 1);
        let _ = fs::remove_dir_all(&dir);
    }
}
