//! Game-specific error types.
//!
//! The save layer propagates errors through these types rather than
//! panicking; systems surface them with `error!` and keep running.

use std::fmt;
use std::path::PathBuf;

/// Top-level error enum for the game.
#[derive(Debug)]
pub enum GameError {
    /// The save file could not be read from disk.
    SaveRead {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying IO error text.
        message: String,
    },

    /// The save file could not be written to disk.
    SaveWrite {
        /// Path that was being written.
        path: PathBuf,
        /// Underlying IO error text.
        message: String,
    },

    /// The save file exists but is not valid TOML / does not match the schema.
    SaveParse {
        /// Parser error text.
        message: String,
    },

    /// The save file carries a version this build does not understand.
    SaveVersion {
        /// Version found in the file.
        found: u32,
        /// Version this build writes.
        expected: u32,
    },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::SaveRead { path, message } => {
                write!(f, "failed to read save file {}: {}", path.display(), message)
            }
            GameError::SaveWrite { path, message } => {
                write!(
                    f,
                    "failed to write save file {}: {}",
                    path.display(),
                    message
                )
            }
            GameError::SaveParse { message } => {
                write!(f, "failed to parse save file: {}", message)
            }
            GameError::SaveVersion { found, expected } => write!(
                f,
                "unsupported save version {} (expected {})",
                found, expected
            ),
        }
    }
}

impl std::error::Error for GameError {}

/// Convenience alias: a `Result` using `GameError` as the error type.
pub type GameResult<T> = Result<T, GameError>;
