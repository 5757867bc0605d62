//! Error types shared by the library and the binaries.
//!
//! Failing to find a solution is not an error: the solver reports it as `None`.

use std::path::PathBuf;

use crate::engine::Move;

/// Errors raised while building or parsing a board.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("a board needs at least one tube")]
    NoTubes,

    #[error("tube capacity must be at least 1")]
    ZeroCapacity,

    #[error("tube {tube} holds {len} units but capacity is {capacity}")]
    TubeOverflow {
        tube: usize,
        len: usize,
        capacity: usize,
    },

    #[error("requested {requested} colors but at most {max} are supported")]
    TooManyColors { requested: usize, max: usize },

    #[error("unrecognized character '{ch}' on line {line} column {column}")]
    UnknownColor {
        ch: char,
        line: usize,
        column: usize,
    },

    #[error("failed to read board file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors that can occur when loading a color palette.
#[derive(Debug, thiserror::Error)]
pub enum PaletteError {
    #[error("failed to read palette file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse palette JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("palette contains no colors")]
    Empty,

    #[error("invalid hex color '{0}'")]
    InvalidHex(String),
}

/// Errors raised while stepping through a recorded solution.
#[derive(Debug, thiserror::Error)]
pub enum PlaybackError {
    #[error("step {step} ({mv}) is not a legal pour on the current board")]
    IllegalMove { step: usize, mv: Move },
}
