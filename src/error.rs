use std::path::PathBuf;

/// Errors raised by direct [`Board`](crate::game::Board) access.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("invalid board dimensions {width}x{height} (both must be > 0)")]
    InvalidDimensions { width: usize, height: usize },

    #[error("column {column} out of range (board is {width} wide)")]
    ColumnOutOfRange { column: usize, width: usize },

    #[error("cell ({row}, {column}) out of range (board is {width}x{height})")]
    OutOfRange {
        row: usize,
        column: usize,
        width: usize,
        height: usize,
    },

    #[error("cell ({row}, {column}) is already occupied")]
    CellOccupied { row: usize, column: usize },
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

/// Errors that can occur while replaying a move script.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
