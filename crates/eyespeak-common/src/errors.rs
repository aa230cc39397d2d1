use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Reasons a frame produced no usable eye-state reading.
///
/// None of these are fatal: the session skips the frame exactly as if no
/// face had been detected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GestureError {
    #[error("landmark {index} missing from frame of {len} points")]
    MissingLandmark { index: usize, len: usize },

    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(&'static str),

    #[error("unknown intent name: {0}")]
    UnknownIntent(String),
}

#[derive(Debug, thiserror::Error)]
pub enum EyespeakError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("frame source error: {0}")]
    Source(String),

    #[error("speech error: {0}")]
    Speech(String),
}
