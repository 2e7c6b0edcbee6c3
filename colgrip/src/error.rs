use thiserror::Error;

/// Engine lifecycle misuse. Input handling never errors; malformed or
/// irrelevant events degrade to "resize did not happen this time".
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    #[error("engine is already mounted")]
    AlreadyMounted,
    #[error("engine is not mounted")]
    NotMounted,
}
