use thiserror::Error;

/// Failures outside the optimiser itself: loading configuration and trees
#[derive(Debug, Error)]
pub enum CompilationError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Invalid AST file: {0}")]
    InterchangeError(String),
}

pub type Result<T> = std::result::Result<T, CompilationError>;
