// crates/cli/src/error.rs
use file_kind_engine::config::ClassifyOptionsBuilderError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Usage error: {0}")]
    Usage(#[from] clap::Error),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ClassifyOptionsBuilderError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
