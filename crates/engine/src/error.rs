use crate::options::LookupMode;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("Failed to read metadata of '{path}' ({mode}): {source}")]
    Metadata {
        path: PathBuf,
        mode: LookupMode,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read link target of '{path}': {source}")]
    ReadLink {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported entry type at '{path}'")]
    UnsupportedType { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, ClassifyError>;
