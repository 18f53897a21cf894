use std::path::PathBuf;

use thiserror::Error;

use crate::error::StorageError;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Failed to read document '{path}': {source}")]
    ReadDocument {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to persist report: {0}")]
    Persist(#[from] StorageError),
}
