// Task store error types

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read task file {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Task file {path} is not a valid task list: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write task file {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Task title cannot be empty")]
    EmptyTitle,

    #[error("Task ids are exhausted")]
    IdsExhausted,
}

pub type Result<T> = std::result::Result<T, StoreError>;
