use std::io;

use thiserror::Error;

use crate::storage::StorageError;

#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error("Could not read trade data: {0}")]
    Read(#[from] io::Error),
    #[error("Could not store trades: {0}")]
    Storage(#[from] StorageError)
}
