use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Storage CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Trade rejected by store, column [{column}]: {reason}")]
    Rejected {
        column: &'static str,
        reason: String
    },
    #[error("No transaction is in progress")]
    NoTransaction,
    #[error("A transaction is already in progress")]
    TransactionInProgress
}
