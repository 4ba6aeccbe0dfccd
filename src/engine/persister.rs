use tracing::error;

use crate::diagnostics::DiagnosticSink;
use crate::models::TradeRecord;
use crate::storage::{StorageError, TradeStore};

/// Stores the whole batch in one transaction and reports how many trades it held.
///
/// # Errors
/// Returns the first `StorageError` raised by the store. Nothing from the batch
/// remains stored in that case.
pub fn persist<S, D>(trades: Vec<TradeRecord>, store: &mut S, sink: &mut D) -> Result<usize, StorageError>
where
    S: TradeStore + ?Sized,
    D: DiagnosticSink + ?Sized
{
    store.begin()?;

    let result = trades.iter().try_for_each(|trade| store.insert(trade));

    finalize_transaction(store, result)?;

    sink.info(&format!("{} trades processed", trades.len()));

    Ok(trades.len())
}

/// Commits on success, otherwise rolls back and hands the original error on.
fn finalize_transaction<S: TradeStore + ?Sized>(store: &mut S, result: Result<(), StorageError>) -> Result<(), StorageError> {
    match result {
        Ok(()) => store.commit(),
        Err(error) => {
            if let Err(rollback_error) = store.rollback() {
                error!("Rollback failed after storage error [{error}]: {rollback_error}");
            }

            Err(error)
        }
    }
}
