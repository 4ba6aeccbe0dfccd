use crate::models::TradeRecord;
use crate::storage::{StorageError, TradeStore, check_columns};

/// Keeps committed trades in memory for the lifetime of the store.
#[derive(Debug, Default)]
pub struct MemoryTradeStore {
    committed: Vec<TradeRecord>,
    pending: Option<Vec<TradeRecord>>
}

impl MemoryTradeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Committed trades, in insert order.
    pub fn records(&self) -> &[TradeRecord] {
        &self.committed
    }
}

impl TradeStore for MemoryTradeStore {
    fn begin(&mut self) -> Result<(), StorageError> {
        if self.pending.is_some() {
            return Err(StorageError::TransactionInProgress);
        }

        self.pending = Some(Vec::new());

        Ok(())
    }

    fn insert(&mut self, trade: &TradeRecord) -> Result<(), StorageError> {
        let pending = self.pending.as_mut().ok_or(StorageError::NoTransaction)?;
        check_columns(trade)?;
        pending.push(trade.clone());

        Ok(())
    }

    fn commit(&mut self) -> Result<(), StorageError> {
        let pending = self.pending.take().ok_or(StorageError::NoTransaction)?;
        self.committed.extend(pending);

        Ok(())
    }

    fn rollback(&mut self) -> Result<(), StorageError> {
        self.pending.take().ok_or(StorageError::NoTransaction)?;

        Ok(())
    }
}
