mod csv_storage;
mod errors;
mod memory_storage;

use crate::models::TradeRecord;

pub use csv_storage::CsvTradeStore;
pub use errors::StorageError;
pub use memory_storage::MemoryTradeStore;

/// Column names of the trade table, in insert order.
pub const TRADE_COLUMNS: [&str; 4] = ["source_currency", "destination_currency", "lots", "price"];

const CURRENCY_CODE_LENGTH: usize = 3;

/// Transactional destination for trade records.
///
/// Rows inserted between `begin` and `commit` become visible together; `rollback`
/// discards every row inserted since `begin`.
pub trait TradeStore {
    fn begin(&mut self) -> Result<(), StorageError>;
    fn insert(&mut self, trade: &TradeRecord) -> Result<(), StorageError>;
    fn commit(&mut self) -> Result<(), StorageError>;
    fn rollback(&mut self) -> Result<(), StorageError>;
}

/// Enforces the column constraints every store shares.
fn check_columns(trade: &TradeRecord) -> Result<(), StorageError> {
    for (column, code) in [
        (TRADE_COLUMNS[0], &trade.source_currency),
        (TRADE_COLUMNS[1], &trade.destination_currency)
    ] {
        if code.chars().count() != CURRENCY_CODE_LENGTH {
            return Err(StorageError::Rejected {
                column,
                reason: format!("'{code}' is not a {CURRENCY_CODE_LENGTH} character currency code")
            });
        }
    }

    Ok(())
}
