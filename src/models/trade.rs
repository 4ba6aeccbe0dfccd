use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{Lots, TradeAmount};

/// A normalized trade, ready to be persisted.
///
/// Field names double as the column names of the trade store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeRecord {
    /// Currency being sold, e.g. `EUR` in `EURUSD`.
    pub source_currency: String,
    /// Currency being bought, e.g. `USD` in `EURUSD`.
    pub destination_currency: String,
    /// Whole lots traded. Fractional lots are discarded.
    pub lots: Lots,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal
}

/// The fields of a line that passed validation, already parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedTrade<'a> {
    pub currency_pair: &'a str,
    pub amount: TradeAmount,
    pub price: Decimal
}
