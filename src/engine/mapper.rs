use crate::models::{TradeRecord, ValidatedTrade};
use crate::types::LOT_SIZE;

const CURRENCY_CODE_LENGTH: usize = 3;

/// Normalizes a validated line into a trade record.
///
/// Lots use truncating division, fractional lots are dropped rather than rounded.
pub fn map(trade: ValidatedTrade<'_>) -> TradeRecord {
    let split = trade.currency_pair.char_indices()
        .nth(CURRENCY_CODE_LENGTH)
        .map_or(trade.currency_pair.len(), |(index, _)| index);
    let (source_currency, destination_currency) = trade.currency_pair.split_at(split);

    TradeRecord {
        source_currency: source_currency.to_string(),
        destination_currency: destination_currency.to_string(),
        lots: trade.amount / LOT_SIZE,
        price: trade.price
    }
}
