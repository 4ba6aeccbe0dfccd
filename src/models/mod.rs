mod errors;
mod trade;

pub use errors::LineError;
pub use trade::{TradeRecord, ValidatedTrade};
