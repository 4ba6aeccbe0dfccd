pub type LineNumber = usize;
pub type TradeAmount = i32;
pub type Lots = i32;

/// Number of currency units in one tradable lot.
pub const LOT_SIZE: TradeAmount = 100_000;
