use crate::diagnostics::DiagnosticSink;
use crate::engine::mapper::map;
use crate::engine::validator::validate;
use crate::models::TradeRecord;

const FIELD_DELIMITER: char = ',';

/// Turns raw lines into trade records, skipping lines that fail validation.
///
/// Line numbers start at 1 and count every line, skipped or not.
pub fn parse<D: DiagnosticSink + ?Sized>(lines: &[String], sink: &mut D) -> Vec<TradeRecord> {
    let mut trades = Vec::with_capacity(lines.len());

    for (index, line) in lines.iter().enumerate() {
        let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();

        if let Some(trade) = validate(&fields, index + 1, sink) {
            trades.push(map(trade));
        }
    }

    trades
}
