use std::str::FromStr;

use rust_decimal::Decimal;

use crate::diagnostics::DiagnosticSink;
use crate::models::{LineError, ValidatedTrade};
use crate::types::{LineNumber, TradeAmount};

const CURRENCY_PAIR_LENGTH: usize = 6;

/// Runs the line checks in order, stopping at the first failure.
///
/// The checks are: exactly three fields, a six character currency pair, an
/// integer amount and a decimal price.
pub fn check<'a>(fields: &[&'a str], line_number: LineNumber) -> Result<ValidatedTrade<'a>, LineError> {
    let &[currency_pair, amount, price] = fields else {
        return Err(LineError::FieldCount { line_number, field_count: fields.len() });
    };

    if currency_pair.chars().count() != CURRENCY_PAIR_LENGTH {
        return Err(LineError::CurrencyPair { line_number, value: currency_pair.to_string() });
    }

    let amount = amount.trim().parse::<TradeAmount>()
        .map_err(|_| LineError::Amount { line_number, value: amount.to_string() })?;

    let price = Some(price.trim())
        .filter(|text| is_plain_decimal(text))
        .and_then(|text| Decimal::from_str(text).ok())
        .ok_or_else(|| LineError::Price { line_number, value: price.to_string() })?;

    Ok(ValidatedTrade { currency_pair, amount, price })
}

/// Validates a line, reporting the first failed check as a warning.
pub fn validate<'a, D: DiagnosticSink + ?Sized>(fields: &[&'a str], line_number: LineNumber, sink: &mut D) -> Option<ValidatedTrade<'a>> {
    match check(fields, line_number) {
        Ok(trade) => Some(trade),
        Err(error) => {
            sink.warn(&error.to_string());
            None
        }
    }
}

/// Optional leading sign, then digits with at most one decimal point.
///
/// Exponents and digit separators are not plain decimals even where `Decimal` would take them.
fn is_plain_decimal(text: &str) -> bool {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);

    digits.chars().any(|c| c.is_ascii_digit())
        && digits.chars().all(|c| c.is_ascii_digit() || c == '.')
        && digits.matches('.').count() <= 1
}
