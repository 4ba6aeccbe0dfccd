use crate::types::LineNumber;
use thiserror::Error;

/// Reasons a single input line is rejected.
///
/// The display output is the warning reported for the line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LineError {
    #[error("Line {line_number} malformed. Only {field_count} field(s) found.")]
    FieldCount {
        line_number: LineNumber,
        field_count: usize
    },
    #[error("Trade currencies on line {line_number} malformed: '{value}'")]
    CurrencyPair {
        line_number: LineNumber,
        value: String
    },
    #[error("Trade amount on line {line_number} not a valid integer: '{value}'")]
    Amount {
        line_number: LineNumber,
        value: String
    },
    #[error("Trade price on line {line_number} not a valid decimal: '{value}'")]
    Price {
        line_number: LineNumber,
        value: String
    }
}

