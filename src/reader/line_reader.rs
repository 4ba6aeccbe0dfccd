use std::io::{BufRead, BufReader, Read, Result};

const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Drains `source` into memory, one entry per line with terminators stripped.
///
/// A leading UTF-8 byte order mark is dropped. The source is consumed and
/// dropped before returning, on success or failure.
///
/// # Errors
/// Returns the underlying I/O error if the source cannot be read or is not valid UTF-8.
pub fn read_lines<R: Read>(source: R) -> Result<Vec<String>> {
    let mut lines = BufReader::new(source).lines().collect::<Result<Vec<String>>>()?;

    if let Some(first) = lines.first_mut() {
        if first.starts_with(BYTE_ORDER_MARK) {
            first.drain(..BYTE_ORDER_MARK.len_utf8());
        }
    }

    Ok(lines)
}
