//! Tolerant delimited-text parsing
//!
//! One quote-aware scanner serves both the header-driven catalog format and
//! the positional wishlist format: `"` toggles quoted mode, a doubled `""`
//! inside a quoted region yields a literal quote, commas separate fields only
//! outside quotes, and newlines end a record only outside quotes (so quoted
//! fields may span lines). Unbalanced quotes degrade to a best-effort split
//! rather than an error.

use std::collections::HashMap;

/// Split raw text into records of positional fields.
///
/// Carriage returns outside quotes are swallowed, so any newline convention
/// works. Empty input yields no records; a final record without a trailing
/// newline is still emitted.
pub fn parse_records(text: &str) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    let mut fields: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' => {
                if in_quotes && chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
            '\r' if !in_quotes => {}
            '\n' if !in_quotes => {
                fields.push(std::mem::take(&mut field));
                records.push(std::mem::take(&mut fields));
            }
            _ => field.push(c),
        }
    }

    if !field.is_empty() || !fields.is_empty() {
        fields.push(field);
        records.push(fields);
    }

    records
}

/// Header-driven parsing: the first record names the columns, every following
/// non-blank record becomes a column → value map.
///
/// Headers and values are trimmed. Pairing is positional: a short row simply
/// omits its trailing columns, extra fields beyond the header count are
/// dropped. Blank records (a lone field that trims to empty) produce no row.
pub fn parse_table(text: &str) -> Vec<HashMap<String, String>> {
    let mut records = parse_records(text).into_iter();

    let headers: Vec<String> = match records.next() {
        Some(header) => header.into_iter().map(|h| h.trim().to_string()).collect(),
        None => return Vec::new(),
    };

    records
        .filter(|record| !is_blank(record))
        .map(|record| {
            headers
                .iter()
                .zip(record)
                .map(|(header, value)| (header.clone(), value.trim().to_string()))
                .collect()
        })
        .collect()
}

/// A record coming from a line that was empty after trimming
pub(crate) fn is_blank(record: &[String]) -> bool {
    record.len() <= 1 && record.iter().all(|f| f.trim().is_empty())
}
