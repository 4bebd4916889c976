//! Labeled-record framing — FASTA-style headers around encoded streams.
//!
//! Each record is a header line (`>` sentinel, label, ` #` terminator)
//! followed by its encoded body. External tools may re-wrap the body
//! across lines and insert gap markers; the parser groups wrapped lines
//! back under their header and the tolerant decoder passes the formatting
//! through.

use crate::error::{IoError, Result};
use pfc_codec::{decode_tolerant, encode, Dictionary};

pub const HEADER_SENTINEL: char = '>';
pub const HEADER_TERMINATOR: &str = " #";

/// One labeled record: a caller-supplied label and an encoded body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub label: String,
    pub body: String,
}

impl Record {
    pub fn new(label: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            body: body.into(),
        }
    }
}

/// Render records as framed text, one header line per record with the
/// body on the following line.
pub fn write_records(records: &[Record]) -> String {
    let mut lines = Vec::with_capacity(records.len() * 2);
    for rec in records {
        lines.push(format!("{HEADER_SENTINEL}{}{HEADER_TERMINATOR}", rec.label));
        lines.push(rec.body.clone());
    }
    lines.join("\n")
}

/// Parse framed text back into records.
///
/// Body lines between headers are re-joined with their line breaks kept,
/// since the tolerant decoder emits those verbatim. A body line before
/// any header is malformed.
pub fn parse_records(text: &str) -> Result<Vec<Record>> {
    let mut records: Vec<Record> = Vec::new();
    let mut current: Option<(String, Vec<&str>)> = None;
    for line in text.lines() {
        if let Some(rest) = line.strip_prefix(HEADER_SENTINEL) {
            if let Some((label, body)) = current.take() {
                records.push(Record::new(label, body.join("\n")));
            }
            let label = rest.strip_suffix(HEADER_TERMINATOR).unwrap_or(rest);
            current = Some((label.to_string(), Vec::new()));
        } else if let Some((_, ref mut body)) = current {
            body.push(line);
        } else {
            return Err(IoError::MalformedRecord(format!(
                "body line before any header: {line:?}"
            )));
        }
    }
    if let Some((label, body)) = current {
        records.push(Record::new(label, body.join("\n")));
    }
    Ok(records)
}

/// Encode each line of `text` as its own record, labeled by position.
pub fn encode_lines(text: &str, dict: &Dictionary) -> Result<Vec<Record>> {
    let mut records = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let body = encode(line, dict)?;
        records.push(Record::new(format!("seq_{idx}"), body));
    }
    Ok(records)
}

/// Tolerant-decode every record body, keeping labels and any formatting
/// an external tool introduced.
pub fn decode_records(records: &[Record], dict: &Dictionary) -> Vec<Record> {
    records
        .iter()
        .map(|rec| Record::new(rec.label.clone(), decode_tolerant(&rec.body, dict)))
        .collect()
}
