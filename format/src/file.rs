//! The file codec: a record sequence to text and back.
//!
//! Encoding is strict (any field error aborts, nothing partial comes
//! back). Decoding is best-effort: unknown record type codes and field
//! failures are logged and the line is skipped, because files in the wild
//! come from producers with looser tolerances.

use log::{info, warn};

use crate::error::FormatError;
use crate::record::{Layout, Record};

/// Serialize records in order, one fixed-width line each,
/// newline-terminated.
pub fn encode_records(records: &[Record]) -> Result<String, FormatError> {
    let mut text = String::new();
    for record in records {
        text.push_str(&record.encode()?);
        text.push('\n');
    }
    Ok(text)
}

/// What a best-effort decode pass saw.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Decoded-line counts per record type code, in first-seen order.
    pub counts:  Vec<(String, usize)>,
    /// Lines that did not decode (unknown code or field failure).
    pub skipped: usize,
}

impl ScanSummary {
    fn credit(&mut self, code: &str) {
        match self.counts.iter_mut().find(|(c, _)| c == code) {
            Some((_, n)) => *n += 1,
            None => self.counts.push((code.to_string(), 1)),
        }
    }

    pub fn count(&self, code: &str) -> usize {
        self.counts
            .iter()
            .find(|(c, _)| c == code)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }
}

/// Deserialize text line by line, dispatching each line on its first two
/// characters. Returns the decoded records plus the scan summary; the
/// summary credits only lines that actually decoded.
pub fn decode_records(text: &str, layout: &Layout) -> (Vec<Record>, ScanSummary) {
    let mut records = Vec::new();
    let mut summary = ScanSummary::default();

    for (lineno, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let code: String = line.chars().take(2).collect();
        let def = match layout.def(&code) {
            Some(def) => def,
            None => {
                warn!(
                    "line {}: skipping unknown record type code {:?}",
                    lineno + 1,
                    code
                );
                summary.skipped += 1;
                continue;
            }
        };
        if summary.count(def.code) == 0 {
            info!("found record type code {:?} ({})", def.code, def.label);
        }
        match Record::decode(def, line) {
            Ok(record) => {
                summary.credit(def.code);
                records.push(record);
            }
            Err(err) => {
                warn!("line {}: skipping {} record: {}", lineno + 1, def.label, err);
                summary.skipped += 1;
            }
        }
    }

    (records, summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{FILE_TERMINATOR, SDIF_V3};
    use crate::value::FieldValue;

    fn terminator() -> Record {
        let mut z0 = Record::new(&FILE_TERMINATOR);
        z0.set("organization", FieldValue::Code("1".into()));
        z0.set("file_code", FieldValue::Code("02".into()));
        z0
    }

    #[test]
    fn test_encode_is_line_per_record() {
        let text = encode_records(&[terminator(), terminator()]).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|l| l.len() == FILE_TERMINATOR.width()));
    }

    #[test]
    fn test_encode_failure_yields_no_partial_text() {
        let bad = Record::new(&FILE_TERMINATOR);
        assert!(encode_records(&[terminator(), bad]).is_err());
    }

    #[test]
    fn test_decode_skips_unknown_codes() {
        let text = format!("{}\nQ9 something else\n", terminator().encode().unwrap());
        let (records, summary) = decode_records(&text, &SDIF_V3);
        assert_eq!(records.len(), 1);
        assert_eq!(summary.count("Z0"), 1);
        assert_eq!(summary.count("Q9"), 0);
        assert_eq!(summary.skipped, 1);
    }

    #[test]
    fn test_decode_skips_field_failures() {
        // A Z0 line whose file code is not in the closed set
        let text = "Z01        99\n";
        let (records, summary) = decode_records(text, &SDIF_V3);
        assert!(records.is_empty());
        assert_eq!(summary.skipped, 1);
    }

    #[test]
    fn test_decode_ignores_blank_lines() {
        let text = format!("\n{}\n\n", terminator().encode().unwrap());
        let (records, summary) = decode_records(&text, &SDIF_V3);
        assert_eq!(records.len(), 1);
        assert_eq!(summary.skipped, 0);
    }
}
