//! The field codec: one typed value to or from one fixed-width field.

use crate::date::SwimDate;
use crate::error::FormatError;
use crate::line::{LineReader, LineWriter};
use crate::time::SwimTime;
use crate::value::FieldValue;

/// How a field's characters are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// Free text, left-justified, right-truncated when over-wide.
    Str,
    /// Whole number, right-justified. Over-wide values are an error.
    Int,
    /// Implied-decimal number in hundredths, written as a scaled integer.
    Decimal,
    /// 8-character `MMDDYYYY`.
    Date,
    /// Clock time or sentinel code, right-justified.
    Time,
    /// Member of a closed code set, left-justified.
    Code(&'static [&'static str]),
    /// `Y` / `N`.
    Bool,
}

impl FieldType {
    fn name(&self) -> &'static str {
        match self {
            FieldType::Str => "text",
            FieldType::Int => "integer",
            FieldType::Decimal => "decimal",
            FieldType::Date => "date",
            FieldType::Time => "time",
            FieldType::Code(_) => "code",
            FieldType::Bool => "boolean",
        }
    }
}

/// One field of a record layout: a name, a 1-based start column, a fixed
/// width, a type, and the two mandatoriness flags.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name:  &'static str,
    pub start: usize,
    pub width: usize,
    pub kind:  FieldType,
    /// Encoding an `Empty` value here is an error.
    pub required_on_encode: bool,
    /// Decoding a blank here fails the whole line (the file codec then
    /// skips it).
    pub required_on_decode: bool,
}

impl FieldSpec {
    /// The column just past this field's last character.
    pub fn extent(&self) -> usize {
        self.start + self.width
    }
}

/// Encode `value` into `out` at the field's position.
pub fn encode_field(
    record: &'static str,
    spec: &FieldSpec,
    value: &FieldValue,
    out: &mut LineWriter,
) -> Result<(), FormatError> {
    if value.is_empty() {
        if spec.required_on_encode {
            return Err(FormatError::MissingRequiredField {
                record,
                field: spec.name,
            });
        }
        return Ok(());
    }

    let mismatch = |found: &'static str| FormatError::TypeMismatch {
        field:    spec.name,
        expected: spec.kind.name(),
        found,
    };
    let too_wide = |text: &str| FormatError::ValueTooWide {
        field: spec.name,
        value: text.to_string(),
        width: spec.width,
    };

    match (spec.kind, value) {
        (FieldType::Str, FieldValue::Str(text)) => {
            out.put(spec.start, spec.width, text);
        }
        (FieldType::Int, FieldValue::Int(n)) => {
            let text = n.to_string();
            if text.chars().count() > spec.width {
                return Err(too_wide(&text));
            }
            out.put_right(spec.start, spec.width, &text);
        }
        (FieldType::Decimal, FieldValue::Decimal(hundredths)) => {
            let text = hundredths.to_string();
            if text.chars().count() > spec.width {
                return Err(too_wide(&text));
            }
            out.put_right(spec.start, spec.width, &text);
        }
        (FieldType::Date, FieldValue::Date(date)) => {
            out.put(spec.start, spec.width, &date.encode());
        }
        (FieldType::Time, FieldValue::Time(time)) => {
            let text = time.encode();
            if text.chars().count() > spec.width {
                return Err(too_wide(&text));
            }
            out.put_right(spec.start, spec.width, &text);
        }
        (FieldType::Code(allowed), FieldValue::Code(code)) => {
            if !allowed.contains(&code.as_str()) {
                return Err(FormatError::UnknownCode {
                    field: spec.name,
                    value: code.clone(),
                });
            }
            if code.chars().count() > spec.width {
                return Err(too_wide(code));
            }
            out.put(spec.start, spec.width, code);
        }
        (FieldType::Bool, FieldValue::Bool(flag)) => {
            out.put(spec.start, spec.width, if *flag { "Y" } else { "N" });
        }
        (_, FieldValue::Str(_)) => return Err(mismatch("text")),
        (_, FieldValue::Int(_)) => return Err(mismatch("integer")),
        (_, FieldValue::Decimal(_)) => return Err(mismatch("decimal")),
        (_, FieldValue::Date(_)) => return Err(mismatch("date")),
        (_, FieldValue::Time(_)) => return Err(mismatch("time")),
        (_, FieldValue::Code(_)) => return Err(mismatch("code")),
        (_, FieldValue::Bool(_)) => return Err(mismatch("boolean")),
        (_, FieldValue::Empty) => unreachable!("empty handled above"),
    }
    Ok(())
}

/// Decode the field at its position in `line`. A line too short to reach
/// the field yields `Empty` rather than an error.
pub fn decode_field(
    record: &'static str,
    spec: &FieldSpec,
    line: &LineReader,
) -> Result<FieldValue, FormatError> {
    let raw = line.field_trimmed(spec.start, spec.width);
    if raw.is_empty() {
        if spec.required_on_decode {
            return Err(FormatError::MissingRequiredField {
                record,
                field: spec.name,
            });
        }
        return Ok(FieldValue::Empty);
    }

    match spec.kind {
        FieldType::Str => Ok(FieldValue::Str(raw.to_string())),
        FieldType::Int => raw
            .parse::<i64>()
            .map(FieldValue::Int)
            .map_err(|_| FormatError::MalformedNumber {
                field: spec.name,
                value: raw.to_string(),
            }),
        FieldType::Decimal => raw
            .parse::<i64>()
            .map(FieldValue::Decimal)
            .map_err(|_| FormatError::MalformedNumber {
                field: spec.name,
                value: raw.to_string(),
            }),
        FieldType::Date => SwimDate::from_mmddyyyy(raw).map(FieldValue::Date),
        FieldType::Time => SwimTime::decode(raw).map(FieldValue::Time),
        FieldType::Code(allowed) => {
            if allowed.contains(&raw) {
                Ok(FieldValue::Code(raw.to_string()))
            } else {
                Err(FormatError::UnknownCode {
                    field: spec.name,
                    value: raw.to_string(),
                })
            }
        }
        FieldType::Bool => match raw {
            "Y" => Ok(FieldValue::Bool(true)),
            "N" => Ok(FieldValue::Bool(false)),
            _ => Err(FormatError::UnknownCode {
                field: spec.name,
                value: raw.to_string(),
            }),
        },
    }
}
