use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("Missing required field \"{field}\" in {record} record")]
    MissingRequiredField {
        record: &'static str,
        field:  &'static str,
    },

    #[error("Unknown code {value:?} for field \"{field}\"")]
    UnknownCode { field: &'static str, value: String },

    #[error("Malformed date {0:?}, expected MMDDYYYY")]
    MalformedDate(String),

    #[error("Malformed swim time {0:?}")]
    MalformedTime(String),

    #[error("Malformed number {value:?} in field \"{field}\"")]
    MalformedNumber { field: &'static str, value: String },

    #[error("Value {value:?} does not fit field \"{field}\" of width {width}")]
    ValueTooWide {
        field: &'static str,
        value: String,
        width: usize,
    },

    #[error("Field \"{field}\" holds a {found} value but is declared {expected}")]
    TypeMismatch {
        field:    &'static str,
        expected: &'static str,
        found:    &'static str,
    },

    #[error("Unknown record type code {0:?}")]
    UnknownRecordType(String),

    #[error("Invalid record layout: {0}")]
    InvalidLayout(String),
}
