//! This is a Rust library implementing the fixed-width record codecs for
//! the SDIF swimming data interchange format (`.sd3` files): typed field
//! values, per-field encode/decode against a positional field spec, the
//! record type registry, and the line-oriented file codec.
//!
//! ```
//! use sdif_format::*;
//!
//! let mut z0 = Record::new(&FILE_TERMINATOR);
//! z0.set("organization", codes::OrganizationCode::Uss);
//! z0.set("file_code", codes::FileCode::MeetResults);
//!
//! let text = encode_records(&[z0]).unwrap();
//! assert!(text.starts_with("Z01"));
//!
//! let (records, summary) = decode_records(&text, &SDIF_V3);
//! assert_eq!(records.len(), 1);
//! assert_eq!(summary.count("Z0"), 1);
//! ```

pub mod codes;
pub mod date;
pub mod error;
pub mod field;
pub mod file;
pub mod line;
pub mod record;
pub mod time;
pub mod value;

pub use date::SwimDate;
pub use error::FormatError;
pub use field::{FieldSpec, FieldType};
pub use file::{decode_records, encode_records, ScanSummary};
pub use line::{LineReader, LineWriter};
pub use record::{
    Layout, Record, RecordDef, FILE_DESCRIPTION, FILE_TERMINATOR, INDIVIDUAL_EVENT,
    INDIVIDUAL_INFO, MEET, RELAY_EVENT, RELAY_NAME, SDIF_V3, TEAM_ID,
};
pub use time::{ClockTime, SwimTime, TimeCode};
pub use value::FieldValue;
