//! sdif
//!
//! This crate provides the batteries-included surface for working with
//! SDIF (`.sd3`) swim-meet files:
//!
//! - compile results rows into an encoded meet-results file
//! - scan an existing file into a record-type frequency table
//!
//! The pieces live in `sdif-format` (field/record/file codecs) and
//! `sdif-compiler` (classification, numbering, assembly) and are
//! re-exported here.

use std::fs;
use std::path::Path;

pub use sdif_compiler::{
    compile_rows, output_path, sheet_from_str, Assembler, Meet, Row, SdifError, Sheet, TeamInfo,
};
pub use sdif_format::{
    decode_records, encode_records, FieldValue, FormatError, Record, ScanSummary, SwimDate,
    SwimTime, SDIF_V3,
};

pub mod compiler {
    pub use sdif_compiler::*;
}

pub mod format {
    pub use sdif_format::*;
}

/// Compile one meet's sheets (as JSON arrays of row objects) straight to
/// the encoded file text. Nothing is written anywhere: encode failures
/// surface before any file exists.
pub fn compile_to_text(
    meet_name: &str,
    individual_json: &str,
    relay_json: Option<&str>,
    config: &TeamInfo,
    file_date: SwimDate,
) -> Result<String, SdifError> {
    let individual = sheet_from_str(individual_json)?;
    let relay = relay_json.map(sheet_from_str).transpose()?;
    let records = compile_rows(meet_name, &individual, relay.as_deref(), config, file_date)?;
    Ok(encode_records(&records)?)
}

/// Best-effort scan of an existing `.sd3` file: how many records of each
/// type it holds, tolerating unparseable lines.
pub fn scan_file(path: &Path) -> Result<ScanSummary, SdifError> {
    let text = fs::read_to_string(path)?;
    let (_, summary) = decode_records(&text, &SDIF_V3);
    Ok(summary)
}
