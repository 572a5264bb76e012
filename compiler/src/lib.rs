//! sdif-compiler
//!
//! This crate turns swim-meet results rows into the ordered SDIF record
//! sequence of a `.sd3` meet-results file:
//!  1) The ingestion boundary (`row`): rows as column-name → raw-value
//!     mappings, supplied by an external tabular exporter,
//!  2) Event classification and stable event numbering (`event`),
//!  3) Team and swimmer extraction (`team`, `swimmer`, `result`),
//!  4) Relay roster resolution (`relay`),
//!  5) The record assembler (`assembler`), which enforces the file's
//!     structural grammar,
//!  6) Error types (`SdifError`) and the home-team configuration
//!     (`config`).

pub mod assembler;
pub mod config;
pub mod error;
pub mod event;
pub mod relay;
pub mod result;
pub mod row;
pub mod swimmer;
pub mod team;

pub use assembler::{output_path, Assembler, Meet};
pub use config::TeamInfo;
pub use error::SdifError;
pub use event::{age_band, classify, EventInfo, EventKey, EventKind, EventNumbers};
pub use relay::{resolve_roster, RelayLeg};
pub use result::{IndividualResult, RelayResult};
pub use row::{sheet_from_str, Row, Sheet};
pub use swimmer::{Swimmer, SwimmerTable};
pub use team::{Team, TeamDirectory};

use sdif_format::{Record, SwimDate};

/// Compile one meet's sheets into its full record sequence. The team
/// directory is derived from the individual results; `file_date` stamps
/// the file description record.
pub fn compile_rows(
    meet_name: &str,
    individual: &[Row],
    relay: Option<&[Row]>,
    config: &TeamInfo,
    file_date: SwimDate,
) -> Result<Vec<Record>, SdifError> {
    let meet = Meet::from_sheets(meet_name, individual, relay)?;
    let directory = meet.team_directory();
    Assembler::new(config, file_date).assemble(&meet, &directory)
}
