use sdif_format::FormatError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SdifError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Ingestion error: {0}")]
    Ingest(#[from] serde_json::Error),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("Could not classify event label {0:?}")]
    UnparsableEvent(String),

    #[error("Could not parse event age {raw:?} into a 4 character age code (got {code:?})")]
    UnparsableAgeClause { raw: String, code: String },

    #[error("Result row references unknown team code {0:?}")]
    UnknownTeamReference(String),

    #[error("Results row is missing column {0:?}")]
    MissingColumn(&'static str),

    #[error("Malformed value {value:?} in column {column:?}: {reason}")]
    MalformedRow {
        column: &'static str,
        value:  String,
        reason: String,
    },
}
