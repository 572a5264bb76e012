//! The tabular ingestion boundary.
//!
//! The compiler never reads spreadsheets itself; an external exporter
//! supplies each results row as a mapping from column name to raw value
//! (string, number, or null). The JSON object form captures exactly that
//! contract, so a `Sheet` is loaded from a JSON array of objects.

use serde_json::{Map, Value};

use crate::error::SdifError;

/// Column headers as they appear in the results export. Several cells
/// embed literal newlines; those are part of the header.
pub mod columns {
    pub const EVENT: &str = "Event";
    pub const ATHLETE_NAME: &str = "Athlete Name";
    pub const EVENT_AGE_CURRENT: &str = "EventAge\nCurrent";
    pub const LSC_TEAM: &str = "LSC-Team";
    pub const FINALS: &str = "Finals";
    pub const FINALS_POS: &str = "Finals Pos";
    pub const POINTS: &str = "Pts";
    pub const POINTS_ALT: &str = "Points";
    pub const DATE: &str = "Date of\nSport";
    pub const DATE_ALT: &str = "Date";
    pub const RELAY_TEAM: &str = "Relay\nTeam";
}

/// One results row: column name to raw cell value.
#[derive(Debug, Clone)]
pub struct Row {
    cells: Map<String, Value>,
}

pub type Sheet = Vec<Row>;

impl Row {
    pub fn new(cells: Map<String, Value>) -> Row {
        Row { cells }
    }

    /// The cell as text, if present and non-empty. Numbers are rendered;
    /// null and blank cells are `None`.
    pub fn text(&self, column: &str) -> Option<String> {
        match self.cells.get(column) {
            Some(Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        }
    }

    /// The cell as text, or a `MissingColumn` error.
    pub fn require_text(&self, column: &'static str) -> Result<String, SdifError> {
        self.text(column).ok_or(SdifError::MissingColumn(column))
    }

    /// The cell as a number, accepting numeric strings too.
    pub fn number(&self, column: &str) -> Option<f64> {
        match self.cells.get(column) {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
    }

    /// First present cell among `column` and `fallback`; exports differ
    /// on a few header spellings.
    pub fn text_either(&self, column: &str, fallback: &str) -> Option<String> {
        self.text(column).or_else(|| self.text(fallback))
    }

    pub fn number_either(&self, column: &str, fallback: &str) -> Option<f64> {
        self.number(column).or_else(|| self.number(fallback))
    }
}

/// Load a sheet from its JSON form: an array of row objects.
pub fn sheet_from_str(json: &str) -> Result<Sheet, SdifError> {
    let value: Value = serde_json::from_str(json)?;
    let rows = match value {
        Value::Array(items) => items,
        other => {
            return Err(SdifError::MalformedRow {
                column: "(sheet)",
                value:  summarize(&other),
                reason: "expected a JSON array of row objects".to_string(),
            })
        }
    };
    rows.into_iter()
        .map(|item| match item {
            Value::Object(cells) => Ok(Row::new(cells)),
            other => Err(SdifError::MalformedRow {
                column: "(sheet)",
                value:  summarize(&other),
                reason: "expected a JSON object per row".to_string(),
            }),
        })
        .collect()
}

fn summarize(value: &Value) -> String {
    let text = value.to_string();
    if text.chars().count() > 40 {
        let head: String = text.chars().take(40).collect();
        format!("{}…", head)
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_loading_and_cell_access() {
        let sheet = sheet_from_str(
            r#"[{"Event": "Girls", "Finals Pos": 2, "Pts": 13.5, "Finals": null}]"#,
        )
        .unwrap();
        let row = &sheet[0];
        assert_eq!(row.text(columns::EVENT).as_deref(), Some("Girls"));
        assert_eq!(row.text(columns::FINALS_POS).as_deref(), Some("2"));
        assert_eq!(row.number(columns::POINTS), Some(13.5));
        assert_eq!(row.text(columns::FINALS), None);
    }

    #[test]
    fn test_header_fallbacks() {
        let sheet = sheet_from_str(r#"[{"Points": "4", "Date": "6/17/2023"}]"#).unwrap();
        let row = &sheet[0];
        assert_eq!(row.number_either(columns::POINTS, columns::POINTS_ALT), Some(4.0));
        assert_eq!(
            row.text_either(columns::DATE, columns::DATE_ALT).as_deref(),
            Some("6/17/2023")
        );
    }

    #[test]
    fn test_rejects_non_tabular_json() {
        assert!(sheet_from_str(r#"{"not": "an array"}"#).is_err());
        assert!(sheet_from_str(r#"[42]"#).is_err());
    }

    #[test]
    fn test_missing_column_error_names_it() {
        let sheet = sheet_from_str(r#"[{}]"#).unwrap();
        let err = sheet[0].require_text(columns::EVENT).unwrap_err();
        assert!(matches!(err, SdifError::MissingColumn("Event")));
    }
}
