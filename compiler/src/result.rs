//! Typed result rows, built from the ingestion boundary.
//!
//! Per-row classification failures (event label, dates, identities) abort
//! the whole conversion: a malformed row means the input file is not the
//! export this compiler understands, and event numbering needs every row
//! classified before any number is stable.

use sdif_format::{SwimDate, SwimTime};

use crate::error::SdifError;
use crate::event::{classify, EventInfo, EventKey, EventKind};
use crate::row::{columns, Row};
use crate::swimmer::{derive_birthdate, split_athlete_cell, truncate_uss_numbers, Swimmer};
use crate::team::Team;

/// One individual swim.
#[derive(Debug, Clone)]
pub struct IndividualResult {
    pub event:     EventInfo,
    pub swimmer:   Swimmer,
    pub team:      Team,
    pub swim_date: SwimDate,
    pub finals:    SwimTime,
    pub place:     Option<i64>,
    /// Points scored, in hundredths.
    pub points:    Option<i64>,
}

impl IndividualResult {
    pub fn key(&self) -> EventKey {
        self.event.key(EventKind::Individual)
    }
}

/// One relay swim, roster names still unresolved.
#[derive(Debug, Clone)]
pub struct RelayResult {
    pub event:     EventInfo,
    pub team:      Team,
    /// Squad letter within the team, `A`, `B`, ...
    pub squad:     String,
    /// Roster display names in swim order, at most four.
    pub roster:    Vec<String>,
    pub swim_date: SwimDate,
    pub finals:    SwimTime,
    pub place:     Option<i64>,
    /// Points scored, in hundredths.
    pub points:    Option<i64>,
}

impl RelayResult {
    pub fn key(&self) -> EventKey {
        self.event.key(EventKind::Relay)
    }
}

fn swim_date(row: &Row) -> Result<SwimDate, SdifError> {
    let cell = row
        .text_either(columns::DATE, columns::DATE_ALT)
        .ok_or(SdifError::MissingColumn(columns::DATE))?;
    SwimDate::parse(&cell).map_err(SdifError::from)
}

fn finals_time(row: &Row) -> Result<SwimTime, SdifError> {
    SwimTime::from_raw(row.text(columns::FINALS).as_deref()).map_err(SdifError::from)
}

fn place(row: &Row) -> Option<i64> {
    row.number(columns::FINALS_POS).map(|p| p as i64)
}

fn points(row: &Row) -> Option<i64> {
    row.number_either(columns::POINTS, columns::POINTS_ALT)
        .map(|p| (p * 100.0).round() as i64)
}

/// Build the individual results from the individual sheet.
pub fn individual_results(rows: &[Row]) -> Result<Vec<IndividualResult>, SdifError> {
    let mut results = Vec::with_capacity(rows.len());
    for row in rows {
        let event = classify(&row.require_text(columns::EVENT)?)?;
        let team = Team::from_lsc_team(&row.require_text(columns::LSC_TEAM)?)?;
        let date = swim_date(row)?;

        let (name, raw_number) = split_athlete_cell(&row.require_text(columns::ATHLETE_NAME)?)?;
        let (uss_number_new, uss_number) = truncate_uss_numbers(&raw_number);

        let ages = row.require_text(columns::EVENT_AGE_CURRENT)?;
        let age_at_swim = ages.split('\n').next().unwrap_or("").trim().to_string();
        let birthdate = derive_birthdate(&uss_number, date, &age_at_swim)?;

        results.push(IndividualResult {
            swimmer: Swimmer {
                name,
                uss_number,
                uss_number_new,
                birthdate,
                age_at_swim,
                sex: event.sex.swimmer_sex(),
                club: team.club.clone(),
            },
            event,
            team,
            swim_date: date,
            finals: finals_time(row)?,
            place: place(row),
            points: points(row),
        });
    }
    Ok(results)
}

/// Split the relay cell into the squad letter (last character of the
/// first line) and the roster names (remaining lines, `»` markers
/// dropped, last four kept).
pub fn split_relay_cell(cell: &str) -> Result<(String, Vec<String>), SdifError> {
    let mut lines = cell.lines();
    let squad_line = lines.next().unwrap_or("").trim();
    let squad = squad_line
        .chars()
        .next_back()
        .ok_or_else(|| SdifError::MalformedRow {
            column: columns::RELAY_TEAM,
            value:  cell.to_string(),
            reason: "expected a squad line ending in the squad letter".to_string(),
        })?;

    let names: Vec<String> = lines
        .map(|line| line.replace(" »", "").trim().to_string())
        .filter(|line| !line.is_empty())
        .collect();
    let roster = names
        .iter()
        .skip(names.len().saturating_sub(4))
        .cloned()
        .collect();
    Ok((squad.to_string(), roster))
}

/// Build the relay results from the relay sheet.
pub fn relay_results(rows: &[Row]) -> Result<Vec<RelayResult>, SdifError> {
    let mut results = Vec::with_capacity(rows.len());
    for row in rows {
        let event = classify(&row.require_text(columns::EVENT)?)?;
        let team = Team::from_lsc_team(&row.require_text(columns::LSC_TEAM)?)?;
        let (squad, roster) = split_relay_cell(&row.require_text(columns::RELAY_TEAM)?)?;

        results.push(RelayResult {
            event,
            team,
            squad,
            roster,
            swim_date: swim_date(row)?,
            finals: finals_time(row)?,
            place: place(row),
            points: points(row),
        });
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::sheet_from_str;
    use sdif_format::codes::{SexCode, StrokeCode};
    use sdif_format::TimeCode;

    fn individual_sheet() -> Vec<Row> {
        sheet_from_str(
            r#"[{
                "Event": "Female (11-12) \n50 Fly",
                "Athlete Name": "Smith, Jane A\n061712JANASMIT",
                "EventAge\nCurrent": "11\n12",
                "LSC-Team": "OD-WWST",
                "Finals": "31.40",
                "Finals Pos": 2,
                "Pts": 13.5,
                "Date of\nSport": "6/17/2023"
            }]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_individual_row() {
        let results = individual_results(&individual_sheet()).unwrap();
        let result = &results[0];

        assert_eq!(result.event.stroke, StrokeCode::Butterfly);
        assert_eq!(result.event.age_band, "1112");
        assert_eq!(result.swimmer.name, "Smith, Jane A");
        assert_eq!(result.swimmer.uss_number, "061712JANASM");
        assert_eq!(result.swimmer.sex, Some(SexCode::Female));
        assert_eq!(result.swimmer.birthdate, SwimDate::new(2012, 6, 17).unwrap());
        assert_eq!(result.team.club, "WWST");
        assert_eq!(result.finals, SwimTime::decode("31.40").unwrap());
        assert_eq!(result.place, Some(2));
        assert_eq!(result.points, Some(1350));
    }

    #[test]
    fn test_blank_finals_is_no_swim() {
        let sheet = sheet_from_str(
            r#"[{
                "Event": "Male (8 & Under) \n25 Free",
                "Athlete Name": "Doe, Tim\n010115TIMDOE",
                "EventAge\nCurrent": "8\n8",
                "LSC-Team": "OD-DOLP",
                "Finals": null,
                "Date": "2023-06-17"
            }]"#,
        )
        .unwrap();
        let results = individual_results(&sheet).unwrap();
        assert_eq!(results[0].finals, SwimTime::Code(TimeCode::NoSwim));
        assert_eq!(results[0].place, None);
        assert_eq!(results[0].points, None);
    }

    #[test]
    fn test_bad_event_label_aborts() {
        let sheet = sheet_from_str(
            r#"[{
                "Event": "50 Fly for girls",
                "Athlete Name": "Smith, Jane A\n061712JANASMIT",
                "EventAge\nCurrent": "11\n12",
                "LSC-Team": "OD-WWST",
                "Date": "2023-06-17"
            }]"#,
        )
        .unwrap();
        assert!(matches!(
            individual_results(&sheet),
            Err(SdifError::UnparsableEvent(_))
        ));
    }

    #[test]
    fn test_relay_cell_split() {
        let (squad, roster) =
            split_relay_cell("WWST A\nSmith, Jane A »\nJones, Amy\nDoe, Sal »\nRoe, Kim").unwrap();
        assert_eq!(squad, "A");
        assert_eq!(
            roster,
            vec!["Smith, Jane A", "Jones, Amy", "Doe, Sal", "Roe, Kim"]
        );
    }

    #[test]
    fn test_relay_cell_keeps_last_four_names() {
        let (_, roster) =
            split_relay_cell("WWST B\nAlt, One\nSmith, Jane A\nJones, Amy\nDoe, Sal\nRoe, Kim")
                .unwrap();
        assert_eq!(roster.len(), 4);
        assert_eq!(roster[0], "Smith, Jane A");
    }

    #[test]
    fn test_relay_row() {
        let sheet = sheet_from_str(
            r#"[{
                "Event": "Mixed (15-18) \n200 Free Relay",
                "Relay\nTeam": "WWST A\nSmith, Jane A\nJones, Amy\nDoe, Sal\nRoe, Kim",
                "LSC-Team": "OD-WWST",
                "Finals": "1:58.32",
                "Finals Pos": 1,
                "Points": 8,
                "Date": "2023-06-17"
            }]"#,
        )
        .unwrap();
        let results = relay_results(&sheet).unwrap();
        let relay = &results[0];
        assert_eq!(relay.event.stroke, StrokeCode::FreestyleRelay);
        assert_eq!(relay.squad, "A");
        assert_eq!(relay.roster.len(), 4);
        assert_eq!(relay.points, Some(800));
        assert_eq!(relay.key().kind, EventKind::Relay);
    }
}
