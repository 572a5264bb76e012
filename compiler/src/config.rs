//! The operating team's identity and the knobs that used to be buried as
//! constants. Loaded once from `swim_team_info.json` and passed by value
//! into the assembler, so tests can run several simulated teams side by
//! side.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use sdif_format::codes::CourseCode;

use crate::error::SdifError;

pub const TEAM_INFO_FILE: &str = "swim_team_info.json";

/// The configured home team.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct TeamInfo {
    pub full_name:            String,
    pub abbreviation:         String,
    pub local_swim_committee: String,
    /// Club code without the LSC prefix, at most 5 characters.
    pub team_code:            String,
    pub address_line_1:       String,
    pub address_line_2:       Option<String>,
    pub city:                 String,
    pub state:                String,
    pub postal_code:          String,
    pub contact_name:         String,
    pub contact_phone:        String,
    /// Course the meet's times were swum in.
    pub course:               String,
    pub summer_league:        bool,
}

impl Default for TeamInfo {
    fn default() -> TeamInfo {
        TeamInfo {
            full_name:            "An ODSL Swim Team".to_string(),
            abbreviation:         "Swimmers".to_string(),
            local_swim_committee: "OD".to_string(),
            team_code:            "XXX".to_string(),
            address_line_1:       "1 Main Street".to_string(),
            address_line_2:       None,
            city:                 "Ashburn".to_string(),
            state:                "VA".to_string(),
            postal_code:          "20148".to_string(),
            contact_name:         "Meet Manager".to_string(),
            contact_phone:        "+15555551212".to_string(),
            course:               "S".to_string(),
            summer_league:        true,
        }
    }
}

/// The on-disk file nests the team under a `swim_team` key.
#[derive(Debug, Deserialize)]
struct TeamInfoFile {
    swim_team: TeamInfo,
}

impl TeamInfo {
    /// Load from a team-info file, or fall back to the built-in default
    /// when the file does not exist.
    pub fn load(path: &Path) -> Result<TeamInfo, SdifError> {
        if !path.exists() {
            return Ok(TeamInfo::default());
        }
        let text = fs::read_to_string(path)?;
        let file: TeamInfoFile = serde_json::from_str(&text)?;
        Ok(file.swim_team)
    }

    /// First four characters of the club code.
    pub fn club_code4(&self) -> String {
        self.team_code.chars().take(4).collect()
    }

    /// Overflow fifth character, empty for 4-character codes.
    pub fn club_code5(&self) -> String {
        self.team_code.chars().skip(4).collect()
    }

    /// The 6-character team code: LSC then the 4-character club code.
    pub fn team_code_full(&self) -> String {
        format!("{}{}", self.local_swim_committee, self.club_code4())
    }

    pub fn course_code(&self) -> CourseCode {
        CourseCode::parse(&self.course).unwrap_or(CourseCode::ShortMeters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_team() {
        let team = TeamInfo::default();
        assert_eq!(team.team_code_full(), "ODXXX");
        assert_eq!(team.course_code(), CourseCode::ShortMeters);
        assert!(team.summer_league);
    }

    #[test]
    fn test_club_code_split() {
        let team = TeamInfo {
            team_code: "WWSTA".to_string(),
            ..TeamInfo::default()
        };
        assert_eq!(team.club_code4(), "WWST");
        assert_eq!(team.club_code5(), "A");
        assert_eq!(team.team_code_full(), "ODWWST");
    }

    #[test]
    fn test_file_shape() {
        let file: TeamInfoFile = serde_json::from_str(
            r#"{"swim_team": {"full_name": "Westwood Waves", "team_code": "WWST"}}"#,
        )
        .unwrap();
        assert_eq!(file.swim_team.full_name, "Westwood Waves");
        assert_eq!(file.swim_team.team_code, "WWST");
        // unlisted keys keep their defaults
        assert_eq!(file.swim_team.local_swim_committee, "OD");
    }
}
