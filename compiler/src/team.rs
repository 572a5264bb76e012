//! Competing teams and the directory results are partitioned by.

use std::collections::HashMap;

use crate::error::SdifError;
use crate::row::columns;

/// One competing team, parsed from the export's `LSC-Team` cell
/// (`"OD-WWST"`: the two-letter regional code, a dash, the club code).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    /// Two-letter regional (LSC) code.
    pub lsc:  String,
    /// Club code without the LSC prefix, at most 5 characters.
    pub club: String,
    /// Display name, e.g. `OD-WWST`.
    pub name: String,
}

impl Team {
    pub fn from_lsc_team(cell: &str) -> Result<Team, SdifError> {
        let (lsc, club) = cell.trim().split_once('-').ok_or(SdifError::MalformedRow {
            column: columns::LSC_TEAM,
            value:  cell.to_string(),
            reason: "expected \"<LSC>-<club code>\"".to_string(),
        })?;
        Ok(Team {
            lsc:  lsc.to_string(),
            club: club.to_string(),
            name: cell.trim().to_string(),
        })
    }

    /// First four characters of the club code. The regional code never
    /// folds into this width; a fifth club character overflows into its
    /// own record field.
    pub fn code4(&self) -> String {
        self.club.chars().take(4).collect()
    }

    /// Overflow fifth character, empty for shorter codes.
    pub fn code5(&self) -> String {
        self.club.chars().skip(4).collect()
    }

    /// The 6-character team code: LSC then the 4-character club code.
    pub fn team_code(&self) -> String {
        format!("{}{}", self.lsc, self.code4())
    }
}

/// All teams seen in a meet, keyed by club code, in the order first
/// encountered in the input. That order is what the assembler emits
/// opposing teams in.
#[derive(Debug, Default)]
pub struct TeamDirectory {
    teams: Vec<Team>,
    index: HashMap<String, usize>,
}

impl TeamDirectory {
    pub fn new() -> TeamDirectory {
        TeamDirectory::default()
    }

    /// Record a team the first time its club code appears.
    pub fn insert(&mut self, team: Team) {
        if !self.index.contains_key(&team.club) {
            self.index.insert(team.club.clone(), self.teams.len());
            self.teams.push(team);
        }
    }

    pub fn get(&self, club: &str) -> Option<&Team> {
        self.index.get(club).map(|&i| &self.teams[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Team> {
        self.teams.iter()
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lsc_team_parsing() {
        let team = Team::from_lsc_team("OD-WWST").unwrap();
        assert_eq!(team.lsc, "OD");
        assert_eq!(team.club, "WWST");
        assert_eq!(team.team_code(), "ODWWST");
        assert_eq!(team.code5(), "");
    }

    #[test]
    fn test_five_character_club_code_splits() {
        let team = Team::from_lsc_team("OD-WWSTA").unwrap();
        assert_eq!(team.code4(), "WWST");
        assert_eq!(team.code5(), "A");
        assert_eq!(team.team_code(), "ODWWST");
    }

    #[test]
    fn test_rejects_undashed_cell() {
        assert!(Team::from_lsc_team("WWST").is_err());
    }

    #[test]
    fn test_directory_keeps_first_encounter_order() {
        let mut directory = TeamDirectory::new();
        for cell in ["OD-BBB", "OD-AAA", "OD-BBB", "OD-CCC"] {
            directory.insert(Team::from_lsc_team(cell).unwrap());
        }
        let clubs: Vec<&str> = directory.iter().map(|t| t.club.as_str()).collect();
        assert_eq!(clubs, vec!["BBB", "AAA", "CCC"]);
        assert!(directory.get("AAA").is_some());
        assert!(directory.get("ZZZ").is_none());
    }
}
