//! Swimmer identities and the deduplicated table relay rosters are
//! resolved against.

use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;
use regex::Regex;

use sdif_format::codes::SexCode;
use sdif_format::SwimDate;

use crate::error::SdifError;
use crate::row::columns;

lazy_static! {
    // Six leading digits of a legacy USS number that fit a MMDDYY birthdate
    static ref BIRTHDATE_MMDDYY: Regex =
        Regex::new(r"^(0[1-9]|1[0-2])(0[1-9]|[12][0-9]|3[01])(\d\d)").unwrap();
}

/// The newer identity number is at most 14 characters; the legacy number
/// is always its first 12.
pub const USS_NUMBER_NEW_LEN: usize = 14;
pub const USS_NUMBER_LEN: usize = 12;

/// One swimmer as derivable from the results export. Identity is unique
/// per (name, club); the source data has no richer join key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Swimmer {
    /// Display name, `"Last, First M"`.
    pub name:           String,
    /// Legacy 12-character identity number.
    pub uss_number:     String,
    /// Newer identity number, at most 14 characters.
    pub uss_number_new: String,
    pub birthdate:      SwimDate,
    /// Age on the day of the swim, as printed in the export.
    pub age_at_swim:    String,
    pub sex:            Option<SexCode>,
    /// Club code of the team the swimmer competed for.
    pub club:           String,
}

/// Split the export's athlete cell (`"Last, First M\n<USS#>"`) into the
/// display name and the raw identity number.
pub fn split_athlete_cell(cell: &str) -> Result<(String, String), SdifError> {
    let (name, number) = cell.split_once('\n').ok_or_else(|| SdifError::MalformedRow {
        column: columns::ATHLETE_NAME,
        value:  cell.to_string(),
        reason: "expected \"<name>\\n<USS#>\"".to_string(),
    })?;
    Ok((name.trim().to_string(), number.trim().to_string()))
}

/// Truncate a raw identity number to the new 14-character form and derive
/// the legacy 12-character form from it.
pub fn truncate_uss_numbers(raw: &str) -> (String, String) {
    let newer: String = raw.chars().take(USS_NUMBER_NEW_LEN).collect();
    let legacy: String = newer.chars().take(USS_NUMBER_LEN).collect();
    (newer, legacy)
}

/// Derive a birthdate from the legacy identity number, whose first six
/// digits are the swimmer's MMDDYY birthdate when the number is well
/// formed. Otherwise fall back to January 1 of the year implied by the
/// swimmer's age on the day of the swim.
pub fn derive_birthdate(
    uss_number: &str,
    swim_date: SwimDate,
    age_at_swim: &str,
) -> Result<SwimDate, SdifError> {
    if let Some(caps) = BIRTHDATE_MMDDYY.captures(uss_number) {
        let digits = format!("{}{}{}", &caps[1], &caps[2], &caps[3]);
        if let Some(date) = SwimDate::from_mmddyy(&digits) {
            return Ok(date);
        }
    }
    let age = age_at_swim
        .trim()
        .parse::<i32>()
        .map_err(|_| SdifError::MalformedRow {
            column: columns::EVENT_AGE_CURRENT,
            value:  age_at_swim.to_string(),
            reason: "expected a numeric age".to_string(),
        })?;
    SwimDate::new(swim_date.year() - age, 1, 1).ok_or(SdifError::MalformedRow {
        column: columns::EVENT_AGE_CURRENT,
        value:  age_at_swim.to_string(),
        reason: "age does not yield a valid birth year".to_string(),
    })
}

/// The distinct swimmers of a meet, keyed by (name, club).
///
/// When two distinct identity numbers collapse onto one key the first one
/// wins and the key is flagged ambiguous; the roster resolver reports the
/// flag when it matches such a name.
#[derive(Debug, Default)]
pub struct SwimmerTable {
    entries:   Vec<Swimmer>,
    index:     HashMap<(String, String), usize>,
    ambiguous: HashSet<(String, String)>,
}

impl SwimmerTable {
    pub fn build<'a, I>(swimmers: I) -> SwimmerTable
    where
        I: IntoIterator<Item = &'a Swimmer>,
    {
        let mut table = SwimmerTable::default();
        for swimmer in swimmers {
            let key = (swimmer.name.clone(), swimmer.club.clone());
            match table.index.get(&key) {
                None => {
                    table.index.insert(key, table.entries.len());
                    table.entries.push(swimmer.clone());
                }
                Some(&i) => {
                    if table.entries[i].uss_number_new != swimmer.uss_number_new {
                        table.ambiguous.insert(key);
                    }
                }
            }
        }
        table
    }

    pub fn find(&self, name: &str, club: &str) -> Option<&Swimmer> {
        self.index
            .get(&(name.to_string(), club.to_string()))
            .map(|&i| &self.entries[i])
    }

    pub fn is_ambiguous(&self, name: &str, club: &str) -> bool {
        self.ambiguous
            .contains(&(name.to_string(), club.to_string()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_athlete_cell_split() {
        let (name, number) = split_athlete_cell("Smith, Jane A\n061712JANASMIT").unwrap();
        assert_eq!(name, "Smith, Jane A");
        assert_eq!(number, "061712JANASMIT");
        assert!(split_athlete_cell("Smith, Jane A").is_err());
    }

    #[test]
    fn test_uss_number_truncation() {
        let (newer, legacy) = truncate_uss_numbers("061712JANASMITHTOOLONG");
        assert_eq!(newer, "061712JANASMIT");
        assert_eq!(newer.len(), 14);
        assert_eq!(legacy, "061712JANASM");
        assert_eq!(legacy.len(), 12);
        // the legacy number is a left-truncation of the newer one
        assert!(newer.starts_with(&legacy));
    }

    #[test]
    fn test_birthdate_from_uss_number() {
        let swim = SwimDate::new(2023, 6, 17).unwrap();
        let date = derive_birthdate("061712JANASM", swim, "11").unwrap();
        assert_eq!(date, SwimDate::new(2012, 6, 17).unwrap());
    }

    #[test]
    fn test_birthdate_falls_back_to_age() {
        let swim = SwimDate::new(2023, 6, 17).unwrap();
        // "99" is not a valid month, so the number carries no birthdate
        let date = derive_birthdate("99XXXXJANASM", swim, "11").unwrap();
        assert_eq!(date, SwimDate::new(2012, 1, 1).unwrap());
        assert!(derive_birthdate("99XXXXJANASM", swim, "eleven").is_err());
    }

    fn swimmer(name: &str, club: &str, number: &str) -> Swimmer {
        Swimmer {
            name:           name.to_string(),
            uss_number:     number.chars().take(12).collect(),
            uss_number_new: number.to_string(),
            birthdate:      SwimDate::new(2012, 1, 1).unwrap(),
            age_at_swim:    "11".to_string(),
            sex:            Some(SexCode::Female),
            club:           club.to_string(),
        }
    }

    #[test]
    fn test_table_dedup_and_ambiguity() {
        let swimmers = vec![
            swimmer("Smith, Jane A", "WWST", "061712JANASMIT"),
            swimmer("Smith, Jane A", "WWST", "061712JANASMIT"),
            swimmer("Jones, Amy", "WWST", "010111AMYJONES"),
            // same name and club, different identity
            swimmer("Jones, Amy", "WWST", "020212AMYJONES"),
            swimmer("Jones, Amy", "DOLP", "010111AMYJONES"),
        ];
        let table = SwimmerTable::build(&swimmers);

        assert_eq!(table.len(), 3);
        assert!(!table.is_ambiguous("Smith, Jane A", "WWST"));
        assert!(table.is_ambiguous("Jones, Amy", "WWST"));
        assert!(!table.is_ambiguous("Jones, Amy", "DOLP"));
        // first match wins
        assert_eq!(
            table.find("Jones, Amy", "WWST").unwrap().uss_number_new,
            "010111AMYJONES"
        );
    }
}
