//! The record assembler: the full, correctly ordered record sequence for
//! one meet.
//!
//! The file's structural grammar is fixed: one file description, one meet
//! record, then every competing team as a team id record immediately
//! followed by that team's results, and a terminator. A result record is
//! attributed to a team purely by appearing after its team id record, so
//! a result must never be emitted outside its owning team's span. The
//! configured home team always comes first; the remaining teams follow in
//! the order they were first encountered in the input.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use regex::Regex;

use sdif_format::codes::{AttachCode, FileCode, MeetTypeCode, OrganizationCode};
use sdif_format::value::FieldValue;
use sdif_format::{
    Record, SwimDate, FILE_DESCRIPTION, FILE_TERMINATOR, INDIVIDUAL_EVENT, INDIVIDUAL_INFO, MEET,
    RELAY_EVENT, RELAY_NAME, TEAM_ID,
};

use crate::config::TeamInfo;
use crate::error::SdifError;
use crate::event::{EventKey, EventNumbers};
use crate::relay::{resolve_roster, RelayLeg};
use crate::result::{individual_results, relay_results, IndividualResult, RelayResult};
use crate::row::Row;
use crate::swimmer::{Swimmer, SwimmerTable};
use crate::team::{Team, TeamDirectory};

lazy_static! {
    static ref INDIVIDUAL_TOKEN: Regex = Regex::new(r"(?i)individual").unwrap();
}

/// Everything parsed out of one meet's exports.
#[derive(Debug)]
pub struct Meet {
    pub name:        String,
    pub individuals: Vec<IndividualResult>,
    pub relays:      Vec<RelayResult>,
}

impl Meet {
    pub fn from_sheets(
        name: &str,
        individual: &[Row],
        relay: Option<&[Row]>,
    ) -> Result<Meet, SdifError> {
        Ok(Meet {
            name:        name.to_string(),
            individuals: individual_results(individual)?,
            relays:      relay.map(relay_results).transpose()?.unwrap_or_default(),
        })
    }

    /// The teams of the meet, in the order first encountered among the
    /// individual results. Relay rows do not introduce teams: a relay for
    /// a team with no individual results references a team the file
    /// cannot describe, which the assembler treats as an error.
    pub fn team_directory(&self) -> TeamDirectory {
        let mut directory = TeamDirectory::new();
        for result in &self.individuals {
            directory.insert(result.team.clone());
        }
        directory
    }
}

/// The output file name: the input's base name with any `individual`
/// token removed (`results` when nothing remains) and the format's
/// extension.
pub fn output_path(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("");
    let base = INDIVIDUAL_TOKEN.replace_all(stem, "").to_string();
    let base = if base.is_empty() {
        "results".to_string()
    } else {
        base
    };
    input.with_file_name(format!("{}.sd3", base))
}

/// Assembles the record sequence for a meet against one configured home
/// team.
pub struct Assembler<'a> {
    config:    &'a TeamInfo,
    file_date: SwimDate,
}

impl<'a> Assembler<'a> {
    pub fn new(config: &'a TeamInfo, file_date: SwimDate) -> Assembler<'a> {
        Assembler { config, file_date }
    }

    /// Produce the full record sequence. Any result row owned by a team
    /// missing from `directory` is a hard error: dropping it would
    /// silently corrupt the meet's totals.
    pub fn assemble(
        &self,
        meet: &Meet,
        directory: &TeamDirectory,
    ) -> Result<Vec<Record>, SdifError> {
        for result in &meet.individuals {
            if directory.get(&result.team.club).is_none() {
                return Err(SdifError::UnknownTeamReference(result.team.name.clone()));
            }
        }
        for relay in &meet.relays {
            if directory.get(&relay.team.club).is_none() {
                return Err(SdifError::UnknownTeamReference(relay.team.name.clone()));
            }
        }

        let keys: Vec<EventKey> = meet
            .individuals
            .iter()
            .map(IndividualResult::key)
            .chain(meet.relays.iter().map(RelayResult::key))
            .collect();
        let numbers = EventNumbers::assign(&keys);
        let table = SwimmerTable::build(meet.individuals.iter().map(|r| &r.swimmer));

        let mut records = Vec::new();
        records.push(self.file_description());
        records.push(self.meet_record(meet));

        records.push(self.home_team_id());
        self.push_team_records(&mut records, meet, &numbers, &table, &self.config.team_code);

        for team in directory.iter() {
            if team.club == self.config.team_code {
                continue;
            }
            records.push(self.opponent_team_id(team));
            self.push_team_records(&mut records, meet, &numbers, &table, &team.club);
        }

        records.push(self.terminator());
        Ok(records)
    }

    /// One team's span: individual results in ascending swimmer-name
    /// order, each swimmer's info record following their first result,
    /// then the team's relays with their rosters in leg order.
    fn push_team_records(
        &self,
        records: &mut Vec<Record>,
        meet: &Meet,
        numbers: &EventNumbers,
        table: &SwimmerTable,
        club: &str,
    ) {
        let mut individuals: Vec<&IndividualResult> = meet
            .individuals
            .iter()
            .filter(|r| r.team.club == club)
            .collect();
        individuals.sort_by(|a, b| a.swimmer.name.cmp(&b.swimmer.name));

        let mut described: HashSet<&str> = HashSet::new();
        for result in individuals {
            records.push(self.individual_event(result, numbers.get(&result.key())));
            if described.insert(&result.swimmer.uss_number_new) {
                records.push(self.individual_info(&result.swimmer));
            }
        }

        for relay in meet.relays.iter().filter(|r| r.team.club == club) {
            let number = numbers.get(&relay.key());
            records.push(self.relay_event(relay, number));
            for leg in resolve_roster(relay, table) {
                records.push(self.relay_name(relay, &leg));
            }
        }
    }

    fn file_description(&self) -> Record {
        let mut a0 = Record::new(&FILE_DESCRIPTION);
        a0.set("organization", OrganizationCode::Uss);
        a0.set("version", "V3");
        a0.set("file_code", FileCode::MeetResults);
        a0.set("software_name", env!("CARGO_PKG_NAME"));
        a0.set("software_version", env!("CARGO_PKG_VERSION"));
        a0.set("contact_name", self.config.contact_name.as_str());
        a0.set("contact_phone", self.config.contact_phone.as_str());
        a0.set("file_creation", self.file_date);
        a0
    }

    fn meet_record(&self, meet: &Meet) -> Record {
        let dates: Vec<SwimDate> = meet
            .individuals
            .iter()
            .map(|r| r.swim_date)
            .chain(meet.relays.iter().map(|r| r.swim_date))
            .collect();
        let start = dates.iter().min().copied().unwrap_or(self.file_date);
        let end = dates.iter().max().copied().unwrap_or(self.file_date);

        let mut b1 = Record::new(&MEET);
        b1.set("organization", OrganizationCode::Uss);
        b1.set("name", meet.name.as_str());
        b1.set("address_1", self.config.address_line_1.as_str());
        b1.set("address_2", self.config.address_line_2.clone());
        b1.set("city", self.config.city.as_str());
        b1.set("state", self.config.state.as_str());
        b1.set("postal_code", self.config.postal_code.as_str());
        b1.set("country", "USA");
        b1.set("meet_type", MeetTypeCode::Dual);
        b1.set("start", start);
        b1.set("end", end);
        b1.set("altitude_ft", 0i64);
        b1.set("course", self.config.course_code());
        b1
    }

    fn home_team_id(&self) -> Record {
        let mut c1 = Record::new(&TEAM_ID);
        c1.set("organization", OrganizationCode::Uss);
        c1.set("team_code", self.config.team_code_full());
        c1.set("name", self.config.full_name.as_str());
        c1.set("abbreviation", self.config.abbreviation.as_str());
        c1.set("address_1", self.config.address_line_1.as_str());
        c1.set("address_2", self.config.address_line_2.clone());
        c1.set("city", self.config.city.as_str());
        c1.set("state", self.config.state.as_str());
        c1.set("postal_code", self.config.postal_code.as_str());
        c1.set("country", "USA");
        c1.set("team_code5", non_empty(&self.config.club_code5()));
        c1
    }

    /// Opposing teams are known only by their code; everything else stays
    /// blank apart from the state the league swims in.
    fn opponent_team_id(&self, team: &Team) -> Record {
        let mut c1 = Record::new(&TEAM_ID);
        c1.set("organization", OrganizationCode::Uss);
        c1.set("team_code", team.team_code());
        c1.set("name", team.name.as_str());
        c1.set("state", self.config.state.as_str());
        c1.set("country", "USA");
        c1.set("team_code5", non_empty(&team.code5()));
        c1
    }

    fn individual_event(&self, result: &IndividualResult, number: Option<u32>) -> Record {
        let mut d0 = Record::new(&INDIVIDUAL_EVENT);
        d0.set("organization", OrganizationCode::Uss);
        d0.set("name", result.swimmer.name.as_str());
        d0.set("ussn", result.swimmer.uss_number.as_str());
        d0.set("attached", AttachCode::Attached);
        d0.set("citizen", "USA");
        d0.set("birthdate", result.swimmer.birthdate);
        d0.set("age_or_class", result.swimmer.age_at_swim.as_str());
        d0.set("sex", result.swimmer.sex);
        d0.set("event_sex", result.event.sex);
        d0.set("event_distance", result.event.distance);
        d0.set("stroke", result.event.stroke);
        d0.set("event_number", number);
        d0.set("event_age", result.event.age_band.as_str());
        d0.set("date_of_swim", result.swim_date);
        d0.set("finals_time", result.finals);
        d0.set("finals_course", self.config.course_code());
        d0.set("finals_place", result.place);
        d0.set("points", decimal(result.points));
        d0
    }

    fn individual_info(&self, swimmer: &Swimmer) -> Record {
        let mut d3 = Record::new(&INDIVIDUAL_INFO);
        d3.set("uss_number", swimmer.uss_number_new.as_str());
        d3.set("summer_league", self.config.summer_league);
        d3
    }

    fn relay_event(&self, relay: &RelayResult, number: Option<u32>) -> Record {
        let mut e0 = Record::new(&RELAY_EVENT);
        e0.set("organization", OrganizationCode::Uss);
        e0.set("relay_squad", relay.squad.as_str());
        e0.set("team_code", relay.team.team_code());
        e0.set("event_sex", relay.event.sex);
        e0.set("distance", relay.event.distance);
        e0.set("stroke", relay.event.stroke);
        e0.set("event_number", number);
        e0.set("event_age", relay.event.age_band.as_str());
        e0.set("swim_date", relay.swim_date);
        e0.set("finals_time", relay.finals);
        e0.set("finals_course", self.config.course_code());
        e0.set("finals_place", relay.place);
        e0.set("points", decimal(relay.points));
        e0
    }

    fn relay_name(&self, relay: &RelayResult, leg: &RelayLeg) -> Record {
        let mut f0 = Record::new(&RELAY_NAME);
        f0.set("organization", OrganizationCode::Uss);
        f0.set("team_code", relay.team.team_code());
        f0.set("relay_squad", relay.squad.as_str());
        f0.set("swimmer_name", leg.name.as_str());
        f0.set("finals_order", leg.order);
        if let Some(swimmer) = &leg.swimmer {
            f0.set("uss_number", swimmer.uss_number.as_str());
            f0.set("citizen", "USA");
            f0.set("birthdate", swimmer.birthdate);
            f0.set("age_or_class", swimmer.age_at_swim.as_str());
            f0.set("sex", swimmer.sex);
            f0.set("course", self.config.course_code());
            f0.set("uss_number_new", swimmer.uss_number_new.as_str());
        }
        f0
    }

    fn terminator(&self) -> Record {
        let mut z0 = Record::new(&FILE_TERMINATOR);
        z0.set("organization", OrganizationCode::Uss);
        z0.set("file_code", FileCode::MeetResults);
        z0
    }
}

fn decimal(hundredths: Option<i64>) -> FieldValue {
    match hundredths {
        Some(value) => FieldValue::Decimal(value),
        None => FieldValue::Empty,
    }
}

fn non_empty(text: &str) -> FieldValue {
    if text.is_empty() {
        FieldValue::Empty
    } else {
        FieldValue::Str(text.to_string())
    }
}
