//! Event classification and numbering.
//!
//! Results exports carry the event as one free-text label like
//! `"Female (8 & Under) \n25 Fly"`: the sex the event is open to, the age
//! clause in parentheses, then distance and stroke on the second line.
//! Classification is a single structured-pattern match; a label that does
//! not fit the shape fails the whole conversion, because numbering needs
//! every row classified.

use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;

use sdif_format::codes::{EventSexCode, StrokeCode};

use crate::error::SdifError;

lazy_static! {
    static ref EVENT_LABEL: Regex = Regex::new(
        r"(Female|Male|Mixed) \((.*?)\) \n([0-9]+) (Free Relay|Free|Back|Breast|Fly|IM|MR)"
    )
    .unwrap();
}

/// Whether a result is an individual swim or a relay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Individual,
    Relay,
}

impl EventKind {
    pub fn code(&self) -> &'static str {
        match self {
            EventKind::Individual => "I",
            EventKind::Relay => "R",
        }
    }
}

/// Structured event metadata extracted from one label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventInfo {
    pub sex:      EventSexCode,
    /// 4-character age-band code, e.g. `UN08`, `1518`, `25OV`, `UNOV`.
    pub age_band: String,
    pub distance: u32,
    pub stroke:   StrokeCode,
}

impl EventInfo {
    pub fn key(&self, kind: EventKind) -> EventKey {
        EventKey {
            kind,
            stroke: self.stroke,
            age_band: self.age_band.clone(),
            sex: self.sex,
        }
    }
}

/// The identity an event number is assigned to: two rows with the same
/// key always share a number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EventKey {
    pub kind:     EventKind,
    pub stroke:   StrokeCode,
    pub age_band: String,
    pub sex:      EventSexCode,
}

/// Extract structured event metadata from a free-text label.
pub fn classify(label: &str) -> Result<EventInfo, SdifError> {
    let caps = EVENT_LABEL
        .captures(label)
        .ok_or_else(|| SdifError::UnparsableEvent(label.to_string()))?;

    let sex = match &caps[1] {
        "Male" => EventSexCode::Male,
        "Female" => EventSexCode::Female,
        _ => EventSexCode::Mixed,
    };
    let stroke = match &caps[4] {
        "Free" => StrokeCode::Freestyle,
        "Back" => StrokeCode::Backstroke,
        "Breast" => StrokeCode::Breaststroke,
        "Fly" => StrokeCode::Butterfly,
        "IM" => StrokeCode::IndividualMedley,
        "Free Relay" => StrokeCode::FreestyleRelay,
        _ => StrokeCode::MedleyRelay,
    };
    let distance = caps[3]
        .parse::<u32>()
        .map_err(|_| SdifError::UnparsableEvent(label.to_string()))?;
    let age_band = age_band(&caps[2])?;

    Ok(EventInfo {
        sex,
        age_band,
        distance,
        stroke,
    })
}

/// Transform an age clause into its 4-character age-band code:
/// `"8-10"` → `0810`, `"8 & Under"` → `UN08`, `"25 & Over"` → `25OV`,
/// no stated restriction → `UNOV`.
pub fn age_band(raw: &str) -> Result<String, SdifError> {
    let mut code = "UNOV".to_string();
    if raw.contains('-') {
        code = raw
            .split('-')
            .map(|age| format!("{:0>2}", age.trim()))
            .collect();
    } else if raw.contains('&') {
        let lowered = raw.to_lowercase();
        if lowered.contains("under") {
            let bound = raw.split_whitespace().next().unwrap_or("");
            code = format!("UN{:0>2}", bound);
        } else if lowered.contains("over") {
            let bound: String = raw
                .split_whitespace()
                .filter(|tok| tok.chars().all(|c| c.is_ascii_digit()))
                .collect();
            code = format!("{:0>2}OV", bound);
        }
    }
    if code.chars().count() != 4 {
        return Err(SdifError::UnparsableAgeClause {
            raw:  raw.to_string(),
            code,
        });
    }
    Ok(code)
}

/// The age band as the integer used for ordering: `UN` counts as `00`
/// and `OV` as `99`, so `UN08` orders as 8 and `25OV` as 2599.
fn age_band_ordinal(age_band: &str) -> u32 {
    age_band
        .replace("UN", "00")
        .replace("OV", "99")
        .parse::<u32>()
        .unwrap_or(9999)
}

/// Stable event numbers for one result set.
///
/// Numbers are assigned to the distinct keys present, ordered the way
/// meet programs order events; relay numbers continue after the last
/// individual number. Ties fall back to first-occurrence order so the
/// assignment is repeatable across runs on the same input.
#[derive(Debug, Default)]
pub struct EventNumbers {
    numbers: HashMap<EventKey, u32>,
}

impl EventNumbers {
    pub fn assign<'a, I>(keys: I) -> EventNumbers
    where
        I: IntoIterator<Item = &'a EventKey>,
    {
        let mut distinct: Vec<&EventKey> = Vec::new();
        for key in keys {
            if !distinct.contains(&key) {
                distinct.push(key);
            }
        }

        // Open free relays go last; individual events precede relays;
        // then stroke, age band, and sex (mixed before male before
        // female). The sort is stable, so insertion order breaks ties.
        distinct.sort_by_key(|key| {
            let open_free_relay =
                key.age_band == "UNOV" && key.stroke == StrokeCode::FreestyleRelay;
            (
                open_free_relay,
                key.kind == EventKind::Relay,
                key.stroke.rank(),
                age_band_ordinal(&key.age_band),
                std::cmp::Reverse(key.sex.rank()),
            )
        });

        let mut numbers = HashMap::new();
        for (i, key) in distinct.into_iter().enumerate() {
            numbers.insert(key.clone(), i as u32 + 1);
        }
        EventNumbers { numbers }
    }

    pub fn get(&self, key: &EventKey) -> Option<u32> {
        self.numbers.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_individual_label() {
        let info = classify("Female (8 & Under) \n25 Fly").unwrap();
        assert_eq!(
            info,
            EventInfo {
                sex:      EventSexCode::Female,
                age_band: "UN08".to_string(),
                distance: 25,
                stroke:   StrokeCode::Butterfly,
            }
        );
    }

    #[test]
    fn test_classify_relay_label() {
        let info = classify("Mixed (15-18) \n200 Free Relay").unwrap();
        assert_eq!(info.sex, EventSexCode::Mixed);
        assert_eq!(info.age_band, "1518");
        assert_eq!(info.stroke, StrokeCode::FreestyleRelay);
    }

    #[test]
    fn test_classify_rejects_other_shapes() {
        assert!(matches!(
            classify("100 Fly, Female, 8 and under"),
            Err(SdifError::UnparsableEvent(_))
        ));
    }

    #[test]
    fn test_age_band_shapes() {
        assert_eq!(age_band("8 & Under").unwrap(), "UN08");
        assert_eq!(age_band("15-18").unwrap(), "1518");
        assert_eq!(age_band("8-10").unwrap(), "0810");
        assert_eq!(age_band("25 & Over").unwrap(), "25OV");
        assert_eq!(age_band("Open").unwrap(), "UNOV");
    }

    #[test]
    fn test_age_band_must_be_four_characters() {
        assert!(matches!(
            age_band("8-10-12"),
            Err(SdifError::UnparsableAgeClause { .. })
        ));
        assert!(matches!(
            age_band("100 & Over"),
            Err(SdifError::UnparsableAgeClause { .. })
        ));
    }

    #[test]
    fn test_age_band_ordinal() {
        assert_eq!(age_band_ordinal("UN08"), 8);
        assert_eq!(age_band_ordinal("1518"), 1518);
        assert_eq!(age_band_ordinal("25OV"), 2599);
        assert_eq!(age_band_ordinal("UNOV"), 99);
    }

    fn key(kind: EventKind, stroke: StrokeCode, age: &str, sex: EventSexCode) -> EventKey {
        EventKey {
            kind,
            stroke,
            age_band: age.to_string(),
            sex,
        }
    }

    #[test]
    fn test_numbering_is_contiguous_and_shared() {
        let keys = vec![
            key(EventKind::Individual, StrokeCode::Butterfly, "1112", EventSexCode::Female),
            key(EventKind::Individual, StrokeCode::Freestyle, "1112", EventSexCode::Male),
            key(EventKind::Individual, StrokeCode::Butterfly, "1112", EventSexCode::Female),
        ];
        let numbers = EventNumbers::assign(&keys);
        assert_eq!(numbers.len(), 2);
        assert_eq!(numbers.get(&keys[0]), numbers.get(&keys[2]));
        let mut assigned: Vec<u32> = keys.iter().filter_map(|k| numbers.get(k)).collect();
        assigned.sort_unstable();
        assigned.dedup();
        assert_eq!(assigned, vec![1, 2]);
    }

    #[test]
    fn test_numbering_order() {
        let free_f = key(EventKind::Individual, StrokeCode::Freestyle, "0810", EventSexCode::Female);
        let free_m = key(EventKind::Individual, StrokeCode::Freestyle, "0810", EventSexCode::Male);
        let fly = key(EventKind::Individual, StrokeCode::Butterfly, "0810", EventSexCode::Male);
        let older_free = key(EventKind::Individual, StrokeCode::Freestyle, "1518", EventSexCode::Male);
        let medley_relay = key(EventKind::Relay, StrokeCode::MedleyRelay, "0810", EventSexCode::Mixed);
        let open_free_relay = key(EventKind::Relay, StrokeCode::FreestyleRelay, "UNOV", EventSexCode::Mixed);

        let keys = vec![
            open_free_relay.clone(),
            fly.clone(),
            older_free.clone(),
            free_f.clone(),
            medley_relay.clone(),
            free_m.clone(),
        ];
        let numbers = EventNumbers::assign(&keys);

        // Individual events first: stroke, then age, then male before female
        assert_eq!(numbers.get(&free_m), Some(1));
        assert_eq!(numbers.get(&free_f), Some(2));
        assert_eq!(numbers.get(&older_free), Some(3));
        assert_eq!(numbers.get(&fly), Some(4));
        // Relays continue after the individual count; the open free relay
        // is pushed to the very end
        assert_eq!(numbers.get(&medley_relay), Some(5));
        assert_eq!(numbers.get(&open_free_relay), Some(6));
    }
}
