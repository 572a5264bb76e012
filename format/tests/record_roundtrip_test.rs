#![cfg(test)]

use sdif_format::codes::{
    AttachCode, CourseCode, EventSexCode, OrganizationCode, SexCode, StrokeCode,
};
use sdif_format::value::FieldValue;
use sdif_format::{
    decode_records, encode_records, Record, SwimDate, SwimTime, INDIVIDUAL_EVENT, SDIF_V3,
};

fn individual_event() -> Record {
    let mut d0 = Record::new(&INDIVIDUAL_EVENT);
    d0.set("organization", OrganizationCode::Uss);
    d0.set("name", "Smith, Jane A");
    d0.set("ussn", "061712JANASMI");
    d0.set("attached", AttachCode::Attached);
    d0.set("citizen", "USA");
    d0.set("birthdate", SwimDate::new(2012, 6, 17).unwrap());
    d0.set("age_or_class", "11");
    d0.set("sex", SexCode::Female);
    d0.set("event_sex", EventSexCode::Female);
    d0.set("event_distance", 50u32);
    d0.set("stroke", StrokeCode::Butterfly);
    d0.set("event_number", 14i64);
    d0.set("event_age", "1112");
    d0.set("date_of_swim", SwimDate::new(2023, 6, 17).unwrap());
    d0.set("finals_time", SwimTime::decode("31.40").unwrap());
    d0.set("finals_course", CourseCode::ShortMeters);
    d0.set("finals_place", 2i64);
    d0.set("points", FieldValue::Decimal(1350));
    d0
}

#[test]
fn test_fully_populated_record_roundtrips() {
    let d0 = individual_event();
    let text = encode_records(&[d0.clone()]).unwrap();
    let (records, summary) = decode_records(&text, &SDIF_V3);

    assert_eq!(summary.count("D0"), 1);
    assert_eq!(summary.skipped, 0);
    let back = &records[0];
    for spec in INDIVIDUAL_EVENT.fields {
        assert_eq!(
            back.get(spec.name),
            d0.get(spec.name),
            "field {:?} should round-trip",
            spec.name
        );
    }
}

#[test]
fn test_over_wide_name_truncates_but_roundtrips_the_kept_part() {
    let mut d0 = individual_event();
    d0.set(
        "ussn",
        "061712JANASMITHEXTRALONG", // wider than its 12-character field
    );
    let text = encode_records(&[d0]).unwrap();
    let (records, _) = decode_records(&text, &SDIF_V3);
    assert_eq!(
        records[0].get("ussn"),
        Some(&FieldValue::Str("061712JANASM".into()))
    );
}

#[test]
fn test_short_lines_decode_with_empty_tail_fields() {
    // Cut the encoded line off right after the sex column
    let full = individual_event().encode().unwrap();
    let short: String = full.chars().take(66).collect();
    let (records, summary) = decode_records(&short, &SDIF_V3);

    assert_eq!(summary.count("D0"), 1);
    let back = &records[0];
    assert_eq!(back.get("name"), Some(&FieldValue::Str("Smith, Jane A".into())));
    assert_eq!(back.get("finals_time"), None);
    assert_eq!(back.get("points"), None);
}

#[test]
fn test_scan_credits_only_known_codes() {
    let text = format!("{}XX mystery line\n", encode_records(&[individual_event()]).unwrap());
    let (_, summary) = decode_records(&text, &SDIF_V3);
    assert_eq!(summary.counts, vec![("D0".to_string(), 1)]);
    assert_eq!(summary.skipped, 1);
}
