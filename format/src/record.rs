//! Record layouts and the registry that dispatches on the 2-character
//! record type code.
//!
//! The layouts below are the meet-results subset of the interchange
//! format: file description, meet, team id, individual event and info,
//! relay event and name, and the file terminator. Column starts are
//! 1-based as printed in the format standard; columns 1-2 always hold the
//! record type code itself.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::codes::{
    ATTACH_CODES, COURSE_CODES, EVENT_SEX_CODES, FILE_CODES, MEET_TYPE_CODES, ORDER_CODES,
    ORGANIZATION_CODES, SEX_CODES, STROKE_CODES,
};
use crate::error::FormatError;
use crate::field::{decode_field, encode_field, FieldSpec, FieldType};
use crate::line::{LineReader, LineWriter};
use crate::value::FieldValue;

const fn optional(name: &'static str, start: usize, width: usize, kind: FieldType) -> FieldSpec {
    FieldSpec {
        name,
        start,
        width,
        kind,
        required_on_encode: false,
        required_on_decode: false,
    }
}

const fn mandatory(name: &'static str, start: usize, width: usize, kind: FieldType) -> FieldSpec {
    FieldSpec {
        name,
        start,
        width,
        kind,
        required_on_encode: true,
        required_on_decode: false,
    }
}

/// Mandatory in both directions: blank on decode means the line is not a
/// usable record of this type.
const fn mandatory_both(
    name: &'static str,
    start: usize,
    width: usize,
    kind: FieldType,
) -> FieldSpec {
    FieldSpec {
        name,
        start,
        width,
        kind,
        required_on_encode: true,
        required_on_decode: true,
    }
}

/// One record type: its 2-character code, a human label for messages, and
/// the ordered field list. Field order corresponds to column order.
#[derive(Debug)]
pub struct RecordDef {
    pub code:   &'static str,
    pub label:  &'static str,
    pub fields: &'static [FieldSpec],
}

impl RecordDef {
    /// The encoded line width: the furthest field extent (the code in
    /// columns 1-2 sets the floor).
    pub fn width(&self) -> usize {
        self.fields
            .iter()
            .map(|f| f.extent() - 1)
            .max()
            .unwrap_or(0)
            .max(2)
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}

static A0_FIELDS: [FieldSpec; 9] = [
    optional("organization", 3, 1, FieldType::Code(&ORGANIZATION_CODES)),
    optional("version", 4, 8, FieldType::Str),
    mandatory_both("file_code", 12, 2, FieldType::Code(&FILE_CODES)),
    optional("software_name", 44, 20, FieldType::Str),
    optional("software_version", 64, 10, FieldType::Str),
    mandatory("contact_name", 74, 20, FieldType::Str),
    mandatory("contact_phone", 94, 12, FieldType::Str),
    mandatory("file_creation", 106, 8, FieldType::Date),
    optional("submitted_by_lsc", 156, 2, FieldType::Str),
];

static B1_FIELDS: [FieldSpec; 13] = [
    optional("organization", 3, 1, FieldType::Code(&ORGANIZATION_CODES)),
    mandatory_both("name", 12, 30, FieldType::Str),
    optional("address_1", 42, 22, FieldType::Str),
    optional("address_2", 64, 22, FieldType::Str),
    optional("city", 86, 20, FieldType::Str),
    optional("state", 106, 2, FieldType::Str),
    optional("postal_code", 108, 10, FieldType::Str),
    optional("country", 118, 3, FieldType::Str),
    mandatory("meet_type", 121, 1, FieldType::Code(&MEET_TYPE_CODES)),
    mandatory("start", 122, 8, FieldType::Date),
    optional("end", 130, 8, FieldType::Date),
    optional("altitude_ft", 138, 4, FieldType::Int),
    optional("course", 150, 1, FieldType::Code(&COURSE_CODES)),
];

static C1_FIELDS: [FieldSpec; 12] = [
    optional("organization", 3, 1, FieldType::Code(&ORGANIZATION_CODES)),
    mandatory_both("team_code", 12, 6, FieldType::Str),
    mandatory("name", 18, 30, FieldType::Str),
    optional("abbreviation", 48, 16, FieldType::Str),
    optional("address_1", 64, 22, FieldType::Str),
    optional("address_2", 86, 22, FieldType::Str),
    optional("city", 108, 20, FieldType::Str),
    optional("state", 128, 2, FieldType::Str),
    optional("postal_code", 130, 10, FieldType::Str),
    optional("country", 140, 3, FieldType::Str),
    optional("region", 143, 1, FieldType::Str),
    optional("team_code5", 150, 1, FieldType::Str),
];

static D0_FIELDS: [FieldSpec; 31] = [
    optional("organization", 3, 1, FieldType::Code(&ORGANIZATION_CODES)),
    mandatory_both("name", 12, 28, FieldType::Str),
    optional("ussn", 40, 12, FieldType::Str),
    optional("attached", 52, 1, FieldType::Code(&ATTACH_CODES)),
    optional("citizen", 53, 3, FieldType::Str),
    optional("birthdate", 56, 8, FieldType::Date),
    optional("age_or_class", 64, 2, FieldType::Str),
    mandatory("sex", 66, 1, FieldType::Code(&SEX_CODES)),
    optional("event_sex", 67, 1, FieldType::Code(&EVENT_SEX_CODES)),
    optional("event_distance", 68, 4, FieldType::Int),
    optional("stroke", 72, 1, FieldType::Code(&STROKE_CODES)),
    optional("event_number", 73, 4, FieldType::Int),
    optional("event_age", 77, 4, FieldType::Str),
    optional("date_of_swim", 81, 8, FieldType::Date),
    optional("seed_time", 89, 8, FieldType::Time),
    optional("seed_course", 97, 1, FieldType::Code(&COURSE_CODES)),
    optional("prelim_time", 98, 8, FieldType::Time),
    optional("prelim_course", 106, 1, FieldType::Code(&COURSE_CODES)),
    optional("swim_off_time", 107, 8, FieldType::Time),
    optional("swim_off_course", 115, 1, FieldType::Code(&COURSE_CODES)),
    optional("finals_time", 116, 8, FieldType::Time),
    optional("finals_course", 124, 1, FieldType::Code(&COURSE_CODES)),
    optional("prelim_heat", 125, 2, FieldType::Int),
    optional("prelim_lane", 127, 2, FieldType::Int),
    optional("finals_heat", 129, 2, FieldType::Int),
    optional("finals_lane", 131, 2, FieldType::Int),
    optional("prelim_place", 133, 3, FieldType::Int),
    optional("finals_place", 136, 3, FieldType::Int),
    optional("points", 139, 4, FieldType::Decimal),
    optional("event_time_class", 143, 2, FieldType::Str),
    optional("flight_status", 145, 1, FieldType::Str),
];

static D3_FIELDS: [FieldSpec; 13] = [
    mandatory_both("uss_number", 3, 14, FieldType::Str),
    optional("preferred_first_name", 17, 15, FieldType::Str),
    optional("ethnicity_1", 32, 1, FieldType::Str),
    optional("ethnicity_2", 33, 1, FieldType::Str),
    optional("junior_high", 34, 1, FieldType::Bool),
    optional("senior_high", 35, 1, FieldType::Bool),
    optional("ymca_ywca", 36, 1, FieldType::Bool),
    optional("college", 37, 1, FieldType::Bool),
    optional("summer_league", 38, 1, FieldType::Bool),
    optional("masters", 39, 1, FieldType::Bool),
    optional("disabled_sports_org", 40, 1, FieldType::Bool),
    optional("water_polo", 41, 1, FieldType::Bool),
    optional("no_affiliation", 42, 1, FieldType::Bool),
];

static E0_FIELDS: [FieldSpec; 28] = [
    optional("organization", 3, 1, FieldType::Code(&ORGANIZATION_CODES)),
    mandatory("relay_squad", 12, 1, FieldType::Str),
    mandatory_both("team_code", 13, 6, FieldType::Str),
    optional("n_f0_records", 19, 2, FieldType::Int),
    mandatory("event_sex", 21, 1, FieldType::Code(&EVENT_SEX_CODES)),
    mandatory("distance", 22, 4, FieldType::Int),
    mandatory("stroke", 26, 1, FieldType::Code(&STROKE_CODES)),
    optional("event_number", 27, 4, FieldType::Int),
    mandatory("event_age", 31, 4, FieldType::Str),
    optional("total_athlete_age", 35, 3, FieldType::Int),
    optional("swim_date", 38, 8, FieldType::Date),
    optional("seed_time", 46, 8, FieldType::Time),
    optional("seed_course", 54, 1, FieldType::Code(&COURSE_CODES)),
    optional("prelim_time", 55, 8, FieldType::Time),
    optional("prelim_course", 63, 1, FieldType::Code(&COURSE_CODES)),
    optional("swim_off_time", 64, 8, FieldType::Time),
    optional("swim_off_course", 72, 1, FieldType::Code(&COURSE_CODES)),
    optional("finals_time", 73, 8, FieldType::Time),
    optional("finals_course", 81, 1, FieldType::Code(&COURSE_CODES)),
    optional("prelim_heat", 82, 2, FieldType::Int),
    optional("prelim_lane", 84, 2, FieldType::Int),
    optional("finals_heat", 86, 2, FieldType::Int),
    optional("finals_lane", 88, 2, FieldType::Int),
    optional("prelim_place", 90, 3, FieldType::Int),
    optional("finals_place", 93, 3, FieldType::Int),
    optional("points", 96, 4, FieldType::Decimal),
    optional("time_class_lower", 100, 1, FieldType::Str),
    optional("time_class_upper", 101, 1, FieldType::Str),
];

static F0_FIELDS: [FieldSpec; 17] = [
    optional("organization", 3, 1, FieldType::Code(&ORGANIZATION_CODES)),
    mandatory("team_code", 16, 6, FieldType::Str),
    optional("relay_squad", 22, 1, FieldType::Str),
    mandatory_both("swimmer_name", 23, 28, FieldType::Str),
    optional("uss_number", 51, 12, FieldType::Str),
    optional("citizen", 63, 3, FieldType::Str),
    optional("birthdate", 66, 8, FieldType::Date),
    optional("age_or_class", 74, 2, FieldType::Str),
    optional("sex", 76, 1, FieldType::Code(&SEX_CODES)),
    optional("prelim_order", 77, 1, FieldType::Code(&ORDER_CODES)),
    optional("swim_off_order", 78, 1, FieldType::Code(&ORDER_CODES)),
    mandatory("finals_order", 79, 1, FieldType::Code(&ORDER_CODES)),
    optional("leg_time", 80, 8, FieldType::Time),
    optional("course", 88, 1, FieldType::Code(&COURSE_CODES)),
    optional("takeoff_time", 89, 4, FieldType::Decimal),
    optional("uss_number_new", 93, 14, FieldType::Str),
    optional("preferred_first_name", 107, 15, FieldType::Str),
];

static Z0_FIELDS: [FieldSpec; 3] = [
    optional("organization", 3, 1, FieldType::Code(&ORGANIZATION_CODES)),
    mandatory_both("file_code", 12, 2, FieldType::Code(&FILE_CODES)),
    optional("notes", 14, 30, FieldType::Str),
];

pub static FILE_DESCRIPTION: RecordDef = RecordDef {
    code:   "A0",
    label:  "file description",
    fields: &A0_FIELDS,
};

pub static MEET: RecordDef = RecordDef {
    code:   "B1",
    label:  "meet",
    fields: &B1_FIELDS,
};

pub static TEAM_ID: RecordDef = RecordDef {
    code:   "C1",
    label:  "team id",
    fields: &C1_FIELDS,
};

pub static INDIVIDUAL_EVENT: RecordDef = RecordDef {
    code:   "D0",
    label:  "individual event",
    fields: &D0_FIELDS,
};

pub static INDIVIDUAL_INFO: RecordDef = RecordDef {
    code:   "D3",
    label:  "individual info",
    fields: &D3_FIELDS,
};

pub static RELAY_EVENT: RecordDef = RecordDef {
    code:   "E0",
    label:  "relay event",
    fields: &E0_FIELDS,
};

pub static RELAY_NAME: RecordDef = RecordDef {
    code:   "F0",
    label:  "relay name",
    fields: &F0_FIELDS,
};

pub static FILE_TERMINATOR: RecordDef = RecordDef {
    code:   "Z0",
    label:  "file terminator",
    fields: &Z0_FIELDS,
};

/// The registry: every record type the codec knows, with a code lookup
/// for decode dispatch. Built once at startup and read-only afterwards.
pub struct Layout {
    defs:          Vec<&'static RecordDef>,
    code_to_index: HashMap<&'static str, usize>,
}

lazy_static! {
    pub static ref SDIF_V3: Layout = Layout::sdif_v3();
}

impl Layout {
    pub fn sdif_v3() -> Layout {
        Layout::new(vec![
            &FILE_DESCRIPTION,
            &MEET,
            &TEAM_ID,
            &INDIVIDUAL_EVENT,
            &INDIVIDUAL_INFO,
            &RELAY_EVENT,
            &RELAY_NAME,
            &FILE_TERMINATOR,
        ])
    }

    pub fn new(defs: Vec<&'static RecordDef>) -> Layout {
        let mut code_to_index = HashMap::new();
        for (i, def) in defs.iter().enumerate() {
            code_to_index.insert(def.code, i);
        }
        Layout {
            defs,
            code_to_index,
        }
    }

    pub fn def(&self, code: &str) -> Option<&'static RecordDef> {
        self.code_to_index.get(code).map(|&i| self.defs[i])
    }

    pub fn defs(&self) -> &[&'static RecordDef] {
        &self.defs
    }

    /// Check the structural invariants every registered layout must hold:
    /// unique 2-character codes, fields in ascending column order with no
    /// overlap, positive widths, date fields exactly 8 wide.
    pub fn verify(&self) -> Result<(), FormatError> {
        let mut seen = Vec::new();
        for def in &self.defs {
            if def.code.len() != 2 || seen.contains(&def.code) {
                return Err(FormatError::InvalidLayout(format!(
                    "record type code {:?} is not a unique 2-character code",
                    def.code
                )));
            }
            seen.push(def.code);

            let mut cursor = 3; // columns 1-2 hold the code
            for field in def.fields {
                if field.width == 0 || field.start < cursor {
                    return Err(FormatError::InvalidLayout(format!(
                        "field \"{}\" of {} overlaps an earlier column",
                        field.name, def.code
                    )));
                }
                if matches!(field.kind, FieldType::Date) && field.width != 8 {
                    return Err(FormatError::InvalidLayout(format!(
                        "date field \"{}\" of {} must be 8 wide",
                        field.name, def.code
                    )));
                }
                cursor = field.extent();
            }
        }
        Ok(())
    }
}

/// One typed record: a reference to its layout plus the populated field
/// values. Unset fields are empty.
#[derive(Clone, Debug)]
pub struct Record {
    def:    &'static RecordDef,
    fields: HashMap<&'static str, FieldValue>,
}

impl Record {
    pub fn new(def: &'static RecordDef) -> Record {
        Record {
            def,
            fields: HashMap::new(),
        }
    }

    pub fn def(&self) -> &'static RecordDef {
        self.def
    }

    pub fn code(&self) -> &'static str {
        self.def.code
    }

    /// Set a field by name. Setting `Empty` clears it.
    pub fn set<V: Into<FieldValue>>(&mut self, name: &'static str, value: V) {
        debug_assert!(self.def.field(name).is_some(), "unknown field {name:?}");
        let value = value.into();
        if value.is_empty() {
            self.fields.remove(name);
        } else {
            self.fields.insert(name, value);
        }
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Encode this record to its fixed-width line.
    pub fn encode(&self) -> Result<String, FormatError> {
        let mut out = LineWriter::new(self.def.width());
        out.put(1, 2, self.def.code);
        for spec in self.def.fields {
            let value = self.fields.get(spec.name).unwrap_or(&FieldValue::Empty);
            encode_field(self.def.code, spec, value, &mut out)?;
        }
        Ok(out.finish())
    }

    /// Decode one line against `def`. The caller has already dispatched on
    /// the line's record type code.
    pub fn decode(def: &'static RecordDef, line: &str) -> Result<Record, FormatError> {
        let reader = LineReader::new(line);
        let mut fields = HashMap::new();
        for spec in def.fields {
            let value = decode_field(def.code, spec, &reader)?;
            if !value.is_empty() {
                fields.insert(spec.name, value);
            }
        }
        Ok(Record { def, fields })
    }
}
