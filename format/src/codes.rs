//! Enumerated code sets used by the record layouts.
//!
//! Each set is closed: encoding checks membership and decoding anything
//! outside the set is an `UnknownCode` error. Only the codes the meet
//! results subset of the format actually produces or consumes are
//! registered here.

/// Organization that sanctioned the meet. USS is the only value this
/// compiler emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrganizationCode {
    Uss,
    Masters,
    Ncaa,
    NcaaDivI,
    NcaaDivII,
    NcaaDivIII,
    Ymca,
    Fina,
    HighSchool,
}

pub const ORGANIZATION_CODES: [&str; 9] = ["1", "2", "3", "4", "5", "6", "7", "8", "9"];

impl OrganizationCode {
    pub fn code(&self) -> &'static str {
        match self {
            OrganizationCode::Uss => "1",
            OrganizationCode::Masters => "2",
            OrganizationCode::Ncaa => "3",
            OrganizationCode::NcaaDivI => "4",
            OrganizationCode::NcaaDivII => "5",
            OrganizationCode::NcaaDivIII => "6",
            OrganizationCode::Ymca => "7",
            OrganizationCode::Fina => "8",
            OrganizationCode::HighSchool => "9",
        }
    }
}

/// What kind of data the file carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileCode {
    MeetRegistrations,
    MeetResults,
}

pub const FILE_CODES: [&str; 2] = ["01", "02"];

impl FileCode {
    pub fn code(&self) -> &'static str {
        match self {
            FileCode::MeetRegistrations => "01",
            FileCode::MeetResults => "02",
        }
    }
}

/// Stroke of an event, relays included. The numeric wire code doubles as
/// the sort rank used for event numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrokeCode {
    Freestyle,
    Backstroke,
    Breaststroke,
    Butterfly,
    IndividualMedley,
    FreestyleRelay,
    MedleyRelay,
}

pub const STROKE_CODES: [&str; 7] = ["1", "2", "3", "4", "5", "6", "7"];

impl StrokeCode {
    pub fn code(&self) -> &'static str {
        match self {
            StrokeCode::Freestyle => "1",
            StrokeCode::Backstroke => "2",
            StrokeCode::Breaststroke => "3",
            StrokeCode::Butterfly => "4",
            StrokeCode::IndividualMedley => "5",
            StrokeCode::FreestyleRelay => "6",
            StrokeCode::MedleyRelay => "7",
        }
    }

    pub fn rank(&self) -> u8 {
        match self {
            StrokeCode::Freestyle => 1,
            StrokeCode::Backstroke => 2,
            StrokeCode::Breaststroke => 3,
            StrokeCode::Butterfly => 4,
            StrokeCode::IndividualMedley => 5,
            StrokeCode::FreestyleRelay => 6,
            StrokeCode::MedleyRelay => 7,
        }
    }

    pub fn is_relay(&self) -> bool {
        matches!(self, StrokeCode::FreestyleRelay | StrokeCode::MedleyRelay)
    }
}

/// A swimmer's sex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SexCode {
    Male,
    Female,
}

pub const SEX_CODES: [&str; 2] = ["M", "F"];

impl SexCode {
    pub fn code(&self) -> &'static str {
        match self {
            SexCode::Male => "M",
            SexCode::Female => "F",
        }
    }
}

/// The sex an event is open to. Mixed events exist (relays mostly) even
/// though individual swimmers are always `M` or `F`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventSexCode {
    Male,
    Female,
    Mixed,
}

pub const EVENT_SEX_CODES: [&str; 3] = ["M", "F", "X"];

impl EventSexCode {
    pub fn code(&self) -> &'static str {
        match self {
            EventSexCode::Male => "M",
            EventSexCode::Female => "F",
            EventSexCode::Mixed => "X",
        }
    }

    /// Sort rank for event numbering: mixed events order before male,
    /// male before female, once the descending comparison is applied.
    pub fn rank(&self) -> u8 {
        match self {
            EventSexCode::Female => 1,
            EventSexCode::Male => 2,
            EventSexCode::Mixed => 3,
        }
    }

    /// The swimmer sex implied by a single-sex event.
    pub fn swimmer_sex(&self) -> Option<SexCode> {
        match self {
            EventSexCode::Male => Some(SexCode::Male),
            EventSexCode::Female => Some(SexCode::Female),
            EventSexCode::Mixed => None,
        }
    }
}

/// Whether a swimmer is attached to the team they swam for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttachCode {
    Attached,
    Unattached,
}

pub const ATTACH_CODES: [&str; 2] = ["A", "U"];

impl AttachCode {
    pub fn code(&self) -> &'static str {
        match self {
            AttachCode::Attached => "A",
            AttachCode::Unattached => "U",
        }
    }
}

/// Course the time was swum in. Both the numeric and alphabetic spellings
/// appear in the wild; `S` is what TouchPad-era timing systems write for
/// short-course meters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CourseCode {
    ShortYards,
    ShortYardsNumeric,
    LongMeters,
    LongMetersNumeric,
    ShortMeters,
    ShortMetersNumeric,
}

pub const COURSE_CODES: [&str; 6] = ["Y", "1", "L", "2", "S", "3"];

impl CourseCode {
    pub fn code(&self) -> &'static str {
        match self {
            CourseCode::ShortYards => "Y",
            CourseCode::ShortYardsNumeric => "1",
            CourseCode::LongMeters => "L",
            CourseCode::LongMetersNumeric => "2",
            CourseCode::ShortMeters => "S",
            CourseCode::ShortMetersNumeric => "3",
        }
    }

    pub fn parse(text: &str) -> Option<CourseCode> {
        match text {
            "Y" => Some(CourseCode::ShortYards),
            "1" => Some(CourseCode::ShortYardsNumeric),
            "L" => Some(CourseCode::LongMeters),
            "2" => Some(CourseCode::LongMetersNumeric),
            "S" => Some(CourseCode::ShortMeters),
            "3" => Some(CourseCode::ShortMetersNumeric),
            _ => None,
        }
    }
}

/// How the meet was contested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeetTypeCode {
    Invitational,
    Dual,
    Championship,
    Intrasquad,
    TimeTrial,
    Open,
    League,
}

pub const MEET_TYPE_CODES: [&str; 7] = ["1", "2", "3", "4", "5", "6", "7"];

impl MeetTypeCode {
    pub fn code(&self) -> &'static str {
        match self {
            MeetTypeCode::Invitational => "1",
            MeetTypeCode::Dual => "2",
            MeetTypeCode::Championship => "3",
            MeetTypeCode::Intrasquad => "4",
            MeetTypeCode::TimeTrial => "5",
            MeetTypeCode::Open => "6",
            MeetTypeCode::League => "7",
        }
    }
}

/// A relay swimmer's 1-based position in the swim order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderCode {
    Leg1,
    Leg2,
    Leg3,
    Leg4,
}

pub const ORDER_CODES: [&str; 4] = ["1", "2", "3", "4"];

impl OrderCode {
    pub fn code(&self) -> &'static str {
        match self {
            OrderCode::Leg1 => "1",
            OrderCode::Leg2 => "2",
            OrderCode::Leg3 => "3",
            OrderCode::Leg4 => "4",
        }
    }

    /// The leg for a 0-based roster position; positions past the fourth
    /// leg do not exist.
    pub fn from_index(index: usize) -> Option<OrderCode> {
        match index {
            0 => Some(OrderCode::Leg1),
            1 => Some(OrderCode::Leg2),
            2 => Some(OrderCode::Leg3),
            3 => Some(OrderCode::Leg4),
            _ => None,
        }
    }
}

macro_rules! impl_into_field_value {
    ($($ty:ty),+) => {
        $(impl From<$ty> for crate::value::FieldValue {
            fn from(code: $ty) -> crate::value::FieldValue {
                crate::value::FieldValue::Code(code.code().to_string())
            }
        })+
    };
}

impl_into_field_value!(
    OrganizationCode,
    FileCode,
    StrokeCode,
    SexCode,
    EventSexCode,
    AttachCode,
    CourseCode,
    MeetTypeCode,
    OrderCode
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stroke_rank_matches_wire_code() {
        for (stroke, code) in [
            (StrokeCode::Freestyle, "1"),
            (StrokeCode::IndividualMedley, "5"),
            (StrokeCode::MedleyRelay, "7"),
        ] {
            assert_eq!(stroke.code(), code);
            assert_eq!(stroke.rank().to_string(), code);
        }
    }

    #[test]
    fn test_event_sex_rank_descends_mixed_first() {
        let mut sexes = [EventSexCode::Female, EventSexCode::Mixed, EventSexCode::Male];
        sexes.sort_by_key(|s| std::cmp::Reverse(s.rank()));
        assert_eq!(sexes, [EventSexCode::Mixed, EventSexCode::Male, EventSexCode::Female]);
    }

    #[test]
    fn test_leg_order_from_index() {
        assert_eq!(OrderCode::from_index(0), Some(OrderCode::Leg1));
        assert_eq!(OrderCode::from_index(3).map(|o| o.code()), Some("4"));
        assert_eq!(OrderCode::from_index(4), None);
    }
}
