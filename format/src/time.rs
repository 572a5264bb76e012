use std::fmt;

use crate::error::FormatError;

/// The reserved sentinel codes a time field may carry instead of a clock
/// time. This is a closed set; anything else must parse as a clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeCode {
    NoTime,
    NoSwim,
    DidNotFinish,
    Disqualified,
    Scratch,
}

impl TimeCode {
    pub fn code(&self) -> &'static str {
        match self {
            TimeCode::NoTime => "NT",
            TimeCode::NoSwim => "NS",
            TimeCode::DidNotFinish => "DNF",
            TimeCode::Disqualified => "DQ",
            TimeCode::Scratch => "SCR",
        }
    }

    pub fn parse(text: &str) -> Option<TimeCode> {
        match text {
            "NT" => Some(TimeCode::NoTime),
            "NS" => Some(TimeCode::NoSwim),
            "DNF" => Some(TimeCode::DidNotFinish),
            "DQ" => Some(TimeCode::Disqualified),
            "SCR" => Some(TimeCode::Scratch),
            _ => None,
        }
    }
}

/// A clock time with hundredth precision, e.g. `1:23.45`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClockTime {
    pub minutes:    u32,
    pub seconds:    u32,
    pub hundredths: u32,
}

impl ClockTime {
    pub fn total_hundredths(&self) -> u32 {
        (self.minutes * 60 + self.seconds) * 100 + self.hundredths
    }
}

/// A swim time field value: either an actual clock time or one of the
/// sentinel codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwimTime {
    Clock(ClockTime),
    Code(TimeCode),
}

impl SwimTime {
    /// Transform a raw spreadsheet cell into a swim time. Empty cells mean
    /// the swimmer never swam; sentinel tokens map to their code; anything
    /// else must be a clock time.
    pub fn from_raw(raw: Option<&str>) -> Result<SwimTime, FormatError> {
        let text = raw.map(str::trim).unwrap_or("");
        if text.is_empty() {
            return Ok(SwimTime::Code(TimeCode::NoSwim));
        }
        SwimTime::decode(text)
    }

    /// Parse the wire form (or an equivalent cell value).
    pub fn decode(text: &str) -> Result<SwimTime, FormatError> {
        if let Some(code) = TimeCode::parse(text) {
            return Ok(SwimTime::Code(code));
        }
        parse_clock(text)
            .map(SwimTime::Clock)
            .ok_or_else(|| FormatError::MalformedTime(text.to_string()))
    }

    /// The wire form: minutes are omitted when zero, so `28.40` and
    /// `1:23.45` are both canonical.
    pub fn encode(&self) -> String {
        match self {
            SwimTime::Code(code) => code.code().to_string(),
            SwimTime::Clock(t) if t.minutes > 0 => {
                format!("{}:{:02}.{:02}", t.minutes, t.seconds, t.hundredths)
            }
            SwimTime::Clock(t) => format!("{}.{:02}", t.seconds, t.hundredths),
        }
    }
}

impl fmt::Display for SwimTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

fn parse_clock(text: &str) -> Option<ClockTime> {
    let (minutes, rest) = match text.split_once(':') {
        Some((m, rest)) => (m.parse::<u32>().ok()?, rest),
        None => (0, text),
    };
    let (sec, frac) = rest.split_once('.')?;
    let seconds = sec.parse::<u32>().ok()?;
    if frac.is_empty() || frac.len() > 2 || !frac.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    // "4" means 40 hundredths, "45" means 45
    let hundredths = frac.parse::<u32>().ok()? * if frac.len() == 1 { 10 } else { 1 };
    if seconds >= 60 && minutes > 0 {
        return None;
    }
    Some(ClockTime {
        minutes,
        seconds,
        hundredths,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_roundtrip() {
        let t = SwimTime::decode("1:23.45").unwrap();
        assert_eq!(
            t,
            SwimTime::Clock(ClockTime {
                minutes:    1,
                seconds:    23,
                hundredths: 45,
            })
        );
        assert_eq!(t.encode(), "1:23.45");

        let t = SwimTime::decode("28.40").unwrap();
        assert_eq!(t.encode(), "28.40");
    }

    #[test]
    fn test_sentinels() {
        assert_eq!(SwimTime::decode("DQ").unwrap(), SwimTime::Code(TimeCode::Disqualified));
        assert_eq!(SwimTime::from_raw(None).unwrap(), SwimTime::Code(TimeCode::NoSwim));
        assert_eq!(SwimTime::from_raw(Some("  ")).unwrap(), SwimTime::Code(TimeCode::NoSwim));
        assert_eq!(SwimTime::from_raw(Some("NT")).unwrap(), SwimTime::Code(TimeCode::NoTime));
    }

    #[test]
    fn test_malformed() {
        assert!(SwimTime::decode("fast").is_err());
        assert!(SwimTime::decode("1:75.00").is_err());
        assert!(SwimTime::decode("1:23").is_err());
    }

    #[test]
    fn test_single_digit_fraction() {
        let t = SwimTime::decode("31.4").unwrap();
        assert_eq!(t.encode(), "31.40");
    }

    #[test]
    fn test_total_hundredths() {
        let t = ClockTime {
            minutes:    1,
            seconds:    23,
            hundredths: 45,
        };
        assert_eq!(t.total_hundredths(), 8345);
    }
}
