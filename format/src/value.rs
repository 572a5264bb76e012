use std::fmt;

use crate::date::SwimDate;
use crate::time::SwimTime;

/// One typed field value inside a record.
///
/// Values can represent anything a field spec can carry and are converted
/// to and from fixed-width text by the field codec. `Empty` stands for an
/// absent optional value and encodes as a run of spaces.
#[derive(Clone, PartialEq, Eq)]
pub enum FieldValue {
    Empty,
    Str(String),
    Int(i64),
    /// An implied-decimal number held in hundredths (`1350` is `13.50`).
    Decimal(i64),
    Date(SwimDate),
    Time(SwimTime),
    /// A member of a closed enumerated code set, held by its wire code.
    Code(String),
    Bool(bool),
}

impl FieldValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, FieldValue::Empty)
    }

    /// A convenience method to extract the text out of a [Str](#variant.Str)
    /// or [Code](#variant.Code). Returns `""` for other value kinds.
    pub fn as_str(&self) -> &str {
        match self {
            FieldValue::Str(value) => value.as_str(),
            FieldValue::Code(value) => value.as_str(),
            _ => "",
        }
    }

    /// A convenience method to extract the value out of an [Int](#variant.Int).
    /// Returns `0` for other value kinds.
    pub fn as_int(&self) -> i64 {
        match *self {
            FieldValue::Int(value) => value,
            _ => 0,
        }
    }

    /// A convenience method to extract the hundredths out of a
    /// [Decimal](#variant.Decimal). Returns `0` for other value kinds.
    pub fn as_decimal(&self) -> i64 {
        match *self {
            FieldValue::Decimal(value) => value,
            _ => 0,
        }
    }

    /// A convenience method to extract the value out of a [Date](#variant.Date).
    pub fn as_date(&self) -> Option<SwimDate> {
        match *self {
            FieldValue::Date(value) => Some(value),
            _ => None,
        }
    }

    /// A convenience method to extract the value out of a [Time](#variant.Time).
    pub fn as_time(&self) -> Option<SwimTime> {
        match *self {
            FieldValue::Time(value) => Some(value),
            _ => None,
        }
    }

    /// A convenience method to extract the value out of a [Bool](#variant.Bool).
    /// Returns `false` for other value kinds.
    pub fn as_bool(&self) -> bool {
        match *self {
            FieldValue::Bool(value) => value,
            _ => false,
        }
    }
}

impl fmt::Debug for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FieldValue::Empty => f.write_str("(empty)"),
            FieldValue::Str(value) => value.fmt(f),
            FieldValue::Int(value) => value.fmt(f),
            FieldValue::Decimal(value) => write!(f, "{}.{:02}", value / 100, value % 100),
            FieldValue::Date(value) => write!(f, "{}", value),
            FieldValue::Time(value) => write!(f, "{}", value),
            FieldValue::Code(value) => write!(f, "#{}", value),
            FieldValue::Bool(value) => value.fmt(f),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> FieldValue {
        FieldValue::Str(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> FieldValue {
        FieldValue::Str(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> FieldValue {
        FieldValue::Int(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> FieldValue {
        FieldValue::Int(value as i64)
    }
}

impl From<SwimDate> for FieldValue {
    fn from(value: SwimDate) -> FieldValue {
        FieldValue::Date(value)
    }
}

impl From<SwimTime> for FieldValue {
    fn from(value: SwimTime) -> FieldValue {
        FieldValue::Time(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> FieldValue {
        FieldValue::Bool(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> FieldValue {
        match value {
            Some(inner) => inner.into(),
            None => FieldValue::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_default_on_other_kinds() {
        assert_eq!(FieldValue::Int(7).as_str(), "");
        assert_eq!(FieldValue::Str("x".into()).as_int(), 0);
        assert_eq!(FieldValue::Empty.as_date(), None);
        assert!(!FieldValue::Empty.as_bool());
    }

    #[test]
    fn test_option_into_value() {
        let some: FieldValue = Some(42i64).into();
        let none: FieldValue = Option::<i64>::None.into();
        assert_eq!(some, FieldValue::Int(42));
        assert!(none.is_empty());
    }
}
