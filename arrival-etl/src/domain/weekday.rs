//! Weekday classification.

use chrono::{Datelike, NaiveDateTime, Weekday};
use serde::{Serialize, Serializer};

/// Day-of-week segment used for downstream reporting, written as `weekTag`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeekdayTag {
    Weekday = 1,
    Saturday = 2,
    Sunday = 3,
}

impl WeekdayTag {
    pub fn from_weekday(day: Weekday) -> Self {
        match day {
            Weekday::Sat => WeekdayTag::Saturday,
            Weekday::Sun => WeekdayTag::Sunday,
            Weekday::Mon | Weekday::Tue | Weekday::Wed | Weekday::Thu | Weekday::Fri => {
                WeekdayTag::Weekday
            }
        }
    }

    /// Classify a naive local timestamp.
    pub fn of(timestamp: &NaiveDateTime) -> Self {
        Self::from_weekday(timestamp.weekday())
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl Serialize for WeekdayTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_u8())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn week_of_june_2023() {
        // 2023-06-26 is a Monday
        assert_eq!(WeekdayTag::of(&at(2023, 6, 26)), WeekdayTag::Weekday);
        assert_eq!(WeekdayTag::of(&at(2023, 6, 27)), WeekdayTag::Weekday);
        assert_eq!(WeekdayTag::of(&at(2023, 6, 28)), WeekdayTag::Weekday);
        assert_eq!(WeekdayTag::of(&at(2023, 6, 29)), WeekdayTag::Weekday);
        assert_eq!(WeekdayTag::of(&at(2023, 6, 30)), WeekdayTag::Weekday);
        assert_eq!(WeekdayTag::of(&at(2023, 7, 1)), WeekdayTag::Saturday);
        assert_eq!(WeekdayTag::of(&at(2023, 7, 2)), WeekdayTag::Sunday);
    }

    #[test]
    fn numeric_values() {
        assert_eq!(WeekdayTag::Weekday.as_u8(), 1);
        assert_eq!(WeekdayTag::Saturday.as_u8(), 2);
        assert_eq!(WeekdayTag::Sunday.as_u8(), 3);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    proptest! {
        /// Tag agrees with the ISO weekday number (Monday = 0)
        #[test]
        fn consistent_with_iso_weekday(days in 0i64..100_000) {
            let base = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
            let date = base + chrono::Duration::days(days);
            let ts = date.and_hms_opt(0, 0, 0).unwrap();
            let expected = match date.weekday().num_days_from_monday() {
                0..=4 => WeekdayTag::Weekday,
                5 => WeekdayTag::Saturday,
                _ => WeekdayTag::Sunday,
            };
            prop_assert_eq!(WeekdayTag::of(&ts), expected);
        }
    }
}
