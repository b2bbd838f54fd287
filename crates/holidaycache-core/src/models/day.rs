use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{CountryCode, Holiday};

/// Holiday and weekend classification of a single date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayStatus {
    pub date: NaiveDate,
    pub country: CountryCode,
    pub is_holiday: bool,
    pub is_weekend: bool,
    pub is_non_working_day: bool,
    pub holiday: Option<Holiday>,
}

impl DayStatus {
    pub fn new(date: NaiveDate, country: CountryCode, holiday: Option<Holiday>, is_weekend: bool) -> Self {
        let is_holiday = holiday.is_some();
        Self {
            date,
            country,
            is_holiday,
            is_weekend,
            is_non_working_day: is_holiday || is_weekend,
            holiday,
        }
    }

    pub fn summary(&self) -> String {
        match (&self.holiday, self.is_weekend) {
            (Some(h), true) => format!("{} ({}, weekend)", self.date, h.display_name()),
            (Some(h), false) => format!("{} ({})", self.date, h.display_name()),
            (None, true) => format!("{} (weekend)", self.date),
            (None, false) => format!("{} (working day)", self.date),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_holiday_on_weekday() {
        let h = Holiday::new(date(2024, 1, 26), "Republic Day", "Gantantra Diwas");
        let status = DayStatus::new(date(2024, 1, 26), CountryCode::default(), Some(h), false);
        assert!(status.is_holiday);
        assert!(status.is_non_working_day);
        assert!(status.is_non_working_day);
        assert_eq!(status.summary(), "2024-01-26 (Republic Day)");
    }

    #[test]
    fn test_plain_working_day() {
        let status = DayStatus::new(date(2024, 1, 15), CountryCode::default(), None, false);
        assert!(!status.is_non_working_day);
        assert_eq!(status.summary(), "2024-01-15 (working day)");
    }

    #[test]
    fn test_serialized_field_names() {
        let status = DayStatus::new(date(2024, 1, 27), CountryCode::default(), None, true);
        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["isWeekend"], true);
        assert_eq!(json["isNonWorkingDay"], true);
        assert_eq!(json["country"], "IN");
        assert!(json["holiday"].is_null());
    }

    #[test]
    fn test_deserialized_country_is_normalized() {
        let json = r#"{"date":"2024-01-15","country":"in","isHoliday":false,"isWeekend":false,"isNonWorkingDay":false,"holiday":null}"#;
        let status: DayStatus = serde_json::from_str(json).expect("Failed to parse day status JSON");
        assert_eq!(status.country, CountryCode::new("IN"));
    }
}
