//! Static holiday table used when the remote API cannot be reached.
//!
//! Only a handful of years are covered. Anything else resolves to an
//! empty list.

use chrono::NaiveDate;

use crate::models::{CountryCode, Holiday};

/// `(month, day, name, local name)`
type Entry = (u32, u32, &'static str, &'static str);

/// `(country, year, holidays)`
const FALLBACK_TABLE: &[(&str, i32, &[Entry])] = &[
    (
        "IN",
        2024,
        &[
            (1, 26, "Republic Day", "Gantantra Diwas"),
            (3, 25, "Holi", "Holi"),
            (8, 15, "Independence Day", "Swatantrata Diwas"),
            (10, 2, "Gandhi Jayanti", "Gandhi Jayanti"),
            (12, 25, "Christmas Day", "Christmas"),
        ],
    ),
    (
        "IN",
        2025,
        &[
            (1, 26, "Republic Day", "Gantantra Diwas"),
            (3, 14, "Holi", "Holi"),
            (8, 15, "Independence Day", "Swatantrata Diwas"),
            (10, 2, "Gandhi Jayanti", "Gandhi Jayanti"),
            (12, 25, "Christmas Day", "Christmas"),
        ],
    ),
];

/// Look up the static holidays for a year, `None` when the table has no row
pub fn fallback_holidays(year: i32, country: &CountryCode) -> Option<Vec<Holiday>> {
    FALLBACK_TABLE
        .iter()
        .find(|(code, y, _)| *y == year && *code == country.as_str())
        .map(|(_, _, entries)| {
            entries
                .iter()
                .filter_map(|&(month, day, name, local_name)| {
                    NaiveDate::from_ymd_opt(year, month, day)
                        .map(|date| Holiday::new(date, name, local_name))
                })
                .collect()
        })
}

/// Years the table covers for a country
pub fn covered_years(country: &CountryCode) -> Vec<i32> {
    FALLBACK_TABLE
        .iter()
        .filter(|(code, _, _)| *code == country.as_str())
        .map(|(_, year, _)| *year)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_india_2024() {
        let holidays = fallback_holidays(2024, &CountryCode::new("IN")).unwrap();
        let names: Vec<&str> = holidays.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Republic Day", "Holi", "Independence Day", "Gandhi Jayanti", "Christmas Day"]
        );
        assert_eq!(holidays[0].date, NaiveDate::from_ymd_opt(2024, 1, 26).unwrap());
        assert!(holidays.iter().all(|h| h.date.year() == 2024));
    }

    #[test]
    fn test_missing_rows() {
        assert!(fallback_holidays(1899, &CountryCode::new("IN")).is_none());
        assert!(fallback_holidays(2024, &CountryCode::new("US")).is_none());
    }

    #[test]
    fn test_covered_years() {
        assert_eq!(covered_years(&CountryCode::new("in")), vec![2024, 2025]);
        assert!(covered_years(&CountryCode::new("DE")).is_empty());
    }
}
