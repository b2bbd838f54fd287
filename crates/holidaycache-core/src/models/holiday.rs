use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Country used when the caller does not name one.
pub const DEFAULT_COUNTRY: &str = "IN";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    pub date: NaiveDate,
    pub name: String,
    #[serde(rename = "localName")]
    pub local_name: String,
}

impl Holiday {
    pub fn new(date: NaiveDate, name: &str, local_name: &str) -> Self {
        Self {
            date,
            name: name.to_string(),
            local_name: local_name.to_string(),
        }
    }

    /// Name for display, preferring the English name when both are present
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.local_name
        } else {
            &self.name
        }
    }
}

/// ISO-3166 alpha-2 code, trimmed and upper-cased.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String")]
pub struct CountryCode(String);

impl CountryCode {
    pub fn new(code: &str) -> Self {
        let code = code.trim();
        if code.is_empty() {
            Self(DEFAULT_COUNTRY.to_string())
        } else {
            Self(code.to_ascii_uppercase())
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the code has the two-letter shape the remote API accepts
    pub fn is_well_formed(&self) -> bool {
        self.0.len() == 2 && self.0.chars().all(|c| c.is_ascii_uppercase())
    }
}

impl Default for CountryCode {
    fn default() -> Self {
        Self(DEFAULT_COUNTRY.to_string())
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CountryCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for CountryCode {
    fn from(code: String) -> Self {
        Self::new(&code)
    }
}
