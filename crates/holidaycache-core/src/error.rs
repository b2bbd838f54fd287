use thiserror::Error;

/// Errors surfaced to callers. The lookup operations themselves never fail;
/// these come from validating raw input before a lookup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HolidayError {
    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid year '{0}'")]
    InvalidYear(String),
}
