//! # Calendar Date Helpers
//!
//! Certificates carry whole calendar dates (`issueDate`, `expiryDate`),
//! not instants, so the domain type is `chrono::NaiveDate`. The only
//! place wall-clock time enters the system is [`today_utc()`], which the
//! registry's `verify` uses as the default evaluation date; everything
//! below that seam takes the date explicitly and stays deterministic
//! under test.

use chrono::{NaiveDate, Utc};

use crate::error::CoreError;

/// Today's date in UTC.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// Parse an ISO `YYYY-MM-DD` calendar date.
///
/// # Errors
///
/// Returns [`CoreError::InvalidDate`] on any other format.
pub fn parse_date(s: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| CoreError::InvalidDate {
        value: s.to_string(),
        reason: e.to_string(),
    })
}
