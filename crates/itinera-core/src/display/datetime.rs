//! Date display utilities.
//!
//! Dates are stored as ISO `YYYY-MM-DD`; these wrappers produce the
//! slash-separated forms shown to users.

use std::fmt;

use jiff::civil::Date;

/// Full date as `YYYY/MM/DD`.
///
/// ```rust
/// use itinera_core::display::SlashDate;
/// use jiff::civil::date;
///
/// assert_eq!(SlashDate(date(2025, 1, 2)).to_string(), "2025/01/02");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SlashDate(pub Date);

impl fmt::Display for SlashDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%Y/%m/%d"))
    }
}

/// Month and day as `MM/DD`, used for day headers.
#[derive(Debug, Clone, Copy)]
pub struct ShortDate(pub Date);

impl fmt::Display for ShortDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%m/%d"))
    }
}
