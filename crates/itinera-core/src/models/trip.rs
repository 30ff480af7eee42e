//! Trip model definition and related functionality.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::dates;

/// A planned trip, as listed on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    /// Unique identifier, also the storage key of the trip's itinerary
    pub id: String,

    /// Display name of the trip
    pub name: String,

    /// First day of the trip (inclusive)
    #[serde(with = "crate::dates::lenient")]
    pub start_date: Date,

    /// Last day of the trip (inclusive)
    #[serde(with = "crate::dates::lenient")]
    pub end_date: Date,

    /// Origin country label
    #[serde(
        default,
        deserialize_with = "super::empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub country: Option<String>,

    /// Cover image, either inline image data or an external URL
    #[serde(
        default,
        deserialize_with = "super::empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub cover_image: Option<String>,
}

impl Trip {
    /// Every calendar day of the trip in chronological order.
    pub fn days(&self) -> Vec<Date> {
        dates::expand_range(self.start_date, self.end_date)
    }

    /// Number of days in the trip, counting both ends.
    pub fn duration_days(&self) -> usize {
        self.days().len()
    }

    /// Whether `date` falls inside the trip's range.
    pub fn contains(&self, date: Date) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}
