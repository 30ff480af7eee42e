//! Day bucket model.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::ItineraryItem;
use crate::dates;

/// One calendar day of a trip and its ordered activities.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DayBucket {
    /// Calendar day this bucket represents
    #[serde(with = "crate::dates::lenient")]
    pub date: Date,

    /// Weekday label of `date`
    pub week_day: String,

    /// Items in display order
    #[serde(default)]
    pub details: Vec<ItineraryItem>,
}

impl DayBucket {
    /// Creates an empty bucket for `date`.
    pub fn new(date: Date) -> Self {
        Self {
            date,
            week_day: dates::weekday_label(date).to_string(),
            details: Vec::new(),
        }
    }

    /// Position of the item with `id`, if present.
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.details.iter().position(|item| item.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.details.is_empty()
    }

    pub fn len(&self) -> usize {
        self.details.len()
    }
}
