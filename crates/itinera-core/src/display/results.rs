//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use super::datetime::SlashDate;
use crate::{
    engine::SkipReason,
    models::{ItineraryItem, Trip},
};

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use itinera_core::{display::CreateResult, models::Trip};
/// use jiff::civil::date;
///
/// let trip = Trip {
///     id: "t1".to_string(),
///     name: "Seoul".to_string(),
///     start_date: date(2025, 5, 1),
///     end_date: date(2025, 5, 3),
///     country: Some("Korea".to_string()),
///     cover_image: None,
/// };
/// let output = CreateResult::new(trip).to_string();
/// assert!(output.contains("Created trip with ID: t1"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Trip> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created trip with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<ItineraryItem> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Added item with ID: {} on {}",
            self.resource.id,
            SlashDate(self.resource.date)
        )?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations, with an
/// optional list of the changes made.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }

    fn fmt_changes(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }
        writeln!(f)
    }
}

impl fmt::Display for UpdateResult<Trip> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated trip with ID: {}", self.resource.id)?;
        self.fmt_changes(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for UpdateResult<ItineraryItem> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated item with ID: {}", self.resource.id)?;
        self.fmt_changes(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Trip> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted trip '{}' (ID: {}) and its itinerary",
            self.resource.name, self.resource.id
        )
    }
}

impl fmt::Display for DeleteResult<ItineraryItem> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted item '{}' (ID: {})",
            self.resource.title, self.resource.id
        )
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::BucketNotFound { date } => {
                write!(f, "the trip has no day {}", SlashDate(*date))
            }
            SkipReason::ItemNotFound { id } => write!(f, "item '{id}' not found"),
            SkipReason::SourceIndexOutOfRange { date, index, len } => write!(
                f,
                "no item at position {index} on {} ({len} items)",
                SlashDate(*date)
            ),
            SkipReason::NoChange => write!(f, "nothing to change"),
        }
    }
}
