//! Collection wrapper types for displaying groups of domain objects.

use std::{fmt, ops::Index};

use jiff::civil::Date;

use super::{datetime::SlashDate, models::fmt_details};
use crate::models::{Itinerary, Trip};

/// Newtype wrapper for displaying the trip dashboard.
///
/// # Examples
///
/// ```rust
/// use itinera_core::{display::Trips, models::Trip};
/// use jiff::civil::date;
///
/// let trips = Trips(vec![Trip {
///     id: "t1".to_string(),
///     name: "Kyoto".to_string(),
///     start_date: date(2025, 4, 1),
///     end_date: date(2025, 4, 5),
///     country: None,
///     cover_image: None,
/// }]);
/// assert!(trips.to_string().contains("## Kyoto (ID: t1)"));
/// assert_eq!(Trips(vec![]).to_string(), "No trips found.\n");
/// ```
pub struct Trips(pub Vec<Trip>);

impl Trips {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Trip> {
        self.0.iter()
    }
}

impl Index<usize> for Trips {
    type Output = Trip;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a Trips {
    type Item = &'a Trip;
    type IntoIter = std::slice::Iter<'a, Trip>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Trips {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No trips found.");
        }
        for trip in &self.0 {
            write!(f, "{trip}")?;
        }
        Ok(())
    }
}

/// A trip together with its day-by-day itinerary.
///
/// Days are numbered from 1; the day matching `today` is marked.
pub struct TripItinerary {
    pub trip: Trip,
    pub itinerary: Itinerary,
    pub today: Option<Date>,
}

impl fmt::Display for TripItinerary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.trip.name)?;
        writeln!(f)?;
        writeln!(f, "- **ID**: {}", self.trip.id)?;
        self.trip.fmt_metadata(f)?;
        writeln!(f)?;

        for (index, bucket) in self.itinerary.iter().enumerate() {
            let marker = if self.today == Some(bucket.date) {
                " · today"
            } else {
                ""
            };
            writeln!(
                f,
                "## Day {} · {} ({}){marker}",
                index + 1,
                SlashDate(bucket.date),
                bucket.week_day
            )?;
            writeln!(f)?;
            fmt_details(f, bucket)?;
        }
        Ok(())
    }
}
