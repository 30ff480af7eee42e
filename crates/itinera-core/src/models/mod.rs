//! Data models for trips, day buckets and itinerary items.
//!
//! Every type here serializes to the camelCase JSON layout kept in the
//! key-value store:
//!
//! | Key        | Value                                                 |
//! |------------|-------------------------------------------------------|
//! | `"trips"`  | array of [`Trip`]                                     |
//! | `<tripId>` | [`Itinerary`]: array of `{ date, weekDay, details }`  |
//!
//! Display implementations for these models live in
//! [`crate::display::models`].
//!
//! # Examples
//!
//! ```rust
//! use itinera_core::models::{Itinerary, ItemKind, ItineraryItem};
//! use jiff::civil::date;
//!
//! let mut itinerary = Itinerary::from_range(date(2025, 1, 1), date(2025, 1, 3));
//! assert_eq!(itinerary.len(), 3);
//!
//! itinerary[1].details.push(ItineraryItem {
//!     id: "lunch".to_string(),
//!     title: "Lunch".to_string(),
//!     date: date(2025, 1, 2),
//!     location: "Night market".to_string(),
//!     kind: ItemKind::Meal,
//!     notes: None,
//! });
//! assert_eq!(itinerary.locate("lunch"), Some((1, 0)));
//! assert!(itinerary.is_consistent());
//! ```

pub mod day;
pub mod item;
pub mod itinerary;
pub mod trip;


pub use day::DayBucket;
pub use item::{ItemKind, ItineraryItem};
pub use itinerary::Itinerary;
pub use trip::Trip;

/// Reads an optional string, treating `""` as absent.
///
/// The web front-end stored untouched form fields as empty strings.
pub(crate) fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;

    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}
