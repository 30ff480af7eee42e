//! The per-trip itinerary: ordered day buckets with ordered items.

use std::{
    collections::HashSet,
    ops::{Index, IndexMut},
};

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{DayBucket, ItineraryItem};
use crate::dates;

/// Full itinerary structure stored under a trip's identifier.
///
/// This is always handled as a whole: the engine clones it, mutates the
/// clone and persists the result, so every observer sees a complete
/// snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Itinerary(pub Vec<DayBucket>);

impl Itinerary {
    /// Builds the initial empty itinerary for the inclusive range.
    pub fn from_range(start: Date, end: Date) -> Self {
        Self(
            dates::expand_range(start, end)
                .into_iter()
                .map(DayBucket::new)
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of day buckets.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DayBucket> {
        self.0.iter()
    }

    /// Dates of all buckets in order.
    pub fn dates(&self) -> Vec<Date> {
        self.0.iter().map(|bucket| bucket.date).collect()
    }

    /// Index of the bucket for `date`.
    pub fn bucket_index(&self, date: Date) -> Option<usize> {
        self.0.iter().position(|bucket| bucket.date == date)
    }

    /// The bucket for `date`.
    pub fn bucket(&self, date: Date) -> Option<&DayBucket> {
        self.0.iter().find(|bucket| bucket.date == date)
    }

    /// Finds an item anywhere in the itinerary, returning
    /// `(bucket_index, position)`.
    pub fn locate(&self, id: &str) -> Option<(usize, usize)> {
        self.0
            .iter()
            .enumerate()
            .find_map(|(b, bucket)| bucket.position_of(id).map(|p| (b, p)))
    }

    /// Finds an item by identifier.
    pub fn find_item(&self, id: &str) -> Option<&ItineraryItem> {
        self.locate(id).map(|(b, p)| &self.0[b].details[p])
    }

    /// Total number of items over all days.
    pub fn item_count(&self) -> usize {
        self.0.iter().map(DayBucket::len).sum()
    }

    /// Checks the structural invariants: bucket dates strictly increasing,
    /// every item dated like its bucket, and no identifier appearing twice.
    pub fn is_consistent(&self) -> bool {
        let ordered = self.0.windows(2).all(|pair| pair[0].date < pair[1].date);

        let mut seen = HashSet::new();
        let items_ok = self.0.iter().all(|bucket| {
            bucket
                .details
                .iter()
                .all(|item| item.date == bucket.date && seen.insert(item.id.as_str()))
        });

        ordered && items_ok
    }
}

impl Index<usize> for Itinerary {
    type Output = DayBucket;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IndexMut<usize> for Itinerary {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl IntoIterator for Itinerary {
    type Item = DayBucket;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Itinerary {
    type Item = &'a DayBucket;
    type IntoIter = std::slice::Iter<'a, DayBucket>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
