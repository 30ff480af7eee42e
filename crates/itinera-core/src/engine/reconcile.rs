//! Re-expansion of an itinerary after its trip's date range changes.

use jiff::civil::Date;
use log::info;

use crate::{
    error::Result,
    models::{Itinerary, ItineraryItem, Trip},
    repository::ItineraryRepository,
};

/// Rebuilds `itinerary` over the inclusive range `[start, end]`.
///
/// Items on days still inside the range stay on their day in their order.
/// Items that fall before the range are appended to the first day, items
/// after it to the last day, keeping their relative order. Returns an
/// empty itinerary when the range is empty.
pub fn reconcile(itinerary: &Itinerary, start: Date, end: Date) -> Itinerary {
    let mut reconciled = Itinerary::from_range(start, end);
    if reconciled.is_empty() {
        return reconciled;
    }

    let mut early: Vec<ItineraryItem> = Vec::new();
    let mut late: Vec<ItineraryItem> = Vec::new();

    for bucket in itinerary {
        if bucket.date < start {
            early.extend(bucket.details.iter().cloned());
        } else if bucket.date > end {
            late.extend(bucket.details.iter().cloned());
        } else if let Some(index) = reconciled.bucket_index(bucket.date) {
            reconciled[index]
                .details
                .extend(bucket.details.iter().cloned());
        }
    }

    let last = reconciled.len() - 1;
    for (index, orphans) in [(0, early), (last, late)] {
        let date = reconciled[index].date;
        reconciled[index]
            .details
            .extend(orphans.into_iter().map(|item| ItineraryItem { date, ..item }));
    }

    reconciled
}

/// Reconciles the stored itinerary of `trip` with the trip's current
/// dates. Returns the itinerary it replaced, or `None` when nothing was
/// written.
///
/// A trip whose itinerary was never opened has nothing to reconcile; it
/// is expanded from the new range on first access.
pub fn reconcile_stored<R>(repo: &mut R, trip: &Trip) -> Result<Option<Itinerary>>
where
    R: ItineraryRepository + ?Sized,
{
    let Some(stored) = repo.load(&trip.id)? else {
        return Ok(None);
    };

    let reconciled = reconcile(&stored, trip.start_date, trip.end_date);
    if reconciled == stored {
        return Ok(None);
    }

    repo.save(&trip.id, &reconciled)?;
    info!(
        "Reconciled itinerary of trip '{}' to {} days",
        trip.id,
        reconciled.len()
    );
    Ok(Some(stored))
}
