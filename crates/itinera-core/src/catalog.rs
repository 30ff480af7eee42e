//! The trip collection stored under the `"trips"` key.

use jiff::civil::Date;
use log::{debug, error, info};

use crate::{
    engine::reconcile_stored,
    error::{ItineraryError, Result},
    ids::{IdGenerator, UuidGenerator},
    models::Trip,
    params::{CreateTrip, EditTrip},
    repository::{ItineraryRepository, TripRepository},
};

/// A stored trip after an edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripEdit {
    pub trip: Trip,
    /// Whether the trip's stored itinerary was rebuilt for new dates
    pub replanned: bool,
}

/// Create, edit, delete and look up trips.
///
/// New trips are prepended so the collection reads newest first. Editing a
/// trip's dates reconciles its stored itinerary with the new range.
pub struct TripCatalog<R, G = UuidGenerator> {
    repo: R,
    ids: G,
}

impl<R, G> TripCatalog<R, G>
where
    R: TripRepository + ItineraryRepository,
    G: IdGenerator,
{
    pub fn new(repo: R, ids: G) -> Self {
        Self { repo, ids }
    }

    pub fn into_repository(self) -> R {
        self.repo
    }

    /// Every trip, newest first.
    pub fn list_trips(&self) -> Result<Vec<Trip>> {
        self.repo.load_trips()
    }

    pub fn get_trip(&self, id: &str) -> Result<Option<Trip>> {
        Ok(self.repo.load_trips()?.into_iter().find(|trip| trip.id == id))
    }

    pub fn create_trip(&mut self, params: CreateTrip) -> Result<Trip> {
        let trip = Trip {
            id: self.ids.next_id(),
            name: params.name.trim().to_string(),
            start_date: params.start_date,
            end_date: params.end_date,
            country: non_empty(params.country),
            cover_image: non_empty(params.cover_image),
        };
        validate_trip(&trip.name, trip.start_date, trip.end_date)?;

        let mut trips = self.repo.load_trips()?;
        trips.insert(0, trip.clone());
        self.repo.save_trips(&trips)?;

        info!("Created trip '{}' ({})", trip.name, trip.id);
        Ok(trip)
    }

    /// Applies the provided fields to a stored trip. Returns `Ok(None)` when
    /// no trip has the identifier.
    ///
    /// New dates are applied to the stored itinerary before the trip itself
    /// is saved. If saving the trip fails, the previous itinerary is put
    /// back so the trip and its days never disagree.
    pub fn edit_trip(&mut self, params: EditTrip) -> Result<Option<TripEdit>> {
        let mut trips = self.repo.load_trips()?;
        let Some(trip) = trips.iter_mut().find(|trip| trip.id == params.id) else {
            debug!("No trip with id '{}' to edit", params.id);
            return Ok(None);
        };

        let mut edited = trip.clone();
        if let Some(name) = params.name {
            edited.name = name.trim().to_string();
        }
        if let Some(start) = params.start_date {
            edited.start_date = start;
        }
        if let Some(end) = params.end_date {
            edited.end_date = end;
        }
        if let Some(country) = params.country {
            edited.country = non_empty(Some(country));
        }
        if let Some(cover) = params.cover_image {
            edited.cover_image = non_empty(Some(cover));
        }
        validate_trip(&edited.name, edited.start_date, edited.end_date)?;

        if edited == *trip {
            return Ok(Some(TripEdit {
                trip: edited,
                replanned: false,
            }));
        }

        let dates_changed =
            edited.start_date != trip.start_date || edited.end_date != trip.end_date;
        let replaced = if dates_changed {
            reconcile_stored(&mut self.repo, &edited)?
        } else {
            None
        };

        *trip = edited.clone();
        if let Err(e) = self.repo.save_trips(&trips) {
            if let Some(previous) = &replaced {
                if let Err(restore) = self.repo.save(&edited.id, previous) {
                    error!(
                        "Failed to restore itinerary of trip '{}': {restore}",
                        edited.id
                    );
                }
            }
            return Err(e);
        }

        info!("Updated trip '{}'", edited.id);
        Ok(Some(TripEdit {
            trip: edited,
            replanned: replaced.is_some(),
        }))
    }

    /// Removes a trip and its itinerary. Returns whether the trip existed.
    pub fn delete_trip(&mut self, id: &str) -> Result<bool> {
        let mut trips = self.repo.load_trips()?;
        let before = trips.len();
        trips.retain(|trip| trip.id != id);
        if trips.len() == before {
            debug!("No trip with id '{id}' to delete");
            return Ok(false);
        }

        self.repo.save_trips(&trips)?;
        self.repo.discard(id)?;

        info!("Deleted trip '{id}'");
        Ok(true)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn validate_trip(name: &str, start: Date, end: Date) -> Result<()> {
    if name.is_empty() {
        return Err(ItineraryError::invalid_input("name")
            .with_reason("Trip name must not be empty"));
    }
    if start > end {
        return Err(ItineraryError::invalid_input("end_date")
            .with_reason(format!("End date {end} is before start date {start}")));
    }
    Ok(())
}
