//! Trip operations for the Planner.

use super::Planner;
use crate::{
    catalog::{TripCatalog, TripEdit},
    dates,
    display::{TripItinerary, Trips},
    engine::ItinerarySession,
    error::Result,
    ids::UuidGenerator,
    models::Trip,
    params::{CreateTrip, EditTrip, Id},
};

impl Planner {
    /// Creates a trip and puts it at the top of the list.
    pub async fn create_trip(&self, params: &CreateTrip) -> Result<Trip> {
        let params = params.clone();
        self.run(move |repo| TripCatalog::new(repo, UuidGenerator).create_trip(params))
            .await
    }

    /// Lists every trip, newest first.
    pub async fn list_trips(&self) -> Result<Trips> {
        self.run(|repo| TripCatalog::new(repo, UuidGenerator).list_trips())
            .await
            .map(Trips)
    }

    /// Retrieves a trip by its ID.
    pub async fn get_trip(&self, params: &Id) -> Result<Option<Trip>> {
        let id = params.id.clone();
        self.run(move |repo| TripCatalog::new(repo, UuidGenerator).get_trip(&id))
            .await
    }

    /// Edits a trip; a changed date range also reconciles its itinerary.
    pub async fn edit_trip(&self, params: &EditTrip) -> Result<Option<TripEdit>> {
        let params = params.clone();
        self.run(move |repo| TripCatalog::new(repo, UuidGenerator).edit_trip(params))
            .await
    }

    /// Deletes a trip and its itinerary, returning the removed trip.
    pub async fn delete_trip(&self, params: &Id) -> Result<Option<Trip>> {
        let id = params.id.clone();
        self.run(move |repo| {
            let mut catalog = TripCatalog::new(repo, UuidGenerator);
            let Some(trip) = catalog.get_trip(&id)? else {
                return Ok(None);
            };
            catalog.delete_trip(&id)?;
            Ok(Some(trip))
        })
        .await
    }

    /// Loads a trip's itinerary, initializing it on first access.
    pub async fn show_itinerary(&self, params: &Id) -> Result<Option<TripItinerary>> {
        let id = params.id.clone();
        self.run(move |repo| {
            let Some(session) = ItinerarySession::open(repo, UuidGenerator, &id)? else {
                return Ok(None);
            };
            Ok(Some(TripItinerary {
                trip: session.trip().clone(),
                itinerary: session.itinerary().clone(),
                today: Some(dates::today()),
            }))
        })
        .await
    }
}
