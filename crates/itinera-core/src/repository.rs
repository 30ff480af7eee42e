//! Typed access to trips and itineraries on top of a [`KeyValueStore`].
//!
//! Both repositories treat stored JSON that fails to parse as "nothing
//! stored": a warning is logged and callers see `None` (or an empty trip
//! list) rather than an error.

use log::warn;
use serde::{Serialize, de::DeserializeOwned};

use crate::{
    error::{ItineraryError, Result},
    models::{Itinerary, Trip},
    storage::KeyValueStore,
};

/// Storage key of the trip collection.
pub const TRIPS_KEY: &str = "trips";

/// Persistence of per-trip itineraries, keyed by trip identifier.
pub trait ItineraryRepository {
    /// Loads the itinerary stored for `trip_id`.
    fn load(&self, trip_id: &str) -> Result<Option<Itinerary>>;

    /// Replaces the whole itinerary stored for `trip_id`.
    fn save(&mut self, trip_id: &str, itinerary: &Itinerary) -> Result<()>;

    /// Drops the itinerary stored for `trip_id`.
    fn discard(&mut self, trip_id: &str) -> Result<bool>;
}

/// Persistence of the trip collection.
pub trait TripRepository {
    /// Loads every trip, newest first.
    fn load_trips(&self) -> Result<Vec<Trip>>;

    /// Replaces the whole trip collection.
    fn save_trips(&mut self, trips: &[Trip]) -> Result<()>;
}

/// Repository implementation storing JSON documents in a key-value store.
#[derive(Debug)]
pub struct StoreRepository<S> {
    store: S,
}

impl<S: KeyValueStore> StoreRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let Some(raw) = self.store.get(key)? else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                warn!("Ignoring malformed data stored under '{key}': {e}");
                Ok(None)
            }
        }
    }

    fn write_json<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.store.set(key, &raw)
    }
}

fn ensure_itinerary_key(trip_id: &str) -> Result<()> {
    if trip_id.is_empty() || trip_id == TRIPS_KEY {
        return Err(ItineraryError::invalid_input("trip_id")
            .with_reason(format!("'{trip_id}' cannot be used as an itinerary key")));
    }
    Ok(())
}

impl<S: KeyValueStore> ItineraryRepository for StoreRepository<S> {
    fn load(&self, trip_id: &str) -> Result<Option<Itinerary>> {
        if trip_id == TRIPS_KEY {
            return Ok(None);
        }
        self.read_json(trip_id)
    }

    fn save(&mut self, trip_id: &str, itinerary: &Itinerary) -> Result<()> {
        ensure_itinerary_key(trip_id)?;
        self.write_json(trip_id, itinerary)
    }

    fn discard(&mut self, trip_id: &str) -> Result<bool> {
        ensure_itinerary_key(trip_id)?;
        self.store.remove(trip_id)
    }
}

impl<S: KeyValueStore> TripRepository for StoreRepository<S> {
    fn load_trips(&self) -> Result<Vec<Trip>> {
        Ok(self.read_json(TRIPS_KEY)?.unwrap_or_default())
    }

    fn save_trips(&mut self, trips: &[Trip]) -> Result<()> {
        self.write_json(TRIPS_KEY, trips)
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::storage::MemoryStore;

    fn sample_trip() -> Trip {
        Trip {
            id: "trip-1".to_string(),
            name: "Kyoto".to_string(),
            start_date: date(2025, 4, 1),
            end_date: date(2025, 4, 2),
            country: None,
            cover_image: None,
        }
    }

    #[test]
    fn test_trips_roundtrip_and_missing_key() {
        let mut repo = StoreRepository::new(MemoryStore::new());
        assert!(repo.load_trips().unwrap().is_empty());

        repo.save_trips(&[sample_trip()]).unwrap();
        assert_eq!(repo.load_trips().unwrap(), vec![sample_trip()]);
    }

    #[test]
    fn test_malformed_trips_read_as_empty() {
        let mut store = MemoryStore::new();
        store.set(TRIPS_KEY, "{not json").unwrap();
        let repo = StoreRepository::new(store);
        assert!(repo.load_trips().unwrap().is_empty());
    }

    #[test]
    fn test_itinerary_roundtrip_uses_trip_id_key() {
        let mut repo = StoreRepository::new(MemoryStore::new());
        let itinerary = Itinerary::from_range(date(2025, 4, 1), date(2025, 4, 2));

        repo.save("trip-1", &itinerary).unwrap();
        assert!(repo.store().raw("trip-1").unwrap().contains("\"weekDay\":\"Tue\""));
        assert_eq!(repo.load("trip-1").unwrap(), Some(itinerary));

        assert!(repo.discard("trip-1").unwrap());
        assert_eq!(repo.load("trip-1").unwrap(), None);
    }

    #[test]
    fn test_malformed_itinerary_reads_as_absent() {
        let mut store = MemoryStore::new();
        store.set("trip-1", "[{\"date\": 42}]").unwrap();
        let repo = StoreRepository::new(store);
        assert_eq!(repo.load("trip-1").unwrap(), None);
    }

    #[test]
    fn test_trips_key_is_not_an_itinerary() {
        let mut repo = StoreRepository::new(MemoryStore::new());
        let itinerary = Itinerary::default();
        assert!(matches!(
            repo.save(TRIPS_KEY, &itinerary),
            Err(ItineraryError::InvalidInput { .. })
        ));
        assert_eq!(repo.load(TRIPS_KEY).unwrap(), None);
    }
}
