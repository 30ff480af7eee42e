//! Async facade over the catalog and the itinerary engine.
//!
//! The [`Planner`] is what interfaces talk to. Each call opens its own
//! SQLite connection on a blocking thread, runs one catalog or engine
//! operation against it and returns owned results:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │     Planner     │    │  TripCatalog /  │    │    Database     │
//! │ (trip_ops,      │───▶│ ItinerarySession│───▶│  (kv_store via  │
//! │  item_ops)      │    │                 │    │   db/)          │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!     async API            Business Logic         Data Persistence
//! ```
//!
//! - [`builder`]: creates [`Planner`] instances and resolves the database path
//! - [`trip_ops`]: trip CRUD and the itinerary view
//! - [`item_ops`]: item create, edit, delete and move
//!
//! # Examples
//!
//! ```rust
//! use itinera_core::{
//!     PlannerBuilder,
//!     models::ItemKind,
//!     params::{AddItem, CreateTrip, Id, NewItem},
//! };
//! use jiff::civil::date;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let dir = tempfile::tempdir()?;
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some(dir.path().join("itinera.db")))
//!     .build()
//!     .await?;
//!
//! let trip = planner
//!     .create_trip(&CreateTrip {
//!         name: "Osaka".to_string(),
//!         start_date: date(2025, 1, 1),
//!         end_date: date(2025, 1, 3),
//!         country: None,
//!         cover_image: None,
//!     })
//!     .await?;
//!
//! planner
//!     .add_item(&AddItem {
//!         trip_id: trip.id.clone(),
//!         item: NewItem {
//!             title: "Kuromon market".to_string(),
//!             date: date(2025, 1, 2),
//!             location: String::new(),
//!             kind: ItemKind::Meal,
//!             notes: None,
//!         },
//!     })
//!     .await?;
//!
//! let view = planner.show_itinerary(&Id { id: trip.id }).await?;
//! assert_eq!(view.map(|v| v.itinerary.item_count()), Some(1));
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use tokio::task;

use crate::{
    db::Database,
    error::{Result, ResultExt},
    repository::StoreRepository,
};

pub mod builder;
pub mod item_ops;
pub mod trip_ops;

#[cfg(test)]
mod tests;

pub use builder::PlannerBuilder;
pub use item_ops::ItemChange;

/// Repository type every planner call works against.
pub(crate) type DbRepository = StoreRepository<Database>;

/// Main planner interface for managing trips and their itineraries.
pub struct Planner {
    pub(crate) db_path: PathBuf,
}

impl Planner {
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Path of the SQLite database backing this planner.
    pub fn database_path(&self) -> &std::path::Path {
        &self.db_path
    }

    /// Runs `work` on a blocking thread against a fresh connection.
    pub(crate) async fn run<T, F>(&self, work: F) -> Result<T>
    where
        F: FnOnce(DbRepository) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            work(StoreRepository::new(db))
        })
        .await
        .with_context("Task join error")?
    }
}
