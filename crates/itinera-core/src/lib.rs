//! Core library for the Itinera travel planner.
//!
//! This crate stores trips and their day-by-day itineraries in a local
//! key-value store and provides the engine that creates, edits, deletes and
//! reorders itinerary items while keeping the stored structure consistent.
//!
//! # Layers
//!
//! - **Storage** ([`storage`], [`db`]): the [`storage::KeyValueStore`] seam,
//!   with a SQLite implementation and an in-memory one for tests
//! - **Repositories** ([`repository`]): typed JSON access to the `"trips"`
//!   key and to per-trip itineraries
//! - **Engine** ([`engine`]): [`engine::ItinerarySession`] and the move
//!   algorithm
//! - **Catalog** ([`catalog`]): trip create, edit and delete
//! - **Planner** ([`planner`]): async facade used by the CLI
//! - **Display** ([`display`]): markdown formatting of models and results
//!
//! # Quick Start
//!
//! ```rust
//! use itinera_core::{
//!     PlannerBuilder,
//!     params::{CreateTrip, Id},
//! };
//! use jiff::civil::date;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some("itinera-test.db"))
//!     .build()
//!     .await?;
//!
//! let trip = planner
//!     .create_trip(&CreateTrip {
//!         name: "Lisbon".to_string(),
//!         start_date: date(2025, 6, 1),
//!         end_date: date(2025, 6, 4),
//!         country: Some("Portugal".to_string()),
//!         cover_image: None,
//!     })
//!     .await?;
//! println!("{trip}");
//!
//! if let Some(view) = planner.show_itinerary(&Id { id: trip.id }).await? {
//!     println!("{view}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod dates;
pub mod db;
pub mod display;
pub mod engine;
pub mod error;
pub mod ids;
pub mod models;
pub mod params;
pub mod planner;
pub mod repository;
pub mod storage;

// Re-export commonly used types
pub use catalog::{TripCatalog, TripEdit};
pub use db::Database;
pub use display::{
    CreateResult, DeleteResult, OperationStatus, TripItinerary, Trips, UpdateResult,
};
pub use engine::{DragPreview, ItinerarySession, Mutation, SkipReason};
pub use error::{ItineraryError, Result};
pub use models::{DayBucket, ItemKind, Itinerary, ItineraryItem, Trip};
pub use params::{
    AddItem, CreateTrip, EditTrip, Id, MoveItem, MoveTarget, NewItem, RelocateItem, RemoveItem,
    UpdateItem,
};
pub use planner::{ItemChange, Planner, PlannerBuilder};
