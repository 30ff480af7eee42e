//! Display formatting for trips, itineraries and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! collections and operation outcomes get newtype wrappers so each context
//! can choose its own framing. Everything renders as markdown.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │    Wrappers     │    │   Formatted     │
//! │  (Trip, Item)   │───▶│ (Trips, Result) │───▶│    Markdown     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`collections`]: [`Trips`] and [`TripItinerary`]
//! - [`results`]: [`CreateResult`], [`UpdateResult`], [`DeleteResult`]
//! - [`status`]: [`OperationStatus`]
//! - [`datetime`]: [`SlashDate`] and [`ShortDate`]
//!
//! ```rust
//! use itinera_core::display::OperationStatus;
//!
//! let status = OperationStatus::skipped("nothing to change");
//! assert_eq!(status.to_string(), "Skipped: nothing to change\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{TripItinerary, Trips};
pub use datetime::{ShortDate, SlashDate};
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::{OperationStatus, StatusKind};
