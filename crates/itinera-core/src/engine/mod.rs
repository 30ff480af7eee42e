//! Itinerary store and reorder engine.
//!
//! An [`ItinerarySession`] holds the last persisted snapshot of one trip's
//! itinerary. Every mutation runs against a clone of that snapshot; the
//! clone is written back whole through the [`ItineraryRepository`] and only
//! then replaces the snapshot and is published to subscribers. A mutation
//! that cannot apply (missing bucket, unknown item, nothing to do) is not an
//! error: it comes back as [`Mutation::Skipped`] and nothing is written.
//!
//! # Examples
//!
//! ```rust
//! use itinera_core::{
//!     engine::ItinerarySession,
//!     ids::SequentialIds,
//!     models::{ItemKind, Trip},
//!     params::NewItem,
//!     repository::{StoreRepository, TripRepository},
//!     storage::MemoryStore,
//! };
//! use jiff::civil::date;
//!
//! let mut repo = StoreRepository::new(MemoryStore::new());
//! repo.save_trips(&[Trip {
//!     id: "tokyo".into(),
//!     name: "Tokyo".into(),
//!     start_date: date(2025, 1, 1),
//!     end_date: date(2025, 1, 3),
//!     country: None,
//!     cover_image: None,
//! }])?;
//!
//! let mut session = ItinerarySession::open(repo, SequentialIds::new("item"), "tokyo")?
//!     .expect("trip exists");
//! assert_eq!(session.itinerary().len(), 3);
//!
//! let outcome = session.create_item(NewItem {
//!     title: "Lunch".into(),
//!     date: date(2025, 1, 2),
//!     location: String::new(),
//!     kind: ItemKind::Meal,
//!     notes: None,
//! })?;
//! assert!(outcome.is_applied());
//! assert_eq!(session.itinerary()[1].details[0].id, "item-1");
//! # Ok::<(), itinera_core::error::ItineraryError>(())
//! ```

mod drag;
mod moves;
mod reconcile;


pub use drag::DragPreview;
pub use reconcile::{reconcile, reconcile_stored};

use jiff::civil::Date;
use log::{debug, error, info};
use tokio::sync::watch;

use crate::{
    error::Result,
    ids::{IdGenerator, UuidGenerator},
    models::{Itinerary, ItineraryItem, Trip},
    params::{MoveItem, MoveTarget, NewItem, validate_title},
    repository::{ItineraryRepository, TripRepository},
};

/// Why a mutation left the itinerary untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// No day bucket exists for the date
    BucketNotFound { date: Date },
    /// No item with this identifier where it was looked up
    ItemNotFound { id: String },
    /// Source position beyond the end of the source day
    SourceIndexOutOfRange { date: Date, index: usize, len: usize },
    /// The mutation would leave the itinerary as it is
    NoChange,
}

/// Outcome of a single engine mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    /// Persisted and published; carries the affected item as it now is
    /// (or as it was, for deletions)
    Applied(ItineraryItem),
    /// Nothing was written
    Skipped(SkipReason),
}

impl Mutation {
    pub fn is_applied(&self) -> bool {
        matches!(self, Mutation::Applied(_))
    }

    pub fn item(&self) -> Option<&ItineraryItem> {
        match self {
            Mutation::Applied(item) => Some(item),
            Mutation::Skipped(_) => None,
        }
    }

    pub fn skip_reason(&self) -> Option<&SkipReason> {
        match self {
            Mutation::Applied(_) => None,
            Mutation::Skipped(reason) => Some(reason),
        }
    }
}

type Change = std::result::Result<ItineraryItem, SkipReason>;

/// Editing session over one trip's itinerary.
pub struct ItinerarySession<R, G = UuidGenerator> {
    repo: R,
    ids: G,
    trip: Trip,
    itinerary: Itinerary,
    publisher: watch::Sender<Itinerary>,
}

impl<R, G> ItinerarySession<R, G>
where
    R: ItineraryRepository + TripRepository,
    G: IdGenerator,
{
    /// Opens the itinerary of `trip_id`, initializing it on first access.
    ///
    /// Returns `Ok(None)` when no such trip exists; nothing is written in
    /// that case. A missing or unreadable itinerary is rebuilt from the
    /// trip's date range and persisted before the session is returned.
    pub fn open(mut repo: R, ids: G, trip_id: &str) -> Result<Option<Self>> {
        let Some(trip) = repo
            .load_trips()?
            .into_iter()
            .find(|trip| trip.id == trip_id)
        else {
            debug!("No trip with id '{trip_id}', itinerary not opened");
            return Ok(None);
        };

        let itinerary = match repo.load(trip_id)? {
            Some(itinerary) => itinerary,
            None => {
                let itinerary = Itinerary::from_range(trip.start_date, trip.end_date);
                repo.save(trip_id, &itinerary)?;
                info!(
                    "Initialized itinerary for trip '{trip_id}' with {} days",
                    itinerary.len()
                );
                itinerary
            }
        };

        let (publisher, _) = watch::channel(itinerary.clone());
        Ok(Some(Self {
            repo,
            ids,
            trip,
            itinerary,
            publisher,
        }))
    }
}

impl<R, G> ItinerarySession<R, G>
where
    R: ItineraryRepository,
    G: IdGenerator,
{
    pub fn trip(&self) -> &Trip {
        &self.trip
    }

    /// The last successfully persisted snapshot.
    pub fn itinerary(&self) -> &Itinerary {
        &self.itinerary
    }

    /// Receives every snapshot published after a successful write.
    pub fn subscribe(&self) -> watch::Receiver<Itinerary> {
        self.publisher.subscribe()
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Direct access to the underlying repository. Writes made through it
    /// bypass the session snapshot.
    pub fn repository_mut(&mut self) -> &mut R {
        &mut self.repo
    }

    pub fn into_repository(self) -> R {
        self.repo
    }

    /// Appends a new item to the end of the day matching `item.date`.
    pub fn create_item(&mut self, item: NewItem) -> Result<Mutation> {
        item.validate()?;

        self.apply("create", |itinerary, ids| {
            let bucket = itinerary
                .bucket_index(item.date)
                .ok_or(SkipReason::BucketNotFound { date: item.date })?;

            let created = ItineraryItem {
                id: ids.next_id(),
                title: item.title,
                date: item.date,
                location: item.location,
                kind: item.kind,
                notes: item.notes.filter(|notes| !notes.is_empty()),
            };
            itinerary[bucket].details.push(created.clone());
            Ok(created)
        })
    }

    /// Replaces an existing item.
    ///
    /// When the date is unchanged the item keeps its position. When it
    /// changes, the item leaves its old day and is appended to the new one;
    /// a new date outside the trip is rejected and the item stays put.
    pub fn edit_item(&mut self, item: ItineraryItem) -> Result<Mutation> {
        validate_title(&item.title)?;

        self.apply("edit", |itinerary, _| {
            let (bucket, position) = itinerary
                .locate(&item.id)
                .ok_or_else(|| SkipReason::ItemNotFound {
                    id: item.id.clone(),
                })?;

            if itinerary[bucket].date == item.date {
                let current = &mut itinerary[bucket].details[position];
                if *current == item {
                    return Err(SkipReason::NoChange);
                }
                *current = item.clone();
                return Ok(item);
            }

            let target = itinerary
                .bucket_index(item.date)
                .ok_or(SkipReason::BucketNotFound { date: item.date })?;
            itinerary[bucket].details.remove(position);
            itinerary[target].details.push(item.clone());
            Ok(item)
        })
    }

    /// Removes the item from the day given by its own `date`.
    pub fn delete_item(&mut self, item: &ItineraryItem) -> Result<Mutation> {
        self.apply("delete", |itinerary, _| {
            let bucket = itinerary
                .bucket_index(item.date)
                .ok_or(SkipReason::BucketNotFound { date: item.date })?;
            let position =
                itinerary[bucket]
                    .position_of(&item.id)
                    .ok_or_else(|| SkipReason::ItemNotFound {
                        id: item.id.clone(),
                    })?;
            Ok(itinerary[bucket].details.remove(position))
        })
    }

    /// Moves one item within a day or to another day.
    pub fn move_item(&mut self, request: &MoveItem) -> Result<Mutation> {
        self.apply("move", |itinerary, _| moves::apply_move(itinerary, request))
    }

    /// Moves one item to sit immediately before `anchor_id` in the target
    /// day.
    pub fn move_item_before(
        &mut self,
        source_date: Date,
        source_index: usize,
        target_date: Date,
        anchor_id: &str,
    ) -> Result<Mutation> {
        self.move_item(&MoveItem {
            source_date,
            source_index,
            target_date,
            target: MoveTarget::Before(anchor_id.to_string()),
        })
    }

    /// Starts an unpersisted drag of the item at `index` on `date`.
    pub fn begin_drag(&self, date: Date, index: usize) -> Option<DragPreview> {
        DragPreview::start(&self.itinerary, date, index)
    }

    /// Persists a drag as a single move from its origin to its last hovered
    /// position.
    pub fn commit_drag(&mut self, preview: DragPreview) -> Result<Mutation> {
        let Some(request) = preview.into_move() else {
            debug!("Drag of '{}' ended where it started", preview.item_id());
            return Ok(Mutation::Skipped(SkipReason::NoChange));
        };

        // The session may have changed since the drag started
        let origin_matches = self
            .itinerary
            .bucket(request.source_date)
            .and_then(|bucket| bucket.details.get(request.source_index))
            .is_some_and(|item| item.id == preview.item_id());
        if !origin_matches {
            debug!("Drag of '{}' is stale, not committed", preview.item_id());
            return Ok(Mutation::Skipped(SkipReason::ItemNotFound {
                id: preview.item_id().to_string(),
            }));
        }

        self.move_item(&request)
    }

    fn apply<F>(&mut self, operation: &str, change: F) -> Result<Mutation>
    where
        F: FnOnce(&mut Itinerary, &mut G) -> Change,
    {
        let mut next = self.itinerary.clone();
        let item = match change(&mut next, &mut self.ids) {
            Ok(item) => item,
            Err(reason) => {
                debug!(
                    "Skipped {operation} on trip '{}': {reason}",
                    self.trip.id
                );
                return Ok(Mutation::Skipped(reason));
            }
        };

        if let Err(e) = self.repo.save(&self.trip.id, &next) {
            error!(
                "Failed to persist {operation} on trip '{}': {e}",
                self.trip.id
            );
            return Err(e);
        }

        self.publisher.send_replace(next.clone());
        self.itinerary = next;
        Ok(Mutation::Applied(item))
    }
}
