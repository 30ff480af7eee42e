//! Itinerary item operations for the Planner.
//!
//! Every method returns `Ok(None)` when the trip does not exist. Otherwise
//! the [`ItemChange`] carries the engine outcome and the itinerary as it
//! stands afterwards, whether or not anything changed.

use super::{DbRepository, Planner};
use crate::{
    engine::{ItinerarySession, Mutation, SkipReason},
    error::Result,
    ids::UuidGenerator,
    models::Itinerary,
    params::{AddItem, RelocateItem, RemoveItem, UpdateItem},
};

type Session = ItinerarySession<DbRepository, UuidGenerator>;

/// Outcome of an item operation.
#[derive(Debug, Clone)]
pub struct ItemChange {
    pub mutation: Mutation,
    pub itinerary: Itinerary,
}

impl Planner {
    /// Adds an item to the end of its day.
    pub async fn add_item(&self, params: &AddItem) -> Result<Option<ItemChange>> {
        let item = params.item.clone();
        self.with_session(params.trip_id.clone(), move |session| session.create_item(item))
            .await
    }

    /// Applies the provided fields to an existing item.
    pub async fn update_item(&self, params: &UpdateItem) -> Result<Option<ItemChange>> {
        let params = params.clone();
        self.with_session(params.trip_id.clone(), move |session| {
            let Some(current) = session.itinerary().find_item(&params.item_id) else {
                return Ok(Mutation::Skipped(SkipReason::ItemNotFound {
                    id: params.item_id,
                }));
            };

            let mut item = current.clone();
            if let Some(title) = params.title {
                item.title = title;
            }
            if let Some(date) = params.date {
                item.date = date;
            }
            if let Some(location) = params.location {
                item.location = location;
            }
            if let Some(kind) = params.kind {
                item.kind = kind;
            }
            if let Some(notes) = params.notes {
                item.notes = Some(notes).filter(|n| !n.is_empty());
            }
            session.edit_item(item)
        })
        .await
    }

    /// Deletes an item wherever it is in the itinerary.
    pub async fn remove_item(&self, params: &RemoveItem) -> Result<Option<ItemChange>> {
        let item_id = params.item_id.clone();
        self.with_session(params.trip_id.clone(), move |session| {
            match session.itinerary().find_item(&item_id).cloned() {
                Some(item) => session.delete_item(&item),
                None => Ok(Mutation::Skipped(SkipReason::ItemNotFound { id: item_id })),
            }
        })
        .await
    }

    /// Moves an item within or across days.
    pub async fn move_item(&self, params: &RelocateItem) -> Result<Option<ItemChange>> {
        let movement = params.movement.clone();
        self.with_session(params.trip_id.clone(), move |session| {
            session.move_item(&movement)
        })
        .await
    }

    async fn with_session<F>(&self, trip_id: String, work: F) -> Result<Option<ItemChange>>
    where
        F: FnOnce(&mut Session) -> Result<Mutation> + Send + 'static,
    {
        self.run(move |repo| {
            let Some(mut session) = ItinerarySession::open(repo, UuidGenerator, &trip_id)? else {
                return Ok(None);
            };
            let mutation = work(&mut session)?;
            Ok(Some(ItemChange {
                mutation,
                itinerary: session.itinerary().clone(),
            }))
        })
        .await
    }
}
