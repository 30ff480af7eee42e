//! Unpersisted drag state.

use jiff::civil::Date;
use log::debug;

use super::moves::apply_move;
use crate::{
    models::Itinerary,
    params::{MoveItem, MoveTarget},
};

/// An in-progress drag of one item.
///
/// Hovering rearranges a private copy of the itinerary so the caller can
/// render where the item would land. Nothing is written until the preview
/// is handed to [`super::ItinerarySession::commit_drag`]; dropping it or
/// calling [`DragPreview::cancel`] discards it.
#[derive(Debug, Clone)]
pub struct DragPreview {
    item_id: String,
    origin: (Date, usize),
    current: (Date, usize),
    preview: Itinerary,
}

impl DragPreview {
    pub(crate) fn start(itinerary: &Itinerary, date: Date, index: usize) -> Option<Self> {
        let item = itinerary.bucket(date)?.details.get(index)?;
        Some(Self {
            item_id: item.id.clone(),
            origin: (date, index),
            current: (date, index),
            preview: itinerary.clone(),
        })
    }

    /// Identifier of the dragged item.
    pub fn item_id(&self) -> &str {
        &self.item_id
    }

    /// Day and position the drag started from.
    pub fn origin(&self) -> (Date, usize) {
        self.origin
    }

    /// Day and position the item currently occupies in the preview.
    pub fn current(&self) -> (Date, usize) {
        self.current
    }

    /// The itinerary as it would look if the drag ended now.
    pub fn preview(&self) -> &Itinerary {
        &self.preview
    }

    /// Moves the dragged item within the preview. Returns whether the
    /// preview changed.
    pub fn hover(&mut self, target_date: Date, target: MoveTarget) -> bool {
        let request = MoveItem {
            source_date: self.current.0,
            source_index: self.current.1,
            target_date,
            target,
        };

        match apply_move(&mut self.preview, &request) {
            Ok(item) => {
                let position = self
                    .preview
                    .bucket(item.date)
                    .and_then(|bucket| bucket.position_of(&item.id));
                if let Some(position) = position {
                    self.current = (item.date, position);
                }
                true
            }
            Err(reason) => {
                debug!("Hover of '{}' ignored: {reason}", self.item_id);
                false
            }
        }
    }

    /// The single move that takes the persisted itinerary to this preview,
    /// or `None` when the item is back where it started.
    pub fn into_move(&self) -> Option<MoveItem> {
        if self.current == self.origin {
            return None;
        }
        Some(MoveItem {
            source_date: self.origin.0,
            source_index: self.origin.1,
            target_date: self.current.0,
            target: MoveTarget::Index(self.current.1),
        })
    }

    /// Abandons the drag.
    pub fn cancel(self) {
        debug!("Drag of '{}' cancelled", self.item_id);
    }
}
