//! Parameter structures for itinerary operations.
//!
//! These structures are shared by every interface (the CLI today) without
//! framework-specific derives. Interface layers define their own argument
//! types and convert into these with `From` implementations:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Engine
//! ```

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::{
    error::{ItineraryError, Result},
    models::ItemKind,
};

/// Generic parameters for operations requiring just an identifier.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The identifier of the resource to operate on
    pub id: String,
}

/// Parameters for creating a trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTrip {
    pub name: String,
    pub start_date: Date,
    pub end_date: Date,
    pub country: Option<String>,
    /// Inline image data or an external URL
    pub cover_image: Option<String>,
}

/// Parameters for editing a trip. Unset fields keep their current value;
/// an empty string clears an optional field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditTrip {
    pub id: String,
    pub name: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub country: Option<String>,
    pub cover_image: Option<String>,
}

/// Payload for a new itinerary item; the identifier is assigned on
/// creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewItem {
    pub title: String,
    /// Day to schedule the item on; must be one of the trip's days
    pub date: Date,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub kind: ItemKind,
    pub notes: Option<String>,
}

impl NewItem {
    /// Checks the fields a form would require.
    pub fn validate(&self) -> Result<()> {
        validate_title(&self.title)
    }
}

pub(crate) fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(ItineraryError::invalid_input("title").with_reason("Title must not be empty"));
    }
    Ok(())
}

/// Parameters for adding an item to a trip's itinerary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddItem {
    pub trip_id: String,
    #[serde(flatten)]
    pub item: NewItem,
}

/// Partial update of an item. Unset fields keep their current value; an
/// empty `notes` string clears the notes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateItem {
    pub trip_id: String,
    pub item_id: String,
    pub title: Option<String>,
    pub date: Option<Date>,
    pub location: Option<String>,
    pub kind: Option<ItemKind>,
    pub notes: Option<String>,
}

/// Parameters for deleting an item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemoveItem {
    pub trip_id: String,
    pub item_id: String,
}

/// Where a moved item lands in its target day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveTarget {
    /// Final position in the target day's list (clamped to its end)
    Index(usize),
    /// Immediately before the item with this identifier
    Before(String),
    /// After every item of the target day
    End,
}

/// A single move of one item, within a day or across days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveItem {
    pub source_date: Date,
    /// Position of the item in the source day's list
    pub source_index: usize,
    pub target_date: Date,
    pub target: MoveTarget,
}

/// Parameters for moving an item of a trip's itinerary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelocateItem {
    pub trip_id: String,
    #[serde(flatten)]
    pub movement: MoveItem,
}
