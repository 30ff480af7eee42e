//! Itinerary item model and category enumeration.

use std::str::FromStr;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// Closed set of itinerary item categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Meal,
    /// Sightseeing spot, the default for new items
    #[default]
    Attraction,
    Shopping,
    Transport,
    Other,
}

impl FromStr for ItemKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "meal" => Ok(ItemKind::Meal),
            "attraction" => Ok(ItemKind::Attraction),
            "shopping" => Ok(ItemKind::Shopping),
            "transport" => Ok(ItemKind::Transport),
            "other" => Ok(ItemKind::Other),
            _ => Err(format!("Invalid item type: {s}")),
        }
    }
}

impl ItemKind {
    /// All categories in display order.
    pub const ALL: [ItemKind; 5] = [
        ItemKind::Attraction,
        ItemKind::Meal,
        ItemKind::Shopping,
        ItemKind::Transport,
        ItemKind::Other,
    ];

    /// Stored string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Meal => "meal",
            ItemKind::Attraction => "attraction",
            ItemKind::Shopping => "shopping",
            ItemKind::Transport => "transport",
            ItemKind::Other => "other",
        }
    }

    /// Category with an icon, used on item cards.
    ///
    /// ```rust
    /// use itinera_core::models::ItemKind;
    ///
    /// assert_eq!(ItemKind::Meal.with_icon(), "🍜 Meal");
    /// assert_eq!(ItemKind::Transport.with_icon(), "🚆 Transport");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            ItemKind::Meal => "🍜 Meal",
            ItemKind::Attraction => "📍 Attraction",
            ItemKind::Shopping => "🛍 Shopping",
            ItemKind::Transport => "🚆 Transport",
            ItemKind::Other => "📌 Other",
        }
    }
}

/// A single planned activity inside a day bucket.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryItem {
    /// Unique identifier, assigned by the engine at creation
    pub id: String,

    /// Short title of the activity
    pub title: String,

    /// Owning day; always equal to the containing bucket's date
    #[serde(with = "crate::dates::lenient")]
    pub date: Date,

    /// Free-text location
    #[serde(default)]
    pub location: String,

    /// Category tag
    #[serde(rename = "type", default)]
    pub kind: ItemKind,

    /// Free-text notes
    #[serde(
        default,
        deserialize_with = "super::empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub notes: Option<String>,
}
