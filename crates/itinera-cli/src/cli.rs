//! Command-line argument wrappers.
//!
//! Each subcommand has a clap `Args` struct converted into the matching
//! core parameter type with `From`, so the core stays free of clap:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Planner
//! ```
//!
//! Positions are 1-based on the command line, matching the numbering in
//! the itinerary view, and 0-based in the core.

use clap::{Args, Subcommand, ValueEnum};
use itinera_core::{dates, models::ItemKind, params::*};
use jiff::civil::Date;

fn parse_date_arg(value: &str) -> Result<Date, String> {
    dates::parse_date(value).map_err(|e| e.to_string())
}

fn parse_position(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) | Err(_) => Err(format!("'{value}' is not a position (1, 2, ...)")),
        Ok(n) => Ok(n - 1),
    }
}

// ============================================================================
// Trip commands
// ============================================================================

/// Create a new trip
#[derive(Args)]
pub struct CreateTripArgs {
    /// Name of the trip
    pub name: String,
    /// First day (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date_arg)]
    pub start: Date,
    /// Last day, inclusive (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date_arg)]
    pub end: Date,
    /// Country the trip starts from
    #[arg(long)]
    pub country: Option<String>,
    /// Cover image URL
    #[arg(long)]
    pub cover: Option<String>,
}

impl From<CreateTripArgs> for CreateTrip {
    fn from(val: CreateTripArgs) -> Self {
        CreateTrip {
            name: val.name,
            start_date: val.start,
            end_date: val.end,
            country: val.country,
            cover_image: val.cover,
        }
    }
}

/// Show a trip with its day-by-day itinerary
#[derive(Args)]
pub struct ShowTripArgs {
    /// ID of the trip to show
    pub id: String,
}

impl From<ShowTripArgs> for Id {
    fn from(val: ShowTripArgs) -> Self {
        Id { id: val.id }
    }
}

/// Edit a trip
///
/// Changing the dates re-plans the itinerary: items on days that fall
/// outside the new range move to the nearest remaining day.
#[derive(Args)]
pub struct EditTripArgs {
    /// ID of the trip to edit
    pub id: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long, value_parser = parse_date_arg)]
    pub start: Option<Date>,
    #[arg(long, value_parser = parse_date_arg)]
    pub end: Option<Date>,
    /// Country label; an empty value clears it
    #[arg(long)]
    pub country: Option<String>,
    /// Cover image URL; an empty value clears it
    #[arg(long)]
    pub cover: Option<String>,
}

impl From<EditTripArgs> for EditTrip {
    fn from(val: EditTripArgs) -> Self {
        EditTrip {
            id: val.id,
            name: val.name,
            start_date: val.start,
            end_date: val.end,
            country: val.country,
            cover_image: val.cover,
        }
    }
}

/// Delete a trip and its itinerary
#[derive(Args)]
pub struct DeleteTripArgs {
    /// ID of the trip to delete
    pub id: String,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

#[derive(Subcommand)]
pub enum TripCommands {
    /// Create a new trip
    #[command(alias = "c")]
    Create(CreateTripArgs),
    /// List all trips, newest first
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show a trip's itinerary
    #[command(alias = "s")]
    Show(ShowTripArgs),
    /// Edit a trip
    #[command(alias = "e")]
    Edit(EditTripArgs),
    /// Delete a trip permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteTripArgs),
}

// ============================================================================
// Item commands
// ============================================================================

/// Item category as accepted on the command line
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ItemKindArg {
    Meal,
    Attraction,
    Shopping,
    Transport,
    Other,
}

impl std::fmt::Display for ItemKindArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", ItemKind::from(*self))
    }
}

impl From<ItemKindArg> for ItemKind {
    fn from(val: ItemKindArg) -> Self {
        match val {
            ItemKindArg::Meal => ItemKind::Meal,
            ItemKindArg::Attraction => ItemKind::Attraction,
            ItemKindArg::Shopping => ItemKind::Shopping,
            ItemKindArg::Transport => ItemKind::Transport,
            ItemKindArg::Other => ItemKind::Other,
        }
    }
}

/// Add an item to the end of a day
#[derive(Args)]
pub struct AddItemArgs {
    /// ID of the trip
    pub trip_id: String,
    /// Title of the item
    pub title: String,
    /// Day to schedule the item on (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date_arg)]
    pub date: Date,
    #[arg(long = "type", value_enum, default_value_t = ItemKindArg::Attraction)]
    pub kind: ItemKindArg,
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
}

impl From<AddItemArgs> for AddItem {
    fn from(val: AddItemArgs) -> Self {
        AddItem {
            trip_id: val.trip_id,
            item: NewItem {
                title: val.title,
                date: val.date,
                location: val.location.unwrap_or_default(),
                kind: val.kind.into(),
                notes: val.notes,
            },
        }
    }
}

/// Edit an item
///
/// Changing the date moves the item to the end of the new day.
#[derive(Args)]
pub struct EditItemArgs {
    /// ID of the trip
    pub trip_id: String,
    /// ID of the item
    pub item_id: String,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long, value_parser = parse_date_arg)]
    pub date: Option<Date>,
    #[arg(long = "type", value_enum)]
    pub kind: Option<ItemKindArg>,
    #[arg(long)]
    pub location: Option<String>,
    /// Notes; an empty value clears them
    #[arg(long)]
    pub notes: Option<String>,
}

impl From<EditItemArgs> for UpdateItem {
    fn from(val: EditItemArgs) -> Self {
        UpdateItem {
            trip_id: val.trip_id,
            item_id: val.item_id,
            title: val.title,
            date: val.date,
            location: val.location,
            kind: val.kind.map(Into::into),
            notes: val.notes,
        }
    }
}

/// Delete an item
#[derive(Args)]
pub struct DeleteItemArgs {
    /// ID of the trip
    pub trip_id: String,
    /// ID of the item
    pub item_id: String,
}

impl From<DeleteItemArgs> for RemoveItem {
    fn from(val: DeleteItemArgs) -> Self {
        RemoveItem {
            trip_id: val.trip_id,
            item_id: val.item_id,
        }
    }
}

/// Move an item within a day or to another day
///
/// Without --position or --before the item goes to the end of the target
/// day. --position is the item's place after the move.
#[derive(Args)]
pub struct MoveItemArgs {
    /// ID of the trip
    pub trip_id: String,
    /// Day the item is on (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date_arg)]
    pub from: Date,
    /// Position of the item on that day (1-based)
    #[arg(long, value_parser = parse_position)]
    pub index: usize,
    /// Day to move the item to; defaults to the same day
    #[arg(long, value_parser = parse_date_arg)]
    pub to: Option<Date>,
    /// Position on the target day after the move (1-based)
    #[arg(long, value_parser = parse_position, conflicts_with = "before")]
    pub position: Option<usize>,
    /// Place the item right before the item with this ID
    #[arg(long)]
    pub before: Option<String>,
}

impl From<MoveItemArgs> for RelocateItem {
    fn from(val: MoveItemArgs) -> Self {
        let target = match (val.position, val.before) {
            (Some(position), _) => MoveTarget::Index(position),
            (None, Some(anchor)) => MoveTarget::Before(anchor),
            (None, None) => MoveTarget::End,
        };
        RelocateItem {
            trip_id: val.trip_id,
            movement: MoveItem {
                source_date: val.from,
                source_index: val.index,
                target_date: val.to.unwrap_or(val.from),
                target,
            },
        }
    }
}

#[derive(Subcommand)]
pub enum ItemCommands {
    /// Add an item to a day
    #[command(alias = "a")]
    Add(AddItemArgs),
    /// Edit an item
    #[command(alias = "e")]
    Edit(EditItemArgs),
    /// Delete an item
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteItemArgs),
    /// Move an item within or across days
    #[command(alias = "m")]
    Move(MoveItemArgs),
}
