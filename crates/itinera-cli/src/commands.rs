//! Command handlers: run a planner operation and render its result.

use anyhow::{Result, bail};
use itinera_core::{
    ItemChange, Mutation, Planner, TripEdit,
    display::{CreateResult, DeleteResult, OperationStatus, SlashDate, UpdateResult},
    params::{AddItem, CreateTrip, EditTrip, Id, RelocateItem, RemoveItem, UpdateItem},
};
use log::debug;

use crate::{
    cli::{ItemCommands, TripCommands},
    renderer::TerminalRenderer,
};

/// Which item operation produced an [`ItemChange`].
#[derive(Clone, Copy)]
enum ItemAction {
    Add,
    Edit,
    Delete,
    Move,
}

pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    pub async fn handle_trip_command(&self, command: TripCommands) -> Result<()> {
        match command {
            TripCommands::Create(args) => self.create_trip(&args.into()).await,
            TripCommands::List => self.list_trips().await,
            TripCommands::Show(args) => self.show_trip(&args.into()).await,
            TripCommands::Edit(args) => self.edit_trip(&args.into()).await,
            TripCommands::Delete(args) => {
                if !args.confirm {
                    bail!(
                        "Refusing to delete trip '{}' without --confirm",
                        args.id
                    );
                }
                self.delete_trip(&Id { id: args.id }).await
            }
        }
    }

    pub async fn handle_item_command(&self, command: ItemCommands) -> Result<()> {
        match command {
            ItemCommands::Add(args) => self.add_item(&args.into()).await,
            ItemCommands::Edit(args) => self.edit_item(&args.into()).await,
            ItemCommands::Delete(args) => self.delete_item(&args.into()).await,
            ItemCommands::Move(args) => self.move_item(&args.into()).await,
        }
    }

    pub async fn list_trips(&self) -> Result<()> {
        let trips = self.planner.list_trips().await?;
        let mut output = String::from("# Trips\n\n");
        output.push_str(&trips.to_string());
        self.renderer.render(&output)
    }

    async fn create_trip(&self, params: &CreateTrip) -> Result<()> {
        let trip = self.planner.create_trip(params).await?;
        self.renderer.render(&CreateResult::new(trip).to_string())
    }

    async fn show_trip(&self, params: &Id) -> Result<()> {
        match self.planner.show_itinerary(params).await? {
            Some(view) => self.renderer.render(&view.to_string()),
            None => bail!("Trip '{}' not found", params.id),
        }
    }

    async fn edit_trip(&self, params: &EditTrip) -> Result<()> {
        let Some(TripEdit { trip, replanned }) = self.planner.edit_trip(params).await? else {
            bail!("Trip '{}' not found", params.id);
        };

        let mut changes = Vec::new();
        if replanned {
            changes.push("Itinerary re-planned for the new dates".to_string());
        }
        self.renderer
            .render(&UpdateResult::with_changes(trip, changes).to_string())
    }

    async fn delete_trip(&self, params: &Id) -> Result<()> {
        match self.planner.delete_trip(params).await? {
            Some(trip) => self.renderer.render(&DeleteResult::new(trip).to_string()),
            None => bail!("Trip '{}' not found", params.id),
        }
    }

    async fn add_item(&self, params: &AddItem) -> Result<()> {
        let change = self.planner.add_item(params).await?;
        self.render_change(&params.trip_id, change, ItemAction::Add)
    }

    async fn edit_item(&self, params: &UpdateItem) -> Result<()> {
        let change = self.planner.update_item(params).await?;
        self.render_change(&params.trip_id, change, ItemAction::Edit)
    }

    async fn delete_item(&self, params: &RemoveItem) -> Result<()> {
        let change = self.planner.remove_item(params).await?;
        self.render_change(&params.trip_id, change, ItemAction::Delete)
    }

    async fn move_item(&self, params: &RelocateItem) -> Result<()> {
        let change = self.planner.move_item(params).await?;
        self.render_change(&params.trip_id, change, ItemAction::Move)
    }

    fn render_change(
        &self,
        trip_id: &str,
        change: Option<ItemChange>,
        action: ItemAction,
    ) -> Result<()> {
        let Some(ItemChange { mutation, itinerary }) = change else {
            bail!("Trip '{trip_id}' not found");
        };

        let output = match mutation {
            Mutation::Applied(item) => match action {
                ItemAction::Add => CreateResult::new(item).to_string(),
                ItemAction::Edit => UpdateResult::new(item).to_string(),
                ItemAction::Delete => DeleteResult::new(item).to_string(),
                ItemAction::Move => {
                    let position = itinerary
                        .bucket(item.date)
                        .and_then(|bucket| bucket.position_of(&item.id))
                        .map_or(0, |p| p + 1);
                    let change = format!(
                        "Moved to {}, position {position}",
                        SlashDate(item.date)
                    );
                    UpdateResult::with_changes(item, vec![change]).to_string()
                }
            },
            Mutation::Skipped(reason) => {
                debug!("Item command on trip '{trip_id}' skipped: {reason:?}");
                OperationStatus::skipped(reason.to_string()).to_string()
            }
        };

        self.renderer.render(&output)
    }
}
