//! Tests for the planner module.

use jiff::civil::{Date, date};
use tempfile::TempDir;

use super::*;
use crate::{
    engine::{Mutation, SkipReason},
    models::ItemKind,
    params::{
        AddItem, CreateTrip, EditTrip, Id, MoveItem, MoveTarget, NewItem, RelocateItem,
        RemoveItem, UpdateItem,
    },
};

async fn create_test_planner() -> (TempDir, Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("nested").join("test.db");
    let planner = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}

fn day(d: i8) -> Date {
    date(2025, 1, d)
}

async fn create_trip(planner: &Planner, name: &str) -> String {
    planner
        .create_trip(&CreateTrip {
            name: name.to_string(),
            start_date: day(1),
            end_date: day(3),
            country: None,
            cover_image: None,
        })
        .await
        .expect("Failed to create trip")
        .id
}

async fn add(planner: &Planner, trip_id: &str, title: &str, d: i8) -> ItemChange {
    planner
        .add_item(&AddItem {
            trip_id: trip_id.to_string(),
            item: NewItem {
                title: title.to_string(),
                date: day(d),
                location: String::new(),
                kind: ItemKind::Attraction,
                notes: None,
            },
        })
        .await
        .expect("Failed to add item")
        .expect("Trip should exist")
}

#[tokio::test]
async fn test_trips_are_listed_newest_first() {
    let (_temp_dir, planner) = create_test_planner().await;
    assert!(planner.list_trips().await.unwrap().is_empty());

    create_trip(&planner, "First").await;
    let second = create_trip(&planner, "Second").await;

    let trips = planner.list_trips().await.unwrap();
    assert_eq!(trips.len(), 2);
    assert_eq!(trips[0].id, second);
    assert_eq!(trips[1].name, "First");
}

#[tokio::test]
async fn test_show_itinerary_initializes_days() {
    let (_temp_dir, planner) = create_test_planner().await;
    let trip_id = create_trip(&planner, "Tokyo").await;

    let view = planner
        .show_itinerary(&Id { id: trip_id })
        .await
        .unwrap()
        .unwrap();
    assert_eq!(view.itinerary.dates(), vec![day(1), day(2), day(3)]);
    assert!(view.today.is_some());

    let missing = planner
        .show_itinerary(&Id {
            id: "missing".to_string(),
        })
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_items_persist_across_calls() {
    let (_temp_dir, planner) = create_test_planner().await;
    let trip_id = create_trip(&planner, "Tokyo").await;

    let change = add(&planner, &trip_id, "Lunch", 2).await;
    let item = change.mutation.item().unwrap().clone();
    assert!(!item.id.is_empty());

    let view = planner
        .show_itinerary(&Id {
            id: trip_id.clone(),
        })
        .await
        .unwrap()
        .unwrap();
    assert_eq!(view.itinerary[1].details, vec![item]);
}

#[tokio::test]
async fn test_update_item_merges_fields() {
    let (_temp_dir, planner) = create_test_planner().await;
    let trip_id = create_trip(&planner, "Tokyo").await;
    add(&planner, &trip_id, "A", 1).await;
    let b = add(&planner, &trip_id, "B", 1).await;
    let b_id = b.mutation.item().unwrap().id.clone();

    let change = planner
        .update_item(&UpdateItem {
            trip_id: trip_id.clone(),
            item_id: b_id.clone(),
            notes: Some("Reserve".to_string()),
            kind: Some(ItemKind::Meal),
            ..Default::default()
        })
        .await
        .unwrap()
        .unwrap();

    let updated = change.mutation.item().unwrap();
    assert_eq!(updated.title, "B");
    assert_eq!(updated.notes.as_deref(), Some("Reserve"));
    assert_eq!(change.itinerary[0].position_of(&b_id), Some(1));

    let moved = planner
        .update_item(&UpdateItem {
            trip_id: trip_id.clone(),
            item_id: b_id.clone(),
            date: Some(day(3)),
            ..Default::default()
        })
        .await
        .unwrap()
        .unwrap();
    assert_eq!(moved.itinerary[2].position_of(&b_id), Some(0));
    assert_eq!(moved.itinerary[0].len(), 1);
}

#[tokio::test]
async fn test_move_and_remove_items() {
    let (_temp_dir, planner) = create_test_planner().await;
    let trip_id = create_trip(&planner, "Tokyo").await;
    for title in ["A", "B", "C"] {
        add(&planner, &trip_id, title, 2).await;
    }

    let change = planner
        .move_item(&RelocateItem {
            trip_id: trip_id.clone(),
            movement: MoveItem {
                source_date: day(2),
                source_index: 0,
                target_date: day(2),
                target: MoveTarget::Index(2),
            },
        })
        .await
        .unwrap()
        .unwrap();
    let titles: Vec<_> = change.itinerary[1]
        .details
        .iter()
        .map(|i| i.title.as_str())
        .collect();
    assert_eq!(titles, ["B", "C", "A"]);

    let a_id = change.itinerary[1].details[2].id.clone();
    let removed = planner
        .remove_item(&RemoveItem {
            trip_id: trip_id.clone(),
            item_id: a_id.clone(),
        })
        .await
        .unwrap()
        .unwrap();
    assert!(removed.mutation.is_applied());
    assert_eq!(removed.itinerary[1].len(), 2);

    let again = planner
        .remove_item(&RemoveItem {
            trip_id,
            item_id: a_id.clone(),
        })
        .await
        .unwrap()
        .unwrap();
    assert_eq!(
        again.mutation,
        Mutation::Skipped(SkipReason::ItemNotFound { id: a_id })
    );
}

#[tokio::test]
async fn test_item_operations_on_unknown_trip() {
    let (_temp_dir, planner) = create_test_planner().await;
    let result = planner
        .remove_item(&RemoveItem {
            trip_id: "ghost".to_string(),
            item_id: "x".to_string(),
        })
        .await
        .unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_edit_and_delete_trip() {
    let (_temp_dir, planner) = create_test_planner().await;
    let trip_id = create_trip(&planner, "Tokyo").await;
    add(&planner, &trip_id, "Skytree", 3).await;

    let edited = planner
        .edit_trip(&EditTrip {
            id: trip_id.clone(),
            end_date: Some(day(2)),
            ..Default::default()
        })
        .await
        .unwrap()
        .unwrap();
    assert!(edited.replanned);
    assert_eq!(edited.trip.duration_days(), 2);

    let view = planner
        .show_itinerary(&Id {
            id: trip_id.clone(),
        })
        .await
        .unwrap()
        .unwrap();
    assert_eq!(view.itinerary.len(), 2);
    assert_eq!(view.itinerary[1].details[0].title, "Skytree");

    let deleted = planner
        .delete_trip(&Id {
            id: trip_id.clone(),
        })
        .await
        .unwrap();
    assert_eq!(deleted.map(|t| t.name), Some("Tokyo".to_string()));
    assert!(
        planner
            .get_trip(&Id { id: trip_id })
            .await
            .unwrap()
            .is_none()
    );
}
