mod common;

use common::{create_test_planner, jan, three_day_trip};
use itinera_core::{
    ItemChange, Mutation, Planner, SkipReason,
    models::ItemKind,
    params::{AddItem, Id, MoveItem, MoveTarget, NewItem, RelocateItem, UpdateItem},
};

async fn add(
    planner: &Planner,
    trip_id: &str,
    title: &str,
    day: i8,
    kind: ItemKind,
) -> ItemChange {
    planner
        .add_item(&AddItem {
            trip_id: trip_id.to_string(),
            item: NewItem {
                title: title.to_string(),
                date: jan(day),
                location: String::new(),
                kind,
                notes: None,
            },
        })
        .await
        .expect("Failed to add item")
        .expect("Trip should exist")
}

async fn relocate(planner: &Planner, trip_id: &str, movement: MoveItem) -> ItemChange {
    planner
        .move_item(&RelocateItem {
            trip_id: trip_id.to_string(),
            movement,
        })
        .await
        .expect("Failed to move item")
        .expect("Trip should exist")
}

fn titles(change: &ItemChange, bucket: usize) -> Vec<&str> {
    change.itinerary[bucket]
        .details
        .iter()
        .map(|item| item.title.as_str())
        .collect()
}

#[tokio::test]
async fn test_itinerary_initializes_one_bucket_per_day() {
    let (_temp_dir, planner) = create_test_planner().await;
    let trip = planner.create_trip(&three_day_trip("Tokyo")).await.unwrap();

    let view = planner
        .show_itinerary(&Id { id: trip.id })
        .await
        .unwrap()
        .unwrap();

    assert_eq!(view.itinerary.dates(), vec![jan(1), jan(2), jan(3)]);
    assert!(view.itinerary.iter().all(|bucket| bucket.is_empty()));
}

#[tokio::test]
async fn test_created_item_lands_only_on_its_day() {
    let (_temp_dir, planner) = create_test_planner().await;
    let trip = planner.create_trip(&three_day_trip("Tokyo")).await.unwrap();

    let change = add(&planner, &trip.id, "Lunch", 2, ItemKind::Meal).await;

    let created = change.mutation.item().unwrap();
    assert!(!created.id.is_empty());
    assert_eq!(created.kind, ItemKind::Meal);
    assert!(change.itinerary[0].is_empty());
    assert_eq!(change.itinerary[1].len(), 1);
    assert!(change.itinerary[2].is_empty());
}

#[tokio::test]
async fn test_reorder_within_day_uses_final_index() {
    let (_temp_dir, planner) = create_test_planner().await;
    let trip = planner.create_trip(&three_day_trip("Tokyo")).await.unwrap();
    for title in ["A", "B", "C"] {
        add(&planner, &trip.id, title, 2, ItemKind::Attraction).await;
    }

    let change = relocate(
        &planner,
        &trip.id,
        MoveItem {
            source_date: jan(2),
            source_index: 0,
            target_date: jan(2),
            target: MoveTarget::Index(2),
        },
    )
    .await;

    assert_eq!(titles(&change, 1), ["B", "C", "A"]);
}

#[tokio::test]
async fn test_move_across_days_rewrites_date() {
    let (_temp_dir, planner) = create_test_planner().await;
    let trip = planner.create_trip(&three_day_trip("Tokyo")).await.unwrap();
    add(&planner, &trip.id, "X", 1, ItemKind::Transport).await;

    let change = relocate(
        &planner,
        &trip.id,
        MoveItem {
            source_date: jan(1),
            source_index: 0,
            target_date: jan(2),
            target: MoveTarget::End,
        },
    )
    .await;

    assert!(change.itinerary[0].is_empty());
    assert_eq!(titles(&change, 1), ["X"]);
    assert_eq!(change.itinerary[1].details[0].date.to_string(), "2025-01-02");
}

#[tokio::test]
async fn test_editing_notes_keeps_position() {
    let (_temp_dir, planner) = create_test_planner().await;
    let trip = planner.create_trip(&three_day_trip("Tokyo")).await.unwrap();
    add(&planner, &trip.id, "A", 3, ItemKind::Other).await;
    let x = add(&planner, &trip.id, "X", 3, ItemKind::Other).await;
    add(&planner, &trip.id, "C", 3, ItemKind::Other).await;
    let before = x.itinerary.clone();
    let x_id = x.mutation.item().unwrap().id.clone();

    let change = planner
        .update_item(&UpdateItem {
            trip_id: trip.id.clone(),
            item_id: x_id.clone(),
            notes: Some("Bring cash".to_string()),
            ..Default::default()
        })
        .await
        .unwrap()
        .unwrap();

    assert_eq!(titles(&change, 2), ["A", "X", "C"]);
    assert_eq!(change.itinerary[2].details[0], before[2].details[0]);
    assert_eq!(change.itinerary[2].details[2], before[2].details[2]);
    assert_eq!(
        change.itinerary[2].details[1].notes.as_deref(),
        Some("Bring cash")
    );
}

#[tokio::test]
async fn test_noop_moves_leave_storage_unchanged() {
    let (_temp_dir, planner) = create_test_planner().await;
    let trip = planner.create_trip(&three_day_trip("Tokyo")).await.unwrap();
    let last = add(&planner, &trip.id, "A", 1, ItemKind::Other).await;
    let before = last.itinerary;

    for (movement, reason) in [
        (
            MoveItem {
                source_date: jan(1),
                source_index: 0,
                target_date: jan(1),
                target: MoveTarget::Index(0),
            },
            SkipReason::NoChange,
        ),
        (
            MoveItem {
                source_date: jan(1),
                source_index: 3,
                target_date: jan(2),
                target: MoveTarget::End,
            },
            SkipReason::SourceIndexOutOfRange {
                date: jan(1),
                index: 3,
                len: 1,
            },
        ),
        (
            MoveItem {
                source_date: jan(1),
                source_index: 0,
                target_date: jan(30),
                target: MoveTarget::End,
            },
            SkipReason::BucketNotFound { date: jan(30) },
        ),
    ] {
        let change = relocate(&planner, &trip.id, movement).await;
        assert_eq!(change.mutation, Mutation::Skipped(reason));
        assert_eq!(change.itinerary, before);
    }

    let view = planner
        .show_itinerary(&Id { id: trip.id })
        .await
        .unwrap()
        .unwrap();
    assert_eq!(view.itinerary, before);
}
