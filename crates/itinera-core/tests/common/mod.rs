#![allow(dead_code)]

use itinera_core::{Planner, PlannerBuilder, params::CreateTrip};
use jiff::civil::{Date, date};
use tempfile::TempDir;

/// Helper function to create a test planner
pub async fn create_test_planner() -> (TempDir, Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let planner = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}

/// Day `d` of January 2025.
pub fn jan(d: i8) -> Date {
    date(2025, 1, d)
}

/// Three-day trip from 2025-01-01 to 2025-01-03.
pub fn three_day_trip(name: &str) -> CreateTrip {
    CreateTrip {
        name: name.to_string(),
        start_date: jan(1),
        end_date: jan(3),
        country: None,
        cover_image: None,
    }
}
