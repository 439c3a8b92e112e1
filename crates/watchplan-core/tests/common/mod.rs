use std::path::Path;

use serde_json::json;
use tempfile::TempDir;
use watchplan_core::PlannerBuilder;

/// Helper function to create a test planner
pub async fn create_test_planner() -> (TempDir, watchplan_core::Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let planner = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}

/// Writes a playlist export named `<id>.json` into `dir`.
pub fn write_playlist(dir: &Path, id: &str, title: &str, durations: &[f64]) {
    let videos: Vec<_> = durations
        .iter()
        .enumerate()
        .map(|(i, minutes)| json!({"title": format!("Lesson {}", i + 1), "durationMinutes": minutes}))
        .collect();
    let document = json!({
        "title": title,
        "videoCount": durations.len(),
        "videos": videos,
    });
    std::fs::write(
        dir.join(format!("{id}.json")),
        serde_json::to_string_pretty(&document).expect("Failed to encode playlist"),
    )
    .expect("Failed to write playlist");
}
