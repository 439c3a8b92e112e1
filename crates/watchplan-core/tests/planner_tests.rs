mod common;

use common::{create_test_planner, write_playlist};
use tempfile::TempDir;
use watchplan_core::{
    handlers::preview_plan,
    params::{validate_daily_minutes, GeneratePlan, Id, SetDayCompletion},
    playlist::{JsonFileSource, PlaylistSource},
    Selection, Session, WatchPlanError,
};

#[tokio::test]
async fn test_full_session_flow() {
    let (temp_dir, planner) = create_test_planner().await;
    write_playlist(temp_dir.path(), "PLrust", "Rust Course", &[20.0, 35.0, 15.0]);
    let source = JsonFileSource::new(temp_dir.path());

    let mut session = Session::restore(&planner).await.expect("Failed to restore");
    assert_eq!(session.selection(), &Selection::NoActivePlan);

    session.begin_new_plan();
    session
        .load_playlist(&source, "https://www.youtube.com/playlist?list=PLrust")
        .await
        .expect("Failed to load playlist");
    assert_eq!(session.draft().expect("draft").title, "Rust Course");

    let plan = session
        .commit_new_plan(&planner, validate_daily_minutes(30).expect("valid"))
        .await
        .expect("Failed to commit plan");
    assert_eq!(plan.total_days, 3);
    assert_eq!(plan.playlist_url.as_deref(), Some("PLrust"));
    assert_eq!(session.active_plan_id(), Some(plan.id.as_str()));

    // A fresh session picks the stored active plan back up
    let restored = Session::restore(&planner).await.expect("Failed to restore");
    assert_eq!(restored.selection(), &Selection::ActivePlan(plan.id.clone()));

    let listing = planner.list_plans_summary().await.expect("Failed to list");
    assert_eq!(listing.len(), 1);
    assert!(listing[0].active);
    assert_eq!(listing[0].progress.percent, 0);
}

#[tokio::test]
async fn test_switching_between_plans() {
    let (temp_dir, planner) = create_test_planner().await;
    write_playlist(temp_dir.path(), "PLa", "First", &[10.0]);
    write_playlist(temp_dir.path(), "PLb", "Second", &[10.0, 10.0]);
    let source = JsonFileSource::new(temp_dir.path());
    let mut session = Session::new();

    let mut ids = Vec::new();
    for playlist in ["PLa", "PLb"] {
        session.begin_new_plan();
        session
            .load_playlist(&source, playlist)
            .await
            .expect("Failed to load playlist");
        let plan = session
            .commit_new_plan(&planner, validate_daily_minutes(10).expect("valid"))
            .await
            .expect("Failed to commit plan");
        ids.push(plan.id);
    }
    assert_eq!(session.active_plan_id(), Some(ids[1].as_str()));

    session
        .select(&planner, &Id { id: ids[0].clone() })
        .await
        .expect("Failed to select");
    let active = planner
        .get_active_plan()
        .await
        .expect("Failed to get active")
        .expect("active plan");
    assert_eq!(active.title, "First");

    let err = session
        .select(&planner, &Id::from("unknown"))
        .await
        .unwrap_err();
    assert!(matches!(err, WatchPlanError::NotFound { .. }));
    assert_eq!(session.active_plan_id(), Some(ids[0].as_str()));

    let listing = planner.list_plans_summary().await.expect("Failed to list");
    assert_eq!(listing.len(), 2);
    assert_eq!(listing.active().expect("active summary").id, ids[0]);
}

#[tokio::test]
async fn test_commit_without_playlist_keeps_adding_state() {
    let (_temp_dir, planner) = create_test_planner().await;
    let mut session = Session::new();
    session.begin_new_plan();

    let err = session
        .commit_new_plan(&planner, validate_daily_minutes(30).expect("valid"))
        .await
        .unwrap_err();
    assert!(matches!(err, WatchPlanError::InvalidInput { .. }));
    assert_eq!(session.selection(), &Selection::AddingNewPlan { draft: None });
    assert!(planner.list_plans_summary().await.expect("list").is_empty());
}

#[tokio::test]
async fn test_empty_playlist_is_not_saved() {
    let (temp_dir, planner) = create_test_planner().await;
    write_playlist(temp_dir.path(), "PLempty", "Nothing", &[]);
    let source = JsonFileSource::new(temp_dir.path());

    let mut session = Session::new();
    session.begin_new_plan();
    session
        .load_playlist(&source, "PLempty")
        .await
        .expect("Failed to load playlist");

    let err = session
        .commit_new_plan(&planner, validate_daily_minutes(30).expect("valid"))
        .await
        .unwrap_err();
    assert!(matches!(err, WatchPlanError::InvalidInput { .. }));
    assert!(session.draft().is_some());
    assert!(planner.list_plans_summary().await.expect("list").is_empty());
}

#[tokio::test]
async fn test_load_playlist_requires_adding_state() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_playlist(temp_dir.path(), "PLx", "X", &[5.0]);
    let source = JsonFileSource::new(temp_dir.path());

    let mut session = Session::new();
    let err = session.load_playlist(&source, "PLx").await.unwrap_err();
    assert!(matches!(err, WatchPlanError::InvalidInput { .. }));
    assert_eq!(session.selection(), &Selection::NoActivePlan);
}

#[tokio::test]
async fn test_missing_playlist_is_a_fetch_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let source = JsonFileSource::new(temp_dir.path());

    let err = source.fetch_playlist("PLmissing").await.unwrap_err();
    assert!(matches!(err, WatchPlanError::Fetch { .. }));
}

#[tokio::test]
async fn test_file_source_reads_single_file_and_fills_id() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_playlist(temp_dir.path(), "export", "Export", &[2.5, 10.0]);
    let source = JsonFileSource::new(temp_dir.path().join("export.json"));

    let playlist = source.fetch_playlist("PLany").await.expect("Failed to fetch");
    assert_eq!(playlist.id.as_deref(), Some("PLany"));
    assert_eq!(playlist.videos[0].duration_minutes, 3);
    assert_eq!(playlist.total_duration(), 13);
}

#[tokio::test]
async fn test_preview_plan_does_not_touch_storage() {
    let (temp_dir, planner) = create_test_planner().await;
    write_playlist(temp_dir.path(), "PLpreview", "Preview", &[40.0]);
    let source = JsonFileSource::new(temp_dir.path());

    let preview = preview_plan(
        &source,
        &GeneratePlan {
            playlist: "PLpreview".to_string(),
            daily_minutes: 25,
        },
    )
    .await
    .expect("Failed to preview");
    assert_eq!(preview.days.len(), 2);
    assert_eq!(preview.days[1].total_time, 15);

    assert!(planner.list_plans_summary().await.expect("list").is_empty());
}

#[tokio::test]
async fn test_preview_plan_validates_before_fetching() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let source = JsonFileSource::new(temp_dir.path());

    for (playlist, daily_minutes) in [("PLok", 0), ("PLok", -10), ("   ", 30), ("not a url!", 30)] {
        let err = preview_plan(
            &source,
            &GeneratePlan {
                playlist: playlist.to_string(),
                daily_minutes,
            },
        )
        .await
        .unwrap_err();
        assert!(
            matches!(err, WatchPlanError::InvalidInput { .. }),
            "{playlist:?} / {daily_minutes} gave {err:?}"
        );
    }
}

#[tokio::test]
async fn test_progress_of_active_plan() {
    let (temp_dir, planner) = create_test_planner().await;
    write_playlist(temp_dir.path(), "PLp", "Progress", &[30.0, 30.0, 30.0, 30.0]);
    let source = JsonFileSource::new(temp_dir.path());

    let mut session = Session::new();
    session.begin_new_plan();
    session.load_playlist(&source, "PLp").await.expect("load");
    let plan = session
        .commit_new_plan(&planner, validate_daily_minutes(60).expect("valid"))
        .await
        .expect("commit");

    planner
        .set_day_completion(&SetDayCompletion {
            plan_id: plan.id.clone(),
            day_index: 0,
            completed: true,
        })
        .await
        .expect("Failed to complete day");

    let (active, progress) = planner.plan_progress(None).await.expect("Failed to get progress");
    assert_eq!(active.id, plan.id);
    assert_eq!(progress.completed_videos, 2);
    assert_eq!(progress.total_videos, 4);
    assert_eq!(progress.percent, 50);
}
