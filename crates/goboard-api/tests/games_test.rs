//! End-to-end scenarios for the game ledger API over an in-memory store.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use goboard_test_support::InMemoryGameRepository;

#[tokio::test]
async fn test_record_two_moves_and_read_history() {
    let repo = Arc::new(InMemoryGameRepository::new());

    // GET /api/newgame
    let (status, json) =
        common::get_json(common::build_test_app(repo.clone()), "/api/newgame").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["game_id"], 1);

    // POST /api/move twice
    let (status, json) = common::post_json(
        common::build_test_app(repo.clone()),
        "/api/move",
        &serde_json::json!({ "game_id": 1, "x": 3, "y": 3, "color": "black", "captures": 0 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["move_number"], 1);

    let (status, json) = common::post_json(
        common::build_test_app(repo.clone()),
        "/api/move",
        &serde_json::json!({ "game_id": 1, "x": 15, "y": 3, "color": "white", "captures": 0 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["move_number"], 2);

    // GET /api/game/1/moves
    let (status, json) =
        common::get_json(common::build_test_app(repo), "/api/game/1/moves").await;
    assert_eq!(status, StatusCode::OK);
    let moves = json.as_array().unwrap();
    assert_eq!(moves.len(), 2);
    assert_eq!(moves[0]["move_number"], 1);
    assert_eq!(moves[0]["x"], 3);
    assert_eq!(moves[0]["y"], 3);
    assert_eq!(moves[0]["color"], "black");
    assert_eq!(moves[1]["move_number"], 2);
    assert_eq!(moves[1]["x"], 15);
    assert_eq!(moves[1]["y"], 3);
    assert_eq!(moves[1]["color"], "white");
    assert_eq!(moves[1]["created_at"], "2026-01-15T10:00:00Z");
}

#[tokio::test]
async fn test_save_and_load_sgf() {
    let repo = Arc::new(InMemoryGameRepository::new());
    common::get_json(common::build_test_app(repo.clone()), "/api/newgame").await;

    // Unsaved record is flagged, not an error.
    let (status, json) =
        common::get_json(common::build_test_app(repo.clone()), "/api/game/1/sgf").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["sgf"], "");
    assert!(json["message"].is_string());

    // POST /api/save-sgf
    let (status, json) = common::post_json(
        common::build_test_app(repo.clone()),
        "/api/save-sgf",
        &serde_json::json!({ "game_id": 1, "sgf": "(;GM[1]FF[4];B[dd];W[pd])" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["game_id"], 1);

    // GET /api/game/1/sgf
    let (status, json) =
        common::get_json(common::build_test_app(repo), "/api/game/1/sgf").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        serde_json::json!({ "sgf": "(;GM[1]FF[4];B[dd];W[pd])" })
    );
}

#[tokio::test]
async fn test_zero_game_id_is_rejected_and_nothing_is_recorded() {
    let repo = Arc::new(InMemoryGameRepository::new());

    let (status, json) = common::post_json(
        common::build_test_app(repo.clone()),
        "/api/move",
        &serde_json::json!({ "game_id": 0, "x": 3, "y": 3, "color": "black", "captures": 0 }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].is_string());
    assert!(repo.all_moves().is_empty());
}

#[tokio::test]
async fn test_sgf_endpoints_return_404_for_missing_game() {
    let repo = Arc::new(InMemoryGameRepository::new());

    let (status, json) =
        common::get_json(common::build_test_app(repo.clone()), "/api/game/77/sgf").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "game not found");

    let (status, _) = common::post_json(
        common::build_test_app(repo),
        "/api/save-sgf",
        &serde_json::json!({ "game_id": 77, "sgf": "(;GM[1])" }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_moves_of_missing_game_are_an_empty_list() {
    let app = common::build_in_memory_app();

    let (status, json) = common::get_json(app, "/api/game/77/moves").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, serde_json::json!([]));
}

#[tokio::test]
async fn test_concurrent_submissions_get_distinct_move_numbers() {
    let repo = Arc::new(InMemoryGameRepository::new());

    let mut handles = Vec::new();
    for i in 0..20 {
        let app = common::build_test_app(repo.clone());
        handles.push(tokio::spawn(async move {
            let (status, json) = common::post_json(
                app,
                "/api/move",
                &serde_json::json!({ "game_id": 1, "x": i, "y": i, "color": "black" }),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
            json["move_number"].as_i64().unwrap()
        }));
    }

    let mut numbers = Vec::new();
    for handle in handles {
        numbers.push(handle.await.unwrap());
    }
    numbers.sort_unstable();

    assert_eq!(numbers, (1..=20).collect::<Vec<i64>>());
}
