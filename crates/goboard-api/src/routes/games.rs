//! Routes for games, moves and SGF records.

use axum::extract::{DefaultBodyLimit, State};
use axum::{
    Json, Router,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use goboard_core::game::MoveRecord;
use goboard_ledger::application::command_handlers;
use goboard_ledger::application::query_handlers::{self, GameView};
use goboard_ledger::domain::commands;

use crate::error::ApiError;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::state::AppState;

/// Query parameters for GET /newgame.
#[derive(Debug, Default, Deserialize)]
pub struct NewGameParams {
    /// Optional display name for the game.
    pub name: Option<String>,
}

/// Request body for POST /move. Omitted fields default to zero or empty.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct MoveRequest {
    /// The game the move belongs to.
    pub game_id: i64,
    /// Board column.
    pub x: i32,
    /// Board row.
    pub y: i32,
    /// Stone color label.
    pub color: String,
    /// Stones removed by this move.
    pub captures: i32,
}

/// Request body for POST /save-sgf. Omitted fields default to zero or empty.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SaveSgfRequest {
    /// The game to update.
    pub game_id: i64,
    /// The SGF text to store.
    pub sgf: String,
}

/// Response body for GET /newgame.
#[derive(Debug, Serialize)]
pub struct NewGameResponse {
    /// Confirmation message.
    pub message: &'static str,
    /// Identifier of the created game.
    pub game_id: i64,
}

/// Response body for POST /move.
#[derive(Debug, Serialize)]
pub struct MoveResponse {
    /// Confirmation message.
    pub message: &'static str,
    /// The game the move was recorded for.
    pub game_id: i64,
    /// The number assigned to the move.
    pub move_number: i32,
}

/// Response body for POST /save-sgf.
#[derive(Debug, Serialize)]
pub struct SaveSgfResponse {
    /// Confirmation message.
    pub message: &'static str,
    /// The updated game.
    pub game_id: i64,
}

/// Response body for GET /game/{id}/sgf. `message` is only present when no
/// SGF has been saved yet.
#[derive(Debug, Serialize)]
pub struct SgfResponse {
    /// Explains an empty `sgf`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    /// The stored SGF text.
    pub sgf: String,
}

/// GET /newgame
#[instrument(skip(state, params))]
async fn new_game(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<NewGameParams>,
) -> Result<Json<NewGameResponse>, ApiError> {
    let command = commands::CreateGame {
        correlation_id: Uuid::new_v4(),
        name: params.name,
    };

    info!(correlation_id = %command.correlation_id, "handling create_game command");

    let game = command_handlers::handle_create_game(
        &command,
        state.clock.as_ref(),
        state.game_repository.as_ref(),
    )
    .await?;

    Ok(Json(NewGameResponse {
        message: "game created",
        game_id: game.id,
    }))
}

/// POST /move
#[instrument(skip(state, request), fields(game_id = request.game_id))]
async fn submit_move(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<MoveRequest>,
) -> Result<Json<MoveResponse>, ApiError> {
    let command = commands::AppendMove {
        correlation_id: Uuid::new_v4(),
        game_id: request.game_id,
        x: request.x,
        y: request.y,
        color: request.color,
        captures: request.captures,
    };

    info!(correlation_id = %command.correlation_id, "handling append_move command");

    let record = command_handlers::handle_append_move(
        &command,
        state.clock.as_ref(),
        state.game_repository.as_ref(),
    )
    .await?;

    Ok(Json(MoveResponse {
        message: "move recorded",
        game_id: record.game_id,
        move_number: record.move_number,
    }))
}

/// POST /save-sgf
#[instrument(skip(state, request), fields(game_id = request.game_id))]
async fn save_sgf(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<SaveSgfRequest>,
) -> Result<Json<SaveSgfResponse>, ApiError> {
    let command = commands::SaveSgf {
        correlation_id: Uuid::new_v4(),
        game_id: request.game_id,
        sgf_text: request.sgf,
    };

    info!(correlation_id = %command.correlation_id, "handling save_sgf command");

    let game = command_handlers::handle_save_sgf(
        &command,
        state.clock.as_ref(),
        state.game_repository.as_ref(),
    )
    .await?;

    Ok(Json(SaveSgfResponse {
        message: "sgf saved",
        game_id: game.id,
    }))
}

/// GET /game/{id}/sgf
#[instrument(skip(state))]
async fn get_sgf(
    State(state): State<AppState>,
    ApiPath(game_id): ApiPath<i64>,
) -> Result<Json<SgfResponse>, ApiError> {
    let view = query_handlers::get_sgf(game_id, state.game_repository.as_ref()).await?;

    let message = (!view.is_saved()).then_some("no sgf saved yet");
    Ok(Json(SgfResponse {
        message,
        sgf: view.sgf,
    }))
}

/// GET /game/{id}/moves
#[instrument(skip(state))]
async fn get_moves(
    State(state): State<AppState>,
    ApiPath(game_id): ApiPath<i64>,
) -> Result<Json<Vec<MoveRecord>>, ApiError> {
    let moves = query_handlers::get_moves(game_id, state.game_repository.as_ref()).await?;
    Ok(Json(moves))
}

/// GET /game/{id}
#[instrument(skip(state))]
async fn get_game(
    State(state): State<AppState>,
    ApiPath(game_id): ApiPath<i64>,
) -> Result<Json<GameView>, ApiError> {
    let view = query_handlers::get_game(game_id, state.game_repository.as_ref()).await?;
    Ok(Json(view))
}

/// Returns the router for game, move and SGF endpoints.
///
/// SGF records are opaque text of any length, so `/save-sgf` lifts axum's
/// default request body limit.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/newgame", get(new_game))
        .route("/move", post(submit_move))
        .route(
            "/save-sgf",
            post(save_sgf).layer(DefaultBodyLimit::disable()),
        )
        .route("/game/{id}", get(get_game))
        .route("/game/{id}/sgf", get(get_sgf))
        .route("/game/{id}/moves", get(get_moves))
}
