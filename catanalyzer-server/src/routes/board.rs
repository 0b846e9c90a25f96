//! Board editor endpoints
//!
//! Every successful edit bumps the version and discards the stored analysis.

use crate::error::ApiError;
use crate::state::{BoardSession, ServerState};
use axum::{extract::State, Json};
use catanalyzer_core::{randomize, Board, Hex, Resource};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

fn board_view(session: &BoardSession) -> Value {
    json!({
        "radius": session.board.radius(),
        "tiles": session.board.tiles(),
        "filled": session.board.is_filled(),
        "missing": session.board.missing_count(),
        "version": session.version,
    })
}

/// Get the current board
pub async fn get_board(State(state): State<Arc<ServerState>>) -> Json<Value> {
    let session = state.session();
    Json(board_view(&session))
}

/// Replace the whole board
pub async fn replace_board(
    State(state): State<Arc<ServerState>>,
    Json(board): Json<Board>,
) -> Result<Json<Value>, ApiError> {
    board.validate()?;

    let mut session = state.session_mut();
    session.board = board;
    session.touch();
    tracing::debug!(version = session.version, "board replaced");

    Ok(Json(board_view(&session)))
}

/// Resource assignment request
#[derive(Deserialize)]
pub struct ResourceRequest {
    pub q: i32,
    pub r: i32,
    pub resource: String,
}

/// Set a tile's resource
pub async fn set_resource(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<ResourceRequest>,
) -> Result<Json<Value>, ApiError> {
    let resource: Resource = req.resource.parse()?;
    let hex = Hex::new(req.q, req.r);

    let mut session = state.session_mut();
    session.board.set_resource(hex, resource)?;
    session.touch();
    tracing::debug!(%hex, %resource, "resource set");

    Ok(Json(board_view(&session)))
}

/// Number assignment request; `null` clears the token
#[derive(Deserialize)]
pub struct NumberRequest {
    pub q: i32,
    pub r: i32,
    pub number: Option<u8>,
}

/// Set or clear a tile's number token
pub async fn set_number(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<NumberRequest>,
) -> Result<Json<Value>, ApiError> {
    let hex = Hex::new(req.q, req.r);

    let mut session = state.session_mut();
    session.board.set_number(hex, req.number)?;
    session.touch();
    tracing::debug!(%hex, number = ?req.number, "number set");

    Ok(Json(board_view(&session)))
}

/// Randomize request
#[derive(Deserialize, Default)]
pub struct RandomizeRequest {
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Fill the board from the standard pools
pub async fn randomize_board(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<RandomizeRequest>,
) -> Result<Json<Value>, ApiError> {
    let mut rng = match req.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let mut session = state.session_mut();
    let mut board = session.board.clone();
    randomize(&mut board, &mut rng)?;
    session.board = board;
    session.touch();
    tracing::debug!(seed = ?req.seed, "board randomized");

    Ok(Json(board_view(&session)))
}

/// Reset every tile
pub async fn clear_board(State(state): State<Arc<ServerState>>) -> Json<Value> {
    let mut session = state.session_mut();
    session.board.clear();
    session.touch();
    tracing::debug!("board cleared");

    Json(board_view(&session))
}
