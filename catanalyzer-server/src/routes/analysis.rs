//! Analysis endpoints

use crate::error::ApiError;
use crate::state::{BoardSession, ServerState};
use axum::{extract::State, Json};
use catanalyzer_core::{analyze_with, Hex};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

fn highlighted(session: &BoardSession) -> Vec<Hex> {
    match (&session.analysis, session.selected) {
        (Some(analysis), Some(rank)) => analysis
            .by_rank(rank)
            .map(|r| r.hexes.to_vec())
            .unwrap_or_default(),
        _ => Vec::new(),
    }
}

fn analysis_view(session: &BoardSession) -> Value {
    match &session.analysis {
        Some(analysis) => json!({
            "version": session.version,
            "spots_found": analysis.spots_found,
            "results": analysis.results,
            "selected": session.selected,
            "highlighted": highlighted(session),
        }),
        None => json!({
            "version": session.version,
            "spots_found": 0,
            "results": [],
            "selected": null,
            "highlighted": [],
        }),
    }
}

/// Analyze the current board and select the best spot
pub async fn run_analysis(State(state): State<Arc<ServerState>>) -> Result<Json<Value>, ApiError> {
    let mut session = state.session_mut();

    if !session.board.is_filled() {
        return Err(ApiError::Incomplete(session.board.missing_count()));
    }

    let analysis = analyze_with(&session.board, &state.analysis_config);
    tracing::info!(
        version = session.version,
        spots = analysis.spots_found,
        best = analysis.best().map(|r| r.score),
        "analysis complete"
    );

    session.selected = analysis.best().map(|r| r.rank);
    session.analysis = Some(analysis);

    Ok(Json(analysis_view(&session)))
}

/// Last analysis of the current board, if any
pub async fn get_analysis(State(state): State<Arc<ServerState>>) -> Json<Value> {
    let session = state.session();
    Json(analysis_view(&session))
}

/// Selection request
#[derive(Deserialize)]
pub struct SelectRequest {
    pub rank: usize,
}

/// Toggle the highlighted result
pub async fn select_spot(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<SelectRequest>,
) -> Result<Json<Value>, ApiError> {
    let mut session = state.session_mut();

    if !session.select(req.rank) {
        return Err(ApiError::NotFound(format!("no ranked spot #{}", req.rank)));
    }

    Ok(Json(json!({
        "selected": session.selected,
        "highlighted": highlighted(&session),
    })))
}
