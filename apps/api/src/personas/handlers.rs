//! Axum route handlers for the Personas API.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::errors::AppError;
use crate::personas::{find_persona, load_personas, ParsedPersona};
use crate::state::AppState;

/// Re-reads the persona directory on the blocking pool. Nothing is cached:
/// documents may change between requests.
pub async fn load_ranked_personas(state: &AppState) -> Result<Vec<ParsedPersona>, AppError> {
    let dir = state.config.personas_dir.clone();
    let opts = state.config.parse_options;

    tokio::task::spawn_blocking(move || load_personas(&dir, &opts))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed loading personas: {e}")))?
        .map_err(AppError::from)
}

/// Resolves one persona by id, or `NotFound`.
pub async fn load_persona(state: &AppState, id: &str) -> Result<ParsedPersona, AppError> {
    let dir = state.config.personas_dir.clone();
    let opts = state.config.parse_options;
    let lookup = id.to_string();

    tokio::task::spawn_blocking(move || find_persona(&dir, &lookup, &opts))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed loading persona: {e}")))??
        .ok_or_else(|| AppError::NotFound(format!("Persona {id} not found")))
}

/// GET /api/personas/detailed
///
/// All persona documents, highest share of customer base first.
pub async fn handle_list_personas(
    State(state): State<AppState>,
) -> Result<Json<Vec<ParsedPersona>>, AppError> {
    Ok(Json(load_ranked_personas(&state).await?))
}

/// GET /api/personas/detailed/:id
pub async fn handle_get_persona(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ParsedPersona>, AppError> {
    Ok(Json(load_persona(&state, &id).await?))
}
