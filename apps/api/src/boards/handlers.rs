//! Axum route handlers for the Boards API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::boards::models::{AddBriefsRequest, Board, CreateBoardRequest};
use crate::boards::store;
use crate::errors::AppError;
use crate::state::AppState;

/// GET /api/boards
pub async fn handle_list_boards(State(state): State<AppState>) -> Result<Json<Vec<Board>>, AppError> {
    Ok(Json(store::list_boards(state.blobs.as_ref()).await?))
}

/// POST /api/boards
pub async fn handle_create_board(
    State(state): State<AppState>,
    Json(req): Json<CreateBoardRequest>,
) -> Result<(StatusCode, Json<Board>), AppError> {
    let board = store::create_board(state.blobs.as_ref(), &req.name).await?;
    Ok((StatusCode::CREATED, Json(board)))
}

/// GET /api/boards/:id
pub async fn handle_get_board(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Board>, AppError> {
    Ok(Json(store::get_board(state.blobs.as_ref(), id).await?))
}

/// DELETE /api/boards/:id
pub async fn handle_delete_board(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    store::delete_board(state.blobs.as_ref(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/boards/:id/briefs
///
/// Appends briefs; ones already on the board (same id) are ignored.
pub async fn handle_add_briefs(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<AddBriefsRequest>,
) -> Result<Json<Board>, AppError> {
    if req.briefs.is_empty() {
        return Err(AppError::Validation("briefs cannot be empty".to_string()));
    }
    Ok(Json(
        store::add_briefs(state.blobs.as_ref(), id, req.briefs).await?,
    ))
}

/// DELETE /api/boards/:id/briefs/:brief_id
pub async fn handle_remove_brief(
    State(state): State<AppState>,
    Path((id, brief_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<Board>, AppError> {
    Ok(Json(
        store::remove_brief(state.blobs.as_ref(), id, brief_id).await?,
    ))
}
