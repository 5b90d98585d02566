pub mod health;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::boards::handlers as boards;
use crate::copy::handlers as copy;
use crate::personas::handlers as personas;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Personas API
        .route("/api/personas/detailed", get(personas::handle_list_personas))
        .route(
            "/api/personas/detailed/:id",
            get(personas::handle_get_persona),
        )
        // Copy API
        .route("/api/copy/generate", post(copy::handle_generate_copy))
        // Boards API
        .route(
            "/api/boards",
            get(boards::handle_list_boards).post(boards::handle_create_board),
        )
        .route(
            "/api/boards/:id",
            get(boards::handle_get_board).delete(boards::handle_delete_board),
        )
        .route("/api/boards/:id/briefs", post(boards::handle_add_briefs))
        .route(
            "/api/boards/:id/briefs/:brief_id",
            delete(boards::handle_remove_brief),
        )
        .with_state(state)
}
