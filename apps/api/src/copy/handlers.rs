//! Axum route handlers for the Copy API.

use axum::{extract::State, Json};

use crate::copy::generator::generate_briefs;
use crate::copy::models::{GenerateCopyRequest, GenerateCopyResponse};
use crate::errors::AppError;
use crate::personas::handlers::load_persona;
use crate::state::AppState;

/// POST /api/copy/generate
///
/// Generates ad copy for one persona. The briefs are returned, not stored;
/// the client adds the ones it keeps to a board.
pub async fn handle_generate_copy(
    State(state): State<AppState>,
    Json(request): Json<GenerateCopyRequest>,
) -> Result<Json<GenerateCopyResponse>, AppError> {
    validate_request(&request)?;

    let persona = load_persona(&state, request.persona_id.trim()).await?;
    let briefs = generate_briefs(&state.llm, &persona, &request).await?;

    Ok(Json(GenerateCopyResponse { briefs }))
}

fn validate_request(request: &GenerateCopyRequest) -> Result<(), AppError> {
    for (field, value) in [
        ("persona_id", &request.persona_id),
        ("product", &request.product),
        ("angle", &request.angle),
    ] {
        if value.trim().is_empty() {
            return Err(AppError::Validation(format!("{field} cannot be empty")));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(product: &str) -> GenerateCopyRequest {
        GenerateCopyRequest {
            persona_id: "busy-mom".to_string(),
            product: product.to_string(),
            angle: "Time Saver".to_string(),
            format: None,
            count: None,
        }
    }

    #[test]
    fn test_validate_accepts_complete_request() {
        assert!(validate_request(&request("Tinted Balm")).is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_product() {
        let err = validate_request(&request("   ")).unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("product")));
    }
}
