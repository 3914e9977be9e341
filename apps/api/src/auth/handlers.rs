use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct TokenRequest {
    pub email: Option<String>,
}

#[derive(Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// POST /api/token
///
/// Issues an opaque bearer token for the given email address. Tokens never
/// expire; they live as long as the process does.
pub async fn handle_issue_token(
    State(state): State<AppState>,
    Json(req): Json<TokenRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let email = req.email.as_deref().map(str::trim).unwrap_or("");
    if email.is_empty() {
        return Err(AppError::Validation(
            "A valid email address is required".to_string(),
        ));
    }

    let token = Uuid::new_v4().to_string();
    state.tokens.insert(token.clone(), email.to_string());
    tracing::debug!("Issued token for {email}");

    Ok(Json(TokenResponse { token }))
}
