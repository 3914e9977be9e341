use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue},
    Extension,
};

use crate::auth::middleware::AuthUser;
use crate::errors::AppError;
use crate::justify::engine::justify;
use crate::quota::{check_and_consume, count_words};
use crate::state::AppState;

/// POST /api/justify
///
/// Body is the raw text to justify (`text/plain`); the response body is the
/// justified text, also `text/plain`. Runs after the bearer-auth middleware,
/// so `AuthUser` is always present. The word quota is charged on the raw
/// body's whitespace-delimited word count before the engine runs.
pub async fn handle_justify(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    body: String,
) -> Result<(HeaderMap, String), AppError> {
    if body.trim().is_empty() {
        return Err(AppError::Validation(
            "Request body must contain text".to_string(),
        ));
    }

    let words = count_words(&body);
    let limit = state.config.daily_word_limit;
    if !check_and_consume(&state.usage, &user.token, words, limit) {
        tracing::info!("Quota exceeded for {} ({words} words)", user.email);
        return Err(AppError::PaymentRequired(format!(
            "Daily limit of {limit} words reached"
        )));
    }

    let justified = justify(&body);

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    Ok((headers, justified))
}
