pub mod health;

use axum::{
    http::{Method, Uri},
    middleware,
    routing::{get, post},
    Router,
};

use crate::auth;
use crate::errors::AppError;
use crate::justify;
use crate::state::AppState;

async fn not_found(method: Method, uri: Uri) -> AppError {
    AppError::NotFound(format!("Route {method} {uri} does not exist"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/token", post(auth::handlers::handle_issue_token))
        // Auth runs before the handler; the quota check lives inside the
        // handler because it needs the request body's word count.
        .route(
            "/api/justify",
            post(justify::handlers::handle_justify).layer(middleware::from_fn_with_state(
                state.clone(),
                auth::middleware::authenticate,
            )),
        )
        .fallback(not_found)
        .with_state(state)
}
