//! Bearer-token authentication for protected routes.
//!
//! Validates the `Authorization` header against the token store and attaches
//! the caller's identity to the request as an [`AuthUser`] extension, so
//! downstream handlers know which token to charge quota against.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::errors::AppError;
use crate::state::AppState;

/// Identity of an authenticated caller, attached as a request extension.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub email: String,
    pub token: String,
}

/// Axum middleware guarding routes that require a valid bearer token.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let header_value = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or_else(|| {
            AppError::Unauthorized(
                "Please provide an Authorization header with a valid token".to_string(),
            )
        })?
        .to_str()
        .map_err(|_| {
            AppError::Unauthorized(
                "Authorization header must be in format: Bearer <token>".to_string(),
            )
        })?;

    // Owned before the mutable borrow of `req` below; `parse_bearer` returns
    // a slice of the header value, which still borrows `req`.
    let token = parse_bearer(header_value)?.to_string();

    let email = state.tokens.email_for(&token).ok_or_else(|| {
        AppError::Unauthorized(
            "The provided token is not valid. Please request a new token.".to_string(),
        )
    })?;

    req.extensions_mut().insert(AuthUser { email, token });

    Ok(next.run(req).await)
}

/// Extracts the token from an `Authorization` header value.
///
/// The header must be exactly `Bearer <token>`: one scheme, one non-empty
/// token, separated by whitespace. A bare `Bearer` with a trailing space is
/// reported as an empty token rather than a malformed header.
fn parse_bearer(header_value: &str) -> Result<&str, AppError> {
    let parts: Vec<&str> = header_value.trim().split_whitespace().collect();

    match parts.as_slice() {
        ["Bearer", token] => Ok(token),
        ["Bearer"] => {
            if header_value == "Bearer" {
                Err(AppError::Unauthorized(
                    "Authorization header must be in format: Bearer <token>".to_string(),
                ))
            } else {
                Err(AppError::Unauthorized("Token cannot be empty".to_string()))
            }
        }
        [_, _] => Err(AppError::Unauthorized(
            "Only Bearer token authentication is supported".to_string(),
        )),
        _ => Err(AppError::Unauthorized(
            "Authorization header must be in format: Bearer <token>".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(result: Result<&str, AppError>) -> String {
        match result {
            Ok(token) => panic!("expected rejection, got token {token:?}"),
            Err(AppError::Unauthorized(msg)) => msg,
            Err(other) => panic!("expected Unauthorized, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_bearer_header() {
        assert_eq!(parse_bearer("Bearer abc-123").unwrap(), "abc-123");
        assert_eq!(parse_bearer("  Bearer   abc-123  ").unwrap(), "abc-123");
    }

    #[test]
    fn test_bare_bearer_is_malformed() {
        let msg = message(parse_bearer("Bearer"));
        assert!(msg.contains("Bearer <token>"), "got: {msg}");
    }

    #[test]
    fn test_trailing_space_is_empty_token() {
        let msg = message(parse_bearer("Bearer "));
        assert_eq!(msg, "Token cannot be empty");
    }

    #[test]
    fn test_wrong_scheme_is_rejected() {
        let msg = message(parse_bearer("Basic abc-123"));
        assert_eq!(msg, "Only Bearer token authentication is supported");
    }

    #[test]
    fn test_too_many_parts_is_malformed() {
        let msg = message(parse_bearer("Bearer abc 123"));
        assert!(msg.contains("Bearer <token>"), "got: {msg}");
    }

    #[test]
    fn test_empty_header_is_malformed() {
        let msg = message(parse_bearer(""));
        assert!(msg.contains("Bearer <token>"), "got: {msg}");
    }
}
