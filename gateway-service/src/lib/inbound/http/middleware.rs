use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;

use super::handlers::ApiError;
use crate::account::models::Role;
use crate::account::models::UserId;
use crate::inbound::http::router::AppState;

/// Extension type to store the authenticated caller in request extensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub role: Role,
}

/// Middleware that validates the session token and adds the caller to
/// request extensions.
///
/// The `Authorization` header carries the raw token, without a `Bearer`
/// scheme. A missing header is rejected with 401 before anything downstream
/// runs; any unusable token is rejected with 400.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_token_from_header(&req)?;

    let claims = state
        .authenticator
        .validate_token::<UserId>(token)
        .map_err(|e| {
            tracing::warn!(error = %e, "Session token rejected");
            ApiError::BadRequest("Invalid Token".to_string())
        })?;

    req.extensions_mut().insert(AuthenticatedUser {
        user_id: claims.id,
        role: Role::new(claims.role),
    });

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, ApiError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ApiError::Unauthorized("Access Denied".to_string()))?;

    auth_header.to_str().map_err(|_| {
        tracing::warn!("Authorization header is not valid text");
        ApiError::BadRequest("Invalid Token".to_string())
    })
}
