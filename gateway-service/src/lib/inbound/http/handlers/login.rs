use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::account::errors::AccountError;
use crate::account::models::LoginCommand;
use crate::account::models::Session;
use crate::account::ports::AccountServicePort;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let command = payload
        .ok()
        .and_then(|Json(body)| body.into_command())
        .ok_or_else(|| {
            ApiError::from_account_error("Server error", AccountError::InvalidCredentials)
        })?;

    state
        .account_service
        .login(command)
        .await
        .map_err(|e| ApiError::from_account_error("Server error", e))
        .map(|ref session| ApiSuccess::new(StatusCode::OK, session.into()))
}

/// HTTP request body for login (raw JSON)
///
/// A body that is unreadable or lacks either field is answered exactly like
/// wrong credentials.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    email: Option<String>,
    password: Option<String>,
}

impl LoginRequest {
    fn into_command(self) -> Option<LoginCommand> {
        Some(LoginCommand {
            email: self.email?,
            password: self.password?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub token: String,
    pub role: String,
}

impl From<&Session> for LoginResponseData {
    fn from(session: &Session) -> Self {
        Self {
            token: session.token.clone(),
            role: session.role.as_str().to_string(),
        }
    }
}
