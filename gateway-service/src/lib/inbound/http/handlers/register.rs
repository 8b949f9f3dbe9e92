use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::MessageData;
use crate::account::errors::AccountError;
use crate::account::models::EmailAddress;
use crate::account::models::RegisterCommand;
use crate::account::models::Role;
use crate::account::ports::AccountServicePort;
use crate::inbound::http::router::AppState;

const FAILURE_MESSAGE: &str = "Error registering user";

pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<ApiSuccess<MessageData>, ApiError> {
    let Json(body) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection.body_text(), "Registration body rejected");
        ApiError::UnprocessableEntity(rejection.body_text())
    })?;

    let command = body
        .try_into_command()
        .map_err(|e| ApiError::from_account_error(FAILURE_MESSAGE, e))?;

    state
        .account_service
        .register(command)
        .await
        .map_err(|e| ApiError::from_account_error(FAILURE_MESSAGE, e))?;

    Ok(ApiSuccess::message(
        StatusCode::CREATED,
        "User registered successfully",
    ))
}

/// HTTP request body for registration (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequest {
    name: String,
    email: String,
    password: String,
    role: String,
}

impl RegisterRequest {
    fn try_into_command(self) -> Result<RegisterCommand, AccountError> {
        let email = EmailAddress::new(self.email)?;
        Ok(RegisterCommand {
            name: self.name,
            email,
            password: self.password,
            role: Role::new(self.role),
        })
    }
}
