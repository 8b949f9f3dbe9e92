use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::account::errors::AccountError;
use crate::product::errors::ProductError;

pub mod create_product;
pub mod delete_product;
pub mod list_products;
pub mod login;
pub mod register;
pub mod update_product;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<T>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl ApiSuccess<MessageData> {
    pub fn message(status: StatusCode, message: &str) -> Self {
        Self::new(
            status,
            MessageData {
                message: message.to_string(),
            },
        )
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Client-facing failure.
///
/// Upstream failures carry the raw error detail next to the message; every
/// other variant carries a message only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError { message: String, error: String },
    UnprocessableEntity(String),
    BadRequest(String),
    Conflict(String),
    Unauthorized(String),
}

impl ApiError {
    pub fn internal(message: &str, error: impl ToString) -> Self {
        ApiError::InternalServerError {
            message: message.to_string(),
            error: error.to_string(),
        }
    }

    /// Map an account failure, using `context` as the message of a 500.
    pub fn from_account_error(context: &str, err: AccountError) -> Self {
        match err {
            AccountError::InvalidCredentials => ApiError::BadRequest(err.to_string()),
            AccountError::InvalidEmail(_) => ApiError::UnprocessableEntity(err.to_string()),
            AccountError::EmailAlreadyRegistered(_) => {
                ApiError::Conflict("Email already registered".to_string())
            }
            AccountError::Password(_)
            | AccountError::Token(_)
            | AccountError::Store(_)
            | AccountError::Unknown(_) => ApiError::internal(context, err),
        }
    }

    /// Map a request body that is not JSON of the expected shape.
    pub fn bad_body(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "Request body rejected");
        ApiError::BadRequest(rejection.body_text())
    }

    /// Map a catalog failure, using `context` as the message of a 500.
    pub fn from_product_error(context: &str, err: ProductError) -> Self {
        match err {
            ProductError::Store(_) => ApiError::internal(context, err),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::InternalServerError { message, error } => {
                tracing::error!(message = %message, error = %error, "Request failed upstream");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiErrorData {
                        message,
                        error: Some(error),
                    },
                )
            }
            ApiError::UnprocessableEntity(message) => {
                (StatusCode::UNPROCESSABLE_ENTITY, ApiErrorData::new(message))
            }
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, ApiErrorData::new(message)),
            ApiError::Conflict(message) => (StatusCode::CONFLICT, ApiErrorData::new(message)),
            ApiError::Unauthorized(message) => {
                (StatusCode::UNAUTHORIZED, ApiErrorData::new(message))
            }
        };

        (status, Json(body)).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageData {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiErrorData {
    fn new(message: String) -> Self {
        Self {
            message,
            error: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::StoreError;

    #[test]
    fn test_invalid_credentials_is_bad_request() {
        let err = ApiError::from_account_error("Server error", AccountError::InvalidCredentials);
        assert_eq!(err, ApiError::BadRequest("Invalid credentials".to_string()));
    }

    #[test]
    fn test_store_failure_keeps_detail() {
        let err = ApiError::from_account_error(
            "Error registering user",
            AccountError::Store(StoreError::Timeout(250)),
        );
        assert_eq!(
            err,
            ApiError::InternalServerError {
                message: "Error registering user".to_string(),
                error: "Store request timed out after 250 ms".to_string(),
            }
        );
    }

    #[test]
    fn test_error_body_shape() {
        let body = serde_json::to_value(ApiErrorData::new("Access Denied".to_string())).unwrap();
        assert_eq!(body, serde_json::json!({"message": "Access Denied"}));
    }
}
