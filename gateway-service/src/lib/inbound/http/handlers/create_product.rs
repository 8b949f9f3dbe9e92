use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;

use super::ApiError;
use super::ApiSuccess;
use super::MessageData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::product::models::ProductDetails;
use crate::product::ports::ProductServicePort;

pub async fn create_product(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    payload: Result<Json<ProductDetails>, JsonRejection>,
) -> Result<ApiSuccess<MessageData>, ApiError> {
    let Json(body) = payload.map_err(ApiError::bad_body)?;
    tracing::info!(user_id = %user.user_id, role = %user.role, sku = ?body.sku, "Adding product");

    state
        .product_service
        .create_product(body)
        .await
        .map_err(|e| ApiError::from_product_error("Error adding product", e))?;

    Ok(ApiSuccess::message(
        StatusCode::CREATED,
        "Product added successfully",
    ))
}
