use axum::extract::Path;
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
use crate::product::models::ProductId;
use crate::product::ports::ProductServicePort;

pub async fn update_product(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
    payload: Result<Json<ProductDetails>, JsonRejection>,
) -> Result<ApiSuccess<MessageData>, ApiError> {
    let Json(body) = payload.map_err(ApiError::bad_body)?;
    let id = ProductId::from(id.as_str());
    tracing::info!(user_id = %user.user_id, product_id = %id, "Updating product");

    state
        .product_service
        .update_product(&id, body)
        .await
        .map_err(|e| ApiError::from_product_error("Error updating product", e))?;

    Ok(ApiSuccess::message(
        StatusCode::OK,
        "Product updated successfully",
    ))
}
