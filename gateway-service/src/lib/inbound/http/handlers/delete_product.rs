use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MessageData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::product::models::ProductId;
use crate::product::ports::ProductServicePort;

pub async fn delete_product(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<MessageData>, ApiError> {
    let id = ProductId::from(id.as_str());
    tracing::info!(user_id = %user.user_id, product_id = %id, "Deleting product");

    state
        .product_service
        .delete_product(&id)
        .await
        .map_err(|e| ApiError::from_product_error("Error deleting product", e))?;

    Ok(ApiSuccess::message(
        StatusCode::OK,
        "Product deleted successfully",
    ))
}
