use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::product::models::Product;
use crate::product::ports::ProductServicePort;

pub async fn list_products(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<Vec<Product>>, ApiError> {
    tracing::debug!(user_id = %user.user_id, "Listing products");

    state
        .product_service
        .list_products()
        .await
        .map_err(|e| ApiError::from_product_error("Error fetching products", e))
        .map(|products| ApiSuccess::new(StatusCode::OK, products))
}
