use async_trait::async_trait;

use crate::domain::errors::StoreError;
use crate::product::errors::ProductError;
use crate::product::models::Product;
use crate::product::models::ProductDetails;
use crate::product::models::ProductId;

/// Port for catalog operations.
#[async_trait]
pub trait ProductServicePort: Send + Sync + 'static {
    /// List every product in the store.
    async fn list_products(&self) -> Result<Vec<Product>, ProductError>;

    /// Add a product.
    async fn create_product(&self, details: ProductDetails) -> Result<(), ProductError>;

    /// Replace a product's writable fields.
    async fn update_product(
        &self,
        id: &ProductId,
        details: ProductDetails,
    ) -> Result<(), ProductError>;

    /// Remove a product.
    async fn delete_product(&self, id: &ProductId) -> Result<(), ProductError>;
}

/// Product collection held by the external store.
///
/// Every operation is a single call; a non-2xx answer is an error.
#[async_trait]
pub trait ProductStore: Send + Sync + 'static {
    async fn list_all(&self) -> Result<Vec<Product>, StoreError>;

    async fn create(&self, details: ProductDetails) -> Result<(), StoreError>;

    async fn update(&self, id: &ProductId, details: ProductDetails) -> Result<(), StoreError>;

    async fn delete(&self, id: &ProductId) -> Result<(), StoreError>;
}
