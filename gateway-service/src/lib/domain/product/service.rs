use std::sync::Arc;

use async_trait::async_trait;

use crate::product::errors::ProductError;
use crate::product::models::Product;
use crate::product::models::ProductDetails;
use crate::product::models::ProductId;
use crate::product::ports::ProductServicePort;
use crate::product::ports::ProductStore;

/// Catalog passthrough to the external store.
pub struct ProductService<PS>
where
    PS: ProductStore,
{
    store: Arc<PS>,
}

impl<PS> ProductService<PS>
where
    PS: ProductStore,
{
    pub fn new(store: Arc<PS>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<PS> ProductServicePort for ProductService<PS>
where
    PS: ProductStore,
{
    async fn list_products(&self) -> Result<Vec<Product>, ProductError> {
        let products = self.store.list_all().await?;
        tracing::debug!(count = products.len(), "Products fetched");
        Ok(products)
    }

    async fn create_product(&self, details: ProductDetails) -> Result<(), ProductError> {
        self.store.create(details).await?;
        Ok(())
    }

    async fn update_product(
        &self,
        id: &ProductId,
        details: ProductDetails,
    ) -> Result<(), ProductError> {
        self.store.update(id, details).await?;
        Ok(())
    }

    async fn delete_product(&self, id: &ProductId) -> Result<(), ProductError> {
        self.store.delete(id).await?;
        Ok(())
    }
}
