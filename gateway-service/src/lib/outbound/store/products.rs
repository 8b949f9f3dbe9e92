use async_trait::async_trait;
use reqwest::Method;

use super::client::StoreClient;
use crate::domain::errors::StoreError;
use crate::product::models::Product;
use crate::product::models::ProductDetails;
use crate::product::models::ProductId;
use crate::product::ports::ProductStore;

const PRODUCTS: &str = "products";

/// `/products` collection of the external store.
pub struct HttpProductStore {
    client: StoreClient,
}

impl HttpProductStore {
    pub fn new(client: StoreClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProductStore for HttpProductStore {
    async fn list_all(&self) -> Result<Vec<Product>, StoreError> {
        self.client.get_json(&[PRODUCTS]).await
    }

    async fn create(&self, details: ProductDetails) -> Result<(), StoreError> {
        self.client
            .send_json(Method::POST, &[PRODUCTS], &details)
            .await
    }

    async fn update(&self, id: &ProductId, details: ProductDetails) -> Result<(), StoreError> {
        let id = id.to_string();
        self.client
            .send_json(Method::PUT, &[PRODUCTS, id.as_str()], &details)
            .await
    }

    async fn delete(&self, id: &ProductId) -> Result<(), StoreError> {
        let id = id.to_string();
        self.client.delete(&[PRODUCTS, id.as_str()]).await
    }
}
