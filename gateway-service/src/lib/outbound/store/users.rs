use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;

use super::client::StoreClient;
use crate::account::models::NewUser;
use crate::account::models::User;
use crate::account::ports::UserStore;
use crate::domain::errors::StoreError;

const USERS: &str = "users";

/// `/users` collection of the external store.
pub struct HttpUserStore {
    client: StoreClient,
}

impl HttpUserStore {
    pub fn new(client: StoreClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UserStore for HttpUserStore {
    async fn create(&self, user: NewUser) -> Result<(), StoreError> {
        self.client.send_json(Method::POST, &[USERS], &user).await
    }

    async fn list_all(&self) -> Result<Vec<User>, StoreError> {
        let records: Vec<Value> = self.client.get_json(&[USERS]).await?;
        Ok(decode_users(records))
    }
}

/// Decode store records, skipping any that cannot be read as a user.
fn decode_users(records: Vec<Value>) -> Vec<User> {
    records
        .into_iter()
        .filter_map(|record| match serde_json::from_value::<User>(record) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!(error = %e, "Skipping unreadable user record");
                None
            }
        })
        .collect()
}
