use async_trait::async_trait;

use crate::account::errors::AccountError;
use crate::account::models::LoginCommand;
use crate::account::models::NewUser;
use crate::account::models::RegisterCommand;
use crate::account::models::Session;
use crate::account::models::User;
use crate::domain::errors::StoreError;

/// Port for account operations.
#[async_trait]
pub trait AccountServicePort: Send + Sync + 'static {
    /// Register a new user.
    ///
    /// # Arguments
    /// * `command` - Validated registration data with a plaintext password
    ///
    /// # Errors
    /// * `EmailAlreadyRegistered` - Only when duplicate rejection is enabled
    /// * `Password` - Hashing failed
    /// * `Store` - Store unreachable, timed out or answered non-2xx
    async fn register(&self, command: RegisterCommand) -> Result<(), AccountError>;

    /// Verify credentials and open a session.
    ///
    /// # Arguments
    /// * `command` - Email and plaintext password
    ///
    /// # Returns
    /// Session with a signed token for the matching user
    ///
    /// # Errors
    /// * `InvalidCredentials` - No user with this email, or wrong password
    /// * `Token` - Token generation failed
    /// * `Store` - Store unreachable, timed out, non-2xx or unparseable
    async fn login(&self, command: LoginCommand) -> Result<Session, AccountError>;
}

/// User collection held by the external store.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Submit a new user record.
    ///
    /// # Errors
    /// * `StoreError` - Any failure, including a non-2xx answer
    async fn create(&self, user: NewUser) -> Result<(), StoreError>;

    /// Fetch the full user collection.
    ///
    /// # Errors
    /// * `StoreError` - Any failure, including an unparseable body
    async fn list_all(&self) -> Result<Vec<User>, StoreError>;
}
