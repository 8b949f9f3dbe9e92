use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;

use crate::account::errors::AccountError;
use crate::account::models::LoginCommand;
use crate::account::models::NewUser;
use crate::account::models::RegisterCommand;
use crate::account::models::Session;
use crate::account::models::User;
use crate::account::ports::AccountServicePort;
use crate::account::ports::UserStore;

/// Domain service for registration and login against the external store.
///
/// Holds no per-request state. Password hashing and verification are CPU
/// bound and run on the blocking pool.
pub struct AccountService<US>
where
    US: UserStore,
{
    store: Arc<US>,
    authenticator: Arc<Authenticator>,
    reject_duplicate_emails: bool,
}

impl<US> AccountService<US>
where
    US: UserStore,
{
    /// Create a new account service.
    ///
    /// # Arguments
    /// * `store` - User collection of the external store
    /// * `authenticator` - Password hasher and token issuer
    pub fn new(store: Arc<US>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            store,
            authenticator,
            reject_duplicate_emails: false,
        }
    }

    /// Check the store for an existing email before registering.
    pub fn reject_duplicate_emails(mut self, enabled: bool) -> Self {
        self.reject_duplicate_emails = enabled;
        self
    }

    /// First stored user whose email matches exactly.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AccountError> {
        let users = self.store.list_all().await?;
        Ok(users.into_iter().find(|user| user.email == email))
    }

    async fn hash_password(&self, password: String) -> Result<String, AccountError> {
        let authenticator = Arc::clone(&self.authenticator);
        let hash = tokio::task::spawn_blocking(move || authenticator.hash_password(&password))
            .await
            .map_err(|e| AccountError::Unknown(format!("Hashing task failed: {}", e)))??;
        Ok(hash)
    }
}

#[async_trait]
impl<US> AccountServicePort for AccountService<US>
where
    US: UserStore,
{
    async fn register(&self, command: RegisterCommand) -> Result<(), AccountError> {
        let email = command.email.as_str().to_string();

        if self.reject_duplicate_emails && self.find_by_email(&email).await?.is_some() {
            return Err(AccountError::EmailAlreadyRegistered(email));
        }

        let password_hash = self.hash_password(command.password).await?;

        let user = NewUser {
            name: command.name,
            email,
            password_hash,
            role: command.role,
        };

        self.store.create(user).await?;

        Ok(())
    }

    async fn login(&self, command: LoginCommand) -> Result<Session, AccountError> {
        let user = self
            .find_by_email(&command.email)
            .await?
            .ok_or(AccountError::InvalidCredentials)?;

        let user_id = user.id.clone();
        let role = user.role.clone();
        let authenticator = Arc::clone(&self.authenticator);
        let password = command.password;

        let result = tokio::task::spawn_blocking(move || {
            authenticator.authenticate(&password, &user.password_hash, &user.id, user.role.as_str())
        })
        .await
        .map_err(|e| AccountError::Unknown(format!("Verification task failed: {}", e)))?;

        let token = match result {
            Ok(result) => result.access_token,
            Err(AuthenticationError::InvalidCredentials) => {
                return Err(AccountError::InvalidCredentials)
            }
            Err(AuthenticationError::PasswordError(e)) => {
                tracing::warn!(user_id = %user_id, error = %e, "Stored password hash is unusable");
                return Err(AccountError::InvalidCredentials);
            }
            Err(AuthenticationError::JwtError(e)) => return Err(AccountError::Token(e)),
        };

        Ok(Session {
            user_id,
            role,
            token,
        })
    }
}
