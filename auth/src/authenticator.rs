use chrono::Duration;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::jwt::SessionClaims;
use crate::password::HashScheme;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and session
/// token issuance.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
}

/// Result of successful authentication.
#[derive(Debug, Clone)]
pub struct AuthenticationResult {
    /// Signed session token
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator using Argon2 and one hour tokens.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for token signing
    pub fn new(jwt_secret: &[u8]) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            jwt_handler: JwtHandler::new(jwt_secret),
        }
    }

    /// Create an authenticator from explicit parts.
    pub fn from_parts(password_hasher: PasswordHasher, jwt_handler: JwtHandler) -> Self {
        Self {
            password_hasher,
            jwt_handler,
        }
    }

    /// Create an authenticator with a chosen hash scheme and token lifetime.
    ///
    /// # Errors
    /// * `PasswordError` - Hash scheme parameters are out of range
    pub fn with_settings(
        jwt_secret: &[u8],
        scheme: HashScheme,
        token_ttl: Duration,
    ) -> Result<Self, PasswordError> {
        Ok(Self::from_parts(
            PasswordHasher::with_scheme(scheme)?,
            JwtHandler::new(jwt_secret).with_ttl(token_ttl),
        ))
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify a password against its stored hash and, on success, issue a
    /// session token for `subject` and `role`.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Stored hash could not be parsed
    /// * `JwtError` - Token generation failed
    pub fn authenticate<S: Serialize>(
        &self,
        password: &str,
        stored_hash: &str,
        subject: S,
        role: &str,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        let is_valid = self.password_hasher.verify(password, stored_hash)?;

        if !is_valid {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.jwt_handler.issue(subject, role)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Issue a session token without password verification.
    ///
    /// # Errors
    /// * `JwtError` - Token generation failed
    pub fn generate_token<S: Serialize>(&self, subject: S, role: &str) -> Result<String, JwtError> {
        self.jwt_handler.issue(subject, role)
    }

    /// Validate and decode a session token.
    ///
    /// # Errors
    /// * `JwtError` - Signature mismatch, expiry, or malformed token
    pub fn validate_token<S: DeserializeOwned>(
        &self,
        token: &str,
    ) -> Result<SessionClaims<S>, JwtError> {
        self.jwt_handler.verify(token)
    }
}
