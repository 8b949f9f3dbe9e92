//! Authentication utilities library
//!
//! Provides the credential and session primitives used by the gateway:
//! - Password hashing (Argon2id, with bcrypt verification for legacy records)
//! - Session token issuance and verification (HS256 JWT)
//! - Authentication coordination
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Session Tokens
//! ```
//! use auth::{JwtHandler, SessionClaims};
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!");
//! let token = handler.issue("user123", "staff").unwrap();
//! let claims: SessionClaims<String> = handler.verify(&token).unwrap();
//! assert_eq!(claims.role, "staff");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, SessionClaims};
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue a token
//! let result = auth.authenticate("password123", &hash, 1u64, "admin").unwrap();
//!
//! // Validate token
//! let decoded: SessionClaims<u64> = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(decoded.id, 1);
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::SessionClaims;
pub use password::HashScheme;
pub use password::PasswordError;
pub use password::PasswordHasher;
