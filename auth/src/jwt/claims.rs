use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claims carried by a session token.
///
/// The payload is `{id, role, iat, exp}`; any issuer sharing the secret and
/// this shape produces interchangeable tokens. The subject type is left to the caller because record stores
/// disagree on whether identifiers are numbers or strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionClaims<S = String> {
    /// Subject (user identifier)
    pub id: S,

    /// Role of the subject, opaque to this library
    pub role: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl<S> SessionClaims<S> {
    /// Create claims for a subject issued at `issued_at` and valid for `ttl`.
    pub fn new(id: S, role: impl Into<String>, issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            id,
            role: role.into(),
            iat: issued_at.timestamp(),
            exp: (issued_at + ttl).timestamp(),
        }
    }
}
