use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::PasswordError;

/// Algorithm used for newly produced hashes.
///
/// Verification does not depend on this choice: the algorithm is read back
/// from the stored hash itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HashScheme {
    /// Argon2id with library default parameters.
    #[default]
    Argon2,
    /// bcrypt with a fixed cost factor.
    Bcrypt { cost: u32 },
}

impl HashScheme {
    /// Default cost factor for bcrypt hashes.
    pub const DEFAULT_BCRYPT_COST: u32 = 10;
}

/// Password hashing implementation.
///
/// Produces salted, adaptive one-way hashes and verifies plaintexts against
/// either Argon2 (PHC string) or bcrypt (`$2a$`, `$2b$`, `$2y$`) hashes.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    scheme: HashScheme,
}

impl PasswordHasher {
    /// Create a new password hasher using Argon2id.
    ///
    /// # Returns
    /// PasswordHasher instance configured with secure defaults
    pub fn new() -> Self {
        Self {
            scheme: HashScheme::Argon2,
        }
    }

    /// Create a password hasher for an explicit scheme.
    ///
    /// # Errors
    /// * `InvalidCost` - bcrypt cost outside the range the algorithm accepts
    pub fn with_scheme(scheme: HashScheme) -> Result<Self, PasswordError> {
        if let HashScheme::Bcrypt { cost } = scheme {
            if !(4..=31).contains(&cost) {
                return Err(PasswordError::InvalidCost(cost));
            }
        }
        Ok(Self { scheme })
    }

    /// Hash a plaintext password.
    ///
    /// A fresh random salt is generated for every call, so hashing the same
    /// password twice yields different strings.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// Self-describing hash string (algorithm, parameters, salt and digest)
    ///
    /// # Errors
    /// * `HashingFailed` - Password hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        match self.scheme {
            HashScheme::Argon2 => {
                let salt = SaltString::generate(&mut OsRng);
                Argon2::default()
                    .hash_password(password.as_bytes(), &salt)
                    .map(|hash| hash.to_string())
                    .map_err(|e| PasswordError::HashingFailed(e.to_string()))
            }
            HashScheme::Bcrypt { cost } => bcrypt::hash(password, cost)
                .map_err(|e| PasswordError::HashingFailed(e.to_string())),
        }
    }

    /// Verify a password against a stored hash.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `hash` - Stored hash, Argon2 PHC string or bcrypt
    ///
    /// # Returns
    /// True if password matches, false otherwise
    ///
    /// # Errors
    /// * `VerificationFailed` - Hash is not a recognised, well-formed hash
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        if is_bcrypt_hash(hash) {
            return bcrypt::verify(password, hash).map_err(|e| {
                PasswordError::VerificationFailed(format!("Invalid bcrypt hash: {}", e))
            });
        }

        let parsed_hash = PasswordHash::new(hash).map_err(|e| {
            PasswordError::VerificationFailed(format!("Invalid password hash: {}", e))
        })?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

fn is_bcrypt_hash(hash: &str) -> bool {
    ["$2a$", "$2b$", "$2x$", "$2y$"]
        .iter()
        .any(|prefix| hash.starts_with(prefix))
}
