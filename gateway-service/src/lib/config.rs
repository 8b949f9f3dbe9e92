use std::env;
use std::path::PathBuf;

use auth::HashScheme;
use auth::JwtHandler;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

/// Application configuration for the gateway.
///
/// Built once at startup and shared read-only afterwards.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    pub store: StoreConfig,
    #[serde(default)]
    pub password: PasswordConfig,
    #[serde(default)]
    pub accounts: AccountsConfig,
    #[serde(default)]
    pub frontend: FrontendConfig,
}

/// HTTP server configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

/// Session token configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    #[serde(default = "default_expiration_hours")]
    pub expiration_hours: i64,
}

/// External record store configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    pub base_url: String,
    /// Deadline applied to every outbound store call.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PasswordScheme {
    #[default]
    Argon2,
    Bcrypt,
}

/// Password hashing configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct PasswordConfig {
    #[serde(default)]
    pub scheme: PasswordScheme,
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
}

impl PasswordConfig {
    pub fn hash_scheme(&self) -> HashScheme {
        match self.scheme {
            PasswordScheme::Argon2 => HashScheme::Argon2,
            PasswordScheme::Bcrypt => HashScheme::Bcrypt {
                cost: self.bcrypt_cost,
            },
        }
    }
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            scheme: PasswordScheme::default(),
            bcrypt_cost: default_bcrypt_cost(),
        }
    }
}

/// Account registration policy.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AccountsConfig {
    /// Reject registration when the email already belongs to a stored user.
    #[serde(default)]
    pub reject_duplicate_emails: bool,
}

/// Bundled static frontend.
#[derive(Debug, Deserialize, Clone)]
pub struct FrontendConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_frontend_dir")]
    pub dir: PathBuf,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            dir: default_frontend_dir(),
        }
    }
}

/// Longest accepted token lifetime, one year.
pub const MAX_EXPIRATION_HOURS: i64 = 24 * 365;

fn default_expiration_hours() -> i64 {
    JwtHandler::DEFAULT_TTL_HOURS
}

fn default_timeout_ms() -> u64 {
    5_000
}

fn default_bcrypt_cost() -> u32 {
    HashScheme::DEFAULT_BCRYPT_COST
}

fn default_frontend_dir() -> PathBuf {
    PathBuf::from("frontend/build")
}

impl Config {
    /// Load configuration from files with environment variable overrides.
    ///
    /// # Configuration Priority (highest to lowest)
    /// 1. Legacy variables `PORT`, `JWT_SECRET` and `NODE_ENV=production`
    /// 2. Environment variables (JWT__SECRET, SERVER__HTTP_PORT, STORE__BASE_URL, etc.)
    /// 3. Environment-specific config file (config/{environment}.toml)
    /// 4. Default config file (config/default.toml)
    ///
    /// # Errors
    /// Returns error if required values are missing or invalid, including an
    /// empty signing secret
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());
        let serve_frontend = env::var("NODE_ENV")
            .ok()
            .filter(|mode| mode == "production")
            .map(|_| true);

        let configuration = ConfigBuilder::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Layer on environment variables (with __ as separator)
            // Example: STORE__BASE_URL=http://... overrides store.base_url
            .add_source(
                Environment::default()
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("server.http_port", env::var("PORT").ok())?
            .set_override_option("jwt.secret", env::var("JWT_SECRET").ok())?
            .set_override_option("frontend.enabled", serve_frontend)?
            .build()?;

        let config: Config = configuration.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    /// Reject configurations the gateway cannot start with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt.secret.trim().is_empty() {
            return Err(ConfigError::Message(
                "jwt.secret must be set (JWT__SECRET or JWT_SECRET)".to_string(),
            ));
        }
        if !(1..=MAX_EXPIRATION_HOURS).contains(&self.jwt.expiration_hours) {
            return Err(ConfigError::Message(format!(
                "jwt.expiration_hours must be between 1 and {}, got {}",
                MAX_EXPIRATION_HOURS, self.jwt.expiration_hours
            )));
        }
        if self.store.timeout_ms == 0 {
            return Err(ConfigError::Message(
                "store.timeout_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
