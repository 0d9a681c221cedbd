use std::env;
use anyhow::{Context, Result};
use zeroize::Zeroizing;

/// The application's configuration, read once at startup.
#[derive(Clone)]
pub struct Config {
    /// The URL of the PostgreSQL database.
    pub database_url: String,
    /// The secret used to sign and verify JWTs.
    pub jwt_secret: Zeroizing<String>,
    /// Token lifetime in hours.
    pub jwt_expires_hours: i64,
    /// The TCP port the server listens on.
    pub port: u16,
}

impl Config {
    /// Creates a new `Config` from environment variables.
    pub fn from_env() -> Result<Self> {
        let jwt_secret = env::var("JWT_SECRET")
            .context("JWT_SECRET must be set (generate with: openssl rand -hex 32)")?;

        if jwt_secret.len() < 32 {
            anyhow::bail!("JWT_SECRET must be at least 32 characters");
        }

        Ok(Self {
            database_url: env::var("DATABASE_URL")
                .context("DATABASE_URL must be set")?,
            jwt_secret: Zeroizing::new(jwt_secret),
            jwt_expires_hours: env::var("JWT_EXPIRES_HOURS")
                .unwrap_or_else(|_| "24".to_string())
                .parse()
                .context("Invalid JWT_EXPIRES_HOURS")?,
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("Invalid PORT")?,
        })
    }
}
