use deadpool_postgres::Pool;
use crate::config::Config;
use crate::error::Result;

/// The application's state, cloned into every router.
#[derive(Clone)]
pub struct AppState {
    /// The database connection pool.
    pub db: Pool,
    /// The application's configuration.
    pub config: Config,
}

impl AppState {
    /// Creates a new `AppState` with a freshly constructed pool.
    pub fn new(config: &Config) -> Result<Self> {
        let db = crate::db::create_pool(&config.database_url)?;
        tracing::info!("✅ PostgreSQL pool initialized with deadpool-postgres");

        Ok(AppState {
            db,
            config: config.clone(),
        })
    }
}
