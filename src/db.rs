use deadpool_postgres::{Config, ManagerConfig, Pool, PoolConfig, RecyclingMethod, Runtime};
use tokio_postgres::NoTls;
use tokio_postgres::config::Host;
use crate::error::Result;
use std::time::Duration;

/// Creates the process-wide database connection pool.
///
/// The URL is parsed with `tokio_postgres` and re-expressed as a deadpool
/// configuration so both `postgres://` URLs and key/value connection
/// strings work. The pool is lazy: no connection is opened until the
/// first checkout.
pub fn create_pool(database_url: &str) -> Result<Pool> {
    let pg_config: tokio_postgres::Config = database_url.parse()?;

    let mut cfg = Config::new();

    if let Some(Host::Tcp(hostname)) = pg_config.get_hosts().first() {
        cfg.host = Some(hostname.clone());
    }

    if let Some(port) = pg_config.get_ports().first() {
        cfg.port = Some(*port);
    }

    if let Some(dbname) = pg_config.get_dbname() {
        cfg.dbname = Some(dbname.to_string());
    }

    if let Some(user) = pg_config.get_user() {
        cfg.user = Some(user.to_string());
    }

    if let Some(password) = pg_config.get_password() {
        cfg.password = Some(String::from_utf8_lossy(password).to_string());
    }

    cfg.manager = Some(ManagerConfig {
        recycling_method: RecyclingMethod::Fast,
    });

    let mut pool_config = PoolConfig::new(16);
    pool_config.timeouts.wait = Some(Duration::from_secs(5));
    pool_config.timeouts.create = Some(Duration::from_secs(2));
    pool_config.timeouts.recycle = Some(Duration::from_secs(1));
    cfg.pool = Some(pool_config);

    Ok(cfg.create_pool(Some(Runtime::Tokio1), NoTls)?)
}
