pub mod models;
pub mod test_utils;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::path::Path;
use std::time::Duration;

/// Opens a connection pool for `url`.
///
/// Postgres DSNs are used as-is. For `sqlite://` file URLs the parent
/// directory is created first, since SQLite won't create intermediate dirs.
pub async fn connect(url: &str) -> Result<DatabaseConnection, DbErr> {
    if let Some(path) = url.strip_prefix("sqlite://") {
        let path = path.split('?').next().unwrap_or(path);
        if let Some(parent) = Path::new(path).parent() {
            let _ = std::fs::create_dir_all(parent);
        }
    }

    let mut options = ConnectOptions::new(url.to_owned());
    options
        .connect_timeout(Duration::from_secs(10))
        .sqlx_logging(true)
        .sqlx_logging_level(log::LevelFilter::Debug);

    let db = Database::connect(options).await?;
    log::info!("connected to database");
    Ok(db)
}

/// Closes the pool. Errors are logged rather than returned so callers can
/// always invoke this on their way out.
pub async fn disconnect(db: DatabaseConnection) {
    match db.close().await {
        Ok(()) => log::info!("database connection closed"),
        Err(e) => log::warn!("error while closing database connection: {e}"),
    }
}
