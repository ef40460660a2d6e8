use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};

/// sqlx enables `foreign_keys` on every SQLite connection by default. An
/// in-memory URL needs `max_connections == 1`; `AppConfig` enforces that.
pub async fn init_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
