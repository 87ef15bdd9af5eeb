use sqlx::{migrate::MigrateError, postgres::PgPoolOptions, PgPool};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Error connecting to database: {0}")]
    Connect(#[from] sqlx::Error),
    #[error("Failed to run database migrations: {0}")]
    Migrate(#[from] MigrateError),
}

#[derive(Clone)]
pub struct DatabaseConnection {
    pub pool: PgPool,
}

impl DatabaseConnection {
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

pub async fn connect(
    database_url: &str,
    max_connections: u32,
) -> Result<DatabaseConnection, Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
        .map(|pool| DatabaseConnection { pool })
        .map_err(|err| {
            tracing::error!("Error connecting to database: {}", err);
            Error::Connect(err)
        })
}

/// Applies the embedded migrations. The advertisement table migration is
/// written with `IF NOT EXISTS`, so running against an already provisioned
/// database is a no-op.
pub async fn migrate(db_conn: &DatabaseConnection) -> Result<(), Error> {
    sqlx::migrate!().run(&db_conn.pool).await.map_err(|err| {
        tracing::error!("Failed to run database migrations: {}", err);
        Error::Migrate(err)
    })
}
