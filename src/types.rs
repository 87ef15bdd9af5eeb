pub use crate::utils::database;
use crate::utils::config::Config;
use async_trait::async_trait;

#[derive(Clone)]
pub struct AppContext {
    pub host: String,
    pub port: u16,
}

/// Process-wide handles shared by every request through `Arc<Context>`.
#[derive(Clone)]
pub struct Context {
    pub app: AppContext,
    pub db_conn: database::DatabaseConnection,
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Result<Context, database::Error>;
}

#[async_trait]
impl ToContext for Config {
    async fn to_context(self) -> Result<Context, database::Error> {
        let db_conn =
            database::connect(self.database.url.as_str(), self.database.max_connections).await?;
        tracing::info!("Database connection pool created");

        database::migrate(&db_conn).await?;
        tracing::info!("Database migrations applied");

        Ok(Context {
            app: AppContext {
                host: self.app.host,
                port: self.app.port,
            },
            db_conn,
        })
    }
}
