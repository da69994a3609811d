use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use std::str::FromStr;
use tracing::info;

use crate::utils::AppError;

pub type ConnectionPool = SqlitePool;

const SEED_SQL: &str = include_str!("../../seed/trivia.sql");

pub struct ConnectionManager;

impl ConnectionManager {
    pub async fn new_pool(
        database_url: &str,
        max_connections: u32,
        run_migrations: bool,
    ) -> Result<ConnectionPool, AppError> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        if run_migrations {
            Self::migrate(&pool).await?;
        }

        Ok(pool)
    }

    /// A single never-recycled connection, so the in-memory database lives as
    /// long as the pool does.
    pub async fn in_memory() -> Result<ConnectionPool, AppError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;

        Self::migrate(&pool).await?;

        Ok(pool)
    }

    pub async fn migrate(pool: &ConnectionPool) -> Result<(), AppError> {
        info!("Running database migrations");
        sqlx::migrate!("./migrations").run(pool).await?;
        Ok(())
    }

    /// Loads the stock categories and questions. Safe to run repeatedly.
    pub async fn seed(pool: &ConnectionPool) -> Result<(), AppError> {
        info!("Seeding database with stock trivia data");
        sqlx::raw_sql(SEED_SQL).execute(pool).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seed_is_idempotent() {
        let pool = ConnectionManager::in_memory().await.unwrap();

        ConnectionManager::seed(&pool).await.unwrap();
        ConnectionManager::seed(&pool).await.unwrap();

        let (questions,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM questions")
            .fetch_one(&pool)
            .await
            .unwrap();
        let (categories,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM categories")
            .fetch_one(&pool)
            .await
            .unwrap();

        assert_eq!(questions, 19);
        assert_eq!(categories, 6);
    }
}
