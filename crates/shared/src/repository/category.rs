use async_trait::async_trait;
use sea_query::{Order, Query, SqliteQueryBuilder};
use sea_query_binder::SqlxBinder;
use tracing::{error, info};

use crate::abstract_trait::CategoryRepositoryTrait;
use crate::config::ConnectionPool;
use crate::model::category::Category;
use crate::schema::category::Categories;
use crate::utils::AppError;

pub struct CategoryRepository {
    db_pool: ConnectionPool,
}

impl CategoryRepository {
    pub fn new(db_pool: ConnectionPool) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl CategoryRepositoryTrait for CategoryRepository {
    async fn find_all(&self) -> Result<Vec<Category>, AppError> {
        info!("Getting all categories");

        let (sql, values) = Query::select()
            .columns([Categories::Id, Categories::Type])
            .from(Categories::Table)
            .order_by(Categories::Id, Order::Asc)
            .build_sqlx(SqliteQueryBuilder);

        let categories = sqlx::query_as_with::<_, Category, _>(&sql, values)
            .fetch_all(&self.db_pool)
            .await
            .map_err(|e| {
                error!("Error fetching categories: {e}");
                AppError::SqlxError(e)
            })?;

        info!("Found {} categories", categories.len());

        Ok(categories)
    }
}
