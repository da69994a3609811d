use async_trait::async_trait;
use std::sync::Arc;

use crate::{
    domain::{CategoriesResponse, ErrorResponse},
    model::category::Category,
    utils::AppError,
};

pub type DynCategoryRepository = Arc<dyn CategoryRepositoryTrait + Send + Sync>;
pub type DynCategoryService = Arc<dyn CategoryServiceTrait + Send + Sync>;

#[async_trait]
pub trait CategoryRepositoryTrait {
    /// All categories ordered by id.
    async fn find_all(&self) -> Result<Vec<Category>, AppError>;
}

#[async_trait]
pub trait CategoryServiceTrait {
    async fn get_categories(&self) -> Result<CategoriesResponse, ErrorResponse>;
}
