use async_trait::async_trait;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::{
    abstract_trait::{CategoryServiceTrait, DynCategoryRepository},
    domain::{CategoriesResponse, ErrorResponse},
    utils::{Method, Metrics, OperationTracer},
};

#[derive(Clone)]
pub struct CategoryService {
    repository: DynCategoryRepository,
    tracer: OperationTracer,
}

impl std::fmt::Debug for CategoryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CategoryService")
            .field("repository", &"DynCategoryRepository")
            .finish()
    }
}

impl CategoryService {
    pub fn new(repository: DynCategoryRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register("category_service", "CategoryService", registry);

        Self {
            repository,
            tracer: OperationTracer::new("category", Arc::new(Mutex::new(metrics))),
        }
    }
}

#[async_trait]
impl CategoryServiceTrait for CategoryService {
    async fn get_categories(&self) -> Result<CategoriesResponse, ErrorResponse> {
        let tracing_ctx = self.tracer.start_tracing("GetCategories", &[]);

        let result = self
            .repository
            .find_all()
            .await
            .map(CategoriesResponse::from);

        self.tracer
            .complete(&tracing_ctx, Method::Get, result, "Categories retrieved")
            .await
    }
}
