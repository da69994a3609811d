use prometheus_client::registry::Registry;
use std::sync::Arc;

use crate::{
    abstract_trait::{
        DynCategoryRepository, DynCategoryService, DynQuestionRepository, DynQuestionService,
        DynQuizService,
    },
    config::{ConnectionPool, SearchMatch},
    repository::{CategoryRepository, QuestionRepository},
    service::{CategoryService, QuestionService, QuizService},
};

#[derive(Clone)]
pub struct DependenciesInject {
    pub category_service: DynCategoryService,
    pub question_service: DynQuestionService,
    pub quiz_service: DynQuizService,
}

impl std::fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("category_service", &"DynCategoryService")
            .field("question_service", &"DynQuestionService")
            .field("quiz_service", &"DynQuizService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool, search_match: SearchMatch, registry: &mut Registry) -> Self {
        let category_repository =
            Arc::new(CategoryRepository::new(pool.clone())) as DynCategoryRepository;
        let question_repository = Arc::new(QuestionRepository::new(pool)) as DynQuestionRepository;

        let category_service =
            Arc::new(CategoryService::new(category_repository.clone(), registry))
                as DynCategoryService;

        let question_service = Arc::new(QuestionService::new(
            question_repository.clone(),
            category_repository,
            search_match,
            registry,
        )) as DynQuestionService;

        let quiz_service =
            Arc::new(QuizService::new(question_repository, registry)) as DynQuizService;

        Self {
            category_service,
            question_service,
            quiz_service,
        }
    }
}
