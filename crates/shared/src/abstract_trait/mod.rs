mod category;
mod question;
mod quiz;

pub use self::category::{
    CategoryRepositoryTrait, CategoryServiceTrait, DynCategoryRepository, DynCategoryService,
};
pub use self::question::{
    DynQuestionRepository, DynQuestionService, QuestionRepositoryTrait, QuestionServiceTrait,
};
pub use self::quiz::{DynQuizService, QuizServiceTrait};
