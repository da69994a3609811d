mod filter;
mod pagination;
mod question;
mod quiz;

pub use self::filter::QuestionFilter;
pub use self::pagination::{PageQuery, Pagination, QUESTIONS_PER_PAGE};
pub use self::question::{CreateQuestionRequest, QuestionCommand, QuestionsPostRequest};
pub use self::quiz::{ANY_CATEGORY, QuizCategory, QuizRequest};
