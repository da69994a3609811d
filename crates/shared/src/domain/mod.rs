mod request;
mod response;

pub use self::request::{
    ANY_CATEGORY, CreateQuestionRequest, PageQuery, Pagination, QUESTIONS_PER_PAGE,
    QuestionCommand, QuestionFilter, QuestionsPostRequest, QuizCategory, QuizRequest,
};

pub use self::response::{
    CategoriesResponse, ErrorResponse, QuestionListResponse, QuestionResponse, QuizResponse,
};
