mod category;
mod question;
mod quiz;

pub use self::category::CategoryService;
pub use self::question::QuestionService;
pub use self::quiz::QuizService;
