mod category;
mod error;
mod question;
mod quiz;

pub use self::category::CategoriesResponse;
pub use self::error::ErrorResponse;
pub use self::question::{QuestionListResponse, QuestionResponse};
pub use self::quiz::QuizResponse;
