mod category;
mod question;

pub use self::category::CategoryRepository;
pub use self::question::QuestionRepository;
