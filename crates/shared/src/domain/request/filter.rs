use crate::config::SearchMatch;

/// Which questions a listing covers.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum QuestionFilter {
    #[default]
    All,
    /// Stored category text equals the value.
    Category(String),
    Search { term: String, strategy: SearchMatch },
}
