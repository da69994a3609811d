use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::utils::{AppError, deserialize_opt_i64_from_any, deserialize_opt_string_from_any};

/// Body of `POST /questions`. Carries either a search or a new question.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct QuestionsPostRequest {
    #[serde(rename = "searchTerm", default)]
    pub search_term: Option<String>,

    #[serde(default)]
    pub question: Option<String>,

    #[serde(default)]
    pub answer: Option<String>,

    #[serde(default, deserialize_with = "deserialize_opt_string_from_any")]
    #[schema(value_type = Option<String>)]
    pub category: Option<String>,

    #[serde(default, deserialize_with = "deserialize_opt_i64_from_any")]
    #[schema(value_type = Option<i64>)]
    pub difficulty: Option<i64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, ToSchema, Validate)]
pub struct CreateQuestionRequest {
    #[validate(length(min = 1, message = "Question must not be empty"))]
    pub question: String,

    #[validate(length(min = 1, message = "Answer must not be empty"))]
    pub answer: String,

    pub category: String,

    pub difficulty: i64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuestionCommand {
    /// `searchTerm` was sent but empty.
    ListAll,
    Search(String),
    Create(CreateQuestionRequest),
}

const DEFAULT_DIFFICULTY: i64 = 1;

impl QuestionsPostRequest {
    /// `searchTerm` wins over the question fields. A payload with neither a
    /// search term nor both `question` and `category` is unprocessable.
    pub fn into_command(self) -> Result<QuestionCommand, AppError> {
        if let Some(term) = self.search_term {
            return Ok(if term.is_empty() {
                QuestionCommand::ListAll
            } else {
                QuestionCommand::Search(term)
            });
        }

        match (self.question, self.category) {
            (Some(question), Some(category)) => {
                let request = CreateQuestionRequest {
                    question,
                    answer: self.answer.unwrap_or_default(),
                    category,
                    difficulty: self.difficulty.unwrap_or(DEFAULT_DIFFICULTY),
                };
                request.validate()?;
                Ok(QuestionCommand::Create(request))
            }
            _ => Err(AppError::Unprocessable(
                "expected either searchTerm or both question and category".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> Result<QuestionCommand, AppError> {
        serde_json::from_str::<QuestionsPostRequest>(body)
            .unwrap()
            .into_command()
    }

    #[test]
    fn empty_search_term_lists_everything() {
        assert_eq!(parse(r#"{"searchTerm": ""}"#).unwrap(), QuestionCommand::ListAll);
    }

    #[test]
    fn search_term_wins_over_question_fields() {
        let cmd = parse(r#"{"searchTerm": "title", "question": "q", "category": 1}"#).unwrap();
        assert_eq!(cmd, QuestionCommand::Search("title".into()));
    }

    #[test]
    fn null_search_term_means_create() {
        let cmd = parse(
            r#"{"searchTerm": null, "question": "what does water boil at", "answer": "100", "category": "1", "difficulty": "1"}"#,
        )
        .unwrap();

        assert_eq!(
            cmd,
            QuestionCommand::Create(CreateQuestionRequest {
                question: "what does water boil at".into(),
                answer: "100".into(),
                category: "1".into(),
                difficulty: 1,
            })
        );
    }

    #[test]
    fn missing_difficulty_defaults() {
        let cmd = parse(r#"{"question": "q?", "answer": "a", "category": 2}"#).unwrap();
        match cmd {
            QuestionCommand::Create(req) => {
                assert_eq!(req.difficulty, DEFAULT_DIFFICULTY);
                assert_eq!(req.category, "2");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn empty_or_missing_answer_is_rejected() {
        let err = parse(r#"{"question": "q?", "answer": "", "category": "1"}"#).unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));

        let err = parse(r#"{"question": "q?", "category": "1"}"#).unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[test]
    fn payload_without_either_branch_is_unprocessable() {
        assert!(matches!(parse("{}").unwrap_err(), AppError::Unprocessable(_)));
        assert!(matches!(
            parse(r#"{"question": "q?", "answer": "a"}"#).unwrap_err(),
            AppError::Unprocessable(_)
        ));
    }
}
