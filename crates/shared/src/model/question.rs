use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;

/// A stored question. `category` is free text and is not checked against the
/// categories table.
#[derive(Debug, FromRow, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: String,
    pub difficulty: i64,
}
