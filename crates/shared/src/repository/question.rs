use async_trait::async_trait;
use sea_query::{Expr, Func, LikeExpr, Order, Query, SelectStatement, SimpleExpr, SqliteQueryBuilder};
use sea_query_binder::SqlxBinder;
use tracing::{error, info};

use crate::abstract_trait::QuestionRepositoryTrait;
use crate::config::{ConnectionPool, SearchMatch};
use crate::domain::{CreateQuestionRequest, Pagination, QuestionFilter};
use crate::model::question::Question;
use crate::schema::question::Questions;
use crate::utils::AppError;

const LIKE_ESCAPE: char = '!';

pub struct QuestionRepository {
    db_pool: ConnectionPool,
}

impl QuestionRepository {
    pub fn new(db_pool: ConnectionPool) -> Self {
        Self { db_pool }
    }

    fn select_questions(filter: &QuestionFilter) -> SelectStatement {
        let mut select_query = Query::select();
        select_query
            .columns([
                Questions::Id,
                Questions::Question,
                Questions::Answer,
                Questions::Category,
                Questions::Difficulty,
            ])
            .from(Questions::Table)
            .order_by(Questions::Id, Order::Asc);

        if let Some(condition) = filter_condition(filter) {
            select_query.and_where(condition);
        }

        select_query
    }

    async fn fetch_questions(&self, select_query: &SelectStatement) -> Result<Vec<Question>, AppError> {
        let (sql, values) = select_query.build_sqlx(SqliteQueryBuilder);

        sqlx::query_as_with::<_, Question, _>(&sql, values)
            .fetch_all(&self.db_pool)
            .await
            .map_err(|e| {
                error!("Error fetching questions: {e}");
                AppError::SqlxError(e)
            })
    }
}

fn filter_condition(filter: &QuestionFilter) -> Option<SimpleExpr> {
    match filter {
        QuestionFilter::All => None,
        QuestionFilter::Category(category) => {
            Some(Expr::col(Questions::Category).eq(category.as_str()))
        }
        QuestionFilter::Search { term, strategy } => Some(search_condition(term, *strategy)),
    }
}

fn search_condition(term: &str, strategy: SearchMatch) -> SimpleExpr {
    match strategy {
        // SQLite LIKE folds ASCII letters only
        SearchMatch::Bounded => Expr::col(Questions::Question).like(
            LikeExpr::new(format!("% {} %", escape_like(term))).escape(LIKE_ESCAPE),
        ),
        SearchMatch::Substring => Expr::col(Questions::Question).like(
            LikeExpr::new(format!("%{}%", escape_like(term))).escape(LIKE_ESCAPE),
        ),
        SearchMatch::Exact => Expr::cust_with_values("instr(question, ?) > 0", [term.to_string()]),
    }
}

fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

#[async_trait]
impl QuestionRepositoryTrait for QuestionRepository {
    async fn find_page(
        &self,
        filter: &QuestionFilter,
        pagination: Pagination,
    ) -> Result<Vec<Question>, AppError> {
        info!(
            "Getting questions - filter: {:?}, page: {}, page_size: {}",
            filter, pagination.page, pagination.per_page
        );

        let mut select_query = Self::select_questions(filter);
        select_query
            .limit(pagination.limit())
            .offset(pagination.offset());

        let questions = self.fetch_questions(&select_query).await?;

        info!("Found {} questions on page {}", questions.len(), pagination.page);

        Ok(questions)
    }

    async fn find_all(&self, filter: &QuestionFilter) -> Result<Vec<Question>, AppError> {
        info!("Getting all questions - filter: {:?}", filter);

        let questions = self.fetch_questions(&Self::select_questions(filter)).await?;

        info!("Found {} questions", questions.len());

        Ok(questions)
    }

    async fn count(&self, filter: &QuestionFilter) -> Result<i64, AppError> {
        let mut count_query = Query::select();
        count_query
            .expr(Func::count(Expr::col(Questions::Id)))
            .from(Questions::Table);

        if let Some(condition) = filter_condition(filter) {
            count_query.and_where(condition);
        }

        let (sql, values) = count_query.build_sqlx(SqliteQueryBuilder);

        let total = sqlx::query_as_with::<_, (i64,), _>(&sql, values)
            .fetch_one(&self.db_pool)
            .await
            .map_err(|e| {
                error!("Error counting questions: {e}");
                AppError::SqlxError(e)
            })?;

        Ok(total.0)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Question>, AppError> {
        info!("Finding question by id: {id}");

        let (sql, values) = Query::select()
            .columns([
                Questions::Id,
                Questions::Question,
                Questions::Answer,
                Questions::Category,
                Questions::Difficulty,
            ])
            .from(Questions::Table)
            .and_where(Expr::col(Questions::Id).eq(id))
            .build_sqlx(SqliteQueryBuilder);

        let result = sqlx::query_as_with::<_, Question, _>(&sql, values)
            .fetch_optional(&self.db_pool)
            .await
            .map_err(AppError::from)?;

        info!("Find result: {:?}", result.as_ref().map(|q| q.id));
        Ok(result)
    }

    async fn create(&self, input: &CreateQuestionRequest) -> Result<Question, AppError> {
        info!("Creating new question in category {}", input.category);

        let mut insert = Query::insert();
        insert
            .into_table(Questions::Table)
            .columns([
                Questions::Question,
                Questions::Answer,
                Questions::Category,
                Questions::Difficulty,
            ]);
        insert
            .values([
                input.question.clone().into(),
                input.answer.clone().into(),
                input.category.clone().into(),
                input.difficulty.into(),
            ])
            .map_err(|e| AppError::QueryBuilderError(format!("{e:?}")))?;
        insert.returning_all();

        let (sql, values) = insert.build_sqlx(SqliteQueryBuilder);

        let question = sqlx::query_as_with::<_, Question, _>(&sql, values)
            .fetch_one(&self.db_pool)
            .await
            .map_err(|e| {
                error!("Error inserting question: {e}");
                AppError::SqlxError(e)
            })?;

        info!("New question inserted with ID: {}", question.id);

        Ok(question)
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        info!("Deleting question with ID: {id}");

        let (sql, values) = Query::delete()
            .from_table(Questions::Table)
            .and_where(Expr::col(Questions::Id).eq(id))
            .build_sqlx(SqliteQueryBuilder);

        let result = sqlx::query_with(&sql, values)
            .execute(&self.db_pool)
            .await?;

        match result.rows_affected() {
            0 => {
                error!("No question found to delete with ID: {id}");
                Err(AppError::NotFound(format!("Question with ID {id} not found")))
            }
            _ => {
                info!("Question ID: {id} deleted successfully");
                Ok(())
            }
        }
    }
}
