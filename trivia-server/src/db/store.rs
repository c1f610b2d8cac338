//! Storage trait used by the HTTP handlers

use async_trait::async_trait;
use sqlx::PgPool;

pub use super::repos::questions::QuestionFilter;
use super::repos::{CategoryRepo, DbError, QuestionRepo};
use crate::models::{Category, CategoryId, NewQuestion, Paginated, Pagination, Question, QuestionId};

/// Everything the API needs from persistence (testable)
#[async_trait]
pub trait TriviaStore: Send + Sync {
    async fn list_categories(&self) -> Result<Vec<Category>, DbError>;

    /// Fails with `DbError::NotFound` for an unknown id.
    async fn get_category(&self, id: CategoryId) -> Result<Category, DbError>;

    async fn list_questions(
        &self,
        filter: &QuestionFilter,
        page: Pagination,
    ) -> Result<Paginated<Question>, DbError>;

    async fn create_question(&self, new: NewQuestion) -> Result<Question, DbError>;

    /// Fails with `DbError::NotFound` for an unknown id.
    async fn delete_question(&self, id: QuestionId) -> Result<Question, DbError>;

    /// Every question eligible for a quiz in `category` (`None` = all).
    async fn quiz_candidates(&self, category: Option<CategoryId>) -> Result<Vec<Question>, DbError>;
}

/// Postgres-backed store
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TriviaStore for PgStore {
    async fn list_categories(&self) -> Result<Vec<Category>, DbError> {
        CategoryRepo::new(&self.pool).list().await
    }

    async fn get_category(&self, id: CategoryId) -> Result<Category, DbError> {
        CategoryRepo::new(&self.pool).get(id).await
    }

    async fn list_questions(
        &self,
        filter: &QuestionFilter,
        page: Pagination,
    ) -> Result<Paginated<Question>, DbError> {
        QuestionRepo::new(&self.pool).list(filter, page).await
    }

    async fn create_question(&self, new: NewQuestion) -> Result<Question, DbError> {
        QuestionRepo::new(&self.pool).create(new).await
    }

    async fn delete_question(&self, id: QuestionId) -> Result<Question, DbError> {
        QuestionRepo::new(&self.pool).delete(id).await
    }

    async fn quiz_candidates(&self, category: Option<CategoryId>) -> Result<Vec<Question>, DbError> {
        QuestionRepo::new(&self.pool).for_quiz(category).await
    }
}
