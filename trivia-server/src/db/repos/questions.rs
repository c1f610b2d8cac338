//! Question repository
//!
//! - list: COUNT + LIMIT/OFFSET page for a filter
//! - create: INSERT ... RETURNING
//! - delete: DELETE ... RETURNING (no check-then-delete)

use sqlx::{PgPool, Postgres, QueryBuilder};

use super::DbError;
use crate::models::{CategoryId, NewQuestion, Paginated, Pagination, Question, QuestionId, SearchTerm};

/// Which questions a listing covers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionFilter {
    All,
    Category(CategoryId),
    Search(SearchTerm),
}

impl QuestionFilter {
    /// In-process equivalent of the SQL WHERE clause.
    pub fn matches(&self, question: &Question) -> bool {
        match self {
            Self::All => true,
            Self::Category(id) => question.category == *id,
            Self::Search(term) => term.matches(&question.question),
        }
    }

    fn push_where(&self, qb: &mut QueryBuilder<'_, Postgres>) {
        match self {
            Self::All => {}
            Self::Category(id) => {
                qb.push(" WHERE category = ").push_bind(*id);
            }
            Self::Search(term) => {
                let op = if term.is_case_sensitive() {
                    " WHERE question LIKE "
                } else {
                    " WHERE question ILIKE "
                };
                qb.push(op).push_bind(term.like_pattern());
            }
        }
    }
}

/// Question repository
pub struct QuestionRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> QuestionRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// One page of questions matching `filter`, ordered by id.
    pub async fn list(
        &self,
        filter: &QuestionFilter,
        page: Pagination,
    ) -> Result<Paginated<Question>, DbError> {
        let mut count = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM questions");
        filter.push_where(&mut count);
        let total: i64 = count.build_query_scalar::<i64>().fetch_one(self.pool).await?;

        let mut select =
            QueryBuilder::<Postgres>::new("SELECT id, question, answer, category, difficulty FROM questions");
        filter.push_where(&mut select);
        select
            .push(" ORDER BY id LIMIT ")
            .push_bind(i64::from(page.limit()))
            .push(" OFFSET ")
            .push_bind(page.offset() as i64);

        let items = select
            .build_query_as::<Question>()
            .fetch_all(self.pool)
            .await?;

        Ok(Paginated {
            items,
            total,
            page: page.page,
            per_page: page.per_page,
        })
    }

    /// Insert a question and return it with its new id.
    pub async fn create(&self, new: NewQuestion) -> Result<Question, DbError> {
        let question = sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id, question, answer, category, difficulty
            "#,
        )
        .bind(new.question())
        .bind(new.answer())
        .bind(new.category())
        .bind(new.difficulty())
        .fetch_one(self.pool)
        .await?;

        Ok(question)
    }

    /// Delete a question, returning the removed record.
    pub async fn delete(&self, id: QuestionId) -> Result<Question, DbError> {
        sqlx::query_as::<_, Question>(
            r#"
            DELETE FROM questions
            WHERE id = $1
            RETURNING id, question, answer, category, difficulty
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("question", id))
    }

    /// Every question in `category`, or all of them for `None`.
    pub async fn for_quiz(&self, category: Option<CategoryId>) -> Result<Vec<Question>, DbError> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE $1::int IS NULL OR category = $1
            ORDER BY id
            "#,
        )
        .bind(category)
        .fetch_all(self.pool)
        .await?;

        Ok(questions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_matches_in_process() {
        let q = Question {
            id: QuestionId(1),
            question: "What is the heaviest organ in the human body?".into(),
            answer: "The Liver".into(),
            category: CategoryId(1),
            difficulty: 4,
        };

        assert!(QuestionFilter::All.matches(&q));
        assert!(QuestionFilter::Category(CategoryId(1)).matches(&q));
        assert!(!QuestionFilter::Category(CategoryId(2)).matches(&q));

        let term = SearchTerm::new("HEAVIEST", false).unwrap();
        assert!(QuestionFilter::Search(term).matches(&q));
        let term = SearchTerm::new("HEAVIEST", true).unwrap();
        assert!(!QuestionFilter::Search(term).matches(&q));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_then_delete_round_trip() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = crate::db::create_pool(&url).await.expect("pool creation failed");
        crate::db::migrations::run(&pool).await.expect("migrations failed");
        let repo = QuestionRepo::new(&pool);

        let new = NewQuestion::new("Who discovered penicillin?", "Alexander Fleming", 1, 3).unwrap();
        let created = repo.create(new).await.expect("insert failed");
        let deleted = repo.delete(created.id).await.expect("delete failed");
        assert_eq!(created, deleted);

        let err = repo.delete(created.id).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { resource: "question", .. }));
    }

    // Both database tests write rows, so run them serially:
    // DATABASE_URL=postgres://... cargo test -p trivia-server -- --ignored --test-threads=1
    #[tokio::test]
    #[ignore = "requires database"]
    async fn listing_agrees_with_memory_store() {
        use crate::db::{migrations, CategoryRepo, MemoryStore, TriviaStore};

        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = crate::db::create_pool(&url).await.expect("pool creation failed");
        migrations::run(&pool).await.expect("migrations failed");
        migrations::seed(&pool).await.expect("seed failed");
        let repo = QuestionRepo::new(&pool);

        let marked = NewQuestion::new("What is 50% of 10_000?", "5000", 3, 1).unwrap();
        let marked = repo.create(marked).await.expect("insert failed");

        let all = repo.for_quiz(None).await.expect("snapshot failed");
        assert!(all.len() > 10, "seeded table should span two pages");
        let categories = CategoryRepo::new(&pool).list().await.expect("categories failed");
        let memory = MemoryStore::with_data(categories, all.clone());

        let page_two = Pagination::new(2, 10).unwrap();
        let case_insensitive = SearchTerm::new("wORLD cUP", false).unwrap();
        let percent = SearchTerm::new("%", true).unwrap();
        let filters = [
            QuestionFilter::All,
            QuestionFilter::Category(CategoryId(3)),
            QuestionFilter::Search(case_insensitive),
            QuestionFilter::Search(percent.clone()),
        ];

        for filter in &filters {
            let page = if *filter == QuestionFilter::All {
                page_two
            } else {
                Pagination::first()
            };
            let from_db = repo.list(filter, page).await.expect("list failed");
            let from_memory = memory.list_questions(filter, page).await.unwrap();
            assert_eq!(from_db, from_memory, "mismatch for {:?}", filter);
        }

        let from_db = repo.list(&QuestionFilter::All, page_two).await.unwrap();
        assert_eq!(from_db.items, all[10..all.len().min(20)].to_vec());
        assert_eq!(from_db.total, all.len() as i64);

        let geography = repo
            .list(&QuestionFilter::Category(CategoryId(3)), Pagination::first())
            .await
            .unwrap();
        assert!(geography.items.iter().all(|q| q.category == CategoryId(3)));
        assert!(geography.items.contains(&marked));

        // `%` is matched literally, not as a wildcard
        let literal = repo
            .list(&QuestionFilter::Search(percent), Pagination::first())
            .await
            .unwrap();
        assert!(literal.items.contains(&marked));
        assert!(literal.items.iter().all(|q| q.question.contains('%')));
        assert!(literal.total < all.len() as i64);

        repo.delete(marked.id).await.expect("cleanup failed");
    }
}
