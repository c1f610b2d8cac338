//! In-process store for tests and `serve --in-memory`

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::repos::DbError;
use super::seed;
use super::store::{QuestionFilter, TriviaStore};
use crate::models::{Category, CategoryId, NewQuestion, Paginated, Pagination, Question, QuestionId};

#[derive(Debug, Default)]
struct Inner {
    categories: Vec<Category>,
    /// Kept sorted by id: ids are assigned in increasing order
    questions: Vec<Question>,
    next_id: i32,
}

/// Store keeping both tables in memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with the built-in categories and questions.
    pub fn seeded() -> Self {
        let categories = seed::CATEGORIES
            .iter()
            .map(|&(id, kind)| Category {
                id: CategoryId(id),
                kind: kind.to_owned(),
            })
            .collect();

        let questions: Vec<Question> = seed::QUESTIONS
            .iter()
            .zip(1..)
            .map(|(&(question, answer, category, difficulty), id)| Question {
                id: QuestionId(id),
                question: question.to_owned(),
                answer: answer.to_owned(),
                category: CategoryId(category),
                difficulty,
            })
            .collect();

        Self::with_data(categories, questions)
    }

    /// Store holding exactly `categories` and `questions`.
    pub fn with_data(categories: Vec<Category>, mut questions: Vec<Question>) -> Self {
        questions.sort_by_key(|q| q.id);
        let next_id = questions.last().map(|q| q.id.0 + 1).unwrap_or(1);

        Self {
            inner: RwLock::new(Inner {
                categories,
                questions,
                next_id,
            }),
        }
    }
}

#[async_trait]
impl TriviaStore for MemoryStore {
    async fn list_categories(&self) -> Result<Vec<Category>, DbError> {
        let inner = self.inner.read().await;
        let mut categories = inner.categories.clone();
        categories.sort_by_key(|c| c.id);
        Ok(categories)
    }

    async fn get_category(&self, id: CategoryId) -> Result<Category, DbError> {
        let inner = self.inner.read().await;
        inner
            .categories
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| DbError::not_found("category", id))
    }

    async fn list_questions(
        &self,
        filter: &QuestionFilter,
        page: Pagination,
    ) -> Result<Paginated<Question>, DbError> {
        let inner = self.inner.read().await;
        let matching: Vec<Question> = inner
            .questions
            .iter()
            .filter(|q| filter.matches(q))
            .cloned()
            .collect();

        Ok(Paginated::from_slice(&matching, page))
    }

    async fn create_question(&self, new: NewQuestion) -> Result<Question, DbError> {
        let mut inner = self.inner.write().await;
        let id = QuestionId(inner.next_id);
        inner.next_id += 1;

        let question = new.into_question(id);
        inner.questions.push(question.clone());
        Ok(question)
    }

    async fn delete_question(&self, id: QuestionId) -> Result<Question, DbError> {
        let mut inner = self.inner.write().await;
        let index = inner
            .questions
            .iter()
            .position(|q| q.id == id)
            .ok_or_else(|| DbError::not_found("question", id))?;

        Ok(inner.questions.remove(index))
    }

    async fn quiz_candidates(&self, category: Option<CategoryId>) -> Result<Vec<Question>, DbError> {
        let inner = self.inner.read().await;
        Ok(inner
            .questions
            .iter()
            .filter(|q| category.map_or(true, |c| q.category == c))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SearchTerm;

    #[tokio::test]
    async fn seeded_store_has_data() {
        let store = MemoryStore::seeded();
        assert_eq!(store.list_categories().await.unwrap().len(), seed::CATEGORIES.len());

        let page = store
            .list_questions(&QuestionFilter::All, Pagination::first())
            .await
            .unwrap();
        assert_eq!(page.total as usize, seed::QUESTIONS.len());
        assert_eq!(page.items.len(), 10);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = MemoryStore::seeded();
        let last = seed::QUESTIONS.len() as i32;

        store.delete_question(QuestionId(last)).await.unwrap();
        let created = store
            .create_question(NewQuestion::new("q", "a", 1, 1).unwrap())
            .await
            .unwrap();

        assert_eq!(created.id, QuestionId(last + 1));
    }

    #[tokio::test]
    async fn delete_unknown_is_not_found() {
        let store = MemoryStore::new();
        let err = store.delete_question(QuestionId(1)).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { resource: "question", .. }));
    }

    #[tokio::test]
    async fn filters_by_category_and_search() {
        let store = MemoryStore::seeded();

        let art = store
            .list_questions(&QuestionFilter::Category(CategoryId(2)), Pagination::first())
            .await
            .unwrap();
        assert_eq!(art.total, 4);
        assert!(art.items.iter().all(|q| q.category == CategoryId(2)));

        let term = SearchTerm::new("world cup", false).unwrap();
        let found = store
            .list_questions(&QuestionFilter::Search(term), Pagination::first())
            .await
            .unwrap();
        assert_eq!(found.total, 2);
    }

    #[tokio::test]
    async fn quiz_candidates_by_scope() {
        let store = MemoryStore::seeded();
        let sports = store.quiz_candidates(Some(CategoryId(6))).await.unwrap();
        assert_eq!(sports.len(), 2);

        let all = store.quiz_candidates(None).await.unwrap();
        assert_eq!(all.len(), seed::QUESTIONS.len());
    }
}
