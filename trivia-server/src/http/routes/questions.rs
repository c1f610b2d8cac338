//! Question endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{delete, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::{DbError, QuestionFilter};
use crate::http::error::ApiError;
use crate::http::extractors::{ApiJson, PageQuery, ValidId};
use crate::http::server::AppState;
use crate::models::de::int_or_string;
use crate::models::{
    category_map, CategoryMap, NewQuestion, Pagination, Question, QuestionId, ValidationError,
};

/// Create question request
#[derive(Deserialize)]
pub struct CreateQuestionRequest {
    pub question: String,
    pub answer: String,
    #[serde(deserialize_with = "int_or_string")]
    pub category: i32,
    #[serde(deserialize_with = "int_or_string")]
    pub difficulty: i32,
}

/// Full question listing, with the category map for the sidebar
#[derive(Serialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub current_category: Option<i32>,
    pub categories: CategoryMap,
}

/// Create response: the listing after insertion
#[derive(Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub created: QuestionId,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub current_category: i32,
}

/// Delete response
#[derive(Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted_question: Question,
}

/// GET /questions - paginated list of all questions
async fn list_questions(
    State(state): State<Arc<AppState>>,
    PageQuery(page): PageQuery,
) -> Result<Json<QuestionListResponse>, ApiError> {
    let result = state.store.list_questions(&QuestionFilter::All, page).await?;
    if result.total == 0 {
        return Err(ApiError::Empty {
            resource: "questions",
        });
    }
    if result.is_out_of_range() {
        return Err(ApiError::page_not_found(page.page));
    }

    let categories = state.store.list_categories().await?;

    Ok(Json(QuestionListResponse {
        success: true,
        questions: result.items,
        total_questions: result.total,
        current_category: None,
        categories: category_map(&categories),
    }))
}

/// POST /questions - create a new question
async fn create_question(
    State(state): State<Arc<AppState>>,
    PageQuery(page): PageQuery,
    ApiJson(req): ApiJson<CreateQuestionRequest>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let new = NewQuestion::new(&req.question, &req.answer, req.category, req.difficulty)?;

    // Category is referenced by value only, so check it here
    match state.store.get_category(new.category()).await {
        Ok(_) => {}
        Err(DbError::NotFound { .. }) => {
            return Err(ValidationError::UnknownReference {
                field: "category",
                id: new.category().0.into(),
            }
            .into());
        }
        Err(e) => return Err(e.into()),
    }

    let created = state.store.create_question(new).await?;
    tracing::info!(id = %created.id, category = %created.category, "Question created");

    let mut result = state.store.list_questions(&QuestionFilter::All, page).await?;
    if result.is_out_of_range() {
        // Creation already happened; answer with the last page instead of a 404
        let last = Pagination::last_of(&result);
        result = state.store.list_questions(&QuestionFilter::All, last).await?;
    }

    Ok(Json(CreatedResponse {
        success: true,
        created: created.id,
        questions: result.items,
        total_questions: result.total,
        current_category: created.category.0,
    }))
}

/// DELETE /questions/{id} - delete a question, returning it
async fn delete_question(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<DeletedResponse>, ApiError> {
    let deleted = state.store.delete_question(QuestionId(id)).await?;
    tracing::info!(id = %deleted.id, "Question deleted");

    Ok(Json(DeletedResponse {
        success: true,
        deleted_question: deleted,
    }))
}

/// Question routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/{id}", delete(delete_question))
}
