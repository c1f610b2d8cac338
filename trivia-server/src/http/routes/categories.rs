//! Category endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use super::QuestionPage;
use crate::db::QuestionFilter;
use crate::http::error::ApiError;
use crate::http::extractors::{PageQuery, ValidId};
use crate::http::server::AppState;
use crate::models::{category_map, CategoryId, CategoryMap};

/// Category listing response
#[derive(Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryMap,
    pub total_categories: usize,
}

/// GET /categories - every category as an id-to-type map
async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = state.store.list_categories().await?;
    if categories.is_empty() {
        return Err(ApiError::Empty {
            resource: "categories",
        });
    }

    let categories = category_map(&categories);
    Ok(Json(CategoriesResponse {
        success: true,
        total_categories: categories.len(),
        categories,
    }))
}

/// GET /categories/{id}/questions - questions in one category
async fn category_questions(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
    PageQuery(page): PageQuery,
) -> Result<Json<QuestionPage>, ApiError> {
    let category = state.store.get_category(CategoryId(id)).await?;
    let result = state
        .store
        .list_questions(&QuestionFilter::Category(category.id), page)
        .await?;

    if result.is_out_of_range() {
        return Err(ApiError::page_not_found(page.page));
    }

    tracing::debug!(category = %category.id, total = result.total, "Listed category questions");
    Ok(Json(QuestionPage::new(result, Some(category.id.0))))
}

/// Category routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{id}/questions", get(category_questions))
}
