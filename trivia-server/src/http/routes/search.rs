//! Search endpoint

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::Deserialize;

use super::QuestionPage;
use crate::db::QuestionFilter;
use crate::http::error::ApiError;
use crate::http::extractors::{ApiJson, PageQuery};
use crate::http::server::AppState;
use crate::models::SearchTerm;

/// Search request
#[derive(Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm", alias = "search_term")]
    pub search_term: String,
}

/// POST /search - questions whose text contains the term
async fn search_questions(
    State(state): State<Arc<AppState>>,
    PageQuery(page): PageQuery,
    ApiJson(req): ApiJson<SearchRequest>,
) -> Result<Json<QuestionPage>, ApiError> {
    let term = SearchTerm::new(&req.search_term, state.case_sensitive_search)?;
    let result = state
        .store
        .list_questions(&QuestionFilter::Search(term), page)
        .await?;

    if result.is_out_of_range() {
        return Err(ApiError::page_not_found(page.page));
    }

    tracing::debug!(hits = result.total, "Search complete");
    Ok(Json(QuestionPage::new(result, None)))
}

/// Search routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/search", post(search_questions))
}
