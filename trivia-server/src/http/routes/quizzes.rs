//! Quiz endpoint

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::extractors::ApiJson;
use crate::http::server::AppState;
use crate::models::{pick_next, Question, QuizRequest};

/// Next quiz question; `None` once the round is exhausted
#[derive(Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
}

/// POST /quizzes - random question from the chosen category not seen yet
async fn next_question(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<QuizRequest>,
) -> Result<Json<QuizResponse>, ApiError> {
    let scope = req.scope()?;
    if let Some(id) = scope {
        state.store.get_category(id).await?;
    }

    let candidates = state.store.quiz_candidates(scope).await?;
    if candidates.is_empty() {
        return Err(ApiError::Empty {
            resource: "questions",
        });
    }

    let question = pick_next(&candidates, &req.previous(), &mut rand::thread_rng()).cloned();
    if question.is_none() {
        tracing::debug!(seen = req.previous_questions.len(), "Quiz round exhausted");
    }

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}

/// Quiz routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/quizzes", post(next_question))
}
