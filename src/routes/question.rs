//! Question route
//!
//! `POST /process-question` relays a free-text question to the configured
//! answerer and returns its output verbatim. Empty questions are refused
//! before the answerer is ever invoked.

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct QuestionRequest {
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct AnswerResponse {
    pub success: bool,
    pub answer: String,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/process-question", post(process_question))
}

/// POST /process-question
async fn process_question(
    State(state): State<AppState>,
    Json(request): Json<QuestionRequest>,
) -> Result<Json<AnswerResponse>> {
    let question = request.question.trim();
    if question.is_empty() {
        return Err(AppError::BadRequest("Question cannot be empty".to_string()));
    }

    tracing::debug!(question_len = question.len(), "Processing question");

    let answer = state.answerer().answer(question).await?;

    Ok(Json(AnswerResponse {
        success: true,
        answer,
    }))
}
