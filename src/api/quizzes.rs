use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::AppState;
use crate::domain::{CategoryId, Question, QuestionId};
use crate::engine::QuizOutcome;
use crate::error::AppError;

/// Category selector sent by the quiz client. Its `type` label is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct QuizCategory {
    pub id: Option<CategoryId>,
}

/// Body of `POST /quizzes`.
///
/// `previous_questions` holds question ids; question text is not accepted.
#[derive(Debug, Default, Deserialize)]
pub struct QuizBody {
    pub quiz_category: Option<QuizCategory>,
    pub previous_questions: Option<Vec<QuestionId>>,
}

impl QuizBody {
    pub fn category(&self) -> Option<CategoryId> {
        self.quiz_category.as_ref().and_then(|c| c.id)
    }

    pub fn previously_asked(&self) -> HashSet<QuestionId> {
        self.previous_questions
            .iter()
            .flatten()
            .copied()
            .collect()
    }
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Question,
}

pub async fn next_quiz_question(
    State(state): State<AppState>,
    payload: Result<Json<QuizBody>, JsonRejection>,
) -> Result<Json<QuizResponse>, AppError> {
    let Json(body) = payload.map_err(|e| AppError::NotFound(e.body_text()))?;

    let outcome = state
        .quiz
        .select_next(body.category(), &body.previously_asked())
        .await
        .map_err(|e| AppError::NotFound(e.to_string()))?;

    match outcome {
        QuizOutcome::Next(question) => Ok(Json(QuizResponse {
            success: true,
            question,
        })),
        QuizOutcome::Exhausted => Err(AppError::NotFound(
            "every candidate question was already asked".into(),
        )),
    }
}
