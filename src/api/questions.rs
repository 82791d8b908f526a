use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use super::{body_rejection, requested_page, AppState};
use crate::domain::{category_map, CategoryId, CategoryMap, NewQuestion, Question, QuestionId};
use crate::engine::{paginate, PageQuery, QUESTIONS_PER_PAGE};
use crate::error::AppError;

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub categories: CategoryMap,
    pub total_questions: usize,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub created: QuestionId,
    pub questions: Vec<Question>,
    pub total_questions: i64,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: QuestionId,
    pub questions: Vec<Question>,
    pub total_questions: i64,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

/// Body of `POST /questions`. Every field is required; see [`NewQuestionBody::validate`].
#[derive(Debug, Default, Deserialize)]
pub struct NewQuestionBody {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<CategoryId>,
    pub difficulty: Option<i64>,
}

impl NewQuestionBody {
    /// Reject bodies with a missing field or blank text.
    pub fn validate(self) -> Result<NewQuestion, AppError> {
        let question = required_text(self.question, "question")?;
        let answer = required_text(self.answer, "answer")?;
        let category = self
            .category
            .ok_or_else(|| AppError::NotFound("missing field: category".into()))?;
        let difficulty = self
            .difficulty
            .ok_or_else(|| AppError::NotFound("missing field: difficulty".into()))?;

        Ok(NewQuestion::new(question, answer, category, difficulty))
    }
}

fn required_text(value: Option<String>, field: &str) -> Result<String, AppError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AppError::NotFound(format!("missing field: {}", field)))
}

/// Body of `POST /questions/search`.
#[derive(Debug, Default, Deserialize)]
pub struct SearchBody {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

impl SearchBody {
    pub fn validate(self) -> Result<String, AppError> {
        required_text(self.search_term, "searchTerm")
    }
}

pub async fn get_questions(
    query: Option<Query<PageQuery>>,
    State(state): State<AppState>,
) -> Result<Json<QuestionsResponse>, AppError> {
    let selection = state.catalog.list_all().await?;
    let questions = paginate(&selection, requested_page(query), QUESTIONS_PER_PAGE);
    if questions.is_empty() {
        return Err(AppError::NotFound("requested page has no questions".into()));
    }

    let categories = state.catalog.categories().await?;

    Ok(Json(QuestionsResponse {
        success: true,
        questions,
        categories: category_map(&categories),
        total_questions: selection.len(),
    }))
}

pub async fn delete_question(
    question_id: Result<Path<i64>, PathRejection>,
    query: Option<Query<PageQuery>>,
    State(state): State<AppState>,
) -> Result<Json<DeletedResponse>, AppError> {
    let Path(raw_id) = question_id.map_err(|e| AppError::NotFound(e.body_text()))?;

    // Every failure of a delete, an unknown id included, is reported as 422.
    let deleted = state
        .catalog
        .delete_by_id(QuestionId::new(raw_id), requested_page(query))
        .await
        .map_err(|e| AppError::Unprocessable(e.to_string()))?;

    Ok(Json(DeletedResponse {
        success: true,
        deleted: deleted.id,
        questions: deleted.questions,
        total_questions: deleted.total_questions,
    }))
}

pub async fn create_question(
    query: Option<Query<PageQuery>>,
    State(state): State<AppState>,
    payload: Result<Json<NewQuestionBody>, JsonRejection>,
) -> Result<Json<CreatedResponse>, AppError> {
    let Json(body) = payload.map_err(body_rejection)?;
    let new_question = body.validate()?;

    let created = state
        .catalog
        .create(new_question, requested_page(query))
        .await?;

    Ok(Json(CreatedResponse {
        success: true,
        created: created.id,
        questions: created.questions,
        total_questions: created.total_questions,
    }))
}

pub async fn search_questions(
    query: Option<Query<PageQuery>>,
    State(state): State<AppState>,
    payload: Result<Json<SearchBody>, JsonRejection>,
) -> Result<Json<SearchResponse>, AppError> {
    let Json(body) = payload.map_err(body_rejection)?;
    let term = body.validate()?;

    let selection = state
        .catalog
        .search_by_substring(&term)
        .await
        .map_err(|e| AppError::Unprocessable(e.to_string()))?;

    Ok(Json(SearchResponse {
        success: true,
        questions: paginate(&selection, requested_page(query), QUESTIONS_PER_PAGE),
        total_questions: selection.len(),
    }))
}
