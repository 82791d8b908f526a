use axum::extract::rejection::PathRejection;
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Serialize;

use super::{requested_page, AppState};
use crate::domain::{category_map, CategoryId, CategoryMap, Question};
use crate::engine::{paginate, PageQuery, QUESTIONS_PER_PAGE};
use crate::error::AppError;

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryMap,
    pub total_categories: usize,
}

#[derive(Debug, Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Option<String>,
}

pub async fn get_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoriesResponse>, AppError> {
    let categories = state.catalog.categories().await?;
    if categories.is_empty() {
        return Err(AppError::NotFound("no categories stored".into()));
    }

    Ok(Json(CategoriesResponse {
        success: true,
        total_categories: categories.len(),
        categories: category_map(&categories),
    }))
}

pub async fn get_category_questions(
    category_id: Result<Path<i64>, PathRejection>,
    query: Option<Query<PageQuery>>,
    State(state): State<AppState>,
) -> Result<Json<CategoryQuestionsResponse>, AppError> {
    let Path(raw_id) = category_id.map_err(|e| AppError::NotFound(e.body_text()))?;
    let category = CategoryId::new(raw_id);

    let selection = state.catalog.filter_by_category(category).await?;
    let questions = paginate(&selection, requested_page(query), QUESTIONS_PER_PAGE);
    if questions.is_empty() {
        return Err(AppError::NotFound(format!(
            "no questions on this page for category {}",
            category
        )));
    }

    let current_category = state.catalog.category_label(category).await?;

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions,
        total_questions: selection.len(),
        current_category,
    }))
}
