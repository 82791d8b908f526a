pub mod categories;
pub mod health;
pub mod questions;
pub mod quizzes;

use crate::engine::{Catalog, Page, PageQuery, Picker, QuizSelector, RandomPicker};
use crate::error::{error_envelope, AppError};
use crate::store::RecordStore;
use axum::extract::rejection::JsonRejection;
use axum::extract::Query;
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::response::Response;
use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Catalog,
    pub quiz: QuizSelector,
}

impl AppState {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self::with_picker(store, Arc::new(RandomPicker))
    }

    /// Build state with a specific quiz picker, e.g. a deterministic one in tests.
    pub fn with_picker(store: Arc<dyn RecordStore>, picker: Arc<dyn Picker>) -> Self {
        let catalog = Catalog::new(store);
        let quiz = QuizSelector::new(catalog.clone(), picker);
        Self { catalog, quiz }
    }
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .route("/health", get(health::health))
        .route("/categories", get(categories::get_categories))
        .route(
            "/categories/:category_id/questions",
            get(categories::get_category_questions),
        )
        .route(
            "/categories/:category_id/questions/",
            get(categories::get_category_questions),
        )
        .route(
            "/questions",
            get(questions::get_questions).post(questions::create_question),
        )
        .route("/questions/search", post(questions::search_questions))
        .route("/questions/:question_id", delete(questions::delete_question))
        .route("/quizzes", post(quizzes::next_quiz_question))
        .fallback(unmatched_route)
        .layer(middleware::map_response(envelope_bare_errors))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn unmatched_route() -> AppError {
    AppError::NotFound("no route matches the request path".into())
}

/// Wrap error responses produced by the router itself (405 on a known path,
/// extractor rejections) in the JSON envelope.
async fn envelope_bare_errors(response: Response) -> Response {
    let status = response.status();
    let is_json = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"));

    let wraps = matches!(
        status,
        StatusCode::BAD_REQUEST
            | StatusCode::NOT_FOUND
            | StatusCode::METHOD_NOT_ALLOWED
            | StatusCode::UNPROCESSABLE_ENTITY
    );
    if is_json || !wraps {
        return response;
    }

    let allow: Option<HeaderValue> = response.headers().get(header::ALLOW).cloned();
    let mut wrapped = error_envelope(status);
    if let Some(allow) = allow {
        wrapped.headers_mut().insert(header::ALLOW, allow);
    }
    wrapped
}

/// Page requested through `?page=`; malformed query strings mean page 1.
pub(crate) fn requested_page(query: Option<Query<PageQuery>>) -> Page {
    query.map(|Query(q)| q.page()).unwrap_or_default()
}

/// Map a JSON body rejection: unparsable or non-JSON bodies are 400, well-formed
/// JSON with wrongly typed fields is 422.
pub(crate) fn body_rejection(rejection: JsonRejection) -> AppError {
    match rejection {
        JsonRejection::JsonDataError(e) => AppError::Unprocessable(e.body_text()),
        other => AppError::BadRequest(other.body_text()),
    }
}
