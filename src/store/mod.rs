//! Record store abstraction over the question and category tables.

use crate::domain::{Category, CategoryId, NewQuestion, Question, QuestionId};
use async_trait::async_trait;
use thiserror::Error;

pub mod memory;

pub use memory::MemoryStore;

/// Persistence collaborator for questions and categories.
///
/// Every method is its own isolated unit of work: implementations must not
/// leave partial state behind when a call fails, and callers never hold a
/// handle across calls. Question listings are always ordered by id ascending.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// All questions.
    async fn list_questions(&self) -> Result<Vec<Question>, StoreError>;

    /// Questions whose category equals `category`.
    async fn questions_in_category(
        &self,
        category: CategoryId,
    ) -> Result<Vec<Question>, StoreError>;

    /// Questions whose text contains `term`, ignoring case.
    ///
    /// The term is matched literally; `%` and `_` carry no wildcard meaning.
    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, StoreError>;

    /// Point lookup by id.
    async fn get_question(&self, id: QuestionId) -> Result<Option<Question>, StoreError>;

    async fn count_questions(&self) -> Result<i64, StoreError>;

    /// Insert a question and return it with its freshly assigned id.
    ///
    /// Ids are never reused, even after the question holding one is deleted.
    async fn insert_question(&self, question: &NewQuestion) -> Result<Question, StoreError>;

    /// Delete a question. Returns `false` when no question had that id.
    async fn delete_question(&self, id: QuestionId) -> Result<bool, StoreError>;

    /// All categories ordered by id.
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError>;

    async fn get_category(&self, id: CategoryId) -> Result<Option<Category>, StoreError>;
}

/// Error type for record store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}
