//! In-memory record store for tests and demos.

use super::{RecordStore, StoreError};
use crate::domain::{Category, CategoryId, NewQuestion, Question, QuestionId};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Default)]
struct MemoryTables {
    questions: BTreeMap<QuestionId, Question>,
    categories: BTreeMap<CategoryId, Category>,
    last_question_id: i64,
}

/// Record store backed by ordered maps behind a lock.
///
/// Question ids come from a monotonic counter, so deleted ids are not handed
/// out again.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<MemoryTables>,
    failing: bool,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store whose every operation fails, for exercising error paths.
    pub fn failing() -> Self {
        Self {
            tables: RwLock::default(),
            failing: true,
        }
    }

    /// Add a category with an explicit id.
    pub fn with_category(self, id: i64, kind: &str) -> Self {
        if let Ok(mut tables) = self.tables.write() {
            let id = CategoryId::new(id);
            tables.categories.insert(id, Category::new(id, kind));
        }
        self
    }

    /// Add a question, assigning the next id.
    pub fn with_question(self, question: NewQuestion) -> Self {
        if let Ok(mut tables) = self.tables.write() {
            insert(&mut tables, question);
        }
        self
    }

    /// Add several questions in order.
    pub fn with_questions(self, questions: Vec<NewQuestion>) -> Self {
        questions.into_iter().fold(self, Self::with_question)
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, MemoryTables>, StoreError> {
        if self.failing {
            return Err(StoreError::Unavailable("store configured to fail".into()));
        }
        self.tables
            .read()
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, MemoryTables>, StoreError> {
        if self.failing {
            return Err(StoreError::Unavailable("store configured to fail".into()));
        }
        self.tables
            .write()
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }
}

fn insert(tables: &mut MemoryTables, question: NewQuestion) -> Question {
    tables.last_question_id += 1;
    let stored = question.with_id(QuestionId::new(tables.last_question_id));
    tables.questions.insert(stored.id, stored.clone());
    stored
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn list_questions(&self) -> Result<Vec<Question>, StoreError> {
        Ok(self.read()?.questions.values().cloned().collect())
    }

    async fn questions_in_category(
        &self,
        category: CategoryId,
    ) -> Result<Vec<Question>, StoreError> {
        Ok(self
            .read()?
            .questions
            .values()
            .filter(|q| q.category == category)
            .cloned()
            .collect())
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, StoreError> {
        Ok(self
            .read()?
            .questions
            .values()
            .filter(|q| q.mentions(term))
            .cloned()
            .collect())
    }

    async fn get_question(&self, id: QuestionId) -> Result<Option<Question>, StoreError> {
        Ok(self.read()?.questions.get(&id).cloned())
    }

    async fn count_questions(&self) -> Result<i64, StoreError> {
        Ok(self.read()?.questions.len() as i64)
    }

    async fn insert_question(&self, question: &NewQuestion) -> Result<Question, StoreError> {
        let mut tables = self.write()?;
        Ok(insert(&mut tables, question.clone()))
    }

    async fn delete_question(&self, id: QuestionId) -> Result<bool, StoreError> {
        Ok(self.write()?.questions.remove(&id).is_some())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        Ok(self.read()?.categories.values().cloned().collect())
    }

    async fn get_category(&self, id: CategoryId) -> Result<Option<Category>, StoreError> {
        Ok(self.read()?.categories.get(&id).cloned())
    }
}
