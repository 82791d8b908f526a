use crate::domain::{Category, CategoryId, NewQuestion, Question, QuestionId};
use crate::engine::pagination::{paginate, Page, QUESTIONS_PER_PAGE};
use crate::engine::CoreError;
use crate::store::{RecordStore, StoreError};
use std::sync::Arc;
use tracing::{info, warn};

/// Read and write operations over the question catalogue.
///
/// Holds no state of its own besides the injected store, so clones are cheap
/// and may be shared across requests.
#[derive(Clone)]
pub struct Catalog {
    store: Arc<dyn RecordStore>,
}

/// Result of a successful insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Created {
    pub id: QuestionId,
    pub questions: Vec<Question>,
    pub total_questions: i64,
}

/// Result of a successful delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deleted {
    pub id: QuestionId,
    pub questions: Vec<Question>,
    pub total_questions: i64,
}

fn read_fault(op: &'static str) -> impl FnOnce(StoreError) -> CoreError {
    move |e| {
        warn!(op, error = %e, "Store read failed");
        CoreError::NotFound(format!("{} failed: {}", op, e))
    }
}

fn write_fault(op: &'static str) -> impl FnOnce(StoreError) -> CoreError {
    move |e| {
        warn!(op, error = %e, "Store write failed");
        CoreError::Unprocessable(format!("{} failed: {}", op, e))
    }
}

impl Catalog {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Every question, ordered by id.
    pub async fn list_all(&self) -> Result<Vec<Question>, CoreError> {
        self.store
            .list_questions()
            .await
            .map_err(read_fault("list_all"))
    }

    /// Questions in one category. An unknown category gives an empty list.
    pub async fn filter_by_category(
        &self,
        category: CategoryId,
    ) -> Result<Vec<Question>, CoreError> {
        self.store
            .questions_in_category(category)
            .await
            .map_err(read_fault("filter_by_category"))
    }

    /// Questions whose text contains `term`, ignoring case.
    ///
    /// Callers reject empty terms before getting here.
    pub async fn search_by_substring(&self, term: &str) -> Result<Vec<Question>, CoreError> {
        self.store
            .search_questions(term)
            .await
            .map_err(read_fault("search_by_substring"))
    }

    pub async fn find_by_id(&self, id: QuestionId) -> Result<Question, CoreError> {
        self.store
            .get_question(id)
            .await
            .map_err(read_fault("find_by_id"))?
            .ok_or_else(|| CoreError::NotFound(format!("question {} does not exist", id)))
    }

    pub async fn categories(&self) -> Result<Vec<Category>, CoreError> {
        self.store
            .list_categories()
            .await
            .map_err(read_fault("categories"))
    }

    /// The `type` of a category, or `None` when no such category is stored.
    pub async fn category_label(&self, id: CategoryId) -> Result<Option<String>, CoreError> {
        Ok(self
            .store
            .get_category(id)
            .await
            .map_err(read_fault("category_label"))?
            .map(|c| c.kind))
    }

    pub async fn count(&self) -> Result<i64, CoreError> {
        self.store
            .count_questions()
            .await
            .map_err(read_fault("count"))
    }

    /// Insert a validated question and return it with a fresh view of `page`.
    pub async fn create(&self, question: NewQuestion, page: Page) -> Result<Created, CoreError> {
        let stored = self
            .store
            .insert_question(&question)
            .await
            .map_err(write_fault("create"))?;
        info!(question_id = %stored.id, category = %stored.category, "Question created");

        let (questions, total_questions) = self.page_after_write("create", page).await?;
        Ok(Created {
            id: stored.id,
            questions,
            total_questions,
        })
    }

    /// Remove a question. An id with no question signals `NotFound`.
    pub async fn delete_by_id(&self, id: QuestionId, page: Page) -> Result<Deleted, CoreError> {
        let removed = self
            .store
            .delete_question(id)
            .await
            .map_err(write_fault("delete_by_id"))?;
        if !removed {
            return Err(CoreError::NotFound(format!(
                "question {} does not exist",
                id
            )));
        }
        info!(question_id = %id, "Question deleted");

        let (questions, total_questions) = self.page_after_write("delete_by_id", page).await?;
        Ok(Deleted {
            id,
            questions,
            total_questions,
        })
    }

    async fn page_after_write(
        &self,
        op: &'static str,
        page: Page,
    ) -> Result<(Vec<Question>, i64), CoreError> {
        let all = self
            .store
            .list_questions()
            .await
            .map_err(write_fault(op))?;
        let total = all.len() as i64;
        Ok((paginate(&all, page, QUESTIONS_PER_PAGE), total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn question(text: &str, category: i64) -> NewQuestion {
        NewQuestion::new(text, "answer", CategoryId::new(category), 1)
    }

    fn catalog(store: MemoryStore) -> Catalog {
        Catalog::new(Arc::new(store))
    }

    #[tokio::test]
    async fn test_filter_by_unknown_category_is_empty_not_error() {
        let catalog = catalog(MemoryStore::new().with_question(question("q", 1)));
        let found = catalog.filter_by_category(CategoryId::new(42)).await.unwrap();
        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn test_search_finds_year_in_question_text() {
        let catalog = catalog(
            MemoryStore::new()
                .with_question(question("What is the disease of 2020?", 1))
                .with_question(question("Who discovered penicillin?", 1)),
        );

        let found = catalog.search_by_substring("2020").await.unwrap();
        assert_eq!(found.len(), 1);

        let found = catalog.search_by_substring("treshvbhg").await.unwrap();
        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn test_delete_then_find_is_not_found() {
        let catalog = catalog(
            MemoryStore::new()
                .with_question(question("first", 1))
                .with_question(question("second", 2)),
        );

        let deleted = catalog
            .delete_by_id(QuestionId::new(1), Page::FIRST)
            .await
            .unwrap();
        assert_eq!(deleted.id, QuestionId::new(1));
        assert_eq!(deleted.total_questions, 1);
        assert_eq!(deleted.questions.len(), 1);

        let err = catalog.find_by_id(QuestionId::new(1)).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_delete_absent_id_is_not_found() {
        let catalog = catalog(MemoryStore::new());
        let err = catalog
            .delete_by_id(QuestionId::new(5000), Page::FIRST)
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_create_assigns_fresh_id_and_returns_first_page() {
        let store = (0..12).fold(MemoryStore::new(), |s, i| {
            s.with_question(question(&format!("q{}", i), 1))
        });
        let catalog = catalog(store);

        let created = catalog
            .create(question("What is the sign of 2020?", 1), Page::FIRST)
            .await
            .unwrap();

        assert_eq!(created.id, QuestionId::new(13));
        assert_eq!(created.total_questions, 13);
        assert_eq!(created.questions.len(), QUESTIONS_PER_PAGE);

        let fetched = catalog.find_by_id(created.id).await.unwrap();
        assert_eq!(fetched.question, "What is the sign of 2020?");
    }

    #[tokio::test]
    async fn test_store_faults_map_by_operation_kind() {
        let catalog = catalog(MemoryStore::failing());

        assert!(catalog.list_all().await.unwrap_err().is_not_found());
        assert!(catalog.categories().await.unwrap_err().is_not_found());
        assert!(catalog
            .create(question("q", 1), Page::FIRST)
            .await
            .unwrap_err()
            .is_unprocessable());
        assert!(catalog
            .delete_by_id(QuestionId::new(1), Page::FIRST)
            .await
            .unwrap_err()
            .is_unprocessable());
    }

    #[tokio::test]
    async fn test_category_label_absent_is_none() {
        let catalog = catalog(MemoryStore::new().with_category(1, "Science"));
        assert_eq!(
            catalog.category_label(CategoryId::new(1)).await.unwrap(),
            Some("Science".to_string())
        );
        assert_eq!(catalog.category_label(CategoryId::new(9)).await.unwrap(), None);
    }
}
