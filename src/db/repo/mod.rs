//! Repository layer for database operations.
//!
//! `Repository` is the SQLite implementation of [`RecordStore`]. Trait methods
//! run as single statements; the batch inserts used by the seed share one
//! transaction per batch.

use crate::domain::{Category, CategoryId, NewQuestion, Question, QuestionId};
use crate::store::{RecordStore, StoreError};
use async_trait::async_trait;
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::Row;

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

/// Repository for database operations.
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Repository { pool }
    }

    /// Insert a category and return it with its assigned id.
    ///
    /// Categories have no API surface; this is used by fixtures and tests.
    pub async fn insert_category(&self, kind: &str) -> Result<Category, sqlx::Error> {
        let result = sqlx::query("INSERT INTO categories (type) VALUES (?)")
            .bind(kind)
            .execute(&self.pool)
            .await?;

        Ok(Category::new(
            CategoryId::new(result.last_insert_rowid()),
            kind,
        ))
    }

    pub async fn count_categories(&self) -> Result<i64, sqlx::Error> {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM categories")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.get("n"))
    }

    async fn fetch_questions(
        &self,
        filter: &str,
        bind: Option<i64>,
    ) -> Result<Vec<Question>, sqlx::Error> {
        let sql = format!(
            "SELECT {} FROM questions {} ORDER BY id ASC",
            QUESTION_COLUMNS, filter
        );
        let query = sqlx::query(&sql);
        let query = match bind {
            Some(v) => query.bind(v),
            None => query,
        };

        let rows = query.fetch_all(&self.pool).await?;
        rows.iter().map(question_from_row).collect()
    }

    /// Insert every category in one transaction; either all land or none do.
    pub async fn insert_categories(&self, kinds: &[&str]) -> Result<Vec<Category>, sqlx::Error> {
        let mut inserted = Vec::with_capacity(kinds.len());
        let mut tx = self.pool.begin().await?;

        for kind in kinds {
            let result = sqlx::query("INSERT INTO categories (type) VALUES (?)")
                .bind(*kind)
                .execute(&mut *tx)
                .await?;
            inserted.push(Category::new(
                CategoryId::new(result.last_insert_rowid()),
                *kind,
            ));
        }

        tx.commit().await?;
        Ok(inserted)
    }

    /// Insert every question in one transaction; either all land or none do.
    pub async fn insert_questions_batch(
        &self,
        questions: &[NewQuestion],
    ) -> Result<Vec<Question>, sqlx::Error> {
        let mut inserted = Vec::with_capacity(questions.len());
        let mut tx = self.pool.begin().await?;

        for question in questions {
            let result = sqlx::query(
                r#"
                INSERT INTO questions (question, answer, category, difficulty)
                VALUES (?, ?, ?, ?)
                "#,
            )
            .bind(question.question.as_str())
            .bind(question.answer.as_str())
            .bind(question.category.as_i64())
            .bind(question.difficulty)
            .execute(&mut *tx)
            .await?;

            inserted.push(
                question
                    .clone()
                    .with_id(QuestionId::new(result.last_insert_rowid())),
            );
        }

        tx.commit().await?;
        Ok(inserted)
    }
}

fn question_from_row(row: &SqliteRow) -> Result<Question, sqlx::Error> {
    Ok(Question {
        id: QuestionId::new(row.try_get("id")?),
        question: row.try_get("question")?,
        answer: row.try_get("answer")?,
        category: CategoryId::new(row.try_get("category")?),
        difficulty: row.try_get("difficulty")?,
    })
}

fn category_from_row(row: &SqliteRow) -> Result<Category, sqlx::Error> {
    Ok(Category {
        id: CategoryId::new(row.try_get("id")?),
        kind: row.try_get("type")?,
    })
}

#[async_trait]
impl RecordStore for Repository {
    async fn list_questions(&self) -> Result<Vec<Question>, StoreError> {
        Ok(self.fetch_questions("", None).await?)
    }

    async fn questions_in_category(
        &self,
        category: CategoryId,
    ) -> Result<Vec<Question>, StoreError> {
        Ok(self
            .fetch_questions("WHERE category = ?", Some(category.as_i64()))
            .await?)
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, StoreError> {
        // SQLite's lower() only folds ASCII, so matching happens on this side.
        Ok(self
            .fetch_questions("", None)
            .await?
            .into_iter()
            .filter(|q| q.mentions(term))
            .collect())
    }

    async fn get_question(&self, id: QuestionId) -> Result<Option<Question>, StoreError> {
        let sql = format!("SELECT {} FROM questions WHERE id = ?", QUESTION_COLUMNS);
        let row = sqlx::query(&sql)
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(question_from_row).transpose()?)
    }

    async fn count_questions(&self) -> Result<i64, StoreError> {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM questions")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.try_get("n")?)
    }

    async fn insert_question(&self, question: &NewQuestion) -> Result<Question, StoreError> {
        let result = sqlx::query(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(question.question.as_str())
        .bind(question.answer.as_str())
        .bind(question.category.as_i64())
        .bind(question.difficulty)
        .execute(&self.pool)
        .await?;

        Ok(question
            .clone()
            .with_id(QuestionId::new(result.last_insert_rowid())))
    }

    async fn delete_question(&self, id: QuestionId) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM questions WHERE id = ?")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        let rows = sqlx::query("SELECT id, type FROM categories ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows
            .iter()
            .map(category_from_row)
            .collect::<Result<Vec<_>, _>>()?)
    }

    async fn get_category(&self, id: CategoryId) -> Result<Option<Category>, StoreError> {
        let row = sqlx::query("SELECT id, type FROM categories WHERE id = ?")
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(category_from_row).transpose()?)
    }
}
