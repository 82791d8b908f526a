//! Random selection of the next unseen quiz question.

use crate::domain::{CategoryId, Question, QuestionId};
use crate::engine::catalog::Catalog;
use crate::engine::CoreError;
use rand::Rng;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

/// Source of the index drawn from a candidate pool.
pub trait Picker: Send + Sync {
    /// Return an index in `0..len`. Only called with `len > 0`.
    fn pick(&self, len: usize) -> usize;
}

/// Uniform draw from the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPicker;

impl Picker for RandomPicker {
    fn pick(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizOutcome {
    Next(Question),
    /// Every candidate has already been asked.
    Exhausted,
}

/// Drop already-asked questions from `pool` and draw one of the rest.
pub fn draw_unseen(
    pool: Vec<Question>,
    previously_asked: &HashSet<QuestionId>,
    picker: &dyn Picker,
) -> QuizOutcome {
    let mut remaining: Vec<Question> = pool
        .into_iter()
        .filter(|q| !previously_asked.contains(&q.id))
        .collect();

    if remaining.is_empty() {
        return QuizOutcome::Exhausted;
    }

    let idx = picker.pick(remaining.len()).min(remaining.len() - 1);
    QuizOutcome::Next(remaining.swap_remove(idx))
}

#[derive(Clone)]
pub struct QuizSelector {
    catalog: Catalog,
    picker: Arc<dyn Picker>,
}

impl QuizSelector {
    pub fn new(catalog: Catalog, picker: Arc<dyn Picker>) -> Self {
        Self { catalog, picker }
    }

    /// Pick the next question for a quiz round.
    ///
    /// With a category, the pool is that category's questions; when the
    /// category has none (or no category is given) the pool is every
    /// question. Exhaustion is only reported after removing the asked ids
    /// from that pool.
    pub async fn select_next(
        &self,
        category: Option<CategoryId>,
        previously_asked: &HashSet<QuestionId>,
    ) -> Result<QuizOutcome, CoreError> {
        let pool = self.candidate_pool(category).await?;
        debug!(
            pool = pool.len(),
            asked = previously_asked.len(),
            "Drawing quiz question"
        );
        Ok(draw_unseen(pool, previously_asked, self.picker.as_ref()))
    }

    async fn candidate_pool(
        &self,
        category: Option<CategoryId>,
    ) -> Result<Vec<Question>, CoreError> {
        if let Some(category) = category {
            let in_category = self.catalog.filter_by_category(category).await?;
            if !in_category.is_empty() {
                return Ok(in_category);
            }
            debug!(category = %category, "Category has no questions, using all questions");
        }
        self.catalog.list_all().await
    }
}
