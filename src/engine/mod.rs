//! Query, pagination and quiz logic on top of a [`RecordStore`](crate::store::RecordStore).
//!
//! Every operation returns an explicit [`CoreError`] instead of letting store
//! faults escape: reads report faults as `NotFound`, mutations as
//! `Unprocessable`.

pub mod catalog;
pub mod pagination;
pub mod quiz;

pub use catalog::{Catalog, Created, Deleted};
pub use pagination::{paginate, Page, PageQuery, QUESTIONS_PER_PAGE};
pub use quiz::{draw_unseen, Picker, QuizOutcome, QuizSelector, RandomPicker};

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Unprocessable: {0}")]
    Unprocessable(String),
}

impl CoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, CoreError::NotFound(_))
    }

    pub fn is_unprocessable(&self) -> bool {
        matches!(self, CoreError::Unprocessable(_))
    }
}
