pub mod api;
pub mod config;
pub mod db;
pub mod domain;
pub mod engine;
pub mod error;
pub mod store;

pub use config::Config;
pub use db::{init_db, seed_if_empty, Repository};
pub use domain::{Category, CategoryId, NewQuestion, Question, QuestionId};
pub use engine::{Catalog, CoreError, QuizOutcome, QuizSelector};
pub use error::AppError;
pub use store::{MemoryStore, RecordStore, StoreError};
