//! Domain types for the trivia catalogue.
//!
//! This module provides:
//! - Id primitives: QuestionId, CategoryId
//! - Question and Category records with their public JSON shape
//! - The validated NewQuestion payload accepted by the store

pub mod category;
pub mod primitives;
pub mod question;

pub use category::{category_map, Category, CategoryMap};
pub use primitives::{CategoryId, QuestionId};
pub use question::{NewQuestion, Question};
