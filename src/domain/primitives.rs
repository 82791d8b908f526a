//! Domain primitives: QuestionId, CategoryId.

use serde::{Deserialize, Serialize};

/// Identifier of a stored question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub i64);

impl QuestionId {
    /// Create a QuestionId from its raw value.
    pub fn new(id: i64) -> Self {
        QuestionId(id)
    }

    /// Get the underlying integer value.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a category.
///
/// Categories are always addressed by this integer form, whether the id comes
/// from a path segment, a request body or a stored question row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub i64);

impl CategoryId {
    /// Create a CategoryId from its raw value.
    pub fn new(id: i64) -> Self {
        CategoryId(id)
    }

    /// Get the underlying integer value.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
