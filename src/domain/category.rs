use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::primitives::CategoryId;

/// A question category. Read-only from the API's point of view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Category {
    pub fn new(id: CategoryId, kind: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
        }
    }
}

/// Categories keyed by id, serialized as `{"1": "Science", ...}`.
pub type CategoryMap = BTreeMap<i64, String>;

/// Build the `{id: type}` map returned by the listing endpoints.
pub fn category_map(categories: &[Category]) -> CategoryMap {
    categories
        .iter()
        .map(|c| (c.id.as_i64(), c.kind.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_map_serializes_with_string_keys() {
        let categories = vec![
            Category::new(CategoryId::new(2), "Art"),
            Category::new(CategoryId::new(1), "Science"),
        ];
        let json = serde_json::to_value(category_map(&categories)).unwrap();
        assert_eq!(json, serde_json::json!({"1": "Science", "2": "Art"}));
    }
}
