//! Category records

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Category identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct CategoryId(pub i32);

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Category record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Category {
    pub id: CategoryId,
    #[sqlx(rename = "type")]
    pub kind: String,
}

/// `{ "<id>": "<type>" }` map as the frontend expects it
pub type CategoryMap = BTreeMap<i32, String>;

/// Build the id-to-label map. Ids are unique so nothing is overwritten.
pub fn category_map(categories: &[Category]) -> CategoryMap {
    categories
        .iter()
        .map(|c| (c.id.0, c.kind.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_serializes_with_string_keys() {
        let categories = vec![
            Category {
                id: CategoryId(2),
                kind: "Art".into(),
            },
            Category {
                id: CategoryId(1),
                kind: "Science".into(),
            },
        ];

        let json = serde_json::to_value(category_map(&categories)).unwrap();
        assert_eq!(json, serde_json::json!({"1": "Science", "2": "Art"}));
    }
}
