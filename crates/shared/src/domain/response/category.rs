use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

use crate::model::category::Category;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoriesResponse {
    /// Category type keyed by id.
    pub categories: BTreeMap<i64, String>,
}

impl From<Vec<Category>> for CategoriesResponse {
    fn from(categories: Vec<Category>) -> Self {
        CategoriesResponse {
            categories: categories.into_iter().map(|c| (c.id, c.kind)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_ids_as_object_keys() {
        let response = CategoriesResponse::from(vec![
            Category {
                id: 2,
                kind: "Art".into(),
            },
            Category {
                id: 1,
                kind: "Science".into(),
            },
        ]);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"categories": {"1": "Science", "2": "Art"}})
        );
    }
}
