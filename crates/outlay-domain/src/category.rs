//! The closed set of expense categories.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Categorises an expense for grouping and ranking.
///
/// The set is closed on purpose: every collaborator (store, forms, charts)
/// agrees on the same eight buckets, and the declaration order doubles as
/// the deterministic tie-break when totals are equal.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Transportation,
    Utilities,
    Entertainment,
    Healthcare,
    Shopping,
    Education,
    Other,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 8] = [
        Category::Food,
        Category::Transportation,
        Category::Utilities,
        Category::Entertainment,
        Category::Healthcare,
        Category::Shopping,
        Category::Education,
        Category::Other,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Food => "Food",
            Category::Transportation => "Transportation",
            Category::Utilities => "Utilities",
            Category::Entertainment => "Entertainment",
            Category::Healthcare => "Healthcare",
            Category::Shopping => "Shopping",
            Category::Education => "Education",
            Category::Other => "Other",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&Category::Healthcare).expect("serialize category");
        assert_eq!(json, "\"healthcare\"");
        let back: Category = serde_json::from_str("\"food\"").expect("deserialize category");
        assert_eq!(back, Category::Food);
    }

    #[test]
    fn declaration_order_is_the_sort_order() {
        assert!(Category::Food < Category::Other);
        assert_eq!(Category::ALL.len(), 8);
    }
}
