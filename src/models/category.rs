//! Expense categories
//!
//! Categories are stored on records as free text so user-defined labels work,
//! but the application ships with a fixed set that suggestion rules and the
//! default budgets refer to.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The built-in category set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DefaultCategory {
    FoodAndDining,
    Transportation,
    Entertainment,
    Shopping,
    Education,
    Healthcare,
    Utilities,
    Other,
}

impl DefaultCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FoodAndDining => "Food & Dining",
            Self::Transportation => "Transportation",
            Self::Entertainment => "Entertainment",
            Self::Shopping => "Shopping",
            Self::Education => "Education",
            Self::Healthcare => "Healthcare",
            Self::Utilities => "Utilities",
            Self::Other => "Other",
        }
    }

    /// Look up a built-in category by label (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.as_str().to_lowercase() == lower)
    }

    pub fn all() -> &'static [DefaultCategory] {
        &[
            Self::FoodAndDining,
            Self::Transportation,
            Self::Entertainment,
            Self::Shopping,
            Self::Education,
            Self::Healthcare,
            Self::Utilities,
            Self::Other,
        ]
    }
}

impl fmt::Display for DefaultCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<DefaultCategory> for String {
    fn from(category: DefaultCategory) -> Self {
        category.as_str().to_string()
    }
}

/// Category selector for expense lists: everything, or one exact label
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// The label that selects every category
    pub const ALL_LABEL: &'static str = "All";

    /// Parse a filter key; exactly "All" selects every category
    pub fn parse(s: &str) -> Self {
        if s == Self::ALL_LABEL {
            Self::All
        } else {
            Self::Only(s.to_string())
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "{}", Self::ALL_LABEL),
            Self::Only(category) => write!(f, "{}", category),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_category_roundtrip() {
        for category in DefaultCategory::all() {
            assert_eq!(DefaultCategory::parse(category.as_str()), Some(*category));
        }
        assert_eq!(
            DefaultCategory::parse("food & dining"),
            Some(DefaultCategory::FoodAndDining)
        );
        assert_eq!(DefaultCategory::parse("Groceries"), None);
    }

    #[test]
    fn test_category_filter_all() {
        let filter = CategoryFilter::parse("All");
        assert_eq!(filter, CategoryFilter::All);
        assert!(filter.matches("Shopping"));
        assert!(filter.matches(""));
    }

    #[test]
    fn test_category_filter_exact() {
        let filter = CategoryFilter::parse("Shopping");
        assert!(filter.matches("Shopping"));
        assert!(!filter.matches("shopping"));
        assert!(!filter.matches("Shopping "));
        // only the exact "All" label is special
        assert_eq!(CategoryFilter::parse("all"), CategoryFilter::Only("all".into()));
    }
}
