//! Category suggestions
//!
//! Maps free-text expense descriptions to a category by keyword. Rules are
//! tried in table order and the first keyword found anywhere in the text
//! wins, so the order of the table is part of its meaning.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::models::DefaultCategory;

/// A keyword and the category it suggests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionRule {
    /// Lowercase substring to look for
    pub keyword: String,
    pub category: String,
}

impl SuggestionRule {
    pub fn new(keyword: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into().to_lowercase(),
            category: category.into(),
        }
    }
}

/// Built-in keyword table, in match order
pub const DEFAULT_RULES: &[(&str, DefaultCategory)] = &[
    ("starbucks", DefaultCategory::FoodAndDining),
    ("coffee", DefaultCategory::FoodAndDining),
    ("pizza", DefaultCategory::FoodAndDining),
    ("uber", DefaultCategory::Transportation),
    ("bus", DefaultCategory::Transportation),
    ("netflix", DefaultCategory::Entertainment),
    ("spotify", DefaultCategory::Entertainment),
    ("amazon", DefaultCategory::Shopping),
    ("textbook", DefaultCategory::Education),
    ("books", DefaultCategory::Education),
];

/// First-match-wins keyword categorizer
#[derive(Debug, Clone)]
pub struct CategorySuggester {
    rules: Vec<SuggestionRule>,
}

impl Default for CategorySuggester {
    fn default() -> Self {
        Self::with_rules(
            DEFAULT_RULES
                .iter()
                .map(|(keyword, category)| SuggestionRule::new(*keyword, *category)),
        )
    }
}

impl CategorySuggester {
    /// Build a suggester from an ordered rule sequence
    pub fn with_rules<I>(rules: I) -> Self
    where
        I: IntoIterator<Item = SuggestionRule>,
    {
        Self {
            rules: rules
                .into_iter()
                .map(|r| SuggestionRule::new(r.keyword, r.category))
                .collect(),
        }
    }

    pub fn rules(&self) -> &[SuggestionRule] {
        &self.rules
    }

    /// Suggest a category for `text`, or `None` if no keyword occurs in it
    pub fn suggest(&self, text: &str) -> Option<&str> {
        let lower = text.to_lowercase();
        let hit = self
            .rules
            .iter()
            .find(|rule| lower.contains(rule.keyword.as_str()));

        trace!(
            text,
            keyword = hit.map(|r| r.keyword.as_str()),
            "category suggestion"
        );

        hit.map(|rule| rule.category.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_order_is_pinned() {
        let suggester = CategorySuggester::default();
        let keywords: Vec<&str> = suggester.rules().iter().map(|r| r.keyword.as_str()).collect();
        assert_eq!(
            keywords,
            vec![
                "starbucks", "coffee", "pizza", "uber", "bus", "netflix", "spotify", "amazon",
                "textbook", "books"
            ]
        );
    }

    #[test]
    fn test_starbucks_coffee_matches_first_keyword() {
        // "starbucks" precedes "coffee" in the table, and both map to Food & Dining
        let suggester = CategorySuggester::default();
        assert_eq!(suggester.suggest("Starbucks Coffee"), Some("Food & Dining"));
    }

    #[test]
    fn test_first_match_wins_over_longer_match() {
        let suggester = CategorySuggester::with_rules(vec![
            SuggestionRule::new("shop", "Shopping"),
            SuggestionRule::new("coffee shop", "Food & Dining"),
        ]);
        assert_eq!(suggester.suggest("Coffee Shop"), Some("Shopping"));

        let reversed = CategorySuggester::with_rules(vec![
            SuggestionRule::new("coffee shop", "Food & Dining"),
            SuggestionRule::new("shop", "Shopping"),
        ]);
        assert_eq!(reversed.suggest("Coffee Shop"), Some("Food & Dining"));
    }

    #[test]
    fn test_substring_not_whole_word() {
        let suggester = CategorySuggester::default();
        // "bus" inside "business"
        assert_eq!(suggester.suggest("Business lunch"), Some("Transportation"));
        // "books" is checked after "textbook"
        assert_eq!(suggester.suggest("Used textbooks"), Some("Education"));
        assert_eq!(suggester.suggest("Audiobooks"), Some("Education"));
    }

    #[test]
    fn test_case_insensitive() {
        let suggester = CategorySuggester::default();
        assert_eq!(suggester.suggest("NETFLIX.COM"), Some("Entertainment"));
        assert_eq!(suggester.suggest("uber eats"), Some("Transportation"));
    }

    #[test]
    fn test_no_match() {
        let suggester = CategorySuggester::default();
        assert_eq!(suggester.suggest("Grocery Shopping"), None);
        assert_eq!(suggester.suggest(""), None);
    }

    #[test]
    fn test_rules_are_lowercased() {
        let suggester =
            CategorySuggester::with_rules(vec![SuggestionRule {
                keyword: "GYM".into(),
                category: "Healthcare".into(),
            }]);
        assert_eq!(suggester.rules()[0].keyword, "gym");
        assert_eq!(suggester.suggest("City Gym membership"), Some("Healthcare"));
    }

    #[test]
    fn test_deterministic() {
        let suggester = CategorySuggester::default();
        let first = suggester.suggest("Amazon books order");
        for _ in 0..10 {
            assert_eq!(suggester.suggest("Amazon books order"), first);
        }
        assert_eq!(first, Some("Shopping"));
    }
}
