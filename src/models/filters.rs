//! List filters and pagination metadata.

use serde::{Deserialize, Serialize};

use super::{Category, Difficulty};

/// Sort order for the guide list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SortBy {
    #[serde(rename = "createdAt")]
    CreatedAt,
    #[serde(rename = "views")]
    Views,
    #[serde(rename = "likes")]
    Likes,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::CreatedAt => "createdAt",
            SortBy::Views => "views",
            SortBy::Likes => "likes",
        }
    }
}

/// Filter constraints for the guide list. Absent fields mean "no constraint"
/// and are omitted from the query string entirely; an explicit null is never
/// sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuideFilters {
    pub category: Option<Category>,
    pub difficulty: Option<Difficulty>,
    pub sort_by: Option<SortBy>,
    pub search: Option<String>,
}

impl GuideFilters {
    /// Serialize the present constraints as query pairs, skipping absent and
    /// empty values.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(category) = self.category {
            pairs.push(("category", category.as_str().to_string()));
        }
        if let Some(difficulty) = self.difficulty {
            pairs.push(("difficulty", difficulty.as_str().to_string()));
        }
        if let Some(sort_by) = self.sort_by {
            pairs.push(("sortBy", sort_by.as_str().to_string()));
        }
        if let Some(search) = &self.search {
            if !search.trim().is_empty() {
                pairs.push(("search", search.clone()));
            }
        }
        pairs
    }
}

/// Pagination metadata from the guide list response.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total_pages: u32,
    pub current_page: u32,
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_pairs_omit_absent_keys() {
        let filters = GuideFilters {
            category: Some(Category::Plumbing),
            sort_by: Some(SortBy::Views),
            ..Default::default()
        };

        let pairs = filters.to_query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("category", "Plumbing".to_string()),
                ("sortBy", "views".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_filters_produce_no_pairs() {
        assert!(GuideFilters::default().to_query_pairs().is_empty());
    }

    #[test]
    fn test_blank_search_is_omitted() {
        let filters = GuideFilters {
            search: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(filters.to_query_pairs().is_empty());
    }
}
