use serde::{Deserialize, Serialize};

/// Fixed page size of the catalog view.
pub const PAGE_SIZE: usize = 9;

/// Sort criteria selectable in the catalog view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    PriceAsc,
    PriceDesc,
    RatingAsc,
    RatingDesc,
    AlphaAsc,
    AlphaDesc,
}

impl SortKey {
    /// Parse a wire/UI sort key. An unrecognized key is `None`, which the
    /// query engine treats as "no reordering", not as an error.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "price-asc" => Some(Self::PriceAsc),
            "price-desc" => Some(Self::PriceDesc),
            "rating-asc" => Some(Self::RatingAsc),
            "rating-desc" => Some(Self::RatingDesc),
            "alpha-asc" => Some(Self::AlphaAsc),
            "alpha-desc" => Some(Self::AlphaDesc),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
            Self::RatingAsc => "rating-asc",
            Self::RatingDesc => "rating-desc",
            Self::AlphaAsc => "alpha-asc",
            Self::AlphaDesc => "alpha-desc",
        }
    }
}

/// Category restriction: `All` is the sentinel "no restriction" and can never
/// collide with a real category value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryFilter {
    All,
    Only(String),
}

impl CategoryFilter {
    /// Parse the UI value, where the literal `"all"` means no restriction.
    pub fn parse(s: &str) -> Self {
        if s == "all" {
            Self::All
        } else {
            Self::Only(s.to_string())
        }
    }

    /// Exact, case-sensitive match against a product's category.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(value) => value == category,
        }
    }
}

/// The current query selection. An immutable value: every mutation helper
/// returns a new `QueryParams`, the pipeline never edits state in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryParams {
    pub search: String,
    pub category: CategoryFilter,
    pub sort: Option<SortKey>,
    /// 1-based page number. Never below 1; there is no upper clamp, an
    /// out-of-range page simply yields an empty page slice.
    pub page: u32,
    /// Display preference carried alongside the query selection.
    pub dark_mode: bool,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: CategoryFilter::All,
            // Best-rated first is the catalog's default ordering.
            sort: Some(SortKey::RatingDesc),
            page: 1,
            dark_mode: false,
        }
    }
}

impl QueryParams {
    pub fn with_search(self, search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            ..self
        }
    }

    /// Changing category resets pagination to the first page.
    pub fn with_category(self, category: CategoryFilter) -> Self {
        Self {
            category,
            page: 1,
            ..self
        }
    }

    pub fn with_sort(self, sort: Option<SortKey>) -> Self {
        Self { sort, ..self }
    }

    /// Jump to a page, clamped to ≥1. No upper clamp: out-of-range pages
    /// are legal and show an empty slice.
    pub fn with_page(self, page: u32) -> Self {
        Self {
            page: page.max(1),
            ..self
        }
    }

    pub fn next_page(self) -> Self {
        Self {
            page: self.page.saturating_add(1),
            ..self
        }
    }

    pub fn prev_page(self) -> Self {
        Self {
            page: self.page.saturating_sub(1).max(1),
            ..self
        }
    }

    pub fn toggle_dark_mode(self) -> Self {
        Self {
            dark_mode: !self.dark_mode,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_key_parses_all_six_wire_values() {
        let keys = [
            "price-asc",
            "price-desc",
            "rating-asc",
            "rating-desc",
            "alpha-asc",
            "alpha-desc",
        ];
        for key in keys {
            let parsed = SortKey::parse(key).unwrap();
            assert_eq!(parsed.as_str(), key);
        }
    }

    #[test]
    fn unrecognized_sort_key_is_none_not_error() {
        assert_eq!(SortKey::parse("stock-asc"), None);
        assert_eq!(SortKey::parse(""), None);
    }

    #[test]
    fn all_sentinel_matches_everything() {
        assert!(CategoryFilter::All.matches("beauty"));
        assert!(CategoryFilter::parse("all").matches("anything"));
    }

    #[test]
    fn category_match_is_case_sensitive() {
        let filter = CategoryFilter::parse("beauty");
        assert!(filter.matches("beauty"));
        assert!(!filter.matches("Beauty"));
    }

    #[test]
    fn changing_category_resets_page() {
        let params = QueryParams::default().next_page().next_page();
        assert_eq!(params.page, 3);

        let params = params.with_category(CategoryFilter::parse("beauty"));
        assert_eq!(params.page, 1);
        assert_eq!(params.category, CategoryFilter::Only("beauty".to_string()));
    }

    #[test]
    fn with_page_clamps_below_but_not_above() {
        assert_eq!(QueryParams::default().with_page(0).page, 1);
        assert_eq!(QueryParams::default().with_page(1000).page, 1000);
    }

    #[test]
    fn prev_page_clamps_at_one() {
        let params = QueryParams::default().prev_page().prev_page();
        assert_eq!(params.page, 1);
    }

    #[test]
    fn default_sort_is_rating_desc() {
        assert_eq!(QueryParams::default().sort, Some(SortKey::RatingDesc));
    }

    #[test]
    fn mutation_helpers_produce_new_values() {
        let base = QueryParams::default();
        let searched = base.clone().with_search("phone");
        assert_eq!(base.search, "");
        assert_eq!(searched.search, "phone");

        let dark = base.clone().toggle_dark_mode();
        assert!(dark.dark_mode);
        assert!(!base.dark_mode);
    }
}
