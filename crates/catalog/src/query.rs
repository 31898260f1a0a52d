use std::cmp::Ordering;

use vitrina_core::{CategoryFilter, Product, QueryParams, SortKey, PAGE_SIZE};

use crate::store::CatalogStore;

/// The derived view for one query: the full filtered+sorted sequence (fed to
/// stats and export) and the slice for the current page (fed to the list).
#[derive(Debug, Clone, PartialEq)]
pub struct QueryOutput {
    pub view: Vec<Product>,
    pub page: Vec<Product>,
}

/// Keep products whose title contains `search` case-insensitively (empty
/// search matches all), then restrict to the selected category. Input order
/// is preserved.
pub fn filter_products(
    products: &[Product],
    search: &str,
    category: &CategoryFilter,
) -> Vec<Product> {
    let needle = search.to_lowercase();
    products
        .iter()
        .filter(|p| p.title.to_lowercase().contains(&needle))
        .filter(|p| category.matches(&p.category))
        .cloned()
        .collect()
}

/// Stable sort by the selected key. `None` (no key, or an unrecognized wire
/// value upstream) leaves the input order untouched.
pub fn sort_products(mut products: Vec<Product>, sort: Option<SortKey>) -> Vec<Product> {
    let Some(sort) = sort else {
        return products;
    };

    match sort {
        SortKey::PriceAsc => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceDesc => products.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortKey::RatingAsc => products.sort_by(|a, b| a.rating.total_cmp(&b.rating)),
        SortKey::RatingDesc => products.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::AlphaAsc => products.sort_by(|a, b| title_cmp(&a.title, &b.title)),
        SortKey::AlphaDesc => products.sort_by(|a, b| title_cmp(&b.title, &a.title)),
    }
    products
}

// Locale-aware comparison approximated as case-insensitive lexicographic
// order with a case-sensitive tiebreak, so "apple" and "Apple" sort together.
fn title_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// The contiguous slice `[(page-1)*PAGE_SIZE, page*PAGE_SIZE)` of the view,
/// 1-based. Out-of-range pages yield fewer or zero items, never an error.
pub fn paginate(view: &[Product], page: u32) -> &[Product] {
    let start = (page.max(1) as usize - 1).saturating_mul(PAGE_SIZE);
    if start >= view.len() {
        return &[];
    }
    let end = (start + PAGE_SIZE).min(view.len());
    &view[start..end]
}

/// Whether a page after `page` would still contain items.
pub fn has_next_page(view_len: usize, page: u32) -> bool {
    (page.max(1) as usize).saturating_mul(PAGE_SIZE) < view_len
}

/// Number of pages needed to show `view_len` items (0 when empty).
pub fn page_count(view_len: usize) -> usize {
    view_len.div_ceil(PAGE_SIZE)
}

/// Run the full pipeline for one parameter set: filter, sort, slice the
/// current page. Pure and recomputed from scratch on every call.
pub fn run_query(store: &CatalogStore, params: &QueryParams) -> QueryOutput {
    let filtered = filter_products(store.products(), &params.search, &params.category);
    let view = sort_products(filtered, params.sort);
    let page = paginate(&view, params.page).to_vec();
    QueryOutput { view, page }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, title: &str, category: &str, price: f64, rating: f64) -> Product {
        Product {
            id,
            title: title.to_string(),
            category: category.to_string(),
            price,
            rating,
            discount_percentage: 0.0,
            stock: 10,
            thumbnail: String::new(),
            description: String::new(),
        }
    }

    fn fixture() -> Vec<Product> {
        vec![
            product(1, "Red Lipstick", "beauty", 12.99, 4.4),
            product(2, "Wooden Chair", "furniture", 79.0, 3.9),
            product(3, "Powder Canister", "beauty", 14.99, 4.9),
            product(4, "Kitchen Table", "furniture", 199.0, 4.1),
            product(5, "red nail polish", "beauty", 8.99, 2.0),
        ]
    }

    #[test]
    fn filter_search_is_case_insensitive_substring() {
        let out = filter_products(&fixture(), "RED", &CategoryFilter::All);
        let ids: Vec<u64> = out.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 5]);
    }

    #[test]
    fn empty_search_matches_all() {
        let out = filter_products(&fixture(), "", &CategoryFilter::All);
        assert_eq!(out.len(), 5);
    }

    #[test]
    fn category_filter_is_exact_and_composes_with_search() {
        let out = filter_products(&fixture(), "red", &CategoryFilter::parse("beauty"));
        let ids: Vec<u64> = out.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 5]);

        let out = filter_products(&fixture(), "", &CategoryFilter::parse("furniture"));
        let ids: Vec<u64> = out.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 4]);
    }

    #[test]
    fn filter_preserves_input_order() {
        let out = filter_products(&fixture(), "", &CategoryFilter::parse("beauty"));
        let ids: Vec<u64> = out.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3, 5]);
    }

    #[test]
    fn sort_price_asc_is_non_decreasing() {
        let out = sort_products(fixture(), Some(SortKey::PriceAsc));
        let prices: Vec<f64> = out.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![8.99, 12.99, 14.99, 79.0, 199.0]);
    }

    #[test]
    fn sort_price_desc_is_non_increasing() {
        let out = sort_products(fixture(), Some(SortKey::PriceDesc));
        let prices: Vec<f64> = out.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![199.0, 79.0, 14.99, 12.99, 8.99]);
    }

    #[test]
    fn sort_rating_desc_puts_best_rated_first() {
        let out = sort_products(fixture(), Some(SortKey::RatingDesc));
        let ids: Vec<u64> = out.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1, 4, 2, 5]);
    }

    #[test]
    fn sort_alpha_ignores_case() {
        let out = sort_products(fixture(), Some(SortKey::AlphaAsc));
        let titles: Vec<&str> = out.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Kitchen Table",
                "Powder Canister",
                "Red Lipstick",
                "red nail polish",
                "Wooden Chair",
            ]
        );
    }

    #[test]
    fn sort_alpha_desc_reverses_alphabetical_order() {
        let out = sort_products(fixture(), Some(SortKey::AlphaDesc));
        let titles: Vec<&str> = out.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Wooden Chair",
                "red nail polish",
                "Red Lipstick",
                "Powder Canister",
                "Kitchen Table",
            ]
        );
    }

    #[test]
    fn sort_none_is_identity() {
        let out = sort_products(fixture(), None);
        let ids: Vec<u64> = out.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn sort_is_stable_on_equal_keys() {
        let mut products = fixture();
        products[1].price = 12.99; // ids 1 and 2 now tie on price
        let out = sort_products(products, Some(SortKey::PriceAsc));
        let ids: Vec<u64> = out.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![5, 1, 2, 3, 4]);
    }

    #[test]
    fn paginate_first_page_takes_up_to_page_size() {
        let many: Vec<Product> = (0..20)
            .map(|i| product(i, &format!("P{i}"), "x", 1.0, 1.0))
            .collect();
        assert_eq!(paginate(&many, 1).len(), PAGE_SIZE);
        assert_eq!(paginate(&many, 3).len(), 2);
    }

    #[test]
    fn paginate_out_of_range_is_empty_not_error() {
        let few = fixture();
        assert!(paginate(&few, 2).is_empty());
        assert!(paginate(&few, 1000).is_empty());
        assert!(paginate(&[], 1).is_empty());
    }

    #[test]
    fn has_next_page_mirrors_the_ui_disable_rule() {
        assert!(has_next_page(10, 1));
        assert!(!has_next_page(9, 1));
        assert!(!has_next_page(0, 1));
        assert!(!has_next_page(18, 2));
    }

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(0), 0);
        assert_eq!(page_count(9), 1);
        assert_eq!(page_count(10), 2);
    }

    #[test]
    fn run_query_combines_all_stages() {
        let store = CatalogStore::new(fixture(), vec![]);
        let params = vitrina_core::QueryParams::default()
            .with_search("red")
            .with_sort(Some(SortKey::PriceAsc));

        let out = run_query(&store, &params);
        let view_ids: Vec<u64> = out.view.iter().map(|p| p.id).collect();
        assert_eq!(view_ids, vec![5, 1]);
        assert_eq!(out.page, out.view); // fits on one page
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn arb_product() -> impl Strategy<Value = Product> {
            (
                0u64..1000,
                "[a-zA-Z ]{0,30}",
                prop_oneof![
                    Just("beauty".to_string()),
                    Just("furniture".to_string()),
                    Just("groceries".to_string()),
                ],
                0.0f64..500.0,
                0.0f64..5.0,
            )
                .prop_map(|(id, title, category, price, rating)| Product {
                    id,
                    title,
                    category,
                    price,
                    rating,
                    discount_percentage: 0.0,
                    stock: 10,
                    thumbnail: String::new(),
                    description: String::new(),
                })
        }

        proptest! {
            /// Filter output is a subset of the input, every survivor matches
            /// the search case-insensitively and the category exactly.
            #[test]
            fn filter_is_a_matching_subset(
                products in proptest::collection::vec(arb_product(), 0..40),
                search in "[a-zA-Z]{0,5}",
                category in prop_oneof![
                    Just(CategoryFilter::All),
                    Just(CategoryFilter::Only("beauty".to_string())),
                ],
            ) {
                let out = filter_products(&products, &search, &category);
                prop_assert!(out.len() <= products.len());
                for p in &out {
                    prop_assert!(products.contains(p));
                    prop_assert!(p.title.to_lowercase().contains(&search.to_lowercase()));
                    prop_assert!(category.matches(&p.category));
                }
            }

            /// Every sort key produces a permutation of its input.
            #[test]
            fn sort_is_a_permutation(
                products in proptest::collection::vec(arb_product(), 0..40),
                sort in prop_oneof![
                    Just(SortKey::PriceAsc), Just(SortKey::PriceDesc),
                    Just(SortKey::RatingAsc), Just(SortKey::RatingDesc),
                    Just(SortKey::AlphaAsc), Just(SortKey::AlphaDesc),
                ],
            ) {
                let out = sort_products(products.clone(), Some(sort));
                prop_assert_eq!(out.len(), products.len());

                let mut in_ids: Vec<u64> = products.iter().map(|p| p.id).collect();
                let mut out_ids: Vec<u64> = out.iter().map(|p| p.id).collect();
                in_ids.sort_unstable();
                out_ids.sort_unstable();
                prop_assert_eq!(in_ids, out_ids);
            }

            /// price-asc is non-decreasing in price.
            #[test]
            fn price_asc_is_non_decreasing(
                products in proptest::collection::vec(arb_product(), 0..40),
            ) {
                let out = sort_products(products, Some(SortKey::PriceAsc));
                for pair in out.windows(2) {
                    prop_assert!(pair[0].price <= pair[1].price);
                }
            }

            /// price-desc is non-increasing in price.
            #[test]
            fn price_desc_is_non_increasing(
                products in proptest::collection::vec(arb_product(), 0..40),
            ) {
                let out = sort_products(products, Some(SortKey::PriceDesc));
                for pair in out.windows(2) {
                    prop_assert!(pair[0].price >= pair[1].price);
                }
            }

            /// alpha-desc is non-increasing in title under the collation
            /// used for the alpha keys.
            #[test]
            fn alpha_desc_is_non_increasing(
                products in proptest::collection::vec(arb_product(), 0..40),
            ) {
                let out = sort_products(products, Some(SortKey::AlphaDesc));
                for pair in out.windows(2) {
                    prop_assert!(
                        title_cmp(&pair[0].title, &pair[1].title) != Ordering::Less
                    );
                }
            }

            /// Pagination covers the view exactly once, in order, and any
            /// page past the end is empty.
            #[test]
            fn pagination_partitions_the_view(
                products in proptest::collection::vec(arb_product(), 0..40),
            ) {
                let mut reassembled = Vec::new();
                for page in 1..=(page_count(products.len()).max(1) as u32) {
                    reassembled.extend_from_slice(paginate(&products, page));
                }
                prop_assert_eq!(&reassembled, &products);

                let past_end = page_count(products.len()) as u32 + 1;
                prop_assert!(paginate(&products, past_end).is_empty());
            }
        }
    }
}
