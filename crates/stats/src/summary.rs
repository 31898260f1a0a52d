use serde::Serialize;

use vitrina_core::Product;

/// Summary statistics over an ordered product view.
///
/// Monetary/percentage aggregates are carried as display strings with
/// exactly two decimals, matching what the stats panel shows. Both averages
/// are computed from the raw numeric sums, never from already-formatted text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogStats {
    pub total: usize,
    pub max: Option<Product>,
    pub min: Option<Product>,
    pub count_long_titles: usize,
    pub total_price: String,
    pub avg_discount: String,
    pub low_stock_count: usize,
    pub max_discount_product: Option<Product>,
    pub avg_price: String,
}

/// Titles longer than this count as "long" in the panel.
const LONG_TITLE_CHARS: usize = 20;

/// Stock below this counts as "low".
const LOW_STOCK_THRESHOLD: u64 = 50;

impl CatalogStats {
    pub fn compute(view: &[Product]) -> Self {
        let total = view.len();

        // Strict comparisons so the first occurrence wins on ties.
        let mut max: Option<&Product> = None;
        let mut min: Option<&Product> = None;
        let mut max_discount: Option<&Product> = None;
        for p in view {
            match max {
                None => max = Some(p),
                Some(m) if p.price > m.price => max = Some(p),
                _ => {}
            }
            match min {
                None => min = Some(p),
                Some(m) if p.price < m.price => min = Some(p),
                _ => {}
            }
            match max_discount {
                None => max_discount = Some(p),
                Some(m) if p.discount_percentage > m.discount_percentage => {
                    max_discount = Some(p)
                }
                _ => {}
            }
        }

        let count_long_titles = view
            .iter()
            .filter(|p| p.title.chars().count() > LONG_TITLE_CHARS)
            .count();

        let low_stock_count = view
            .iter()
            .filter(|p| p.stock < LOW_STOCK_THRESHOLD)
            .count();

        let price_sum: f64 = view.iter().map(|p| p.price).sum();
        let discount_sum: f64 = view.iter().map(|p| p.discount_percentage).sum();

        let avg_discount = if total == 0 {
            0.0
        } else {
            discount_sum / total as f64
        };
        let avg_price = if total == 0 {
            0.0
        } else {
            price_sum / total as f64
        };

        Self {
            total,
            max: max.cloned(),
            min: min.cloned(),
            count_long_titles,
            total_price: format!("{price_sum:.2}"),
            avg_discount: format!("{avg_discount:.2}"),
            low_stock_count,
            max_discount_product: max_discount.cloned(),
            avg_price: format!("{avg_price:.2}"),
        }
    }
}
