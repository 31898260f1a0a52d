use serde::Serialize;

use vitrina_core::Product;

/// One labelled data point for the bar/line charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

/// One slice of the category pie: count plus share of the whole view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySlice {
    pub name: String,
    pub count: usize,
    pub percent: f64,
}

/// Stock of the first `n` products in view order (the panel charts the
/// top 7 of the current ordering).
pub fn top_stock_series(view: &[Product], n: usize) -> Vec<SeriesPoint> {
    view.iter()
        .take(n)
        .map(|p| SeriesPoint {
            label: p.title.clone(),
            value: p.stock as f64,
        })
        .collect()
}

/// Price of the first `n` products in view order.
pub fn top_price_series(view: &[Product], n: usize) -> Vec<SeriesPoint> {
    view.iter()
        .take(n)
        .map(|p| SeriesPoint {
            label: p.title.clone(),
            value: p.price,
        })
        .collect()
}

/// Per-category counts in first-seen order, each with its percentage of the
/// view total. Empty view yields no slices.
pub fn category_breakdown(view: &[Product]) -> Vec<CategorySlice> {
    let mut slices: Vec<(String, usize)> = Vec::new();
    for p in view {
        match slices.iter_mut().find(|(name, _)| name == &p.category) {
            Some((_, count)) => *count += 1,
            None => slices.push((p.category.clone(), 1)),
        }
    }

    let total = view.len();
    slices
        .into_iter()
        .map(|(name, count)| CategorySlice {
            name,
            count,
            percent: count as f64 / total as f64 * 100.0,
        })
        .collect()
}
