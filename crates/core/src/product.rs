use serde::{Deserialize, Serialize};

/// A product record as delivered by the upstream catalog API.
///
/// Records are immutable once fetched: the pipeline only derives views over
/// them, it never edits fields in place. Field declaration order is the
/// column order for tabular exports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub category: String,
    pub price: f64,
    pub rating: f64,
    #[serde(rename = "discountPercentage")]
    pub discount_percentage: f64,
    pub stock: u64,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub description: String,
}

impl Product {
    /// Column names for tabular exports, in field declaration order.
    pub const FIELD_NAMES: [&'static str; 9] = [
        "id",
        "title",
        "category",
        "price",
        "rating",
        "discountPercentage",
        "stock",
        "thumbnail",
        "description",
    ];

    /// Field values stringified in [`Self::FIELD_NAMES`] order.
    pub fn field_texts(&self) -> [String; 9] {
        [
            self.id.to_string(),
            self.title.clone(),
            self.category.clone(),
            number_text(self.price),
            number_text(self.rating),
            number_text(self.discount_percentage),
            self.stock.to_string(),
            self.thumbnail.clone(),
            self.description.clone(),
        ]
    }
}

/// Render a number the way the catalog displays it: integral values without
/// a trailing `.0` (`50` rather than `50.0`), everything else in shortest
/// round-trip form (`9.99`).
pub fn number_text(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
