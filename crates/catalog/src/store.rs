use vitrina_core::{Category, Product};

/// In-memory holder of the fetched product and category records.
///
/// Populated once after the startup fetches resolve; either side may stay
/// empty forever when its fetch fails. Records are never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    products: Vec<Product>,
    categories: Vec<Category>,
}

impl CatalogStore {
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Self {
        Self {
            products,
            categories,
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Distinct category values present in the product set, first-seen order.
    pub fn product_categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for product in &self.products {
            if !seen.contains(&product.category.as_str()) {
                seen.push(&product.category);
            }
        }
        seen
    }

    /// Fetched categories narrowed to those that actually occur in the
    /// product set, so selecting one always has a visible effect.
    pub fn selectable_categories(&self) -> Vec<&Category> {
        let present = self.product_categories();
        self.categories
            .iter()
            .filter(|c| present.contains(&c.value.as_str()))
            .collect()
    }
}
