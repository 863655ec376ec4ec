use std::cmp::Ordering;

use crate::{Product, ProductCategory, ProductKind};

/// Rupees per dollar used when showing refurbished savings.
pub const INR_PER_USD: u64 = 83;

pub const DEFAULT_PRICE_MAX: u32 = 2500;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SortOrder {
    #[default]
    Featured,
    PriceLow,
    PriceHigh,
    Rating,
}

impl SortOrder {
    pub fn value(&self) -> &'static str {
        match self {
            SortOrder::Featured => "featured",
            SortOrder::PriceLow => "price-low",
            SortOrder::PriceHigh => "price-high",
            SortOrder::Rating => "rating",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Featured => "Featured",
            SortOrder::PriceLow => "Price: Low to High",
            SortOrder::PriceHigh => "Price: High to Low",
            SortOrder::Rating => "Highest Rated",
        }
    }

    pub fn all() -> &'static [SortOrder] {
        &[
            SortOrder::Featured,
            SortOrder::PriceLow,
            SortOrder::PriceHigh,
            SortOrder::Rating,
        ]
    }

    pub fn from_value(value: &str) -> Self {
        Self::all()
            .iter()
            .copied()
            .find(|s| s.value() == value)
            .unwrap_or_default()
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct ProductQuery {
    pub search: String,
    pub category: Option<ProductCategory>,
    pub kind: Option<ProductKind>,
    pub price_min: u32,
    pub price_max: u32,
    pub sort: SortOrder,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: None,
            kind: None,
            price_min: 0,
            price_max: DEFAULT_PRICE_MAX,
            sort: SortOrder::Featured,
        }
    }
}

impl ProductQuery {
    pub fn matches(&self, product: &Product) -> bool {
        let needle = self.search.trim().to_lowercase();
        let matches_search = needle.is_empty()
            || product.name.to_lowercase().contains(&needle)
            || product.specs.processor.to_lowercase().contains(&needle);
        let matches_category = self.category.map_or(true, |c| product.category == c);
        let matches_kind = self.kind.map_or(true, |k| product.kind == k);
        let matches_price = product.price >= self.price_min && product.price <= self.price_max;

        matches_search && matches_category && matches_kind && matches_price
    }

    /// Matching products, sorted. Ties keep catalog order.
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        let mut filtered: Vec<Product> = products
            .iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect();

        let by_rating_desc = |a: &Product, b: &Product| {
            b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal)
        };

        match self.sort {
            SortOrder::PriceLow => filtered.sort_by_key(|p| p.price),
            SortOrder::PriceHigh => filtered.sort_by(|a, b| b.price.cmp(&a.price)),
            SortOrder::Rating => filtered.sort_by(by_rating_desc),
            SortOrder::Featured => filtered.sort_by(|a, b| {
                b.featured
                    .cmp(&a.featured)
                    .then_with(|| by_rating_desc(a, b))
            }),
        }
        filtered
    }
}

#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct StoreSummary {
    pub count: usize,
    pub co2_saved_kg: u64,
    pub refurbished_savings_inr: u64,
}

impl StoreSummary {
    pub fn of(products: &[Product]) -> Self {
        Self {
            count: products.len(),
            co2_saved_kg: products.iter().map(|p| u64::from(p.co2_saved_kg)).sum(),
            refurbished_savings_inr: products
                .iter()
                .map(|p| u64::from(p.savings()) * INR_PER_USD)
                .sum(),
        }
    }
}
