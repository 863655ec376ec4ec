pub use akkss_common::{
    AdminStats, Cart, CartLine, CartProduct, CartTotals, CheckoutStep, Coordinates,
    ImpactTier, ImpactTotals, ImpactView, LocationRecord, Order, OrderStatus, Product,
    ProductCategory, ProductKind, ProductQuery, ProductSpecs, RefreshBounds, RegionGroup,
    RegionSelector, ShippingDetails, SortOrder, StoreSummary,
};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum AdminTab {
    #[default]
    Dashboard,
    Products,
    Orders,
    Locations,
}

impl AdminTab {
    pub fn label(&self) -> &'static str {
        match self {
            AdminTab::Dashboard => "Dashboard",
            AdminTab::Products => "Products",
            AdminTab::Orders => "Orders",
            AdminTab::Locations => "Locations",
        }
    }

    pub fn all() -> &'static [AdminTab] {
        &[
            AdminTab::Dashboard,
            AdminTab::Products,
            AdminTab::Orders,
            AdminTab::Locations,
        ]
    }
}

/// Editable copy of a product in the admin form. Numeric fields stay as
/// text until saved.
#[derive(Clone, PartialEq, Debug)]
pub struct ProductDraft {
    pub name: String,
    pub category: ProductCategory,
    pub kind: ProductKind,
    pub price: String,
    pub original_price: String,
    pub stock: String,
    pub featured: bool,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: ProductCategory::New,
            kind: ProductKind::Business,
            price: String::new(),
            original_price: String::new(),
            stock: String::new(),
            featured: false,
        }
    }
}

impl ProductDraft {
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            category: product.category,
            kind: product.kind,
            price: product.price.to_string(),
            original_price: product
                .original_price
                .map(|p| p.to_string())
                .unwrap_or_default(),
            stock: product.stock_quantity.to_string(),
            featured: product.featured,
        }
    }

    /// Builds a new catalog entry from the draft.
    pub fn create(&self, id: u32) -> Result<Product, crate::error::AppError> {
        let base = Product {
            id,
            name: String::new(),
            category: self.category,
            kind: self.kind,
            price: 0,
            original_price: None,
            rating: 0.0,
            reviews: 0,
            specs: ProductSpecs::default(),
            trees_planted: 1,
            co2_saved_kg: 0,
            stock_quantity: 0,
            featured: false,
        };
        self.apply(base)
    }

    /// Applies the draft onto `base`, keeping fields the form does not edit.
    pub fn apply(&self, mut base: Product) -> Result<Product, crate::error::AppError> {
        use crate::error::AppError;

        let name = self.name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("name".to_string()));
        }
        let price: u32 = self
            .price
            .trim()
            .parse()
            .map_err(|_| AppError::Validation("price".to_string()))?;
        let original_price = match self.original_price.trim() {
            "" => None,
            raw => Some(
                raw.parse::<u32>()
                    .map_err(|_| AppError::Validation("original_price".to_string()))?,
            ),
        };
        let stock: u32 = match self.stock.trim() {
            "" => 0,
            raw => raw
                .parse()
                .map_err(|_| AppError::Validation("stock".to_string()))?,
        };

        base.name = name.to_string();
        base.category = self.category;
        base.kind = self.kind;
        base.price = price;
        base.original_price = original_price;
        base.stock_quantity = stock;
        base.featured = self.featured;
        Ok(base)
    }
}

/// Editable copy of an impact location in the admin form.
#[derive(Clone, PartialEq, Debug)]
pub struct LocationDraft {
    pub name: String,
    pub city: String,
    pub region_group: RegionGroup,
    pub lat: String,
    pub lng: String,
    pub trees_planted: String,
    pub laptops_sold: String,
    pub co2_saved: String,
}

impl Default for LocationDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            city: String::new(),
            region_group: RegionGroup::NorthernIndia,
            lat: String::new(),
            lng: String::new(),
            trees_planted: "0".to_string(),
            laptops_sold: "0".to_string(),
            co2_saved: "0.0".to_string(),
        }
    }
}

impl LocationDraft {
    pub fn from_record(record: &LocationRecord) -> Self {
        Self {
            name: record.name.clone(),
            city: record.city.clone(),
            region_group: record.region_group,
            lat: record.coordinates.lat.to_string(),
            lng: record.coordinates.lng.to_string(),
            trees_planted: record.trees_planted.to_string(),
            laptops_sold: record.laptops_sold.to_string(),
            co2_saved: format!("{:.1}", record.co2_saved),
        }
    }

    pub fn create(&self, id: u32) -> Result<LocationRecord, crate::error::AppError> {
        let base = LocationRecord {
            id,
            name: String::new(),
            city: String::new(),
            coordinates: Coordinates::new(0.0, 0.0),
            trees_planted: 0,
            laptops_sold: 0,
            co2_saved: 0.0,
            region_group: self.region_group,
        };
        self.apply(base)
    }

    pub fn apply(&self, mut base: LocationRecord) -> Result<LocationRecord, crate::error::AppError> {
        use crate::error::AppError;

        if self.name.trim().is_empty() {
            return Err(AppError::Validation("name".to_string()));
        }
        let lat: f64 = self
            .lat
            .trim()
            .parse()
            .map_err(|_| AppError::Validation("lat".to_string()))?;
        let lng: f64 = self
            .lng
            .trim()
            .parse()
            .map_err(|_| AppError::Validation("lng".to_string()))?;
        let coordinates = Coordinates::new(lat, lng);
        if !coordinates.is_valid() {
            return Err(AppError::Validation("lat, lng".to_string()));
        }
        base.name = self.name.trim().to_string();
        base.city = self.city.trim().to_string();
        base.region_group = self.region_group;
        base.coordinates = coordinates;
        base.trees_planted = self
            .trees_planted
            .trim()
            .parse()
            .map_err(|_| AppError::Validation("trees_planted".to_string()))?;
        base.laptops_sold = self
            .laptops_sold
            .trim()
            .parse()
            .map_err(|_| AppError::Validation("laptops_sold".to_string()))?;
        let co2: f64 = self
            .co2_saved
            .trim()
            .parse()
            .map_err(|_| AppError::Validation("co2_saved".to_string()))?;
        if !co2.is_finite() || co2 < 0.0 {
            return Err(AppError::Validation("co2_saved".to_string()));
        }
        base.co2_saved = co2;
        Ok(base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_draft_roundtrip() {
        let product = crate::data::get_default_products().remove(1);
        let draft = ProductDraft::from_product(&product);
        let saved = draft.apply(product.clone()).unwrap();
        assert_eq!(saved, product);
    }

    #[test]
    fn test_product_draft_keeps_stock_count() {
        let product = crate::data::get_default_products().remove(0);
        let mut draft = ProductDraft::from_product(&product);
        assert_eq!(draft.stock, "15");

        draft.stock = "4".into();
        let saved = draft.apply(product).unwrap();
        assert_eq!(saved.stock_quantity, 4);
        assert_eq!(ProductDraft::from_product(&saved).stock, "4");

        draft.stock = "0".into();
        let sold_out = draft.apply(saved).unwrap();
        assert!(!sold_out.in_stock());
    }

    #[test]
    fn test_product_draft_rejects_bad_price() {
        let product = crate::data::get_default_products().remove(0);
        let mut draft = ProductDraft::from_product(&product);
        draft.price = "twelve".into();
        assert!(draft.apply(product).is_err());
    }

    #[test]
    fn test_location_draft_rejects_negative_co2() {
        let record = crate::data::get_baseline_locations().remove(0);
        let mut draft = LocationDraft::from_record(&record);
        draft.co2_saved = "-3".into();
        assert!(draft.apply(record.clone()).is_err());
        draft.co2_saved = "10.5".into();
        assert_eq!(draft.apply(record).unwrap().co2_saved, 10.5);
    }

    #[test]
    fn test_location_draft_create() {
        let draft = LocationDraft {
            name: "Odisha".into(),
            city: "Bhubaneswar".into(),
            region_group: RegionGroup::EasternIndia,
            lat: "20.2961".into(),
            lng: "85.8245".into(),
            trees_planted: "120".into(),
            ..Default::default()
        };
        let record = draft.create(13).unwrap();
        assert_eq!(record.id, 13);
        assert_eq!(record.region_group, RegionGroup::EasternIndia);
        assert_eq!(record.trees_planted, 120);

        let mut bad = draft.clone();
        bad.lat = "120".into();
        assert!(bad.create(14).is_err());
    }

    #[test]
    fn test_product_draft_create() {
        let draft = ProductDraft {
            name: "EcoBook Mini".into(),
            price: "649".into(),
            stock: "4".into(),
            ..Default::default()
        };
        let product = draft.create(7).unwrap();
        assert_eq!(product.id, 7);
        assert!(product.in_stock());
        assert_eq!(product.stock_quantity, 4);
        assert_eq!(product.trees_planted, 1);
        assert_eq!(product.original_price, None);
    }
}
