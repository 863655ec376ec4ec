use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use validator::Validate;

pub mod cart;
pub mod catalog;
pub mod format;
pub mod impact;

pub use cart::{Cart, CartTotals, CheckoutStep};
pub use catalog::{ProductQuery, SortOrder, StoreSummary};
pub use impact::{ImpactTier, ImpactTotals, ImpactView, RefreshBounds, RegionSelector};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum RegionGroup {
    NorthernIndia,
    SouthernIndia,
    WesternIndia,
    EasternIndia,
}

impl RegionGroup {
    pub fn label(&self) -> &'static str {
        match self {
            RegionGroup::NorthernIndia => "Northern India",
            RegionGroup::SouthernIndia => "Southern India",
            RegionGroup::WesternIndia => "Western India",
            RegionGroup::EasternIndia => "Eastern India",
        }
    }

    pub fn all() -> &'static [RegionGroup] {
        &[
            RegionGroup::NorthernIndia,
            RegionGroup::SouthernIndia,
            RegionGroup::WesternIndia,
            RegionGroup::EasternIndia,
        ]
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().iter().copied().find(|g| g.label() == label)
    }
}

impl std::fmt::Display for RegionGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// WGS84 latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}

/// One impact location shown on the map. `id` is stable across refreshes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub id: u32,
    pub name: String,
    pub city: String,
    pub coordinates: Coordinates,
    pub trees_planted: u64,
    pub laptops_sold: u64,
    pub co2_saved: f64,
    pub region_group: RegionGroup,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum ProductCategory {
    New,
    Refurbished,
}

impl ProductCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ProductCategory::New => "New",
            ProductCategory::Refurbished => "Refurbished",
        }
    }

    /// Lower-case slug used in `/store?category=` links.
    pub fn slug(&self) -> &'static str {
        match self {
            ProductCategory::New => "new",
            ProductCategory::Refurbished => "refurbished",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug.trim().to_ascii_lowercase().as_str() {
            "new" => Some(ProductCategory::New),
            "refurbished" => Some(ProductCategory::Refurbished),
            _ => None,
        }
    }

    pub fn all() -> &'static [ProductCategory] {
        &[ProductCategory::New, ProductCategory::Refurbished]
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum ProductKind {
    Business,
    Gaming,
    Ultrabook,
    Workstation,
    Budget,
}

impl ProductKind {
    pub fn label(&self) -> &'static str {
        match self {
            ProductKind::Business => "Business",
            ProductKind::Gaming => "Gaming",
            ProductKind::Ultrabook => "Ultrabook",
            ProductKind::Workstation => "Workstation",
            ProductKind::Budget => "Budget",
        }
    }

    pub fn all() -> &'static [ProductKind] {
        &[
            ProductKind::Business,
            ProductKind::Gaming,
            ProductKind::Ultrabook,
            ProductKind::Workstation,
            ProductKind::Budget,
        ]
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|k| k.label().eq_ignore_ascii_case(label))
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductSpecs {
    pub processor: String,
    pub memory: String,
    pub storage: String,
    pub display: String,
    pub graphics: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub category: ProductCategory,
    pub kind: ProductKind,
    pub price: u32,
    pub original_price: Option<u32>,
    pub rating: f32,
    pub reviews: u32,
    pub specs: ProductSpecs,
    pub trees_planted: u32,
    pub co2_saved_kg: u32,
    pub stock_quantity: u32,
    pub featured: bool,
}

impl Product {
    pub fn in_stock(&self) -> bool {
        self.stock_quantity > 0
    }

    pub fn savings(&self) -> u32 {
        self.original_price
            .map(|orig| orig.saturating_sub(self.price))
            .unwrap_or(0)
    }
}

/// Product snapshot carried by a cart line. Prices are in rupees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartProduct {
    pub id: u32,
    pub name: String,
    pub price: u64,
    pub stock_quantity: u32,
    pub trees_planted: u32,
    pub co2_saved: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: u32,
    pub product: CartProduct,
    pub quantity: u32,
}

impl CartLine {
    pub fn total(&self) -> u64 {
        self.product.price * u64::from(self.quantity)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn all() -> &'static [OrderStatus] {
        &[
            OrderStatus::Pending,
            OrderStatus::Confirmed,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ]
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().iter().copied().find(|s| s.label() == label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: u32,
    pub order_number: String,
    pub customer_name: String,
    pub total_amount: u64,
    pub status: OrderStatus,
    pub created_at: chrono::NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct ShippingDetails {
    #[cfg_attr(feature = "validation", validate(length(min = 1, max = 60)))]
    pub first_name: String,
    #[cfg_attr(feature = "validation", validate(length(min = 1, max = 60)))]
    pub last_name: String,
    #[cfg_attr(feature = "validation", validate(email))]
    pub email: String,
    #[cfg_attr(feature = "validation", validate(custom(function = "validate_phone")))]
    pub phone: String,
    #[cfg_attr(feature = "validation", validate(length(min = 1, max = 200)))]
    pub address: String,
    #[cfg_attr(feature = "validation", validate(length(min = 1, max = 60)))]
    pub city: String,
    #[cfg_attr(feature = "validation", validate(length(min = 1, max = 60)))]
    pub state: String,
    #[cfg_attr(feature = "validation", validate(custom(function = "validate_pincode")))]
    pub pincode: String,
}

impl ShippingDetails {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AdminStats {
    pub total_products: u32,
    pub total_orders: u32,
    pub total_users: u32,
    pub total_revenue: u64,
    pub total_trees: u64,
    pub total_co2_saved: f64,
}

#[cfg(test)]
mod tests;

#[cfg(feature = "validation")]
fn validate_pincode(value: &str) -> Result<(), validator::ValidationError> {
    let trimmed = value.trim();
    if trimmed.len() != 6 || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(validator::ValidationError::new("pincode_format"));
    }
    if trimmed.starts_with('0') {
        return Err(validator::ValidationError::new("pincode_format"));
    }
    Ok(())
}

#[cfg(feature = "validation")]
fn validate_phone(value: &str) -> Result<(), validator::ValidationError> {
    let digits: String = value
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();
    let digits = digits.strip_prefix("+91").unwrap_or(&digits);
    if digits.len() != 10 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(validator::ValidationError::new("phone_format"));
    }
    Ok(())
}
