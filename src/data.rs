use crate::models::{
    AdminStats, CartLine, CartProduct, Coordinates, LocationRecord, Order, OrderStatus, Product,
    ProductCategory, ProductKind, ProductSpecs, RegionGroup,
};
use chrono::NaiveDate;

fn location(
    id: u32,
    name: &str,
    city: &str,
    (lat, lng): (f64, f64),
    trees_planted: u64,
    laptops_sold: u64,
    co2_saved: f64,
    region_group: RegionGroup,
) -> LocationRecord {
    LocationRecord {
        id,
        name: name.to_string(),
        city: city.to_string(),
        coordinates: Coordinates::new(lat, lng),
        trees_planted,
        laptops_sold,
        co2_saved,
        region_group,
    }
}

/// The canonical twelve impact locations the app starts from.
pub fn get_baseline_locations() -> Vec<LocationRecord> {
    use RegionGroup::*;
    vec![
        location(1, "Maharashtra", "Mumbai", (19.7515, 75.7139), 3245, 2156, 972.5, WesternIndia),
        location(2, "Karnataka", "Bangalore", (15.3173, 75.7139), 2876, 1923, 863.2, SouthernIndia),
        location(3, "Tamil Nadu", "Chennai", (11.1271, 78.6569), 2134, 1456, 641.1, SouthernIndia),
        location(4, "Delhi", "New Delhi", (28.7041, 77.1025), 1987, 1324, 596.1, NorthernIndia),
        location(5, "Gujarat", "Ahmedabad", (23.0225, 72.5714), 1654, 1102, 496.2, WesternIndia),
        location(6, "Rajasthan", "Jaipur", (27.0238, 74.2179), 1432, 954, 429.6, NorthernIndia),
        location(7, "Uttar Pradesh", "Lucknow", (26.8467, 80.9462), 2987, 1991, 896.1, NorthernIndia),
        location(8, "West Bengal", "Kolkata", (22.9868, 87.8550), 1876, 1251, 563.4, EasternIndia),
        location(9, "Telangana", "Hyderabad", (18.1124, 79.0193), 1543, 1029, 463.2, SouthernIndia),
        location(10, "Punjab", "Chandigarh", (31.1471, 75.3412), 1234, 823, 370.6, NorthernIndia),
        location(11, "Haryana", "Gurugram", (29.0588, 76.0856), 987, 658, 296.1, NorthernIndia),
        location(12, "Kerala", "Kochi", (10.8505, 76.2711), 1321, 881, 396.6, SouthernIndia),
    ]
}

fn specs(processor: &str, memory: &str, storage: &str, display: &str, graphics: &str) -> ProductSpecs {
    ProductSpecs {
        processor: processor.to_string(),
        memory: memory.to_string(),
        storage: storage.to_string(),
        display: display.to_string(),
        graphics: graphics.to_string(),
    }
}

pub fn get_default_products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "EcoBook Pro 15".to_string(),
            category: ProductCategory::New,
            kind: ProductKind::Business,
            price: 1299,
            original_price: None,
            rating: 4.8,
            reviews: 124,
            specs: specs("Intel Core i7-12700H", "16GB DDR4", "512GB SSD", "15.6\" FHD IPS", "Intel Iris Xe"),
            trees_planted: 1,
            co2_saved_kg: 0,
            stock_quantity: 15,
            featured: true,
        },
        Product {
            id: 2,
            name: "ThinkGreen X1 Carbon".to_string(),
            category: ProductCategory::Refurbished,
            kind: ProductKind::Business,
            price: 899,
            original_price: Some(1499),
            rating: 4.6,
            reviews: 89,
            specs: specs("Intel Core i5-10210U", "8GB DDR4", "256GB SSD", "14\" FHD IPS", "Intel UHD"),
            trees_planted: 1,
            co2_saved_kg: 300,
            stock_quantity: 8,
            featured: false,
        },
        Product {
            id: 3,
            name: "GreenForce Gaming".to_string(),
            category: ProductCategory::New,
            kind: ProductKind::Gaming,
            price: 1899,
            original_price: None,
            rating: 4.9,
            reviews: 67,
            specs: specs("AMD Ryzen 7 6800H", "32GB DDR5", "1TB SSD", "15.6\" QHD 165Hz", "RTX 4060"),
            trees_planted: 1,
            co2_saved_kg: 0,
            stock_quantity: 12,
            featured: true,
        },
        Product {
            id: 4,
            name: "EcoBook Air 13".to_string(),
            category: ProductCategory::New,
            kind: ProductKind::Ultrabook,
            price: 999,
            original_price: None,
            rating: 4.7,
            reviews: 156,
            specs: specs("Intel Core i5-1235U", "8GB DDR4", "256GB SSD", "13.3\" FHD IPS", "Intel Iris Xe"),
            trees_planted: 1,
            co2_saved_kg: 0,
            stock_quantity: 6,
            featured: false,
        },
        Product {
            id: 5,
            name: "Renewed WorkStation".to_string(),
            category: ProductCategory::Refurbished,
            kind: ProductKind::Workstation,
            price: 1299,
            original_price: Some(2199),
            rating: 4.5,
            reviews: 43,
            specs: specs("Intel Xeon E-2276M", "32GB DDR4", "512GB SSD", "15.6\" 4K IPS", "Quadro RTX 3000"),
            trees_planted: 1,
            co2_saved_kg: 450,
            stock_quantity: 0,
            featured: false,
        },
        Product {
            id: 6,
            name: "Student EcoBook".to_string(),
            category: ProductCategory::Refurbished,
            kind: ProductKind::Budget,
            price: 499,
            original_price: Some(799),
            rating: 4.3,
            reviews: 201,
            specs: specs("Intel Core i3-8145U", "8GB DDR4", "128GB SSD", "14\" HD", "Intel UHD 620"),
            trees_planted: 1,
            co2_saved_kg: 200,
            stock_quantity: 20,
            featured: false,
        },
    ]
}

/// Tonnes of CO2 credited per laptop in the cart view.
const CO2_PER_LAPTOP_T: f64 = 0.3;

/// Converts a catalog product into the rupee-priced snapshot the cart uses.
pub fn cart_product_for(product: &Product) -> CartProduct {
    CartProduct {
        id: product.id,
        name: product.name.clone(),
        price: u64::from(product.price) * akkss_common::catalog::INR_PER_USD,
        stock_quantity: product.stock_quantity,
        trees_planted: product.trees_planted,
        co2_saved: CO2_PER_LAPTOP_T,
    }
}

pub fn get_default_cart() -> Vec<CartLine> {
    vec![
        CartLine {
            id: 1,
            product: CartProduct {
                id: 101,
                name: "Dell Latitude 5520 Business Laptop".to_string(),
                price: 157617,
                stock_quantity: 15,
                trees_planted: 1,
                co2_saved: CO2_PER_LAPTOP_T,
            },
            quantity: 1,
        },
        CartLine {
            id: 2,
            product: CartProduct {
                id: 102,
                name: "HP EliteBook 840 G8 Refurbished".to_string(),
                price: 107817,
                stock_quantity: 8,
                trees_planted: 1,
                co2_saved: CO2_PER_LAPTOP_T,
            },
            quantity: 2,
        },
    ]
}

pub fn get_default_orders() -> Vec<Order> {
    let day = NaiveDate::from_ymd_opt(2024, 12, 15).unwrap_or_default();
    vec![
        Order {
            id: 1,
            order_number: "AKKSS20241215ABC123".to_string(),
            customer_name: "Rajesh Kumar".to_string(),
            total_amount: 157617,
            status: OrderStatus::Confirmed,
            created_at: day.and_hms_opt(10, 30, 0).unwrap_or_default(),
        },
        Order {
            id: 2,
            order_number: "AKKSS20241215DEF456".to_string(),
            customer_name: "Priya Sharma".to_string(),
            total_amount: 107817,
            status: OrderStatus::Pending,
            created_at: day.and_hms_opt(9, 15, 0).unwrap_or_default(),
        },
    ]
}

pub fn get_admin_stats() -> AdminStats {
    AdminStats {
        total_products: 156,
        total_orders: 89,
        total_users: 234,
        total_revenue: 2_847_650,
        total_trees: 20_186,
        total_co2_saved: 6055.8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_baseline_integrity() {
        let data = get_baseline_locations();
        assert_eq!(data.len(), 12);
        let ids: HashSet<u32> = data.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), 12);
        assert!(data.iter().all(|r| r.coordinates.is_valid()));
        assert!(data.iter().all(|r| r.co2_saved >= 0.0));
    }

    #[test]
    fn test_cart_product_conversion() {
        let products = get_default_products();
        let out_of_stock = products.iter().find(|p| !p.in_stock()).unwrap();
        assert_eq!(cart_product_for(out_of_stock).stock_quantity, 0);
        assert_eq!(cart_product_for(&products[0]).price, 1299 * 83);
        assert_eq!(cart_product_for(&products[0]).stock_quantity, 15);
    }
}
