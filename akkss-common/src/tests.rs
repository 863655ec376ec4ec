#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn test_location_serialization() {
        let record = LocationRecord {
            id: 2,
            name: "Karnataka".to_string(),
            city: "Bangalore".to_string(),
            coordinates: Coordinates::new(15.3173, 75.7139),
            trees_planted: 2876,
            laptops_sold: 1923,
            co2_saved: 863.2,
            region_group: RegionGroup::SouthernIndia,
        };
        let serialized = serde_json::to_string(&record).unwrap();
        let deserialized: LocationRecord = serde_json::from_str(&serialized).unwrap();
        assert_eq!(record, deserialized);
    }

    #[test]
    fn test_region_labels() {
        for group in RegionGroup::all() {
            assert_eq!(RegionGroup::from_label(group.label()), Some(*group));
        }
        assert_eq!(RegionGroup::from_label("Central India"), None);
    }

    #[test]
    fn test_coordinates_range() {
        assert!(Coordinates::new(28.7041, 77.1025).is_valid());
        assert!(!Coordinates::new(91.0, 0.0).is_valid());
        assert!(!Coordinates::new(0.0, -181.0).is_valid());
    }

    #[test]
    fn test_category_slugs() {
        assert_eq!(ProductCategory::from_slug("Refurbished"), Some(ProductCategory::Refurbished));
        assert_eq!(ProductCategory::from_slug("accessories"), None);
        assert_eq!(OrderStatus::from_label("shipped"), Some(OrderStatus::Shipped));
    }

    #[test]
    fn test_shipping_validation() {
        #[cfg(feature = "validation")]
        {
            use validator::Validate;

            let mut details = ShippingDetails {
                first_name: "Rajesh".to_string(),
                last_name: "Kumar".to_string(),
                email: "rajesh@example.com".to_string(),
                phone: "+91 98765 43210".to_string(),
                address: "12 MG Road".to_string(),
                city: "Bangalore".to_string(),
                state: "Karnataka".to_string(),
                pincode: "560001".to_string(),
            };
            assert!(details.validate().is_ok());

            details.pincode = "05600".to_string();
            assert!(details.validate().is_err());

            details.pincode = "560001".to_string();
            details.email = "not-an-email".to_string();
            let errors = details.validate().unwrap_err();
            assert!(errors.field_errors().contains_key("email"));
        }
    }
}
