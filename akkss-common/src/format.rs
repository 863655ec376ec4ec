use num_format::{Locale, ToFormattedString};

/// Integer with thousands separators, e.g. `12,847`.
pub fn count(value: u64) -> String {
    value.to_formatted_string(&Locale::en)
}

/// Tonnes of CO2 to one decimal place, e.g. `972.5t`.
pub fn tonnes(value: f64) -> String {
    format!("{:.1}t", value)
}

/// Rupee amount with separators, e.g. `₹157,617`.
pub fn rupees(value: u64) -> String {
    format!("₹{}", count(value))
}

pub fn dollars(value: u32) -> String {
    format!("${}", count(u64::from(value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_separators() {
        assert_eq!(count(0), "0");
        assert_eq!(count(987), "987");
        assert_eq!(count(3245), "3,245");
        assert_eq!(count(2_847_650), "2,847,650");
    }

    #[test]
    fn test_tonnes_rounding() {
        assert_eq!(tonnes(0.0), "0.0t");
        assert_eq!(tonnes(972.54), "972.5t");
        assert_eq!(tonnes(6055.86), "6055.9t");
    }

    #[test]
    fn test_currency() {
        assert_eq!(rupees(157617), "₹157,617");
        assert_eq!(dollars(1299), "$1,299");
    }
}
