//! Currency formatting for display
//!
//! Amounts are stored as whole rupees and only grouped when shown. Grouping
//! follows the en-IN convention: the last three digits, then pairs
//! (`1,23,456`).

use crate::catalog::BundleOption;

pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// Format a number with en-IN digit grouping
pub fn group_en_in(n: u64) -> String {
    let s = n.to_string();
    if s.len() <= 3 {
        return s;
    }

    let (head, tail) = s.split_at(s.len() - 3);
    let mut result = String::new();

    for (i, c) in head.chars().enumerate() {
        if i > 0 && (head.len() - i) % 2 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result.push(',');
    result.push_str(tail);
    result
}

/// Grouped amount prefixed with a currency symbol
pub fn format_amount(symbol: &str, n: u64) -> String {
    format!("{}{}", symbol, group_en_in(n))
}

/// Grouped amount with the rupee sign
pub fn format_rupees(n: u64) -> String {
    format_amount(DEFAULT_CURRENCY_SYMBOL, n)
}

/// Dropdown entry text: "Label · ₹price"
pub fn option_entry(symbol: &str, option: &BundleOption) -> String {
    format!(
        "{} · {}",
        option.label,
        format_amount(symbol, u64::from(option.price))
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_en_in() {
        assert_eq!(group_en_in(0), "0");
        assert_eq!(group_en_in(945), "945");
        assert_eq!(group_en_in(1234), "1,234");
        assert_eq!(group_en_in(12345), "12,345");
        assert_eq!(group_en_in(123456), "1,23,456");
        assert_eq!(group_en_in(1234567), "12,34,567");
        assert_eq!(group_en_in(123456789), "12,34,56,789");
    }

    #[test]
    fn test_format_rupees() {
        assert_eq!(format_rupees(1045), "₹1,045");
        assert_eq!(format_amount("Rs ", 3000), "Rs 3,000");
    }

    #[test]
    fn test_option_entry() {
        let option = BundleOption {
            id: "xbox".to_string(),
            label: "Xbox Live (Core)".to_string(),
            price: 99,
        };
        assert_eq!(option_entry("₹", &option), "Xbox Live (Core) · ₹99");
    }
}
