//! Rupee formatting for the financial summary

use super::records::TransactionStats;

pub const CURRENCY_SYMBOL: &str = "₹";
pub const CURRENCY_CODE: &str = "INR";

/// Format an amount as Indian rupees: `₹1,23,456.78`
///
/// Digits are grouped Indian-style (last three, then pairs) and rounded to two
/// decimals. Negative amounts get a leading `-` before the symbol.
pub fn format_inr(amount: f64) -> String {
    if amount.is_nan() {
        return format!("{}NaN", CURRENCY_SYMBOL);
    }
    if amount.is_infinite() {
        let sign = if amount < 0.0 { "-" } else { "" };
        return format!("{}{}∞", sign, CURRENCY_SYMBOL);
    }

    // Formatting the decimal string keeps every digit of large amounts
    let fixed = format!("{:.2}", amount.abs());
    let (rupees, paise) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let is_zero = fixed.bytes().all(|b| b == b'0' || b == b'.');
    let sign = if amount < 0.0 && !is_zero { "-" } else { "" };

    format!(
        "{}{}{}.{}",
        sign,
        CURRENCY_SYMBOL,
        group_indian(rupees),
        paise
    )
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, last_three) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), last_three)
}

/// One-line summary of the user's totals
pub fn summary_line(stats: &TransactionStats) -> String {
    format!(
        "Balance {} · Income {} · Expenses {}",
        format_inr(stats.balance),
        format_inr(stats.total_income),
        format_inr(stats.total_expense)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_amounts() {
        assert_eq!(format_inr(0.0), "₹0.00");
        assert_eq!(format_inr(5.5), "₹5.50");
        assert_eq!(format_inr(999.999), "₹1,000.00");
    }

    #[test]
    fn test_indian_grouping() {
        assert_eq!(format_inr(1234.0), "₹1,234.00");
        assert_eq!(format_inr(123456.78), "₹1,23,456.78");
        assert_eq!(format_inr(12345678.9), "₹1,23,45,678.90");
    }

    #[test]
    fn test_negative_amounts() {
        assert_eq!(format_inr(-2500.0), "-₹2,500.00");
        assert_eq!(format_inr(-0.001), "₹0.00");
    }

    #[test]
    fn test_huge_amounts_keep_their_digits() {
        assert_eq!(format_inr(1e20), "₹10,00,00,00,00,00,00,00,00,000.00");
        assert_eq!(format_inr(-1e18), "-₹10,00,00,00,00,00,00,000.00");
    }

    #[test]
    fn test_summary_line() {
        let stats = TransactionStats {
            total_income: 85000.0,
            total_expense: 42350.5,
            balance: 42649.5,
            transaction_count: 12,
        };
        assert_eq!(
            summary_line(&stats),
            "Balance ₹42,649.50 · Income ₹85,000.00 · Expenses ₹42,350.50"
        );
    }
}
