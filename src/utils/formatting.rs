//! Text formatting utilities for the Folio shell.

/// Inserts thousands separators into a whole number.
///
/// # Examples
/// ```ignore
/// assert_eq!(group_thousands(1234567), "1,234,567");
/// ```
pub fn group_thousands(value: u64) -> String {
    let s = value.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();
    for (i, ch) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*ch);
    }
    result
}

/// Formats an amount in rupees with two decimals.
///
/// # Examples
/// ```ignore
/// assert_eq!(format_inr(0.0), "₹0.00");
/// assert_eq!(format_inr(1234.5), "₹1,234.50");
/// ```
pub fn format_inr(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let paise = (amount.abs() * 100.0).round() as u64;
    format!("{}₹{}.{:02}", sign, group_thousands(paise / 100), paise % 100)
}
