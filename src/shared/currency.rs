//! Euro amount parsing and formatting for display fields.
//!
//! The backend and the UI both speak the French convention: comma decimal
//! separator, trailing `€`. Amounts are `rust_decimal::Decimal` so the
//! parse/format round trip is exact for any value with at most two decimal
//! places.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Currency symbol stripped on parse and appended on format.
pub const CURRENCY_SYMBOL: char = '€';

/// Parse a displayed amount back into a `Decimal`.
///
/// Strips the currency symbol and all whitespace, normalizes the comma
/// separator, then parses. Total: empty or unparseable input yields zero.
pub fn parse_amount(text: &str) -> Decimal {
    let cleaned: String = text
        .chars()
        .filter(|c| *c != CURRENCY_SYMBOL && !c.is_whitespace())
        .collect();
    if cleaned.is_empty() {
        return Decimal::ZERO;
    }
    Decimal::from_str(&cleaned.replace(',', ".")).unwrap_or(Decimal::ZERO)
}

/// Format an amount for display: two decimal places, comma separator,
/// `" €"` suffix.
pub fn format_currency(amount: &Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2} {}", rounded, CURRENCY_SYMBOL).replace('.', ",")
}

/// Normalize the raw text of the amount input field.
///
/// Keeps only digits and commas, parses, and re-renders through
/// [`format_currency`]. Returns `None` when the cleaned text is empty or
/// unparseable; the field is then left unchanged.
pub fn format_amount_field(raw: &str) -> Option<String> {
    let kept: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',')
        .collect();
    if kept.is_empty() {
        return None;
    }
    let parsed = Decimal::from_str(&kept.replace(',', ".")).ok()?;
    Some(format_currency(&parsed))
}

/// Format an order date the way the tracking table shows it.
pub fn format_date(date: &NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_parse_amount_plain() {
        assert_eq!(parse_amount("45.99"), dec("45.99"));
        assert_eq!(parse_amount("45,99"), dec("45.99"));
        assert_eq!(parse_amount("0"), Decimal::ZERO);
    }

    #[test]
    fn test_parse_amount_strips_symbol_and_whitespace() {
        assert_eq!(parse_amount("45,99 €"), dec("45.99"));
        assert_eq!(parse_amount(" 1 234,50 € "), dec("1234.50"));
    }

    #[test]
    fn test_parse_amount_garbage_is_zero() {
        assert_eq!(parse_amount(""), Decimal::ZERO);
        assert_eq!(parse_amount("   "), Decimal::ZERO);
        assert_eq!(parse_amount("abc"), Decimal::ZERO);
        assert_eq!(parse_amount("12abc"), Decimal::ZERO);
    }

    #[test]
    fn test_format_currency_two_decimals() {
        assert_eq!(format_currency(&dec("45.99")), "45,99 €");
        assert_eq!(format_currency(&dec("5")), "5,00 €");
        assert_eq!(format_currency(&Decimal::ZERO), "0,00 €");
        assert_eq!(format_currency(&dec("1.005")), "1,01 €");
    }

    #[test]
    fn test_round_trip_exact_for_two_decimals() {
        for s in ["0", "0.50", "5.00", "45.99", "1234.56", "67.8"] {
            let x = dec(s);
            assert_eq!(parse_amount(&format_currency(&x)), x.round_dp(2));
        }
    }

    #[test]
    fn test_format_amount_field_normalizes() {
        assert_eq!(format_amount_field("45,9"), Some("45,90 €".to_string()));
        assert_eq!(format_amount_field("45,99 €"), Some("45,99 €".to_string()));
        assert_eq!(format_amount_field("1x2"), Some("12,00 €".to_string()));
    }

    #[test]
    fn test_format_amount_field_leaves_unparseable_alone() {
        assert_eq!(format_amount_field(""), None);
        assert_eq!(format_amount_field("abc"), None);
        assert_eq!(format_amount_field("€ "), None);
        assert_eq!(format_amount_field("1,2,3"), None);
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(format_date(&date), "15/01/2024");
    }
}
