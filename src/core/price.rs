// Estatery - core/price.rs
//
// Price string parsing and Indian-format display.
// Core layer: pure logic, no I/O.
//
// Listing prices are human-readable display strings in three canonical
// forms: exact ("₹25,000"), lakhs ("₹85 L" / "₹85 Lakhs", ×100,000) and
// crores ("₹1.5 Cr", ×10,000,000). The source data is untrusted free text,
// so parsing degrades to 0 instead of failing.

use crate::util::constants::{CRORE, LAKH};
use regex::Regex;
use std::sync::OnceLock;

/// First decimal literal in a cleaned price string, e.g. "1.5" in "1.5Cr".
fn numeric_literal() -> &'static Regex {
    static NUMERIC: OnceLock<Regex> = OnceLock::new();
    NUMERIC.get_or_init(|| Regex::new(r"\d+(?:\.\d+)?").expect("static regex"))
}

/// Parse a display price string into rupees.
///
/// Strips the currency symbol, commas, and whitespace, then applies the
/// unit multiplier: `Cr` means crores, `L`/`Lakhs` means lakhs (the two
/// spellings are synonyms; any occurrence of `L` in the cleaned string
/// selects the lakhs unit), and a bare literal is taken as rupees.
///
/// Returns 0 for empty or unparseable input. Never panics.
pub fn parse_price(text: &str) -> f64 {
    let cleaned: String = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',' && *c != '₹')
        .collect();

    let literal = match numeric_literal().find(&cleaned) {
        Some(m) => m.as_str().parse::<f64>().unwrap_or(0.0),
        None => return 0.0,
    };
    let value = if cleaned.contains("Cr") {
        literal * CRORE
    } else if cleaned.contains('L') {
        literal * LAKH
    } else {
        literal
    };

    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// `Option`-tolerant adapter: absent price parses to 0.
pub fn parse_price_opt(text: Option<&str>) -> f64 {
    text.map(parse_price).unwrap_or(0.0)
}

/// Format a rupee amount with Indian digit grouping (3-then-2), e.g.
/// 15000000 → "1,50,00,000". Fractions are dropped; used for display only.
pub fn format_inr(amount: f64) -> String {
    let negative = amount < 0.0;
    let digits = format!("{}", amount.abs().round() as u64);

    let mut grouped = String::new();
    if digits.len() <= 3 {
        grouped.push_str(&digits);
    } else {
        let (head, tail) = digits.split_at(digits.len() - 3);
        // Head groups in pairs, right to left.
        let head_bytes = head.as_bytes();
        let mut parts: Vec<&str> = Vec::new();
        let mut end = head_bytes.len();
        while end > 2 {
            parts.push(&head[end - 2..end]);
            end -= 2;
        }
        parts.push(&head[..end]);
        parts.reverse();
        grouped.push_str(&parts.join(","));
        grouped.push(',');
        grouped.push_str(tail);
    }

    if negative {
        format!("-{grouped}")
    } else {
        grouped
    }
}

// =============================================================================
// Unit tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_crore_form() {
        assert_eq!(parse_price("₹1.5 Cr"), 15_000_000.0);
        assert_eq!(parse_price("₹3 Cr"), 30_000_000.0);
    }

    #[test]
    fn test_parses_lakh_forms() {
        // "L" and "Lakhs" are synonyms for the same multiplier.
        assert_eq!(parse_price("₹85 Lakhs"), 8_500_000.0);
        assert_eq!(parse_price("₹85 L"), 8_500_000.0);
        assert_eq!(parse_price("₹50L"), 5_000_000.0);
    }

    #[test]
    fn test_parses_exact_form_with_separators() {
        assert_eq!(parse_price("₹25,000"), 25_000.0);
        assert_eq!(parse_price("₹ 1,50,000"), 150_000.0);
        assert_eq!(parse_price("18000"), 18_000.0);
    }

    #[test]
    fn test_degrades_to_zero_on_garbage() {
        assert_eq!(parse_price("garbage"), 0.0);
        assert_eq!(parse_price(""), 0.0);
        assert_eq!(parse_price("₹"), 0.0);
        assert_eq!(parse_price_opt(None), 0.0);
    }

    #[test]
    fn test_decimal_exact_form() {
        assert_eq!(parse_price("₹12,500.50"), 12_500.5);
    }

    #[test]
    fn test_format_inr_grouping() {
        assert_eq!(format_inr(0.0), "0");
        assert_eq!(format_inr(999.0), "999");
        assert_eq!(format_inr(25_000.0), "25,000");
        assert_eq!(format_inr(150_000.0), "1,50,000");
        assert_eq!(format_inr(8_500_000.0), "85,00,000");
        assert_eq!(format_inr(15_000_000.0), "1,50,00,000");
    }
}
