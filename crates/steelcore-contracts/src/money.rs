//! Currency parsing and display formatting.
//!
//! Amounts travel through the system as `rust_decimal::Decimal` so that
//! sums and differences are exact; rounding happens only here, at the
//! display boundary (2 decimal places, thousands separators).

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

use crate::error::{SteelError, SteelResult};

/// Parse an amount that may be currency-formatted text.
///
/// Strips `$` and `,` before parsing, so `"$1,000,000.00"`, `"1000000"`,
/// and `" 1000000.00 "` all parse to the same `Decimal`.
pub fn parse_currency(raw: &str) -> SteelResult<Decimal> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| *c != '$' && *c != ',')
        .collect();

    Decimal::from_str(&cleaned).map_err(|e| SteelError::DatasetParse {
        reason: format!("invalid amount '{}': {}", raw, e),
    })
}

/// Format an amount as US dollars: fixed 2 decimals, thousands-separated.
///
/// `1050000` → `$1,050,000.00`; negatives render as `-$1,234.50`.
/// Display-only: the audited value stays unrounded.
pub fn format_usd(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let fixed = format!("{:.2}", rounded.abs());

    // fixed is always "<digits>.<2 digits>" after the formatting above.
    let (int_part, frac_part) = fixed
        .split_once('.')
        .unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, frac_part)
}
