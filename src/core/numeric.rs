//! Safe numeric coercion for aggregate results.
//!
//! `SUM()` over an empty set is NULL in MySQL, and the host tables allow NULL
//! amounts. Every aggregate crossing the repository boundary goes through
//! `or_zero` so that arithmetic only ever sees concrete decimals.

use rust_decimal::Decimal;

/// Coerce an optional aggregate to a decimal, treating NULL as zero
pub fn or_zero(value: Option<Decimal>) -> Decimal {
    value.unwrap_or(Decimal::ZERO)
}
