//! Core pricing calculation functions.
//!
//! Pure functions for the booking price math - no I/O and no response
//! shaping. Callers decide the tier (see `schedule`) and where the result
//! is displayed.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

use super::models::{PricingTable, RateTier, SessionSelection};
use super::services::PricingError;

/// Round to specified decimal places using banker's rounding (ROUND_HALF_EVEN).
///
/// Banker's rounding rounds to the nearest even number when the value is exactly
/// halfway between two possibilities. This reduces cumulative rounding bias.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use courtside_web::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(2));   // rounds to even
/// assert_eq!(round_money(dec!(3.5), 0), dec!(4));   // rounds to even
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// Format an amount the way the price display shows it: a leading `$` and
/// exactly two decimal places.
pub fn format_price(total: Decimal) -> String {
    let mut rounded = round_money(total, 2);
    rounded.rescale(2);
    format!("${}", rounded)
}

/// Result of a price computation for one selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub unit_price: Decimal,
    pub session_rate: Decimal,
    pub total: Decimal,
    pub rate_tier: RateTier,
}

/// Compute the displayed total for the current selection.
///
/// `unit price for (court, tier, party size) x session-rate multiplier for
/// the duration`. Any key missing from the document is a lookup failure,
/// never arithmetic on a missing value.
pub fn quote(
    table: &PricingTable,
    selection: &SessionSelection,
    tier: RateTier,
) -> Result<Quote, PricingError> {
    let unit_price = table
        .unit_price(&selection.court, tier, &selection.party_size)
        .ok_or_else(|| PricingError::MissingPrice {
            court: selection.court.clone(),
            tier,
            party_size: selection.party_size.clone(),
        })?;

    let session_rate =
        table
            .session_rate(selection.duration)
            .ok_or(PricingError::MissingSessionRate {
                duration: selection.duration,
            })?;

    Ok(Quote {
        unit_price,
        session_rate,
        total: unit_price * session_rate,
        rate_tier: tier,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::models::Duration;
    use rust_decimal_macros::dec;

    fn table(json: serde_json::Value) -> PricingTable {
        serde_json::from_value(json).expect("table parses")
    }

    fn selection(court: &str, party_size: &str, duration: Duration) -> SessionSelection {
        SessionSelection {
            duration,
            court: court.to_string(),
            party_size: party_size.to_string(),
            time_slot: "08:00-08:30am".to_string(),
        }
    }

    // ==================== round_money tests ====================

    #[test]
    fn test_round_money_bankers_rounding_to_even() {
        assert_eq!(round_money(dec!(2.5), 0), dec!(2));
        assert_eq!(round_money(dec!(3.5), 0), dec!(4));
        assert_eq!(round_money(dec!(4.5), 0), dec!(4));
    }

    #[test]
    fn test_round_money_normal_rounding() {
        assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
        assert_eq!(round_money(dec!(1.236), 2), dec!(1.24));
    }

    // ==================== format_price tests ====================

    #[test]
    fn test_format_price_two_decimals_and_symbol() {
        assert_eq!(format_price(dec!(10)), "$10.00");
        assert_eq!(format_price(dec!(7.5)), "$7.50");
        assert_eq!(format_price(dec!(12.345)), "$12.34");
        assert_eq!(format_price(dec!(0)), "$0.00");
    }

    // ==================== quote tests ====================

    #[test]
    fn test_quote_off_peak_unit_rate() {
        // Pricing document from the acceptance sheet: unit 10, rate 1 -> $10.00
        let table = table(serde_json::json!({
            "courts": {"A": {"off-peak": {"2": 10}}},
            "sessions": {"30-min": 1}
        }));
        let q = quote(
            &table,
            &selection("A", "2", Duration::HalfHour),
            RateTier::OffPeak,
        )
        .unwrap();
        assert_eq!(q.total, dec!(10));
        assert_eq!(format_price(q.total), "$10.00");
    }

    #[test]
    fn test_quote_session_rate_multiplies() {
        // Same document with the rate bumped to 2 -> $20.00
        let table = table(serde_json::json!({
            "courts": {"A": {"off-peak": {"2": 10}}},
            "sessions": {"30-min": 2}
        }));
        let q = quote(
            &table,
            &selection("A", "2", Duration::HalfHour),
            RateTier::OffPeak,
        )
        .unwrap();
        assert_eq!(q.total, dec!(20));
        assert_eq!(format_price(q.total), "$20.00");
    }

    #[test]
    fn test_quote_is_deterministic() {
        let table = table(serde_json::json!({
            "courts": {"A": {"peak": {"3": 11.25}}},
            "sessions": {"1-hour": 1.8}
        }));
        let sel = selection("A", "3", Duration::OneHour);
        let first = quote(&table, &sel, RateTier::Peak).unwrap();
        for _ in 0..10 {
            let again = quote(&table, &sel, RateTier::Peak).unwrap();
            assert_eq!(again, first);
            assert_eq!(format_price(again.total), format_price(first.total));
        }
    }

    #[test]
    fn test_quote_unknown_court_is_lookup_miss() {
        let table = table(serde_json::json!({
            "courts": {"A": {"off-peak": {"2": 10}}},
            "sessions": {"30-min": 1}
        }));
        let err = quote(
            &table,
            &selection("B", "2", Duration::HalfHour),
            RateTier::OffPeak,
        )
        .unwrap_err();
        assert!(matches!(err, PricingError::MissingPrice { .. }));
    }

    #[test]
    fn test_quote_missing_tier_or_party_size_is_lookup_miss() {
        let table = table(serde_json::json!({
            "courts": {"A": {"off-peak": {"2": 10}}},
            "sessions": {"30-min": 1}
        }));
        // Tier present in the enum but absent from the document
        assert!(matches!(
            quote(
                &table,
                &selection("A", "2", Duration::HalfHour),
                RateTier::Peak
            ),
            Err(PricingError::MissingPrice { .. })
        ));
        assert!(matches!(
            quote(
                &table,
                &selection("A", "5", Duration::HalfHour),
                RateTier::OffPeak
            ),
            Err(PricingError::MissingPrice { .. })
        ));
    }

    #[test]
    fn test_quote_missing_session_rate() {
        let table = table(serde_json::json!({
            "courts": {"A": {"off-peak": {"2": 10}}},
            "sessions": {"30-min": 1}
        }));
        let err = quote(
            &table,
            &selection("A", "2", Duration::OneHour),
            RateTier::OffPeak,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            PricingError::MissingSessionRate {
                duration: Duration::OneHour
            }
        ));
    }
}
