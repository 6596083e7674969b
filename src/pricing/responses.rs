//! Response DTOs for pricing API endpoints.

use rust_decimal::Decimal;
use serde::Serialize;

use super::models::{Duration, RateTier};

/// Money value for JSON responses
#[derive(Debug, Clone, Serialize)]
pub struct MoneyResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
}

/// Response for the slot catalog of one duration
#[derive(Debug, Serialize)]
pub struct SlotsResponse {
    pub duration: Duration,
    pub count: usize,
    pub slots: Vec<String>,
}

/// Response for a quoted selection
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub total: MoneyResponse,
    /// Exactly what the price display shows, e.g. `$10.00`
    pub display: String,
    pub unit_price: MoneyResponse,
    #[serde(with = "rust_decimal::serde::str")]
    pub session_rate: Decimal,
    pub rate_tier: RateTier,
}

/// Generic pricing error response
#[derive(Debug, Serialize)]
pub struct PricingErrorResponse {
    pub error_type: String,
    pub message: String,
}
