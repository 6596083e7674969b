//! Pricing service functions tying the document, cache, and calculator
//! together.
//!
//! Every quote request reads the full current selection, so a change to any
//! control (duration, court, party size, time slot) flows through the same
//! recomputation path.

use std::sync::Arc;

use crate::pricing::models::{Duration, PricingTable, RateTier, SessionSelection};
use crate::AppState;

use super::calculators::{self, Quote};
use super::slots;
use super::source;

/// Pricing calculation error types. All are local and non-fatal: page
/// rendering keeps working when pricing does not.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PricingError {
    /// The pricing document could not be read or parsed.
    #[error("pricing document unavailable: {reason}")]
    SourceUnavailable { reason: String },

    /// The document has no unit price for this (court, tier, party size).
    #[error("no {tier} price for court '{court}', party size {party_size}")]
    MissingPrice {
        court: String,
        tier: RateTier,
        party_size: String,
    },

    /// The document has no rate multiplier for this duration.
    #[error("no session rate for duration '{duration}'")]
    MissingSessionRate { duration: Duration },

    /// A control carried an unexpected value; skip computation.
    #[error("invalid selection: {reason}")]
    InvalidSelection { reason: String },
}

/// A computed quote plus the string the price display shows.
#[derive(Debug, Clone)]
pub struct QuoteResult {
    pub quote: Quote,
    pub display: String,
}

/// Get the pricing table, from cache when warm, loading it otherwise.
///
/// Caching the parsed table (instead of re-fetching per computation) means
/// concurrent quotes never race on in-flight loads of different vintages.
pub async fn pricing_table(state: &AppState) -> Result<Arc<PricingTable>, PricingError> {
    if let Some(cached) = state.cache.pricing_table().await {
        tracing::debug!("Cache HIT for pricing table");
        return Ok(cached);
    }

    tracing::debug!("Cache MISS for pricing table");
    let table = Arc::new(source::load_pricing_table(&state.config.pricing_path).await?);
    state.cache.store_pricing_table(table.clone()).await;
    Ok(table)
}

/// Resolve a quote for the current selection.
///
/// Validates the selection, determines the tier from the configured peak
/// schedule, and runs the pure calculator against the cached table.
pub async fn resolve_quote(
    state: &AppState,
    selection: &SessionSelection,
) -> Result<QuoteResult, PricingError> {
    if selection.court.trim().is_empty() {
        return Err(PricingError::InvalidSelection {
            reason: "no court selected".to_string(),
        });
    }
    if selection.party_size.trim().is_empty() {
        return Err(PricingError::InvalidSelection {
            reason: "no party size selected".to_string(),
        });
    }

    // The active catalog's labels are exactly the selectable values.
    let slot = slots::find(selection.duration, &selection.time_slot).ok_or_else(|| {
        PricingError::InvalidSelection {
            reason: format!(
                "time slot '{}' is not offered for {} sessions",
                selection.time_slot, selection.duration
            ),
        }
    })?;

    let table = pricing_table(state).await?;
    let tier = state.schedule.tier_for(&slot);
    let quote = calculators::quote(&table, selection, tier)?;
    let display = calculators::format_price(quote.total);

    Ok(QuoteResult { quote, display })
}
