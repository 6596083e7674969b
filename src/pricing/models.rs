//! Domain models for the booking price calculator.
//!
//! `PricingTable` mirrors the external pricing document served alongside the
//! site (`pricing.json`). It is parsed once per load and never mutated.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Booking length. Wire strings are fixed by the pricing document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Duration {
    #[serde(rename = "30-min")]
    HalfHour,
    #[serde(rename = "1-hour")]
    OneHour,
}

impl Duration {
    pub fn as_str(&self) -> &'static str {
        match self {
            Duration::HalfHour => "30-min",
            Duration::OneHour => "1-hour",
        }
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Demand-based pricing tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RateTier {
    #[serde(rename = "peak")]
    Peak,
    #[serde(rename = "off-peak")]
    OffPeak,
}

impl RateTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            RateTier::Peak => "peak",
            RateTier::OffPeak => "off-peak",
        }
    }
}

impl fmt::Display for RateTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-party-size unit prices for one court, split by tier.
#[derive(Debug, Clone, Deserialize)]
pub struct CourtRates {
    #[serde(default)]
    pub peak: HashMap<String, Decimal>,
    #[serde(rename = "off-peak", default)]
    pub off_peak: HashMap<String, Decimal>,
}

impl CourtRates {
    /// Unit prices for the given tier.
    pub fn tier(&self, tier: RateTier) -> &HashMap<String, Decimal> {
        match tier {
            RateTier::Peak => &self.peak,
            RateTier::OffPeak => &self.off_peak,
        }
    }
}

/// The external pricing document.
///
/// `courts` maps court id -> per-tier unit prices keyed by party size.
/// `sessions` maps duration -> a rate multiplier (not a time span).
#[derive(Debug, Clone, Deserialize)]
pub struct PricingTable {
    pub courts: HashMap<String, CourtRates>,
    pub sessions: HashMap<Duration, Decimal>,
}

impl PricingTable {
    /// Unit price for (court, tier, party size), if the document has one.
    pub fn unit_price(&self, court: &str, tier: RateTier, party_size: &str) -> Option<Decimal> {
        self.courts
            .get(court)
            .and_then(|rates| rates.tier(tier).get(party_size))
            .copied()
    }

    /// Rate multiplier for the given session duration.
    pub fn session_rate(&self, duration: Duration) -> Option<Decimal> {
        self.sessions.get(&duration).copied()
    }

    /// Court ids in stable (lexicographic) order, for building selectors.
    pub fn court_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.courts.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// All party-size keys seen anywhere in the document, numerically sorted.
    pub fn party_sizes(&self) -> Vec<String> {
        let sizes: BTreeSet<String> = self
            .courts
            .values()
            .flat_map(|rates| rates.peak.keys().chain(rates.off_peak.keys()))
            .cloned()
            .collect();
        let mut sizes: Vec<String> = sizes.into_iter().collect();
        sizes.sort_by_key(|s| s.parse::<u32>().unwrap_or(u32::MAX));
        sizes
    }
}

/// The user's current booking choices, rebuilt from the request on every
/// recalculation. No identity beyond the request that carried it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSelection {
    pub duration: Duration,
    pub court: String,
    pub party_size: String,
    pub time_slot: String,
}
