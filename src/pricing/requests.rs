//! Request DTOs for pricing API endpoints.

use serde::Deserialize;

use super::models::{Duration, SessionSelection};

/// Query for the slot catalog of one duration
#[derive(Debug, Deserialize)]
pub struct SlotsQuery {
    pub duration: Duration,
}

/// Request to quote the current selection.
///
/// `person` is accepted as an alias because that is what the widget's
/// party-size control has always been named.
#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    pub duration: Duration,
    pub court: String,
    #[serde(alias = "person")]
    pub party_size: String,
    pub time_slot: String,
}

impl From<QuoteRequest> for SessionSelection {
    fn from(req: QuoteRequest) -> Self {
        SessionSelection {
            duration: req.duration,
            court: req.court,
            party_size: req.party_size,
            time_slot: req.time_slot,
        }
    }
}
