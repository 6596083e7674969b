//! Booking page route handlers

use askama::Template;
use axum::{extract::State, response::Html};

use crate::error::Result;
use crate::pricing::models::Duration;
use crate::pricing::{services, slots};
use crate::AppState;

/// Booking page template
#[derive(Template)]
#[template(path = "booking.html")]
struct BookingTemplate {
    courts: Vec<String>,
    party_sizes: Vec<String>,
    time_slots: Vec<String>,
    pricing_available: bool,
}

/// Booking page carrying the widget's controls: duration, time slot, court,
/// party size, and the price display.
///
/// Renders even when the pricing document is unavailable; the court and
/// party-size selectors are then empty and the price display stays in its
/// "unavailable" state.
pub async fn page(State(state): State<AppState>) -> Result<Html<String>> {
    let (courts, party_sizes, pricing_available) = match services::pricing_table(&state).await {
        Ok(table) => (table.court_ids(), table.party_sizes(), true),
        Err(e) => {
            tracing::warn!("Rendering booking page without pricing: {}", e);
            (Vec::new(), Vec::new(), false)
        }
    };

    let template = BookingTemplate {
        courts,
        party_sizes,
        // The widget opens on half-hour sessions
        time_slots: slots::labels(Duration::HalfHour),
        pricing_available,
    };

    Ok(Html(template.render()?))
}
