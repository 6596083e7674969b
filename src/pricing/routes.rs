//! Pricing API route handlers

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

use crate::AppState;

use super::models::SessionSelection;
use super::requests::{QuoteRequest, SlotsQuery};
use super::responses::{MoneyResponse, PricingErrorResponse, QuoteResponse, SlotsResponse};
use super::services::{self, PricingError};
use super::slots;

const CURRENCY: &str = "USD";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/slots", get(list_slots))
        .route("/quote", post(quote))
}

/// Full slot catalog for the requested duration.
///
/// The page replaces its time-slot options wholesale with this list on a
/// duration change, so no stale options survive the switch.
async fn list_slots(Query(query): Query<SlotsQuery>) -> Json<SlotsResponse> {
    let slots = slots::labels(query.duration);
    Json(SlotsResponse {
        duration: query.duration,
        count: slots.len(),
        slots,
    })
}

/// Quote the current selection. All controls funnel through this one
/// endpoint, so any input change triggers a full recomputation.
async fn quote(
    State(state): State<AppState>,
    Json(req): Json<QuoteRequest>,
) -> Result<Json<QuoteResponse>, PricingError> {
    let selection: SessionSelection = req.into();
    let result = services::resolve_quote(&state, &selection).await?;

    Ok(Json(QuoteResponse {
        total: MoneyResponse {
            amount: result.quote.total,
            currency: CURRENCY.to_string(),
        },
        display: result.display,
        unit_price: MoneyResponse {
            amount: result.quote.unit_price,
            currency: CURRENCY.to_string(),
        },
        session_rate: result.quote.session_rate,
        rate_tier: result.quote.rate_tier,
    }))
}

impl IntoResponse for PricingError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            PricingError::InvalidSelection { .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, "invalid_selection")
            }
            PricingError::SourceUnavailable { .. } => {
                tracing::warn!("Pricing document unavailable: {}", self);
                (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
            }
            PricingError::MissingPrice { .. } | PricingError::MissingSessionRate { .. } => {
                tracing::warn!("Pricing lookup miss: {}", self);
                (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
            }
        };

        let body = PricingErrorResponse {
            error_type: error_type.to_string(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
