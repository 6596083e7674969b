//! Pricing engine for the court-booking widget.
//!
//! Derives the eligible time-slot list and the displayed total price from
//! the user's selections and the external pricing document. Served to the
//! page over HTTP/JSON.

pub mod calculators;
pub mod models;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod schedule;
pub mod services;
pub mod slots;
pub mod source;

// Re-export commonly used items
pub use calculators::{format_price, round_money};
pub use routes::router;
pub use services::{PricingError, QuoteResult};
