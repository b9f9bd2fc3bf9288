//! Domain types for the fare estimator.
//!
//! Everything here is request-scoped and immutable once built. The pricing
//! code only ever reads these values.

mod error;
mod passenger;
mod trip;

pub use error::{EstimationFailed, InvalidInput};
pub use passenger::{ADULT_AGE, DiscountCard, Passenger};
pub use trip::{TripDetails, TripRequest};

/// A monetary amount, currency-agnostic.
///
/// Adjustments are applied with plain floating-point arithmetic and never
/// clamped, so individual fares can be exactly zero.
pub type Fare = f64;
