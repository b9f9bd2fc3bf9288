//! Base fare lookup.
//!
//! The base fare is the unadjusted reference price for a trip, quoted by an
//! external pricing API from origin, destination and travel date. The fare
//! rules only ever consume the resulting number, so the lookup sits behind
//! the [`BaseFareProvider`] trait and can be swapped for a fixed price in
//! development and tests.

mod client;
mod error;
mod mock;

use std::future::Future;

use crate::domain::{Fare, TripDetails};

pub use client::{BaseFareClient, FareApiConfig};
pub use error::BaseFareError;
pub use mock::FixedFareProvider;

/// Source of base fares.
pub trait BaseFareProvider {
    /// Quote the base fare for a trip.
    ///
    /// A successful quote is always a finite, non-negative number. Any other
    /// outcome is an error; callers never substitute a default.
    fn base_fare(
        &self,
        details: &TripDetails,
    ) -> impl Future<Output = Result<Fare, BaseFareError>> + Send;
}
