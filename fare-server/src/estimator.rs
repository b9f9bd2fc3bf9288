//! End-to-end ticket estimation.
//!
//! Validates the trip, fetches the base fare, prices every passenger and
//! applies group discounts. Whatever goes wrong along the way is reported to
//! the caller as a single [`EstimationFailed`]; the underlying cause is only
//! logged.

use tracing::{debug, instrument, warn};

use crate::base_fare::{BaseFareError, BaseFareProvider};
use crate::clock::{Clock, SystemClock};
use crate::domain::{EstimationFailed, Fare, InvalidInput, TripRequest};
use crate::pricing::{apply_group_discounts, price_for_at};
use crate::validate::validate_at;

/// Why an estimate failed. Kept internal: callers only see
/// [`EstimationFailed`].
#[derive(Debug, thiserror::Error)]
enum EstimateError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    #[error("base fare unavailable: {0}")]
    BaseFare(#[from] BaseFareError),
}

/// Ticket price estimator.
///
/// Owns its base fare provider and the clock used to sample "now". The
/// clock is read once per estimate.
pub struct TicketEstimator<P, C = SystemClock> {
    provider: P,
    clock: C,
}

impl<P: BaseFareProvider + Sync> TicketEstimator<P> {
    /// Create an estimator using the system clock.
    pub fn new(provider: P) -> Self {
        Self::with_clock(provider, SystemClock)
    }
}

impl<P: BaseFareProvider + Sync, C: Clock + Sync> TicketEstimator<P, C> {
    /// Create an estimator with an explicit clock.
    pub fn with_clock(provider: P, clock: C) -> Self {
        Self { provider, clock }
    }

    /// Estimate the total price for a trip.
    #[instrument(
        skip_all,
        fields(
            from = %trip.details.from,
            to = %trip.details.to,
            passengers = trip.passengers.len(),
        )
    )]
    pub async fn estimate(&self, trip: &TripRequest) -> Result<Fare, EstimationFailed> {
        match self.try_estimate(trip).await {
            Ok(price) => {
                debug!(price, "estimated ticket price");
                Ok(price)
            }
            Err(e) => {
                warn!(error = %e, "ticket estimation failed");
                Err(EstimationFailed)
            }
        }
    }

    async fn try_estimate(&self, trip: &TripRequest) -> Result<Fare, EstimateError> {
        let now = self.clock.now();

        validate_at(trip, now)?;

        let base_fare = self.provider.base_fare(&trip.details).await?;
        debug!(base_fare, "got base fare");

        let total = price_for_at(base_fare, &trip.passengers, trip.details.when, now)?;

        Ok(apply_group_discounts(total, base_fare, &trip.passengers))
    }
}
