//! Trip-level input validation.
//!
//! Runs before any pricing work and fails on the first broken precondition,
//! checked in a fixed order: passengers, origin, destination, date.

use chrono::{DateTime, Local};

use crate::domain::{InvalidInput, TripRequest};

/// Validate a trip against the current wall clock.
pub fn validate(trip: &TripRequest) -> Result<(), InvalidInput> {
    validate_at(trip, Local::now())
}

/// Validate a trip against an explicit reference instant.
///
/// The travel date is accepted if it falls on or after local midnight of the
/// day containing `now`.
pub fn validate_at(trip: &TripRequest, now: DateTime<Local>) -> Result<(), InvalidInput> {
    if trip.passengers.is_empty() {
        return Err(InvalidInput::NO_PASSENGERS);
    }

    if trip.details.from.trim().is_empty() {
        return Err(InvalidInput::START_CITY);
    }

    if trip.details.to.trim().is_empty() {
        return Err(InvalidInput::DESTINATION_CITY);
    }

    // Before today's local midnight iff the local calendar date is earlier.
    if trip.details.when.date_naive() < now.date_naive() {
        return Err(InvalidInput::DATE);
    }

    Ok(())
}
