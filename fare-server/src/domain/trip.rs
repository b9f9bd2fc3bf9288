//! Trip details and the request aggregating them with passengers.

use chrono::{DateTime, Local};

use super::Passenger;

/// Where and when a trip happens.
#[derive(Debug, Clone, PartialEq)]
pub struct TripDetails {
    /// Origin city.
    pub from: String,
    /// Destination city.
    pub to: String,
    /// Departure instant, in local time.
    pub when: DateTime<Local>,
}

impl TripDetails {
    pub fn new(from: impl Into<String>, to: impl Into<String>, when: DateTime<Local>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            when,
        }
    }
}

/// A request to price one trip for a group of passengers.
///
/// Passenger order does not affect the price but is preserved so callers can
/// correlate their input.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRequest {
    pub details: TripDetails,
    pub passengers: Vec<Passenger>,
}

impl TripRequest {
    pub fn new(details: TripDetails, passengers: Vec<Passenger>) -> Self {
        Self {
            details,
            passengers,
        }
    }
}
