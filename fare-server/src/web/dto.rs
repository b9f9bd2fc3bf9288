//! Data transfer objects for web requests and responses.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::domain::{DiscountCard, Fare, Passenger, TripDetails, TripRequest};

/// Request to estimate a ticket price.
#[derive(Debug, Deserialize)]
pub struct EstimateRequest {
    /// Origin city
    pub from: String,

    /// Destination city
    pub to: String,

    /// Departure date-time, RFC 3339 (e.g. "2026-06-10T12:00:00+02:00")
    pub when: String,

    /// Travelling party
    pub passengers: Vec<PassengerRequest>,
}

/// One passenger in an estimate request.
#[derive(Debug, Deserialize)]
pub struct PassengerRequest {
    /// Age in years, fractional for infants
    pub age: f64,

    /// Last name, used for the family discount
    #[serde(default)]
    pub last_name: String,

    /// Discount cards held
    #[serde(default)]
    pub discounts: Vec<DiscountCard>,
}

/// Response for a successful estimate.
#[derive(Debug, Serialize)]
pub struct EstimateResponse {
    /// Total price for the party
    pub price: Fare,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Error converting a request into domain types.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid date {value:?}: {message}")]
pub struct InvalidDate {
    value: String,
    message: String,
}

// Conversion implementations

impl TryFrom<EstimateRequest> for TripRequest {
    type Error = InvalidDate;

    fn try_from(req: EstimateRequest) -> Result<Self, Self::Error> {
        let when = DateTime::parse_from_rfc3339(&req.when)
            .map_err(|e| InvalidDate {
                value: req.when.clone(),
                message: e.to_string(),
            })?
            .with_timezone(&Local);

        let passengers = req.passengers.into_iter().map(Passenger::from).collect();

        Ok(TripRequest::new(
            TripDetails::new(req.from, req.to, when),
            passengers,
        ))
    }
}

impl From<PassengerRequest> for Passenger {
    fn from(req: PassengerRequest) -> Self {
        Passenger::new(req.age, req.last_name, req.discounts)
    }
}
