//! Domain error types.
//!
//! `InvalidInput` is raised by the validator and the fare calculator when
//! caller-supplied data breaks a precondition. `EstimationFailed` is the only
//! error the end-to-end estimator reports; it deliberately carries no cause.

/// Trip or passenger data failed a precondition.
///
/// The reason is a stable, human-readable message naming the precondition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{reason}")]
pub struct InvalidInput {
    reason: &'static str,
}

impl InvalidInput {
    pub(crate) const NO_PASSENGERS: Self = Self::new("No passengers specified");
    pub(crate) const START_CITY: Self = Self::new("Start city is invalid");
    pub(crate) const DESTINATION_CITY: Self = Self::new("Destination city is invalid");
    pub(crate) const DATE: Self = Self::new("Date is invalid");
    pub(crate) const AGE: Self = Self::new("Age is invalid");

    const fn new(reason: &'static str) -> Self {
        Self { reason }
    }

    /// The failed precondition.
    pub fn reason(&self) -> &'static str {
        self.reason
    }
}

/// End-to-end estimation failed.
///
/// Validation errors, provider outages and bad provider payloads all collapse
/// into this one condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("error estimating ticket price")]
pub struct EstimationFailed;
