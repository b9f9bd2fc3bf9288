//! Fixed-price provider for development and testing without API access.

use crate::domain::{Fare, TripDetails};

use super::BaseFareProvider;
use super::error::BaseFareError;

/// Provider that quotes the same base fare for every trip.
#[derive(Debug, Clone, Copy)]
pub struct FixedFareProvider {
    price: Fare,
}

impl FixedFareProvider {
    /// Create a provider quoting `price`.
    ///
    /// Rejects prices the real API would never return.
    pub fn new(price: Fare) -> Result<Self, BaseFareError> {
        if !price.is_finite() || price < 0.0 {
            return Err(BaseFareError::InvalidPrice(price));
        }
        Ok(Self { price })
    }

    pub fn price(&self) -> Fare {
        self.price
    }
}

impl BaseFareProvider for FixedFareProvider {
    async fn base_fare(&self, _details: &TripDetails) -> Result<Fare, BaseFareError> {
        Ok(self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;

    #[tokio::test]
    async fn quotes_fixed_price() {
        let provider = FixedFareProvider::new(42.0).unwrap();
        let details = TripDetails::new("Paris", "Lyon", Local::now());

        assert_eq!(provider.base_fare(&details).await.unwrap(), 42.0);
        assert_eq!(provider.price(), 42.0);
    }

    #[test]
    fn rejects_invalid_price() {
        assert!(FixedFareProvider::new(-1.0).is_err());
        assert!(FixedFareProvider::new(f64::NAN).is_err());
        assert!(FixedFareProvider::new(f64::INFINITY).is_err());
        assert!(FixedFareProvider::new(0.0).is_ok());
    }
}
