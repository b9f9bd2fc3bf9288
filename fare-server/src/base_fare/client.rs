//! HTTP client for the base fare pricing API.

use chrono::{SecondsFormat, Utc};
use serde::Deserialize;
use tracing::debug;

use crate::domain::{Fare, TripDetails};

use super::BaseFareProvider;
use super::error::BaseFareError;

/// Default base URL for the pricing API.
const DEFAULT_BASE_URL: &str = "https://sncftrenitaliadb.com";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the pricing API client.
#[derive(Debug, Clone)]
pub struct FareApiConfig {
    /// Base URL for the API (defaults to production)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl FareApiConfig {
    /// Create a config pointing at the production API.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for FareApiConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Body returned by the pricing API. Only `price` is read.
#[derive(Debug, Deserialize)]
struct PriceResponse {
    price: Option<f64>,
}

/// Pricing API client.
#[derive(Debug, Clone)]
pub struct BaseFareClient {
    http: reqwest::Client,
    base_url: String,
}

impl BaseFareClient {
    /// Create a new client with the given configuration.
    pub fn new(config: FareApiConfig) -> Result<Self, BaseFareError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn price_url(&self) -> String {
        format!("{}/api/train/estimate/price", self.base_url)
    }

    /// Fetch the base fare for a trip.
    pub async fn fetch(&self, details: &TripDetails) -> Result<Fare, BaseFareError> {
        let date = details
            .when
            .with_timezone(&Utc)
            .to_rfc3339_opts(SecondsFormat::Millis, true);

        let response = self
            .http
            .get(self.price_url())
            .query(&[
                ("from", details.from.as_str()),
                ("to", details.to.as_str()),
                ("date", date.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BaseFareError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        let price = parse_price(&body)?;

        debug!(from = %details.from, to = %details.to, price, "fetched base fare");
        Ok(price)
    }
}

impl BaseFareProvider for BaseFareClient {
    async fn base_fare(&self, details: &TripDetails) -> Result<Fare, BaseFareError> {
        self.fetch(details).await
    }
}

/// Extract a usable price from a response body.
fn parse_price(body: &str) -> Result<Fare, BaseFareError> {
    let response: PriceResponse =
        serde_json::from_str(body).map_err(|e| BaseFareError::Json {
            message: e.to_string(),
        })?;

    let price = response.price.ok_or(BaseFareError::MissingPrice)?;

    if !price.is_finite() || price < 0.0 {
        return Err(BaseFareError::InvalidPrice(price));
    }

    Ok(price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder() {
        let config = FareApiConfig::new()
            .with_base_url("http://localhost:8080")
            .with_timeout(5);

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn config_defaults() {
        let config = FareApiConfig::default();

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn client_creation() {
        let client = BaseFareClient::new(FareApiConfig::new());
        assert!(client.is_ok());
    }

    #[test]
    fn price_url_strips_trailing_slash() {
        let config = FareApiConfig::new().with_base_url("http://localhost:8080/");
        let client = BaseFareClient::new(config).unwrap();
        assert_eq!(
            client.price_url(),
            "http://localhost:8080/api/train/estimate/price"
        );
    }

    #[test]
    fn parse_valid_price() {
        assert_eq!(parse_price(r#"{"price": 25}"#).unwrap(), 25.0);
        assert_eq!(parse_price(r#"{"price": 12.5, "currency": "EUR"}"#).unwrap(), 12.5);
        assert_eq!(parse_price(r#"{"price": 0}"#).unwrap(), 0.0);
    }

    #[test]
    fn parse_missing_price() {
        assert!(matches!(
            parse_price(r#"{}"#),
            Err(BaseFareError::MissingPrice)
        ));
        assert!(matches!(
            parse_price(r#"{"price": null}"#),
            Err(BaseFareError::MissingPrice)
        ));
    }

    #[test]
    fn parse_negative_price() {
        assert!(matches!(
            parse_price(r#"{"price": -1}"#),
            Err(BaseFareError::InvalidPrice(p)) if p == -1.0
        ));
    }

    #[test]
    fn parse_malformed_body() {
        assert!(matches!(
            parse_price("not json"),
            Err(BaseFareError::Json { .. })
        ));
        assert!(matches!(
            parse_price(r#"{"price": "cheap"}"#),
            Err(BaseFareError::Json { .. })
        ));
    }

    /// Serve a stand-in pricing API on an ephemeral port. Trips from
    /// "Bordeaux" are quoted 42; anything else gets a 503.
    async fn pricing_api() -> String {
        use std::collections::HashMap;

        use axum::Router;
        use axum::extract::Query;
        use axum::http::StatusCode;
        use axum::routing::get;

        async fn price(Query(params): Query<HashMap<String, String>>) -> (StatusCode, String) {
            let date = params.get("date").map(String::as_str).unwrap_or_default();
            if chrono::DateTime::parse_from_rfc3339(date).is_err() {
                return (StatusCode::BAD_REQUEST, format!("bad date {date:?}"));
            }
            if params.get("to").map(String::as_str) != Some("Paris") {
                return (StatusCode::BAD_REQUEST, "bad destination".into());
            }
            match params.get("from").map(String::as_str) {
                Some("Bordeaux") => (StatusCode::OK, r#"{"price":42}"#.into()),
                _ => (StatusCode::SERVICE_UNAVAILABLE, "x".into()),
            }
        }

        let app = Router::new().route("/api/train/estimate/price", get(price));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

        format!("http://{addr}")
    }

    fn trip(from: &str) -> TripDetails {
        use chrono::{Local, TimeZone};

        let when = Local.with_ymd_and_hms(2026, 6, 10, 12, 0, 0).unwrap();
        TripDetails::new(from, "Paris", when)
    }

    #[tokio::test]
    async fn fetch_sends_trip_as_query() {
        let base_url = pricing_api().await;
        let client = BaseFareClient::new(FareApiConfig::new().with_base_url(base_url)).unwrap();

        assert_eq!(client.fetch(&trip("Bordeaux")).await.unwrap(), 42.0);
    }

    #[tokio::test]
    async fn fetch_maps_error_status() {
        let base_url = pricing_api().await;
        let client = BaseFareClient::new(FareApiConfig::new().with_base_url(base_url)).unwrap();

        let err = client.fetch(&trip("Lille")).await.unwrap_err();
        assert!(
            matches!(&err, BaseFareError::Api { status: 503, message } if message == "x"),
            "unexpected error: {err:?}"
        );
    }
}
