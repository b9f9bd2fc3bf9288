use std::net::SocketAddr;

use fare_server::base_fare::{BaseFareClient, BaseFareProvider, FareApiConfig, FixedFareProvider};
use fare_server::cache::{CacheConfig, CachedFareProvider};
use fare_server::estimator::TicketEstimator;
use fare_server::web::{AppState, create_router};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Default listen address.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let addr: SocketAddr = std::env::var("BIND_ADDR")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
        .parse()
        .expect("BIND_ADDR must be a socket address");

    // A fixed price skips the pricing API entirely (development mode)
    if let Ok(price) = std::env::var("FARE_FIXED_PRICE") {
        let price: f64 = price.parse().expect("FARE_FIXED_PRICE must be a number");
        let provider = FixedFareProvider::new(price).expect("FARE_FIXED_PRICE must be non-negative");
        warn!(
            price = provider.price(),
            "using fixed base fare instead of the pricing API"
        );
        serve(addr, provider).await;
        return;
    }

    let mut api_config = FareApiConfig::new();
    if let Ok(url) = std::env::var("FARE_API_URL") {
        api_config = api_config.with_base_url(url);
    }
    if let Ok(secs) = std::env::var("FARE_API_TIMEOUT_SECS") {
        let secs = secs
            .parse()
            .expect("FARE_API_TIMEOUT_SECS must be a whole number of seconds");
        api_config = api_config.with_timeout(secs);
    }
    info!(base_url = %api_config.base_url, "using pricing API");

    let client = BaseFareClient::new(api_config).expect("Failed to create pricing API client");
    let provider = CachedFareProvider::new(client, &CacheConfig::default());

    serve(addr, provider).await;
}

async fn serve<P>(addr: SocketAddr, provider: P)
where
    P: BaseFareProvider + Send + Sync + 'static,
{
    let state = AppState::new(TicketEstimator::new(provider));
    let app = create_router(state);

    info!("Fare estimator listening on http://{addr}");
    info!("  GET  /health   - Health check");
    info!("  POST /estimate - Estimate a ticket price");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");
    axum::serve(listener, app).await.expect("Server error");
}
