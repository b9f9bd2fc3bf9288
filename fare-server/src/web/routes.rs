//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{Level, debug, warn};

use crate::base_fare::BaseFareProvider;
use crate::domain::{EstimationFailed, TripRequest};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router<P>(state: AppState<P>) -> Router
where
    P: BaseFareProvider + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route("/estimate", post(estimate::<P>))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Estimate the ticket price for a trip.
async fn estimate<P>(
    State(state): State<AppState<P>>,
    body: Bytes,
) -> Result<Json<EstimateResponse>, AppError>
where
    P: BaseFareProvider + Send + Sync + 'static,
{
    // Parse JSON manually so a bad body is reported in our own error format
    let req: EstimateRequest = serde_json::from_slice(&body).map_err(|e| AppError::BadRequest {
        message: format!("Invalid JSON: {e}"),
    })?;

    let trip = TripRequest::try_from(req).map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })?;

    let price = state.estimator.estimate(&trip).await?;

    Ok(Json(EstimateResponse { price }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Unprocessable { message: String },
}

impl From<EstimationFailed> for AppError {
    fn from(e: EstimationFailed) -> Self {
        AppError::Unprocessable {
            message: e.to_string(),
        }
    }
}

impl AppError {
    /// Level to log the rejection at. Estimation failures were already logged
    /// with their cause by the estimator.
    fn log_level(&self) -> Level {
        match self {
            AppError::BadRequest { .. } => Level::WARN,
            AppError::Unprocessable { .. } => Level::DEBUG,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let level = self.log_level();
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Unprocessable { message } => (StatusCode::UNPROCESSABLE_ENTITY, message),
        };

        if level == Level::WARN {
            warn!(%status, %message, "request rejected");
        } else {
            debug!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
