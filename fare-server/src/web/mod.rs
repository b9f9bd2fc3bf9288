//! Web layer for the fare estimator.
//!
//! Parses JSON requests into domain types and exposes the estimator over
//! HTTP.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
