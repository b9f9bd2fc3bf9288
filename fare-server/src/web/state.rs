//! Application state for the web layer.

use std::sync::Arc;

use crate::estimator::TicketEstimator;

/// Shared application state.
///
/// Generic over the base fare provider so the same router serves both the
/// live pricing API and a fixed development price.
pub struct AppState<P> {
    /// Ticket estimator
    pub estimator: Arc<TicketEstimator<P>>,
}

impl<P> AppState<P> {
    /// Create a new app state.
    pub fn new(estimator: TicketEstimator<P>) -> Self {
        Self {
            estimator: Arc::new(estimator),
        }
    }
}

// Manual impl: the derive would demand `P: Clone`.
impl<P> Clone for AppState<P> {
    fn clone(&self) -> Self {
        Self {
            estimator: Arc::clone(&self.estimator),
        }
    }
}
