//! Train ticket fare estimator.
//!
//! Prices a trip for a group of passengers from a base fare quoted by an
//! external pricing API, applying age, discount card, booking lead time and
//! group discount rules.

pub mod base_fare;
pub mod cache;
pub mod clock;
pub mod domain;
pub mod estimator;
pub mod pricing;
pub mod validate;
pub mod web;
