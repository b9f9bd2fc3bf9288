//! Fare rules.
//!
//! Pure, synchronous functions: per-passenger pricing followed by whole-group
//! discounts. Neither holds state, so both are safe to call concurrently.

mod group;
mod passenger;

pub use group::apply_group_discounts;
pub use passenger::{price_for, price_for_at};
