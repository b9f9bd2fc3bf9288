//! Whole-group discounts applied after per-passenger pricing.

use crate::domain::{DiscountCard, Fare, Passenger};

const COUPLE_REDUCTION: f64 = 0.2;
const HALF_COUPLE_REDUCTION: f64 = 0.1;

/// Apply couple and half-couple discounts to a group total.
///
/// - Two adults, at least one holding a couple card: minus 20% of the base
///   fare per person.
/// - One adult holding a half-couple card: minus 10% of the base fare.
///
/// Any other group composition returns `total_fare` unchanged. The two rules
/// are exclusive on group size. No validation happens here.
pub fn apply_group_discounts(total_fare: Fare, base_fare: Fare, passengers: &[Passenger]) -> Fare {
    let has_minor = passengers.iter().any(Passenger::is_minor);
    if has_minor {
        return total_fare;
    }

    let any_holds = |card| passengers.iter().any(|p| p.holds(card));

    match passengers.len() {
        2 if any_holds(DiscountCard::Couple) => total_fare - base_fare * COUPLE_REDUCTION * 2.0,
        1 if any_holds(DiscountCard::HalfCouple) => total_fare - base_fare * HALF_COUPLE_REDUCTION,
        _ => total_fare,
    }
}
