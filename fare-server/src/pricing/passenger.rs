//! Per-passenger fare calculation.
//!
//! Each passenger's fare is derived in a fixed order:
//!
//! 1. Reject negative ages.
//! 2. Family discount: a card holder whose surname is shared by someone else
//!    in the party pays a fixed fraction of the base fare, and nothing else
//!    applies.
//! 3. Category fare from staff status and age bracket. Staff, infants and
//!    young children pay a flat amount; everyone else pays a fraction of the
//!    base fare.
//! 4. Date proximity adjustment, for proportional fares only.

use chrono::{DateTime, Duration, Local};

use crate::domain::{DiscountCard, Fare, InvalidInput, Passenger};

const FAMILY_RATE: f64 = 0.7;

const STAFF_FARE: Fare = 1.0;
const INFANT_FARE: Fare = 0.0;
const YOUNG_CHILD_FARE: Fare = 9.0;

const INFANT_MAX_AGE: f64 = 1.0;
const YOUNG_CHILD_MAX_AGE: f64 = 4.0;
const CHILD_MAX_AGE: f64 = 17.0;
const SENIOR_MIN_AGE: f64 = 70.0;

const CHILD_RATE: f64 = 0.6;
const SENIOR_RATE: f64 = 0.8;
const SENIOR_CARD_REDUCTION: f64 = 0.2;
const ADULT_RATE: f64 = 1.2;

const LAST_MINUTE_RATE: f64 = 0.8;
const EARLY_BOOKING_REDUCTION: f64 = 0.2;
const DAILY_STEP: f64 = 0.02;
const DAILY_STEP_PIVOT_DAYS: f64 = 20.0;

const LAST_MINUTE_WINDOW_HOURS: i64 = 6;
const EARLY_BOOKING_DAYS: i64 = 30;
const SLIDING_BAND_START_DAYS: i64 = 5;

const MILLIS_PER_DAY: f64 = 24.0 * 60.0 * 60.0 * 1000.0;

/// Fare derived from the category rules, before date proximity.
#[derive(Debug, Clone, Copy, PartialEq)]
enum CategoryFare {
    /// Final as-is; date proximity does not apply.
    Flat(Fare),
    /// Subject to the date proximity adjustment.
    Proportional(Fare),
}

/// Price a group of passengers against the current wall clock.
pub fn price_for(
    base_fare: Fare,
    passengers: &[Passenger],
    travel_date: DateTime<Local>,
) -> Result<Fare, InvalidInput> {
    price_for_at(base_fare, passengers, travel_date, Local::now())
}

/// Price a group of passengers against an explicit reference instant.
///
/// Returns the sum of the individual fares, or the first passenger error
/// encountered in input order.
pub fn price_for_at(
    base_fare: Fare,
    passengers: &[Passenger],
    travel_date: DateTime<Local>,
    now: DateTime<Local>,
) -> Result<Fare, InvalidInput> {
    let lead_time = travel_date.signed_duration_since(now);

    passengers.iter().try_fold(0.0, |total, passenger| -> Result<Fare, InvalidInput> {
        let fare = passenger_fare(base_fare, passenger, passengers, lead_time)?;
        Ok(total + fare)
    })
}

/// Fare for one passenger travelling with `party` (which includes them).
fn passenger_fare(
    base_fare: Fare,
    passenger: &Passenger,
    party: &[Passenger],
    lead_time: Duration,
) -> Result<Fare, InvalidInput> {
    // Written negated so that NaN is rejected too.
    if !(passenger.age >= 0.0) {
        return Err(InvalidInput::AGE);
    }

    if qualifies_for_family(passenger, party) {
        return Ok(base_fare * FAMILY_RATE);
    }

    let fare = match category_fare(base_fare, passenger) {
        CategoryFare::Flat(fare) => fare,
        CategoryFare::Proportional(fare) => adjust_for_lead_time(fare, base_fare, lead_time),
    };

    Ok(fare)
}

/// A family card holder qualifies when at least one other passenger shares
/// their (non-blank) last name.
fn qualifies_for_family(passenger: &Passenger, party: &[Passenger]) -> bool {
    if !passenger.holds(DiscountCard::Family) || !passenger.has_last_name() {
        return false;
    }

    party
        .iter()
        .filter(|p| p.last_name == passenger.last_name)
        .count()
        > 1
}

fn category_fare(base_fare: Fare, passenger: &Passenger) -> CategoryFare {
    let age = passenger.age;

    if passenger.holds(DiscountCard::StaffCard) {
        CategoryFare::Flat(STAFF_FARE)
    } else if age < INFANT_MAX_AGE {
        CategoryFare::Flat(INFANT_FARE)
    } else if age > 0.0 && age < YOUNG_CHILD_MAX_AGE {
        CategoryFare::Flat(YOUNG_CHILD_FARE)
    } else if age <= CHILD_MAX_AGE {
        CategoryFare::Proportional(base_fare * CHILD_RATE)
    } else if age >= SENIOR_MIN_AGE {
        let mut fare = base_fare * SENIOR_RATE;
        if passenger.holds(DiscountCard::Senior) {
            fare -= base_fare * SENIOR_CARD_REDUCTION;
        }
        CategoryFare::Proportional(fare)
    } else {
        CategoryFare::Proportional(base_fare * ADULT_RATE)
    }
}

/// Adjust a proportional fare by how far ahead of departure it is bought.
///
/// - within 6 hours (or already departed): 20% off the fare so far
/// - 30 days or more: minus 20% of the base fare
/// - more than 5 days: a sliding 2%-per-day adjustment, from -20% of the base
///   fare at 30 days out to +30% at 5 days out
/// - otherwise: plus the full base fare
///
/// Day thresholds are fixed 24-hour spans from `now`, not calendar days, so
/// a booking window crossing a DST change is not shifted by an hour.
fn adjust_for_lead_time(fare: Fare, base_fare: Fare, lead_time: Duration) -> Fare {
    if lead_time <= Duration::hours(LAST_MINUTE_WINDOW_HOURS) {
        fare * LAST_MINUTE_RATE
    } else if lead_time >= Duration::days(EARLY_BOOKING_DAYS) {
        fare - base_fare * EARLY_BOOKING_REDUCTION
    } else if lead_time > Duration::days(SLIDING_BAND_START_DAYS) {
        let diff_days = (lead_time.num_milliseconds().abs() as f64 / MILLIS_PER_DAY).ceil();
        fare + (DAILY_STEP_PIVOT_DAYS - diff_days) * DAILY_STEP * base_fare
    } else {
        fare + base_fare
    }
}
