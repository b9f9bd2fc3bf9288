//! Passengers and the discount cards they may hold.

use std::collections::HashSet;

use serde::Deserialize;

/// A named eligibility credential that changes which pricing rule applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum DiscountCard {
    /// Senior railcard, only meaningful for passengers aged 70 or over.
    Senior,
    /// Rail staff travel card. Staff travel for a flat token fare.
    StaffCard,
    /// Couple card, applied as a group discount to a party of two adults.
    Couple,
    /// Half-couple card, applied as a group discount to a lone adult.
    HalfCouple,
    /// Family card, shared by passengers travelling with the same surname.
    Family,
}

/// Age below which a passenger counts as a minor for group discounts.
pub const ADULT_AGE: f64 = 18.0;

/// A single traveller.
///
/// Ages are real numbers so that infants can be described in fractions of a
/// year. The last name may be empty, in which case the passenger never
/// qualifies for the family discount.
#[derive(Debug, Clone, PartialEq)]
pub struct Passenger {
    pub age: f64,
    pub last_name: String,
    pub discounts: HashSet<DiscountCard>,
}

impl Passenger {
    /// Create a passenger holding the given cards.
    pub fn new(
        age: f64,
        last_name: impl Into<String>,
        discounts: impl IntoIterator<Item = DiscountCard>,
    ) -> Self {
        Self {
            age,
            last_name: last_name.into(),
            discounts: discounts.into_iter().collect(),
        }
    }

    /// Whether this passenger holds `card`.
    pub fn holds(&self, card: DiscountCard) -> bool {
        self.discounts.contains(&card)
    }

    /// Whether this passenger is under 18.
    pub fn is_minor(&self) -> bool {
        self.age < ADULT_AGE
    }

    /// Whether the last name has any non-whitespace content.
    pub fn has_last_name(&self) -> bool {
        !self.last_name.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holds_cards() {
        let p = Passenger::new(30.0, "Martin", [DiscountCard::Couple]);
        assert!(p.holds(DiscountCard::Couple));
        assert!(!p.holds(DiscountCard::Family));
    }

    #[test]
    fn duplicate_cards_collapse() {
        let p = Passenger::new(
            30.0,
            "Martin",
            [DiscountCard::Senior, DiscountCard::Senior],
        );
        assert_eq!(p.discounts.len(), 1);
    }

    #[test]
    fn minor_boundary() {
        assert!(Passenger::new(17.9, "", []).is_minor());
        assert!(!Passenger::new(18.0, "", []).is_minor());
    }

    #[test]
    fn blank_last_name() {
        assert!(!Passenger::new(30.0, "", []).has_last_name());
        assert!(!Passenger::new(30.0, "   ", []).has_last_name());
        assert!(Passenger::new(30.0, " Dupont ", []).has_last_name());
    }

    #[test]
    fn deserialize_card_names() {
        let cards: Vec<DiscountCard> =
            serde_json::from_str(r#"["Senior", "StaffCard", "HalfCouple"]"#).unwrap();
        assert_eq!(
            cards,
            vec![
                DiscountCard::Senior,
                DiscountCard::StaffCard,
                DiscountCard::HalfCouple
            ]
        );

        assert!(serde_json::from_str::<DiscountCard>(r#""Gold""#).is_err());
    }
}
