use std::cmp::Ordering;

use crate::card::Card;
use crate::error::CompareError;
use crate::evaluator::Evaluator;
use crate::hand::FiveCardHand;
use crate::rank::Rank;
use crate::ranking::Ranking;
use crate::strength::Strength;

/// A hand paired with its evaluated strength.
///
/// This is the comparison surface: [`compare`](Self::compare) is the
/// total three-way ordering, while [`gt`](Self::gt) and
/// [`lt`](Self::lt) are the strict operators that refuse to order two
/// fully tied hands. The capability predicates answer from the raw
/// cards, so a straight-flush hand still reports as both a flush and
/// a straight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedHand {
    hand: FiveCardHand,
    strength: Strength,
}

impl FiveCardHand {
    /// Evaluates this hand. Total: every five-card hand lands in
    /// exactly one category.
    pub fn classify(self) -> ClassifiedHand {
        ClassifiedHand::from(self)
    }
}

impl From<FiveCardHand> for ClassifiedHand {
    fn from(hand: FiveCardHand) -> Self {
        let strength = Strength::from(&hand);
        Self { hand, strength }
    }
}

impl ClassifiedHand {
    pub fn hand(&self) -> &FiveCardHand {
        &self.hand
    }
    pub fn strength(&self) -> Strength {
        self.strength
    }
    /// The category with its defining ranks.
    pub fn ranking(&self) -> Ranking {
        self.strength.ranking()
    }
    /// Kicker ranks, highest first.
    pub fn kickers(&self) -> Vec<Rank> {
        Vec::from(self.strength.kickers())
    }
    /// All five ranks, highest first.
    pub fn ranks(&self) -> [Rank; 5] {
        self.hand.ranks()
    }

    /// For four of a kind, the actual odd card out; `None` otherwise.
    pub fn kicker_card(&self) -> Option<Card> {
        match self.ranking() {
            Ranking::FourOfAKind(quad) => self.hand.iter().find(|c| c.rank() != quad),
            _ => None,
        }
    }

    /// Whether the cards share a suit, whatever the category tag says.
    pub fn is_flush(&self) -> bool {
        Evaluator::from(&self.hand).is_flush()
    }
    /// Whether the ranks form a run, wheel included.
    pub fn is_straight(&self) -> bool {
        Evaluator::from(&self.hand).is_straight()
    }
    pub fn is_straight_flush(&self) -> bool {
        Evaluator::from(&self.hand).is_straight_flush()
    }

    /// Total three-way comparison: category precedence first, then the
    /// category's tie-break ranks. Equal means the two hands are
    /// indistinguishable under the ranking rules.
    pub fn compare(&self, other: &Self) -> Ordering {
        self.strength.cmp(&other.strength)
    }

    /// Strict greater-than. Errs iff the hands tie exactly; two equal
    /// hands are never silently ordered.
    pub fn gt(&self, other: &Self) -> Result<bool, CompareError> {
        match self.compare(other) {
            Ordering::Equal => Err(CompareError::IdenticalStrength),
            ord => Ok(ord == Ordering::Greater),
        }
    }

    /// Strict less-than; the flipped [`gt`](Self::gt).
    pub fn lt(&self, other: &Self) -> Result<bool, CompareError> {
        other.gt(self)
    }
}

impl std::fmt::Display for ClassifiedHand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.hand, self.strength)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suit::Suit;

    fn classify(s: &str) -> ClassifiedHand {
        FiveCardHand::try_from(s).unwrap().classify()
    }

    #[test]
    fn royal_straight_flush() {
        let hand = classify("Ad Kd Qd Jd Td");
        assert_eq!(hand.ranking(), Ranking::StraightFlush(Rank::Ace));
    }

    #[test]
    fn quads_expose_their_kicker_card() {
        let hand = classify("9d 9c 9h 9s 4c");
        assert_eq!(hand.ranking(), Ranking::FourOfAKind(Rank::Nine));
        assert_eq!(hand.kicker_card(), Some(Card::new(Rank::Four, Suit::Club)));
        assert_eq!(classify("As Ah Kd Qc Js").kicker_card(), None);
    }

    #[test]
    fn pair_exposes_kicker_ranks() {
        let hand = classify("As Ah Kd Qc Js");
        assert_eq!(hand.ranking(), Ranking::OnePair(Rank::Ace));
        assert_eq!(hand.kickers(), vec![Rank::King, Rank::Queen, Rank::Jack]);
    }

    #[test]
    fn full_house_ranks() {
        let hand = classify("Qd Qc Qs 7h 7s");
        assert_eq!(hand.ranking(), Ranking::FullHouse(Rank::Queen, Rank::Seven));
    }

    #[test]
    fn flush_exposes_ranks_high_to_low() {
        let hand = classify("7s Qs As 2s Ts");
        assert_eq!(hand.ranking(), Ranking::Flush(Rank::Ace));
        assert_eq!(
            hand.ranks(),
            [Rank::Ace, Rank::Queen, Rank::Ten, Rank::Seven, Rank::Two]
        );
    }

    #[test]
    fn ace_plays_low_and_high() {
        let wheel = classify("Ac 2c 3c 4c 5d");
        assert_eq!(wheel.ranking(), Ranking::Straight(Rank::Five));
        let broadway = classify("Tc Jc Qc Kc Ad");
        assert_eq!(broadway.ranking(), Ranking::Straight(Rank::Ace));
    }

    #[test]
    fn cross_category_precedence() {
        let straight_flush = classify("2c 3c 4c 5c 6c");
        let quads = classify("9d 9c 9h 9s 4c");
        let boat = classify("Qd Qc Qs 7h 7s");
        assert_eq!(straight_flush.gt(&quads), Ok(true));
        assert_eq!(quads.gt(&boat), Ok(true));
        assert_eq!(boat.gt(&straight_flush), Ok(false));
    }

    #[test]
    fn identical_strength_refuses_to_order() {
        let one_pair = classify("As Ah Kd Qc Js");
        assert_eq!(
            one_pair.gt(&one_pair),
            Err(CompareError::IdenticalStrength)
        );
        // same ranks through different suits still tie exactly
        let other = classify("Ad Ac Kh Qs Jh");
        assert_eq!(one_pair.gt(&other), Err(CompareError::IdenticalStrength));
        assert_eq!(one_pair.compare(&other), Ordering::Equal);
    }

    #[test]
    fn gt_and_lt_are_duals() {
        let trips = classify("As Ah Ad Kc Qs");
        let lesser = classify("As Ah Ad Kc Js");
        assert_eq!(trips.gt(&lesser), Ok(true));
        assert_eq!(lesser.lt(&trips), Ok(true));
        assert_eq!(trips.lt(&lesser), Ok(false));
        assert_eq!(lesser.gt(&trips), Ok(false));
    }

    #[test]
    fn two_pair_field_order() {
        let high_pair = classify("As Ah 2d 2c Ks");
        let low_pair = classify("Ks Kh Qd Qc As");
        assert_eq!(high_pair.gt(&low_pair), Ok(true));

        let kicker = classify("As Ah Kd Kc Qs");
        let lesser = classify("Ad Ac Kh Ks Js");
        assert_eq!(kicker.gt(&lesser), Ok(true));
    }

    #[test]
    fn straight_flush_is_also_flush_and_straight() {
        let hand = classify("5d 6d 7d 8d 9d");
        assert_eq!(hand.ranking(), Ranking::StraightFlush(Rank::Nine));
        assert!(hand.is_flush());
        assert!(hand.is_straight());
        assert!(hand.is_straight_flush());

        let plain = classify("7s Qs As 2s Ts");
        assert!(plain.is_flush());
        assert!(!plain.is_straight_flush());
    }
}
