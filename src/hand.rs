use std::collections::BTreeMap;

use crate::card::Card;
use crate::error::HandError;
use crate::rank::Rank;
use crate::suit::Suit;

/// Exactly five cards, held in descending rank order.
///
/// Construction validates the count and nothing else; the aggregate
/// views ([`rank_counts`](Self::rank_counts),
/// [`suit_counts`](Self::suit_counts)) are what classification reads.
/// The hand is immutable once built.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct FiveCardHand {
    cards: [Card; 5],
}

impl FiveCardHand {
    pub const SIZE: usize = 5;

    /// Builds a hand from exactly five cards.
    ///
    /// Fails with [`HandError::NotEnoughCards`] or
    /// [`HandError::TooManyCards`] on any other count. Cards are
    /// stored high-to-low by rank; equal ranks keep their input order.
    pub fn new(cards: Vec<Card>) -> Result<Self, HandError> {
        match cards.len() {
            n if n < Self::SIZE => Err(HandError::NotEnoughCards { got: n }),
            n if n > Self::SIZE => Err(HandError::TooManyCards { got: n }),
            _ => {
                let mut cards = [cards[0], cards[1], cards[2], cards[3], cards[4]];
                cards.sort_by_key(|c| std::cmp::Reverse(c.rank()));
                Ok(Self { cards })
            }
        }
    }

    /// The five cards, highest rank first.
    pub fn cards(&self) -> &[Card; 5] {
        &self.cards
    }

    /// The five cards, highest rank first.
    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }

    /// The five ranks, highest first.
    pub fn ranks(&self) -> [Rank; 5] {
        self.cards.map(|c| c.rank())
    }

    /// Occurrences per rank; only present ranks are keys.
    pub fn rank_counts(&self) -> BTreeMap<Rank, usize> {
        let mut counts = BTreeMap::new();
        for card in self.cards {
            *counts.entry(card.rank()).or_insert(0) += 1;
        }
        counts
    }

    /// Occurrences per suit; only present suits are keys.
    pub fn suit_counts(&self) -> BTreeMap<Suit, usize> {
        let mut counts = BTreeMap::new();
        for card in self.cards {
            *counts.entry(card.suit()).or_insert(0) += 1;
        }
        counts
    }
}

impl<'a> IntoIterator for &'a FiveCardHand {
    type Item = Card;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Card>>;
    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter().copied()
    }
}

impl TryFrom<Vec<Card>> for FiveCardHand {
    type Error = HandError;
    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Self::new(cards)
    }
}

/// str isomorphism, e.g. `"9d 9c 9h 9s 4c"`
impl TryFrom<&str> for FiveCardHand {
    type Error = HandError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(Card::parse(s)?)
    }
}

/// u64 card-set representation
///
/// We OR the cards to get the bitstring the evaluator shreds.
impl From<&FiveCardHand> for u64 {
    fn from(hand: &FiveCardHand) -> u64 {
        hand.cards.iter().map(|c| u64::from(*c)).fold(0, |a, b| a | b)
    }
}

impl std::fmt::Display for FiveCardHand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in self.cards {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_short_hands() {
        for n in 0..5u8 {
            let cards = (0..n).map(Card::from).collect::<Vec<_>>();
            assert_eq!(
                FiveCardHand::new(cards),
                Err(HandError::NotEnoughCards { got: n as usize })
            );
        }
    }

    #[test]
    fn rejects_long_hands() {
        for n in 6..9u8 {
            let cards = (0..n).map(Card::from).collect::<Vec<_>>();
            assert_eq!(
                FiveCardHand::new(cards),
                Err(HandError::TooManyCards { got: n as usize })
            );
        }
    }

    #[test]
    fn iterates_high_to_low() {
        let hand = FiveCardHand::try_from("2c Ts Jc As 7d").unwrap();
        let ranks = hand.ranks();
        assert_eq!(
            ranks,
            [Rank::Ace, Rank::Jack, Rank::Ten, Rank::Seven, Rank::Two]
        );
        // restartable: same order every time
        assert_eq!(
            hand.iter().collect::<Vec<_>>(),
            hand.iter().collect::<Vec<_>>()
        );
    }

    #[test]
    fn counts_ranks() {
        let hand = FiveCardHand::try_from("9d 9c 9h 9s 4c").unwrap();
        let counts = hand.rank_counts();
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[&Rank::Nine], 4);
        assert_eq!(counts[&Rank::Four], 1);
    }

    #[test]
    fn counts_suits() {
        let hand = FiveCardHand::try_from("7s Qs As 2s Ts").unwrap();
        let counts = hand.suit_counts();
        assert_eq!(counts.len(), 1);
        assert_eq!(counts[&Suit::Spade], 5);

        let hand = FiveCardHand::try_from("7s Qh Ad 2c Ts").unwrap();
        let counts = hand.suit_counts();
        assert_eq!(counts.len(), 4);
        assert_eq!(counts[&Suit::Spade], 2);
    }

    #[test]
    fn bad_notation_propagates() {
        assert!(matches!(
            FiveCardHand::try_from("9d 9c 9h 9s 4x"),
            Err(HandError::Parse(_))
        ));
    }

    #[test]
    fn card_set_has_five_bits() {
        let hand = FiveCardHand::try_from("As Kh Qd Jc 9s").unwrap();
        assert_eq!(u64::from(&hand).count_ones(), 5);
    }
}
