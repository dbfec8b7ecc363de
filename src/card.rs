use crate::error::ParseError;
use crate::rank::Rank;
use crate::suit::Suit;

/// A playing card: one of 52 `(Rank, Suit)` pairs.
///
/// Cards compare for equality only. There is intentionally no `Ord`
/// here, because suits carry no strength; order cards through
/// [`Card::rank`] when sorting.
///
/// # Parsing
///
/// Cards parse from two-character strings like `"As"` (ace of spades)
/// or `"Tc"` (ten of clubs). Use [`Card::parse`] for several at once.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Parses whitespace-separated card notations into a vector of cards.
    pub fn parse(s: &str) -> Result<Vec<Self>, ParseError> {
        s.split_whitespace().map(Self::try_from).collect()
    }
}

impl From<(Rank, Suit)> for Card {
    fn from((rank, suit): (Rank, Suit)) -> Self {
        Self { rank, suit }
    }
}

/// u8 isomorphism
///
/// Each card is mapped to its location in a sorted deck 0-51,
/// `rank * 4 + suit`.
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        u8::from(c.rank) * 4 + u8::from(c.suit)
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        Self {
            rank: Rank::from(n / 4),
            suit: Suit::from(n % 4),
        }
    }
}

/// u64 injection
///
/// Each card is a single bit turned on, the set-membership encoding
/// used by the evaluator's card-set arithmetic.
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}

/// str isomorphism
impl TryFrom<&str> for Card {
    type Error = ParseError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        match s.len() {
            // two bytes are a card only if they are two chars
            2 if s.is_char_boundary(1) => {
                let rank = Rank::try_from(&s[0..1])?;
                let suit = Suit::try_from(&s[1..2])?;
                Ok(Card::from((rank, suit)))
            }
            _ => Err(ParseError::BadCard(s.to_string())),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_rank_suit() {
        for n in 0..52 {
            let card = Card::from(n);
            assert_eq!(card, Card::from((card.rank(), card.suit())));
        }
    }

    #[test]
    fn bijective_u8() {
        for n in 0..52 {
            assert_eq!(n, u8::from(Card::from(n)));
        }
    }

    #[test]
    fn bijective_str() {
        let card = Card::new(Rank::Ten, Suit::Spade);
        assert_eq!(card, Card::try_from("Ts").unwrap());
        assert_eq!(card.to_string(), "Ts");
        assert!(Card::try_from("T").is_err());
        assert!(Card::try_from("1s").is_err());
    }

    #[test]
    fn rejects_non_ascii_notation() {
        // a single two-byte char must not slip past the length check
        assert_eq!(
            Card::try_from("é"),
            Err(ParseError::BadCard("é".to_string()))
        );
        assert!(Card::try_from("A♠").is_err());
        assert!(Card::parse("As Kh é").is_err());
    }

    #[test]
    fn parses_many() {
        let cards = Card::parse("As Kh Qd").unwrap();
        assert_eq!(
            cards,
            vec![
                Card::new(Rank::Ace, Suit::Spade),
                Card::new(Rank::King, Suit::Heart),
                Card::new(Rank::Queen, Suit::Diamond),
            ]
        );
    }

    #[test]
    fn singleton_u64() {
        for n in 0..52 {
            assert_eq!(u64::from(Card::from(n)).count_ones(), 1);
        }
    }
}
